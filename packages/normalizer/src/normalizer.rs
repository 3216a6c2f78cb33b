//! The snippet normalization pipeline.
//!
//! Takes arbitrary admin-supplied snippet text and produces a unit the
//! embedded evaluator can execute: module syntax stripped, a component name
//! resolved (and de-conflicted with injected scope names), and a terminal
//! `render(...)` call guaranteed to be present.
//!
//! The pipeline is a fixed ordered fallback chain. Every failure path ends in
//! a renderable placeholder; nothing escapes to the caller as an error.

use crate::detect::SnippetDetector;
use crate::error::NormalizeResult;
use crate::reserved::resolve_collision;
use crate::strip::ModuleSyntaxStripper;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, instrument};

/// Placeholder shown when the snippet is empty.
pub const EMPTY_PLACEHOLDER: &str = "render(<div>Type some JSX here</div>)";

/// Placeholder shown when nothing renderable could be detected.
pub const NO_CONTENT_PLACEHOLDER: &str =
    "render(<div className=\"p-4 bg-light text-center\">Add some JSX or a component definition</div>)";

/// Diagnostic that accompanies [`NO_CONTENT_PLACEHOLDER`].
pub const NO_CONTENT_DIAGNOSTIC: &str =
    "No valid JSX or component found. Add some JSX or a component definition.";

/// Name given to the synthesized wrapper around undeclared JSX.
pub const WRAPPER_COMPONENT_NAME: &str = "CustomComponent";

/// Normalized, always-evaluable snippet text.
///
/// Recomputed wholesale whenever the raw code changes; `code` always ends in
/// a `render(...)` invocation and is never empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessedModule {
    /// The evaluable unit handed to the live evaluator.
    pub code: String,

    /// User-visible diagnostic, set only when the pipeline fell back to a
    /// placeholder it wants the author to know about.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diagnostic: Option<String>,
}

impl ProcessedModule {
    pub fn clean(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            diagnostic: None,
        }
    }

    pub fn with_diagnostic(code: impl Into<String>, diagnostic: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            diagnostic: Some(diagnostic.into()),
        }
    }
}

/// Normalizes raw snippet text into [`ProcessedModule`]s.
pub struct Normalizer {
    stripper: ModuleSyntaxStripper,
    detector: SnippetDetector,
}

impl Normalizer {
    pub fn new() -> Self {
        Self {
            stripper: ModuleSyntaxStripper::new(),
            detector: SnippetDetector::new(),
        }
    }

    /// Normalize raw snippet text.
    ///
    /// Never fails: internal errors are captured as the diagnostic and a
    /// fixed error placeholder is substituted for the output.
    #[instrument(skip(self, raw_code), fields(len = raw_code.len()))]
    pub fn normalize(&self, raw_code: &str) -> ProcessedModule {
        match self.run_pipeline(raw_code) {
            Ok(module) => module,
            Err(e) => {
                error!(error = %e, "Snippet pipeline failed, substituting error placeholder");
                let message = e.to_string();
                ProcessedModule::with_diagnostic(error_placeholder(&message), message)
            }
        }
    }

    fn run_pipeline(&self, raw_code: &str) -> NormalizeResult<ProcessedModule> {
        // 1. Empty input renders the canned hint.
        if raw_code.trim().is_empty() {
            return Ok(ProcessedModule::clean(EMPTY_PLACEHOLDER));
        }

        // 2. Remove module syntax the evaluator cannot execute.
        let stripped = self.stripper.strip(raw_code);

        // 3. An explicit render call is authoritative; skip all detection.
        if self.detector.has_render_call(&stripped) {
            debug!("Snippet already calls render, passing through");
            return Ok(ProcessedModule::clean(
                self.detector.reformat_render_call(&stripped),
            ));
        }

        // 4. Look for a declared component.
        let mut source = stripped;
        let mut name = self
            .detector
            .detect_component_name(&source)
            .map(str::to_owned);

        // 5. Undeclared JSX embedded in other statements gets a wrapper
        //    function. Directly wrappable JSX (text beginning with `<`) is
        //    left for the render-call synthesis below.
        if name.is_none() && self.detector.has_jsx(&source) && !source.trim_start().starts_with('<')
        {
            source = wrap_bare_jsx(&source);
            name = Some(WRAPPER_COMPONENT_NAME.to_owned());
        }

        // 6. De-conflict with injected scope names. Soft failure keeps the
        //    original name.
        if let Some(found) = name.take() {
            let (rewritten, resolved) = resolve_collision(source, found);
            source = rewritten;
            name = Some(resolved);
        }

        // 7. Synthesize the terminal render call.
        let has_jsx = self.detector.has_jsx(&source);
        let module = match (name, has_jsx) {
            (Some(component), _) => {
                // With JSX this is the normal case; without it, rendering the
                // declared component is still the best available attempt.
                ProcessedModule::clean(format!("{}\n\nrender(<{} />)", source, component))
            }
            (None, true) => {
                let trimmed = source.trim();
                if self.detector.is_single_complete_element(trimmed) {
                    ProcessedModule::clean(format!("render({})", trimmed))
                } else {
                    ProcessedModule::clean(format!("render(<>{}</>)", trimmed))
                }
            }
            (None, false) => {
                debug!("Nothing renderable detected, falling back to placeholder");
                ProcessedModule::with_diagnostic(NO_CONTENT_PLACEHOLDER, NO_CONTENT_DIAGNOSTIC)
            }
        };

        Ok(module)
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixed-form placeholder carrying an internal error message.
pub fn error_placeholder(message: &str) -> String {
    format!(
        "render(<div className=\"p-4 bg-danger text-white\">Error: {}</div>)",
        message
    )
}

fn wrap_bare_jsx(source: &str) -> String {
    format!(
        "function {}() {{\n  return (\n    {}\n  );\n}}",
        WRAPPER_COMPONENT_NAME, source
    )
}
