//! Evaluator boundary and preview state machine.
//!
//! The adapter is a thin seam between normalized snippet text and whatever
//! host actually executes it (in the shipped app, an in-browser expression
//! evaluator). It performs no transformation: it forwards the code, the fixed
//! scope table, and the editor theme, and converts any reported failure into
//! a display-only error element. Nothing it does can throw into the hosting
//! view.

use crate::editor_theme::{EditorTheme, DARK_EDITOR_THEME};
use crate::scope::{default_scope, ScopeBinding};
use sasta_normalizer::ProcessedModule;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, warn};

/// Failure reported by the embedded evaluator.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EvalFailure {
    #[error("SyntaxError: {message}")]
    Syntax { message: String },

    #[error("RuntimeError: {message}")]
    Runtime { message: String },
}

/// Successfully evaluated preview content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedPreview {
    pub markup: String,
}

/// What the preview region shows after an evaluation pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum PreviewOutput {
    Rendered(RenderedPreview),
    /// Inline error element; the page around it keeps working.
    ErrorBanner { message: String },
}

/// Lifecycle of the preview region.
///
/// `Idle → Evaluating → {Rendered | Errored}`, re-entering `Evaluating` on
/// every input change. No retry: a new input simply supersedes the old
/// result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PreviewState {
    Idle,
    Evaluating,
    Rendered,
    Errored,
}

/// Host that executes normalized snippet text as a non-module script.
pub trait LiveEvaluator {
    fn evaluate(
        &mut self,
        code: &str,
        scope: &[ScopeBinding],
        theme: &EditorTheme,
    ) -> Result<RenderedPreview, EvalFailure>;
}

/// Forwards modules to the evaluator and absorbs its failures.
pub struct PreviewAdapter<E> {
    evaluator: E,
    theme: EditorTheme,
}

impl<E: LiveEvaluator> PreviewAdapter<E> {
    pub fn new(evaluator: E) -> Self {
        Self {
            evaluator,
            theme: DARK_EDITOR_THEME,
        }
    }

    /// Hand the module to the evaluator and report what to display.
    pub fn present(&mut self, module: &ProcessedModule) -> PreviewOutput {
        match self
            .evaluator
            .evaluate(&module.code, default_scope(), &self.theme)
        {
            Ok(rendered) => {
                debug!("Evaluator produced preview content");
                PreviewOutput::Rendered(rendered)
            }
            Err(failure) => {
                warn!(error = %failure, "Evaluator reported failure, showing inline error");
                PreviewOutput::ErrorBanner {
                    message: failure.to_string(),
                }
            }
        }
    }

    pub fn theme(&self) -> &EditorTheme {
        &self.theme
    }
}
