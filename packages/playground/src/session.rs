//! # Playground session
//!
//! Coordinates the full input → preview lifecycle:
//! Normalize → Inject styles → Evaluate.
//!
//! Every input change runs the chain in that fixed order: the processed
//! module is committed before the style handle is swapped and the evaluator
//! re-runs. Changes supersede each other wholesale; a later change's style
//! handle replaces the earlier one's container before the old handle is
//! dropped, so no stale styles and no duplicate containers ever coexist.

use crate::component::{ComponentRecord, SnippetSave};
use crate::preview::{LiveEvaluator, PreviewAdapter, PreviewOutput, PreviewState};
use crate::templates::{template_named, DEFAULT_VIEWPORT_WIDTH};
use sasta_normalizer::{Normalizer, ProcessedModule};
use sasta_styles::{PreviewTheme, ScopedStyleHandle, StyleRegistry};
use tracing::{debug, instrument};

/// Callback invoked when the session saves.
pub type SaveCallback = Box<dyn FnMut(&SnippetSave)>;

/// One live editing/preview session.
pub struct PlaygroundSession<E: LiveEvaluator> {
    normalizer: Normalizer,
    registry: StyleRegistry,
    adapter: PreviewAdapter<E>,

    code: String,
    custom_styles: String,
    theme: PreviewTheme,
    viewport_width: String,

    module: Option<ProcessedModule>,
    style_handle: Option<ScopedStyleHandle>,
    state: PreviewState,
    output: Option<PreviewOutput>,

    on_save: Option<SaveCallback>,
}

impl<E: LiveEvaluator> PlaygroundSession<E> {
    /// Create an idle session; nothing runs until the first input arrives.
    pub fn new(evaluator: E) -> Self {
        Self {
            normalizer: Normalizer::new(),
            registry: StyleRegistry::new(),
            adapter: PreviewAdapter::new(evaluator),
            code: String::new(),
            custom_styles: String::new(),
            theme: PreviewTheme::default(),
            viewport_width: DEFAULT_VIEWPORT_WIDTH.to_owned(),
            module: None,
            style_handle: None,
            state: PreviewState::Idle,
            output: None,
            on_save: None,
        }
    }

    /// Create a session and immediately run the chain on the given snippet.
    pub fn with_snippet(evaluator: E, code: impl Into<String>, styles: impl Into<String>) -> Self {
        let mut session = Self::new(evaluator);
        session.code = code.into();
        session.custom_styles = styles.into();
        session.recompute();
        session
    }

    /// Register the save callback (edit mode).
    pub fn on_save(&mut self, callback: SaveCallback) {
        self.on_save = Some(callback);
    }

    pub fn set_code(&mut self, code: impl Into<String>) {
        self.code = code.into();
        self.recompute();
    }

    pub fn set_custom_styles(&mut self, styles: impl Into<String>) {
        self.custom_styles = styles.into();
        self.recompute();
    }

    pub fn set_theme(&mut self, theme: PreviewTheme) {
        self.theme = theme;
        self.recompute();
    }

    /// Viewport width only resizes the preview; it does not re-evaluate.
    pub fn set_viewport_width(&mut self, width: impl Into<String>) {
        self.viewport_width = width.into();
    }

    /// Load a built-in template as the current code. Returns false for an
    /// unknown name.
    pub fn load_template(&mut self, name: &str) -> bool {
        match template_named(name) {
            Some(template) => {
                self.set_code(template.source);
                true
            }
            None => false,
        }
    }

    /// Load code and styles from a persisted component record.
    pub fn load_record(&mut self, record: &ComponentRecord) {
        self.code = record.code.clone();
        self.custom_styles = record.styles.clone();
        self.recompute();
    }

    /// Emit the current `{code, styles}` pair, invoking the save callback if
    /// one is registered.
    pub fn save(&mut self) -> SnippetSave {
        let payload = SnippetSave {
            code: self.code.clone(),
            styles: self.custom_styles.clone(),
        };
        if let Some(callback) = self.on_save.as_mut() {
            callback(&payload);
        }
        payload
    }

    /// Tear down everything the session injected.
    ///
    /// Equivalent to unmounting the owning view: the style container is
    /// removed and the preview goes back to idle.
    pub fn unmount(&mut self) {
        self.style_handle = None;
        self.module = None;
        self.output = None;
        self.state = PreviewState::Idle;
    }

    #[instrument(skip(self), fields(code_len = self.code.len(), theme = self.theme.name()))]
    fn recompute(&mut self) {
        // 1. Commit the processed module before any side effects run.
        let module = self.normalizer.normalize(&self.code);
        self.module = Some(module.clone());

        // 2. Swap the injected styles. `apply` removes the old container
        //    before inserting, and the superseded handle drops afterwards as
        //    a no-op.
        let new_handle = self.registry.apply(self.theme, &self.custom_styles);
        self.style_handle = Some(new_handle);

        // 3. Re-evaluate against the committed module.
        self.state = PreviewState::Evaluating;
        let output = self.adapter.present(&module);
        self.state = match output {
            PreviewOutput::Rendered(_) => PreviewState::Rendered,
            PreviewOutput::ErrorBanner { .. } => PreviewState::Errored,
        };
        debug!(state = ?self.state, "Preview pass complete");
        self.output = Some(output);
    }

    pub fn state(&self) -> PreviewState {
        self.state
    }

    pub fn module(&self) -> Option<&ProcessedModule> {
        self.module.as_ref()
    }

    pub fn output(&self) -> Option<&PreviewOutput> {
        self.output.as_ref()
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn custom_styles(&self) -> &str {
        &self.custom_styles
    }

    pub fn theme(&self) -> PreviewTheme {
        self.theme
    }

    pub fn viewport_width(&self) -> &str {
        &self.viewport_width
    }

    /// The CSS currently injected for this session.
    pub fn injected_css(&self) -> String {
        self.registry.rendered_css()
    }

    /// Number of live style containers; 1 while mounted, 0 after unmount.
    pub fn style_container_count(&self) -> usize {
        self.registry.container_count()
    }
}
