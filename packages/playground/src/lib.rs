pub mod component;
pub mod editor_theme;
pub mod preview;
pub mod scope;
pub mod session;
pub mod templates;

#[cfg(test)]
mod tests_session;

pub use component::{ComponentRecord, SnippetSave};
pub use editor_theme::{EditorTheme, TokenColor, DARK_EDITOR_THEME};
pub use preview::{
    EvalFailure, LiveEvaluator, PreviewAdapter, PreviewOutput, PreviewState, RenderedPreview,
};
pub use scope::{default_scope, scope_binding, ScopeBinding, ScopeExportKind};
pub use session::{PlaygroundSession, SaveCallback};
pub use templates::{
    builtin_templates, preset_for_width, template_named, SnippetTemplate, ViewportPreset,
    DEFAULT_VIEWPORT_WIDTH, VIEWPORT_PRESETS,
};
