pub mod registry;
pub mod sheet;
pub mod theme;
pub mod utility;

#[cfg(test)]
mod tests_registry;

pub use registry::{ScopedStyleHandle, StyleContainer, StyleRegistry, STYLE_CONTAINER_ID};
pub use sheet::build_style_sheet;
pub use theme::{PreviewTheme, ThemePalette};
pub use utility::UTILITY_RULES;
