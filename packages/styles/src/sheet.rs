//! Style-sheet assembly.
//!
//! Builds the full injected text for one `(theme, custom_styles)` pair.
//! Assembly is pure: identical inputs always produce byte-identical output,
//! which is what makes re-application idempotent at the registry level.

use crate::theme::PreviewTheme;
use crate::utility::UTILITY_RULES;

/// Build the injected style text: theme rule, utility table, custom styles,
/// in that fixed order.
pub fn build_style_sheet(theme: PreviewTheme, custom_styles: &str) -> String {
    let palette = theme.palette();
    let mut css = String::new();

    css.push_str(".preview-container {\n");
    css.push_str(&format!("  background-color: {};\n", palette.background));
    css.push_str(&format!("  color: {};\n", palette.text));
    css.push_str("}\n\n");

    css.push_str(UTILITY_RULES);

    if !custom_styles.trim().is_empty() {
        css.push('\n');
        css.push_str(custom_styles);
        if !custom_styles.ends_with('\n') {
            css.push('\n');
        }
    }

    css
}
