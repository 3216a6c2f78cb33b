//! Reserved-name handling.
//!
//! The evaluator scope injects a fixed set of library components. A snippet
//! that declares its own `Navbar` or `Card` would shadow the injected one, so
//! colliding names are renamed with a `Custom` prefix before the render call
//! is synthesized.

use crate::error::{NormalizeError, NormalizeResult};
use regex::Regex;
use tracing::{debug, warn};

/// Prefix applied to colliding component names.
pub const RENAME_PREFIX: &str = "Custom";

/// Component names that would shadow injected scope entries.
const RESERVED_NAMES: &[&str] = &[
    "Navbar",
    "Button",
    "Card",
    "Container",
    "Row",
    "Col",
    "Alert",
    "Form",
    "Modal",
    "Dropdown",
    "Nav",
    "Table",
    "Tabs",
    "Accordion",
];

/// True if `name` collides with an injected scope entry.
pub fn is_reserved_name(name: &str) -> bool {
    RESERVED_NAMES.contains(&name)
}

/// Rename every whole-word occurrence of `name` to its prefixed variant.
///
/// Returns the rewritten source and the new name. Fails only if the name
/// cannot form a valid word-boundary pattern; callers are expected to treat
/// that as a soft failure and keep the original name.
pub fn rename_component(source: &str, name: &str) -> NormalizeResult<(String, String)> {
    let pattern = format!(r"\b{}\b", regex::escape(name));
    let re = Regex::new(&pattern)
        .map_err(|e| NormalizeError::rename_pattern(name, e.to_string()))?;

    let new_name = format!("{}{}", RENAME_PREFIX, name);
    let rewritten = re.replace_all(source, new_name.as_str()).into_owned();
    debug!(from = %name, to = %new_name, "Renamed colliding component");
    Ok((rewritten, new_name))
}

/// Rename if reserved, keeping the original name on any soft failure.
pub fn resolve_collision(source: String, name: String) -> (String, String) {
    if !is_reserved_name(&name) {
        return (source, name);
    }
    match rename_component(&source, &name) {
        Ok((rewritten, new_name)) => (rewritten, new_name),
        Err(e) => {
            warn!(component = %name, error = %e, "Failed to rename component, keeping original");
            (source, name)
        }
    }
}
