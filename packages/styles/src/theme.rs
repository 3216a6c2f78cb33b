//! Preview theme selection.

use serde::{Deserialize, Serialize};

/// Background/foreground palette for the preview surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemePalette {
    pub background: &'static str,
    pub text: &'static str,
}

const LIGHT_PALETTE: ThemePalette = ThemePalette {
    background: "#ffffff",
    text: "#000000",
};

const DARK_PALETTE: ThemePalette = ThemePalette {
    background: "#1a1a1a",
    text: "#ffffff",
};

/// Closed set of preview themes.
///
/// `Custom` carries no palette of its own; the visual comes from
/// user-supplied CSS, and the injected theme rule falls back to the Light
/// palette underneath it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PreviewTheme {
    #[default]
    Light,
    Dark,
    Custom,
}

impl PreviewTheme {
    /// All selectable themes, in menu order.
    pub const ALL: [PreviewTheme; 3] = [PreviewTheme::Light, PreviewTheme::Dark, PreviewTheme::Custom];

    /// Parse a theme name, defaulting to Light on anything unrecognized.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "dark" => PreviewTheme::Dark,
            "custom" => PreviewTheme::Custom,
            _ => PreviewTheme::Light,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            PreviewTheme::Light => "Light",
            PreviewTheme::Dark => "Dark",
            PreviewTheme::Custom => "Custom",
        }
    }

    /// Palette used for the injected theme rule.
    pub fn palette(&self) -> ThemePalette {
        match self {
            PreviewTheme::Dark => DARK_PALETTE,
            PreviewTheme::Light | PreviewTheme::Custom => LIGHT_PALETTE,
        }
    }
}
