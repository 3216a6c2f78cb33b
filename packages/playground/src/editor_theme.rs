//! Syntax display theme for the embedded editor.
//!
//! Fixed dark token-color table forwarded to the evaluator alongside the
//! code. Unrelated to [`sasta_styles::PreviewTheme`], which themes the
//! rendered preview surface rather than the source view.

use serde::Serialize;

/// Color assignment for a set of token types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TokenColor {
    pub types: &'static [&'static str],
    pub color: &'static str,
}

/// Editor syntax theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EditorTheme {
    pub foreground: &'static str,
    pub background: &'static str,
    pub token_colors: &'static [TokenColor],
}

/// The one editor theme the playground ships.
pub const DARK_EDITOR_THEME: EditorTheme = EditorTheme {
    foreground: "#D4D4D4",
    background: "#1E1E1E",
    token_colors: &[
        TokenColor {
            types: &["prolog", "constant", "builtin"],
            color: "#569CD6",
        },
        TokenColor {
            types: &["inserted", "function"],
            color: "#C8C8C8",
        },
        TokenColor {
            types: &["deleted"],
            color: "#FF5555",
        },
        TokenColor {
            types: &["changed"],
            color: "#FFB86C",
        },
        TokenColor {
            types: &["punctuation", "symbol"],
            color: "#808080",
        },
        TokenColor {
            types: &["string", "char", "tag", "selector"],
            color: "#CE9178",
        },
        TokenColor {
            types: &["keyword", "variable"],
            color: "#569CD6",
        },
        TokenColor {
            types: &["comment"],
            color: "#6A9955",
        },
        TokenColor {
            types: &["attr-name"],
            color: "#9CDCFE",
        },
    ],
};
