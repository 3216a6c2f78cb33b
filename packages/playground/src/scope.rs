//! Injected evaluation scope.
//!
//! Every evaluation runs with this fixed identifier table in scope. The table
//! is closed: snippets that declare one of these names get renamed by the
//! normalizer instead of widening the scope.

use serde::Serialize;

/// What an injected name resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ScopeExportKind {
    /// The framework runtime itself.
    Runtime,
    /// Layout/primitive components from the component library.
    LayoutPrimitive,
    /// Icon symbols.
    Icon,
    /// The styling helper.
    StyleHelper,
}

/// One injected name and the library export it resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScopeBinding {
    pub name: &'static str,
    pub export: &'static str,
    pub kind: ScopeExportKind,
}

const DEFAULT_SCOPE: &[ScopeBinding] = &[
    ScopeBinding {
        name: "React",
        export: "react",
        kind: ScopeExportKind::Runtime,
    },
    ScopeBinding {
        name: "styled",
        export: "styled-components",
        kind: ScopeExportKind::StyleHelper,
    },
    ScopeBinding {
        name: "Container",
        export: "react-bootstrap/Container",
        kind: ScopeExportKind::LayoutPrimitive,
    },
    ScopeBinding {
        name: "Row",
        export: "react-bootstrap/Row",
        kind: ScopeExportKind::LayoutPrimitive,
    },
    ScopeBinding {
        name: "Col",
        export: "react-bootstrap/Col",
        kind: ScopeExportKind::LayoutPrimitive,
    },
    ScopeBinding {
        name: "Button",
        export: "react-bootstrap/Button",
        kind: ScopeExportKind::LayoutPrimitive,
    },
    ScopeBinding {
        name: "Alert",
        export: "react-bootstrap/Alert",
        kind: ScopeExportKind::LayoutPrimitive,
    },
    ScopeBinding {
        name: "Card",
        export: "react-bootstrap/Card",
        kind: ScopeExportKind::LayoutPrimitive,
    },
    ScopeBinding {
        name: "FaBeer",
        export: "react-icons/fa/FaBeer",
        kind: ScopeExportKind::Icon,
    },
    ScopeBinding {
        name: "FaCoffee",
        export: "react-icons/fa/FaCoffee",
        kind: ScopeExportKind::Icon,
    },
    ScopeBinding {
        name: "FaReact",
        export: "react-icons/fa/FaReact",
        kind: ScopeExportKind::Icon,
    },
];

/// The fixed scope table injected into every evaluation.
pub fn default_scope() -> &'static [ScopeBinding] {
    DEFAULT_SCOPE
}

/// Look up an injected name.
pub fn scope_binding(name: &str) -> Option<&'static ScopeBinding> {
    DEFAULT_SCOPE.iter().find(|b| b.name == name)
}
