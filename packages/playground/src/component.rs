//! Boundary types for the externally persisted component records.
//!
//! The playground core never talks to the API itself; it consumes
//! `code`/`styles` from a record handed in by the hosting page and emits an
//! updated pair through the save callback.

use serde::{Deserialize, Serialize};

/// Persisted component record, as stored by the external API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentRecord {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub category: String,
    pub code: String,
    #[serde(default)]
    pub styles: String,
    #[serde(default)]
    pub preview: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub deleted: bool,
}

/// The `{code, styles}` pair a save emits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnippetSave {
    pub code: String,
    pub styles: String,
}
