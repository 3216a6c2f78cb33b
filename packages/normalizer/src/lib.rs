pub mod detect;
pub mod error;
pub mod normalizer;
pub mod reserved;
pub mod strip;


#[cfg(test)]
mod tests_edge_cases;

pub use detect::SnippetDetector;
pub use error::{NormalizeError, NormalizeResult};
pub use normalizer::{
    error_placeholder, Normalizer, ProcessedModule, EMPTY_PLACEHOLDER, NO_CONTENT_DIAGNOSTIC,
    NO_CONTENT_PLACEHOLDER, WRAPPER_COMPONENT_NAME,
};
pub use reserved::{is_reserved_name, rename_component, RENAME_PREFIX};
pub use strip::ModuleSyntaxStripper;
