use thiserror::Error;

pub type NormalizeResult<T> = Result<T, NormalizeError>;

#[derive(Error, Debug, Clone)]
pub enum NormalizeError {
    #[error("Invalid rename pattern for '{name}': {message}")]
    RenamePattern { name: String, message: String },

    #[error("Snippet processing error: {message}")]
    Internal { message: String },
}

impl NormalizeError {
    pub fn rename_pattern(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::RenamePattern {
            name: name.into(),
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}
