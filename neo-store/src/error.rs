use thiserror::Error;

/// Errors raised by storage backends.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("store: backend failure: {0}")]
    Backend(String),

    #[error("store: codec failure in column '{column}': {message}")]
    Codec {
        column: &'static str,
        message: String,
    },
}

impl StoreError {
    #[inline]
    pub fn backend(message: impl Into<String>) -> Self {
        StoreError::Backend(message.into())
    }

    #[inline]
    pub fn codec(column: &'static str, message: impl Into<String>) -> Self {
        StoreError::Codec {
            column,
            message: message.into(),
        }
    }
}

/// Result type for storage operations.
pub type StoreResult<T> = std::result::Result<T, StoreError>;
