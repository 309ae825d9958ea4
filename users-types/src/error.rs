//! Error types for the users service.

/// Store-level errors (remote persistence failures).
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("{0}")]
    NotFound(String),

    #[error("Remote store returned {status}: {body}")]
    Remote { status: u16, body: String },

    #[error("Failed to execute request: {0}")]
    Transport(String),

    #[error("Failed to decode response: {0}")]
    Decode(String),
}

/// Application-level errors (for HTTP responses).
///
/// Maps cleanly to HTTP status codes.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Internal(String),
}

impl AppError {
    /// Re-classifies any error as not-found, keeping its message.
    pub fn into_not_found(self) -> Self {
        match self {
            AppError::BadRequest(msg) | AppError::NotFound(msg) | AppError::Internal(msg) => {
                AppError::NotFound(msg)
            }
        }
    }

    /// Re-classifies a not-found error as internal. Client-input errors are kept.
    pub fn into_internal(self) -> Self {
        match self {
            AppError::NotFound(msg) => AppError::Internal(msg),
            other => other,
        }
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Validation(msg) => AppError::BadRequest(msg),
            StoreError::NotFound(msg) => AppError::NotFound(msg),
            e @ (StoreError::Remote { .. } | StoreError::Transport(_) | StoreError::Decode(_)) => {
                AppError::Internal(e.to_string())
            }
        }
    }
}
