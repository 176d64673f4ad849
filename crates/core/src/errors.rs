use thiserror::Error;

#[derive(Error, Debug)]
pub enum BetError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Authentication error: {0}")]
    Authentication(String),

    #[error("Server rejected request ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(#[from] eyre::Report),

    #[error("Token storage error: {0}")]
    Storage(String),

    #[error("Internal error: {0}")]
    Internal(#[from] Box<dyn std::error::Error + Send + Sync>),
}

impl BetError {
    /// The message shown to the user for this error.
    ///
    /// Server rejections surface the server's own wording; everything else
    /// falls back to the full display string.
    pub fn user_message(&self) -> String {
        match self {
            BetError::Api { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }
}

pub type BetResult<T> = Result<T, BetError>;
