use http::StatusCode;
use thiserror::Error;
use voxgate_core::HttpError;

pub type Result<T> = std::result::Result<T, LlmError>;

/// Errors from the remote completion service
#[derive(Debug, Error)]
pub enum LlmError {
    /// Request could not be sent
    #[error("connection error: {0}")]
    Connection(String),

    /// Provider returned a non-success status
    #[error("provider returned {status}: {message}")]
    Api { status: u16, message: String },

    /// Provider returned an unparseable success body
    #[error("failed to decode provider response: {0}")]
    Decode(String),

    /// Provider answered with no choices or no content
    #[error("provider returned an empty completion")]
    Empty,
}

impl HttpError for LlmError {
    fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    fn error_kind(&self) -> &str {
        "remote_service_error"
    }

    fn client_message(&self) -> String {
        match self {
            // The provider's raw error text, unclassified
            Self::Api { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }
}
