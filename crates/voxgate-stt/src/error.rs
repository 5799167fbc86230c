use http::StatusCode;
use thiserror::Error;
use voxgate_core::HttpError;

pub type Result<T> = std::result::Result<T, SttError>;

/// Errors from the remote transcription service
///
/// Provider failures are deliberately not sub-classified: auth, quota,
/// malformed audio and timeouts all surface as the provider's raw
/// message.
#[derive(Debug, Error)]
pub enum SttError {
    /// Request could not be sent
    #[error("connection error: {0}")]
    Connection(String),

    /// Provider returned a non-success status
    #[error("provider returned {status}: {message}")]
    Api { status: u16, message: String },

    /// Provider returned an unparseable success body
    #[error("failed to decode provider response: {0}")]
    Decode(String),

    /// The multipart form could not be built
    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

impl HttpError for SttError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            Self::Connection(_) | Self::Api { .. } | Self::Decode(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_kind(&self) -> &str {
        match self {
            Self::InvalidRequest(_) => "invalid_request_error",
            Self::Connection(_) | Self::Api { .. } | Self::Decode(_) => "remote_service_error",
        }
    }

    fn client_message(&self) -> String {
        match self {
            // The provider's raw error text, unclassified
            Self::Api { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }
}
