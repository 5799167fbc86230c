use axum::Json;
use axum::response::{IntoResponse, Response};
use http::StatusCode;
use thiserror::Error;
use voxgate_core::HttpError;
use voxgate_llm::LlmError;
use voxgate_stt::SttError;

/// Uniform failure collapse for the orchestration pipelines
///
/// Every endpoint uses the same caught/typed policy: a failure anywhere
/// in a pipeline becomes a `{kind, error}` body with the mapped status.
/// The `error` value is always the human-readable message; for provider
/// failures it is the provider's raw error text.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Malformed caller input, reported before any I/O
    #[error("validation error: {0}")]
    Validation(String),

    /// URL download failed (network or non-success status)
    #[error("fetch error: {0}")]
    Fetch(String),

    /// The transcription provider failed
    #[error(transparent)]
    Transcription(#[from] SttError),

    /// The completion provider failed
    #[error(transparent)]
    Completion(#[from] LlmError),
}

impl HttpError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Fetch(_) => StatusCode::BAD_GATEWAY,
            Self::Transcription(inner) => inner.status_code(),
            Self::Completion(inner) => inner.status_code(),
        }
    }

    fn error_kind(&self) -> &str {
        match self {
            Self::Validation(_) => "validation_error",
            Self::Fetch(_) => "fetch_error",
            Self::Transcription(inner) => inner.error_kind(),
            Self::Completion(inner) => inner.error_kind(),
        }
    }

    fn client_message(&self) -> String {
        match self {
            Self::Validation(message) | Self::Fetch(message) => message.clone(),
            Self::Transcription(inner) => inner.client_message(),
            Self::Completion(inner) => inner.client_message(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let body = serde_json::json!({
            "kind": self.error_kind(),
            "error": self.client_message(),
        });

        (status, Json(body)).into_response()
    }
}
