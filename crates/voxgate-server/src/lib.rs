#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

//! The orchestration layer: routes, handlers, and server assembly
//!
//! Each handler drives one linear pipeline (acquire → transcribe →
//! optionally complete) and relies on `ApiError` for the uniform
//! failure contract.

pub mod acquire;
mod error;
mod pipeline;
mod response;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::State;
use axum::{Json, Router, routing};
use serde::Deserialize;
use tower_http::trace::TraceLayer;
use voxgate_config::Config;
use voxgate_llm::LlmClient;
use voxgate_stt::SttClient;

use acquire::{ExtractAudioUpload, UrlTarget};
pub use error::ApiError;
pub use response::{SummaryBody, TranscriptionBody, TranslationBody};

/// Shared per-process state: the two remote clients plus the download
/// client
///
/// Everything here is immutable after startup; requests share it
/// without locking.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<Inner>,
}

struct Inner {
    stt: SttClient,
    llm: LlmClient,
    download: reqwest::Client,
    translate_model: String,
    summarize_model: String,
}

impl AppState {
    fn new(config: &Config) -> Self {
        let stt = SttClient::new(
            config.transcription.api_key.clone(),
            config.transcription.base_url.clone(),
            config.transcription.model.clone(),
        );
        let llm = LlmClient::new(config.completion.api_key.clone(), config.completion.base_url.clone());

        Self {
            inner: Arc::new(Inner {
                stt,
                llm,
                download: voxgate_stt::http_client(),
                translate_model: config.completion.translate_model.clone(),
                summarize_model: config.completion.summarize_model.clone(),
            }),
        }
    }

    pub(crate) fn stt(&self) -> &SttClient {
        &self.inner.stt
    }

    pub(crate) fn llm(&self) -> &LlmClient {
        &self.inner.llm
    }

    pub(crate) fn download(&self) -> &reqwest::Client {
        &self.inner.download
    }

    pub(crate) fn translate_model(&self) -> &str {
        &self.inner.translate_model
    }

    pub(crate) fn summarize_model(&self) -> &str {
        &self.inner.summarize_model
    }
}

/// Assembled server with all routes and middleware
pub struct Server {
    router: Router,
    listen_address: SocketAddr,
}

impl Server {
    /// Build the server from configuration
    pub fn new(config: &Config) -> Self {
        let listen_address = config
            .server
            .listen_address
            .unwrap_or_else(|| SocketAddr::from(([0, 0, 0, 0], 3000)));

        let state = AppState::new(config);

        let mut app = Router::new();

        // Health check
        if config.server.health.enabled {
            app = app.route(&config.server.health.path, routing::get(health_handler));
        }

        let router = app
            .route("/api/transcribe/", routing::post(transcribe_url_handler))
            .route("/api/audio", routing::post(translate_handler))
            .route("/api/summarize", routing::post(summarize_handler))
            .with_state(state)
            .layer(TraceLayer::new_for_http());

        Self { router, listen_address }
    }

    /// Get the configured listen address
    #[must_use]
    pub const fn listen_address(&self) -> SocketAddr {
        self.listen_address
    }

    /// Consume the server and return the inner router
    ///
    /// Useful for testing when the caller manages the listener
    pub fn into_router(self) -> Router {
        self.router
    }

    /// Start serving requests
    ///
    /// Blocks until the cancellation token is triggered.
    ///
    /// # Errors
    ///
    /// Returns an error if binding the TCP listener or serving fails
    pub async fn serve(self, shutdown: tokio_util::sync::CancellationToken) -> anyhow::Result<()> {
        let listener = tokio::net::TcpListener::bind(self.listen_address).await?;
        let local_addr = listener.local_addr()?;
        tracing::info!(%local_addr, "server listening");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                shutdown.cancelled().await;
                tracing::info!("graceful shutdown initiated");
            })
            .await?;

        Ok(())
    }
}

/// Health check handler
async fn health_handler() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "message": "OK" }))
}

/// Body of `POST /api/transcribe/`
#[derive(Debug, Deserialize)]
struct TranscribeUrlRequest {
    url: String,
}

/// Handle `POST /api/transcribe/`: transcribe a remote audio file
async fn transcribe_url_handler(
    State(state): State<AppState>,
    Json(request): Json<TranscribeUrlRequest>,
) -> Result<Json<TranscriptionBody>, ApiError> {
    let target = UrlTarget::parse(&request.url)?;

    tracing::debug!(url = %target.as_str(), "URL transcription handler called");

    let body = pipeline::transcribe_url(&state, &target).await?;

    Ok(Json(body))
}

/// Handle `POST /api/audio`: transcribe an upload and translate it
async fn translate_handler(
    State(state): State<AppState>,
    ExtractAudioUpload(upload): ExtractAudioUpload,
) -> Result<Json<TranslationBody>, ApiError> {
    tracing::debug!(
        bytes = upload.payload.bytes.len(),
        language = upload.language.as_deref().unwrap_or(pipeline::DEFAULT_TARGET_LANGUAGE),
        "translate handler called"
    );

    let body = pipeline::translate_upload(&state, upload.payload, upload.language).await?;

    Ok(Json(body))
}

/// Handle `POST /api/summarize`: transcribe an upload and summarize it
async fn summarize_handler(
    State(state): State<AppState>,
    ExtractAudioUpload(upload): ExtractAudioUpload,
) -> Result<Json<SummaryBody>, ApiError> {
    tracing::debug!(bytes = upload.payload.bytes.len(), "summarize handler called");

    let body = pipeline::summarize_upload(&state, upload.payload).await?;

    Ok(Json(body))
}
