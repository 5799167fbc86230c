//! Mock upstream server for integration tests
//!
//! Implements the two OpenAI-format endpoints voxgate calls (Whisper
//! transcription and chat completion) plus a file route for URL-download
//! tests, returning canned responses and recording what it was sent.

use std::net::SocketAddr;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};

use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::{Json, Router, routing};
use tokio_util::sync::CancellationToken;

/// Bytes served by the download route
pub const SAMPLE_AUDIO: &[u8] = b"RIFF$\x00\x00\x00WAVEfmt fake-sample-audio-bytes";

/// Fields captured from a transcription request's multipart form
#[derive(Debug, Clone, Default)]
pub struct TranscriptionCapture {
    pub filename: String,
    pub content_type: String,
    pub audio_len: usize,
    pub model: String,
    pub prompt: Option<String>,
    pub temperature: Option<String>,
}

struct MockState {
    transcription_count: AtomicU32,
    completion_count: AtomicU32,
    download_count: AtomicU32,
    transcript: String,
    completion: String,
    /// Raw error body returned instead of a transcript (if set)
    fail_transcription: Option<String>,
    /// Raw error body returned instead of a completion (if set)
    fail_completion: Option<String>,
    last_transcription: Mutex<Option<TranscriptionCapture>>,
    last_completion: Mutex<Option<serde_json::Value>>,
}

/// Mock OpenAI-format backend that returns predictable responses
pub struct MockOpenAi {
    addr: SocketAddr,
    shutdown: CancellationToken,
    state: Arc<MockState>,
}

/// Builder for a mock with canned responses or injected failures
pub struct MockOpenAiBuilder {
    transcript: String,
    completion: String,
    fail_transcription: Option<String>,
    fail_completion: Option<String>,
}

impl MockOpenAiBuilder {
    /// Set the transcript returned by the transcription endpoint
    pub fn transcript(mut self, text: &str) -> Self {
        self.transcript = text.to_owned();
        self
    }

    /// Set the content returned by the completion endpoint
    pub fn completion(mut self, text: &str) -> Self {
        self.completion = text.to_owned();
        self
    }

    /// Make the transcription endpoint fail with 500 and this raw body
    pub fn fail_transcription(mut self, message: &str) -> Self {
        self.fail_transcription = Some(message.to_owned());
        self
    }

    /// Make the completion endpoint fail with 500 and this raw body
    pub fn fail_completion(mut self, message: &str) -> Self {
        self.fail_completion = Some(message.to_owned());
        self
    }

    pub async fn start(self) -> anyhow::Result<MockOpenAi> {
        let state = Arc::new(MockState {
            transcription_count: AtomicU32::new(0),
            completion_count: AtomicU32::new(0),
            download_count: AtomicU32::new(0),
            transcript: self.transcript,
            completion: self.completion,
            fail_transcription: self.fail_transcription,
            fail_completion: self.fail_completion,
            last_transcription: Mutex::new(None),
            last_completion: Mutex::new(None),
        });

        let app = Router::new()
            .route("/v1/audio/transcriptions", routing::post(handle_transcription))
            .route("/v1/chat/completions", routing::post(handle_chat_completion))
            .route("/files/{filename}", routing::get(handle_download))
            .with_state(Arc::clone(&state));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let shutdown = CancellationToken::new();
        let shutdown_clone = shutdown.clone();

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    shutdown_clone.cancelled().await;
                })
                .await
                .ok();
        });

        Ok(MockOpenAi { addr, shutdown, state })
    }
}

impl MockOpenAi {
    /// Start a mock with default canned responses
    pub async fn start() -> anyhow::Result<Self> {
        Self::builder().start().await
    }

    pub fn builder() -> MockOpenAiBuilder {
        MockOpenAiBuilder {
            transcript: "mock transcript".to_owned(),
            completion: "mock completion".to_owned(),
            fail_transcription: None,
            fail_completion: None,
        }
    }

    /// Base URL for configuring the mock as a provider
    ///
    /// Includes `/v1` since the clients append paths like `/chat/completions`
    pub fn base_url(&self) -> String {
        format!("http://{}/v1", self.addr)
    }

    /// URL of a downloadable audio file served by the mock
    pub fn file_url(&self, filename: &str) -> String {
        format!("http://{}/files/{filename}", self.addr)
    }

    /// URL on the mock host that answers 404
    pub fn missing_url(&self) -> String {
        format!("http://{}/no-such-file.mp3", self.addr)
    }

    /// Number of transcription requests received
    pub fn transcription_count(&self) -> u32 {
        self.state.transcription_count.load(Ordering::Relaxed)
    }

    /// Number of completion requests received
    pub fn completion_count(&self) -> u32 {
        self.state.completion_count.load(Ordering::Relaxed)
    }

    /// Number of file downloads served
    pub fn download_count(&self) -> u32 {
        self.state.download_count.load(Ordering::Relaxed)
    }

    /// Multipart fields of the most recent transcription request
    pub fn last_transcription(&self) -> Option<TranscriptionCapture> {
        self.state.last_transcription.lock().unwrap().clone()
    }

    /// JSON body of the most recent completion request
    pub fn last_completion(&self) -> Option<serde_json::Value> {
        self.state.last_completion.lock().unwrap().clone()
    }
}

impl Drop for MockOpenAi {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}

async fn handle_transcription(State(state): State<Arc<MockState>>, mut multipart: Multipart) -> impl IntoResponse {
    let mut capture = TranscriptionCapture::default();

    while let Ok(Some(field)) = multipart.next_field().await {
        let name = field.name().unwrap_or("").to_owned();

        match name.as_str() {
            "file" => {
                capture.filename = field.file_name().unwrap_or("").to_owned();
                capture.content_type = field.content_type().unwrap_or("").to_owned();
                capture.audio_len = field.bytes().await.map(|b| b.len()).unwrap_or(0);
            }
            "model" => capture.model = field.text().await.unwrap_or_default(),
            "prompt" => capture.prompt = field.text().await.ok(),
            "temperature" => capture.temperature = field.text().await.ok(),
            _ => {}
        }
    }

    *state.last_transcription.lock().unwrap() = Some(capture);
    state.transcription_count.fetch_add(1, Ordering::Relaxed);

    if let Some(ref message) = state.fail_transcription {
        return (StatusCode::INTERNAL_SERVER_ERROR, message.clone()).into_response();
    }

    Json(serde_json::json!({ "text": state.transcript })).into_response()
}

async fn handle_chat_completion(
    State(state): State<Arc<MockState>>,
    Json(body): Json<serde_json::Value>,
) -> impl IntoResponse {
    let model = body["model"].as_str().unwrap_or("mock-model").to_owned();

    *state.last_completion.lock().unwrap() = Some(body);
    state.completion_count.fetch_add(1, Ordering::Relaxed);

    if let Some(ref message) = state.fail_completion {
        return (StatusCode::INTERNAL_SERVER_ERROR, message.clone()).into_response();
    }

    Json(serde_json::json!({
        "id": "chatcmpl-mock",
        "object": "chat.completion",
        "created": 0,
        "model": model,
        "choices": [{
            "index": 0,
            "message": { "role": "assistant", "content": state.completion },
            "finish_reason": "stop"
        }],
        "usage": { "prompt_tokens": 8, "completion_tokens": 4, "total_tokens": 12 }
    }))
    .into_response()
}

async fn handle_download(State(state): State<Arc<MockState>>, Path(_filename): Path<String>) -> impl IntoResponse {
    state.download_count.fetch_add(1, Ordering::Relaxed);

    ([(http::header::CONTENT_TYPE, "audio/mpeg")], bytes::Bytes::from_static(SAMPLE_AUDIO))
}
