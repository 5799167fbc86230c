use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use url::Url;

use crate::{
    error::SttError,
    http_client::http_client,
    types::{TranscriptionRequest, TranscriptionResponse},
};

const DEFAULT_OPENAI_API_URL: &str = "https://api.openai.com/v1";

/// Client for a Whisper-format transcription endpoint
pub struct SttClient {
    client: Client,
    base_url: String,
    api_key: Option<SecretString>,
    model: String,
}

#[derive(serde::Deserialize)]
struct WhisperResponse {
    text: String,
}

impl SttClient {
    pub fn new(api_key: Option<SecretString>, base_url: Option<Url>, model: String) -> Self {
        let base_url = base_url.map_or_else(
            || DEFAULT_OPENAI_API_URL.to_string(),
            |url| url.as_str().trim_end_matches('/').to_string(),
        );

        Self {
            client: http_client(),
            base_url,
            api_key,
            model,
        }
    }

    /// Transcribe audio to text
    ///
    /// No retries and no timeout override beyond the shared client's
    /// defaults. An empty audio buffer is forwarded as-is; rejecting it
    /// is the provider's call.
    ///
    /// # Errors
    ///
    /// Returns `SttError` when the request cannot be sent, the provider
    /// answers with a non-success status, or the body cannot be decoded.
    pub async fn transcribe(&self, request: TranscriptionRequest) -> crate::error::Result<TranscriptionResponse> {
        let url = format!("{}/audio/transcriptions", self.base_url);

        tracing::debug!(
            "transcription request: {} bytes, model={}",
            request.audio.bytes.len(),
            self.model,
        );

        let mut form = reqwest::multipart::Form::new()
            .part(
                "file",
                reqwest::multipart::Part::bytes(request.audio.bytes)
                    .file_name(request.audio.filename)
                    .mime_str(&request.audio.content_type)
                    .map_err(|e| SttError::InvalidRequest(format!("Invalid content type: {e}")))?,
            )
            .text("model", self.model.clone());

        if let Some(prompt) = request.prompt {
            form = form.text("prompt", prompt);
        }

        if let Some(temperature) = request.temperature {
            form = form.text("temperature", temperature.to_string());
        }

        let mut builder = self.client.post(&url).multipart(form);

        if let Some(key) = &self.api_key {
            builder = builder.bearer_auth(key.expose_secret());
        }

        let response = builder.send().await.map_err(|e| {
            tracing::error!("transcription request failed: {e}");
            SttError::Connection(format!("Failed to send request to transcription service: {e}"))
        })?;

        let status = response.status();

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_else(|_| "Unknown error".to_string());

            tracing::error!("transcription API error ({status}): {error_text}");

            return Err(SttError::Api {
                status: status.as_u16(),
                message: error_text,
            });
        }

        let result: WhisperResponse = response.json().await.map_err(|e| {
            tracing::error!("failed to parse transcription response: {e}");
            SttError::Decode(e.to_string())
        })?;

        tracing::debug!("transcription complete");

        Ok(TranscriptionResponse { text: result.text })
    }
}
