use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use url::Url;

use crate::error::LlmError;
use crate::protocol::{ChatRequest, ChatResponse};
use crate::types::CompletionRequest;

/// Default `OpenAI` API base URL
const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Client for an OpenAI-compatible chat completion endpoint
pub struct LlmClient {
    client: Client,
    base_url: String,
    api_key: Option<SecretString>,
}

impl LlmClient {
    pub fn new(api_key: Option<SecretString>, base_url: Option<Url>) -> Self {
        let base_url = base_url.map_or_else(
            || DEFAULT_BASE_URL.to_string(),
            |url| url.as_str().trim_end_matches('/').to_string(),
        );

        Self {
            client: Client::new(),
            base_url,
            api_key,
        }
    }

    /// Build the chat completions URL
    fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }

    /// Run one completion and return the first choice's content
    ///
    /// No retries and no timeout override. A response carrying no
    /// choices or no content is an upstream fault, not a silent empty
    /// string.
    ///
    /// # Errors
    ///
    /// Returns `LlmError` when the request cannot be sent, the provider
    /// answers with a non-success status, or the body is unusable.
    pub async fn complete(&self, request: &CompletionRequest) -> crate::error::Result<String> {
        let wire_request: ChatRequest = request.into();

        tracing::debug!(model = %request.model, "completion request");

        let mut builder = self.client.post(self.completions_url()).json(&wire_request);

        if let Some(key) = &self.api_key {
            builder = builder.bearer_auth(key.expose_secret());
        }

        let response = builder.send().await.map_err(|e| {
            tracing::error!(error = %e, "completion request failed");
            LlmError::Connection(format!("Failed to send request to completion service: {e}"))
        })?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_else(|_| "Unknown error".to_string());

            tracing::error!("completion API error ({status}): {body}");

            return Err(LlmError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let wire_response: ChatResponse = response.json().await.map_err(|e| {
            tracing::error!("failed to parse completion response: {e}");
            LlmError::Decode(e.to_string())
        })?;

        let content = wire_response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or(LlmError::Empty)?;

        tracing::debug!("completion complete");

        Ok(content)
    }
}
