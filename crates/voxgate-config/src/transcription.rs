use secrecy::SecretString;
use serde::Deserialize;
use url::Url;

/// Remote transcription service configuration (Whisper wire format)
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TranscriptionConfig {
    /// API key; absence makes remote calls fail, not startup
    #[serde(default)]
    pub api_key: Option<SecretString>,
    /// Base URL override
    #[serde(default)]
    pub base_url: Option<Url>,
    /// Model identifier sent with every transcription request
    #[serde(default = "default_model")]
    pub model: String,
}

impl Default for TranscriptionConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: None,
            model: default_model(),
        }
    }
}

fn default_model() -> String {
    "whisper-1".to_string()
}
