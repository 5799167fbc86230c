use secrecy::SecretString;
use serde::Deserialize;
use url::Url;

/// Remote chat-completion service configuration (OpenAI wire format)
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CompletionConfig {
    /// API key; absence makes remote calls fail, not startup
    #[serde(default)]
    pub api_key: Option<SecretString>,
    /// Base URL override
    #[serde(default)]
    pub base_url: Option<Url>,
    /// Model used by the translation pipeline
    #[serde(default = "default_translate_model")]
    pub translate_model: String,
    /// Model used by the summarization pipeline
    #[serde(default = "default_summarize_model")]
    pub summarize_model: String,
}

impl Default for CompletionConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: None,
            translate_model: default_translate_model(),
            summarize_model: default_summarize_model(),
        }
    }
}

fn default_translate_model() -> String {
    "gpt-3.5-turbo-0613".to_string()
}

fn default_summarize_model() -> String {
    "gpt-3.5-turbo".to_string()
}
