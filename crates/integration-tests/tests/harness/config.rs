//! Programmatic configuration builder for integration tests

use std::net::SocketAddr;

use secrecy::SecretString;
use voxgate_config::{CompletionConfig, Config, HealthConfig, ServerConfig, TranscriptionConfig};

/// Builder for constructing test configurations
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Create a builder pointing both remote services at a mock backend
    pub fn new(mock_base_url: &str) -> Self {
        Self {
            config: Config {
                server: ServerConfig {
                    listen_address: Some(SocketAddr::from(([127, 0, 0, 1], 0))),
                    health: HealthConfig::default(),
                },
                transcription: TranscriptionConfig {
                    api_key: Some(SecretString::from("test-stt-key")),
                    base_url: Some(mock_base_url.parse().expect("valid URL")),
                    ..TranscriptionConfig::default()
                },
                completion: CompletionConfig {
                    api_key: Some(SecretString::from("test-llm-key")),
                    base_url: Some(mock_base_url.parse().expect("valid URL")),
                    ..CompletionConfig::default()
                },
            },
        }
    }

    /// Disable the health endpoint
    pub fn without_health(mut self) -> Self {
        self.config.server.health.enabled = false;
        self
    }

    /// Change the health endpoint path
    pub fn with_health_path(mut self, path: &str) -> Self {
        self.config.server.health.path = path.to_owned();
        self
    }

    /// Build the final config
    pub fn build(self) -> Config {
        self.config
    }
}
