use std::path::Path;

use secrecy::ExposeSecret;

use crate::Config;

impl Config {
    /// Load configuration from a TOML file
    ///
    /// Reads the file, expands `{{ env.VAR }}` placeholders, then
    /// deserializes and validates the result.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, environment variable
    /// expansion fails, or TOML parsing fails
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("failed to read config file {}: {e}", path.display()))?;

        let expanded =
            crate::env::expand_env(&raw).map_err(|e| anyhow::anyhow!("config variable expansion failed: {e}"))?;

        let config: Self = toml::from_str(&expanded).map_err(|e| anyhow::anyhow!("failed to parse config: {e}"))?;

        config.validate();

        Ok(config)
    }

    /// Check the configuration for likely misconfigurations
    ///
    /// A missing or empty API key is only a warning: the credential's
    /// absence must surface as failed remote calls, never as a startup
    /// error.
    pub fn validate(&self) {
        if !has_key(self.transcription.api_key.as_ref()) {
            tracing::warn!("no transcription API key configured; transcription requests will be rejected upstream");
        }
        if !has_key(self.completion.api_key.as_ref()) {
            tracing::warn!("no completion API key configured; translate/summarize requests will be rejected upstream");
        }
    }
}

fn has_key(key: Option<&secrecy::SecretString>) -> bool {
    key.is_some_and(|k| !k.expose_secret().is_empty())
}
