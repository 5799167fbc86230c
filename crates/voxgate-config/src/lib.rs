#![allow(clippy::must_use_candidate)]

pub mod completion;
mod env;
pub mod health;
mod loader;
pub mod server;
pub mod transcription;

use serde::Deserialize;

pub use completion::CompletionConfig;
pub use health::HealthConfig;
pub use server::ServerConfig;
pub use transcription::TranscriptionConfig;

/// Top-level Voxgate configuration
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Remote transcription service configuration
    #[serde(default)]
    pub transcription: TranscriptionConfig,
    /// Remote chat-completion service configuration
    #[serde(default)]
    pub completion: CompletionConfig,
}
