use serde::{Deserialize, Serialize};

/// An audio file held in memory for the duration of one request
///
/// The filename must carry a recognized audio extension: the remote
/// transcription API infers the media type from it.
#[derive(Debug, Clone)]
pub struct AudioPayload {
    /// Raw audio bytes
    pub bytes: Vec<u8>,
    /// Filename hint forwarded to the provider
    pub filename: String,
    /// Content type of the audio data
    pub content_type: String,
}

impl AudioPayload {
    pub fn new(bytes: Vec<u8>, filename: impl Into<String>, content_type: impl Into<String>) -> Self {
        Self {
            bytes,
            filename: filename.into(),
            content_type: content_type.into(),
        }
    }
}

/// Transcription request following the `OpenAI` Whisper API format
#[derive(Debug)]
pub struct TranscriptionRequest {
    /// Audio to transcribe
    pub audio: AudioPayload,
    /// Optional bias prompt to guide recognition
    pub prompt: Option<String>,
    /// Sampling temperature (0-1)
    pub temperature: Option<f32>,
}

impl TranscriptionRequest {
    /// Plain transcription with no bias prompt and default sampling
    pub fn plain(audio: AudioPayload) -> Self {
        Self {
            audio,
            prompt: None,
            temperature: None,
        }
    }
}

/// Transcription response following the `OpenAI` Whisper API format
#[derive(Debug, Serialize, Deserialize)]
pub struct TranscriptionResponse {
    /// Transcribed text, treated as opaque
    pub text: String,
}
