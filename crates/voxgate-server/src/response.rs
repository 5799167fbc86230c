use serde::Serialize;

/// Success body for the URL-transcription pipeline
#[derive(Debug, Serialize)]
pub struct TranscriptionBody {
    /// Transcribed text
    pub transcribe: String,
}

/// Success body for the transcribe-and-translate pipeline
#[derive(Debug, Serialize)]
pub struct TranslationBody {
    /// Transcribed text
    pub transcribe: String,
    /// Translation of the transcript into the target language
    pub translate: String,
}

/// Success body for the transcribe-and-summarize pipeline
#[derive(Debug, Serialize)]
pub struct SummaryBody {
    /// Summary of the transcript
    pub summarize: String,
}
