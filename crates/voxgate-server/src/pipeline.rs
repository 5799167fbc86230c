//! The three request pipelines: linear chains of dependent remote calls
//!
//! Each pipeline is all-or-nothing: a failure at any stage surfaces as a
//! single `ApiError` and no partial result is ever returned. An empty
//! transcript is still passed on to the completion call.

use voxgate_llm::{CompletionParams, CompletionRequest, Message};
use voxgate_stt::{AudioPayload, TranscriptionRequest};

use crate::AppState;
use crate::acquire::{UrlTarget, fetch_audio};
use crate::error::ApiError;
use crate::response::{SummaryBody, TranscriptionBody, TranslationBody};

/// Bias prompt sent with translate-pipeline transcriptions (Mandarin hint)
const TRANSLATE_BIAS_PROMPT: &str = "中文是普通话的句子";

/// Transcription sampling temperature for the translate pipeline
const TRANSLATE_TRANSCRIPTION_TEMPERATURE: f32 = 0.7;

/// Target language used when the caller omits the `language` field
pub const DEFAULT_TARGET_LANGUAGE: &str = "English";

/// Fixed sampling parameters for the summarize pipeline
fn summary_params() -> CompletionParams {
    CompletionParams {
        temperature: Some(0.7),
        top_p: Some(1.0),
        max_tokens: Some(640),
        frequency_penalty: Some(0.0),
        presence_penalty: Some(0.0),
    }
}

fn translate_prompt(language: &str, transcript: &str) -> String {
    format!("Translate the following text to \"{language}\": \"{transcript}\"")
}

fn summary_prompt(transcript: &str) -> String {
    format!("请对以下文本进行总结，注意总结的凝炼性，将总结字数控制在100个字以内:\n{transcript}")
}

/// URL-transcribe pipeline: fetch → transcribe
pub async fn transcribe_url(state: &AppState, target: &UrlTarget) -> Result<TranscriptionBody, ApiError> {
    let payload = fetch_audio(state.download(), target).await?;

    let transcription = state.stt().transcribe(TranscriptionRequest::plain(payload)).await?;

    Ok(TranscriptionBody {
        transcribe: transcription.text,
    })
}

/// Transcribe-and-translate pipeline
///
/// The transcription stage runs with the Mandarin bias prompt and a
/// fixed temperature; the completion stage translates into the target
/// language with default sampling. A transcript that transcribed fine
/// but failed to translate is discarded, not returned.
pub async fn translate_upload(
    state: &AppState,
    payload: AudioPayload,
    language: Option<String>,
) -> Result<TranslationBody, ApiError> {
    let language = language.unwrap_or_else(|| DEFAULT_TARGET_LANGUAGE.to_string());

    let transcription = state
        .stt()
        .transcribe(TranscriptionRequest {
            audio: payload,
            prompt: Some(TRANSLATE_BIAS_PROMPT.to_string()),
            temperature: Some(TRANSLATE_TRANSCRIPTION_TEMPERATURE),
        })
        .await?;

    let request = CompletionRequest {
        model: state.translate_model().to_string(),
        messages: vec![Message::user(translate_prompt(&language, &transcription.text))],
        params: CompletionParams::default(),
    };

    let translation = state.llm().complete(&request).await?;

    Ok(TranslationBody {
        transcribe: transcription.text,
        translate: translation,
    })
}

/// Transcribe-and-summarize pipeline
///
/// No bias prompt on the transcription stage; the completion stage asks
/// for a Chinese summary capped at 100 characters with fixed sampling.
pub async fn summarize_upload(state: &AppState, payload: AudioPayload) -> Result<SummaryBody, ApiError> {
    let transcription = state.stt().transcribe(TranscriptionRequest::plain(payload)).await?;

    let request = CompletionRequest {
        model: state.summarize_model().to_string(),
        messages: vec![Message::user(summary_prompt(&transcription.text))],
        params: summary_params(),
    };

    let summary = state.llm().complete(&request).await?;

    Ok(SummaryBody { summarize: summary })
}
