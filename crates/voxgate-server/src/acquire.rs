//! Input acquisition: URL download and multipart upload extraction

use axum::body::Body;
use voxgate_stt::AudioPayload;

use crate::error::ApiError;

/// Synthetic filename attached to uploads
///
/// The remote transcription API needs a name with a recognized audio
/// suffix to infer the media type; the client's own filename is ignored.
const UPLOAD_FILENAME: &str = "upload.mp3";
const UPLOAD_CONTENT_TYPE: &str = "audio/mpeg";

/// Fallback filename when a URL path has no usable final segment
const FALLBACK_FILENAME: &str = "audio.mp3";

/// Body limit for audio uploads (32 MiB)
const BODY_LIMIT_BYTES: usize = 32 << 20;

/// A validated absolute `http`/`https` URL
///
/// Construction rejects any other scheme before network I/O happens.
#[derive(Debug, Clone)]
pub struct UrlTarget(url::Url);

impl UrlTarget {
    /// Validate a caller-supplied URL string
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Validation` for unparseable URLs or schemes
    /// other than `http`/`https`.
    pub fn parse(raw: &str) -> Result<Self, ApiError> {
        let url = url::Url::parse(raw)
            .map_err(|e| ApiError::Validation(format!("Invalid URL '{raw}': {e}")))?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(ApiError::Validation(format!(
                "Invalid URL scheme '{}': only http:// and https:// are supported",
                url.scheme()
            )));
        }

        Ok(Self(url))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Filename derived from the URL's final path segment
    ///
    /// The query string is excluded; a bare host or trailing slash falls
    /// back to a generic audio name.
    pub fn filename(&self) -> String {
        self.0
            .path_segments()
            .and_then(|mut segments| segments.next_back())
            .filter(|segment| !segment.is_empty())
            .map_or_else(|| FALLBACK_FILENAME.to_string(), ToString::to_string)
    }
}

/// Download the audio behind a validated URL into memory
///
/// Any transport failure or non-success status is a fetch error; the
/// payload keeps the URL-derived filename so the provider sees the same
/// name the original file had.
///
/// # Errors
///
/// Returns `ApiError::Fetch` when the download fails.
pub async fn fetch_audio(client: &reqwest::Client, target: &UrlTarget) -> Result<AudioPayload, ApiError> {
    tracing::debug!(url = %target.as_str(), "downloading audio");

    let response = client
        .get(target.as_str())
        .send()
        .await
        .map_err(|e| ApiError::Fetch(format!("Failed to download '{}': {e}", target.as_str())))?;

    let status = response.status();

    if !status.is_success() {
        return Err(ApiError::Fetch(format!(
            "Failed to download '{}': server returned {status}",
            target.as_str()
        )));
    }

    let content_type = response
        .headers()
        .get(http::header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("application/octet-stream")
        .to_string();

    let bytes = response
        .bytes()
        .await
        .map_err(|e| ApiError::Fetch(format!("Failed to read download body: {e}")))?;

    tracing::debug!(bytes = bytes.len(), "download complete");

    Ok(AudioPayload::new(bytes.to_vec(), target.filename(), content_type))
}

/// An uploaded audio file plus the optional target-language field
#[derive(Debug)]
pub struct AudioUpload {
    pub payload: AudioPayload,
    pub language: Option<String>,
}

/// Extractor for multipart form data containing an audio file
///
/// An empty `file` part is accepted and forwarded as-is; only a missing
/// field is rejected.
pub struct ExtractAudioUpload(pub AudioUpload);

impl<S> axum::extract::FromRequest<S> for ExtractAudioUpload
where
    S: Send + Sync,
{
    type Rejection = axum::response::Response;

    async fn from_request(request: http::Request<Body>, _state: &S) -> Result<Self, Self::Rejection> {
        use axum::response::IntoResponse;

        let (parts, body) = request.into_parts();

        // Verify content type is multipart/form-data
        let content_type = parts
            .headers
            .get(http::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("");

        if !content_type.starts_with("multipart/form-data") {
            return Err((
                http::StatusCode::UNSUPPORTED_MEDIA_TYPE,
                "Unsupported Content-Type, expected: 'Content-Type: multipart/form-data'",
            )
                .into_response());
        }

        let bytes = axum::body::to_bytes(body, BODY_LIMIT_BYTES).await.map_err(|err| {
            (
                http::StatusCode::BAD_REQUEST,
                format!("Failed to read request body: {err}"),
            )
                .into_response()
        })?;

        // Reassemble the request for multipart parsing
        let mut rebuilt = http::Request::builder().method(parts.method.clone()).uri(parts.uri.clone());

        for (key, value) in &parts.headers {
            rebuilt = rebuilt.header(key, value);
        }

        let rebuilt = rebuilt.body(Body::from(bytes)).map_err(|e| {
            (
                http::StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to rebuild request: {e}"),
            )
                .into_response()
        })?;

        let mut multipart = axum::extract::Multipart::from_request(rebuilt, &()).await.map_err(|e| {
            (
                http::StatusCode::BAD_REQUEST,
                format!("Failed to parse multipart form: {e}"),
            )
                .into_response()
        })?;

        let mut audio: Option<Vec<u8>> = None;
        let mut language: Option<String> = None;

        while let Ok(Some(field)) = multipart.next_field().await {
            let field_name = field.name().unwrap_or("").to_string();

            match field_name.as_str() {
                "file" => {
                    audio = Some(
                        field
                            .bytes()
                            .await
                            .map_err(|e| {
                                (
                                    http::StatusCode::BAD_REQUEST,
                                    format!("Failed to read audio data: {e}"),
                                )
                                    .into_response()
                            })?
                            .to_vec(),
                    );
                }
                "language" => {
                    language = Some(field.text().await.map_err(|e| {
                        (
                            http::StatusCode::BAD_REQUEST,
                            format!("Failed to read language field: {e}"),
                        )
                            .into_response()
                    })?);
                }
                _ => {
                    // Skip unknown fields
                }
            }
        }

        let audio = audio.ok_or_else(|| {
            (
                http::StatusCode::BAD_REQUEST,
                "Missing required 'file' field in multipart form",
            )
                .into_response()
        })?;

        let payload = AudioPayload::new(audio, UPLOAD_FILENAME, UPLOAD_CONTENT_TYPE);

        Ok(Self(AudioUpload { payload, language }))
    }
}
