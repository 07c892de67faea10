use reqwest::multipart;
use serde::Deserialize;

use crate::application::ports::{AudioUpload, TranscriptionError};

#[derive(Deserialize)]
struct TranscriptionResponse {
    text: String,
}

/// Streams the staged file from disk rather than buffering it into the request.
pub(super) async fn file_part(
    upload: AudioUpload<'_>,
) -> Result<multipart::Part, TranscriptionError> {
    let file = tokio::fs::File::open(upload.path).await?;
    let length = file.metadata().await?.len();

    multipart::Part::stream_with_length(reqwest::Body::from(file), length)
        .file_name(upload.file_name.to_string())
        .mime_str(upload.mime_type)
        .map_err(|e| TranscriptionError::InvalidUpload(format!("mime: {}", e)))
}

pub(super) async fn read_transcript(
    response: reqwest::Response,
) -> Result<String, TranscriptionError> {
    if !response.status().is_success() {
        let status = response.status();
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "unknown error".to_string());
        return Err(TranscriptionError::ApiRequestFailed(format!(
            "status {}: {}",
            status, body
        )));
    }

    let result: TranscriptionResponse = response
        .json()
        .await
        .map_err(|e| TranscriptionError::InvalidResponse(format!("parse response: {}", e)))?;

    Ok(result.text.trim().to_string())
}
