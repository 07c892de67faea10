use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use axum::extract::rejection::BytesRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use chrono::{SecondsFormat, Utc};
use serde::Serialize;

use crate::application::ports::LlmClient;
use crate::application::services::request_classifier::parse_audio_clip;
use crate::domain::AudioFormat;
use crate::presentation::state::AppState;

use super::chat_response::{failure_response, unreadable_body};

#[derive(Debug, Serialize)]
pub struct TranscriptionResponse {
    pub success: bool,
    pub transcription: String,
    pub metadata: TranscriptionMetadata,
    pub bookmark_data: BookmarkData,
}

#[derive(Debug, Serialize)]
pub struct TranscriptionMetadata {
    pub timestamp: String,
    pub model: String,
    #[serde(rename = "type")]
    pub kind: &'static str,
}

/// Pre-filled fields for saving the transcript alongside a bookmarked video.
#[derive(Debug, Serialize)]
pub struct BookmarkData {
    pub description: String,
    pub context: String,
    pub source: &'static str,
}

#[derive(Debug, Serialize)]
pub struct TranscriptionServiceDescriptor {
    pub status: &'static str,
    pub supported_formats: Vec<&'static str>,
    pub max_file_size: &'static str,
    pub endpoints: TranscriptionEndpoints,
}

#[derive(Debug, Serialize)]
pub struct TranscriptionEndpoints {
    pub transcribe: &'static str,
}

pub async fn transcription_descriptor_handler() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(TranscriptionServiceDescriptor {
            status: "ready",
            supported_formats: AudioFormat::supported_extensions(),
            max_file_size: "25MB",
            endpoints: TranscriptionEndpoints {
                transcribe: "POST /transcribe",
            },
        }),
    )
}

#[tracing::instrument(skip_all)]
pub async fn transcribe_handler<L>(
    State(state): State<AppState<L>>,
    body: Result<Bytes, BytesRejection>,
) -> Response
where
    L: LlmClient + 'static,
{
    let body = match body {
        Ok(body) => body,
        Err(rejection) => return failure_response(&unreadable_body(rejection), &[]),
    };

    let clip = match parse_audio_clip(&body) {
        Ok(clip) => clip,
        Err(e) => return failure_response(&e, &body),
    };

    match state.chat_service.transcribe(&clip).await {
        Ok(transcript) => {
            let text = transcript.into_inner();
            tracing::info!(text_length = text.len(), "Standalone transcription completed");
            (
                StatusCode::OK,
                Json(TranscriptionResponse {
                    success: true,
                    metadata: TranscriptionMetadata {
                        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
                        model: state.chat_service.transcription_model().to_string(),
                        kind: "audio_transcription",
                    },
                    bookmark_data: BookmarkData {
                        description: text.clone(),
                        context: text.clone(),
                        source: "whisper_transcription",
                    },
                    transcription: text,
                }),
            )
                .into_response()
        }
        Err(e) => failure_response(&e, &body),
    }
}
