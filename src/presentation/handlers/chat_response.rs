use axum::Json;
use axum::extract::rejection::BytesRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::application::services::{ChatAnswer, PipelineError};
use crate::domain::{ErrorKind, ResponseSource};
use crate::infrastructure::observability::redact_request_body;

/// Wire envelope shared by every JSON endpoint.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_type: Option<ErrorKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<ResponseSource>,
}

impl ChatResponse {
    pub fn answered(answer: ChatAnswer) -> Self {
        Self {
            success: true,
            answer: Some(answer.answer),
            error: None,
            error_type: None,
            source: Some(answer.source),
        }
    }

    pub fn failed(error: &PipelineError) -> Self {
        Self {
            success: false,
            answer: None,
            error: Some(error.message.clone()),
            error_type: Some(error.kind),
            source: None,
        }
    }

    pub fn status(&self) -> StatusCode {
        self.error_type.map(status_for).unwrap_or(StatusCode::OK)
    }
}

impl IntoResponse for ChatResponse {
    fn into_response(self) -> Response {
        (self.status(), Json(self)).into_response()
    }
}

pub fn status_for(kind: ErrorKind) -> StatusCode {
    match kind {
        ErrorKind::Validation => StatusCode::BAD_REQUEST,
        ErrorKind::Transcription | ErrorKind::AiChat | ErrorKind::Network => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

/// Logs the failure with a redacted echo of the inbound body and renders it.
pub(super) fn failure_response(error: &PipelineError, body: &[u8]) -> Response {
    let echo = redact_request_body(body);
    if error.kind.is_client_error() {
        tracing::warn!(error_type = %error.kind, message = %error.message, body = %echo, "Request rejected");
    } else {
        tracing::error!(error_type = %error.kind, message = %error.message, body = %echo, "Request failed");
    }

    ChatResponse::failed(error).into_response()
}

pub(super) fn unreadable_body(rejection: BytesRejection) -> PipelineError {
    PipelineError::validation(format!("Request body could not be read: {}", rejection.body_text()))
}
