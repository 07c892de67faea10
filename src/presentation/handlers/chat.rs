use axum::body::Bytes;
use axum::extract::State;
use axum::extract::rejection::BytesRejection;
use axum::response::{IntoResponse, Response};

use crate::application::ports::LlmClient;
use crate::application::services::request_classifier::parse_text_chat_request;
use crate::domain::QuestionSource;
use crate::infrastructure::observability::sanitize_prompt;
use crate::presentation::state::AppState;

use super::chat_response::{ChatResponse, failure_response, unreadable_body};

/// Text-only chat: no transcription stage, audio fields are ignored.
#[tracing::instrument(skip_all)]
pub async fn text_chat_handler<L>(
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

    let request = match parse_text_chat_request(&body) {
        Ok(request) => request,
        Err(e) => return failure_response(&e, &body),
    };

    if let QuestionSource::Text(question) = &request.question_source {
        tracing::debug!(prompt = %sanitize_prompt(question), "Processing text chat");
    }

    match state.chat_service.answer(&request).await {
        Ok(answer) => ChatResponse::answered(answer).into_response(),
        Err(e) => failure_response(&e, &body),
    }
}
