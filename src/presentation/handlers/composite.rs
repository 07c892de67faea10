use axum::body::Bytes;
use axum::extract::State;
use axum::extract::rejection::BytesRejection;
use axum::http::{Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};

use crate::application::ports::LlmClient;
use crate::application::services::{Classified, classify};
use crate::presentation::state::AppState;

use super::chat_response::{ChatResponse, failure_response, unreadable_body};

pub const PONG: &str = "Pong";

/// Liveness probe on any method. Takes no body extractor, so the body limit never applies.
pub async fn ping_handler() -> &'static str {
    PONG
}

/// Entry point of the composite pipeline; every path other than the explicit routes lands here.
#[tracing::instrument(skip_all, fields(method = %method, path = %uri.path()))]
pub async fn composite_chat_handler<L>(
    State(state): State<AppState<L>>,
    method: Method,
    uri: Uri,
    body: Result<Bytes, BytesRejection>,
) -> Response
where
    L: LlmClient + 'static,
{
    let body = match body {
        Ok(body) => body,
        Err(rejection) => return failure_response(&unreadable_body(rejection), &[]),
    };

    let request = match classify(uri.path(), &body) {
        Ok(Classified::Ping) => return (StatusCode::OK, PONG).into_response(),
        Ok(Classified::Chat(request)) => request,
        Err(e) => return failure_response(&e, &body),
    };

    match state.chat_service.answer(&request).await {
        Ok(answer) => {
            tracing::info!(source = ?answer.source, "Chat request completed");
            ChatResponse::answered(answer).into_response()
        }
        Err(e) => failure_response(&e, &body),
    }
}
