use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::middleware;
use axum::routing::{any, get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::application::ports::LlmClient;
use crate::application::services::request_classifier::PING_PATH;
use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::handlers::{
    composite_chat_handler, ping_handler, text_chat_handler, transcribe_handler,
    transcription_descriptor_handler,
};
use crate::presentation::state::AppState;

pub fn create_router<L>(state: AppState<L>) -> Router
where
    L: LlmClient + 'static,
{
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    Router::new()
        .route(PING_PATH, any(ping_handler))
        .route("/chat", post(text_chat_handler::<L>))
        .route(
            "/transcribe",
            get(transcription_descriptor_handler).post(transcribe_handler::<L>),
        )
        .fallback(composite_chat_handler::<L>)
        .layer(DefaultBodyLimit::max(state.max_body_bytes))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}
