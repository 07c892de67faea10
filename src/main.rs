use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;

use reelchat::application::services::{
    ChatCompletionService, CompositeChatService, TranscriptionService,
};
use reelchat::infrastructure::audio::TranscriptionEngineFactory;
use reelchat::infrastructure::llm::OpenAiChatClient;
use reelchat::infrastructure::observability::{TracingConfig, init_tracing};
use reelchat::presentation::{AppState, Environment, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env().map_err(anyhow::Error::msg)?;
    let settings = Settings::load(environment)?;

    init_tracing(
        TracingConfig::from_settings(&settings.logging, environment),
        settings.server.port,
    );

    let transcription_engine = TranscriptionEngineFactory::create(&settings.transcription)?;
    let llm_client = Arc::new(OpenAiChatClient::from_settings(&settings.llm)?);

    let scratch_dir = settings.transcription.scratch_dir();
    tokio::fs::create_dir_all(&scratch_dir).await?;

    let chat_service = Arc::new(CompositeChatService::new(
        TranscriptionService::new(transcription_engine, scratch_dir),
        ChatCompletionService::new(llm_client),
    ));

    let state = AppState {
        chat_service,
        max_body_bytes: settings.server.max_body_bytes,
    };

    let router = create_router(state);

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port).parse()?;
    tracing::info!(
        %addr,
        chat_model = %settings.llm.chat_model,
        transcription_model = %settings.transcription.model,
        "Listening"
    );

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
    }
    tracing::info!("Shutdown signal received");
}
