use std::path::PathBuf;

use reelchat::application::ports::TranscriptionError;
use reelchat::infrastructure::audio::TranscriptionEngineFactory;
use reelchat::presentation::ProviderKind;
use reelchat::presentation::config::{OPENAI_BASE_URL, TranscriptionSettings};

fn settings(provider: ProviderKind, api_key: &str) -> TranscriptionSettings {
    TranscriptionSettings {
        provider,
        base_url: OPENAI_BASE_URL.to_string(),
        api_key: api_key.to_string(),
        model: "whisper-1".to_string(),
        azure_deployment: None,
        azure_api_version: "2024-06-01".to_string(),
        scratch_dir: Some(PathBuf::from("/tmp")),
        timeout_seconds: 30,
    }
}

#[test]
fn given_openai_settings_when_creating_then_engine_reports_model() {
    let engine = TranscriptionEngineFactory::create(&settings(ProviderKind::OpenAi, "sk-test")).unwrap();

    assert_eq!(engine.model(), "whisper-1");
}

#[test]
fn given_blank_api_key_when_creating_then_returns_configuration_error() {
    let result = TranscriptionEngineFactory::create(&settings(ProviderKind::OpenAi, "  "));

    assert!(matches!(result, Err(TranscriptionError::Configuration(_))));
}

#[test]
fn given_azure_without_deployment_when_creating_then_returns_configuration_error() {
    let result = TranscriptionEngineFactory::create(&settings(ProviderKind::Azure, "azure-key"));

    assert!(matches!(result, Err(TranscriptionError::Configuration(_))));
}

#[test]
fn given_azure_with_deployment_when_creating_then_engine_reports_deployment() {
    let mut azure = settings(ProviderKind::Azure, "azure-key");
    azure.azure_deployment = Some("whisper-prod".to_string());

    let engine = TranscriptionEngineFactory::create(&azure).unwrap();

    assert_eq!(engine.model(), "whisper-prod");
}
