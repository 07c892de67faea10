use std::sync::Arc;
use std::time::Duration;

use crate::application::ports::{TranscriptionEngine, TranscriptionError};
use crate::presentation::config::{ProviderKind, TranscriptionSettings};

use super::azure_whisper_engine::AzureWhisperEngine;
use super::openai_whisper_engine::OpenAiWhisperEngine;

pub struct TranscriptionEngineFactory;

impl TranscriptionEngineFactory {
    pub fn create(
        settings: &TranscriptionSettings,
    ) -> Result<Arc<dyn TranscriptionEngine>, TranscriptionError> {
        if settings.api_key.trim().is_empty() {
            return Err(TranscriptionError::Configuration(
                "API key required for speech-to-text provider".to_string(),
            ));
        }

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(settings.timeout_seconds))
            .build()
            .map_err(|e| TranscriptionError::Configuration(format!("http client: {}", e)))?;

        match settings.provider {
            ProviderKind::OpenAi => {
                let engine = OpenAiWhisperEngine::new(
                    settings.api_key.clone(),
                    Some(settings.base_url.clone()),
                    Some(settings.model.clone()),
                )
                .with_client(client);
                Ok(Arc::new(engine))
            }
            ProviderKind::Azure => {
                let deployment = settings.azure_deployment.as_deref().ok_or_else(|| {
                    TranscriptionError::Configuration(
                        "azure_deployment required for Azure Whisper".to_string(),
                    )
                })?;
                let engine = AzureWhisperEngine::new(
                    &settings.base_url,
                    deployment,
                    &settings.api_key,
                    &settings.azure_api_version,
                )
                .with_client(client);
                Ok(Arc::new(engine))
            }
        }
    }
}
