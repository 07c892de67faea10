use async_trait::async_trait;
use reqwest::multipart;

use crate::application::ports::{AudioUpload, TranscriptionEngine, TranscriptionError};

use super::multipart_upload::{file_part, read_transcript};

/// Whisper served from an Azure OpenAI deployment.
pub struct AzureWhisperEngine {
    client: reqwest::Client,
    endpoint: String,
    deployment: String,
    api_key: String,
}

impl AzureWhisperEngine {
    pub fn new(base_url: &str, deployment: &str, api_key: &str, api_version: &str) -> Self {
        let endpoint = format!(
            "{}/openai/deployments/{}/audio/transcriptions?api-version={}",
            base_url.trim_end_matches('/'),
            deployment,
            api_version,
        );
        Self {
            client: reqwest::Client::new(),
            endpoint,
            deployment: deployment.to_string(),
            api_key: api_key.to_string(),
        }
    }

    pub fn with_client(mut self, client: reqwest::Client) -> Self {
        self.client = client;
        self
    }
}

#[async_trait]
impl TranscriptionEngine for AzureWhisperEngine {
    async fn transcribe(&self, upload: AudioUpload<'_>) -> Result<String, TranscriptionError> {
        let form = multipart::Form::new()
            .text("response_format", "json")
            .part("file", file_part(upload).await?);

        tracing::debug!(endpoint = %self.endpoint, "Sending audio to Azure OpenAI Whisper");

        let response = self
            .client
            .post(&self.endpoint)
            .header("api-key", &self.api_key)
            .multipart(form)
            .send()
            .await
            .map_err(|e| TranscriptionError::ApiRequestFailed(format!("request: {}", e)))?;

        let transcript = read_transcript(response).await?;

        tracing::info!(
            chars = transcript.len(),
            "Azure OpenAI Whisper transcription completed"
        );

        Ok(transcript)
    }

    fn model(&self) -> &str {
        &self.deployment
    }
}
