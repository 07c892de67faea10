use std::path::Path;

use async_trait::async_trait;

/// An audio file staged on local disk, ready to be streamed to a provider.
#[derive(Debug, Clone, Copy)]
pub struct AudioUpload<'a> {
    pub path: &'a Path,
    pub file_name: &'a str,
    pub mime_type: &'a str,
}

#[async_trait]
pub trait TranscriptionEngine: Send + Sync {
    async fn transcribe(&self, upload: AudioUpload<'_>) -> Result<String, TranscriptionError>;

    /// Model identifier reported in transcription metadata.
    fn model(&self) -> &str;
}

#[derive(Debug, thiserror::Error)]
pub enum TranscriptionError {
    #[error("failed to read audio file: {0}")]
    ReadFailed(#[from] std::io::Error),
    #[error("invalid upload: {0}")]
    InvalidUpload(String),
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("invalid response: {0}")]
    InvalidResponse(String),
    #[error("engine configuration: {0}")]
    Configuration(String),
}
