use crate::domain::ErrorKind;

pub const MISSING_REQUIRED_FIELDS: &str =
    "Missing required fields: videoDescription or question/audio";

/// A stage failure carrying its taxonomy kind as data.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct PipelineError {
    pub kind: ErrorKind,
    pub message: String,
}

impl PipelineError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Validation, message)
    }

    pub fn transcription(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Transcription, message)
    }

    pub fn ai_chat(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::AiChat, message)
    }

    pub fn missing_required_fields() -> Self {
        Self::validation(MISSING_REQUIRED_FIELDS)
    }
}
