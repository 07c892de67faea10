use std::fmt;

use serde::Serialize;

/// Failure taxonomy reported to callers as `errorType`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ErrorKind {
    #[serde(rename = "validation_error")]
    Validation,
    #[serde(rename = "transcription_error")]
    Transcription,
    #[serde(rename = "ai_chat_error")]
    AiChat,
    #[serde(rename = "network_error")]
    Network,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Validation => "validation_error",
            ErrorKind::Transcription => "transcription_error",
            ErrorKind::AiChat => "ai_chat_error",
            ErrorKind::Network => "network_error",
        }
    }

    pub fn is_client_error(&self) -> bool {
        matches!(self, ErrorKind::Validation)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// How the answered question reached the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseSource {
    AudioTranscription,
    TextInput,
}
