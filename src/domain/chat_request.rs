use super::ChatTurn;

/// A base64 audio clip exactly as the caller supplied it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioClip {
    pub audio_data: String,
    pub file_name: String,
    pub mime_type: String,
}

/// Where the question for the chat stage comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestionSource {
    Text(String),
    Audio(AudioClip),
}

impl QuestionSource {
    pub fn is_audio(&self) -> bool {
        matches!(self, QuestionSource::Audio(_))
    }
}

/// A classified chat request; only complete shapes can be constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatRequest {
    pub video_description: String,
    pub question_source: QuestionSource,
    pub chat_history: Vec<ChatTurn>,
    pub additional_context: String,
}

impl ChatRequest {
    pub fn text(video_description: impl Into<String>, question: impl Into<String>) -> Self {
        Self {
            video_description: video_description.into(),
            question_source: QuestionSource::Text(question.into()),
            chat_history: Vec::new(),
            additional_context: String::new(),
        }
    }

    pub fn audio(video_description: impl Into<String>, clip: AudioClip) -> Self {
        Self {
            video_description: video_description.into(),
            question_source: QuestionSource::Audio(clip),
            chat_history: Vec::new(),
            additional_context: String::new(),
        }
    }

    pub fn with_history(mut self, chat_history: Vec<ChatTurn>) -> Self {
        self.chat_history = chat_history;
        self
    }

    pub fn with_additional_context(mut self, additional_context: impl Into<String>) -> Self {
        self.additional_context = additional_context.into();
        self
    }
}
