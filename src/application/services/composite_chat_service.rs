use crate::application::ports::LlmClient;
use crate::domain::{AudioClip, ChatRequest, QuestionSource, ResponseSource, Transcript};

use super::{ChatCompletionService, PipelineError, TranscriptionService};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatAnswer {
    pub answer: String,
    pub source: ResponseSource,
}

/// Runs the optional transcription stage followed by the chat completion stage.
pub struct CompositeChatService<L>
where
    L: LlmClient,
{
    transcription: TranscriptionService,
    chat: ChatCompletionService<L>,
}

impl<L> CompositeChatService<L>
where
    L: LlmClient,
{
    pub fn new(transcription: TranscriptionService, chat: ChatCompletionService<L>) -> Self {
        Self {
            transcription,
            chat,
        }
    }

    pub async fn answer(&self, request: &ChatRequest) -> Result<ChatAnswer, PipelineError> {
        let has_audio = request.question_source.is_audio();
        tracing::info!(
            has_audio,
            question_length = match &request.question_source {
                QuestionSource::Text(question) => question.len(),
                QuestionSource::Audio(_) => 0,
            },
            video_description_length = request.video_description.len(),
            history_turns = request.chat_history.len(),
            "Processing chat request"
        );

        let transcript;
        let (question, source) = match &request.question_source {
            QuestionSource::Text(question) => (question.as_str(), ResponseSource::TextInput),
            QuestionSource::Audio(clip) => {
                transcript = self.transcription.transcribe(clip).await?;
                tracing::info!(
                    text_length = transcript.as_str().len(),
                    "Transcription completed"
                );
                (transcript.as_str(), ResponseSource::AudioTranscription)
            }
        };

        let answer = self.chat.answer(request, question).await?;
        Ok(ChatAnswer { answer, source })
    }

    pub async fn transcribe(&self, clip: &AudioClip) -> Result<Transcript, PipelineError> {
        self.transcription.transcribe(clip).await
    }

    pub fn transcription_model(&self) -> &str {
        self.transcription.model()
    }
}
