use std::sync::Arc;

use crate::application::ports::LlmClient;
use crate::domain::ChatRequest;

use super::{PipelineError, build_prompt};

pub struct ChatCompletionService<L>
where
    L: LlmClient,
{
    llm_client: Arc<L>,
}

impl<L> ChatCompletionService<L>
where
    L: LlmClient,
{
    pub fn new(llm_client: Arc<L>) -> Self {
        Self { llm_client }
    }

    pub async fn answer(
        &self,
        request: &ChatRequest,
        question: &str,
    ) -> Result<String, PipelineError> {
        let prompt = build_prompt(
            &request.video_description,
            &request.additional_context,
            &request.chat_history,
            question,
        );

        tracing::debug!(
            prompt_chars = prompt.len(),
            history_turns = request.chat_history.len(),
            "Invoking chat completion"
        );

        self.llm_client.complete(&prompt).await.map_err(|e| {
            tracing::error!(error = %e, "Chat completion provider call failed");
            PipelineError::ai_chat(e.to_string())
        })
    }
}
