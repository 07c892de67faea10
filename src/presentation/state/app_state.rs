use std::sync::Arc;

use crate::application::ports::LlmClient;
use crate::application::services::CompositeChatService;

pub struct AppState<L>
where
    L: LlmClient,
{
    pub chat_service: Arc<CompositeChatService<L>>,
    pub max_body_bytes: usize,
}

impl<L> Clone for AppState<L>
where
    L: LlmClient,
{
    fn clone(&self) -> Self {
        Self {
            chat_service: Arc::clone(&self.chat_service),
            max_body_bytes: self.max_body_bytes,
        }
    }
}
