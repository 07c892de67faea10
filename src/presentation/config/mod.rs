mod environment;
mod settings;

pub use environment::Environment;
pub use settings::{
    LlmSettings, LoggingSettings, OPENAI_BASE_URL, ProviderKind, ServerSettings, Settings,
    TranscriptionSettings,
};
