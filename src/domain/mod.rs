mod audio_format;
mod chat_request;
mod chat_turn;
mod outcome;
mod transcript;

pub use audio_format::{AudioFormat, MAX_AUDIO_BYTES};
pub use chat_request::{AudioClip, ChatRequest, QuestionSource};
pub use chat_turn::{ChatRole, ChatTurn, format_chat_history};
pub use outcome::{ErrorKind, ResponseSource};
pub use transcript::Transcript;
