mod chat;
mod chat_response;
mod composite;
mod transcribe;

pub use chat::text_chat_handler;
pub use chat_response::{ChatResponse, status_for};
pub use composite::{PONG, composite_chat_handler, ping_handler};
pub use transcribe::{
    BookmarkData, TranscriptionMetadata, TranscriptionResponse, TranscriptionServiceDescriptor,
    transcribe_handler, transcription_descriptor_handler,
};
