use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::domain::{AudioClip, ChatRequest, ChatTurn, QuestionSource};

use super::PipelineError;

pub const PING_PATH: &str = "/ping";
pub const MISSING_AUDIO_FIELDS: &str = "Missing required audio fields";

/// Routing decision for one inbound request. The body is only parsed for non-ping paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classified {
    Ping,
    Chat(ChatRequest),
}

// No Debug: the audio payload must never reach a log line.
#[derive(Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawChatRequest {
    video_description: Option<String>,
    question: Option<String>,
    chat_history: Option<Vec<ChatTurn>>,
    additional_context: Option<String>,
    audio_data: Option<String>,
    file_name: Option<String>,
    mime_type: Option<String>,
}

#[derive(Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawAudioRequest {
    audio_data: Option<String>,
    file_name: Option<String>,
    mime_type: Option<String>,
}

pub fn classify(path: &str, body: &[u8]) -> Result<Classified, PipelineError> {
    if path == PING_PATH {
        return Ok(Classified::Ping);
    }

    parse_chat_request(body).map(Classified::Chat)
}

/// Resolves a composite request. A complete audio trio takes precedence over a text question.
pub fn parse_chat_request(body: &[u8]) -> Result<ChatRequest, PipelineError> {
    let raw: RawChatRequest = parse_body(body)?;

    let audio = audio_clip_from_parts(raw.audio_data, raw.file_name, raw.mime_type)?;
    let question_source = match (audio, non_empty(raw.question)) {
        (Some(clip), _) => QuestionSource::Audio(clip),
        (None, Some(question)) => QuestionSource::Text(question),
        (None, None) => return Err(PipelineError::missing_required_fields()),
    };

    let video_description =
        non_empty(raw.video_description).ok_or_else(PipelineError::missing_required_fields)?;

    Ok(ChatRequest {
        video_description,
        question_source,
        chat_history: raw.chat_history.unwrap_or_default(),
        additional_context: raw.additional_context.unwrap_or_default(),
    })
}

/// Resolves a text-only request; audio fields are ignored.
pub fn parse_text_chat_request(body: &[u8]) -> Result<ChatRequest, PipelineError> {
    let raw: RawChatRequest = parse_body(body)?;

    match (non_empty(raw.video_description), non_empty(raw.question)) {
        (Some(video_description), Some(question)) => Ok(ChatRequest {
            video_description,
            question_source: QuestionSource::Text(question),
            chat_history: raw.chat_history.unwrap_or_default(),
            additional_context: raw.additional_context.unwrap_or_default(),
        }),
        _ => Err(PipelineError::validation(
            "Missing required fields: videoDescription or question",
        )),
    }
}

pub fn parse_audio_clip(body: &[u8]) -> Result<AudioClip, PipelineError> {
    let raw: RawAudioRequest = parse_body(body)?;

    audio_clip_from_parts(raw.audio_data, raw.file_name, raw.mime_type)?
        .ok_or_else(|| PipelineError::validation(MISSING_AUDIO_FIELDS))
}

fn parse_body<T: DeserializeOwned>(body: &[u8]) -> Result<T, PipelineError> {
    serde_json::from_slice(body)
        .map_err(|e| PipelineError::validation(format!("Request body must be valid JSON: {}", e)))
}

fn audio_clip_from_parts(
    audio_data: Option<String>,
    file_name: Option<String>,
    mime_type: Option<String>,
) -> Result<Option<AudioClip>, PipelineError> {
    match (non_empty(audio_data), non_empty(file_name), non_empty(mime_type)) {
        (None, None, None) => Ok(None),
        (Some(audio_data), Some(file_name), Some(mime_type)) => Ok(Some(AudioClip {
            audio_data,
            file_name,
            mime_type,
        })),
        _ => Err(PipelineError::validation(MISSING_AUDIO_FIELDS)),
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
