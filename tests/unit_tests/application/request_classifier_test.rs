use reelchat::application::services::request_classifier::{
    MISSING_AUDIO_FIELDS, parse_audio_clip, parse_chat_request, parse_text_chat_request,
};
use reelchat::application::services::{Classified, MISSING_REQUIRED_FIELDS, classify};
use reelchat::domain::{ChatRole, ErrorKind, QuestionSource};

#[test]
fn given_ping_path_when_classifying_then_ignores_body() {
    let classified = classify("/ping", b"\xff not json").unwrap();

    assert_eq!(classified, Classified::Ping);
}

#[test]
fn given_text_body_when_classifying_then_applies_defaults() {
    let body = br#"{"videoDescription":"Carbonara","question":"Which cheese?"}"#;

    let Classified::Chat(request) = classify("/", body).unwrap() else {
        panic!("expected chat request");
    };

    assert_eq!(request.video_description, "Carbonara");
    assert_eq!(
        request.question_source,
        QuestionSource::Text("Which cheese?".to_string())
    );
    assert!(request.chat_history.is_empty());
    assert_eq!(request.additional_context, "");
}

#[test]
fn given_history_and_context_when_parsing_then_keeps_them_verbatim() {
    let body = br#"{
        "videoDescription": "Carbonara",
        "question": "And the pasta?",
        "additionalContext": "Vegetarian",
        "chatHistory": [
            {"role": "User", "content": "Which cheese?"},
            {"role": "AI", "content": "Pecorino."}
        ]
    }"#;

    let request = parse_chat_request(body).unwrap();

    assert_eq!(request.additional_context, "Vegetarian");
    assert_eq!(request.chat_history.len(), 2);
    assert_eq!(request.chat_history[0].role, ChatRole::User);
    assert_eq!(request.chat_history[1].content, "Pecorino.");
}

#[test]
fn given_complete_audio_trio_and_question_when_parsing_then_audio_wins() {
    let body = br#"{
        "videoDescription": "Carbonara",
        "question": "typed question",
        "audioData": "AAAA",
        "fileName": "recording.m4a",
        "mimeType": "audio/m4a"
    }"#;

    let request = parse_chat_request(body).unwrap();

    match request.question_source {
        QuestionSource::Audio(clip) => {
            assert_eq!(clip.file_name, "recording.m4a");
            assert_eq!(clip.mime_type, "audio/m4a");
        }
        QuestionSource::Text(_) => panic!("expected audio source"),
    }
}

#[test]
fn given_partial_audio_trio_when_parsing_then_rejects_shape() {
    let body = br#"{"videoDescription":"Carbonara","question":"q","audioData":"AAAA"}"#;

    let error = parse_chat_request(body).unwrap_err();

    assert_eq!(error.kind, ErrorKind::Validation);
    assert_eq!(error.message, MISSING_AUDIO_FIELDS);
}

#[test]
fn given_neither_question_nor_audio_when_parsing_then_reports_missing_fields() {
    let error = parse_chat_request(br#"{"videoDescription":"Carbonara"}"#).unwrap_err();

    assert_eq!(error.kind, ErrorKind::Validation);
    assert_eq!(error.message, MISSING_REQUIRED_FIELDS);
}

#[test]
fn given_missing_video_description_when_parsing_then_reports_missing_fields() {
    let error = parse_chat_request(br#"{"question":"Which cheese?"}"#).unwrap_err();

    assert_eq!(error.message, MISSING_REQUIRED_FIELDS);
}

#[test]
fn given_blank_question_when_parsing_then_treats_it_as_missing() {
    let error =
        parse_chat_request(br#"{"videoDescription":"Carbonara","question":"   "}"#).unwrap_err();

    assert_eq!(error.message, MISSING_REQUIRED_FIELDS);
}

#[test]
fn given_invalid_json_when_parsing_then_returns_validation_error() {
    let error = parse_chat_request(b"not json").unwrap_err();

    assert_eq!(error.kind, ErrorKind::Validation);
    assert!(error.message.starts_with("Request body must be valid JSON"));
}

#[test]
fn given_non_object_json_when_parsing_then_returns_validation_error() {
    let error = parse_chat_request(b"[1, 2, 3]").unwrap_err();

    assert_eq!(error.kind, ErrorKind::Validation);
}

#[test]
fn given_audio_fields_when_parsing_text_only_then_ignores_them() {
    let body = br#"{"videoDescription":"Carbonara","question":"q","audioData":"AAAA"}"#;

    let request = parse_text_chat_request(body).unwrap();

    assert_eq!(request.question_source, QuestionSource::Text("q".to_string()));
}

#[test]
fn given_empty_body_when_parsing_audio_clip_then_reports_missing_audio_fields() {
    let error = parse_audio_clip(b"{}").unwrap_err();

    assert_eq!(error.message, MISSING_AUDIO_FIELDS);
}
