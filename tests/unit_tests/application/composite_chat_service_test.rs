use std::sync::Arc;

use reelchat::domain::{AudioClip, ChatRequest, ChatRole, ChatTurn, ErrorKind, ResponseSource};

use crate::helpers::{
    FakeLlmClient, FakeTranscriptionEngine, MOCK_ANSWER, build_service, encode_audio,
};

fn audio_request() -> ChatRequest {
    ChatRequest::audio(
        "Carbonara",
        AudioClip {
            audio_data: encode_audio(b"voice"),
            file_name: "question.webm".to_string(),
            mime_type: "audio/webm".to_string(),
        },
    )
}

#[tokio::test]
async fn given_text_question_when_answering_then_skips_transcription() {
    let scratch = tempfile::TempDir::new().unwrap();
    let engine = Arc::new(FakeTranscriptionEngine::returning("unused"));
    let llm = Arc::new(FakeLlmClient::answering(MOCK_ANSWER));
    let service = build_service(&engine, &llm, scratch.path());

    let answer = service
        .answer(&ChatRequest::text("Carbonara", "Which cheese?"))
        .await
        .unwrap();

    assert_eq!(answer.answer, MOCK_ANSWER);
    assert_eq!(answer.source, ResponseSource::TextInput);
    assert_eq!(engine.calls(), 0);
    assert!(llm.prompts()[0].contains("Current Question: Which cheese?"));
}

#[tokio::test]
async fn given_audio_question_when_answering_then_prompt_uses_transcript() {
    let scratch = tempfile::TempDir::new().unwrap();
    let engine = Arc::new(FakeTranscriptionEngine::returning("Can I use bacon?"));
    let llm = Arc::new(FakeLlmClient::answering(MOCK_ANSWER));
    let service = build_service(&engine, &llm, scratch.path());

    let answer = service.answer(&audio_request()).await.unwrap();

    assert_eq!(answer.source, ResponseSource::AudioTranscription);
    assert_eq!(engine.calls(), 1);
    assert!(llm.prompts()[0].contains("Current Question: Can I use bacon?"));
}

#[tokio::test]
async fn given_history_and_context_when_answering_then_prompt_carries_both() {
    let scratch = tempfile::TempDir::new().unwrap();
    let engine = Arc::new(FakeTranscriptionEngine::returning("unused"));
    let llm = Arc::new(FakeLlmClient::answering(MOCK_ANSWER));
    let service = build_service(&engine, &llm, scratch.path());
    let request = ChatRequest::text("Carbonara", "And the pasta?")
        .with_history(vec![
            ChatTurn::new(ChatRole::User, "Which cheese?"),
            ChatTurn::new(ChatRole::Ai, "Pecorino."),
        ])
        .with_additional_context("Gluten free");

    service.answer(&request).await.unwrap();

    let prompt = &llm.prompts()[0];
    assert!(prompt.contains("User: Which cheese?\nAI: Pecorino."));
    assert!(prompt.contains("User Context: Gluten free"));
}

#[tokio::test]
async fn given_transcription_failure_when_answering_then_llm_is_not_called() {
    let scratch = tempfile::TempDir::new().unwrap();
    let engine = Arc::new(FakeTranscriptionEngine::failing("boom"));
    let llm = Arc::new(FakeLlmClient::answering(MOCK_ANSWER));
    let service = build_service(&engine, &llm, scratch.path());

    let error = service.answer(&audio_request()).await.unwrap_err();

    assert_eq!(error.kind, ErrorKind::Transcription);
    assert!(llm.prompts().is_empty());
}

#[tokio::test]
async fn given_llm_failure_when_answering_then_reports_ai_chat_error() {
    let scratch = tempfile::TempDir::new().unwrap();
    let engine = Arc::new(FakeTranscriptionEngine::returning("unused"));
    let llm = Arc::new(FakeLlmClient::failing("model overloaded"));
    let service = build_service(&engine, &llm, scratch.path());

    let error = service
        .answer(&ChatRequest::text("Carbonara", "Which cheese?"))
        .await
        .unwrap_err();

    assert_eq!(error.kind, ErrorKind::AiChat);
    assert!(error.message.contains("model overloaded"));
}

#[test]
fn given_service_when_asking_model_then_reports_engine_model() {
    let scratch = tempfile::TempDir::new().unwrap();
    let engine = Arc::new(FakeTranscriptionEngine::returning("unused"));
    let llm = Arc::new(FakeLlmClient::answering(MOCK_ANSWER));

    let service = build_service(&engine, &llm, scratch.path());

    assert_eq!(service.transcription_model(), "fake-whisper");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn given_concurrent_requests_with_same_file_name_when_answering_then_none_fail() {
    let scratch = tempfile::TempDir::new().unwrap();
    let engine = Arc::new(FakeTranscriptionEngine::returning("Can I use bacon?"));
    let llm = Arc::new(FakeLlmClient::answering(MOCK_ANSWER));
    let service = build_service(&engine, &llm, scratch.path());
    let request = audio_request();

    for _ in 0..50 {
        let (first, second) = tokio::join!(service.answer(&request), service.answer(&request));

        assert_eq!(first.unwrap().source, ResponseSource::AudioTranscription);
        assert_eq!(second.unwrap().source, ResponseSource::AudioTranscription);
    }

    assert_eq!(engine.calls(), 100);
    assert_eq!(std::fs::read_dir(scratch.path()).unwrap().count(), 0);
}
