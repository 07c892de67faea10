use axum::http::HeaderValue;
use reelchat::infrastructure::observability::RequestId;

#[test]
fn given_header_value_when_resolving_then_reuses_it() {
    let header = HeaderValue::from_static("req-123");

    let request_id = RequestId::from_header(Some(&header));

    assert_eq!(request_id.as_str(), "req-123");
}

#[test]
fn given_no_header_when_resolving_then_generates_uuid() {
    let request_id = RequestId::from_header(None);

    assert!(uuid::Uuid::parse_str(request_id.as_str()).is_ok());
}

#[test]
fn given_empty_header_when_resolving_then_generates_uuid() {
    let header = HeaderValue::from_static("");

    let request_id = RequestId::from_header(Some(&header));

    assert!(!request_id.as_str().is_empty());
    assert!(uuid::Uuid::parse_str(request_id.as_str()).is_ok());
}
