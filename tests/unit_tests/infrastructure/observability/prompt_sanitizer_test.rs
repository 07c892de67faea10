use reelchat::infrastructure::observability::sanitize_prompt;

#[test]
fn given_blank_text_when_sanitizing_then_returns_empty_marker() {
    assert_eq!(sanitize_prompt("   "), "[EMPTY]");
}

#[test]
fn given_short_text_when_sanitizing_then_returns_trimmed_text() {
    assert_eq!(sanitize_prompt("  Which cheese?  "), "Which cheese?");
}

#[test]
fn given_long_text_when_sanitizing_then_truncates_with_total_length() {
    let long = "é".repeat(150);

    let sanitized = sanitize_prompt(&long);

    assert!(sanitized.starts_with(&"é".repeat(100)));
    assert!(sanitized.ends_with("... (150 chars total)"));
}

#[test]
fn given_credentials_when_sanitizing_then_masks_them() {
    let sanitized = sanitize_prompt("Authorization: Bearer sk-secret and url?api_key=abc&x=1");

    assert!(!sanitized.contains("sk-secret"));
    assert!(!sanitized.contains("abc"));
    assert!(sanitized.contains("Bearer [REDACTED]"));
    assert!(sanitized.contains("api_key=[REDACTED]&x=1"));
}
