use docrelay::infrastructure::observability::sanitize_prompt;

#[test]
fn given_empty_prompt_when_sanitizing_then_returns_empty_marker() {
    assert_eq!(sanitize_prompt(""), "[EMPTY]");
    assert_eq!(sanitize_prompt("   \n\t"), "[EMPTY]");
}

#[test]
fn given_short_prompt_when_sanitizing_then_returned_trimmed() {
    assert_eq!(sanitize_prompt("  hello world  "), "hello world");
}

#[test]
fn given_long_prompt_when_sanitizing_then_truncated_with_length_note() {
    let prompt = "a".repeat(250);

    let sanitized = sanitize_prompt(&prompt);

    assert!(sanitized.starts_with(&"a".repeat(100)));
    assert!(sanitized.contains("(250 chars total)"));
}

#[test]
fn given_multibyte_prompt_when_sanitizing_then_no_panic_on_truncation() {
    let prompt = "日".repeat(150);

    let sanitized = sanitize_prompt(&prompt);

    assert!(sanitized.contains("(150 chars total)"));
}

#[test]
fn given_bearer_token_when_sanitizing_then_token_redacted() {
    let sanitized = sanitize_prompt("use Bearer sk-abc123 for auth");

    assert!(sanitized.contains("Bearer [REDACTED]"));
    assert!(!sanitized.contains("sk-abc123"));
}

#[test]
fn given_api_key_parameter_when_sanitizing_then_value_redacted() {
    let sanitized = sanitize_prompt("call /x?api_key=secret123&y=1");

    assert!(sanitized.contains("api_key=[REDACTED]"));
    assert!(!sanitized.contains("secret123"));
}
