use super::*;

#[test]
fn detail_field_wins() {
    let body = r#"{"detail":"Invalid credentials","message":"other"}"#;
    assert_eq!(message_from_body(body, "fallback"), "Invalid credentials");
}

#[test]
fn message_field_used_without_detail() {
    let body = r#"{"message":"User role updated successfully"}"#;
    assert_eq!(message_from_body(body, "fallback"), "User role updated successfully");
}

#[test]
fn empty_detail_falls_through_to_message() {
    let body = r#"{"detail":"","message":"still useful"}"#;
    assert_eq!(message_from_body(body, "fallback"), "still useful");
}

#[test]
fn non_string_detail_is_ignored() {
    let body = r#"{"detail":{"loc":["body","email"]}}"#;
    assert_eq!(message_from_body(body, "fallback"), "fallback");
}

#[test]
fn unparseable_body_uses_fallback() {
    assert_eq!(message_from_body("<html>502</html>", "fallback"), "fallback");
    assert_eq!(message_from_body("", GENERIC_ERROR), GENERIC_ERROR);
}

#[test]
fn status_fallback_names_the_status() {
    assert_eq!(fallback_for_status(500), "Request failed with status 500");
}

#[test]
fn transport_errors_keep_their_text() {
    assert_eq!(from_transport(&"connection refused"), "connection refused");
}

#[test]
fn silent_transport_errors_get_the_generic_message() {
    assert_eq!(from_transport(&""), GENERIC_ERROR);
}
