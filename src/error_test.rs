use super::*;

// =============================================================================
// from_response
// =============================================================================

#[test]
fn unauthorized_keeps_detail() {
    let err = ApiError::from_response(401, r#"{"detail":"Invalid credentials"}"#);
    assert_eq!(
        err,
        ApiError::Unauthorized { status: 401, detail: Some("Invalid credentials".to_owned()) }
    );
}

#[test]
fn forbidden_without_body_is_unauthorized() {
    let err = ApiError::from_response(403, "");
    assert_eq!(err, ApiError::Unauthorized { status: 403, detail: None });
}

#[test]
fn bad_request_with_detail_is_validation() {
    let err = ApiError::from_response(400, r#"{"detail":"Email already registered"}"#);
    assert_eq!(
        err,
        ApiError::Validation { status: 400, detail: "Email already registered".to_owned() }
    );
}

#[test]
fn validation_list_uses_first_msg() {
    let body = r#"{"detail":[{"loc":["body","email"],"msg":"field required","type":"value_error"}]}"#;
    let err = ApiError::from_response(422, body);
    assert_eq!(err, ApiError::Validation { status: 422, detail: "field required".to_owned() });
}

#[test]
fn html_body_is_plain_status() {
    let err = ApiError::from_response(502, "<html>Bad Gateway</html>");
    assert_eq!(err, ApiError::Status { status: 502 });
}

#[test]
fn blank_detail_is_plain_status() {
    let err = ApiError::from_response(500, r#"{"detail":"   "}"#);
    assert_eq!(err, ApiError::Status { status: 500 });
}

// =============================================================================
// helpers
// =============================================================================

#[test]
fn not_found_detection_uses_status() {
    assert!(ApiError::from_response(404, r#"{"detail":"Post not found"}"#).is_not_found());
    assert!(!ApiError::Network("offline".into()).is_not_found());
}

#[test]
fn user_message_prefers_server_detail() {
    let err = ApiError::Validation { status: 400, detail: "Email already registered".into() };
    assert_eq!(err.user_message("Registration failed"), "Email already registered");
}

#[test]
fn user_message_falls_back_for_network() {
    let err = ApiError::Network("connection refused".into());
    assert_eq!(err.user_message("Error logging in"), "Error logging in");
}

#[test]
fn user_message_shows_local_validation() {
    let err = ApiError::Invalid("Title and content are required".into());
    assert_eq!(err.user_message("ignored"), "Title and content are required");
}

#[test]
fn display_includes_status() {
    assert_eq!(ApiError::Status { status: 503 }.to_string(), "unexpected status 503");
}
