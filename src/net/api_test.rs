use super::*;

#[test]
fn endpoints_format_expected_paths() {
    assert_eq!(sign_in_endpoint(), "/api/users/auth/signin/");
    assert_eq!(sign_up_endpoint(), "/api/users/auth/signup/");
    assert_eq!(reports_endpoint(), "/api/reports/reports/");
    assert_eq!(report_endpoint(42), "/api/reports/reports/42/");
}

#[test]
fn auth_header_uses_token_scheme() {
    assert_eq!(auth_header_value("abc123"), "Token abc123");
}

#[test]
fn error_message_prefers_message_field() {
    let body = r#"{"message": "Invalid credentials", "detail": "nope"}"#;
    assert_eq!(error_message(401, "Unauthorized", body), "Invalid credentials");
}

#[test]
fn error_message_falls_back_to_detail_field() {
    let body = r#"{"detail": "Report not found."}"#;
    assert_eq!(error_message(404, "Not Found", body), "Report not found.");
}

#[test]
fn error_message_falls_back_to_status_line() {
    assert_eq!(
        error_message(502, "Bad Gateway", "<html>oops</html>"),
        "HTTP 502: Bad Gateway"
    );
    assert_eq!(error_message(500, "Internal Server Error", ""), "HTTP 500: Internal Server Error");
}

#[test]
fn error_message_ignores_json_without_known_fields() {
    let body = r#"{"error": "something"}"#;
    assert_eq!(error_message(400, "Bad Request", body), "HTTP 400: Bad Request");
}

#[test]
fn multipart_carries_all_text_fields() {
    assert_eq!(
        multipart_field_names(false),
        vec!["name", "description", "address", "report_type"]
    );
}

#[test]
fn multipart_carries_image_part_when_attached() {
    assert_eq!(
        multipart_field_names(true),
        vec!["name", "description", "address", "report_type", "image"]
    );
}
