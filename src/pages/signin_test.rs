use super::*;

#[test]
fn invalid_credentials_never_build_a_request() {
    // The network client only ever sees an Ok(SignInRequest); failing
    // validation short-circuits to field errors.
    let result = prepare_submission("", "");
    let errors = result.unwrap_err();
    assert_eq!(errors.username, Some("Please enter your username"));
    assert_eq!(errors.password, Some("Password is required"));
}

#[test]
fn short_credentials_are_rejected_before_the_network() {
    let errors = prepare_submission("ab", "x").unwrap_err();
    assert!(errors.username.is_some());
    assert!(errors.password.is_some());
}

#[test]
fn valid_credentials_build_the_request() {
    let request = prepare_submission("jdoe", "secret").unwrap();
    assert_eq!(request.username, "jdoe");
    assert_eq!(request.password, "secret");
}

#[test]
fn success_message_prefers_first_name() {
    let response = AuthResponse {
        token: "t".to_owned(),
        username: "jdoe".to_owned(),
        first_name: "Jo".to_owned(),
        last_name: "Doe".to_owned(),
        email: "jo@example.com".to_owned(),
    };
    assert_eq!(
        success_message(&response),
        "Welcome back, Jo! You have been successfully signed in."
    );
}

#[test]
fn success_message_falls_back_to_username() {
    let response = AuthResponse {
        token: "t".to_owned(),
        username: "jdoe".to_owned(),
        first_name: String::new(),
        last_name: String::new(),
        email: "jo@example.com".to_owned(),
    };
    assert!(success_message(&response).starts_with("Welcome back, jdoe!"));
}
