use super::*;

fn valid_fields() -> SignUpFields {
    SignUpFields {
        first_name: "Jo".to_owned(),
        last_name: "Doe".to_owned(),
        email: "jo@example.com".to_owned(),
        username: "jo_doe".to_owned(),
        password: "Str0ng!pass".to_owned(),
        confirm_password: "Str0ng!pass".to_owned(),
    }
}

#[test]
fn valid_fields_build_the_contract_request() {
    let request = prepare_submission(&valid_fields()).unwrap();
    assert_eq!(request.username, "jo_doe");
    assert_eq!(request.confirm_password, "Str0ng!pass");
    assert_eq!(request.first_name, "Jo");
}

#[test]
fn weak_password_is_blocked_before_the_network() {
    // Eight lowercase letters meet the length rule but score 50 < 75.
    let mut fields = valid_fields();
    fields.password = "abcdefgh".to_owned();
    fields.confirm_password = "abcdefgh".to_owned();
    let errors = prepare_submission(&fields).unwrap_err();
    assert_eq!(errors.password, Some("Please choose a stronger password"));
}

#[test]
fn mismatched_confirmation_is_blocked() {
    let mut fields = valid_fields();
    fields.confirm_password = "Other1!pass".to_owned();
    let errors = prepare_submission(&fields).unwrap_err();
    assert_eq!(errors.confirm_password, Some("Passwords do not match"));
}

#[test]
fn success_message_uses_first_name() {
    let response = AuthResponse {
        token: "t".to_owned(),
        username: "jdoe".to_owned(),
        first_name: "Jo".to_owned(),
        last_name: "Doe".to_owned(),
        email: "jo@example.com".to_owned(),
    };
    assert!(success_message(&response).starts_with("Welcome to AsphaltAid, Jo!"));
}
