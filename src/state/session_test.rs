use super::*;

#[test]
fn default_session_is_unauthenticated() {
    let session = SessionState::default();
    assert!(!session.is_authenticated());
    assert_eq!(session.token(), None);
}

#[test]
fn with_token_is_authenticated() {
    let session = SessionState::with_token("tok_abc");
    assert!(session.is_authenticated());
    assert_eq!(session.token(), Some("tok_abc"));
}

#[test]
fn set_then_clear_round_trips() {
    let mut session = SessionState::default();
    session.set_token("tok_abc".to_owned());
    assert!(session.is_authenticated());
    session.clear();
    assert!(!session.is_authenticated());
    assert_eq!(session.token(), None);
}

#[test]
fn load_outside_browser_is_unauthenticated() {
    // No localStorage in tests; the session starts empty.
    assert!(!load().is_authenticated());
}
