use super::*;

#[test]
fn stored_preference_wins_over_system() {
    assert!(resolve(Some("true"), false));
    assert!(!resolve(Some("false"), true));
}

#[test]
fn system_preference_is_the_fallback() {
    assert!(resolve(None, true));
    assert!(!resolve(None, false));
}

#[test]
fn unexpected_stored_values_read_as_light() {
    assert!(!resolve(Some("yes"), true));
}
