use super::*;

#[test]
fn default_status_is_idle() {
    let status: FormStatus<()> = FormStatus::default();
    assert_eq!(status, FormStatus::Idle);
    assert!(!status.is_submitting());
}

#[test]
fn submitting_is_flagged() {
    let status: FormStatus<()> = FormStatus::Submitting;
    assert!(status.is_submitting());
    assert!(status.success().is_none());
    assert!(status.failure().is_none());
}

#[test]
fn success_exposes_payload() {
    let status = FormStatus::Succeeded(42_i64);
    assert_eq!(status.success(), Some(&42));
    assert!(status.failure().is_none());
}

#[test]
fn failure_exposes_message() {
    let status: FormStatus<()> = FormStatus::Failed("Invalid credentials".to_owned());
    assert_eq!(status.failure(), Some("Invalid credentials"));
    assert!(status.success().is_none());
    assert!(!status.is_submitting());
}
