use super::*;

#[test]
fn valid_payload_builds_trimmed_fields() {
    let fields = prepare_submission(
        " Pothole on 5th ",
        "Deep pothole near the crosswalk",
        "5th Ave & Pine St",
        "pothole",
    )
    .unwrap();
    assert_eq!(fields.name, "Pothole on 5th");
    assert_eq!(fields.description, "Deep pothole near the crosswalk");
    assert_eq!(fields.address, "5th Ave & Pine St");
    assert_eq!(fields.report_type, "pothole");
}

#[test]
fn invalid_fields_never_build_a_request() {
    let errors = prepare_submission("ab", "short", "123", "pothole").unwrap_err();
    assert!(errors.name.is_some());
    assert!(errors.description.is_some());
    assert!(errors.address.is_some());
}

#[test]
fn missing_type_is_blocked() {
    let errors =
        prepare_submission("Pothole", "Deep and getting worse", "5th Ave & Pine", "").unwrap_err();
    assert_eq!(errors.report_type, Some("Please select a report type"));
}

#[test]
fn success_redirect_targets_the_new_report() {
    assert_eq!(detail_route(17), "/reports/17");
}

#[test]
fn success_message_quotes_the_report_name() {
    let report = Report {
        id: 17,
        image: None,
        severity: 0,
        description: "Deep pothole near the crosswalk".to_owned(),
        name: "Pothole on 5th".to_owned(),
        address: "5th Ave & Pine St".to_owned(),
        status: "pending".to_owned(),
        report_type: "pothole".to_owned(),
        created_at: "2024-03-01T09:30:00Z".to_owned(),
        updated_at: "2024-03-01T09:30:00Z".to_owned(),
        user: 1,
    };
    assert!(success_message(&report).contains("\"Pothole on 5th\""));
}

#[test]
fn default_type_option_is_pothole() {
    assert_eq!(REPORT_TYPES[0].0, "pothole");
}
