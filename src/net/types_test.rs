use super::*;

fn sample_report_json() -> &'static str {
    r#"{
        "id": 42,
        "image": null,
        "severity": 2,
        "description": "Deep pothole near the crosswalk",
        "name": "Pothole on 5th",
        "address": "5th Ave & Pine St",
        "status": "pending",
        "report_type": "pothole",
        "created_at": "2024-03-01T09:30:00Z",
        "updated_at": "2024-03-02T11:00:00Z",
        "user": 7
    }"#
}

#[test]
fn report_deserializes_from_backend_shape() {
    let report: Report = serde_json::from_str(sample_report_json()).unwrap();
    assert_eq!(report.id, 42);
    assert_eq!(report.image, None);
    assert_eq!(report.severity, 2);
    assert_eq!(report.status, "pending");
    assert_eq!(report.report_type, "pothole");
    assert_eq!(report.user, 7);
}

#[test]
fn report_accepts_unrecognized_status_and_type() {
    let raw = sample_report_json()
        .replace("\"pending\"", "\"triaged\"")
        .replace("\"pothole\"", "\"sinkhole\"");
    let report: Report = serde_json::from_str(&raw).unwrap();
    assert_eq!(report.status, "triaged");
    assert_eq!(report.report_type, "sinkhole");
}

#[test]
fn reports_list_response_round_trips() {
    let json = format!(
        r#"{{"detail": "ok", "count": 1, "reports": [{}]}}"#,
        sample_report_json()
    );
    let parsed: ReportsListResponse = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed.count, 1);
    assert_eq!(parsed.reports.len(), 1);
    assert_eq!(parsed.reports[0].name, "Pothole on 5th");
}

#[test]
fn sign_up_request_serializes_contract_field_names() {
    let req = SignUpRequest {
        username: "jdoe".to_owned(),
        email: "jdoe@example.com".to_owned(),
        password: "Secret1!".to_owned(),
        confirm_password: "Secret1!".to_owned(),
        first_name: "Jo".to_owned(),
        last_name: "Doe".to_owned(),
    };
    let value = serde_json::to_value(&req).unwrap();
    let obj = value.as_object().unwrap();
    for key in [
        "username",
        "email",
        "password",
        "confirm_password",
        "first_name",
        "last_name",
    ] {
        assert!(obj.contains_key(key), "missing field {key}");
    }
}
