use super::*;

#[test]
fn numeric_ids_parse() {
    assert_eq!(parse_report_id(Some("42".to_owned())), Some(42));
}

#[test]
fn missing_param_is_none() {
    assert_eq!(parse_report_id(None), None);
}

#[test]
fn non_numeric_ids_are_rejected() {
    assert_eq!(parse_report_id(Some("latest".to_owned())), None);
    assert_eq!(parse_report_id(Some(String::new())), None);
}
