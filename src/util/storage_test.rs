use super::*;

#[test]
fn storage_keys_are_stable() {
    // Both keys are part of the persisted contract with existing browsers.
    assert_eq!(TOKEN_KEY, "asphaltaid_token");
    assert_eq!(REPORTS_COUNT_KEY, "asphaltaid_reports_count");
}

#[test]
fn parse_report_count_accepts_plain_integers() {
    assert_eq!(parse_report_count("42"), Some(42));
    assert_eq!(parse_report_count(" 7 "), Some(7));
}

#[test]
fn parse_report_count_rejects_garbage() {
    assert_eq!(parse_report_count(""), None);
    assert_eq!(parse_report_count("lots"), None);
    assert_eq!(parse_report_count("-3"), None);
}

#[test]
fn get_item_is_none_outside_the_browser() {
    assert_eq!(get_item(TOKEN_KEY), None);
}
