use super::*;

#[test]
fn severity_labels_match_scale() {
    assert_eq!(severity_label(0), "Low");
    assert_eq!(severity_label(1), "Minor");
    assert_eq!(severity_label(2), "Moderate");
    assert_eq!(severity_label(3), "High");
}

#[test]
fn severity_out_of_range_degrades() {
    assert_eq!(severity_label(7), "Unknown");
    assert_eq!(severity_class(-1), "badge--neutral");
}

#[test]
fn status_mapping_is_defensive() {
    assert_eq!(status_label("pending"), "Pending");
    assert_eq!(status_label("in_progress"), "In Progress");
    assert_eq!(status_label("resolved"), "Resolved");
    assert_eq!(status_label("triaged"), "Unknown");
    assert_eq!(status_class("triaged"), "badge--neutral");
}

#[test]
fn report_type_label_title_cases_underscores() {
    assert_eq!(report_type_label("pothole"), "Pothole");
    assert_eq!(report_type_label("road_sink"), "Road Sink");
    assert_eq!(report_type_label("other"), "Other");
}

#[test]
fn report_type_label_handles_unknown_values() {
    assert_eq!(report_type_label("surface_erosion"), "Surface Erosion");
    assert_eq!(report_type_label(""), "");
}

#[test]
fn parse_timestamp_accepts_rfc3339() {
    let parsed = parse_timestamp("2024-03-01T09:30:00Z").unwrap();
    assert_eq!(parsed.timestamp(), 1_709_285_400);
}

#[test]
fn parse_timestamp_accepts_offsetless_form() {
    // Django emits this shape when USE_TZ is off; taken as UTC.
    let parsed = parse_timestamp("2024-03-01T09:30:00.123456").unwrap();
    assert_eq!(parsed.timestamp(), 1_709_285_400);
}

#[test]
fn parse_timestamp_rejects_garbage() {
    assert!(parse_timestamp("yesterday").is_none());
    assert!(parse_timestamp("").is_none());
}

#[test]
fn sort_key_orders_chronologically() {
    let early = timestamp_sort_key("2024-03-01T09:30:00Z");
    let late = timestamp_sort_key("2024-03-02T09:30:00Z");
    assert!(early < late);
}

#[test]
fn sort_key_puts_unparseable_first() {
    assert_eq!(timestamp_sort_key("bad"), i64::MIN);
}

#[test]
fn format_date_is_short_form() {
    assert_eq!(format_date("2024-03-01T09:30:00Z"), "Mar 1, 2024");
}

#[test]
fn format_date_time_is_long_form() {
    assert_eq!(format_date_time("2024-03-01T09:30:00Z"), "March 1, 2024 09:30 AM");
}

#[test]
fn format_date_falls_back_to_raw_input() {
    assert_eq!(format_date("not-a-date"), "not-a-date");
    assert_eq!(format_date_time("not-a-date"), "not-a-date");
}
