use super::*;

fn report(id: i64, name: &str, report_type: &str, status: &str, severity: i32) -> Report {
    Report {
        id,
        image: None,
        severity,
        description: format!("{name} description"),
        name: name.to_owned(),
        address: format!("{id} Main St"),
        status: status.to_owned(),
        report_type: report_type.to_owned(),
        created_at: format!("2024-03-{:02}T09:30:00Z", (id % 27) + 1),
        updated_at: "2024-03-28T09:30:00Z".to_owned(),
        user: 1,
    }
}

fn sample_set() -> Vec<Report> {
    vec![
        report(1, "Pothole on 5th", "pothole", "pending", 3),
        report(2, "Hairline crack", "crack", "resolved", 0),
        report(3, "Sunk lane", "road_sink", "in_progress", 2),
        report(4, "Pothole cluster", "pothole", "resolved", 1),
        report(5, "Odd bump", "other", "pending", 1),
    ]
}

// =============================================================
// filtering
// =============================================================

#[test]
fn empty_filters_match_everything() {
    let reports = sample_set();
    assert_eq!(apply(&reports, &ReportFilters::default()).len(), reports.len());
}

#[test]
fn search_is_case_insensitive_across_fields() {
    let reports = sample_set();
    let mut filters = ReportFilters::default();

    filters.search = "POTHOLE".to_owned();
    assert_eq!(apply(&reports, &filters).len(), 2);

    // Address matches too ("3 Main St").
    filters.search = "3 main".to_owned();
    assert_eq!(apply(&reports, &filters).len(), 1);

    // Description matches ("Odd bump description").
    filters.search = "odd bump desc".to_owned();
    assert_eq!(apply(&reports, &filters).len(), 1);
}

#[test]
fn type_status_and_severity_filters_are_exact() {
    let reports = sample_set();
    let mut filters = ReportFilters::default();

    filters.report_type = "pothole".to_owned();
    assert_eq!(apply(&reports, &filters).len(), 2);

    filters = ReportFilters::default();
    filters.status = "resolved".to_owned();
    assert_eq!(apply(&reports, &filters).len(), 2);

    filters = ReportFilters::default();
    filters.severity = "1".to_owned();
    assert_eq!(apply(&reports, &filters).len(), 2);
}

#[test]
fn filter_predicates_commute() {
    // Filtering by type then status must equal status then type for any
    // fixed search/severity values.
    let reports = sample_set();

    let mut type_only = ReportFilters::default();
    type_only.report_type = "pothole".to_owned();
    let mut status_only = ReportFilters::default();
    status_only.status = "resolved".to_owned();

    let type_then_status: Vec<i64> = apply(&apply(&reports, &type_only), &status_only)
        .iter()
        .map(|r| r.id)
        .collect();
    let status_then_type: Vec<i64> = apply(&apply(&reports, &status_only), &type_only)
        .iter()
        .map(|r| r.id)
        .collect();
    assert_eq!(type_then_status, status_then_type);

    // And both equal the combined predicate.
    let mut combined = ReportFilters::default();
    combined.report_type = "pothole".to_owned();
    combined.status = "resolved".to_owned();
    let both: Vec<i64> = apply(&reports, &combined).iter().map(|r| r.id).collect();
    assert_eq!(type_then_status, both);
}

#[test]
fn unmatched_filters_yield_empty_set() {
    let reports = sample_set();
    let mut filters = ReportFilters::default();
    filters.search = "no such report".to_owned();
    assert!(apply(&reports, &filters).is_empty());
}

// =============================================================
// sorting
// =============================================================

#[test]
fn default_sort_is_newest_first() {
    let reports = sample_set();
    let sorted = apply(&reports, &ReportFilters::default());
    let ids: Vec<i64> = sorted.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![5, 4, 3, 2, 1]);
}

#[test]
fn severity_sort_ascending() {
    let reports = sample_set();
    let mut filters = ReportFilters::default();
    filters.sort_by = SortBy::Severity;
    filters.sort_order = SortOrder::Asc;
    let severities: Vec<i32> = apply(&reports, &filters).iter().map(|r| r.severity).collect();
    assert_eq!(severities, vec![0, 1, 1, 2, 3]);
}

#[test]
fn severity_sort_keeps_tie_fetch_order() {
    let reports = sample_set();
    let mut filters = ReportFilters::default();
    filters.sort_by = SortBy::Severity;
    filters.sort_order = SortOrder::Asc;
    let ids: Vec<i64> = apply(&reports, &filters).iter().map(|r| r.id).collect();
    // Reports 4 and 5 tie at severity 1 and keep fetch order in both
    // directions; the comparator reverses, the sort stays stable.
    assert_eq!(ids, vec![2, 4, 5, 3, 1]);

    filters.sort_order = SortOrder::Desc;
    let ids: Vec<i64> = apply(&reports, &filters).iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![1, 3, 4, 5, 2]);
}

#[test]
fn name_sort_ignores_case() {
    let mut reports = sample_set();
    reports[0].name = "aardvark pothole".to_owned();
    let mut filters = ReportFilters::default();
    filters.sort_by = SortBy::Name;
    filters.sort_order = SortOrder::Asc;
    let first = &apply(&reports, &filters)[0];
    assert_eq!(first.id, 1);
}

#[test]
fn sort_keys_round_trip_select_values() {
    for sort_by in SortBy::ALL {
        assert_eq!(SortBy::from_key(sort_by.key()), sort_by);
    }
    assert_eq!(SortBy::from_key("bogus"), SortBy::CreatedAt);
}

// =============================================================
// pagination
// =============================================================

#[test]
fn page_count_is_ceiling_division() {
    assert_eq!(page_count(0), 0);
    assert_eq!(page_count(1), 1);
    assert_eq!(page_count(12), 1);
    assert_eq!(page_count(13), 2);
    assert_eq!(page_count(24), 2);
    assert_eq!(page_count(25), 3);
}

#[test]
fn page_slice_returns_twelve_per_page() {
    let reports: Vec<Report> = (1..=30)
        .map(|id| report(id, &format!("r{id}"), "pothole", "pending", 0))
        .collect();
    assert_eq!(page_slice(&reports, 1).len(), 12);
    assert_eq!(page_slice(&reports, 2).len(), 12);
    assert_eq!(page_slice(&reports, 3).len(), 6);
}

#[test]
fn page_slice_of_empty_set_is_empty_not_an_error() {
    assert!(page_slice(&[], 1).is_empty());
}

#[test]
fn out_of_range_page_is_empty() {
    let reports = sample_set();
    assert!(page_slice(&reports, 99).is_empty());
}

#[test]
fn page_items_window_around_current() {
    use PageItem::{Ellipsis, Page};
    assert_eq!(page_items(1, 1), vec![Page(1)]);
    assert_eq!(page_items(1, 3), vec![Page(1), Page(2), Page(3)]);
    assert_eq!(
        page_items(5, 9),
        vec![Page(1), Ellipsis, Page(4), Page(5), Page(6), Ellipsis, Page(9)]
    );
    assert_eq!(
        page_items(1, 9),
        vec![Page(1), Page(2), Ellipsis, Page(9)]
    );
}

// =============================================================
// list controls
// =============================================================

#[test]
fn filter_setters_reset_the_page() {
    let mut controls = ListControls::default();
    controls.set_page(4);
    controls.set_search("pothole".to_owned());
    assert_eq!(controls.page, 1);

    controls.set_page(4);
    controls.set_status("resolved".to_owned());
    assert_eq!(controls.page, 1);

    controls.set_page(4);
    controls.set_severity("2".to_owned());
    assert_eq!(controls.page, 1);

    controls.set_page(4);
    controls.set_report_type("crack".to_owned());
    assert_eq!(controls.page, 1);

    controls.set_page(4);
    controls.set_sort_by(SortBy::Name);
    assert_eq!(controls.page, 1);

    controls.set_page(4);
    controls.toggle_sort_order();
    assert_eq!(controls.page, 1);
}

#[test]
fn clear_filters_restores_defaults() {
    let mut controls = ListControls::default();
    controls.set_search("x".to_owned());
    controls.set_sort_by(SortBy::Status);
    controls.clear_filters();
    assert_eq!(controls, ListControls::default());
}

#[test]
fn set_page_clamps_to_one() {
    let mut controls = ListControls::default();
    controls.set_page(0);
    assert_eq!(controls.page, 1);
}

#[test]
fn toggle_sort_order_flips_both_ways() {
    assert_eq!(SortOrder::Desc.toggled(), SortOrder::Asc);
    assert_eq!(SortOrder::Asc.toggled(), SortOrder::Desc);
}
