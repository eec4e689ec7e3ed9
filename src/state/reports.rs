//! Report-collection state and the filter/sort/paginate pipeline.
//!
//! DESIGN
//! ======
//! The backend returns the whole collection; everything below is derived
//! on the client as a pure function of `(collection, controls)` and
//! recomputed on every change. No memoization, no incremental state. The
//! filter setters are the single place the current page resets to 1, so
//! a page can never outlive the filter state that produced it.

#[cfg(test)]
#[path = "reports_test.rs"]
mod reports_test;

use crate::net::types::Report;
use crate::util::format::timestamp_sort_key;

/// Reports shown per listing page.
pub const PAGE_SIZE: usize = 12;

/// Sortable columns of the listing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortBy {
    /// Submission date, parsed leniently.
    #[default]
    CreatedAt,
    /// Numeric severity 0-3.
    Severity,
    /// Case-insensitive report name.
    Name,
    /// Raw status string.
    Status,
}

impl SortBy {
    /// Value of the sort `<select>` option.
    pub fn key(self) -> &'static str {
        match self {
            Self::CreatedAt => "created_at",
            Self::Severity => "severity",
            Self::Name => "name",
            Self::Status => "status",
        }
    }

    /// Parse a `<select>` option value; unknown values keep the default.
    pub fn from_key(key: &str) -> Self {
        match key {
            "severity" => Self::Severity,
            "name" => Self::Name,
            "status" => Self::Status,
            _ => Self::CreatedAt,
        }
    }

    /// Label of the sort `<select>` option.
    pub fn label(self) -> &'static str {
        match self {
            Self::CreatedAt => "Date Created",
            Self::Severity => "Severity",
            Self::Name => "Name",
            Self::Status => "Status",
        }
    }

    /// All options in display order.
    pub const ALL: [Self; 4] = [Self::CreatedAt, Self::Severity, Self::Name, Self::Status];
}

/// Sort direction; newest-first is the landing default.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    pub fn toggled(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }

    /// Arrow glyph for the direction toggle button.
    pub fn arrow(self) -> &'static str {
        match self {
            Self::Asc => "\u{2191}",
            Self::Desc => "\u{2193}",
        }
    }
}

/// Current filter values. Empty strings mean "no filter".
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReportFilters {
    /// Case-insensitive substring matched against name, description, and
    /// address.
    pub search: String,
    /// Exact report-type match, or all when empty.
    pub report_type: String,
    /// Exact status match, or all when empty.
    pub status: String,
    /// Severity as its string form ("0".."3"), or all when empty.
    pub severity: String,
    pub sort_by: SortBy,
    pub sort_order: SortOrder,
}

/// Listing controls: filters plus the 1-based current page.
///
/// Every filter mutation goes through a setter that resets the page, per
/// the listing contract.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListControls {
    pub filters: ReportFilters,
    pub page: usize,
}

impl Default for ListControls {
    fn default() -> Self {
        Self {
            filters: ReportFilters::default(),
            page: 1,
        }
    }
}

impl ListControls {
    pub fn set_search(&mut self, search: String) {
        self.filters.search = search;
        self.page = 1;
    }

    pub fn set_report_type(&mut self, report_type: String) {
        self.filters.report_type = report_type;
        self.page = 1;
    }

    pub fn set_status(&mut self, status: String) {
        self.filters.status = status;
        self.page = 1;
    }

    pub fn set_severity(&mut self, severity: String) {
        self.filters.severity = severity;
        self.page = 1;
    }

    pub fn set_sort_by(&mut self, sort_by: SortBy) {
        self.filters.sort_by = sort_by;
        self.page = 1;
    }

    pub fn toggle_sort_order(&mut self) {
        self.filters.sort_order = self.filters.sort_order.toggled();
        self.page = 1;
    }

    /// Reset every filter to the landing defaults.
    pub fn clear_filters(&mut self) {
        *self = Self::default();
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }
}

/// Whether a report passes every active filter predicate. Predicates are
/// independent, so application order does not matter.
pub fn matches(report: &Report, filters: &ReportFilters) -> bool {
    let needle = filters.search.to_lowercase();
    let matches_search = needle.is_empty()
        || report.name.to_lowercase().contains(&needle)
        || report.description.to_lowercase().contains(&needle)
        || report.address.to_lowercase().contains(&needle);

    let matches_type =
        filters.report_type.is_empty() || report.report_type == filters.report_type;
    let matches_status = filters.status.is_empty() || report.status == filters.status;
    let matches_severity =
        filters.severity.is_empty() || report.severity.to_string() == filters.severity;

    matches_search && matches_type && matches_status && matches_severity
}

/// Filter and sort the fetched collection. The sort is stable, so rows
/// that compare equal keep their fetch order in either direction.
pub fn apply(reports: &[Report], filters: &ReportFilters) -> Vec<Report> {
    let mut filtered: Vec<Report> = reports
        .iter()
        .filter(|report| matches(report, filters))
        .cloned()
        .collect();

    let descending = filters.sort_order == SortOrder::Desc;
    filtered.sort_by(|a, b| {
        let ordering = match filters.sort_by {
            SortBy::CreatedAt => {
                timestamp_sort_key(&a.created_at).cmp(&timestamp_sort_key(&b.created_at))
            }
            SortBy::Severity => a.severity.cmp(&b.severity),
            SortBy::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
            SortBy::Status => a.status.cmp(&b.status),
        };
        if descending { ordering.reverse() } else { ordering }
    });

    filtered
}

/// Number of pages a filtered set spans: `ceil(len / PAGE_SIZE)`.
pub fn page_count(filtered_len: usize) -> usize {
    filtered_len.div_ceil(PAGE_SIZE)
}

/// The slice of the filtered set shown on a 1-based page. Out-of-range
/// pages yield an empty slice rather than panicking.
pub fn page_slice(filtered: &[Report], page: usize) -> Vec<Report> {
    let start = page.saturating_sub(1) * PAGE_SIZE;
    filtered
        .iter()
        .skip(start)
        .take(PAGE_SIZE)
        .cloned()
        .collect()
}

/// Pagination control items: windowed page numbers with ellipses, always
/// including the first and last page and the current page's neighbors.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageItem {
    Page(usize),
    Ellipsis,
}

/// Build the pagination strip for `total` pages around `current`.
pub fn page_items(current: usize, total: usize) -> Vec<PageItem> {
    let mut items = Vec::new();
    for page in 1..=total {
        let shown = page == 1
            || page == total
            || (page + 1 >= current && page <= current + 1);
        if shown {
            items.push(PageItem::Page(page));
        } else if page + 2 == current || page == current + 2 {
            items.push(PageItem::Ellipsis);
        }
    }
    items
}
