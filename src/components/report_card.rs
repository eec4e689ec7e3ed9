//! Reusable card component for report list items.
//!
//! DESIGN
//! ======
//! Keeps listing presentation in one place and centralizes the defensive
//! severity/status badge mapping for values the backend may add later.

use leptos::prelude::*;

use crate::net::types::Report;
use crate::util::format;

/// A clickable card linking to a report's detail page.
#[component]
pub fn ReportCard(report: Report) -> impl IntoView {
    let href = format!("/reports/{}", report.id);
    let severity_badge = format!("badge {}", format::severity_class(report.severity));
    let status_badge = format!("badge {}", format::status_class(&report.status));

    view! {
        <a class="report-card" href=href>
            <div class="report-card__media">
                {match report.image.clone() {
                    Some(url) => view! {
                        <img class="report-card__image" src=url alt=report.name.clone()/>
                    }
                        .into_any(),
                    None => view! {
                        <span class="report-card__placeholder" aria-hidden="true">"\u{1f4f7}"</span>
                    }
                        .into_any(),
                }}
            </div>
            <div class="report-card__body">
                <div class="report-card__header">
                    <h3 class="report-card__name">{report.name.clone()}</h3>
                    <span class=severity_badge>
                        {format!("Severity {}", report.severity)}
                    </span>
                </div>
                <p class="report-card__description">{report.description.clone()}</p>
                <p class="report-card__address">{report.address.clone()}</p>
                <div class="report-card__footer">
                    <span class=status_badge>{format::status_label(&report.status)}</span>
                    <span class="report-card__date">{format::format_date(&report.created_at)}</span>
                </div>
                <p class="report-card__type">
                    {format!("Type: {}", format::report_type_label(&report.report_type))}
                </p>
            </div>
        </a>
    }
}
