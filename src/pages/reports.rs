//! Reports listing page: fetch-on-mount, filter bar, card grid, pagination.
//!
//! SYSTEM CONTEXT
//! ==============
//! The collection is fetched wholesale once per mount; filtering, sorting,
//! and pagination are derived in render closures from `state::reports` so
//! every control change recomputes from the authoritative fetch.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::navbar::Navbar;
use crate::components::report_card::ReportCard;
use crate::net::types::Report;
use crate::state::reports::{self, ListControls, PageItem, SortBy};
use crate::state::session::{self, SessionState};
use crate::util::auth::install_signin_redirect;
use crate::util::storage;

const TYPE_OPTIONS: [(&str, &str); 5] = [
    ("", "All Types"),
    ("pothole", "Pothole"),
    ("crack", "Crack"),
    ("road_sink", "Road Sink"),
    ("other", "Other"),
];

const STATUS_OPTIONS: [(&str, &str); 4] = [
    ("", "All Statuses"),
    ("pending", "Pending"),
    ("in_progress", "In Progress"),
    ("resolved", "Resolved"),
];

const SEVERITY_OPTIONS: [(&str, &str); 5] = [
    ("", "All Severities"),
    ("0", "Low (0)"),
    ("1", "Minor (1)"),
    ("2", "Moderate (2)"),
    ("3", "High (3)"),
];

#[component]
pub fn ReportsPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();
    install_signin_redirect(session, navigate.clone());

    let items = RwSignal::new(Vec::<Report>::new());
    let total_count = RwSignal::new(0_u64);
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);
    let controls = RwSignal::new(ListControls::default());

    // One fetch per mount, once the session is known to hold a token.
    let fetched = RwSignal::new(false);
    Effect::new(move || {
        if fetched.get() || !session.get().is_authenticated() {
            return;
        }
        fetched.set(true);
        let token = session
            .get_untracked()
            .token()
            .unwrap_or_default()
            .to_owned();
        leptos::task::spawn_local(async move {
            match crate::net::api::get_reports(&token).await {
                Ok(response) => {
                    storage::store_report_count(response.count);
                    total_count.set(response.count);
                    items.set(response.reports);
                    error.set(None);
                }
                Err(message) => error.set(Some(message)),
            }
            loading.set(false);
        });
    });

    let filtered = move || reports::apply(&items.get(), &controls.get().filters);
    let total_pages = move || reports::page_count(filtered().len());
    let page_reports = move || reports::page_slice(&filtered(), controls.get().page);

    let navigate_out = navigate.clone();
    let on_sign_out = Callback::new(move |()| {
        session::sign_out(session);
        navigate_out("/", NavigateOptions::default());
    });

    view! {
        <Show
            when=move || !loading.get()
            fallback=move || {
                view! {
                    <div class="page page--centered">
                        <div class="spinner" aria-hidden="true"></div>
                        <p>"Loading reports..."</p>
                    </div>
                }
            }
        >
            <div class="page reports-page">
                <Navbar brand_href="/dashboard">
                    <a href="/reports/create" class="btn btn--secondary btn--sm">"Create Report"</a>
                    <button class="btn btn--ghost btn--sm" on:click=move |_| on_sign_out.run(())>
                        "Sign Out"
                    </button>
                </Navbar>

                <main class="page__main">
                    <header class="page__header">
                        <h1>"Community Reports"</h1>
                        <p>"Browse and track road issues reported by the community"</p>
                    </header>

                    <Show when=move || error.get().is_some()>
                        <p class="reports-page__error">{move || error.get().unwrap_or_default()}</p>
                    </Show>

                    <div class="filter-bar card">
                        <input
                            class="field__input filter-bar__search"
                            type="text"
                            placeholder="Search reports..."
                            prop:value=move || controls.get().filters.search.clone()
                            on:input=move |ev| {
                                controls.update(|c| c.set_search(event_target_value(&ev)));
                            }
                        />

                        <select
                            class="field__input"
                            prop:value=move || controls.get().filters.report_type.clone()
                            on:change=move |ev| {
                                controls.update(|c| c.set_report_type(event_target_value(&ev)));
                            }
                        >
                            {TYPE_OPTIONS
                                .iter()
                                .map(|&(value, label)| view! { <option value=value>{label}</option> })
                                .collect_view()}
                        </select>

                        <select
                            class="field__input"
                            prop:value=move || controls.get().filters.status.clone()
                            on:change=move |ev| {
                                controls.update(|c| c.set_status(event_target_value(&ev)));
                            }
                        >
                            {STATUS_OPTIONS
                                .iter()
                                .map(|&(value, label)| view! { <option value=value>{label}</option> })
                                .collect_view()}
                        </select>

                        <select
                            class="field__input"
                            prop:value=move || controls.get().filters.severity.clone()
                            on:change=move |ev| {
                                controls.update(|c| c.set_severity(event_target_value(&ev)));
                            }
                        >
                            {SEVERITY_OPTIONS
                                .iter()
                                .map(|&(value, label)| view! { <option value=value>{label}</option> })
                                .collect_view()}
                        </select>

                        <div class="filter-bar__sort">
                            <select
                                class="field__input"
                                prop:value=move || controls.get().filters.sort_by.key()
                                on:change=move |ev| {
                                    controls
                                        .update(|c| {
                                            c.set_sort_by(SortBy::from_key(&event_target_value(&ev)));
                                        });
                                }
                            >
                                {SortBy::ALL
                                    .iter()
                                    .map(|sort_by| {
                                        view! { <option value=sort_by.key()>{sort_by.label()}</option> }
                                    })
                                    .collect_view()}
                            </select>
                            <button
                                class="btn btn--outline filter-bar__order"
                                title="Toggle sort direction"
                                on:click=move |_| controls.update(ListControls::toggle_sort_order)
                            >
                                {move || controls.get().filters.sort_order.arrow()}
                            </button>
                        </div>

                        <div class="filter-bar__meta">
                            <span>
                                {move || {
                                    format!(
                                        "Showing {} of {} reports",
                                        filtered().len(),
                                        total_count.get(),
                                    )
                                }}
                            </span>
                            <button
                                class="btn btn--link"
                                on:click=move |_| controls.update(ListControls::clear_filters)
                            >
                                "Clear Filters"
                            </button>
                        </div>
                    </div>

                    <Show
                        when=move || !page_reports().is_empty()
                        fallback=move || {
                            view! {
                                <div class="reports-page__empty">
                                    <span class="reports-page__empty-icon" aria-hidden="true">"\u{1f4c4}"</span>
                                    <h3>"No reports found"</h3>
                                    <p>"Try adjusting your search or filter criteria."</p>
                                    <a href="/reports/create" class="btn btn--primary">
                                        "Create First Report"
                                    </a>
                                </div>
                            }
                        }
                    >
                        <div class="reports-page__grid">
                            {move || {
                                page_reports()
                                    .into_iter()
                                    .map(|report| view! { <ReportCard report=report/> })
                                    .collect_view()
                            }}
                        </div>
                    </Show>

                    <Show when=move || { total_pages() > 1 }>
                        <div class="pagination">
                            <button
                                class="btn btn--outline"
                                disabled=move || controls.get().page <= 1
                                on:click=move |_| {
                                    controls
                                        .update(|c| {
                                            let previous = c.page.saturating_sub(1);
                                            c.set_page(previous);
                                        });
                                }
                            >
                                "Previous"
                            </button>
                            {move || {
                                let current = controls.get().page;
                                reports::page_items(current, total_pages())
                                    .into_iter()
                                    .map(|item| match item {
                                        PageItem::Page(page) => {
                                            let is_current = page == current;
                                            view! {
                                                <button
                                                    class="pagination__page"
                                                    class:pagination__page--current=is_current
                                                    on:click=move |_| controls.update(|c| c.set_page(page))
                                                >
                                                    {page}
                                                </button>
                                            }
                                                .into_any()
                                        }
                                        PageItem::Ellipsis => {
                                            view! {
                                                <span class="pagination__ellipsis" aria-hidden="true">
                                                    "..."
                                                </span>
                                            }
                                                .into_any()
                                        }
                                    })
                                    .collect_view()
                            }}
                            <button
                                class="btn btn--outline"
                                disabled=move || controls.get().page >= total_pages()
                                on:click=move |_| {
                                    let last = total_pages();
                                    controls
                                        .update(|c| {
                                            let next = (c.page + 1).min(last.max(1));
                                            c.set_page(next);
                                        });
                                }
                            >
                                "Next"
                            </button>
                        </div>
                    </Show>
                </main>
            </div>
        </Show>
    }
}
