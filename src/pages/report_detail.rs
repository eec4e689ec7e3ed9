//! Report detail page with a dedicated not-found state.

#[cfg(test)]
#[path = "report_detail_test.rs"]
mod report_detail_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::navbar::Navbar;
use crate::net::types::Report;
use crate::state::session::{self, SessionState};
use crate::util::auth::install_signin_redirect;
use crate::util::format;

/// Parse the `:id` route param. Anything non-numeric renders the
/// not-found state without a network call.
fn parse_report_id(raw: Option<String>) -> Option<i64> {
    raw?.parse().ok()
}

#[component]
pub fn ReportDetailPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();
    install_signin_redirect(session, navigate.clone());

    let params = use_params_map();
    let report = RwSignal::new(None::<Report>);
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);

    let fetched = RwSignal::new(false);
    Effect::new(move || {
        if fetched.get() || !session.get().is_authenticated() {
            return;
        }
        fetched.set(true);
        let Some(id) = parse_report_id(params.get().get("id")) else {
            error.set(Some("The requested report could not be found.".to_owned()));
            loading.set(false);
            return;
        };
        let token = session
            .get_untracked()
            .token()
            .unwrap_or_default()
            .to_owned();
        leptos::task::spawn_local(async move {
            match crate::net::api::get_report(&token, id).await {
                Ok(response) => report.set(Some(response.report)),
                Err(message) => error.set(Some(message)),
            }
            loading.set(false);
        });
    });

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
                        <p>"Loading report details..."</p>
                    </div>
                }
            }
        >
            <Show
                when=move || report.get().is_some()
                fallback=move || {
                    view! {
                        <div class="page page--centered">
                            <span class="not-found__icon" aria-hidden="true">"\u{26a0}"</span>
                            <h3>"Report Not Found"</h3>
                            <p>
                                {move || {
                                    error
                                        .get()
                                        .unwrap_or_else(|| {
                                            "The requested report could not be found.".to_owned()
                                        })
                                }}
                            </p>
                            <a href="/reports" class="btn btn--primary">"Back to Reports"</a>
                        </div>
                    }
                }
            >
                <div class="page report-detail-page">
                    <Navbar brand_href="/dashboard">
                        <a href="/reports" class="btn btn--outline btn--sm">"All Reports"</a>
                        <button class="btn btn--ghost btn--sm" on:click=move |_| on_sign_out.run(())>
                            "Sign Out"
                        </button>
                    </Navbar>

                    <main class="page__main page__main--narrow">
                        {move || {
                            report
                                .get()
                                .map(|report| {
                                    let severity_badge = format!(
                                        "badge {}",
                                        format::severity_class(report.severity),
                                    );
                                    let status_badge = format!(
                                        "badge {}",
                                        format::status_class(&report.status),
                                    );
                                    view! {
                                        <div class="breadcrumb">
                                            <a href="/reports">"Reports"</a>
                                            <span aria-hidden="true">"\u{203a}"</span>
                                            <span class="breadcrumb__current">{report.name.clone()}</span>
                                        </div>

                                        <article class="card card--pad-lg report-detail">
                                            <div class="report-detail__media">
                                                {match report.image.clone() {
                                                    Some(url) => view! {
                                                        <img
                                                            class="report-detail__image"
                                                            src=url
                                                            alt=report.name.clone()
                                                        />
                                                    }
                                                        .into_any(),
                                                    None => view! {
                                                        <span
                                                            class="report-detail__placeholder"
                                                            aria-hidden="true"
                                                        >
                                                            "\u{1f4f7}"
                                                        </span>
                                                    }
                                                        .into_any(),
                                                }}
                                            </div>

                                            <header class="report-detail__header">
                                                <h1>{report.name.clone()}</h1>
                                                <div class="report-detail__badges">
                                                    <span class=severity_badge>
                                                        {format!(
                                                            "{} ({})",
                                                            format::severity_label(report.severity),
                                                            report.severity,
                                                        )}
                                                    </span>
                                                    <span class=status_badge>
                                                        {format::status_label(&report.status)}
                                                    </span>
                                                </div>
                                            </header>

                                            <dl class="report-detail__facts">
                                                <dt>"Type"</dt>
                                                <dd>{format::report_type_label(&report.report_type)}</dd>
                                                <dt>"Location"</dt>
                                                <dd>{report.address.clone()}</dd>
                                                <dt>"Reported"</dt>
                                                <dd>{format::format_date_time(&report.created_at)}</dd>
                                                <dt>"Last Updated"</dt>
                                                <dd>{format::format_date_time(&report.updated_at)}</dd>
                                                <dt>"Report ID"</dt>
                                                <dd>{format!("#{}", report.id)}</dd>
                                            </dl>

                                            <section class="report-detail__description">
                                                <h2>"Description"</h2>
                                                <p>{report.description.clone()}</p>
                                            </section>
                                        </article>
                                    }
                                })
                        }}
                    </main>
                </div>
            </Show>
        </Show>
    }
}
