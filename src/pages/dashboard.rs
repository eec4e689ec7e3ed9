//! Dashboard page: the authenticated landing route.
//!
//! SYSTEM CONTEXT
//! ==============
//! Shows the two primary actions and a best-effort impact stat read from
//! the cached report count. The cache is non-authoritative; the listing
//! page refreshes it on every fetch.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::navbar::Navbar;
use crate::state::session::{self, SessionState};
use crate::util::auth::install_signin_redirect;
use crate::util::storage;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();
    install_signin_redirect(session, navigate.clone());

    let reports_count = RwSignal::new(0_u64);
    Effect::new(move || {
        if let Some(count) = storage::load_report_count() {
            reports_count.set(count);
        }
    });

    let navigate_out = navigate.clone();
    let on_sign_out = move |_| {
        session::sign_out(session);
        navigate_out("/", NavigateOptions::default());
    };

    view! {
        <div class="page dashboard-page">
            <Navbar brand_href="/dashboard">
                <button class="btn btn--ghost btn--sm" on:click=on_sign_out>
                    "Sign Out"
                </button>
            </Navbar>

            <main class="page__main">
                <header class="page__header">
                    <h1>"Welcome to Your Dashboard"</h1>
                    <p>
                        "You have successfully signed in to AsphaltAid. Start reporting road \
                         issues and making a difference in your community."
                    </p>
                </header>

                <div class="dashboard-page__actions">
                    <div class="card card--pad-lg dashboard-page__action">
                        <span class="dashboard-page__action-icon" aria-hidden="true">"+"</span>
                        <h3>"Report New Issue"</h3>
                        <p>
                            "Found a pothole or road damage? Report it quickly with photos and \
                             location data."
                        </p>
                        <a href="/reports/create" class="btn btn--secondary btn--full">
                            "Create Report"
                        </a>
                    </div>

                    <div class="card card--pad-lg dashboard-page__action">
                        <span class="dashboard-page__action-icon" aria-hidden="true">"\u{1f4ca}"</span>
                        <h3>"Browse Reports"</h3>
                        <p>
                            "View all community reports, track the status of submitted reports, \
                             and see resolution progress."
                        </p>
                        <a href="/reports" class="btn btn--outline btn--full">
                            "View All Reports"
                        </a>
                    </div>
                </div>

                <div class="card dashboard-page__impact">
                    <h2>"Your Impact"</h2>
                    <div class="dashboard-page__impact-stat">
                        <span class="dashboard-page__impact-count">
                            {move || reports_count.get().to_string()}
                        </span>
                        <span class="dashboard-page__impact-label">"Reports Available"</span>
                        <p class="dashboard-page__impact-note">
                            "Total number of reports in the community database"
                        </p>
                    </div>
                </div>
            </main>
        </div>
    }
}
