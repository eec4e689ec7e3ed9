//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{
    about::AboutPage, contact::ContactPage, dashboard::DashboardPage, home::HomePage,
    privacy::PrivacyPage, report_create::ReportCreatePage, report_detail::ReportDetailPage,
    reports::ReportsPage, signin::SignInPage, signup::SignUpPage, terms::TermsPage,
};
use crate::state::session;
use crate::state::ui::UiState;
use crate::util::dark_mode;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta
                    name="description"
                    content="Report road problems like potholes and cracks and track their \
                             resolution with AI-assessed severity."
                />
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared session and UI contexts and sets up client-side
/// routing for every screen.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // The session is loaded once from storage and injected; pages never
    // reach for an ambient token.
    let session = RwSignal::new(session::load());
    let ui = RwSignal::new(UiState {
        dark_mode: dark_mode::init(),
    });

    provide_context(session);
    provide_context(ui);

    view! {
        <Stylesheet id="leptos" href="/pkg/asphaltaid.css"/>
        <Title text="AsphaltAid"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("about") view=AboutPage/>
                <Route path=StaticSegment("contact") view=ContactPage/>
                <Route path=StaticSegment("privacy") view=PrivacyPage/>
                <Route path=StaticSegment("terms") view=TermsPage/>
                <Route
                    path=(StaticSegment("auth"), StaticSegment("signin"))
                    view=SignInPage
                />
                <Route
                    path=(StaticSegment("auth"), StaticSegment("signup"))
                    view=SignUpPage
                />
                <Route path=StaticSegment("dashboard") view=DashboardPage/>
                <Route path=StaticSegment("reports") view=ReportsPage/>
                <Route
                    path=(StaticSegment("reports"), StaticSegment("create"))
                    view=ReportCreatePage
                />
                <Route
                    path=(StaticSegment("reports"), ParamSegment("id"))
                    view=ReportDetailPage
                />
            </Routes>
        </Router>
    }
}
