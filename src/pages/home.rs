//! Marketing landing page.

use leptos::prelude::*;

use crate::components::navbar::Navbar;

struct Feature {
    icon: &'static str,
    title: &'static str,
    body: &'static str,
}

const FEATURES: [Feature; 3] = [
    Feature {
        icon: "\u{1f4f8}",
        title: "Snap and Submit",
        body: "Photograph the problem, add a short description, and submit in under a \
               minute. Your location can be filled in automatically.",
    },
    Feature {
        icon: "\u{1f9e0}",
        title: "AI Severity Assessment",
        body: "Every report is scored for urgency so crews can prioritize the most \
               dangerous defects first.",
    },
    Feature {
        icon: "\u{1f4c8}",
        title: "Track Progress",
        body: "Follow your reports from pending through resolution and see what your \
               community has already fixed.",
    },
];

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="page home-page">
            <Navbar>
                <a href="/" class="navbar__link navbar__link--active">"Home"</a>
                <a href="/about" class="navbar__link">"About"</a>
                <a href="/contact" class="navbar__link">"Contact"</a>
                <a href="/reports" class="navbar__link navbar__link--highlight">"Reports"</a>
                <a href="/auth/signin" class="btn btn--ghost btn--sm">"Sign In"</a>
                <a href="/auth/signup" class="btn btn--secondary btn--sm">"Get Started"</a>
            </Navbar>

            <main class="page__main">
                <section class="hero">
                    <h1>"Smart Road Infrastructure Reporting"</h1>
                    <p class="hero__lead">
                        "Report potholes, cracks, and road damage in seconds. AsphaltAid routes \
                         every report to the right crew with an AI-assessed severity score."
                    </p>
                    <div class="hero__actions">
                        <a href="/auth/signup" class="btn btn--primary btn--lg">"Report an Issue"</a>
                        <a href="/about" class="btn btn--outline btn--lg">"Learn More"</a>
                    </div>
                </section>

                <section class="home-page__features">
                    {FEATURES
                        .iter()
                        .map(|feature| {
                            view! {
                                <div class="card card--pad-lg home-page__feature">
                                    <span class="home-page__feature-icon" aria-hidden="true">
                                        {feature.icon}
                                    </span>
                                    <h3>{feature.title}</h3>
                                    <p>{feature.body}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </section>

                <section class="home-page__cta card">
                    <h2>"Ready to make your streets safer?"</h2>
                    <p>"Join your neighbors already reporting and tracking road issues."</p>
                    <a href="/auth/signup" class="btn btn--secondary">"Create a Free Account"</a>
                </section>
            </main>

            <footer class="page__footer">
                <a href="/privacy">"Privacy"</a>
                <a href="/terms">"Terms"</a>
                <a href="/contact">"Contact"</a>
            </footer>
        </div>
    }
}
