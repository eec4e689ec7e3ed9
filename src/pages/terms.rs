//! Terms of service page: static content.

use leptos::prelude::*;

use crate::components::navbar::Navbar;

#[component]
pub fn TermsPage() -> impl IntoView {
    view! {
        <div class="page terms-page">
            <Navbar>
                <a href="/" class="navbar__link">"Home"</a>
                <a href="/about" class="navbar__link">"About"</a>
                <a href="/contact" class="navbar__link">"Contact"</a>
            </Navbar>

            <main class="page__main page__main--narrow">
                <header class="page__header">
                    <h1>"Terms of Service"</h1>
                </header>

                <article class="card card--pad-lg static-copy">
                    <h2>"Acceptable Use"</h2>
                    <p>
                        "Reports must describe real road conditions. Deliberately false or \
                         abusive reports may be removed and repeat offenders may lose access."
                    </p>

                    <h2>"Your Content"</h2>
                    <p>
                        "You keep ownership of the photos and text you submit, and you grant \
                         AsphaltAid and its municipal partners a license to use them for road \
                         maintenance and public reporting purposes."
                    </p>

                    <h2>"No Warranty"</h2>
                    <p>
                        "AsphaltAid relays reports to the responsible organizations but cannot \
                         guarantee any repair timeline. Severity scores are automated estimates, \
                         not engineering assessments."
                    </p>

                    <h2>"Changes"</h2>
                    <p>
                        "We may update these terms; continued use after an update constitutes \
                         acceptance of the revised terms."
                    </p>
                </article>
            </main>
        </div>
    }
}
