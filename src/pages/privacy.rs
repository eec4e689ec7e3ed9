//! Privacy policy page: static content.

use leptos::prelude::*;

use crate::components::navbar::Navbar;

#[component]
pub fn PrivacyPage() -> impl IntoView {
    view! {
        <div class="page privacy-page">
            <Navbar>
                <a href="/" class="navbar__link">"Home"</a>
                <a href="/about" class="navbar__link">"About"</a>
                <a href="/contact" class="navbar__link">"Contact"</a>
            </Navbar>

            <main class="page__main page__main--narrow">
                <header class="page__header">
                    <h1>"Privacy Policy"</h1>
                </header>

                <article class="card card--pad-lg static-copy">
                    <h2>"What We Collect"</h2>
                    <p>
                        "We store the account details you provide (name, email, username) and \
                         the contents of the reports you submit, including photos and the \
                         locations you attach to them."
                    </p>

                    <h2>"How We Use It"</h2>
                    <p>
                        "Report contents are shared with the maintenance organizations \
                         responsible for the roads you report. Your account details are used \
                         only to operate your account; we do not sell personal data."
                    </p>

                    <h2>"Location Data"</h2>
                    <p>
                        "Your browser's location is read only when you press the location \
                         button on the report form, and only the coordinates placed in the \
                         address field are submitted."
                    </p>

                    <h2>"Contact"</h2>
                    <p>
                        "Questions about this policy? Reach us through the "
                        <a href="/contact">"contact page"</a>
                        "."
                    </p>
                </article>
            </main>
        </div>
    }
}
