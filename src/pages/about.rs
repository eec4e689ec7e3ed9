//! About page: static marketing content.

use leptos::prelude::*;

use crate::components::navbar::Navbar;

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <div class="page about-page">
            <Navbar>
                <a href="/" class="navbar__link">"Home"</a>
                <a href="/about" class="navbar__link navbar__link--active">"About"</a>
                <a href="/contact" class="navbar__link">"Contact"</a>
                <a href="/auth/signin" class="btn btn--ghost btn--sm">"Sign In"</a>
            </Navbar>

            <main class="page__main page__main--narrow">
                <header class="page__header">
                    <h1>"About AsphaltAid"</h1>
                    <p>"Connecting citizens with the crews that keep roads safe"</p>
                </header>

                <article class="card card--pad-lg static-copy">
                    <h2>"Our Mission"</h2>
                    <p>
                        "Road damage costs drivers money, slows emergency response, and gets \
                         worse the longer it waits. AsphaltAid makes reporting a defect as easy \
                         as taking a photo, then gives maintenance teams a ranked, mapped queue \
                         of what to fix first."
                    </p>

                    <h2>"How It Works"</h2>
                    <p>
                        "Citizens submit reports with a photo, description, and location. Our \
                         backend assesses each report's severity automatically, and crews track \
                         every issue from pending to resolved. Everyone can browse the community \
                         reports and watch problems get fixed."
                    </p>

                    <h2>"Who We Are"</h2>
                    <p>
                        "AsphaltAid is built by a small team of civic-technology engineers who \
                         believe infrastructure maintenance should be transparent and \
                         participatory. We work with municipalities of every size."
                    </p>
                </article>
            </main>
        </div>
    }
}
