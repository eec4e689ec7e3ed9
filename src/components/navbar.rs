//! Sticky top navigation bar.

use leptos::prelude::*;

use crate::state::ui::UiState;
use crate::util::dark_mode;

/// Brand bar shared by every page. `children` fills the right-hand action
/// slot; pages compose their own link sets and buttons there.
#[component]
pub fn Navbar(
    #[prop(default = "/")] brand_href: &'static str,
    children: Children,
) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <nav class="navbar">
            <a class="navbar__brand" href=brand_href>
                <span class="navbar__logo" aria-hidden="true">"A"</span>
                <span class="navbar__title">"AsphaltAid"</span>
            </a>
            <span class="navbar__spacer"></span>
            {children()}
            <button
                class="btn btn--ghost navbar__theme-toggle"
                title="Toggle dark mode"
                on:click=move |_| {
                    let next = dark_mode::set(!ui.get().dark_mode);
                    ui.update(|u| u.dark_mode = next);
                }
            >
                {move || if ui.get().dark_mode { "\u{2600}" } else { "\u{263e}" }}
            </button>
        </nav>
    }
}
