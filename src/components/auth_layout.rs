//! Shared shell for the sign-in and sign-up pages.

use leptos::prelude::*;

use super::card::{Card, CardPadding, CardVariant};

/// Centered brand header + card wrapper around an auth form.
#[component]
pub fn AuthLayout(
    title: &'static str,
    #[prop(optional)] subtitle: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="auth-page">
            <div class="auth-page__inner">
                <a class="auth-page__brand" href="/">
                    <span class="navbar__logo" aria-hidden="true">"A"</span>
                    <span class="auth-page__brand-name">"AsphaltAid"</span>
                </a>
                <p class="auth-page__tagline">"Smart road infrastructure reporting"</p>

                <Card variant=CardVariant::Elevated padding=CardPadding::Lg>
                    <div class="auth-page__heading">
                        <h2>{title}</h2>
                        {subtitle.map(|text| view! { <p class="auth-page__subtitle">{text}</p> })}
                    </div>
                    {children()}
                </Card>

                <div class="auth-page__links">
                    <a href="/about">"About Us"</a>
                    <span aria-hidden="true">"\u{2022}"</span>
                    <a href="/contact">"Contact"</a>
                    <span aria-hidden="true">"\u{2022}"</span>
                    <a href="/privacy">"Privacy"</a>
                </div>
            </div>
        </div>
    }
}
