//! Sign-in page: credential form with modal feedback and redirect.

#[cfg(test)]
#[path = "signin_test.rs"]
mod signin_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::auth_layout::AuthLayout;
use crate::components::button::Button;
use crate::components::input::Input;
use crate::components::modal::{Modal, ModalKind};
use crate::net::types::{AuthResponse, SignInRequest};
use crate::state::forms::FormStatus;
use crate::state::session::{self, SessionState};
use crate::util::validate::{SignInErrors, validate_sign_in};

/// Validate the form; a failing form never reaches the network client.
fn prepare_submission(username: &str, password: &str) -> Result<SignInRequest, SignInErrors> {
    let errors = validate_sign_in(username, password);
    if errors.is_empty() {
        Ok(SignInRequest {
            username: username.to_owned(),
            password: password.to_owned(),
        })
    } else {
        Err(errors)
    }
}

fn success_message(response: &AuthResponse) -> String {
    let name = if response.first_name.is_empty() {
        &response.username
    } else {
        &response.first_name
    };
    format!("Welcome back, {name}! You have been successfully signed in.")
}

#[component]
pub fn SignInPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let errors = RwSignal::new(SignInErrors::default());
    let status = RwSignal::new(FormStatus::<AuthResponse>::Idle);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if status.get().is_submitting() {
            return;
        }
        let credentials = match prepare_submission(&username.get(), &password.get()) {
            Ok(credentials) => credentials,
            Err(field_errors) => {
                errors.set(field_errors);
                return;
            }
        };
        errors.set(SignInErrors::default());
        status.set(FormStatus::Submitting);

        leptos::task::spawn_local(async move {
            match crate::net::api::sign_in(&credentials).await {
                Ok(response) => {
                    session::sign_in(session, &response.token);
                    status.set(FormStatus::Succeeded(response));
                }
                Err(message) => status.set(FormStatus::Failed(message)),
            }
        });
    };

    let navigate_dashboard = navigate.clone();
    let on_success_close = Callback::new(move |()| {
        navigate_dashboard("/dashboard", NavigateOptions::default());
    });
    let on_error_close = Callback::new(move |()| status.set(FormStatus::Idle));

    view! {
        <AuthLayout
            title="Welcome Back"
            subtitle="Sign in to continue reporting and tracking road issues"
        >
            <form class="auth-form" on:submit=on_submit>
                <Input
                    value=username
                    label="Username"
                    placeholder="your_username"
                    error=Signal::derive(move || errors.get().username)
                    on_edit=Callback::new(move |()| errors.update(|e| e.username = None))
                />
                <Input
                    value=password
                    label="Password"
                    input_type="password"
                    placeholder="\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}"
                    error=Signal::derive(move || errors.get().password)
                    on_edit=Callback::new(move |()| errors.update(|e| e.password = None))
                />
                <Button
                    button_type="submit"
                    full_width=true
                    loading=Signal::derive(move || status.get().is_submitting())
                >
                    {move || if status.get().is_submitting() { "Signing In..." } else { "Sign In" }}
                </Button>
            </form>

            <div class="auth-form__footer">
                <p>
                    "Don't have an account? "
                    <a href="/auth/signup">"Create one here"</a>
                </p>
                <p class="auth-form__footnote">
                    "Need help? Visit our "
                    <a href="/contact">"Support Center"</a>
                </p>
            </div>
        </AuthLayout>

        <Show when=move || status.get().success().is_some()>
            <Modal
                kind=ModalKind::Success
                title="Success!"
                message=Signal::derive(move || {
                    status.get().success().map(success_message).unwrap_or_default()
                })
                action_label="Continue"
                on_close=on_success_close
            />
        </Show>
        <Show when=move || status.get().failure().is_some()>
            <Modal
                kind=ModalKind::Error
                title="Sign In Failed"
                message=Signal::derive(move || {
                    status.get().failure().unwrap_or_default().to_owned()
                })
                action_label="Try Again"
                on_close=on_error_close
            />
        </Show>
    }
}
