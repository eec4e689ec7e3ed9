//! Sign-up page: registration form with live password strength meter.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::auth_layout::AuthLayout;
use crate::components::button::Button;
use crate::components::input::Input;
use crate::components::modal::{Modal, ModalKind};
use crate::net::types::{AuthResponse, SignUpRequest};
use crate::state::forms::FormStatus;
use crate::state::session::{self, SessionState};
use crate::util::validate::{
    SignUpErrors, SignUpFields, password_strength, strength_class, strength_label,
    validate_sign_up,
};

/// Validate the form; a failing form never reaches the network client.
/// The strength threshold applies here too: a long-but-weak password is
/// a validation failure, not a backend round trip.
fn prepare_submission(fields: &SignUpFields) -> Result<SignUpRequest, SignUpErrors> {
    let errors = validate_sign_up(fields);
    if errors.is_empty() {
        Ok(SignUpRequest {
            username: fields.username.clone(),
            email: fields.email.clone(),
            password: fields.password.clone(),
            confirm_password: fields.confirm_password.clone(),
            first_name: fields.first_name.clone(),
            last_name: fields.last_name.clone(),
        })
    } else {
        Err(errors)
    }
}

fn success_message(response: &AuthResponse) -> String {
    format!(
        "Welcome to AsphaltAid, {}! Your account has been created successfully. \
         You can now start reporting road issues.",
        response.first_name
    )
}

#[component]
pub fn SignUpPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    let first_name = RwSignal::new(String::new());
    let last_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    let errors = RwSignal::new(SignUpErrors::default());
    let status = RwSignal::new(FormStatus::<AuthResponse>::Idle);

    let strength = Signal::derive(move || password_strength(&password.get()));

    // Live mismatch feedback while confirming, cleared once they agree.
    let on_confirm_edit = Callback::new(move |()| {
        let matches = password.get_untracked() == confirm_password.get_untracked();
        errors.update(|e| {
            e.confirm_password = if matches { None } else { Some("Passwords do not match") };
        });
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if status.get().is_submitting() {
            return;
        }
        let fields = SignUpFields {
            first_name: first_name.get(),
            last_name: last_name.get(),
            email: email.get(),
            username: username.get(),
            password: password.get(),
            confirm_password: confirm_password.get(),
        };
        let registration = match prepare_submission(&fields) {
            Ok(registration) => registration,
            Err(field_errors) => {
                errors.set(field_errors);
                return;
            }
        };
        errors.set(SignUpErrors::default());
        status.set(FormStatus::Submitting);

        leptos::task::spawn_local(async move {
            match crate::net::api::sign_up(&registration).await {
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
            title="Join AsphaltAid"
            subtitle="Create your account to start reporting road issues and making a difference"
        >
            <form class="auth-form" on:submit=on_submit>
                <div class="auth-form__row">
                    <Input
                        value=first_name
                        label="First Name"
                        placeholder="John"
                        error=Signal::derive(move || errors.get().first_name)
                        on_edit=Callback::new(move |()| errors.update(|e| e.first_name = None))
                    />
                    <Input
                        value=last_name
                        label="Last Name"
                        placeholder="Doe"
                        error=Signal::derive(move || errors.get().last_name)
                        on_edit=Callback::new(move |()| errors.update(|e| e.last_name = None))
                    />
                </div>
                <Input
                    value=email
                    label="Email Address"
                    input_type="email"
                    placeholder="john.doe@example.com"
                    error=Signal::derive(move || errors.get().email)
                    on_edit=Callback::new(move |()| errors.update(|e| e.email = None))
                />
                <Input
                    value=username
                    label="Username"
                    placeholder="john_doe"
                    error=Signal::derive(move || errors.get().username)
                    on_edit=Callback::new(move |()| errors.update(|e| e.username = None))
                />
                <Input
                    value=password
                    label="Password"
                    input_type="password"
                    placeholder="At least 8 characters"
                    error=Signal::derive(move || errors.get().password)
                    on_edit=Callback::new(move |()| errors.update(|e| e.password = None))
                />
                <Show when=move || !password.get().is_empty()>
                    <div class="strength-meter">
                        <div class="strength-meter__track">
                            <div
                                class=move || format!(
                                    "strength-meter__bar {}",
                                    strength_class(strength.get())
                                )
                                style:width=move || format!("{}%", strength.get())
                            ></div>
                        </div>
                        <span class="strength-meter__label">
                            {move || strength_label(strength.get())}
                        </span>
                    </div>
                </Show>
                <Input
                    value=confirm_password
                    label="Confirm Password"
                    input_type="password"
                    placeholder="Repeat your password"
                    error=Signal::derive(move || errors.get().confirm_password)
                    on_edit=on_confirm_edit
                />
                <Button
                    button_type="submit"
                    full_width=true
                    loading=Signal::derive(move || status.get().is_submitting())
                >
                    {move || {
                        if status.get().is_submitting() { "Creating Account..." } else { "Create Account" }
                    }}
                </Button>
            </form>

            <div class="auth-form__footer">
                <p>
                    "Already have an account? "
                    <a href="/auth/signin">"Sign in here"</a>
                </p>
                <p class="auth-form__footnote">
                    "By creating an account you agree to our "
                    <a href="/privacy">"Privacy Policy"</a>
                </p>
            </div>
        </AuthLayout>

        <Show when=move || status.get().success().is_some()>
            <Modal
                kind=ModalKind::Success
                title="Account Created!"
                message=Signal::derive(move || {
                    status.get().success().map(success_message).unwrap_or_default()
                })
                action_label="Go to Dashboard"
                on_close=on_success_close
            />
        </Show>
        <Show when=move || status.get().failure().is_some()>
            <Modal
                kind=ModalKind::Error
                title="Sign Up Failed"
                message=Signal::derive(move || {
                    status.get().failure().unwrap_or_default().to_owned()
                })
                action_label="Try Again"
                on_close=on_error_close
            />
        </Show>
    }
}
