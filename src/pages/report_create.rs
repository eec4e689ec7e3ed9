//! Report-creation page: field collection, optional photo, submit flow.

#[cfg(test)]
#[path = "report_create_test.rs"]
mod report_create_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::button::{Button, ButtonSize, ButtonVariant};
use crate::components::input::Input;
use crate::components::modal::{Modal, ModalKind};
use crate::components::navbar::Navbar;
use crate::net::api::ImageFile;
use crate::net::types::{NewReport, Report};
use crate::state::forms::FormStatus;
use crate::state::session::{self, SessionState};
use crate::util::auth::install_signin_redirect;
use crate::util::geo;
use crate::util::validate::{ReportFormErrors, validate_image, validate_report_form};

/// Report-type options in display order; the first is the form default.
const REPORT_TYPES: [(&str, &str); 4] = [
    ("pothole", "Pothole"),
    ("crack", "Crack"),
    ("road_sink", "Road Sink"),
    ("other", "Other"),
];

/// Validate and trim the text fields; a failing form never reaches the
/// network client.
fn prepare_submission(
    name: &str,
    description: &str,
    address: &str,
    report_type: &str,
) -> Result<NewReport, ReportFormErrors> {
    let errors = validate_report_form(name, description, address, report_type);
    if errors.is_empty() {
        Ok(NewReport {
            name: name.trim().to_owned(),
            description: description.trim().to_owned(),
            address: address.trim().to_owned(),
            report_type: report_type.to_owned(),
        })
    } else {
        Err(errors)
    }
}

fn success_message(report: &Report) -> String {
    format!(
        "Your report \"{}\" has been successfully submitted! We'll review it and take \
         appropriate action.",
        report.name
    )
}

/// Detail route a successful submission redirects to.
fn detail_route(id: i64) -> String {
    format!("/reports/{id}")
}

#[component]
pub fn ReportCreatePage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();
    install_signin_redirect(session, navigate.clone());

    let name = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let address = RwSignal::new(String::new());
    let report_type = RwSignal::new(REPORT_TYPES[0].0.to_owned());
    let errors = RwSignal::new(ReportFormErrors::default());
    let image_error = RwSignal::new(None::<&'static str>);
    let image = RwSignal::new_local(None::<ImageFile>);
    let preview = RwSignal::new(None::<String>);
    let status = RwSignal::new(FormStatus::<Report>::Idle);
    let file_input = NodeRef::<leptos::html::Input>::new();

    let on_image_change = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            let input: web_sys::HtmlInputElement = event_target(&ev);
            let Some(file) = input.files().and_then(|files| files.get(0)) else {
                return;
            };
            if let Some(message) = validate_image(&file.type_(), file.size()) {
                image_error.set(Some(message));
                return;
            }
            image_error.set(None);
            if let Some(old) = preview.get_untracked() {
                web_sys::Url::revoke_object_url(&old).ok();
            }
            preview.set(web_sys::Url::create_object_url_with_blob(&file).ok());
            image.set(Some(file));
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = ev;
        }
    };

    let remove_image = move |_| {
        image.set(None);
        image_error.set(None);
        #[cfg(feature = "hydrate")]
        {
            if let Some(url) = preview.get_untracked() {
                web_sys::Url::revoke_object_url(&url).ok();
            }
            if let Some(input) = file_input.get() {
                input.set_value("");
            }
        }
        preview.set(None);
    };

    let on_use_location = move |_| {
        #[cfg(feature = "hydrate")]
        {
            address.set(geo::LOCATING_PLACEHOLDER.to_owned());
            errors.update(|e| e.address = None);
            geo::request_current_position(
                move |latitude, longitude| {
                    address.set(geo::format_coordinates(latitude, longitude));
                },
                move |message| {
                    address.set(String::new());
                    errors.update(|e| e.address = Some(message));
                },
            );
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if status.get().is_submitting() {
            return;
        }
        let fields = match prepare_submission(
            &name.get(),
            &description.get(),
            &address.get(),
            &report_type.get(),
        ) {
            Ok(fields) => fields,
            Err(field_errors) => {
                errors.set(field_errors);
                return;
            }
        };
        let Some(token) = session.get_untracked().token().map(str::to_owned) else {
            status.set(FormStatus::Failed(
                "You must be signed in to submit a report.".to_owned(),
            ));
            return;
        };
        errors.set(ReportFormErrors::default());
        status.set(FormStatus::Submitting);
        let file = image.get_untracked();

        leptos::task::spawn_local(async move {
            match crate::net::api::create_report(&token, &fields, file).await {
                Ok(response) => status.set(FormStatus::Succeeded(response.report)),
                Err(message) => status.set(FormStatus::Failed(message)),
            }
        });
    };

    let navigate_success = navigate.clone();
    let on_success_close = Callback::new(move |()| {
        let target = status
            .get_untracked()
            .success()
            .map_or_else(|| "/reports".to_owned(), |report| detail_route(report.id));
        navigate_success(&target, NavigateOptions::default());
    });
    let on_error_close = Callback::new(move |()| status.set(FormStatus::Idle));

    let navigate_out = navigate.clone();
    let on_sign_out = Callback::new(move |()| {
        session::sign_out(session);
        navigate_out("/", NavigateOptions::default());
    });

    view! {
        <div class="page report-create-page">
            <Navbar brand_href="/dashboard">
                <a href="/reports" class="btn btn--outline btn--sm">"All Reports"</a>
                <Button variant=ButtonVariant::Ghost size=ButtonSize::Sm on_press=on_sign_out>
                    "Sign Out"
                </Button>
            </Navbar>

            <main class="page__main page__main--narrow">
                <div class="breadcrumb">
                    <a href="/reports">"Reports"</a>
                    <span aria-hidden="true">"\u{203a}"</span>
                    <span class="breadcrumb__current">"Create Report"</span>
                </div>

                <header class="page__header">
                    <h1>"Report a Road Issue"</h1>
                    <p>"Help improve road safety by reporting potholes, cracks, and other issues"</p>
                </header>

                <div class="card card--pad-lg">
                    <form class="report-form" on:submit=on_submit>
                        <Input
                            value=name
                            label="Report Title"
                            placeholder="e.g., Large pothole on Main Street"
                            error=Signal::derive(move || errors.get().name)
                            on_edit=Callback::new(move |()| errors.update(|e| e.name = None))
                        />

                        <div class="field">
                            <label class="field__label">"Report Type *"</label>
                            <select
                                class="field__input"
                                prop:value=move || report_type.get()
                                on:change=move |ev| {
                                    report_type.set(event_target_value(&ev));
                                    errors.update(|e| e.report_type = None);
                                }
                            >
                                {REPORT_TYPES
                                    .iter()
                                    .map(|&(value, label)| view! { <option value=value>{label}</option> })
                                    .collect_view()}
                            </select>
                            <Show when=move || errors.get().report_type.is_some()>
                                <p class="field__error">
                                    {move || errors.get().report_type.unwrap_or_default()}
                                </p>
                            </Show>
                        </div>

                        <div class="field">
                            <label class="field__label">"Location/Address *"</label>
                            <div class="field__with-action">
                                <input
                                    class="field__input"
                                    class:field__input--error=move || errors.get().address.is_some()
                                    type="text"
                                    placeholder="e.g., 123 Main Street, Downtown"
                                    prop:value=move || address.get()
                                    on:input=move |ev| {
                                        address.set(event_target_value(&ev));
                                        errors.update(|e| e.address = None);
                                    }
                                />
                                <button
                                    type="button"
                                    class="field__action"
                                    title="Use current location"
                                    on:click=on_use_location
                                >
                                    "\u{1f4cd}"
                                </button>
                            </div>
                            <Show when=move || errors.get().address.is_some()>
                                <p class="field__error">
                                    {move || errors.get().address.unwrap_or_default()}
                                </p>
                            </Show>
                            <p class="field__hint">"Click the location icon to use your current location"</p>
                        </div>

                        <div class="field">
                            <label class="field__label">"Description *"</label>
                            <textarea
                                class="field__input"
                                class:field__input--error=move || errors.get().description.is_some()
                                rows="4"
                                placeholder="Describe the issue in detail. Include size, severity, and any safety concerns..."
                                prop:value=move || description.get()
                                on:input=move |ev| {
                                    description.set(event_target_value(&ev));
                                    errors.update(|e| e.description = None);
                                }
                            ></textarea>
                            <Show when=move || errors.get().description.is_some()>
                                <p class="field__error">
                                    {move || errors.get().description.unwrap_or_default()}
                                </p>
                            </Show>
                            <p class="field__hint">
                                {move || format!("{}/500 characters", description.get().len())}
                            </p>
                        </div>

                        <div class="field">
                            <label class="field__label">"Photo Evidence (Optional)"</label>
                            <Show
                                when=move || preview.get().is_some()
                                fallback=move || {
                                    view! {
                                        <label class="upload" for="report-image">
                                            <span class="upload__prompt">"Click to upload a photo"</span>
                                            <span class="upload__hint">"PNG, JPG up to 10MB"</span>
                                        </label>
                                    }
                                }
                            >
                                <div class="upload__preview">
                                    <img
                                        class="upload__preview-image"
                                        src=move || preview.get().unwrap_or_default()
                                        alt="Report preview"
                                    />
                                    <button
                                        type="button"
                                        class="upload__remove"
                                        title="Remove photo"
                                        on:click=remove_image
                                    >
                                        "\u{2715}"
                                    </button>
                                </div>
                            </Show>
                            <input
                                id="report-image"
                                class="upload__input"
                                type="file"
                                accept="image/*"
                                node_ref=file_input
                                on:change=on_image_change
                            />
                            <Show when=move || image_error.get().is_some()>
                                <p class="field__error">
                                    {move || image_error.get().unwrap_or_default()}
                                </p>
                            </Show>
                            <p class="field__hint">
                                "A clear photo helps authorities assess and prioritize the issue"
                            </p>
                        </div>

                        <Button
                            button_type="submit"
                            size=ButtonSize::Lg
                            full_width=true
                            loading=Signal::derive(move || status.get().is_submitting())
                        >
                            {move || {
                                if status.get().is_submitting() { "Submitting Report..." } else { "Submit Report" }
                            }}
                        </Button>

                        <p class="report-form__note">
                            "By submitting this report, you're helping make roads safer for everyone."
                        </p>
                    </form>
                </div>
            </main>
        </div>

        <Show when=move || status.get().success().is_some()>
            <Modal
                kind=ModalKind::Success
                title="Report Submitted!"
                message=Signal::derive(move || {
                    status.get().success().map(success_message).unwrap_or_default()
                })
                action_label="View Report"
                on_close=on_success_close
            />
        </Show>
        <Show when=move || status.get().failure().is_some()>
            <Modal
                kind=ModalKind::Error
                title="Submission Failed"
                message=Signal::derive(move || {
                    status.get().failure().unwrap_or_default().to_owned()
                })
                action_label="Try Again"
                on_close=on_error_close
            />
        </Show>
    }
}
