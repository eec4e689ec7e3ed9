//! Contact page with a client-validated message form.
//!
//! There is no contact endpoint in the backend contract; a valid
//! submission flips the form to a submitted state locally.

use leptos::prelude::*;

use crate::components::button::Button;
use crate::components::input::Input;
use crate::components::navbar::Navbar;
use crate::util::validate::{ContactErrors, validate_contact};

#[component]
pub fn ContactPage() -> impl IntoView {
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let subject = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let errors = RwSignal::new(ContactErrors::default());
    let submitted = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let field_errors = validate_contact(
            &name.get(),
            &email.get(),
            &subject.get(),
            &message.get(),
        );
        if !field_errors.is_empty() {
            errors.set(field_errors);
            return;
        }
        errors.set(ContactErrors::default());
        name.set(String::new());
        email.set(String::new());
        subject.set(String::new());
        message.set(String::new());
        submitted.set(true);
    };

    view! {
        <div class="page contact-page">
            <Navbar>
                <a href="/" class="navbar__link">"Home"</a>
                <a href="/about" class="navbar__link">"About"</a>
                <a href="/contact" class="navbar__link navbar__link--active">"Contact"</a>
                <a href="/auth/signin" class="btn btn--ghost btn--sm">"Sign In"</a>
            </Navbar>

            <main class="page__main page__main--narrow">
                <header class="page__header">
                    <h1>"Contact Us"</h1>
                    <p>"Questions, feedback, or partnership inquiries? We read everything."</p>
                </header>

                <div class="card card--pad-lg">
                    <Show
                        when=move || !submitted.get()
                        fallback=move || {
                            view! {
                                <div class="contact-page__sent">
                                    <span aria-hidden="true">"\u{2713}"</span>
                                    <h3>"Message sent"</h3>
                                    <p>"Thanks for reaching out. We'll get back to you soon."</p>
                                    <button
                                        class="btn btn--outline"
                                        on:click=move |_| submitted.set(false)
                                    >
                                        "Send another message"
                                    </button>
                                </div>
                            }
                        }
                    >
                        <form class="contact-page__form" on:submit=on_submit>
                            <Input
                                value=name
                                label="Name"
                                placeholder="Your name"
                                error=Signal::derive(move || errors.get().name)
                                on_edit=Callback::new(move |()| errors.update(|e| e.name = None))
                            />
                            <Input
                                value=email
                                label="Email"
                                input_type="email"
                                placeholder="you@example.com"
                                error=Signal::derive(move || errors.get().email)
                                on_edit=Callback::new(move |()| errors.update(|e| e.email = None))
                            />
                            <Input
                                value=subject
                                label="Subject"
                                placeholder="What is this about?"
                                error=Signal::derive(move || errors.get().subject)
                                on_edit=Callback::new(move |()| errors.update(|e| e.subject = None))
                            />
                            <div class="field">
                                <label class="field__label">"Message"</label>
                                <textarea
                                    class="field__input"
                                    class:field__input--error=move || errors.get().message.is_some()
                                    rows="5"
                                    placeholder="Tell us more..."
                                    prop:value=move || message.get()
                                    on:input=move |ev| {
                                        message.set(event_target_value(&ev));
                                        errors.update(|e| e.message = None);
                                    }
                                ></textarea>
                                <Show when=move || errors.get().message.is_some()>
                                    <p class="field__error">
                                        {move || errors.get().message.unwrap_or_default()}
                                    </p>
                                </Show>
                            </div>
                            <Button button_type="submit" full_width=true>
                                "Send Message"
                            </Button>
                        </form>
                    </Show>
                </div>
            </main>
        </div>
    }
}
