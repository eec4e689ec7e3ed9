//! Labeled text input with inline error display.

use leptos::prelude::*;

/// Text input bound to an `RwSignal<String>`.
///
/// `error` renders below the field and switches the border treatment;
/// `on_edit` fires after each keystroke so forms can clear stale field
/// errors while the user types.
#[component]
pub fn Input(
    value: RwSignal<String>,
    #[prop(optional)] label: Option<&'static str>,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(default = "")] placeholder: &'static str,
    #[prop(default = Signal::derive(|| None))] error: Signal<Option<&'static str>>,
    #[prop(optional)] on_edit: Option<Callback<()>>,
) -> impl IntoView {
    view! {
        <div class="field">
            {label.map(|text| view! { <label class="field__label">{text}</label> })}
            <input
                class="field__input"
                class:field__input--error=move || error.get().is_some()
                type=input_type
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| {
                    value.set(event_target_value(&ev));
                    if let Some(on_edit) = on_edit {
                        on_edit.run(());
                    }
                }
            />
            <Show when=move || error.get().is_some()>
                <p class="field__error">{move || error.get().unwrap_or_default()}</p>
            </Show>
        </div>
    }
}
