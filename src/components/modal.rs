//! Success/error feedback modal.

use leptos::prelude::*;

use super::button::{Button, ButtonVariant};

/// Tone of a [`Modal`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModalKind {
    Success,
    Error,
}

impl ModalKind {
    fn class(self) -> &'static str {
        match self {
            Self::Success => "modal--success",
            Self::Error => "modal--error",
        }
    }

    fn icon(self) -> &'static str {
        match self {
            Self::Success => "\u{2713}",
            Self::Error => "!",
        }
    }
}

/// Feedback dialog shown after form submissions. Clicking the backdrop or
/// the close button runs `on_close`; the action button runs `on_action`
/// when provided, otherwise it also closes.
#[component]
pub fn Modal(
    kind: ModalKind,
    title: &'static str,
    #[prop(into)] message: Signal<String>,
    #[prop(default = "OK")] action_label: &'static str,
    on_close: Callback<()>,
    #[prop(optional)] on_action: Option<Callback<()>>,
) -> impl IntoView {
    let on_primary = Callback::new(move |()| match on_action {
        Some(action) => action.run(()),
        None => on_close.run(()),
    });
    let primary_variant = match kind {
        ModalKind::Success => ButtonVariant::Primary,
        ModalKind::Error => ButtonVariant::Secondary,
    };

    view! {
        <div class="modal-backdrop" on:click=move |_| on_close.run(())>
            <div
                class=format!("modal {}", kind.class())
                on:click=move |ev| ev.stop_propagation()
            >
                <div class="modal__header">
                    <span class="modal__icon" aria-hidden="true">{kind.icon()}</span>
                    <h3 class="modal__title">{title}</h3>
                </div>
                <p class="modal__message">{move || message.get()}</p>
                <div class="modal__actions">
                    <Button variant=ButtonVariant::Ghost on_press=Callback::new(move |()| on_close.run(()))>
                        "Close"
                    </Button>
                    <Button variant=primary_variant on_press=on_primary>
                        {action_label}
                    </Button>
                </div>
            </div>
        </div>
    }
}
