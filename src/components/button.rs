//! Button primitive with style variants.

use leptos::prelude::*;

/// Visual treatment of a [`Button`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Outline,
    Ghost,
    Link,
}

impl ButtonVariant {
    fn class(self) -> &'static str {
        match self {
            Self::Primary => "btn--primary",
            Self::Secondary => "btn--secondary",
            Self::Outline => "btn--outline",
            Self::Ghost => "btn--ghost",
            Self::Link => "btn--link",
        }
    }
}

/// Size of a [`Button`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonSize {
    Sm,
    #[default]
    Default,
    Lg,
}

impl ButtonSize {
    fn class(self) -> &'static str {
        match self {
            Self::Sm => "btn--sm",
            Self::Default => "",
            Self::Lg => "btn--lg",
        }
    }
}

/// Styled button. While `loading` is true the button is disabled and shows
/// a spinner, which is the advisory duplicate-submission guard for forms.
#[component]
pub fn Button(
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional)] size: ButtonSize,
    #[prop(optional)] full_width: bool,
    #[prop(default = "button")] button_type: &'static str,
    #[prop(default = Signal::derive(|| false))] disabled: Signal<bool>,
    #[prop(default = Signal::derive(|| false))] loading: Signal<bool>,
    #[prop(optional)] on_press: Option<Callback<()>>,
    children: Children,
) -> impl IntoView {
    let class = format!(
        "btn {} {}{}",
        variant.class(),
        size.class(),
        if full_width { " btn--full" } else { "" }
    );

    view! {
        <button
            type=button_type
            class=class
            class:btn--loading=move || loading.get()
            disabled=move || disabled.get() || loading.get()
            on:click=move |_| {
                if let Some(on_press) = on_press {
                    on_press.run(());
                }
            }
        >
            <Show when=move || loading.get()>
                <span class="btn__spinner" aria-hidden="true"></span>
            </Show>
            {children()}
        </button>
    }
}
