//! Card container with variant and padding options.

use leptos::prelude::*;

/// Visual treatment of a [`Card`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CardVariant {
    #[default]
    Default,
    Elevated,
}

impl CardVariant {
    fn class(self) -> &'static str {
        match self {
            Self::Default => "",
            Self::Elevated => " card--elevated",
        }
    }
}

/// Padding scale of a [`Card`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CardPadding {
    #[default]
    Default,
    Lg,
}

impl CardPadding {
    fn class(self) -> &'static str {
        match self {
            Self::Default => "",
            Self::Lg => " card--pad-lg",
        }
    }
}

/// Rounded surface used for form shells and dashboard tiles.
#[component]
pub fn Card(
    #[prop(optional)] variant: CardVariant,
    #[prop(optional)] padding: CardPadding,
    children: Children,
) -> impl IntoView {
    let class = format!("card{}{}", variant.class(), padding.class());
    view! { <div class=class>{children()}</div> }
}
