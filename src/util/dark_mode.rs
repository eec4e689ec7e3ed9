//! Dark theme preference for the marketing and app chrome.
//!
//! Stored through `util::storage` like the other cached values, applied as
//! a `data-theme` attribute on `<html>`. When nothing is stored the system
//! preference wins. SSR paths no-op.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

use super::storage;

/// Storage key holding `"true"`/`"false"`.
pub const DARK_KEY: &str = "asphaltaid_dark";

/// Resolve the effective preference from a stored value and the system
/// media query result.
fn resolve(stored: Option<&str>, system_prefers_dark: bool) -> bool {
    match stored {
        Some(value) => value == "true",
        None => system_prefers_dark,
    }
}

fn system_prefers_dark() -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
            .map_or(false, |mq| mq.matches())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Read the effective preference and apply it. Called once at app mount.
pub fn init() -> bool {
    let enabled = resolve(storage::get_item(DARK_KEY).as_deref(), system_prefers_dark());
    apply(enabled);
    enabled
}

/// Persist and apply a new preference. Returns the value for state updates.
pub fn set(enabled: bool) -> bool {
    storage::set_item(DARK_KEY, if enabled { "true" } else { "false" });
    apply(enabled);
    enabled
}

fn apply(enabled: bool) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        {
            let _ = el.set_attribute("data-theme", if enabled { "dark" } else { "light" });
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = enabled;
    }
}
