//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every protected route applies identical unauthenticated redirect
//! behavior: no token means an immediate bounce to the sign-in page.

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::session::SessionState;

/// Route shown to unauthenticated visitors of protected pages.
pub const SIGN_IN_ROUTE: &str = "/auth/signin";

/// Redirect to the sign-in page whenever no session token is held.
pub fn install_signin_redirect<F>(session: RwSignal<SessionState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if !session.get().is_authenticated() {
            navigate(SIGN_IN_ROUTE, NavigateOptions::default());
        }
    });
}
