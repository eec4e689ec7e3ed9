//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session is the only state shared across pages. It is provided via
//! Leptos context rather than an ambient singleton, so route guards and
//! navbar chrome read it explicitly. The token itself is opaque: presence
//! implies "authenticated", and only sign-in/up/out ever write it.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::RwSignal;
use leptos::prelude::Update;

use crate::util::storage;

/// Immutable snapshot of the authentication session.
///
/// The token is private; readers see only presence and the header value
/// they need, writers go through [`sign_in`]/[`sign_out`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    token: Option<String>,
}

impl SessionState {
    /// Session holding `token`, as after a successful sign-in.
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
        }
    }

    /// Whether a token is currently held.
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// The raw token for `Authorization` headers, if held.
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    fn set_token(&mut self, token: String) {
        self.token = Some(token);
    }

    fn clear(&mut self) {
        self.token = None;
    }
}

/// Load the persisted session, if any, at app mount.
pub fn load() -> SessionState {
    match storage::get_item(storage::TOKEN_KEY) {
        Some(token) => SessionState::with_token(token),
        None => SessionState::default(),
    }
}

/// Record a successful authentication: update the shared state and persist
/// the token for future visits.
pub fn sign_in(session: RwSignal<SessionState>, token: &str) {
    storage::set_item(storage::TOKEN_KEY, token);
    session.update(|s| s.set_token(token.to_owned()));
}

/// Drop the session locally. The backend is deliberately not called; the
/// token simply stops being presented.
pub fn sign_out(session: RwSignal<SessionState>) {
    storage::remove_item(storage::TOKEN_KEY);
    session.update(SessionState::clear);
}
