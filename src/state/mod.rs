//! Shared client state provided through Leptos context.
//!
//! ARCHITECTURE
//! ============
//! `session` holds the bearer token, `reports` holds the fetched collection
//! and the pure filter/sort/paginate pipeline, `forms` defines the
//! per-form submission state machine, and `ui` keeps presentation chrome
//! (dark mode) out of domain state.

pub mod forms;
pub mod reports;
pub mod session;
pub mod ui;
