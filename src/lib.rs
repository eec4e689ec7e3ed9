//! # asphaltaid
//!
//! Leptos + WASM frontend for the AsphaltAid road-issue reporting platform.
//! Replaces the React/Next.js client with a Rust-native UI layer.
//!
//! This crate contains pages, components, application state, the REST API
//! client, and browser utility glue. All business logic (authentication,
//! severity scoring, persistence) lives in the backend REST service; this
//! crate is a thin presentation and client-state layer.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point invoked by the host page after the bundle loads.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::App;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(App);
}
