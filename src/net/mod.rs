//! Networking modules for the backend REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles REST calls and bearer-token headers, `types` defines the
//! wire schema shared with the backend contract.

pub mod api;
pub mod types;
