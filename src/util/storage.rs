//! Browser localStorage helpers for the token and cached report count.
//!
//! SYSTEM CONTEXT
//! ==============
//! These helpers centralize hydrate-only read/write behavior so session and
//! page code can persist small values without repeating web-sys glue. Both
//! stored values are non-authoritative caches: the token is merely presence
//! evidence and the count is a best-effort dashboard stat.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

/// Storage key holding the bearer token.
pub const TOKEN_KEY: &str = "asphaltaid_token";

/// Storage key holding the last fetched report count.
pub const REPORTS_COUNT_KEY: &str = "asphaltaid_reports_count";

/// Read a string value from `localStorage`.
pub fn get_item(key: &str) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        storage.get_item(key).ok().flatten()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
        None
    }
}

/// Write a string value to `localStorage`.
pub fn set_item(key: &str, value: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.set_item(key, value);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (key, value);
    }
}

/// Remove a key from `localStorage`.
pub fn remove_item(key: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.remove_item(key);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
    }
}

/// Read the cached report count, if any was stored.
pub fn load_report_count() -> Option<u64> {
    parse_report_count(get_item(REPORTS_COUNT_KEY)?.as_str())
}

/// Cache the report count for the dashboard impact stat.
pub fn store_report_count(count: u64) {
    set_item(REPORTS_COUNT_KEY, &count.to_string());
}

fn parse_report_count(raw: &str) -> Option<u64> {
    raw.trim().parse().ok()
}
