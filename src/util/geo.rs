//! Browser geolocation glue for the create-report address field.
//!
//! SYSTEM CONTEXT
//! ==============
//! The app forwards raw coordinates as text; there is no geocoding. Failure
//! to obtain a position surfaces a field-level error and never blocks
//! manual address entry.

#[cfg(test)]
#[path = "geo_test.rs"]
mod geo_test;

/// Address text filled in from a successful position fix.
pub fn format_coordinates(latitude: f64, longitude: f64) -> String {
    format!("Location: {latitude:.6}, {longitude:.6}")
}

/// Placeholder shown while a position request is in flight.
pub const LOCATING_PLACEHOLDER: &str = "Getting your location...";

/// Request the current position, invoking exactly one of the callbacks.
///
/// `on_err` receives the field error to display: permission denial and
/// unavailability get distinct messages, as does a browser without
/// geolocation support.
#[cfg(feature = "hydrate")]
pub fn request_current_position(
    on_ok: impl Fn(f64, f64) + 'static,
    on_err: impl Fn(&'static str) + 'static,
) {
    use wasm_bindgen::JsCast as _;
    use wasm_bindgen::closure::Closure;

    let Some(geolocation) = web_sys::window()
        .map(|w| w.navigator())
        .and_then(|n| n.geolocation().ok())
    else {
        on_err("Geolocation not supported. Please enter address manually.");
        return;
    };

    let success = Closure::once(move |position: web_sys::Position| {
        let coords = position.coords();
        on_ok(coords.latitude(), coords.longitude());
    });
    let failure = Closure::once(move |error: web_sys::PositionError| {
        // code 1 is PERMISSION_DENIED per the Geolocation API.
        if error.code() == 1 {
            on_err("Location access denied. Please enter address manually.");
        } else {
            on_err("Unable to get location. Please enter manually.");
        }
    });

    let issued = geolocation.get_current_position_with_error_callback(
        success.as_ref().unchecked_ref(),
        Some(failure.as_ref().unchecked_ref()),
    );
    if issued.is_ok() {
        // The browser owns the callbacks until one fires.
        success.forget();
        failure.forget();
    }
}
