//! REST API client for the AsphaltAid backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning errors since these endpoints are only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, String>` carrying a human-readable message
//! derived from the response body (`message` or `detail` field) or a generic
//! `HTTP <status>` fallback. Nothing is retried and nothing panics; callers
//! render the message in a modal or inline state.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{
    AuthResponse, NewReport, ReportDetailResponse, ReportsListResponse, SignInRequest,
    SignUpRequest,
};

#[cfg(any(test, feature = "hydrate"))]
const BASE_URL: &str = "/api";

/// Maximum accepted photo size in bytes.
pub const MAX_IMAGE_BYTES: f64 = 10.0 * 1024.0 * 1024.0;

#[cfg(any(test, feature = "hydrate"))]
fn sign_in_endpoint() -> String {
    format!("{BASE_URL}/users/auth/signin/")
}

#[cfg(any(test, feature = "hydrate"))]
fn sign_up_endpoint() -> String {
    format!("{BASE_URL}/users/auth/signup/")
}

#[cfg(any(test, feature = "hydrate"))]
fn reports_endpoint() -> String {
    format!("{BASE_URL}/reports/reports/")
}

#[cfg(any(test, feature = "hydrate"))]
fn report_endpoint(id: i64) -> String {
    format!("{BASE_URL}/reports/reports/{id}/")
}

/// Value of the `Authorization` header for an authenticated request.
#[cfg(any(test, feature = "hydrate"))]
fn auth_header_value(token: &str) -> String {
    format!("Token {token}")
}

/// Derive a user-facing message from a non-2xx response.
///
/// The backend reports failures as a JSON body with a `message` or `detail`
/// field; anything unparseable falls back to the HTTP status line.
#[cfg(any(test, feature = "hydrate"))]
fn error_message(status: u16, status_text: &str, body: &str) -> String {
    #[derive(serde::Deserialize)]
    struct ErrorBody {
        message: Option<String>,
        detail: Option<String>,
    }

    if let Ok(parsed) = serde_json::from_str::<ErrorBody>(body) {
        if let Some(message) = parsed.message {
            return message;
        }
        if let Some(detail) = parsed.detail {
            return detail;
        }
    }
    format!("HTTP {status}: {status_text}")
}

/// Text parts every report submission carries, in submission order.
#[cfg(any(test, feature = "hydrate"))]
const TEXT_FIELDS: [&str; 4] = ["name", "description", "address", "report_type"];

/// Names of the multipart parts a report submission carries.
///
/// The photo part is appended only when a file was attached.
#[cfg(any(test, feature = "hydrate"))]
fn multipart_field_names(has_image: bool) -> Vec<&'static str> {
    let mut names = TEXT_FIELDS.to_vec();
    if has_image {
        names.push("image");
    }
    names
}

/// Selected browser file for upload; a placeholder on the server where the
/// create-report stub never runs.
#[cfg(feature = "hydrate")]
pub type ImageFile = web_sys::File;
#[cfg(not(feature = "hydrate"))]
#[derive(Clone, Debug)]
pub struct ImageFile;

#[cfg(feature = "hydrate")]
async fn fail_message(resp: gloo_net::http::Response) -> String {
    let status = resp.status();
    let status_text = resp.status_text();
    let body = resp.text().await.unwrap_or_default();
    error_message(status, &status_text, &body)
}

/// Sign in with username + password via `POST /api/users/auth/signin/`.
///
/// Token persistence is the caller's concern; see `state::session`.
///
/// # Errors
///
/// Returns a user-facing message when the request fails or the backend
/// rejects the credentials.
pub async fn sign_in(credentials: &SignInRequest) -> Result<AuthResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&sign_in_endpoint())
            .json(credentials)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            let message = fail_message(resp).await;
            log::warn!("sign-in failed: {message}");
            return Err(message);
        }
        resp.json::<AuthResponse>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = credentials;
        Err("not available on server".to_owned())
    }
}

/// Create an account via `POST /api/users/auth/signup/`.
///
/// # Errors
///
/// Returns a user-facing message when the request fails or the backend
/// rejects the registration.
pub async fn sign_up(registration: &SignUpRequest) -> Result<AuthResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&sign_up_endpoint())
            .json(registration)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            let message = fail_message(resp).await;
            log::warn!("sign-up failed: {message}");
            return Err(message);
        }
        resp.json::<AuthResponse>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = registration;
        Err("not available on server".to_owned())
    }
}

/// Fetch the full report collection via `GET /api/reports/reports/`.
///
/// # Errors
///
/// Returns a user-facing message when the request fails or the token is
/// rejected.
pub async fn get_reports(token: &str) -> Result<ReportsListResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&reports_endpoint())
            .header("Authorization", &auth_header_value(token))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            let message = fail_message(resp).await;
            log::warn!("report list fetch failed: {message}");
            return Err(message);
        }
        resp.json::<ReportsListResponse>()
            .await
            .map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Err("not available on server".to_owned())
    }
}

/// Fetch a single report via `GET /api/reports/reports/{id}/`.
///
/// # Errors
///
/// Returns a user-facing message when the request fails; the detail page
/// renders it as a not-found state.
pub async fn get_report(token: &str, id: i64) -> Result<ReportDetailResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&report_endpoint(id))
            .header("Authorization", &auth_header_value(token))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            let message = fail_message(resp).await;
            log::warn!("report {id} fetch failed: {message}");
            return Err(message);
        }
        resp.json::<ReportDetailResponse>()
            .await
            .map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, id);
        Err("not available on server".to_owned())
    }
}

/// Submit a new report via multipart `POST /api/reports/reports/`.
///
/// The request deliberately sets no JSON content type: the browser supplies
/// `multipart/form-data` with the boundary when given a `FormData` body.
///
/// # Errors
///
/// Returns a user-facing message when the form cannot be assembled, the
/// request fails, or the backend rejects the submission.
pub async fn create_report(
    token: &str,
    fields: &NewReport,
    image: Option<ImageFile>,
) -> Result<ReportDetailResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        let form = build_report_form(fields, image.as_ref())?;
        let resp = gloo_net::http::Request::post(&reports_endpoint())
            .header("Authorization", &auth_header_value(token))
            .body(form)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            let message = fail_message(resp).await;
            log::warn!("report submission failed: {message}");
            return Err(message);
        }
        resp.json::<ReportDetailResponse>()
            .await
            .map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, fields, image);
        Err("not available on server".to_owned())
    }
}

#[cfg(feature = "hydrate")]
fn build_report_form(
    fields: &NewReport,
    image: Option<&web_sys::File>,
) -> Result<web_sys::FormData, String> {
    let form = web_sys::FormData::new().map_err(|_| "failed to build form data".to_owned())?;
    let values = [
        &fields.name,
        &fields.description,
        &fields.address,
        &fields.report_type,
    ];
    for (name, value) in TEXT_FIELDS.iter().zip(values) {
        form.append_with_str(name, value)
            .map_err(|_| "failed to build form data".to_owned())?;
    }
    if let Some(file) = image {
        form.append_with_blob_and_filename("image", file, &file.name())
            .map_err(|_| "failed to attach image".to_owned())?;
    }
    Ok(form)
}
