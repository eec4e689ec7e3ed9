//! Wire DTOs for the backend REST contract.
//!
//! DESIGN
//! ======
//! These types mirror the backend payloads field-for-field so serde
//! round-trips stay lossless. `status` and `report_type` deliberately stay
//! `String`: the backend owns those enumerations, and unrecognized values
//! must degrade to a neutral label/badge instead of failing deserialization.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Response body of both auth endpoints.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AuthResponse {
    /// Opaque bearer token proving the session.
    pub token: String,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

/// Request body for `POST /api/users/auth/signin/`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SignInRequest {
    pub username: String,
    pub password: String,
}

/// Request body for `POST /api/users/auth/signup/`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SignUpRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub first_name: String,
    pub last_name: String,
}

/// A citizen-submitted road-issue report.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// Backend-assigned identifier.
    pub id: i64,
    /// URL of the uploaded photo, if one was attached.
    pub image: Option<String>,
    /// Backend-assessed urgency, 0 (low) through 3 (high).
    pub severity: i32,
    pub description: String,
    pub name: String,
    pub address: String,
    /// One of `pending`, `in_progress`, `resolved` per the contract.
    pub status: String,
    /// One of `pothole`, `crack`, `road_sink`, `other` per the contract.
    pub report_type: String,
    /// ISO-8601 timestamps as emitted by the backend.
    pub created_at: String,
    pub updated_at: String,
    /// Identifier of the submitting user.
    pub user: i64,
}

/// Envelope of `GET /api/reports/reports/`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReportsListResponse {
    pub detail: String,
    /// Total report count as known by the backend.
    pub count: u64,
    pub reports: Vec<Report>,
}

/// Envelope of single-report fetches and report creation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReportDetailResponse {
    pub detail: String,
    pub report: Report,
}

/// Text fields of a report submission. The optional photo travels beside
/// these as a multipart file part, never through this struct.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NewReport {
    pub name: String,
    pub description: String,
    pub address: String,
    pub report_type: String,
}
