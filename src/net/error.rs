//! Failure taxonomy for API calls.
//!
//! ERROR HANDLING
//! ==============
//! Controllers never surface these directly; they convert each variant into
//! a static user-facing message and log the underlying cause. `Auth` is the
//! one variant with control-flow weight: it terminates the session wherever
//! it occurs.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use thiserror::Error;

/// Detail string the backend reports for a duplicate registration.
pub const DUPLICATE_EMAIL_DETAIL: &str = "Email already registered";

/// What went wrong with an API call, as far as the client can tell.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The backend rejected the request body.
    #[error("rejected input: {0}")]
    Validation(String),
    /// Missing, expired, or invalid credentials.
    #[error("not authenticated")]
    Auth,
    /// The email is already registered.
    #[error("email already registered")]
    Conflict,
    /// Transport failure or an unexpected status.
    #[error("request failed: {0}")]
    Network(String),
}

/// Map a non-OK response status (and its optional detail) to an [`ApiError`].
pub fn classify_status(status: u16, detail: Option<&str>) -> ApiError {
    match status {
        401 | 403 => ApiError::Auth,
        400 if detail == Some(DUPLICATE_EMAIL_DETAIL) => ApiError::Conflict,
        400 | 422 => ApiError::Validation(detail.unwrap_or("invalid request").to_owned()),
        _ => ApiError::Network(format!("status {status}")),
    }
}
