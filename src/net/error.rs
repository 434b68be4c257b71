//! Error taxonomy for backend requests.
//!
//! ERROR HANDLING
//! ==============
//! Callers branch on the variant, and the `Display` strings are shown to the
//! user as-is. A non-2xx response with a `{message}` body surfaces that
//! message verbatim; everything else gets a stable fallback. No error here is
//! fatal, the owning screen always returns to an interactive state.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Failure modes of a backend call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The login endpoint rejected the credentials.
    #[error("Invalid username or password")]
    InvalidCredentials,
    /// An authenticated endpoint rejected the current token (401/403).
    #[error("Your session is not authorized for this request")]
    Rejected,
    /// Any other non-2xx response; carries the server's message when present.
    #[error("{0}")]
    Server(String),
    /// The request never produced a response (DNS, refused, offline).
    #[error("Network error: {0}")]
    Network(String),
    /// The response decoded to something other than the documented schema.
    #[error("Unexpected server response: {0}")]
    Malformed(String),
}

/// Classify a non-2xx response from an authenticated resource endpoint.
#[must_use]
pub fn classify_response(status: u16, message: Option<String>) -> ApiError {
    match status {
        401 | 403 => ApiError::Rejected,
        _ => ApiError::Server(message.unwrap_or_else(|| request_failed_message(status))),
    }
}

/// Classify a non-2xx response from the login endpoint, where a 401 means
/// bad credentials rather than a stale token.
#[must_use]
pub fn classify_login_response(status: u16, message: Option<String>) -> ApiError {
    if status == 401 {
        ApiError::InvalidCredentials
    } else {
        ApiError::Server(message.unwrap_or_else(|| request_failed_message(status)))
    }
}

fn request_failed_message(status: u16) -> String {
    format!("Request failed with status {status}")
}
