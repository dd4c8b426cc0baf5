//! Error types for the backend API client.

use thiserror::Error;

/// Errors that can occur when talking to the booking backend.
///
/// Callers treat every variant as one "operation failed" signal: nothing
/// here is retried, and the user re-triggers the action after a failure.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The HTTP request could not be performed at all
    #[error("Request failed: {0}")]
    Transport(String),

    /// The session token was rejected by the backend
    #[error("Unauthorized - invalid or missing token")]
    Unauthorized,

    /// The injected session is past its expiry; the call was never sent
    #[error("Session expired - log in again")]
    SessionExpired,

    /// Rate limited - too many requests
    #[error("Rate limited - too many requests")]
    RateLimited,

    /// The response body did not match the expected shape
    #[error("Response parsing failed: {0}")]
    Decode(String),

    /// The backend returned an error status
    #[error("API error (status {status}): {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Error body from the backend
        message: String,
    },
}
