//! Failure taxonomy for outbound HTTP calls.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Why a backend or dog API request did not produce a usable result.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never completed (DNS, CORS, connection refused, ...).
    #[error("network failure: {0}")]
    Network(String),
    /// The request completed with a status other than 200.
    #[error("unexpected status {0}")]
    Status(u16),
    /// The response body did not match the expected schema.
    #[error("malformed response: {0}")]
    Decode(String),
    /// HTTP calls only run in the browser; server rendering gets this.
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// HTTP status carried by the error, if the request completed.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status(status) => Some(*status),
            Self::Network(_) | Self::Decode(_) | Self::Unavailable => None,
        }
    }
}

/// Map a response status to the 200-only success contract.
///
/// # Errors
///
/// Returns [`ApiError::Status`] for any status other than 200.
pub fn expect_ok(status: u16) -> Result<(), ApiError> {
    if status == 200 { Ok(()) } else { Err(ApiError::Status(status)) }
}
