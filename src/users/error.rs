//! Errors returned by the users service client

use thiserror::Error;

/// Failure of a request against the users service
#[derive(Debug, Error)]
pub enum UsersError {
    /// Transport failure: connection refused, DNS, timeout, unreadable body
    #[error("request to users service failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The service answered with a non-2xx status
    #[error("users service returned {status}: {body}")]
    Status { status: u16, body: String },
}
