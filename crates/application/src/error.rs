//! Application error types

use etl_probe_domain::DomainError;
use thiserror::Error;

use crate::ports::HttpClientError;

/// Application-level errors.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// A domain validation error occurred.
    #[error("domain error: {0}")]
    Domain(#[from] DomainError),

    /// The HTTP client could not be set up or used.
    #[error("HTTP error: {0}")]
    Http(#[from] HttpClientError),
}

/// Result type alias for application operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
