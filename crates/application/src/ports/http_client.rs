//! HTTP Client port

use async_trait::async_trait;
use etl_probe_domain::{request::RequestSpec, response::ResponseSpec};
use thiserror::Error;

/// Transport-level failures. A response with an unexpected status is not an
/// error at this boundary.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum HttpClientError {
    /// The request URL could not be parsed.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// The remote host refused the connection.
    #[error("connection refused by {host}:{port}")]
    ConnectionRefused {
        /// Target host.
        host: String,
        /// Target port.
        port: u16,
    },

    /// The host name could not be resolved.
    #[error("could not resolve {host}: {message}")]
    DnsError {
        /// Target host.
        host: String,
        /// Resolver message.
        message: String,
    },

    /// The request did not complete in time.
    #[error("request timed out")]
    Timeout,

    /// The connection failed for another reason.
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// The response body could not be read.
    #[error("failed to read response body: {0}")]
    Body(String),

    /// Any other client failure.
    #[error("{0}")]
    Other(String),
}

/// Port for executing HTTP requests.
///
/// This trait abstracts the HTTP client implementation, allowing
/// the application layer to be independent of specific HTTP libraries.
#[async_trait]
pub trait HttpClient: Send + Sync {
    /// Executes an HTTP request and returns the response, whatever its status.
    ///
    /// # Errors
    ///
    /// Returns an error if no response could be obtained.
    async fn execute(&self, request: &RequestSpec) -> Result<ResponseSpec, HttpClientError>;
}
