//! HTTP Client implementation using reqwest.
//!
//! This adapter implements the `HttpClient` port using the reqwest library.
//! One client is shared by every case so connections are pooled.

use std::error::Error as _;

use async_trait::async_trait;
use etl_probe_application::ports::{HttpClient, HttpClientError};
use etl_probe_domain::{HttpMethod, JSON_CONTENT_TYPE, RequestSpec, ResponseSpec};
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Method, Url};

const MAX_REDIRECTS: usize = 10;

/// HTTP client implementation using reqwest.
#[derive(Debug, Clone)]
pub struct ReqwestHttpClient {
    client: Client,
}

impl ReqwestHttpClient {
    /// Creates a new HTTP client with default settings.
    ///
    /// Default configuration:
    /// - No request timeout beyond reqwest's defaults
    /// - Follow redirects: up to 10
    /// - TLS verification: enabled
    /// - User-Agent: "etl-probe/<version>"
    ///
    /// # Errors
    ///
    /// Returns an error if the client cannot be created.
    pub fn new() -> Result<Self, HttpClientError> {
        let client = Client::builder()
            .user_agent(concat!("etl-probe/", env!("CARGO_PKG_VERSION")))
            .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS))
            .build()
            .map_err(|e| HttpClientError::Other(e.to_string()))?;

        Ok(Self { client })
    }

    /// Converts domain `HttpMethod` to reqwest `Method`.
    const fn to_reqwest_method(method: HttpMethod) -> Method {
        match method {
            HttpMethod::Get => Method::GET,
            HttpMethod::Post => Method::POST,
            HttpMethod::Delete => Method::DELETE,
        }
    }

    /// Maps reqwest errors to `HttpClientError`.
    fn map_error(error: &reqwest::Error) -> HttpClientError {
        if error.is_timeout() {
            return HttpClientError::Timeout;
        }

        let message = error_chain(error);
        let host = || {
            error
                .url()
                .and_then(Url::host_str)
                .unwrap_or("unknown")
                .to_string()
        };

        if error.is_connect() {
            let lowered = message.to_lowercase();
            if lowered.contains("dns") || lowered.contains("resolve") {
                return HttpClientError::DnsError {
                    host: host(),
                    message,
                };
            }
            if lowered.contains("refused") {
                return HttpClientError::ConnectionRefused {
                    host: host(),
                    port: error
                        .url()
                        .and_then(Url::port_or_known_default)
                        .unwrap_or(80),
                };
            }
            return HttpClientError::ConnectionFailed(message);
        }

        if error.is_redirect() {
            return HttpClientError::Other(format!("too many redirects (max {MAX_REDIRECTS})"));
        }

        HttpClientError::Other(message)
    }
}

/// Joins an error with its sources; reqwest keeps the OS-level cause there.
fn error_chain(error: &reqwest::Error) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

#[async_trait]
impl HttpClient for ReqwestHttpClient {
    async fn execute(&self, request: &RequestSpec) -> Result<ResponseSpec, HttpClientError> {
        let url = Url::parse(&request.url)
            .map_err(|e| HttpClientError::InvalidUrl(format!("{e}: {}", request.url)))?;

        let mut builder = self
            .client
            .request(Self::to_reqwest_method(request.method), url)
            .header(CONTENT_TYPE, JSON_CONTENT_TYPE);

        if let Some(body) = request.wire_body() {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(|e| Self::map_error(&e))?;
        let status = response.status().as_u16();

        let body = response
            .bytes()
            .await
            .map_err(|e| HttpClientError::Body(error_chain(&e)))?
            .to_vec();

        Ok(ResponseSpec::new(status, body))
    }
}
