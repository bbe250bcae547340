//! Target configuration for a test run.

use url::Url;

use crate::error::{DomainError, DomainResult};

/// Default service address when none is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Default path prefix every endpoint lives under.
pub const DEFAULT_API_PREFIX: &str = "api";

/// Where the service under test lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeConfig {
    base_url: Url,
    api_prefix: String,
}

impl ProbeConfig {
    /// Validates `base_url` and normalizes `api_prefix`.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidUrl`] if the base URL does not parse or
    /// is not `http`/`https`.
    pub fn new(base_url: &str, api_prefix: &str) -> DomainResult<Self> {
        let base_url = Url::parse(base_url.trim())
            .map_err(|e| DomainError::InvalidUrl(format!("{e}: {base_url}")))?;

        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(DomainError::InvalidUrl(format!(
                "URL must start with http:// or https://: {base_url}"
            )));
        }

        Ok(Self {
            base_url,
            api_prefix: api_prefix.trim().trim_matches('/').to_string(),
        })
    }

    /// Root of the API, e.g. `http://host/api`.
    #[must_use]
    pub fn api_url(&self) -> String {
        let base = self.base_url.as_str().trim_end_matches('/');
        if self.api_prefix.is_empty() {
            base.to_string()
        } else {
            format!("{base}/{}", self.api_prefix)
        }
    }

    /// Absolute URL of `endpoint` under the API root.
    ///
    /// An empty endpoint addresses the API root itself with a trailing slash.
    #[must_use]
    pub fn endpoint_url(&self, endpoint: &str) -> String {
        format!("{}/{}", self.api_url(), endpoint.trim_start_matches('/'))
    }
}
