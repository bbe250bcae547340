//! Request specification type

use serde_json::Value;

use super::HttpMethod;

/// Content type sent with every request.
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// A fully resolved HTTP request ready to hand to an `HttpClient`.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestSpec {
    /// HTTP method.
    pub method: HttpMethod,
    /// Absolute request URL.
    pub url: String,
    /// JSON body, only sent for methods that carry one.
    pub body: Option<Value>,
}

impl RequestSpec {
    /// Creates a request without a body.
    #[must_use]
    pub fn new(method: HttpMethod, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            body: None,
        }
    }

    /// Creates a GET request.
    #[must_use]
    pub fn get(url: impl Into<String>) -> Self {
        Self::new(HttpMethod::Get, url)
    }

    /// Attaches a JSON body.
    #[must_use]
    pub fn with_json(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Returns the body that will go on the wire, if any.
    ///
    /// Bodies attached to methods that do not carry one are dropped.
    #[must_use]
    pub fn wire_body(&self) -> Option<&Value> {
        if self.method.has_body() {
            self.body.as_ref()
        } else {
            None
        }
    }
}
