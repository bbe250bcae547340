//! HTTP Method enumeration

use std::fmt;

/// HTTP methods the runner dispatches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HttpMethod {
    /// HTTP GET method
    #[default]
    Get,
    /// HTTP POST method
    Post,
    /// HTTP DELETE method
    Delete,
}

impl HttpMethod {
    /// Returns whether the payload of a test case is sent with this method.
    #[must_use]
    pub const fn has_body(self) -> bool {
        matches!(self, Self::Post)
    }

    /// Returns the method as a static string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
