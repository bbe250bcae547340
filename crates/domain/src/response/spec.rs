//! Response specification type
//!
//! Contains types for representing HTTP responses: the status code and
//! the raw body.

use serde_json::Value;

/// HTTP status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusCode(pub u16);

impl StatusCode {
    /// 200 OK
    pub const OK: Self = Self(200);
    /// 201 Created
    pub const CREATED: Self = Self(201);
    /// 204 No Content
    pub const NO_CONTENT: Self = Self(204);

    /// Creates a new `StatusCode`.
    #[must_use]
    pub const fn new(code: u16) -> Self {
        Self(code)
    }

    /// Returns the numeric status code.
    #[must_use]
    pub const fn as_u16(&self) -> u16 {
        self.0
    }
}

/// HTTP response received for a test case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseSpec {
    /// HTTP status code.
    pub status: StatusCode,
    /// Raw response body.
    pub body: Vec<u8>,
}

impl ResponseSpec {
    /// Creates a new `ResponseSpec` from raw response data.
    #[must_use]
    pub fn new(status: u16, body: Vec<u8>) -> Self {
        Self {
            status: StatusCode::new(status),
            body,
        }
    }

    /// Returns true for a 204 response, whose body is never inspected.
    #[must_use]
    pub const fn is_no_content(&self) -> bool {
        self.status.as_u16() == StatusCode::NO_CONTENT.as_u16()
    }

    /// Parses the body as JSON.
    ///
    /// Returns `None` for an empty body or one that is not valid JSON.
    #[must_use]
    pub fn json(&self) -> Option<Value> {
        if self.body.is_empty() {
            return None;
        }
        serde_json::from_slice(&self.body).ok()
    }

    /// Returns the body as text, replacing invalid UTF-8 sequences.
    #[must_use]
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn response(status: u16, body: &str) -> ResponseSpec {
        ResponseSpec::new(status, body.as_bytes().to_vec())
    }

    #[test]
    fn test_json_body() {
        let res = response(200, r#"{"message": "Welcome"}"#);
        assert_eq!(res.json(), Some(json!({"message": "Welcome"})));
    }

    #[test]
    fn test_empty_and_invalid_bodies() {
        assert_eq!(response(200, "").json(), None);
        assert_eq!(response(200, "<html>oops</html>").json(), None);
    }

    #[test]
    fn test_no_content() {
        assert!(response(204, "").is_no_content());
        assert!(!response(200, "").is_no_content());
    }

    #[test]
    fn test_lossy_text() {
        let res = ResponseSpec::new(500, vec![b'o', b'k', 0xff]);
        assert_eq!(res.text(), "ok\u{fffd}");
    }
}
