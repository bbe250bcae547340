//! Reporter port
//!
//! Receives the human-readable progress of a run. Diagnostics go through
//! `tracing`; this port carries only what the person running the suite reads.

use etl_probe_domain::{ResponseSpec, StatusCode, TestCase, TestRunSummary};
use serde_json::Value;

/// Body of a response whose status did not match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorBody {
    /// The body parsed as JSON.
    Json(Value),
    /// The body as text, possibly empty.
    Text(String),
}

impl ErrorBody {
    /// Captures the body of `response`.
    #[must_use]
    pub fn from_response(response: &ResponseSpec) -> Self {
        response
            .json()
            .map_or_else(|| Self::Text(response.text()), Self::Json)
    }
}

/// Sink for run progress.
pub trait Reporter {
    /// A group of cases begins.
    fn section(&mut self, title: &str);

    /// A case is about to be dispatched.
    fn case_started(&mut self, name: &str);

    /// A case received its expected status.
    fn case_passed(&mut self, case: &TestCase, status: StatusCode);

    /// A case received a different status than expected.
    fn status_mismatch(&mut self, case: &TestCase, actual: StatusCode, body: &ErrorBody);

    /// A case could not obtain a response at all.
    fn case_errored(&mut self, name: &str, error: &str);

    /// A response body worth showing in full.
    fn response_body(&mut self, label: &str, body: &Value);

    /// A case was not run.
    fn case_skipped(&mut self, name: &str, reason: &str);

    /// The run is over.
    fn summary(&mut self, summary: &TestRunSummary);
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_error_body_prefers_json() {
        let response = ResponseSpec::new(422, br#"{"detail": "name required"}"#.to_vec());
        assert_eq!(
            ErrorBody::from_response(&response),
            ErrorBody::Json(json!({"detail": "name required"}))
        );
    }

    #[test]
    fn test_error_body_falls_back_to_text() {
        let response = ResponseSpec::new(502, b"Bad Gateway".to_vec());
        assert_eq!(
            ErrorBody::from_response(&response),
            ErrorBody::Text("Bad Gateway".to_string())
        );
    }
}
