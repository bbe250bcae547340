//! Test case, outcome and run summary types.

use serde::Serialize;
use serde_json::{Map, Value, json};

use crate::error::{DomainError, DomainResult};
use crate::request::HttpMethod;
use crate::response::StatusCode;

/// Body returned when a matching response carries no parsable JSON.
pub const NO_JSON_CONTENT: &str = "No JSON content";

/// A single named HTTP request with its expected status.
#[derive(Debug, Clone, PartialEq)]
pub struct TestCase {
    /// Label used in the report.
    pub name: String,
    /// HTTP method.
    pub method: HttpMethod,
    /// Path fragment appended to the API prefix.
    pub endpoint: String,
    /// Status code the response must carry.
    pub expected_status: StatusCode,
    /// JSON payload sent as the request body.
    pub payload: Option<Value>,
}

impl TestCase {
    /// Creates a case without a payload.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        method: HttpMethod,
        endpoint: impl Into<String>,
        expected_status: u16,
    ) -> Self {
        Self {
            name: name.into(),
            method,
            endpoint: endpoint.into(),
            expected_status: StatusCode::new(expected_status),
            payload: None,
        }
    }

    /// Creates a GET case.
    #[must_use]
    pub fn get(
        name: impl Into<String>,
        endpoint: impl Into<String>,
        expected_status: u16,
    ) -> Self {
        Self::new(name, HttpMethod::Get, endpoint, expected_status)
    }

    /// Creates a DELETE case.
    #[must_use]
    pub fn delete(
        name: impl Into<String>,
        endpoint: impl Into<String>,
        expected_status: u16,
    ) -> Self {
        Self::new(name, HttpMethod::Delete, endpoint, expected_status)
    }

    /// Creates a POST case whose body is `payload` serialized to JSON.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidBody`] if the payload cannot be
    /// represented as JSON.
    pub fn post<P: Serialize>(
        name: impl Into<String>,
        endpoint: impl Into<String>,
        expected_status: u16,
        payload: &P,
    ) -> DomainResult<Self> {
        let body =
            serde_json::to_value(payload).map_err(|e| DomainError::InvalidBody(e.to_string()))?;
        Ok(Self::new(name, HttpMethod::Post, endpoint, expected_status).with_payload(body))
    }

    /// Attaches a raw JSON payload.
    #[must_use]
    pub fn with_payload(mut self, payload: Value) -> Self {
        self.payload = Some(payload);
        self
    }
}

/// Result of running one test case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseOutcome {
    /// Whether the observed status matched the expectation.
    pub success: bool,
    /// Parsed body on success, an empty object otherwise.
    pub body: Value,
}

impl CaseOutcome {
    /// A passing outcome carrying `body`.
    #[must_use]
    pub const fn passed(body: Value) -> Self {
        Self {
            success: true,
            body,
        }
    }

    /// A passing outcome with an empty body, used for 204 responses.
    #[must_use]
    pub fn passed_empty() -> Self {
        Self::passed(Value::Object(Map::new()))
    }

    /// A passing outcome whose body could not be parsed as JSON.
    #[must_use]
    pub fn passed_without_json() -> Self {
        Self::passed(json!({ "message": NO_JSON_CONTENT }))
    }

    /// A failing outcome.
    #[must_use]
    pub fn failed() -> Self {
        Self {
            success: false,
            body: Value::Object(Map::new()),
        }
    }
}

/// Running tally of a test run.
///
/// Counters only ever increase. `passed` never exceeds `attempted`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TestRunSummary {
    attempted: usize,
    passed: usize,
    skipped: usize,
}

impl TestRunSummary {
    /// Creates an empty summary.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            attempted: 0,
            passed: 0,
            skipped: 0,
        }
    }

    /// Records that a case was dispatched.
    pub const fn record_attempt(&mut self) {
        self.attempted += 1;
    }

    /// Records that the most recently attempted case passed.
    ///
    /// Ignored if it would make `passed` exceed `attempted`.
    pub const fn record_pass(&mut self) {
        if self.passed < self.attempted {
            self.passed += 1;
        }
    }

    /// Records a case the driver chose not to run.
    pub const fn record_skip(&mut self) {
        self.skipped += 1;
    }

    /// Number of cases dispatched.
    #[must_use]
    pub const fn attempted(&self) -> usize {
        self.attempted
    }

    /// Number of cases whose status matched.
    #[must_use]
    pub const fn passed(&self) -> usize {
        self.passed
    }

    /// Number of cases not run.
    #[must_use]
    pub const fn skipped(&self) -> usize {
        self.skipped
    }

    /// Number of dispatched cases that did not pass.
    #[must_use]
    pub const fn failed(&self) -> usize {
        self.attempted - self.passed
    }

    /// Check if all dispatched cases passed.
    #[must_use]
    pub const fn all_passed(&self) -> bool {
        self.passed == self.attempted
    }

    /// Process exit code for this run: 0 when every case passed, 1 otherwise.
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        if self.all_passed() { 0 } else { 1 }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[derive(Serialize)]
    struct Probe {
        command: &'static str,
    }

    #[test]
    fn test_post_case_serializes_payload() {
        let case = TestCase::post("Agent", "agent/command", 200, &Probe { command: "help" }).unwrap();
        assert_eq!(case.method, HttpMethod::Post);
        assert_eq!(case.expected_status, StatusCode::OK);
        assert_eq!(case.payload, Some(json!({"command": "help"})));
    }

    #[test]
    fn test_get_case_has_no_payload() {
        let case = TestCase::get("List Sources", "sources", 200);
        assert_eq!(case.payload, None);
        assert_eq!(case.endpoint, "sources");
    }

    #[test]
    fn test_outcome_bodies() {
        assert_eq!(CaseOutcome::failed().body, json!({}));
        assert!(!CaseOutcome::failed().success);
        assert_eq!(CaseOutcome::passed_empty().body, json!({}));
        assert_eq!(
            CaseOutcome::passed_without_json().body,
            json!({"message": "No JSON content"})
        );
    }

    #[test]
    fn test_summary_counts() {
        let mut summary = TestRunSummary::new();
        assert!(summary.all_passed());
        assert_eq!(summary.exit_code(), 0);

        summary.record_attempt();
        summary.record_pass();
        summary.record_attempt();
        assert_eq!(summary.attempted(), 2);
        assert_eq!(summary.passed(), 1);
        assert_eq!(summary.failed(), 1);
        assert_eq!(summary.exit_code(), 1);
    }

    #[test]
    fn test_pass_never_exceeds_attempts() {
        let mut summary = TestRunSummary::new();
        summary.record_pass();
        assert_eq!(summary.passed(), 0);

        summary.record_attempt();
        summary.record_pass();
        summary.record_pass();
        assert_eq!(summary.passed(), 1);
        assert!(summary.all_passed());
    }

    #[test]
    fn test_skips_do_not_affect_exit_code() {
        let mut summary = TestRunSummary::new();
        summary.record_attempt();
        summary.record_pass();
        summary.record_skip();
        summary.record_skip();
        assert_eq!(summary.skipped(), 2);
        assert_eq!(summary.exit_code(), 0);
    }
}
