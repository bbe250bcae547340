//! Test runner implementation.
//!
//! Dispatches one request per test case and compares the observed status
//! against the expected one. Every failure is absorbed here so a broken case
//! never stops the run.

use std::time::Instant;

use etl_probe_domain::{CaseOutcome, ProbeConfig, RequestSpec, TestCase, TestRunSummary};

use crate::ports::{ErrorBody, HttpClient, Reporter};

/// Runs test cases against the configured service and keeps the tally.
pub struct TestRunner<C, R> {
    client: C,
    reporter: R,
    config: ProbeConfig,
    summary: TestRunSummary,
}

impl<C: HttpClient, R: Reporter> TestRunner<C, R> {
    /// Creates a runner with an empty tally.
    pub const fn new(client: C, reporter: R, config: ProbeConfig) -> Self {
        Self {
            client,
            reporter,
            config,
            summary: TestRunSummary::new(),
        }
    }

    /// Runs a single case.
    ///
    /// The attempt is counted before dispatch. A matching status counts as a
    /// pass and yields the parsed body: an empty object for 204, a
    /// `No JSON content` message when the body is empty or not JSON. A status
    /// mismatch or transport failure yields a failed outcome with an empty
    /// body.
    pub async fn run_test(&mut self, case: &TestCase) -> CaseOutcome {
        self.summary.record_attempt();
        self.reporter.case_started(&case.name);

        let request = self.request_for(case);
        tracing::debug!(case = %case.name, method = %request.method, url = %request.url, "dispatching request");

        let start = Instant::now();
        let response = match self.client.execute(&request).await {
            Ok(response) => response,
            Err(error) => {
                tracing::warn!(case = %case.name, url = %request.url, %error, "request failed");
                self.reporter.case_errored(&case.name, &error.to_string());
                return CaseOutcome::failed();
            }
        };
        tracing::debug!(
            case = %case.name,
            status = response.status.as_u16(),
            elapsed_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX),
            "response received"
        );

        if response.status != case.expected_status {
            self.reporter.status_mismatch(
                case,
                response.status,
                &ErrorBody::from_response(&response),
            );
            return CaseOutcome::failed();
        }

        self.summary.record_pass();
        self.reporter.case_passed(case, response.status);

        if response.is_no_content() {
            return CaseOutcome::passed_empty();
        }
        response
            .json()
            .map_or_else(CaseOutcome::passed_without_json, CaseOutcome::passed)
    }

    /// Counts a case that could not be built as attempted and failed.
    pub fn fail_unbuilt(&mut self, name: &str, error: &str) -> CaseOutcome {
        self.summary.record_attempt();
        self.reporter.case_started(name);
        tracing::error!(case = %name, %error, "could not build test case");
        self.reporter.case_errored(name, error);
        CaseOutcome::failed()
    }

    /// Records a case the caller decided not to run.
    pub fn skip(&mut self, name: &str, reason: &str) {
        self.summary.record_skip();
        self.reporter.case_skipped(name, reason);
    }

    /// The tally so far.
    pub const fn summary(&self) -> TestRunSummary {
        self.summary
    }

    /// The progress sink.
    pub const fn reporter_mut(&mut self) -> &mut R {
        &mut self.reporter
    }

    /// The HTTP client.
    pub const fn client(&self) -> &C {
        &self.client
    }

    /// Consumes the runner, returning its reporter.
    pub fn into_reporter(self) -> R {
        self.reporter
    }

    fn request_for(&self, case: &TestCase) -> RequestSpec {
        let request = RequestSpec::new(case.method, self.config.endpoint_url(&case.endpoint));
        match &case.payload {
            Some(payload) if case.method.has_body() => request.with_json(payload.clone()),
            _ => request,
        }
    }
}
