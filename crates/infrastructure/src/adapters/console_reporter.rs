//! Console reporter
//!
//! Writes the human-readable run log. Standard output in the binary, any
//! `Write` sink in tests.

use std::fmt;
use std::io::{self, Write};

use etl_probe_application::ports::{ErrorBody, Reporter};
use etl_probe_domain::{StatusCode, TestCase, TestRunSummary};
use serde_json::Value;

/// Reporter that prints progress lines to a writer.
#[derive(Debug)]
pub struct ConsoleReporter<W> {
    out: W,
}

impl ConsoleReporter<io::Stdout> {
    /// Reporter writing to standard output.
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ConsoleReporter<W> {
    /// Reporter writing to `out`.
    pub const fn new(out: W) -> Self {
        Self { out }
    }

    /// Consumes the reporter, returning the writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn line(&mut self, args: fmt::Arguments<'_>) {
        if let Err(error) = self.out.write_fmt(args).and_then(|()| self.out.write_all(b"\n")) {
            tracing::debug!(%error, "could not write report line");
        }
    }
}

fn pretty(body: &Value) -> String {
    serde_json::to_string_pretty(body).unwrap_or_else(|_| body.to_string())
}

impl<W: Write> Reporter for ConsoleReporter<W> {
    fn section(&mut self, title: &str) {
        self.line(format_args!("\n===== {title} =====\n"));
    }

    fn case_started(&mut self, name: &str) {
        self.line(format_args!("\n🔍 Testing {name}..."));
    }

    fn case_passed(&mut self, _case: &TestCase, status: StatusCode) {
        self.line(format_args!("✅ Passed - Status: {}", status.as_u16()));
    }

    fn status_mismatch(&mut self, case: &TestCase, actual: StatusCode, body: &ErrorBody) {
        self.line(format_args!(
            "❌ Failed - Expected {}, got {}",
            case.expected_status.as_u16(),
            actual.as_u16()
        ));
        match body {
            ErrorBody::Json(json) => self.line(format_args!("Error response: {json}")),
            ErrorBody::Text(text) => self.line(format_args!("Error response: {text}")),
        }
    }

    fn case_errored(&mut self, _name: &str, error: &str) {
        self.line(format_args!("❌ Failed - Error: {error}"));
    }

    fn response_body(&mut self, label: &str, body: &Value) {
        self.line(format_args!("{label}:"));
        self.line(format_args!("{}", pretty(body)));
    }

    fn case_skipped(&mut self, name: &str, reason: &str) {
        self.line(format_args!("\n⏭️  Skipped {name} - {reason}"));
    }

    fn summary(&mut self, summary: &TestRunSummary) {
        if summary.skipped() == 0 {
            self.line(format_args!(
                "\n📊 Tests passed: {}/{}",
                summary.passed(),
                summary.attempted()
            ));
        } else {
            self.line(format_args!(
                "\n📊 Tests passed: {}/{} ({} skipped)",
                summary.passed(),
                summary.attempted(),
                summary.skipped()
            ));
        }
    }
}
