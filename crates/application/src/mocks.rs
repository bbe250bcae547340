//! In-memory port implementations shared by the unit tests.
#![allow(clippy::expect_used)]

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, Local, TimeZone};
use etl_probe_domain::{ProbeConfig, RequestSpec, ResponseSpec, StatusCode, TestCase, TestRunSummary};
use serde_json::Value;

use crate::ports::{Clock, ErrorBody, HttpClient, HttpClientError, Reporter};

pub const BASE_URL: &str = "http://etl.test";

pub fn config() -> ProbeConfig {
    ProbeConfig::new(BASE_URL, "api").expect("valid test config")
}

pub fn json_response(status: u16, body: &str) -> Result<ResponseSpec, HttpClientError> {
    Ok(ResponseSpec::new(status, body.as_bytes().to_vec()))
}

type Responder = Box<dyn Fn(&RequestSpec) -> Result<ResponseSpec, HttpClientError> + Send + Sync>;

/// Answers every request through a closure and keeps a log of what was sent.
pub struct MockHttpClient {
    responder: Responder,
    requests: Mutex<Vec<RequestSpec>>,
}

impl MockHttpClient {
    pub fn new(
        responder: impl Fn(&RequestSpec) -> Result<ResponseSpec, HttpClientError> + Send + Sync + 'static,
    ) -> Self {
        Self {
            responder: Box::new(responder),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<RequestSpec> {
        self.requests.lock().expect("Lock poisoned").clone()
    }
}

#[async_trait]
impl HttpClient for MockHttpClient {
    async fn execute(&self, request: &RequestSpec) -> Result<ResponseSpec, HttpClientError> {
        self.requests
            .lock()
            .expect("Lock poisoned")
            .push(request.clone());
        (self.responder)(request)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Section(String),
    Started(String),
    Passed(String, u16),
    Mismatch(String, u16, ErrorBody),
    Errored(String, String),
    Body(String, Value),
    Skipped(String, String),
    Summary(TestRunSummary),
}

#[derive(Debug, Default)]
pub struct RecordingReporter {
    pub events: Vec<Event>,
}

impl Reporter for RecordingReporter {
    fn section(&mut self, title: &str) {
        self.events.push(Event::Section(title.to_string()));
    }

    fn case_started(&mut self, name: &str) {
        self.events.push(Event::Started(name.to_string()));
    }

    fn case_passed(&mut self, case: &TestCase, status: StatusCode) {
        self.events
            .push(Event::Passed(case.name.clone(), status.as_u16()));
    }

    fn status_mismatch(&mut self, case: &TestCase, actual: StatusCode, body: &ErrorBody) {
        self.events.push(Event::Mismatch(
            case.name.clone(),
            actual.as_u16(),
            body.clone(),
        ));
    }

    fn case_errored(&mut self, name: &str, error: &str) {
        self.events
            .push(Event::Errored(name.to_string(), error.to_string()));
    }

    fn response_body(&mut self, label: &str, body: &Value) {
        self.events.push(Event::Body(label.to_string(), body.clone()));
    }

    fn case_skipped(&mut self, name: &str, reason: &str) {
        self.events
            .push(Event::Skipped(name.to_string(), reason.to_string()));
    }

    fn summary(&mut self, summary: &TestRunSummary) {
        self.events.push(Event::Summary(*summary));
    }
}

/// Always reports 15:30:00 local time on 2026-10-19.
pub struct FixedClock;

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Local> {
        Local
            .with_ymd_and_hms(2026, 10, 19, 15, 30, 0)
            .earliest()
            .expect("valid fixed time")
    }
}
