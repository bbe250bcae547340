//! Run Suite use case
//!
//! Sequences every ETL service case in a fixed order, prints the interesting
//! response bodies, and hands back the final tally.

use etl_probe_domain::{CaseOutcome, TestCase, TestRunSummary, first_pipeline_id};
use tracing::Instrument;
use uuid::Uuid;

use crate::ApplicationResult;
use crate::cases::{EtlCases, PIPELINE_STATUS_CASE, RUN_PIPELINE_CASE};
use crate::ports::{Clock, HttpClient, Reporter};
use crate::runner::TestRunner;

const NO_PIPELINES: &str = "no pipeline id listed by the agent";

/// Runs the whole ETL service suite once.
///
/// Cases run strictly in order because the pipeline-scoped agent checks
/// reuse the first pipeline id returned by `list pipelines`. When none is
/// returned those checks are skipped and counted as skipped.
pub struct RunSuite<C, R, K> {
    runner: TestRunner<C, R>,
    cases: EtlCases<K>,
}

impl<C: HttpClient, R: Reporter, K: Clock> RunSuite<C, R, K> {
    /// Creates the use case.
    pub const fn new(runner: TestRunner<C, R>, cases: EtlCases<K>) -> Self {
        Self { runner, cases }
    }

    /// Runs every case and returns the tally.
    pub async fn execute(self) -> TestRunSummary {
        self.execute_with_runner().await.0
    }

    /// Runs every case and returns the tally together with the runner.
    pub async fn execute_with_runner(mut self) -> (TestRunSummary, TestRunner<C, R>) {
        let run_id = Uuid::now_v7();
        let span = tracing::info_span!("suite", %run_id);

        async move {
            tracing::info!("starting ETL service suite");
            self.run_service_cases().await;
            self.run_agent_cases().await;

            let summary = self.runner.summary();
            self.runner.reporter_mut().summary(&summary);
            tracing::info!(
                attempted = summary.attempted(),
                passed = summary.passed(),
                skipped = summary.skipped(),
                "suite finished"
            );
            (summary, self.runner)
        }
        .instrument(span)
        .await
    }

    async fn run_service_cases(&mut self) {
        self.runner
            .reporter_mut()
            .section("Testing ETL Service API");

        let listing = [
            self.cases.welcome_message(),
            self.cases.list_sources(),
            self.cases.list_transformations(),
            self.cases.list_destinations(),
            self.cases.list_pipelines(),
        ];
        for case in &listing {
            self.runner.run_test(case).await;
        }

        let source = self.cases.create_source();
        self.run_built("Create Source", source).await;
        let transformation = self.cases.create_transformation();
        self.run_built("Create Transformation", transformation).await;
        let destination = self.cases.create_destination();
        self.run_built("Create Destination", destination).await;

        let preview = self.cases.natural_language_transform();
        let outcome = self.run_built("Natural Language Transform", preview).await;
        self.show(&outcome, "Transformation result");
    }

    async fn run_agent_cases(&mut self) {
        self.runner
            .reporter_mut()
            .section("Testing AI Agent API");

        let help = self.cases.agent_help();
        let outcome = self.run_built("AI Agent Help Command", help).await;
        self.show(&outcome, "AI Agent Help Response");

        let list = self.cases.agent_list_pipelines();
        let listed = self
            .run_built("AI Agent List Pipelines Command", list)
            .await;
        self.show(&listed, "AI Agent List Pipelines Response");

        let status = self.cases.agent_status(None);
        let outcome = self.run_built("AI Agent Status Command", status).await;
        self.show(&outcome, "AI Agent Status Response");

        let Some(pipeline_id) = first_pipeline_id(&listed.body) else {
            tracing::info!("skipping pipeline-scoped agent checks");
            self.runner.skip(RUN_PIPELINE_CASE, NO_PIPELINES);
            self.runner.skip(PIPELINE_STATUS_CASE, NO_PIPELINES);
            return;
        };

        let run = self.cases.agent_run_pipeline(&pipeline_id);
        let outcome = self.run_built(RUN_PIPELINE_CASE, run).await;
        self.show(
            &outcome,
            &format!("AI Agent Run Pipeline Response (Pipeline ID: {pipeline_id})"),
        );

        let status = self.cases.agent_status(Some(&pipeline_id));
        let outcome = self.run_built(PIPELINE_STATUS_CASE, status).await;
        self.show(
            &outcome,
            &format!("AI Agent Pipeline Status Response (Pipeline ID: {pipeline_id})"),
        );
    }

    async fn run_built(&mut self, name: &str, case: ApplicationResult<TestCase>) -> CaseOutcome {
        match case {
            Ok(case) => self.runner.run_test(&case).await,
            Err(error) => self.runner.fail_unbuilt(name, &error.to_string()),
        }
    }

    fn show(&mut self, outcome: &CaseOutcome, label: &str) {
        if outcome.success {
            self.runner.reporter_mut().response_body(label, &outcome.body);
        }
    }
}
