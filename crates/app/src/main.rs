//! ETL Probe - Main Entry Point
//!
//! Runs the ETL service checks in order, prints the report on standard
//! output and exits 0 when every check passed, 1 otherwise.

mod cli;

use std::process::ExitCode;

use clap::Parser;
use etl_probe_application::{ApplicationResult, EtlCases, RunSuite, TestRunner};
use etl_probe_domain::TestRunSummary;
use etl_probe_infrastructure::{ConsoleReporter, ReqwestHttpClient, SystemClock};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::ProbeArgs;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Logs go to stderr so stdout carries only the report
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = ProbeArgs::parse();

    match run(&args).await {
        Ok(summary) => ExitCode::from(summary.exit_code()),
        Err(error) => {
            tracing::error!(%error, "could not start the test run");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: &ProbeArgs) -> ApplicationResult<TestRunSummary> {
    let config = args.probe_config()?;
    tracing::info!(
        api = %config.api_url(),
        "Starting ETL Probe v{}",
        env!("CARGO_PKG_VERSION")
    );

    let client = ReqwestHttpClient::new()?;
    let runner = TestRunner::new(client, ConsoleReporter::stdout(), config);
    let suite = RunSuite::new(runner, EtlCases::new(SystemClock::new()));

    Ok(suite.execute().await)
}
