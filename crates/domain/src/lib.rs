//! ETL Probe Domain - Core types
//!
//! This crate defines the domain model for the ETL Probe test runner.
//! All types here are pure Rust with no I/O dependencies.

pub mod config;
pub mod error;
pub mod etl;
pub mod request;
pub mod response;
pub mod testing;

pub use config::{DEFAULT_API_PREFIX, DEFAULT_BASE_URL, ProbeConfig};
pub use error::{DomainError, DomainResult};
pub use etl::{
    AgentCommand, AgentCommandKind, DatabaseCredentials, FileDestinationConfig,
    NaturalLanguagePreview, NewDestination, NewSource, NewTransformation, PipelineId, first_pipeline_id,
};
pub use request::{HttpMethod, JSON_CONTENT_TYPE, RequestSpec};
pub use response::{ResponseSpec, StatusCode};
pub use testing::{CaseOutcome, NO_JSON_CONTENT, TestCase, TestRunSummary};
