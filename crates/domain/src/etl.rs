//! Request bodies understood by the ETL service.
//!
//! These mirror the shapes the service accepts on its create, preview and
//! agent endpoints. The service owns their meaning; the runner only sends
//! them.

use std::fmt;

use serde::Serialize;
use serde_json::{Number, Value};

/// Connection credentials for a database source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DatabaseCredentials {
    /// Database host.
    pub host: String,
    /// Database port.
    pub port: u16,
    /// Login user.
    pub username: String,
    /// Login password.
    pub password: String,
    /// Database name.
    pub database: String,
}

/// Body of `POST sources`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewSource {
    /// Display name.
    pub name: String,
    /// Source kind, e.g. `postgres`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Connection credentials.
    pub credentials: DatabaseCredentials,
}

/// Body of `POST transformations`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewTransformation {
    /// Display name.
    pub name: String,
    /// Transformation kind, e.g. `natural_language`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Rule text interpreted by the service.
    pub definition: String,
}

/// Output settings for a file destination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileDestinationConfig {
    /// Output file path.
    pub path: String,
    /// Output formatting, e.g. `pretty`.
    pub format: String,
}

/// Body of `POST destinations`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewDestination {
    /// Display name.
    pub name: String,
    /// Destination kind, e.g. `json`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Destination settings.
    pub configuration: FileDestinationConfig,
}

/// Body of `POST transformations/test/natural_language`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NaturalLanguagePreview {
    /// Sample records to transform.
    pub input_data: Value,
    /// Instruction in plain language.
    pub instruction: String,
}

/// Commands accepted by the agent endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum AgentCommandKind {
    /// Lists available commands.
    #[serde(rename = "help")]
    Help,
    /// Lists configured pipelines.
    #[serde(rename = "list pipelines")]
    ListPipelines,
    /// Starts a pipeline.
    #[serde(rename = "run pipeline")]
    RunPipeline,
    /// Reports system or pipeline status.
    #[serde(rename = "status")]
    Status,
}

impl AgentCommandKind {
    /// Returns the command text sent on the wire.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Help => "help",
            Self::ListPipelines => "list pipelines",
            Self::RunPipeline => "run pipeline",
            Self::Status => "status",
        }
    }
}

impl fmt::Display for AgentCommandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identifier of a pipeline as the service reported it.
///
/// Sent back exactly as received: a numeric id stays a JSON number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum PipelineId {
    /// String id, e.g. a UUID.
    Text(String),
    /// Numeric id.
    Number(Number),
}

impl fmt::Display for PipelineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(id) => f.write_str(id),
            Self::Number(id) => write!(f, "{id}"),
        }
    }
}

impl From<&str> for PipelineId {
    fn from(id: &str) -> Self {
        Self::Text(id.to_string())
    }
}

/// Body of `POST agent/command`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AgentCommand {
    /// Command to run.
    pub command: AgentCommandKind,
    /// Pipeline the command targets, omitted when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pipeline_id: Option<PipelineId>,
}

impl AgentCommand {
    /// Creates a command without a pipeline.
    #[must_use]
    pub const fn new(command: AgentCommandKind) -> Self {
        Self {
            command,
            pipeline_id: None,
        }
    }

    /// Creates a command scoped to `pipeline_id`.
    #[must_use]
    pub const fn for_pipeline(command: AgentCommandKind, pipeline_id: PipelineId) -> Self {
        Self {
            command,
            pipeline_id: Some(pipeline_id),
        }
    }
}

/// Returns the id of the first pipeline in a response shaped like
/// `{"data": {"pipelines": [{"id": ...}, ...]}}`.
///
/// Only the first entry is considered. `None` when the list is missing or
/// empty, or when that entry has no string or numeric `id`.
#[must_use]
pub fn first_pipeline_id(body: &Value) -> Option<PipelineId> {
    match body.pointer("/data/pipelines/0/id")? {
        Value::String(id) => Some(PipelineId::Text(id.clone())),
        Value::Number(id) => Some(PipelineId::Number(id.clone())),
        _ => None,
    }
}
