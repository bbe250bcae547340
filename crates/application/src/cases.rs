//! Catalog of the ETL service test cases.

use etl_probe_domain::{
    AgentCommand, AgentCommandKind, DatabaseCredentials, FileDestinationConfig,
    NaturalLanguagePreview, NewDestination, NewSource, NewTransformation, PipelineId, TestCase,
};
use serde_json::json;

use crate::ApplicationResult;
use crate::ports::Clock;

const SAMPLE_INSTRUCTION: &str = "Convert all names to uppercase format";
const AGENT_ENDPOINT: &str = "agent/command";

/// Name of the `run pipeline` case.
pub const RUN_PIPELINE_CASE: &str = "AI Agent Run Pipeline Command";

/// Name of the pipeline-scoped `status` case.
pub const PIPELINE_STATUS_CASE: &str = "AI Agent Pipeline Status Command";

/// Builds the fixed cases run against the ETL service.
///
/// Creation cases stamp resource names with the clock's `HHMMSS` so repeated
/// runs do not collide.
pub struct EtlCases<K> {
    clock: K,
}

impl<K: Clock> EtlCases<K> {
    /// Creates the catalog.
    pub const fn new(clock: K) -> Self {
        Self { clock }
    }

    fn stamp(&self) -> String {
        self.clock.now().format("%H%M%S").to_string()
    }

    /// `GET /` expecting the welcome message.
    #[must_use]
    pub fn welcome_message(&self) -> TestCase {
        TestCase::get("Welcome Message", "", 200)
    }

    /// `GET sources`.
    #[must_use]
    pub fn list_sources(&self) -> TestCase {
        TestCase::get("List Sources", "sources", 200)
    }

    /// `GET transformations`.
    #[must_use]
    pub fn list_transformations(&self) -> TestCase {
        TestCase::get("List Transformations", "transformations", 200)
    }

    /// `GET destinations`.
    #[must_use]
    pub fn list_destinations(&self) -> TestCase {
        TestCase::get("List Destinations", "destinations", 200)
    }

    /// `GET pipelines`.
    #[must_use]
    pub fn list_pipelines(&self) -> TestCase {
        TestCase::get("List Pipelines", "pipelines", 200)
    }

    /// `POST sources` with a postgres source.
    ///
    /// # Errors
    ///
    /// Returns an error if the payload cannot be serialized.
    pub fn create_source(&self) -> ApplicationResult<TestCase> {
        let source = NewSource {
            name: format!("Test PostgreSQL Source {}", self.stamp()),
            kind: "postgres".to_string(),
            credentials: DatabaseCredentials {
                host: "localhost".to_string(),
                port: 5432,
                username: "test_user".to_string(),
                password: "test_password".to_string(),
                database: "test_db".to_string(),
            },
        };
        Ok(TestCase::post("Create Source", "sources", 201, &source)?)
    }

    /// `POST transformations` with a natural-language rule.
    ///
    /// # Errors
    ///
    /// Returns an error if the payload cannot be serialized.
    pub fn create_transformation(&self) -> ApplicationResult<TestCase> {
        let transformation = NewTransformation {
            name: format!("Test Transformation {}", self.stamp()),
            kind: "natural_language".to_string(),
            definition: SAMPLE_INSTRUCTION.to_string(),
        };
        Ok(TestCase::post(
            "Create Transformation",
            "transformations",
            201,
            &transformation,
        )?)
    }

    /// `POST destinations` with a JSON file destination.
    ///
    /// # Errors
    ///
    /// Returns an error if the payload cannot be serialized.
    pub fn create_destination(&self) -> ApplicationResult<TestCase> {
        let destination = NewDestination {
            name: format!("Test Destination {}", self.stamp()),
            kind: "json".to_string(),
            configuration: FileDestinationConfig {
                path: "/tmp/output.json".to_string(),
                format: "pretty".to_string(),
            },
        };
        Ok(TestCase::post(
            "Create Destination",
            "destinations",
            201,
            &destination,
        )?)
    }

    /// `POST transformations/test/natural_language` with two sample users.
    ///
    /// # Errors
    ///
    /// Returns an error if the payload cannot be serialized.
    pub fn natural_language_transform(&self) -> ApplicationResult<TestCase> {
        let preview = NaturalLanguagePreview {
            input_data: json!({
                "users": [
                    {"name": "John Doe", "email": "john@example.com"},
                    {"name": "Jane Smith", "email": "jane@example.com"}
                ]
            }),
            instruction: SAMPLE_INSTRUCTION.to_string(),
        };
        Ok(TestCase::post(
            "Natural Language Transform",
            "transformations/test/natural_language",
            200,
            &preview,
        )?)
    }

    /// Agent `help`.
    ///
    /// # Errors
    ///
    /// Returns an error if the payload cannot be serialized.
    pub fn agent_help(&self) -> ApplicationResult<TestCase> {
        agent_case(
            "AI Agent Help Command",
            &AgentCommand::new(AgentCommandKind::Help),
        )
    }

    /// Agent `list pipelines`.
    ///
    /// # Errors
    ///
    /// Returns an error if the payload cannot be serialized.
    pub fn agent_list_pipelines(&self) -> ApplicationResult<TestCase> {
        agent_case(
            "AI Agent List Pipelines Command",
            &AgentCommand::new(AgentCommandKind::ListPipelines),
        )
    }

    /// Agent `run pipeline` for `pipeline_id`.
    ///
    /// # Errors
    ///
    /// Returns an error if the payload cannot be serialized.
    pub fn agent_run_pipeline(&self, pipeline_id: &PipelineId) -> ApplicationResult<TestCase> {
        agent_case(
            RUN_PIPELINE_CASE,
            &AgentCommand::for_pipeline(AgentCommandKind::RunPipeline, pipeline_id.clone()),
        )
    }

    /// Agent `status`, system-wide or for one pipeline.
    ///
    /// # Errors
    ///
    /// Returns an error if the payload cannot be serialized.
    pub fn agent_status(&self, pipeline_id: Option<&PipelineId>) -> ApplicationResult<TestCase> {
        match pipeline_id {
            Some(id) => agent_case(
                PIPELINE_STATUS_CASE,
                &AgentCommand::for_pipeline(AgentCommandKind::Status, id.clone()),
            ),
            None => agent_case(
                "AI Agent Status Command",
                &AgentCommand::new(AgentCommandKind::Status),
            ),
        }
    }
}

fn agent_case(name: &str, command: &AgentCommand) -> ApplicationResult<TestCase> {
    Ok(TestCase::post(name, AGENT_ENDPOINT, 200, command)?)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::mocks::FixedClock;
    use etl_probe_domain::{HttpMethod, StatusCode};
    use pretty_assertions::assert_eq;

    fn cases() -> EtlCases<FixedClock> {
        EtlCases::new(FixedClock)
    }

    #[test]
    fn test_listing_cases() {
        let cases = cases();
        let listed: Vec<_> = [
            cases.welcome_message(),
            cases.list_sources(),
            cases.list_transformations(),
            cases.list_destinations(),
            cases.list_pipelines(),
        ]
        .into_iter()
        .map(|case| (case.method, case.endpoint, case.expected_status.as_u16()))
        .collect();

        assert_eq!(
            listed,
            vec![
                (HttpMethod::Get, String::new(), 200),
                (HttpMethod::Get, "sources".to_string(), 200),
                (HttpMethod::Get, "transformations".to_string(), 200),
                (HttpMethod::Get, "destinations".to_string(), 200),
                (HttpMethod::Get, "pipelines".to_string(), 200),
            ]
        );
    }

    #[test]
    fn test_create_source_payload() {
        let case = cases().create_source().unwrap();
        assert_eq!(case.expected_status, StatusCode::CREATED);
        assert_eq!(
            case.payload,
            Some(json!({
                "name": "Test PostgreSQL Source 153000",
                "type": "postgres",
                "credentials": {
                    "host": "localhost",
                    "port": 5432,
                    "username": "test_user",
                    "password": "test_password",
                    "database": "test_db"
                }
            }))
        );
    }

    #[test]
    fn test_create_transformation_and_destination_names_are_stamped() {
        let cases = cases();
        let transformation = cases.create_transformation().unwrap();
        assert_eq!(
            transformation.payload.unwrap()["name"],
            json!("Test Transformation 153000")
        );

        let destination = cases.create_destination().unwrap();
        let payload = destination.payload.unwrap();
        assert_eq!(payload["name"], json!("Test Destination 153000"));
        assert_eq!(
            payload["configuration"],
            json!({"path": "/tmp/output.json", "format": "pretty"})
        );
    }

    #[test]
    fn test_natural_language_payload() {
        let case = cases().natural_language_transform().unwrap();
        assert_eq!(case.endpoint, "transformations/test/natural_language");
        let payload = case.payload.unwrap();
        assert_eq!(payload["instruction"], json!("Convert all names to uppercase format"));
        assert_eq!(payload["input_data"]["users"][1]["name"], json!("Jane Smith"));
    }

    #[test]
    fn test_agent_status_variants() {
        let cases = cases();
        assert_eq!(
            cases.agent_status(None).unwrap().payload,
            Some(json!({"command": "status"}))
        );

        let scoped = cases.agent_status(Some(&PipelineId::from("abc123"))).unwrap();
        assert_eq!(scoped.name, PIPELINE_STATUS_CASE);
        assert_eq!(
            scoped.payload,
            Some(json!({"command": "status", "pipeline_id": "abc123"}))
        );
    }
}
