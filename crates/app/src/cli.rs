//! Command-line arguments for the ETL Probe binary.

use clap::Parser;
use etl_probe_domain::{DEFAULT_API_PREFIX, DEFAULT_BASE_URL, DomainResult, ProbeConfig};

/// Runs the ETL service API checks once and exits 0 only if all of them pass.
#[derive(Debug, Parser)]
#[command(name = "etl-probe", version, about)]
pub struct ProbeArgs {
    /// Root URL of the ETL service.
    #[arg(long, env = "ETL_PROBE_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Path prefix every API endpoint lives under.
    #[arg(long, env = "ETL_PROBE_API_PREFIX", default_value = DEFAULT_API_PREFIX)]
    pub api_prefix: String,
}

impl ProbeArgs {
    /// Validates the arguments into a run configuration.
    pub fn probe_config(&self) -> DomainResult<ProbeConfig> {
        ProbeConfig::new(&self.base_url, &self.api_prefix)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_flags() {
        let args = ProbeArgs::try_parse_from([
            "etl-probe",
            "--base-url",
            "https://etl.example.com",
            "--api-prefix",
            "v2",
        ])
        .unwrap();

        let config = args.probe_config().unwrap();
        assert_eq!(config.endpoint_url("sources"), "https://etl.example.com/v2/sources");
    }

    #[test]
    fn test_invalid_base_url_is_rejected() {
        let args =
            ProbeArgs::try_parse_from(["etl-probe", "--base-url", "localhost:8000"]).unwrap();
        assert!(args.probe_config().is_err());
    }

    #[test]
    fn test_unknown_flag_is_rejected() {
        assert!(ProbeArgs::try_parse_from(["etl-probe", "--retries", "3"]).is_err());
    }
}
