//! Domain-specific configuration modules

pub mod data;
pub mod logging;
pub mod query;
pub mod server;

use crate::error::ConfigResult;
use crate::validation::Validatable;
use serde::{Deserialize, Serialize};

/// Main dashboard configuration combining all domains
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// HTTP server configuration
    pub server: server::ServerConfig,

    /// Logging configuration
    pub logging: logging::LoggingConfig,

    /// Query engine configuration
    pub query: query::QueryConfig,

    /// Record source configuration
    pub data: data::DataConfig,
}

impl DashboardConfig {
    /// Validate all domain configurations
    pub fn validate_all(&self) -> ConfigResult<()> {
        self.server.validate()?;
        self.logging.validate()?;
        self.query.validate()?;
        self.data.validate()?;
        Ok(())
    }

    /// Generate a sample configuration file
    pub fn generate_sample() -> String {
        serde_yaml::to_string(&DashboardConfig::default())
            .unwrap_or_else(|_| "# Failed to generate sample config".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(DashboardConfig::default().validate_all().is_ok());
    }

    #[test]
    fn test_sample_parses_back() {
        let sample = DashboardConfig::generate_sample();
        let parsed: DashboardConfig = serde_yaml::from_str(&sample).unwrap();
        assert_eq!(parsed, DashboardConfig::default());
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let yaml = "query:\n  max_page_size: 25\n  default_page_size: 10\n";
        let config: DashboardConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.query.max_page_size, 25);
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.query.categories.len(), 5);
    }
}
