//! Configuration loading and environment variable handling

use crate::domains::logging::{LogFormat, LogLevel, LoggingConfig};
use crate::domains::query::QueryConfig;
use crate::domains::server::ServerConfig;
use crate::domains::DashboardConfig;
use crate::error::{ConfigError, ConfigResult};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::debug;

/// Configuration loader with environment variable support
pub struct ConfigLoader {
    /// Environment variable prefix
    prefix: String,
}

impl ConfigLoader {
    /// Create a new config loader with the `REPORTS` prefix
    pub fn new() -> Self {
        Self {
            prefix: "REPORTS".to_string(),
        }
    }

    /// Create a new config loader with custom prefix
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    /// Load configuration from a YAML or JSON file with environment overrides
    ///
    /// Files ending in `.json` are parsed as JSON, everything else as YAML.
    pub fn from_file(&self, path: impl AsRef<Path>) -> ConfigResult<DashboardConfig> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;

        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        let mut config: DashboardConfig = if is_json {
            serde_json::from_str(&content)?
        } else {
            serde_yaml::from_str(&content)?
        };
        debug!(path = %path.display(), "Parsed configuration file");

        self.apply_env_overrides(&mut config)?;
        config.validate_all()?;

        Ok(config)
    }

    /// Load configuration from environment variables only
    pub fn from_env(&self) -> ConfigResult<DashboardConfig> {
        let mut config = DashboardConfig::default();
        self.apply_env_overrides(&mut config)?;
        config.validate_all()?;
        Ok(config)
    }

    /// Load configuration with fallback chain
    pub fn load(&self, config_path: Option<impl AsRef<Path>>) -> ConfigResult<DashboardConfig> {
        match config_path {
            Some(path) => self.from_file(path),
            None => self.from_env(),
        }
    }

    /// Apply environment variable overrides to configuration
    fn apply_env_overrides(&self, config: &mut DashboardConfig) -> ConfigResult<()> {
        self.apply_server_overrides(&mut config.server)?;
        self.apply_logging_overrides(&mut config.logging)?;
        self.apply_query_overrides(&mut config.query)?;

        if let Ok(path) = self.get_env_var("DATA_FIXTURE_PATH") {
            config.data.fixture_path = Some(PathBuf::from(path));
        }

        Ok(())
    }

    fn apply_server_overrides(&self, config: &mut ServerConfig) -> ConfigResult<()> {
        if let Ok(bind) = self.get_env_var("SERVER_BIND_ADDRESS") {
            config.bind_address = bind;
        }

        if let Ok(port) = self.get_env_var("SERVER_PORT") {
            config.port = port
                .parse()
                .map_err(|e| ConfigError::EnvError(format!("Invalid SERVER_PORT: {}", e)))?;
        }

        Ok(())
    }

    fn apply_logging_overrides(&self, config: &mut LoggingConfig) -> ConfigResult<()> {
        if let Ok(log_level) = self.get_env_var("LOG_LEVEL") {
            config.level = LogLevel::from_str(&log_level)
                .map_err(|_| ConfigError::EnvError(format!("Invalid LOG_LEVEL: {}", log_level)))?;
        }

        if let Ok(format) = self.get_env_var("LOG_FORMAT") {
            config.format = LogFormat::from_str(&format)
                .map_err(|_| ConfigError::EnvError(format!("Invalid LOG_FORMAT: {}", format)))?;
        }

        Ok(())
    }

    fn apply_query_overrides(&self, config: &mut QueryConfig) -> ConfigResult<()> {
        if let Ok(categories) = self.get_env_var("QUERY_CATEGORIES") {
            config.categories = categories
                .split(',')
                .map(|c| c.trim().to_lowercase())
                .filter(|c| !c.is_empty())
                .collect();
        }

        if let Ok(size) = self.get_env_var("QUERY_DEFAULT_PAGE_SIZE") {
            config.default_page_size = size.parse().map_err(|e| {
                ConfigError::EnvError(format!("Invalid QUERY_DEFAULT_PAGE_SIZE: {}", e))
            })?;
        }

        if let Ok(size) = self.get_env_var("QUERY_MAX_PAGE_SIZE") {
            config.max_page_size = size.parse().map_err(|e| {
                ConfigError::EnvError(format!("Invalid QUERY_MAX_PAGE_SIZE: {}", e))
            })?;
        }

        Ok(())
    }

    /// Get environment variable with prefix
    fn get_env_var(&self, name: &str) -> Result<String, std::env::VarError> {
        std::env::var(format!("{}_{}", self.prefix, name))
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
