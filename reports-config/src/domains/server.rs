//! HTTP server configuration

use crate::error::ConfigResult;
use crate::validation::{validate_port_range, validate_required_string, Validatable};
use serde::{Deserialize, Serialize};

/// Server configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Server bind address
    pub bind_address: String,

    /// Server port
    pub port: u16,

    /// Prefix for every report route
    pub api_prefix: String,

    /// Enable CORS handling
    pub enable_cors: bool,

    /// Attach and echo `X-Request-ID`
    pub enable_request_id: bool,

    /// Trace every request through `tower-http`
    pub enable_tracing: bool,

    /// Allowed CORS origins; `*` allows any
    pub cors_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1".to_string(),
            port: 3000,
            api_prefix: "/api/v1".to_string(),
            enable_cors: true,
            enable_request_id: true,
            enable_tracing: true,
            cors_origins: vec!["*".to_string()],
        }
    }
}

impl ServerConfig {
    /// `address:port` string suitable for binding a listener
    pub fn socket_address(&self) -> String {
        format!("{}:{}", self.bind_address, self.port)
    }
}

impl Validatable for ServerConfig {
    fn validate(&self) -> ConfigResult<()> {
        validate_required_string(&self.bind_address, "bind_address", self.domain_name())?;
        validate_port_range(self.port, "port", self.domain_name())?;

        if !self.api_prefix.starts_with('/') {
            return Err(self.validation_error(format!(
                "api_prefix must start with '/', got '{}'",
                self.api_prefix
            )));
        }

        if self.enable_cors && self.cors_origins.iter().any(|o| o.trim().is_empty()) {
            return Err(self.validation_error("cors_origins cannot contain empty entries"));
        }

        Ok(())
    }

    fn domain_name(&self) -> &'static str {
        "server"
    }
}
