//! Domain-driven configuration for the reports dashboard
//!
//! Configuration is split by domain (server, logging, query, data), each
//! validated on its own, and loaded from YAML or JSON with `REPORTS_*`
//! environment overrides applied on top.

pub mod domains;
pub mod error;
pub mod loader;
pub mod validation;

pub use domains::{
    data::DataConfig,
    logging::{LogFormat, LogLevel, LoggingConfig},
    query::QueryConfig,
    server::ServerConfig,
    DashboardConfig,
};
pub use error::{ConfigError, ConfigResult};
pub use loader::ConfigLoader;
pub use validation::Validatable;
