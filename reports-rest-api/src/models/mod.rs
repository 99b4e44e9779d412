pub mod health;

pub use health::{HealthCheckResult, HealthResponse, HealthStatus};
