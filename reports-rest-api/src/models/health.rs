use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: HealthStatus,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checks: Option<BTreeMap<String, HealthCheckResult>>,
}

/// Individual health check result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthCheckResult {
    pub status: HealthStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<u64>,
}

/// Health check status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Unhealthy,
    Degraded,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: HealthStatus::Healthy,
            timestamp: chrono::Utc::now(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            checks: None,
        }
    }

    /// Attach checks; the overall status becomes the worst individual one
    pub fn with_checks(mut self, checks: BTreeMap<String, HealthCheckResult>) -> Self {
        let has_unhealthy = checks
            .values()
            .any(|check| check.status == HealthStatus::Unhealthy);
        let has_degraded = checks
            .values()
            .any(|check| check.status == HealthStatus::Degraded);

        self.status = if has_unhealthy {
            HealthStatus::Unhealthy
        } else if has_degraded {
            HealthStatus::Degraded
        } else {
            HealthStatus::Healthy
        };
        self.checks = Some(checks);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(status: HealthStatus) -> HealthCheckResult {
        HealthCheckResult {
            status,
            message: None,
            duration_ms: None,
        }
    }

    #[test]
    fn test_worst_check_wins() {
        let mut checks = BTreeMap::new();
        checks.insert("a".to_string(), check(HealthStatus::Healthy));
        checks.insert("b".to_string(), check(HealthStatus::Degraded));
        assert_eq!(
            HealthResponse::healthy().with_checks(checks.clone()).status,
            HealthStatus::Degraded
        );

        checks.insert("c".to_string(), check(HealthStatus::Unhealthy));
        assert_eq!(
            HealthResponse::healthy().with_checks(checks).status,
            HealthStatus::Unhealthy
        );
    }
}
