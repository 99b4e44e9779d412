//! Context types for dependency injection in REST API handlers

use reports_core::{QueryNormalizer, ReportQueryService, ReportSource};
use std::sync::Arc;

/// Context shared by the report and health endpoints
///
/// The query service already holds its data source behind an `Arc`, so
/// cloning the context per request is cheap.
#[derive(Clone)]
pub struct ReportsContext {
    pub service: ReportQueryService,
}

impl ReportsContext {
    pub fn new(service: ReportQueryService) -> Self {
        Self { service }
    }

    /// Build a context straight from a data source and normalizer
    pub fn from_source(source: Arc<dyn ReportSource>, normalizer: QueryNormalizer) -> Self {
        Self::new(ReportQueryService::new(source, normalizer))
    }
}
