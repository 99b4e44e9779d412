//! Data source abstraction consumed by the executor
//!
//! The engine never owns records. A deployment injects whatever store it
//! has (an in-memory collection, a database adapter) behind this trait.

use async_trait::async_trait;

use crate::criteria::ReportCriteria;
use reports_api_types::Report;

/// Errors raised by a data source
#[derive(Debug, thiserror::Error)]
pub enum DataSourceError {
    #[error("Connection error: {message}")]
    Connection { message: String },

    #[error("Query error: {message}")]
    Query { message: String },

    #[error("Backend error: {0}")]
    Backend(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl DataSourceError {
    pub fn connection(message: impl Into<String>) -> Self {
        DataSourceError::Connection {
            message: message.into(),
        }
    }

    pub fn query(message: impl Into<String>) -> Self {
        DataSourceError::Query {
            message: message.into(),
        }
    }

    pub fn backend<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        DataSourceError::Backend(Box::new(err))
    }
}

/// Read access to report records
///
/// `find` must return exactly the records for which
/// [`ReportCriteria::matches`] holds; ordering is left to the caller.
#[async_trait]
pub trait ReportSource: Send + Sync {
    /// All records matching the criteria, in any order
    async fn find(&self, criteria: &ReportCriteria) -> Result<Vec<Report>, DataSourceError>;

    /// Number of records matching the criteria
    async fn count(&self, criteria: &ReportCriteria) -> Result<u64, DataSourceError>;

    /// Exact lookup by identifier
    async fn find_by_id(&self, id: u64) -> Result<Option<Report>, DataSourceError>;

    /// Check that the source can serve requests
    async fn health_check(&self) -> Result<(), DataSourceError>;
}
