//! Error taxonomy of the query engine

use chrono::NaiveDate;
use thiserror::Error;

use crate::source::DataSourceError;

/// Result type for query engine operations
pub type QueryResult<T> = Result<T, QueryError>;

/// Every way a search or lookup can fail.
///
/// Validation variants carry the offending field and value, and the allowed
/// set where one exists, so callers can build precise messages.
#[derive(Debug, Error)]
pub enum QueryError {
    #[error("Invalid date format for '{field}': {value}")]
    InvalidDate { field: &'static str, value: String },

    #[error("From date {from} cannot be after to date {to}")]
    InvalidDateRange { from: NaiveDate, to: NaiveDate },

    #[error("Invalid status: {value}. Must be one of: {}", .allowed.join(", "))]
    InvalidStatus { value: String, allowed: Vec<String> },

    #[error("Invalid category: {value}. Must be one of: {}", .allowed.join(", "))]
    InvalidCategory { value: String, allowed: Vec<String> },

    #[error("Invalid pagination for '{field}': {message}")]
    InvalidPagination { field: &'static str, message: String },

    #[error("Invalid report ID: {value}")]
    InvalidId { value: String },

    #[error("Report not found with ID: {id}")]
    NotFound { id: u64 },

    #[error("Data source error: {0}")]
    DataSource(#[from] DataSourceError),
}

/// Fieldless discriminant of [`QueryError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryErrorKind {
    InvalidDate,
    InvalidDateRange,
    InvalidStatus,
    InvalidCategory,
    InvalidPagination,
    InvalidId,
    NotFound,
    DataSource,
}

impl QueryError {
    pub fn kind(&self) -> QueryErrorKind {
        match self {
            QueryError::InvalidDate { .. } => QueryErrorKind::InvalidDate,
            QueryError::InvalidDateRange { .. } => QueryErrorKind::InvalidDateRange,
            QueryError::InvalidStatus { .. } => QueryErrorKind::InvalidStatus,
            QueryError::InvalidCategory { .. } => QueryErrorKind::InvalidCategory,
            QueryError::InvalidPagination { .. } => QueryErrorKind::InvalidPagination,
            QueryError::InvalidId { .. } => QueryErrorKind::InvalidId,
            QueryError::NotFound { .. } => QueryErrorKind::NotFound,
            QueryError::DataSource(_) => QueryErrorKind::DataSource,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, QueryError::NotFound { .. })
    }

    /// True for failures caused by the caller's input.
    pub fn is_validation(&self) -> bool {
        !matches!(self, QueryError::NotFound { .. } | QueryError::DataSource(_))
    }

    /// Name of the request parameter at fault, if any.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            QueryError::InvalidDate { field, .. } | QueryError::InvalidPagination { field, .. } => {
                Some(*field)
            }
            QueryError::InvalidDateRange { .. } => Some("from"),
            QueryError::InvalidStatus { .. } => Some("status"),
            QueryError::InvalidCategory { .. } => Some("category"),
            QueryError::InvalidId { .. } => Some("id"),
            QueryError::NotFound { .. } | QueryError::DataSource(_) => None,
        }
    }

    pub fn allowed_values(&self) -> Option<&[String]> {
        match self {
            QueryError::InvalidStatus { allowed, .. }
            | QueryError::InvalidCategory { allowed, .. } => Some(allowed.as_slice()),
            _ => None,
        }
    }
}
