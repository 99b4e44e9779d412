//! Storage error types

use reports_core::DataSourceError;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for storage operations
pub type StorageResult<T> = std::result::Result<T, StorageError>;

/// Storage-related errors
#[derive(Debug, Error)]
pub enum StorageError {
    /// Two records share the same identifier
    #[error("Duplicate report id: {0}")]
    DuplicateId(u64),

    /// Identifiers start at 1
    #[error("Invalid report id 0 for report '{title}'")]
    InvalidId { title: String },

    /// Fixture file extension is neither JSON nor YAML
    #[error("Unsupported fixture format: {}", .0.display())]
    UnsupportedFormat(PathBuf),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML serialization errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl StorageError {
    /// Check if the error came from malformed fixture content
    pub fn is_parse_error(&self) -> bool {
        matches!(self, StorageError::Json(_) | StorageError::Yaml(_))
    }
}

impl From<StorageError> for DataSourceError {
    fn from(err: StorageError) -> Self {
        DataSourceError::backend(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversion_keeps_the_storage_error_as_source() {
        let err: DataSourceError = StorageError::DuplicateId(4).into();
        let source = std::error::Error::source(&err).expect("boxed source");
        assert_eq!(source.to_string(), "Duplicate report id: 4");
    }
}
