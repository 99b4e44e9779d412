//! In-memory report store
//!
//! Records are loaded once at startup and never change afterwards, so
//! concurrent reads need no locking. The store evaluates [`ReportCriteria`] itself so the engine's predicate is the
//! only filter implementation in play.

use async_trait::async_trait;
use reports_api_types::Report;
use reports_core::{DataSourceError, ReportCriteria, ReportSource};
use std::collections::HashSet;
use std::path::Path;
use tracing::info;

use crate::error::{StorageError, StorageResult};
use crate::fixtures;

/// Read-only report store backed by a vector
#[derive(Debug)]
pub struct InMemoryReportStore {
    reports: Vec<Report>,
}

impl InMemoryReportStore {
    /// Create a store, rejecting duplicate or zero identifiers
    pub fn new(reports: Vec<Report>) -> StorageResult<Self> {
        check_ids(&reports)?;
        Ok(Self { reports })
    }

    /// Load a store from a JSON or YAML fixture file
    pub async fn from_file(path: impl AsRef<Path>) -> StorageResult<Self> {
        let path = path.as_ref();
        let reports = fixtures::load_reports(path).await?;
        info!(path = %path.display(), count = reports.len(), "Loaded report fixtures");
        Self::new(reports)
    }

    /// Store seeded with the built-in sample dataset
    pub fn with_sample_data() -> Self {
        Self {
            reports: fixtures::sample_reports(),
        }
    }

    pub fn len(&self) -> usize {
        self.reports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }
}

fn check_ids(reports: &[Report]) -> StorageResult<()> {
    let mut seen = HashSet::with_capacity(reports.len());
    for report in reports {
        if report.id == 0 {
            return Err(StorageError::InvalidId {
                title: report.title.clone(),
            });
        }
        if !seen.insert(report.id) {
            return Err(StorageError::DuplicateId(report.id));
        }
    }
    Ok(())
}

#[async_trait]
impl ReportSource for InMemoryReportStore {
    async fn find(&self, criteria: &ReportCriteria) -> Result<Vec<Report>, DataSourceError> {
        Ok(criteria.apply(&self.reports))
    }

    async fn count(&self, criteria: &ReportCriteria) -> Result<u64, DataSourceError> {
        Ok(self.reports.iter().filter(|r| criteria.matches(r)).count() as u64)
    }

    async fn find_by_id(&self, id: u64) -> Result<Option<Report>, DataSourceError> {
        Ok(self.reports.iter().find(|r| r.id == id).cloned())
    }

    async fn health_check(&self) -> Result<(), DataSourceError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use reports_api_types::ReportStatus;

    fn report(id: u64) -> Report {
        Report::new(
            id,
            format!("Report {id}"),
            "ops",
            ReportStatus::Open,
            NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
        )
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let err = InMemoryReportStore::new(vec![report(1), report(2), report(1)]).unwrap_err();
        assert!(matches!(err, StorageError::DuplicateId(1)));
    }

    #[test]
    fn test_zero_id_rejected() {
        let err = InMemoryReportStore::new(vec![report(0)]).unwrap_err();
        assert!(matches!(err, StorageError::InvalidId { .. }));
    }

    #[tokio::test]
    async fn test_find_by_id() {
        let store = InMemoryReportStore::new(vec![report(3), report(9)]).unwrap();
        assert_eq!(store.find_by_id(9).await.unwrap().map(|r| r.id), Some(9));
        assert!(store.find_by_id(4).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_empty_fixture_is_a_valid_store() {
        let store = InMemoryReportStore::new(Vec::new()).unwrap();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
        assert!(store.health_check().await.is_ok());
    }
}
