//! Query execution against an injected data source

use reports_api_types::{ListResponse, PaginationMeta, Report, ReportSummary};
use std::cmp::Ordering;
use std::sync::Arc;
use tracing::debug;

use crate::error::{QueryError, QueryResult};
use crate::normalizer::{QueryNormalizer, RawReportQuery};
use crate::source::{DataSourceError, ReportSource};
use crate::summary::summarize_reports;

/// Entry point of the query engine
///
/// Holds no per-request state; share one instance behind an `Arc`.
#[derive(Clone)]
pub struct ReportQueryService {
    source: Arc<dyn ReportSource>,
    normalizer: QueryNormalizer,
}

impl ReportQueryService {
    pub fn new(source: Arc<dyn ReportSource>, normalizer: QueryNormalizer) -> Self {
        Self { source, normalizer }
    }

    /// Search reports and return one page of matches, newest first
    pub async fn search(&self, raw: &RawReportQuery) -> QueryResult<ListResponse<Report>> {
        let (criteria, page) = self.normalizer.normalize(raw)?;

        let mut matches = self.source.find(&criteria).await?;
        matches.sort_by(newest_first);

        let total = matches.len();
        let window = page.window(total);
        debug!(
            total,
            page = page.page(),
            page_size = page.page_size(),
            returned = window.len(),
            "report search executed"
        );

        let data: Vec<Report> = matches.drain(window).collect();
        Ok(ListResponse::new(
            data,
            PaginationMeta::new(page.page(), page.page_size(), total as u64),
        ))
    }

    /// Look up a single report by its raw identifier
    pub async fn get_by_id(&self, raw_id: &str) -> QueryResult<Report> {
        let id = self.normalizer.parse_id(raw_id)?;

        self.source
            .find_by_id(id)
            .await?
            .ok_or(QueryError::NotFound { id })
    }

    /// Aggregate every report matching the filters; pagination is ignored
    pub async fn summarize(&self, raw: &RawReportQuery) -> QueryResult<ReportSummary> {
        let criteria = self.normalizer.normalize_criteria(raw)?;
        let matches = self.source.find(&criteria).await?;
        Ok(summarize_reports(&matches))
    }

    /// Number of records held by the source, ignoring all filters
    pub async fn record_count(&self) -> QueryResult<u64> {
        let criteria = self.normalizer.normalize_criteria(&RawReportQuery::default())?;
        Ok(self.source.count(&criteria).await?)
    }

    pub async fn health_check(&self) -> Result<(), DataSourceError> {
        self.source.health_check().await
    }
}

/// Date descending, then id descending so equal dates order deterministically.
fn newest_first(a: &Report, b: &Report) -> Ordering {
    b.date.cmp(&a.date).then_with(|| b.id.cmp(&a.id))
}
