//! # Reports Core
//!
//! The report query engine. Raw request parameters pass through three
//! stages, each a pure function of its inputs:
//!
//! 1. [`QueryNormalizer`] parses and validates strings into a
//!    [`ReportCriteria`] and a [`PageSpec`];
//! 2. [`ReportCriteria::matches`] is the predicate a [`ReportSource`]
//!    applies to its records;
//! 3. [`ReportQueryService`] sorts, counts and windows the matches.
//!
//! Every validation failure is reported before the data source is touched.
//!
//! ```rust,no_run
//! use reports_core::{QueryNormalizer, RawReportQuery, ReportQueryService, ReportSource};
//! use std::sync::Arc;
//!
//! # async fn example(source: Arc<dyn ReportSource>) -> Result<(), reports_core::QueryError> {
//! let service = ReportQueryService::new(source, QueryNormalizer::default());
//! let page = service
//!     .search(&RawReportQuery::default().with_status("open"))
//!     .await?;
//! println!("{} of {} reports", page.data.len(), page.pagination.total);
//! # Ok(())
//! # }
//! ```

pub mod criteria;
pub mod error;
pub mod executor;
pub mod normalizer;
pub mod predicate;
pub mod source;
pub mod summary;

pub use criteria::{CategoryFilter, PageSpec, ReportCriteria, StatusFilter};
pub use error::{QueryError, QueryErrorKind, QueryResult};
pub use executor::ReportQueryService;
pub use normalizer::{
    parse_date, QueryNormalizer, RawReportQuery, DEFAULT_CATEGORIES, DEFAULT_PAGE_SIZE,
    MAX_PAGE_SIZE,
};
pub use source::{DataSourceError, ReportSource};
pub use summary::summarize_reports;

pub use reports_api_types::{ListResponse, PaginationMeta, Report, ReportStatus, ReportSummary};
