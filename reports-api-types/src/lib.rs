//! Wire types for the reports dashboard
//!
//! This crate holds the serializable shapes shared by the query engine and
//! the REST layer, so both agree on field names and casing without either
//! depending on the other.

pub mod dates;
pub mod domain;
pub mod enums;
pub mod pagination;
pub mod summary;

// Re-export main types for convenience
pub use dates::parse_calendar_date;
pub use domain::Report;
pub use enums::{ParseStatusError, ReportStatus};
pub use pagination::{ListResponse, PaginationMeta, TOTAL_COUNT_HEADER, TOTAL_PAGES_HEADER};
pub use summary::{ReportSummary, SeriesPoint};
