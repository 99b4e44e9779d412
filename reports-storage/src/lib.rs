//! Storage for report records
//!
//! Provides [`InMemoryReportStore`], the [`reports_core::ReportSource`]
//! implementation used by the server, along with fixture loading from JSON
//! or YAML files and a small built-in sample dataset.

pub mod error;
pub mod fixtures;
pub mod memory;

pub use error::{StorageError, StorageResult};
pub use fixtures::{load_reports, parse_reports, sample_reports, FixtureFormat};
pub use memory::InMemoryReportStore;
