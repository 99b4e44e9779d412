use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::enums::ReportStatus;

/// A single report record as held by a data source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub id: u64,
    pub title: String,
    pub category: String,
    pub status: ReportStatus,
    /// UTC calendar date of the report; time of day carries no meaning.
    #[serde(deserialize_with = "crate::dates::deserialize_calendar_date")]
    pub date: NaiveDate,
    /// Only consumed by dashboard aggregation.
    #[serde(default)]
    pub value: f64,
}

impl Report {
    pub fn new(
        id: u64,
        title: impl Into<String>,
        category: impl Into<String>,
        status: ReportStatus,
        date: NaiveDate,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            category: category.into(),
            status,
            date,
            value: 0.0,
        }
    }

    pub fn with_value(mut self, value: f64) -> Self {
        self.value = value;
        self
    }
}
