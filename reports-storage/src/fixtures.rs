//! Fixture loading and the built-in sample dataset

use chrono::NaiveDate;
use reports_api_types::{Report, ReportStatus};
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

use crate::error::{StorageError, StorageResult};

/// Fixture layout with the records under a `reports` key
#[derive(Deserialize)]
struct WrappedFixture {
    reports: Vec<Report>,
}

/// Fixture encodings, chosen by file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FixtureFormat {
    Json,
    Yaml,
}

impl FixtureFormat {
    pub fn from_path(path: &Path) -> StorageResult<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Ok(FixtureFormat::Json),
            Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") => {
                Ok(FixtureFormat::Yaml)
            }
            _ => Err(StorageError::UnsupportedFormat(path.to_path_buf())),
        }
    }
}

/// Parse fixture content in the given format
///
/// The top level is either a list of reports or a map with a `reports` list.
/// The layout is picked before the records are decoded, so a bad record
/// surfaces its own error.
pub fn parse_reports(content: &str, format: FixtureFormat) -> StorageResult<Vec<Report>> {
    let reports = match format {
        FixtureFormat::Json => {
            let value: serde_json::Value = serde_json::from_str(content)?;
            if value.is_array() {
                serde_json::from_value(value)?
            } else {
                serde_json::from_value::<WrappedFixture>(value)?.reports
            }
        }
        FixtureFormat::Yaml => {
            let value: serde_yaml::Value = serde_yaml::from_str(content)?;
            if value.is_sequence() {
                serde_yaml::from_value(value)?
            } else {
                serde_yaml::from_value::<WrappedFixture>(value)?.reports
            }
        }
    };
    Ok(reports)
}

/// Read and parse a fixture file
pub async fn load_reports(path: &Path) -> StorageResult<Vec<Report>> {
    let format = FixtureFormat::from_path(path)?;
    let content = tokio::fs::read_to_string(path).await?;
    debug!(path = %path.display(), ?format, bytes = content.len(), "Parsing report fixture");
    parse_reports(&content, format)
}

/// Records served when no fixture file is configured
pub fn sample_reports() -> Vec<Report> {
    [
        (1, "Finance Report Q1", "finance", ReportStatus::Open, (2025, 11, 1), 1250.0),
        (2, "Ops Report October", "ops", ReportStatus::Closed, (2025, 10, 25), 430.5),
        (3, "Finance Report Q2", "finance", ReportStatus::Open, (2025, 11, 5), 1780.0),
        (4, "Ops Report November", "ops", ReportStatus::Open, (2025, 11, 10), 512.25),
        (5, "Annual Sales Report", "sales", ReportStatus::Closed, (2025, 1, 2), 45.0),
        (6, "Marketing Plan Q1", "marketing", ReportStatus::Closed, (2025, 2, 11), 30.0),
        (7, "Development Progress", "development", ReportStatus::Open, (2025, 3, 15), 50.0),
        (8, "Sales Forecast", "sales", ReportStatus::Open, (2025, 4, 8), 40.0),
        (9, "Marketing Campaign", "marketing", ReportStatus::Open, (2025, 5, 21), 60.0),
        (10, "Development Roadmap", "development", ReportStatus::Closed, (2025, 6, 10), 70.0),
    ]
    .into_iter()
    .filter_map(|(id, title, category, status, (y, m, d), value)| {
        NaiveDate::from_ymd_opt(y, m, d)
            .map(|date| Report::new(id, title, category, status, date).with_value(value))
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_format_from_extension() {
        assert_eq!(
            FixtureFormat::from_path(Path::new("data/reports.JSON")).unwrap(),
            FixtureFormat::Json
        );
        assert_eq!(
            FixtureFormat::from_path(Path::new("reports.yml")).unwrap(),
            FixtureFormat::Yaml
        );
        assert!(matches!(
            FixtureFormat::from_path(Path::new("reports.csv")),
            Err(StorageError::UnsupportedFormat(_))
        ));
        assert!(FixtureFormat::from_path(Path::new("reports")).is_err());
    }

    #[test]
    fn test_parse_timestamp_dates() {
        let json = r#"[
            {"id": 1, "title": "Finance Report Q1", "category": "finance",
             "status": "open", "date": "2025-11-01T00:00:00.000Z"}
        ]"#;
        let reports = parse_reports(json, FixtureFormat::Json).unwrap();
        assert_eq!(reports[0].date, NaiveDate::from_ymd_opt(2025, 11, 1).unwrap());
    }

    #[test]
    fn test_bad_record_reports_its_own_error() {
        let json = r#"{"reports": [
            {"id": 1, "title": "t", "category": "ops", "status": "open", "date": "someday"}
        ]}"#;
        let err = parse_reports(json, FixtureFormat::Json).unwrap_err();
        assert!(err.to_string().contains("invalid date 'someday'"), "{err}");
    }

    #[test]
    fn test_parse_wrapped_yaml() {
        let yaml = r#"
reports:
  - id: 7
    title: Quarterly review
    category: finance
    status: closed
    date: 2025-03-31
    value: 12.5
"#;
        let reports = parse_reports(yaml, FixtureFormat::Yaml).unwrap();
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].status, ReportStatus::Closed);
        assert_eq!(reports[0].value, 12.5);
    }

    #[test]
    fn test_parse_rejects_unknown_status() {
        let json = r#"[{"id":1,"title":"x","category":"ops","status":"draft","date":"2025-01-01"}]"#;
        let err = parse_reports(json, FixtureFormat::Json).unwrap_err();
        assert!(err.is_parse_error());
    }

    #[test]
    fn test_sample_reports_are_complete_and_unique() {
        let reports = sample_reports();
        assert_eq!(reports.len(), 10);
        let ids: HashSet<u64> = reports.iter().map(|r| r.id).collect();
        assert_eq!(ids.len(), reports.len());
    }
}
