//! Dashboard aggregation over matched reports

use chrono::NaiveDate;
use reports_api_types::{Report, ReportSummary, SeriesPoint};
use std::collections::BTreeMap;

/// Aggregate counts, totals and a per-date series over `reports`.
pub fn summarize_reports(reports: &[Report]) -> ReportSummary {
    let mut summary = ReportSummary::default();
    let mut series: BTreeMap<NaiveDate, (f64, u64)> = BTreeMap::new();

    for report in reports {
        summary.total += 1;
        summary.total_value += report.value;
        *summary
            .by_category
            .entry(report.category.to_lowercase())
            .or_insert(0) += 1;
        *summary
            .by_status
            .entry(report.status.as_str().to_string())
            .or_insert(0) += 1;

        let point = series.entry(report.date).or_insert((0.0, 0));
        point.0 += report.value;
        point.1 += 1;
    }

    if summary.total > 0 {
        summary.average_value = summary.total_value / summary.total as f64;
    }

    summary.series = series
        .into_iter()
        .map(|(date, (value, count))| SeriesPoint { date, value, count })
        .collect();

    summary
}
