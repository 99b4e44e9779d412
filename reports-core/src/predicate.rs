//! Filter predicate over report records

use reports_api_types::Report;

use crate::criteria::{CategoryFilter, ReportCriteria, StatusFilter};

impl ReportCriteria {
    /// Whether `report` satisfies every active criterion.
    ///
    /// Date bounds are inclusive and compare calendar dates only. Category
    /// and title comparisons ignore case.
    pub fn matches(&self, report: &Report) -> bool {
        if let Some(from) = self.date_from {
            if report.date < from {
                return false;
            }
        }

        if let Some(to) = self.date_to {
            if report.date > to {
                return false;
            }
        }

        if let StatusFilter::Only(status) = self.status {
            if report.status != status {
                return false;
            }
        }

        if let CategoryFilter::Only(ref category) = self.category {
            if report.category.to_lowercase() != *category {
                return false;
            }
        }

        if let Some(ref term) = self.search_term {
            if !report.title.to_lowercase().contains(term.as_str()) {
                return false;
            }
        }

        true
    }

    /// Filter a slice of records, preserving their order.
    pub fn apply<'a, I>(&self, reports: I) -> Vec<Report>
    where
        I: IntoIterator<Item = &'a Report>,
    {
        reports
            .into_iter()
            .filter(|report| self.matches(report))
            .cloned()
            .collect()
    }
}
