//! Validated query values
//!
//! Both types here can only be built by [`crate::QueryNormalizer`], so
//! holding one means its invariants already hold.

use chrono::NaiveDate;
use reports_api_types::ReportStatus;
use std::ops::Range;

/// Status constraint of a query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusFilter {
    All,
    Only(ReportStatus),
}

/// Category constraint of a query, lower-cased
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryFilter {
    All,
    Only(String),
}

/// Filter criteria for report queries
///
/// Invariant: `date_from <= date_to` whenever both are present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportCriteria {
    pub(crate) date_from: Option<NaiveDate>,
    pub(crate) date_to: Option<NaiveDate>,
    pub(crate) status: StatusFilter,
    pub(crate) category: CategoryFilter,
    pub(crate) search_term: Option<String>,
}

impl ReportCriteria {
    pub fn date_from(&self) -> Option<NaiveDate> {
        self.date_from
    }

    pub fn date_to(&self) -> Option<NaiveDate> {
        self.date_to
    }

    pub fn status(&self) -> StatusFilter {
        self.status
    }

    pub fn category(&self) -> &CategoryFilter {
        &self.category
    }

    /// Lower-cased, trimmed, never empty.
    pub fn search_term(&self) -> Option<&str> {
        self.search_term.as_deref()
    }

    /// True when no criterion constrains the result.
    pub fn is_unfiltered(&self) -> bool {
        self.date_from.is_none()
            && self.date_to.is_none()
            && self.status == StatusFilter::All
            && self.category == CategoryFilter::All
            && self.search_term.is_none()
    }
}

/// A validated pagination request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSpec {
    pub(crate) page: u32,
    pub(crate) page_size: u32,
}

impl PageSpec {
    /// 1-based page number
    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Index of the first record on this page
    pub fn offset(&self) -> u64 {
        u64::from(self.page - 1) * u64::from(self.page_size)
    }

    /// Slice bounds of this page within `total` sorted matches.
    ///
    /// Pages past the end yield an empty range.
    pub fn window(&self, total: usize) -> Range<usize> {
        let start = usize::try_from(self.offset()).unwrap_or(usize::MAX).min(total);
        let end = start.saturating_add(self.page_size as usize).min(total);
        start..end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_slices_within_total() {
        let page = PageSpec { page: 2, page_size: 3 };
        assert_eq!(page.offset(), 3);
        assert_eq!(page.window(10), 3..6);
        assert_eq!(page.window(4), 3..4);
    }

    #[test]
    fn test_window_past_end_is_empty() {
        let page = PageSpec { page: 5, page_size: 50 };
        assert!(page.window(10).is_empty());
        assert!(PageSpec { page: 1, page_size: 50 }.window(0).is_empty());
    }

    #[test]
    fn test_window_handles_huge_page() {
        let page = PageSpec { page: u32::MAX, page_size: 100 };
        assert!(page.window(10).is_empty());
    }
}
