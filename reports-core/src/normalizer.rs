//! Parameter normalization
//!
//! Turns raw, optional string parameters into validated criteria and a
//! [`PageSpec`]. Failures are reported in a fixed order: `from`, `to`, `status`,
//! `category`, pagination, then the date range.

use chrono::NaiveDate;
use reports_api_types::{parse_calendar_date, ReportStatus};
use serde::{Deserialize, Serialize};

use crate::criteria::{CategoryFilter, PageSpec, ReportCriteria, StatusFilter};
use crate::error::{QueryError, QueryResult};

/// Page size used when the request names none
pub const DEFAULT_PAGE_SIZE: u32 = 50;

/// Largest page size a request may ask for
pub const MAX_PAGE_SIZE: u32 = 100;

/// Categories accepted when none are configured
pub const DEFAULT_CATEGORIES: [&str; 5] = ["finance", "ops", "sales", "marketing", "development"];

const WILDCARD: &str = "all";

/// Raw search parameters, exactly as received
///
/// Every field stays a string so that the fallback rules for unparseable
/// numbers are decided here rather than by the transport.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawReportQuery {
    pub from: Option<String>,
    pub to: Option<String>,
    pub status: Option<String>,
    pub category: Option<String>,
    #[serde(rename = "searchTerm", alias = "search_term")]
    pub search_term: Option<String>,
    pub page: Option<String>,
    pub limit: Option<String>,
    #[serde(rename = "pageSize", alias = "page_size")]
    pub page_size: Option<String>,
}

impl RawReportQuery {
    pub fn with_from(mut self, from: impl Into<String>) -> Self {
        self.from = Some(from.into());
        self
    }

    pub fn with_to(mut self, to: impl Into<String>) -> Self {
        self.to = Some(to.into());
        self
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_search_term(mut self, term: impl Into<String>) -> Self {
        self.search_term = Some(term.into());
        self
    }

    pub fn with_page(mut self, page: impl Into<String>) -> Self {
        self.page = Some(page.into());
        self
    }

    pub fn with_limit(mut self, limit: impl Into<String>) -> Self {
        self.limit = Some(limit.into());
        self
    }

    pub fn with_page_size(mut self, page_size: impl Into<String>) -> Self {
        self.page_size = Some(page_size.into());
        self
    }
}

/// Validates raw parameters against the configured categories and page limits
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryNormalizer {
    categories: Vec<String>,
    default_page_size: u32,
    max_page_size: u32,
}

impl Default for QueryNormalizer {
    fn default() -> Self {
        Self::new(DEFAULT_CATEGORIES)
    }
}

impl QueryNormalizer {
    /// Create a normalizer accepting the given categories (case-insensitive)
    pub fn new<I, S>(categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut normalized: Vec<String> = Vec::new();
        for category in categories {
            let category = category.as_ref().trim().to_lowercase();
            if !category.is_empty() && category != WILDCARD && !normalized.contains(&category) {
                normalized.push(category);
            }
        }

        Self {
            categories: normalized,
            default_page_size: DEFAULT_PAGE_SIZE,
            max_page_size: MAX_PAGE_SIZE,
        }
    }

    /// Override the page size bounds.
    ///
    /// `max` is raised to at least 1 and `default` is clamped into `1..=max`.
    pub fn with_page_limits(mut self, default: u32, max: u32) -> Self {
        self.max_page_size = max.max(1);
        self.default_page_size = default.clamp(1, self.max_page_size);
        self
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn default_page_size(&self) -> u32 {
        self.default_page_size
    }

    pub fn max_page_size(&self) -> u32 {
        self.max_page_size
    }

    /// Validate both the filter criteria and the pagination request
    pub fn normalize(&self, raw: &RawReportQuery) -> QueryResult<(ReportCriteria, PageSpec)> {
        let criteria = self.criteria_fields(raw)?;
        let page = self.normalize_page(raw)?;
        check_range(&criteria)?;
        Ok((criteria, page))
    }

    /// Validate only the filter criteria; pagination parameters are ignored
    pub fn normalize_criteria(&self, raw: &RawReportQuery) -> QueryResult<ReportCriteria> {
        let criteria = self.criteria_fields(raw)?;
        check_range(&criteria)?;
        Ok(criteria)
    }

    /// Validate only the pagination request
    pub fn normalize_page(&self, raw: &RawReportQuery) -> QueryResult<PageSpec> {
        let page = match parse_integer(raw.page.as_deref()) {
            None => 1,
            Some(page) if page < 1 => {
                return Err(QueryError::InvalidPagination {
                    field: "page",
                    message: "Page number must be greater than 0".to_string(),
                })
            }
            // Beyond any real page count; the window comes back empty
            Some(page) => u32::try_from(page).unwrap_or(u32::MAX),
        };

        let (field, raw_size) = match non_blank(raw.page_size.as_deref()) {
            Some(size) => ("pageSize", Some(size)),
            None => ("limit", non_blank(raw.limit.as_deref())),
        };

        let page_size = match parse_integer(raw_size) {
            None => self.default_page_size,
            Some(size) if size < 1 || size > i64::from(self.max_page_size) => {
                return Err(QueryError::InvalidPagination {
                    field,
                    message: format!("Page size must be between 1 and {}", self.max_page_size),
                })
            }
            // Bounded by max_page_size above
            Some(size) => size as u32,
        };

        Ok(PageSpec { page, page_size })
    }

    /// Validate a raw report identifier
    pub fn parse_id(&self, raw: &str) -> QueryResult<u64> {
        match raw.trim().parse::<u64>() {
            Ok(id) if id >= 1 => Ok(id),
            _ => Err(QueryError::InvalidId {
                value: raw.to_string(),
            }),
        }
    }

    fn criteria_fields(&self, raw: &RawReportQuery) -> QueryResult<ReportCriteria> {
        let date_from = parse_date("from", raw.from.as_deref())?;
        let date_to = parse_date("to", raw.to.as_deref())?;
        let status = self.validate_status(raw.status.as_deref())?;
        let category = self.validate_category(raw.category.as_deref())?;
        let search_term = non_blank(raw.search_term.as_deref()).map(str::to_lowercase);

        Ok(ReportCriteria {
            date_from,
            date_to,
            status,
            category,
            search_term,
        })
    }

    fn validate_status(&self, raw: Option<&str>) -> QueryResult<StatusFilter> {
        let Some(value) = non_blank(raw) else {
            return Ok(StatusFilter::All);
        };

        let normalized = value.to_lowercase();
        if normalized == WILDCARD {
            return Ok(StatusFilter::All);
        }

        normalized
            .parse::<ReportStatus>()
            .map(StatusFilter::Only)
            .map_err(|_| QueryError::InvalidStatus {
                value: value.to_string(),
                allowed: ReportStatus::ALL
                    .iter()
                    .map(|status| status.as_str().to_string())
                    .chain(std::iter::once(WILDCARD.to_string()))
                    .collect(),
            })
    }

    fn validate_category(&self, raw: Option<&str>) -> QueryResult<CategoryFilter> {
        let Some(value) = non_blank(raw) else {
            return Ok(CategoryFilter::All);
        };

        let normalized = value.to_lowercase();
        if normalized == WILDCARD {
            return Ok(CategoryFilter::All);
        }

        if self.categories.contains(&normalized) {
            Ok(CategoryFilter::Only(normalized))
        } else {
            Err(QueryError::InvalidCategory {
                value: value.to_string(),
                allowed: self
                    .categories
                    .iter()
                    .cloned()
                    .chain(std::iter::once(WILDCARD.to_string()))
                    .collect(),
            })
        }
    }
}

/// Parse a calendar date parameter.
///
/// Absent or blank input yields `None`. Anything else follows the same
/// conversion as stored report dates (see [`parse_calendar_date`]).
pub fn parse_date(field: &'static str, raw: Option<&str>) -> QueryResult<Option<NaiveDate>> {
    let Some(value) = non_blank(raw) else {
        return Ok(None);
    };

    parse_calendar_date(value)
        .map(Some)
        .ok_or_else(|| QueryError::InvalidDate {
            field,
            value: value.to_string(),
        })
}

fn non_blank(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|value| !value.is_empty())
}

/// Read the leading integer of a numeric parameter.
///
/// An optional sign followed by digits is taken and anything after them is
/// ignored, so `2.5` reads as 2. Input with no leading digits counts as
/// absent. Magnitudes beyond `i64` saturate instead of being dropped.
fn parse_integer(raw: Option<&str>) -> Option<i64> {
    let value = non_blank(raw)?;
    let (negative, unsigned) = match value.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, value.strip_prefix('+').unwrap_or(value)),
    };

    let end = unsigned
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(unsigned.len());
    let digits = &unsigned[..end];
    if digits.is_empty() {
        return None;
    }

    // digits only, so the sole failure is overflow
    let magnitude = digits.parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -magnitude } else { magnitude })
}

fn check_range(criteria: &ReportCriteria) -> QueryResult<()> {
    if let (Some(from), Some(to)) = (criteria.date_from, criteria.date_to) {
        if from > to {
            return Err(QueryError::InvalidDateRange { from, to });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::QueryErrorKind;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn kind_of(raw: RawReportQuery) -> QueryErrorKind {
        QueryNormalizer::default().normalize(&raw).unwrap_err().kind()
    }

    #[test]
    fn test_defaults_when_everything_absent() {
        let (criteria, page) = QueryNormalizer::default()
            .normalize(&RawReportQuery::default())
            .unwrap();

        assert!(criteria.is_unfiltered());
        assert_eq!(page.page(), 1);
        assert_eq!(page.page_size(), DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn test_blank_values_count_as_absent() {
        let raw = RawReportQuery::default()
            .with_from("")
            .with_to("   ")
            .with_status("")
            .with_category(" ")
            .with_search_term("  ");
        let criteria = QueryNormalizer::default().normalize_criteria(&raw).unwrap();
        assert!(criteria.is_unfiltered());
    }

    #[test]
    fn test_parse_date_formats() {
        assert_eq!(parse_date("from", Some("2025-11-01")).unwrap(), Some(date("2025-11-01")));
        assert_eq!(
            parse_date("from", Some("2025-11-01T10:30:00Z")).unwrap(),
            Some(date("2025-11-01"))
        );
        assert_eq!(
            parse_date("from", Some("2025-11-01T10:30:00")).unwrap(),
            Some(date("2025-11-01"))
        );
        assert_eq!(parse_date("from", None).unwrap(), None);
    }

    #[test]
    fn test_offset_datetimes_normalize_to_utc_date() {
        // 23:30 at UTC-5 is already the next day in UTC
        assert_eq!(
            parse_date("to", Some("2025-11-01T23:30:00-05:00")).unwrap(),
            Some(date("2025-11-02"))
        );
        // 00:30 at UTC+2 is still the previous day in UTC
        assert_eq!(
            parse_date("to", Some("2025-11-01T00:30:00+02:00")).unwrap(),
            Some(date("2025-10-31"))
        );
    }

    #[test]
    fn test_invalid_date_names_field() {
        let err = QueryNormalizer::default()
            .normalize(&RawReportQuery::default().with_to("2025-13-45"))
            .unwrap_err();
        match err {
            QueryError::InvalidDate { field, value } => {
                assert_eq!(field, "to");
                assert_eq!(value, "2025-13-45");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_status_is_lowercased_and_checked() {
        let criteria = QueryNormalizer::default()
            .normalize_criteria(&RawReportQuery::default().with_status("OPEN"))
            .unwrap();
        assert_eq!(criteria.status(), StatusFilter::Only(ReportStatus::Open));

        let all = QueryNormalizer::default()
            .normalize_criteria(&RawReportQuery::default().with_status("All"))
            .unwrap();
        assert_eq!(all.status(), StatusFilter::All);

        let err = QueryNormalizer::default()
            .normalize(&RawReportQuery::default().with_status("pending"))
            .unwrap_err();
        assert_eq!(err.kind(), QueryErrorKind::InvalidStatus);
        assert_eq!(
            err.allowed_values().unwrap(),
            &["open".to_string(), "closed".to_string(), "all".to_string()]
        );
    }

    #[test]
    fn test_category_uses_configured_set() {
        let normalizer = QueryNormalizer::new(["Finance", "ops", "all", "ops"]);
        assert_eq!(normalizer.categories(), &["finance".to_string(), "ops".to_string()]);

        let criteria = normalizer
            .normalize_criteria(&RawReportQuery::default().with_category("Ops"))
            .unwrap();
        assert_eq!(criteria.category(), &CategoryFilter::Only("ops".to_string()));

        let err = normalizer
            .normalize(&RawReportQuery::default().with_category("sales"))
            .unwrap_err();
        assert_eq!(err.kind(), QueryErrorKind::InvalidCategory);
        assert_eq!(
            err.allowed_values().unwrap(),
            &["finance".to_string(), "ops".to_string(), "all".to_string()]
        );
    }

    #[test]
    fn test_page_zero_and_negative_are_rejected() {
        assert_eq!(kind_of(RawReportQuery::default().with_page("0")), QueryErrorKind::InvalidPagination);
        assert_eq!(kind_of(RawReportQuery::default().with_page("-3")), QueryErrorKind::InvalidPagination);
    }

    #[test]
    fn test_unparseable_numbers_fall_back_to_defaults() {
        let page = QueryNormalizer::default()
            .normalize_page(&RawReportQuery::default().with_page("abc").with_limit("lots"))
            .unwrap();
        assert_eq!(page.page(), 1);
        assert_eq!(page.page_size(), DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn test_numbers_read_their_integer_prefix() {
        let normalizer = QueryNormalizer::default();
        let page = normalizer
            .normalize_page(&RawReportQuery::default().with_page("2.5").with_limit("3.9"))
            .unwrap();
        assert_eq!(page.page(), 2);
        assert_eq!(page.page_size(), 3);

        let page = normalizer
            .normalize_page(&RawReportQuery::default().with_page(" +4 ").with_limit("7items"))
            .unwrap();
        assert_eq!(page.page(), 4);
        assert_eq!(page.page_size(), 7);

        assert_eq!(kind_of(RawReportQuery::default().with_page("-0.5")), QueryErrorKind::InvalidPagination);
        assert_eq!(kind_of(RawReportQuery::default().with_limit("0.9")), QueryErrorKind::InvalidPagination);
    }

    #[test]
    fn test_huge_page_numbers_saturate() {
        let normalizer = QueryNormalizer::default();
        for huge in ["5000000000", "99999999999999999999"] {
            let page = normalizer
                .normalize_page(&RawReportQuery::default().with_page(huge))
                .unwrap();
            assert_eq!(page.page(), u32::MAX, "page={huge}");
        }
        assert_eq!(
            kind_of(RawReportQuery::default().with_page("-99999999999999999999")),
            QueryErrorKind::InvalidPagination
        );
        assert_eq!(
            kind_of(RawReportQuery::default().with_limit("99999999999999999999")),
            QueryErrorKind::InvalidPagination
        );
    }

    #[test]
    fn test_page_size_bounds() {
        let normalizer = QueryNormalizer::default();
        assert_eq!(
            normalizer
                .normalize_page(&RawReportQuery::default().with_limit("100"))
                .unwrap()
                .page_size(),
            100
        );
        assert_eq!(kind_of(RawReportQuery::default().with_limit("101")), QueryErrorKind::InvalidPagination);
        assert_eq!(kind_of(RawReportQuery::default().with_limit("0")), QueryErrorKind::InvalidPagination);
    }

    #[test]
    fn test_page_size_takes_precedence_over_limit() {
        let page = QueryNormalizer::default()
            .normalize_page(&RawReportQuery::default().with_page_size("10").with_limit("20"))
            .unwrap();
        assert_eq!(page.page_size(), 10);

        let err = QueryNormalizer::default()
            .normalize_page(&RawReportQuery::default().with_page_size("500").with_limit("20"))
            .unwrap_err();
        assert_eq!(err.field(), Some("pageSize"));
    }

    #[test]
    fn test_custom_page_limits() {
        let normalizer = QueryNormalizer::default().with_page_limits(5, 10);
        assert_eq!(normalizer.normalize_page(&RawReportQuery::default()).unwrap().page_size(), 5);
        assert!(normalizer
            .normalize_page(&RawReportQuery::default().with_limit("11"))
            .is_err());
    }

    #[test]
    fn test_date_range_rejected_when_inverted() {
        let err = QueryNormalizer::default()
            .normalize(&RawReportQuery::default().with_from("2025-11-05").with_to("2025-01-01"))
            .unwrap_err();
        assert!(matches!(
            err,
            QueryError::InvalidDateRange { from, to } if from == date("2025-11-05") && to == date("2025-01-01")
        ));
    }

    #[test]
    fn test_equal_bounds_are_valid() {
        let criteria = QueryNormalizer::default()
            .normalize_criteria(&RawReportQuery::default().with_from("2025-11-05").with_to("2025-11-05"))
            .unwrap();
        assert_eq!(criteria.date_from(), criteria.date_to());
    }

    #[test]
    fn test_error_order_is_fixed() {
        // Both the status and the page are wrong; status is checked first
        let raw = RawReportQuery::default().with_status("bogus").with_page("0");
        assert_eq!(kind_of(raw), QueryErrorKind::InvalidStatus);

        // An inverted range loses to a bad page
        let raw = RawReportQuery::default()
            .with_from("2025-11-05")
            .with_to("2025-01-01")
            .with_page("0");
        assert_eq!(kind_of(raw), QueryErrorKind::InvalidPagination);
    }

    #[test]
    fn test_search_term_trimmed_and_lowercased() {
        let criteria = QueryNormalizer::default()
            .normalize_criteria(&RawReportQuery::default().with_search_term("  Sales "))
            .unwrap();
        assert_eq!(criteria.search_term(), Some("sales"));
    }

    #[test]
    fn test_parse_id() {
        let normalizer = QueryNormalizer::default();
        assert_eq!(normalizer.parse_id("1").unwrap(), 1);
        assert_eq!(normalizer.parse_id(" 42 ").unwrap(), 42);
        for bad in ["abc", "0", "-1", "1.5", ""] {
            assert_eq!(normalizer.parse_id(bad).unwrap_err().kind(), QueryErrorKind::InvalidId, "{bad}");
        }
    }

    #[test]
    fn test_raw_query_deserializes_aliases() {
        let raw: RawReportQuery = serde_json::from_value(serde_json::json!({
            "search_term": "ops",
            "page_size": "5"
        }))
        .unwrap();
        assert_eq!(raw.search_term.as_deref(), Some("ops"));
        assert_eq!(raw.page_size.as_deref(), Some("5"));
    }
}
