use axum::{
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use reports_core::RawReportQuery;

use crate::errors::WebError;

/// Report search parameters taken from the query string
///
/// Values are kept as raw strings; validation and numeric fallbacks belong to
/// the query engine. Only a query string that cannot be decoded at all (for
/// example a repeated parameter) is rejected here.
#[derive(Debug, Clone, Default)]
pub struct ReportQueryParams(pub RawReportQuery);

impl<S> FromRequestParts<S> for ReportQueryParams
where
    S: Send + Sync,
{
    type Rejection = WebError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(raw) = Query::<RawReportQuery>::from_request_parts(parts, state)
            .await
            .map_err(|e| WebError::bad_request(format!("Invalid query string: {}", e.body_text())))?;

        Ok(ReportQueryParams(raw))
    }
}
