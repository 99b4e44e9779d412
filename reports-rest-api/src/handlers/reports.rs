//! Report endpoints

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
    Json,
};
use reports_web::{middleware::add_pagination_headers, ApiResponse, ReportQueryParams};
use tracing::info;

use crate::{context::ReportsContext, errors::RestResult};

/// Search reports with filters and pagination
///
/// Answers `{ data, pagination }`; the totals are repeated in the
/// `x-total-count` and `x-total-pages` headers.
pub async fn list_reports(
    State(ctx): State<ReportsContext>,
    ReportQueryParams(query): ReportQueryParams,
) -> RestResult<Response> {
    info!("Listing reports with query: {:?}", query);

    let result = ctx.service.search(&query).await?;
    let pagination = result.pagination;

    let mut response = Json(result).into_response();
    add_pagination_headers(&mut response, pagination);
    Ok(response)
}

/// Fetch a single report by id
pub async fn get_report(
    State(ctx): State<ReportsContext>,
    Path(id): Path<String>,
) -> RestResult<impl IntoResponse> {
    info!("Getting report: {}", id);

    let report = ctx.service.get_by_id(&id).await?;
    Ok(ApiResponse::new(report))
}

/// Dashboard aggregates over every report matching the filters
pub async fn report_summary(
    State(ctx): State<ReportsContext>,
    ReportQueryParams(query): ReportQueryParams,
) -> RestResult<impl IntoResponse> {
    info!("Summarizing reports with query: {:?}", query);

    let summary = ctx.service.summarize(&query).await?;
    Ok(ApiResponse::new(summary))
}
