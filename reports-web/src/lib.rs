//! # Reports Web Utilities
//!
//! Reusable middleware and utilities for the reports HTTP API built on Axum:
//! a JSON error type, the response envelope, the report query extractor, and
//! CORS, request-id, pagination-header and error-logging middleware.
//!
//! ## Example
//!
//! ```rust,no_run
//! use axum::{middleware, routing::get, Router};
//! use reports_web::{
//!     extractors::ReportQueryParams,
//!     middleware::{cors_layer, request_id_middleware},
//! };
//!
//! async fn list_reports(ReportQueryParams(_query): ReportQueryParams) -> &'static str {
//!     "reports"
//! }
//!
//! # #[tokio::main]
//! # async fn main() {
//! let app: Router = Router::new()
//!     .route("/reports", get(list_reports))
//!     .layer(middleware::from_fn(request_id_middleware))
//!     .layer(cors_layer());
//!
//! let listener = tokio::net::TcpListener::bind("127.0.0.1:3000").await.unwrap();
//! axum::serve(listener, app).await.unwrap();
//! # }
//! ```

pub mod errors;
pub mod extractors;
pub mod middleware;
pub mod utils;

pub use errors::{WebError, WebResult};
pub use extractors::ReportQueryParams;
pub use middleware::{
    cors_layer, cors_layer_with_config, error_handler_middleware, handle_not_found,
    pagination_response_middleware, request_id_middleware, CorsConfig, RequestId,
    REQUEST_ID_HEADER,
};
pub use utils::ApiResponse;
