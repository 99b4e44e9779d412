//! # Reports REST API
//!
//! HTTP endpoints over the report query engine: search with filters and
//! pagination, single-report lookup, the dashboard summary and health checks.
//! Handlers receive the query service through [`ReportsContext`], so tests
//! can swap the data source for a mock.
//!
//! ## Example
//!
//! ```rust,no_run
//! use reports_core::{QueryNormalizer, ReportSource};
//! use reports_rest_api::{create_rest_app, AppConfig, ReportsContext};
//! use std::sync::Arc;
//!
//! # async fn example(source: Arc<dyn ReportSource>) -> Result<(), Box<dyn std::error::Error>> {
//! let context = ReportsContext::from_source(source, QueryNormalizer::default());
//! let app = create_rest_app(context, AppConfig::default());
//!
//! let listener = tokio::net::TcpListener::bind("127.0.0.1:3000").await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```

pub mod app;
pub mod context;
pub mod errors;
pub mod handlers;
pub mod models;

pub use app::{create_rest_app, create_rest_app_with_routes, AppConfig};
pub use context::ReportsContext;
pub use errors::{RestError, RestResult};
