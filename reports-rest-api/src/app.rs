//! Application configuration and router setup

use axum::{middleware, routing::get, Router};
use reports_web::middleware::{
    cors_layer_with_config, error_handler_middleware, handle_not_found,
    pagination_response_middleware, request_id_middleware, CorsConfig,
};
use tower_http::trace::TraceLayer;

use crate::{context::ReportsContext, handlers};

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Enable CORS middleware
    pub enable_cors: bool,
    /// Enable request ID tracking
    pub enable_request_id: bool,
    /// Enable request tracing
    pub enable_tracing: bool,
    /// API path prefix
    pub api_prefix: String,
    /// Allowed CORS origins; `*` allows any
    pub cors_origins: Vec<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            enable_cors: true,
            enable_request_id: true,
            enable_tracing: true,
            api_prefix: "/api/v1".to_string(),
            cors_origins: vec!["*".to_string()],
        }
    }
}

/// Create the complete REST API application
pub fn create_rest_app(context: ReportsContext, config: AppConfig) -> Router {
    create_rest_app_with_routes(context, config, Router::new())
}

/// Create the REST API application with additional stateless routes.
///
/// `extra` is merged before the middleware stack is applied, so its routes
/// get the same request ids, CORS and tracing as the report endpoints.
pub fn create_rest_app_with_routes(
    context: ReportsContext,
    config: AppConfig,
    extra: Router,
) -> Router {
    let app = Router::new()
        // Health endpoints (no prefix)
        .route("/health", get(handlers::health_check))
        .route("/health/detailed", get(handlers::health_check_detailed));

    // axum refuses to nest at the root
    let prefix = config.api_prefix.trim_end_matches('/');
    let app = if prefix.is_empty() {
        app.merge(create_api_router())
    } else {
        app.nest(prefix, create_api_router())
    };

    let app = app
        .fallback(handle_not_found)
        .with_state(context)
        .merge(extra);

    // later layers wrap earlier ones
    let mut app = app
        .layer(middleware::from_fn(pagination_response_middleware))
        .layer(middleware::from_fn(error_handler_middleware));

    if config.enable_tracing {
        app = app.layer(TraceLayer::new_for_http());
    }

    if config.enable_request_id {
        app = app.layer(middleware::from_fn(request_id_middleware));
    }

    if config.enable_cors {
        app = app.layer(cors_layer_with_config(CorsConfig::with_origins(
            config.cors_origins.clone(),
        )));
    }

    app
}

/// Report routes, mounted under the API prefix
fn create_api_router() -> Router<ReportsContext> {
    Router::new()
        .route("/reports", get(handlers::list_reports))
        .route("/reports/summary", get(handlers::report_summary))
        .route("/reports/{id}", get(handlers::get_report))
}
