//! Server startup and shutdown logic

use anyhow::{Context, Result};
use axum::{routing::get, Router};
use reports_config::DashboardConfig;
use reports_core::QueryNormalizer;
use reports_rest_api::{create_rest_app_with_routes, AppConfig, ReportsContext};
use reports_storage::InMemoryReportStore;
use std::sync::Arc;

/// Server application struct
pub struct Server {
    config: DashboardConfig,
    context: ReportsContext,
}

impl Server {
    /// Create a new server instance
    ///
    /// Initialises logging, then loads the configured fixture or falls back
    /// to the built-in sample dataset.
    pub async fn new(config: DashboardConfig) -> Result<Self> {
        crate::logging::init_logging(&config.logging)?;

        let store = match &config.data.fixture_path {
            Some(path) => InMemoryReportStore::from_file(path)
                .await
                .with_context(|| format!("Failed to load report fixtures from {}", path.display()))?,
            None => {
                tracing::info!("No fixture configured, serving the sample dataset");
                InMemoryReportStore::with_sample_data()
            }
        };

        if store.is_empty() {
            tracing::warn!("Report store is empty; every search will return no data");
        } else {
            tracing::info!(count = store.len(), "Report store ready");
        }

        let normalizer = QueryNormalizer::new(&config.query.categories)
            .with_page_limits(config.query.default_page_size, config.query.max_page_size);
        let context = ReportsContext::from_source(Arc::new(store), normalizer);

        Ok(Self { config, context })
    }

    /// Build the complete application router
    pub fn build_app(&self) -> Router {
        let server = &self.config.server;
        let rest_config = AppConfig {
            api_prefix: server.api_prefix.clone(),
            enable_cors: server.enable_cors,
            enable_request_id: server.enable_request_id,
            enable_tracing: server.enable_tracing,
            cors_origins: server.cors_origins.clone(),
        };

        let api_prefix = server.api_prefix.clone();
        let root = Router::new().route("/", get(move || root_handler(api_prefix.clone())));
        create_rest_app_with_routes(self.context.clone(), rest_config, root)
    }

    /// Start the server and block until a shutdown signal arrives
    pub async fn start(self) -> Result<()> {
        let app = self.build_app();
        let addr = self.config.server.socket_address();

        self.log_config_summary();

        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .with_context(|| format!("Failed to bind {}", addr))?;
        tracing::info!("Server listening on {}", addr);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");
        Ok(())
    }

    fn log_config_summary(&self) {
        let server = &self.config.server;
        let query = &self.config.query;
        tracing::info!(
            bind = %server.socket_address(),
            api_prefix = %server.api_prefix,
            cors = server.enable_cors,
            request_id = server.enable_request_id,
            tracing = server.enable_tracing,
            "Server configuration"
        );
        tracing::info!(
            categories = ?query.categories,
            default_page_size = query.default_page_size,
            max_page_size = query.max_page_size,
            "Query configuration"
        );
    }
}

/// Root handler
async fn root_handler(api_prefix: String) -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({
        "service": "Reports Dashboard",
        "version": env!("CARGO_PKG_VERSION"),
        "status": "running",
        "endpoints": {
            "reports": format!("{}/reports", api_prefix),
            "summary": format!("{}/reports/summary", api_prefix),
            "health": "/health"
        }
    }))
}

/// Graceful shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown...");
}
