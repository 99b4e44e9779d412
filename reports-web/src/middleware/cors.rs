use axum::http::{header, HeaderName, HeaderValue, Method};
use reports_api_types::{TOTAL_COUNT_HEADER, TOTAL_PAGES_HEADER};
use std::time::Duration;
use tower_http::cors::{AllowOrigin, CorsLayer};

/// Lower-case form required by `HeaderName::from_static`
const REQUEST_ID: &str = "x-request-id";

/// The API only serves reads
const ALLOWED_METHODS: [Method; 3] = [Method::GET, Method::HEAD, Method::OPTIONS];

/// Origin policy for browser clients of the reports API
#[derive(Debug, Clone)]
pub struct CorsConfig {
    /// Allowed origins; `*` allows any
    pub allowed_origins: Vec<String>,
    /// How long browsers may cache a preflight answer
    pub max_age: Duration,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self::with_origins(vec![
            "http://localhost:3000".to_string(),
            "http://127.0.0.1:3000".to_string(),
        ])
    }
}

impl CorsConfig {
    pub fn with_origins(allowed_origins: Vec<String>) -> Self {
        Self {
            allowed_origins,
            max_age: Duration::from_secs(3600),
        }
    }

    fn allow_origin(&self) -> AllowOrigin {
        if self.allowed_origins.iter().any(|origin| origin.trim() == "*") {
            tracing::warn!("CORS configured to allow any origin");
            return AllowOrigin::any();
        }

        let origins: Vec<HeaderValue> = self
            .allowed_origins
            .iter()
            .filter_map(|origin| match HeaderValue::from_str(origin.trim()) {
                Ok(value) => Some(value),
                Err(e) => {
                    tracing::error!("Ignoring invalid CORS origin '{}': {}", origin, e);
                    None
                }
            })
            .collect();
        AllowOrigin::list(origins)
    }
}

/// CORS layer for the default local development origins
pub fn cors_layer() -> CorsLayer {
    cors_layer_with_config(CorsConfig::default())
}

/// CORS layer exposing the pagination and correlation headers to scripts
pub fn cors_layer_with_config(config: CorsConfig) -> CorsLayer {
    let request_id = HeaderName::from_static(REQUEST_ID);

    CorsLayer::new()
        .allow_origin(config.allow_origin())
        .allow_methods(ALLOWED_METHODS)
        .allow_headers([header::ACCEPT, header::CONTENT_TYPE, request_id.clone()])
        .expose_headers([
            HeaderName::from_static(TOTAL_COUNT_HEADER),
            HeaderName::from_static(TOTAL_PAGES_HEADER),
            request_id,
        ])
        .max_age(config.max_age)
}
