use axum::{
    http::Request,
    middleware::Next,
    response::{IntoResponse, Response},
};
use tracing::{error, warn};

use crate::errors::WebError;

/// Log every error response leaving the service
pub async fn error_handler_middleware(request: Request<axum::body::Body>, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let response = next.run(request).await;

    let status = response.status();
    if status.is_server_error() {
        error!(%method, %uri, status = status.as_u16(), "Request failed");
    } else if status.is_client_error() {
        warn!(%method, %uri, status = status.as_u16(), "Request rejected");
    }

    response
}

/// Fallback for unknown routes
pub async fn handle_not_found() -> impl IntoResponse {
    WebError::not_found("The requested resource was not found")
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::StatusCode, middleware, routing::get, Router};
    use tower::ServiceExt;

    async fn failing_handler() -> Result<&'static str, WebError> {
        Err(WebError::internal("disk on fire"))
    }

    #[tokio::test]
    async fn test_internal_error_body_is_generic() {
        let app = Router::new()
            .route("/error", get(failing_handler))
            .layer(middleware::from_fn(error_handler_middleware));

        let request = Request::builder().uri("/error").body(Body::empty()).unwrap();
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"]["code"], "INTERNAL_ERROR");
        assert_eq!(json["error"]["message"], "Internal server error");
    }

    #[tokio::test]
    async fn test_fallback_returns_json_not_found() {
        let app = Router::new().fallback(handle_not_found);

        let request = Request::builder().uri("/missing").body(Body::empty()).unwrap();
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
