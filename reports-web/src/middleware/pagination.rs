use axum::{
    http::{HeaderName, HeaderValue, Request},
    middleware::Next,
    response::Response,
};
use reports_api_types::PaginationMeta;

/// Copy pagination metadata stored by a handler into response headers
pub async fn pagination_response_middleware(
    request: Request<axum::body::Body>,
    next: Next,
) -> Response {
    let mut response = next.run(request).await;

    if let Some(meta) = response.extensions().get::<PaginationMeta>().copied() {
        let headers = response.headers_mut();
        for (key, value) in meta.to_headers() {
            if let (Ok(name), Ok(value)) = (
                HeaderName::from_bytes(key.as_bytes()),
                HeaderValue::from_str(&value),
            ) {
                headers.insert(name, value);
            }
        }
    }

    response
}

/// Attach pagination metadata for [`pagination_response_middleware`]
pub fn add_pagination_headers(response: &mut Response, meta: PaginationMeta) {
    response.extensions_mut().insert(meta);
}
