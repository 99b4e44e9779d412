//! REST API error types and their HTTP mapping

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use reports_core::{QueryError, QueryErrorKind};
use reports_web::WebError;
use serde_json::{json, Map, Value};
use thiserror::Error;

/// REST API specific error type
#[derive(Error, Debug)]
pub enum RestError {
    #[error(transparent)]
    Query(#[from] QueryError),

    #[error(transparent)]
    Web(#[from] WebError),
}

/// Result type for REST operations
pub type RestResult<T> = Result<T, RestError>;

impl RestError {
    /// HTTP status for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            RestError::Query(err) if err.is_validation() => StatusCode::BAD_REQUEST,
            RestError::Query(err) if err.is_not_found() => StatusCode::NOT_FOUND,
            RestError::Query(_) => StatusCode::INTERNAL_SERVER_ERROR,
            RestError::Web(err) => err.status_code(),
        }
    }

    /// Machine-readable error code for the response body
    pub fn error_code(&self) -> &'static str {
        match self {
            RestError::Query(err) => match err.kind() {
                QueryErrorKind::InvalidId => "INVALID_ID",
                QueryErrorKind::NotFound => "NOT_FOUND",
                QueryErrorKind::DataSource => "INTERNAL_ERROR",
                _ => "VALIDATION_ERROR",
            },
            RestError::Web(err) => err.error_code(),
        }
    }

    fn body(&self) -> Value {
        match self {
            RestError::Query(err) if err.kind() == QueryErrorKind::DataSource => json!({
                "error": {
                    "code": self.error_code(),
                    "message": "Internal server error",
                }
            }),
            RestError::Query(err) => {
                let mut error = Map::new();
                error.insert("code".into(), self.error_code().into());
                error.insert("message".into(), err.to_string().into());
                if let Some(field) = err.field() {
                    error.insert("field".into(), field.into());
                }
                if let Some(allowed) = err.allowed_values() {
                    error.insert("allowed".into(), allowed.into());
                }
                json!({ "error": error })
            }
            RestError::Web(err) => json!({
                "error": {
                    "code": err.error_code(),
                    "message": err.public_message(),
                }
            }),
        }
    }
}

impl IntoResponse for RestError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            // the cause is only ever logged, never returned
            tracing::error!(error = %self, "Report request failed");
        }

        (status, Json(self.body())).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reports_core::DataSourceError;

    #[test]
    fn test_status_mapping() {
        let invalid_status = RestError::from(QueryError::InvalidStatus {
            value: "pending".into(),
            allowed: vec!["open".into(), "closed".into(), "all".into()],
        });
        assert_eq!(invalid_status.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(invalid_status.error_code(), "VALIDATION_ERROR");

        let invalid_id = RestError::from(QueryError::InvalidId { value: "abc".into() });
        assert_eq!(invalid_id.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(invalid_id.error_code(), "INVALID_ID");

        let missing = RestError::from(QueryError::NotFound { id: 99 });
        assert_eq!(missing.status_code(), StatusCode::NOT_FOUND);

        let failure = RestError::from(QueryError::from(DataSourceError::connection("down")));
        assert_eq!(failure.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(failure.error_code(), "INTERNAL_ERROR");
    }

    #[test]
    fn test_validation_body_carries_field_and_allowed() {
        let err = RestError::from(QueryError::InvalidStatus {
            value: "pending".into(),
            allowed: vec!["open".into(), "closed".into(), "all".into()],
        });
        let body = err.body();
        assert_eq!(body["error"]["field"], "status");
        assert_eq!(body["error"]["allowed"], json!(["open", "closed", "all"]));
    }

    #[test]
    fn test_data_source_body_hides_cause() {
        let err = RestError::from(QueryError::from(DataSourceError::connection(
            "postgres://admin:secret@db",
        )));
        let body = err.body();
        assert_eq!(body["error"]["message"], "Internal server error");
        assert!(!body.to_string().contains("secret"));
    }
}
