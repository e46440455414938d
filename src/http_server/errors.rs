//! # HTTP Error Mapping
//!
//! Maps catalog errors onto status codes and the structured error body.
//! Every failure yields `{"error": <message>, "code": <status>}`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use tracing::error;

use crate::catalog::CatalogError;

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl From<&CatalogError> for ErrorResponse {
    fn from(err: &CatalogError) -> Self {
        Self {
            code: err.status_code(),
            error: err.to_string(),
        }
    }
}

impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        // Store failures are fatal to the request; surface them as explicit
        // 500s and log the cause.
        if let CatalogError::Store(ref store_err) = self {
            error!(error = %store_err, "store failure");
        }

        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(ErrorResponse::from(&self))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_body_carries_message_and_code() {
        let body = ErrorResponse::from(&CatalogError::NotFound("b1".to_string()));
        assert_eq!(body.code, 404);
        assert!(body.error.contains("b1"));
    }

    #[test]
    fn test_into_response_status() {
        let response = CatalogError::EmptyCatalog.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = CatalogError::MissingField("title").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
