//! Typed error handling for the menu service
//!
//! Three outcomes cover every failure the API can produce:
//!
//! - [`ApiError::Validation`]: the payload violated one or more field rules;
//!   the caller corrects the input.
//! - [`ApiError::NotFound`]: the referenced id does not exist; retrying
//!   without changing the id cannot succeed.
//! - [`ApiError::Internal`]: an unanticipated condition. The detail is
//!   logged for operators and never echoed to the caller.
//!
//! Handlers return `Result<_, ApiError>` and propagate with `?`;
//! `IntoResponse` turns each variant into its wire body, so the translation
//! from taxonomy to status code lives in exactly one place.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use serde_json::json;
use thiserror::Error;

/// A single (field name, human-readable message) pair describing why a
/// payload failed validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    pub field: String,
    pub message: String,
}

impl FieldViolation {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

// =============================================================================
// API errors
// =============================================================================

/// The error type handlers answer with.
#[derive(Debug, Error)]
pub enum ApiError {
    /// One or more field rules were violated. Carries every violation found,
    /// not just the first.
    #[error("validation failed for {} field(s)", .0.len())]
    Validation(Vec<FieldViolation>),

    /// The requested menu item does not exist.
    #[error("menu item not found")]
    NotFound,

    /// Unanticipated failure. The detail stays server-side.
    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn internal(detail: impl Into<String>) -> Self {
        ApiError::Internal(detail.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = match &self {
            ApiError::Validation(errors) => json!({
                "status": "Validation Error",
                "errors": errors,
            }),
            ApiError::NotFound => json!({ "error": "Menu item not found" }),
            ApiError::Internal(detail) => {
                tracing::error!(%detail, "request failed with internal error");
                json!({ "error": "Internal Server Error" })
            }
        };
        (status, Json(body)).into_response()
    }
}

// =============================================================================
// Store errors
// =============================================================================

/// Errors signalled by [`MenuStore`](crate::storage::MenuStore) operations.
///
/// Store failures stay transport-agnostic; the `From` conversion below maps
/// them onto the API taxonomy at the handler boundary.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No item carries the given id.
    #[error("menu item {0} not found")]
    NotFound(u64),

    /// The lock guarding the backing sequence was poisoned by a panicking
    /// writer.
    #[error("menu store lock poisoned: {0}")]
    Poisoned(String),
}

impl StoreError {
    /// Build a `Poisoned` error from a failed lock acquisition.
    pub fn poisoned<T>(err: std::sync::PoisonError<T>) -> Self {
        StoreError::Poisoned(err.to_string())
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(_) => ApiError::NotFound,
            StoreError::Poisoned(detail) => ApiError::Internal(detail),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_returns_400() {
        let err = ApiError::Validation(vec![FieldViolation::new("price", "must be positive")]);
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_not_found_returns_404() {
        assert_eq!(ApiError::NotFound.status_code(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_internal_returns_500() {
        assert_eq!(
            ApiError::internal("lock poisoned").status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_validation_display_counts_fields() {
        let err = ApiError::Validation(vec![
            FieldViolation::new("name", "too short"),
            FieldViolation::new("price", "must be positive"),
        ]);
        assert!(err.to_string().contains("2 field(s)"));
    }

    #[test]
    fn test_store_not_found_maps_to_api_not_found() {
        let api: ApiError = StoreError::NotFound(42).into();
        assert!(matches!(api, ApiError::NotFound));
    }

    #[test]
    fn test_store_poisoned_maps_to_internal() {
        let api: ApiError = StoreError::Poisoned("writer panicked".to_string()).into();
        assert!(matches!(api, ApiError::Internal(_)));
        assert_eq!(api.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_field_violation_serializes_field_and_message() {
        let violation = FieldViolation::new("name", "name must be a string");
        let value = serde_json::to_value(&violation).expect("should serialize");
        assert_eq!(value["field"], "name");
        assert_eq!(value["message"], "name must be a string");
    }

    #[tokio::test]
    async fn test_not_found_response_body() {
        let response = ApiError::NotFound.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body should be readable");
        let body: serde_json::Value = serde_json::from_slice(&bytes).expect("body should be JSON");
        assert_eq!(body, json!({ "error": "Menu item not found" }));
    }

    #[tokio::test]
    async fn test_validation_response_body_lists_every_violation() {
        let response = ApiError::Validation(vec![
            FieldViolation::new("name", "too short"),
            FieldViolation::new("price", "must be positive"),
        ])
        .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body should be readable");
        let body: serde_json::Value = serde_json::from_slice(&bytes).expect("body should be JSON");
        assert_eq!(body["status"], "Validation Error");
        assert_eq!(body["errors"].as_array().map(Vec::len), Some(2));
        assert_eq!(body["errors"][0]["field"], "name");
        assert_eq!(body["errors"][1]["field"], "price");
    }

    #[tokio::test]
    async fn test_internal_response_body_hides_detail() {
        let response = ApiError::internal("RwLock poisoned at memory.rs").into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body should be readable");
        let body: serde_json::Value = serde_json::from_slice(&bytes).expect("body should be JSON");
        assert_eq!(body, json!({ "error": "Internal Server Error" }));
    }
}
