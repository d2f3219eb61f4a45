//! Axum extractor for validated menu item payloads
//!
//! This module provides the `ValidDraft` extractor that sanitizes and
//! validates request bodies before they reach handlers.

use axum::{
    Json,
    extract::{FromRequest, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::{Value, json};

use crate::core::error::ApiError;
use crate::core::menu::MenuItemDraft;

use super::{sanitize_payload, validate};

/// Axum extractor that yields a sanitized, rule-checked [`MenuItemDraft`].
///
/// The pipeline is parse, sanitize, validate, then deserialize into the
/// typed draft. Running validation inside the extractor guarantees that an
/// invalid update payload is rejected before the handler ever looks up the
/// target id.
///
/// # Usage
///
/// ```rust,ignore
/// pub async fn create_item(
///     State(store): State<MenuStore>,
///     ValidDraft(draft): ValidDraft,
/// ) -> Result<impl IntoResponse, ApiError> {
///     // draft is already sanitized and validated
/// }
/// ```
pub struct ValidDraft(pub MenuItemDraft);

impl<S> FromRequest<S> for ValidDraft
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        // Extract JSON payload
        let Json(mut payload): Json<Value> = match Json::from_request(req, state).await {
            Ok(json) => json,
            Err(e) => {
                return Err((
                    StatusCode::BAD_REQUEST,
                    Json(json!({
                        "error": "Invalid JSON",
                        "details": e.to_string()
                    })),
                )
                    .into_response());
            }
        };

        sanitize_payload(&mut payload);

        if let Err(violations) = validate(&payload) {
            return Err(ApiError::Validation(violations).into_response());
        }

        // Validation pins every field shape the draft needs, so this only
        // fails if the rule table and the draft type drift apart.
        let draft: MenuItemDraft = serde_json::from_value(payload).map_err(|e| {
            ApiError::internal(format!("validated payload failed to deserialize: {e}"))
                .into_response()
        })?;

        Ok(Self(draft))
    }
}
