//! Menu HTTP handlers

use axum::{
    extract::{Path, State},
    http::{StatusCode, Uri},
    response::{Html, IntoResponse, Json},
};
use serde_json::{Value, json};

use crate::core::error::ApiError;
use crate::core::menu::MenuItem;
use crate::core::validation::ValidDraft;
use crate::storage::MenuStore;

/// Menu-specific AppState
#[derive(Clone)]
pub struct AppState {
    pub store: MenuStore,
}

/// Parse an id path segment.
///
/// Malformed segments collapse to 0, which no stored item carries, so they
/// surface as NotFound rather than a separate bad-request error. Existing
/// clients depend on that shape.
fn parse_id(raw: &str) -> u64 {
    raw.parse().unwrap_or(0)
}

pub async fn list_items(State(state): State<AppState>) -> Result<Json<Vec<MenuItem>>, ApiError> {
    Ok(Json(state.store.list()?))
}

pub async fn get_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MenuItem>, ApiError> {
    Ok(Json(state.store.get(parse_id(&id))?))
}

pub async fn create_item(
    State(state): State<AppState>,
    ValidDraft(draft): ValidDraft,
) -> Result<impl IntoResponse, ApiError> {
    let item = state.store.create(draft)?;
    tracing::info!(id = item.id, name = %item.name, "menu item created");
    Ok((StatusCode::CREATED, Json(item)))
}

pub async fn update_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
    // ValidDraft consumes the body and rejects invalid payloads before the
    // handler runs, so a bad payload beats a missing id
    ValidDraft(draft): ValidDraft,
) -> Result<Json<MenuItem>, ApiError> {
    let item = state.store.update(parse_id(&id), draft)?;
    tracing::info!(id = item.id, "menu item updated");
    Ok(Json(item))
}

pub async fn delete_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let id = parse_id(&id);
    state.store.delete(id)?;
    tracing::info!(id, "menu item deleted");
    Ok(Json(json!({ "message": "Successfully deleted" })))
}

/// Landing page pointing at the API root
pub async fn landing_page() -> Html<&'static str> {
    Html(concat!(
        "<!DOCTYPE html>",
        "<html><head><title>Carte</title></head>",
        "<body><h1>Carte</h1>",
        "<p>The menu API is served under <code>/api/menu</code>.</p>",
        "</body></html>"
    ))
}

/// Health check endpoint handler
pub async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "carte"
    }))
}

/// Fallback for unmatched routes and method mismatches
pub async fn route_not_found(uri: Uri) -> (StatusCode, Json<Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "error": "Route not found",
            "path": uri.path()
        })),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_id_accepts_plain_integers() {
        assert_eq!(parse_id("7"), 7);
        assert_eq!(parse_id("1"), 1);
    }

    #[test]
    fn test_parse_id_collapses_garbage_to_zero() {
        assert_eq!(parse_id("abc"), 0);
        assert_eq!(parse_id("3.5"), 0);
        assert_eq!(parse_id("-2"), 0);
        assert_eq!(parse_id(""), 0);
        assert_eq!(parse_id("7seven"), 0);
    }

    #[tokio::test]
    async fn test_health_check_names_the_service() {
        let Json(body) = health_check().await;
        assert_eq!(body["status"], "ok");
        assert_eq!(body["service"], "carte");
    }

    #[tokio::test]
    async fn test_route_not_found_echoes_path() {
        let uri: Uri = "/api/unknown".parse().expect("uri should parse");
        let (status, Json(body)) = route_not_found(uri).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Route not found");
        assert_eq!(body["path"], "/api/unknown");
    }
}
