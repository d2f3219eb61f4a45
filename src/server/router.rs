//! Router assembly for the menu service

use axum::{Router, routing::get};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use super::handlers::{
    AppState, create_item, delete_item, get_item, health_check, landing_page, list_items,
    route_not_found, update_item,
};
use crate::storage::MenuStore;

/// Build the menu CRUD routes:
/// - GET /api/menu - List all menu items
/// - POST /api/menu - Create a menu item
/// - GET /api/menu/{id} - Get a specific menu item by id
/// - PUT /api/menu/{id} - Replace a menu item's fields
/// - DELETE /api/menu/{id} - Delete a menu item
pub fn build_menu_routes(state: AppState) -> Router {
    Router::new()
        .route("/api/menu", get(list_items).post(create_item))
        .route(
            "/api/menu/{id}",
            get(get_item).put(update_item).delete(delete_item),
        )
        .with_state(state)
}

/// Build health check routes
pub fn health_routes() -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/healthz", get(health_check))
}

/// Build the complete application router.
///
/// Merges the landing page, health checks, menu routes and any custom
/// routes, then installs the JSON route-not-found fallback, request
/// tracing and permissive CORS. The fallback also covers method
/// mismatches on known paths, so clients see the same 404 body instead
/// of a bare 405.
pub fn build_app(store: MenuStore, custom_routes: Vec<Router>) -> Router {
    let state = AppState { store };

    let mut app = Router::new()
        .route("/", get(landing_page))
        .merge(health_routes())
        .merge(build_menu_routes(state));

    for custom_router in custom_routes {
        app = app.merge(custom_router);
    }

    app.fallback(route_not_found)
        .method_not_allowed_fallback(route_not_found)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    fn app() -> Router {
        build_app(MenuStore::seeded(), Vec::new())
    }

    async fn status_of(app: Router, method: &str, path: &str) -> StatusCode {
        let request = Request::builder()
            .method(method)
            .uri(path)
            .body(Body::empty())
            .expect("request should build");
        let response = app.oneshot(request).await.expect("router should respond");
        response.status()
    }

    #[tokio::test]
    async fn test_menu_routes_are_registered() {
        assert_eq!(status_of(app(), "GET", "/api/menu").await, StatusCode::OK);
        assert_eq!(status_of(app(), "GET", "/api/menu/1").await, StatusCode::OK);
        assert_eq!(
            status_of(app(), "DELETE", "/api/menu/1").await,
            StatusCode::OK
        );
    }

    #[tokio::test]
    async fn test_root_and_health_routes_are_registered() {
        assert_eq!(status_of(app(), "GET", "/").await, StatusCode::OK);
        assert_eq!(status_of(app(), "GET", "/health").await, StatusCode::OK);
        assert_eq!(status_of(app(), "GET", "/healthz").await, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_unknown_route_falls_back_to_404() {
        assert_eq!(
            status_of(app(), "GET", "/api/orders").await,
            StatusCode::NOT_FOUND
        );
    }

    #[tokio::test]
    async fn test_method_mismatch_is_404_not_405() {
        // PATCH is not registered on the collection route
        assert_eq!(
            status_of(app(), "PATCH", "/api/menu").await,
            StatusCode::NOT_FOUND
        );
    }

    #[tokio::test]
    async fn test_custom_routes_are_merged() {
        let custom = Router::new().route("/custom", get(|| async { "ok" }));
        let app = build_app(MenuStore::seeded(), vec![custom]);
        assert_eq!(status_of(app, "GET", "/custom").await, StatusCode::OK);
    }
}
