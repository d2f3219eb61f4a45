//! Server module for building the menu HTTP service
//!
//! This module provides:
//! - Handlers for the menu CRUD routes, health checks and the fallback
//! - A router assembly that layers tracing and CORS over the routes
//! - A `ServerBuilder` for wiring a store into a servable application

pub mod builder;
pub mod handlers;
pub mod router;

pub use builder::ServerBuilder;
pub use handlers::AppState;
pub use router::{build_app, build_menu_routes};
