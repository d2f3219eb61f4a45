//! # Carte
//!
//! A small HTTP service exposing a restaurant menu as a JSON CRUD API.
//!
//! ## Features
//!
//! - **Menu CRUD**: List, fetch, create, replace and delete menu items under `/api/menu`
//! - **Exhaustive Validation**: Every field rule is evaluated per request, so one
//!   response reports the complete violation list
//! - **Sanitized Text**: Free-text fields are trimmed and markup-escaped before storage
//! - **In-Memory Store**: Thread-safe seeded store; a restart returns to the seed data
//! - **Stable Error Bodies**: Pinned JSON shapes for validation, not-found and fault responses
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use carte::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     ServerBuilder::new()
//!         .with_store(MenuStore::seeded())
//!         .serve("0.0.0.0:3000")
//!         .await
//! }
//! ```

pub mod config;
pub mod core;
pub mod server;
pub mod storage;

/// Re-exports of commonly used types
pub mod prelude {
    // === Core ===
    pub use crate::core::{
        error::{ApiError, FieldViolation, StoreError},
        menu::{Category, MenuItem, MenuItemDraft, seed_items},
        validation::ValidDraft,
    };

    // === Storage ===
    pub use crate::storage::MenuStore;

    // === Config ===
    pub use crate::config::{ServiceConfig, log_filter};

    // === Server ===
    pub use crate::server::{AppState, ServerBuilder, build_app};

    // === External dependencies ===
    pub use anyhow::Result;
    pub use serde::{Deserialize, Serialize};

    // === Axum ===
    pub use axum::{
        Router,
        extract::{Path, State},
        routing::{delete, get, post, put},
    };
}
