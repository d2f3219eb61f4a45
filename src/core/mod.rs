//! Core module containing the menu domain model, validation and errors

pub mod error;
pub mod menu;
pub mod validation;

pub use error::{ApiError, FieldViolation, StoreError};
pub use menu::{Category, MenuItem, MenuItemDraft, seed_items};
pub use validation::ValidDraft;
