//! Payload sanitization and validation
//!
//! This module checks candidate menu item payloads before they reach the
//! handlers: free-text fields are sanitized first, then every field rule is
//! evaluated so one response reports the full violation list.

pub mod extractor;
pub mod filters;
pub mod rules;

pub use extractor::ValidDraft;
pub use filters::{escape_markup, sanitize_payload};
pub use rules::{FieldRule, RULES, validate};
