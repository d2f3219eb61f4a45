//! Field rules for menu item payloads
//!
//! The rules form a static table evaluated exhaustively on every candidate
//! payload, so a single response reports every violation at once. Create and
//! update share the same table.

use serde_json::Value;

use crate::core::error::FieldViolation;
use crate::core::menu::Category;

/// A single field rule: the field it guards, the predicate that must hold
/// over the raw (possibly absent) value, and the message reported when it
/// does not.
pub struct FieldRule {
    pub field: &'static str,
    pub check: fn(Option<&Value>) -> bool,
    pub message: &'static str,
}

/// Every field rule, in reporting order. Predicates see the payload after
/// sanitization, so length checks count the cleaned text.
pub const RULES: [FieldRule; 6] = [
    FieldRule {
        field: "name",
        check: name_is_long_enough,
        message: "Name must be at least 3 characters long",
    },
    FieldRule {
        field: "description",
        check: description_is_long_enough,
        message: "Description must be at least 10 characters long",
    },
    FieldRule {
        field: "price",
        check: price_is_positive,
        message: "Price must be a number greater than 0",
    },
    FieldRule {
        field: "category",
        check: category_is_known,
        message: "Category must be one of: appetizer, entree, dessert, beverage",
    },
    FieldRule {
        field: "ingredients",
        check: ingredients_are_listed,
        message: "Ingredients must be a non-empty array of strings",
    },
    FieldRule {
        field: "available",
        check: available_is_boolean,
        message: "Available must be a boolean",
    },
];

/// Evaluate every rule against the payload.
///
/// Returns the complete violation list rather than stopping at the first
/// failure. `Value::get` yields `None` for missing fields and for non-object
/// payloads, so both fall through to the per-field predicates.
pub fn validate(payload: &Value) -> Result<(), Vec<FieldViolation>> {
    let violations: Vec<FieldViolation> = RULES
        .iter()
        .filter(|rule| !(rule.check)(payload.get(rule.field)))
        .map(|rule| FieldViolation::new(rule.field, rule.message))
        .collect();

    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

fn text_at_least(value: Option<&Value>, min_chars: usize) -> bool {
    value
        .and_then(Value::as_str)
        .is_some_and(|text| text.chars().count() >= min_chars)
}

fn name_is_long_enough(value: Option<&Value>) -> bool {
    text_at_least(value, 3)
}

fn description_is_long_enough(value: Option<&Value>) -> bool {
    text_at_least(value, 10)
}

fn price_is_positive(value: Option<&Value>) -> bool {
    value.and_then(Value::as_f64).is_some_and(|price| price > 0.0)
}

fn category_is_known(value: Option<&Value>) -> bool {
    value
        .and_then(Value::as_str)
        .is_some_and(|label| Category::LABELS.contains(&label))
}

fn ingredients_are_listed(value: Option<&Value>) -> bool {
    value
        .and_then(Value::as_array)
        .is_some_and(|items| !items.is_empty() && items.iter().all(Value::is_string))
}

fn available_is_boolean(value: Option<&Value>) -> bool {
    // absent is fine; anything present must be a real boolean
    value.is_none_or(Value::is_boolean)
}
