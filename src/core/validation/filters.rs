//! Free-text sanitization
//!
//! These transforms run on raw payloads before validation, so the length
//! rules see the cleaned value.

use serde_json::Value;

/// Payload fields that carry free-form text and get sanitized in place.
const TEXT_FIELDS: [&str; 2] = ["name", "description"];

/// Escape markup-significant characters so stored text stays inert when
/// rendered into HTML.
pub fn escape_markup(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            '/' => escaped.push_str("&#x2F;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Trim and escape the free-text fields of a payload in place.
///
/// Non-string values pass through untouched; the validator reports them.
pub fn sanitize_payload(payload: &mut Value) {
    if let Value::Object(map) = payload {
        for field in TEXT_FIELDS {
            if let Some(Value::String(text)) = map.get_mut(field) {
                let cleaned = escape_markup(text.trim());
                *text = cleaned;
            }
        }
    }
}
