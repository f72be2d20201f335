use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

static WHITESPACE_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Keys the API uses for a top-level error message, in order of preference
const MESSAGE_KEYS: [&str; 3] = ["error", "message", "detail"];

/// Pull a user-facing message out of an API error body.
///
/// Understands `{"error": ..}`, `{"message": ..}`, `{"detail": ..}`, field
/// errors like `{"list_id": ["This field is required."]}`, and bare JSON
/// strings. Returns `None` when the body carries nothing usable, so the
/// caller can fall back to its own generic message.
pub fn extract_api_error(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body.trim()).ok()?;

    let message = match &value {
        Value::String(s) => Some(s.clone()),
        Value::Object(map) => MESSAGE_KEYS
            .iter()
            .filter_map(|key| map.get(*key))
            .find_map(first_text)
            .or_else(|| {
                map.iter()
                    .find_map(|(field, v)| first_text(v).map(|text| format!("{}: {}", field, text)))
            }),
        Value::Array(items) => items.iter().find_map(first_text),
        _ => None,
    }?;

    let cleaned = clean_api_message(&message);
    if cleaned.is_empty() {
        None
    } else {
        Some(cleaned)
    }
}

/// Collapse whitespace runs so multi-line server messages fit on one line
pub fn clean_api_message(message: &str) -> String {
    WHITESPACE_PATTERN
        .replace_all(message.trim(), " ")
        .to_string()
}

fn first_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        Value::Array(items) => items.iter().find_map(first_text),
        _ => None,
    }
}
