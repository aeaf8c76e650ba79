//! Common types used throughout sidra-extract

// ============================================================================
// Type Aliases
// ============================================================================

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

/// JSON object type
pub type JsonObject = serde_json::Map<String, JsonValue>;

/// Whether a fetched document carries nothing worth extracting
///
/// Null, an empty object, an empty array and an empty string all count as
/// "no data".
pub fn is_empty_document(value: &JsonValue) -> bool {
    match value {
        JsonValue::Null => true,
        JsonValue::Object(obj) => obj.is_empty(),
        JsonValue::Array(arr) => arr.is_empty(),
        JsonValue::String(s) => s.is_empty(),
        _ => false,
    }
}
