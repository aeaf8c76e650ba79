//! Extraction module
//!
//! Walks a parsed JSON document along a fixed sequence of object keys.
//!
//! # Overview
//!
//! - `ExtractionPath` - non-empty ordered list of keys
//! - `extract` - resolves a path against a document, yielding `None` when
//!   any step is missing or lands on something other than an object

mod path;

pub use path::ExtractionPath;

use crate::types::JsonValue;

/// Resolve `path` against `root`
///
/// Every intermediate value must be a JSON object containing the next key.
/// A missing key or a non-object along the way yields `None`; this is an
/// expected outcome, not an error. The final value may be of any kind.
pub fn extract<'a>(root: &'a JsonValue, path: &ExtractionPath) -> Option<&'a JsonValue> {
    let mut current = root;
    for key in path.keys() {
        current = current.as_object()?.get(key)?;
    }
    Some(current)
}
