use serde_json::Value;

use crate::resolve::resolve;

/// Get a value from a JSON document by pointer.
///
/// Returns `None` if the pointer is malformed or nothing is stored there.
pub fn get<'a>(doc: &'a Value, pointer: &str) -> Option<&'a Value> {
    resolve(doc, pointer).ok()?.into_value()
}
