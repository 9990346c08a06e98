use serde_json::{Map, Value};

/// Creates a structural deep clone of a JSON value.
///
/// Map key order is preserved. No serialization round trip is involved, so
/// numbers keep their exact representation.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use json_patch_duplex_util::json_clone::clone;
///
/// let original = json!({"foo": [1, 2, 3]});
/// let cloned = clone(&original);
/// assert_eq!(original, cloned);
/// ```
pub fn clone(value: &Value) -> Value {
    match value {
        Value::Null => Value::Null,
        Value::Bool(b) => Value::Bool(*b),
        Value::Number(n) => Value::Number(n.clone()),
        Value::String(s) => Value::String(s.clone()),
        Value::Array(arr) => Value::Array(arr.iter().map(clone).collect()),
        Value::Object(obj) => {
            let mut new_obj = Map::with_capacity(obj.len());
            for (key, val) in obj {
                new_obj.insert(key.clone(), clone(val));
            }
            Value::Object(new_obj)
        }
    }
}
