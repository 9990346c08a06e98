//! JSON codec for JSON Patch operations.
//!
//! Converts operations to/from `serde_json::Value` in the RFC 6902 wire
//! format: `{"op": "...", "path": "...", "value"?: any, "from"?: "..."}`.
//!
//! Decoding does not check for missing `value`/`from`; the applier reports
//! those as structural errors.

use serde_json::{json, Map, Value};

use crate::json_patch::types::{OpKind, Operation, PatchError, PatchErrorKind};

fn decode_kind(map: &Map<String, Value>) -> Result<OpKind, PatchErrorKind> {
    match map.get("op") {
        Some(Value::String(s)) => s.parse(),
        Some(other) => Err(PatchErrorKind::OpInvalid(other.to_string())),
        None => Err(PatchErrorKind::OpInvalid(String::new())),
    }
}

fn decode_op(v: &Value) -> Result<Operation, PatchErrorKind> {
    let map = v.as_object().ok_or(PatchErrorKind::NotAnObject)?;
    let op = decode_kind(map)?;
    let path = map
        .get("path")
        .and_then(Value::as_str)
        .ok_or(PatchErrorKind::PathInvalid)?
        .to_string();
    let from = match map.get("from") {
        None => None,
        Some(Value::String(s)) => Some(s.clone()),
        Some(_) => return Err(PatchErrorKind::FromRequired),
    };
    Ok(Operation {
        op,
        path,
        value: map.get("value").cloned(),
        from,
    })
}

/// Deserialize a single operation.
pub fn from_json(v: &Value) -> Result<Operation, PatchError> {
    decode_op(v).map_err(|kind| PatchError::new(kind, 0, v.clone()))
}

/// Deserialize a patch sequence.
///
/// Errors carry the index of the operation that failed to decode.
pub fn from_json_patch(v: &Value) -> Result<Vec<Operation>, PatchError> {
    let arr = v
        .as_array()
        .ok_or_else(|| PatchError::new(PatchErrorKind::SequenceNotAnArray, 0, v.clone()))?;
    arr.iter()
        .enumerate()
        .map(|(index, op)| decode_op(op).map_err(|kind| PatchError::new(kind, index, op.clone())))
        .collect()
}

/// Serialize an operation. Absent `value`/`from` are omitted.
pub fn to_json(op: &Operation) -> Value {
    let mut m = Map::new();
    m.insert("op".into(), json!(op.op.as_str()));
    m.insert("path".into(), json!(op.path));
    if let Some(from) = &op.from {
        m.insert("from".into(), json!(from));
    }
    if let Some(value) = &op.value {
        m.insert("value".into(), value.clone());
    }
    Value::Object(m)
}

/// Serialize a patch sequence.
pub fn to_json_patch(ops: &[Operation]) -> Value {
    Value::Array(ops.iter().map(to_json).collect())
}

impl Operation {
    pub fn from_json(v: &Value) -> Result<Self, PatchError> {
        from_json(v)
    }

    pub fn to_json(&self) -> Value {
        to_json(self)
    }
}
