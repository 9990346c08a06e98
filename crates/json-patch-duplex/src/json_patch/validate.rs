//! JSON Patch operation validator.
//!
//! Validates raw JSON Patch operations (as `serde_json::Value` maps) before
//! decoding, so callers can check untrusted input early. Given a document,
//! the sequence is also probed against a private copy of it.
//!
//! Validation never fails: problems are returned as data.

use json_patch_duplex_pointer::{get, validate_json_pointer};
use json_patch_duplex_util::clone;
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use super::apply::apply_op;
use super::codec::json::from_json;
use super::types::{OpKind, PatchErrorKind};

// ── Error ──────────────────────────────────────────────────────────────────

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    #[error("Patch sequence must be an array")]
    SequenceNotAnArray,
    #[error("Operation is not an object")]
    NotAnObject,
    #[error("Operation `op` property is not one of operations defined in RFC-6902")]
    OpInvalid,
    #[error("Operation `path` property is not a string")]
    PathInvalid,
    #[error("Operation `from` property is not present (applicable in `move` and `copy` operations)")]
    FromRequired,
    #[error("Operation `value` property is not present (applicable in `add`, `replace` and `test` operations)")]
    ValueRequired,
    #[error("Cannot perform an `add` operation at a path that already exists")]
    PathAlreadyExists,
    #[error("Cannot perform the operation at a path that does not exist")]
    PathUnresolvable,
    #[error("Expected an unsigned base-10 integer value, making the new referenced value the array element with the zero-based index")]
    IllegalArrayIndex,
    #[error("The specified index MUST NOT be greater than the number of elements in the array")]
    ValueOutOfBounds,
}

impl ValidationErrorKind {
    pub fn name(&self) -> &'static str {
        match self {
            ValidationErrorKind::SequenceNotAnArray => "SEQUENCE_NOT_AN_ARRAY",
            ValidationErrorKind::NotAnObject => "OPERATION_NOT_AN_OBJECT",
            ValidationErrorKind::OpInvalid => "OPERATION_OP_INVALID",
            ValidationErrorKind::PathInvalid => "OPERATION_PATH_INVALID",
            ValidationErrorKind::FromRequired => "OPERATION_FROM_REQUIRED",
            ValidationErrorKind::ValueRequired => "OPERATION_VALUE_REQUIRED",
            ValidationErrorKind::PathAlreadyExists => "OPERATION_PATH_ALREADY_EXISTS",
            ValidationErrorKind::PathUnresolvable => "OPERATION_PATH_UNRESOLVABLE",
            ValidationErrorKind::IllegalArrayIndex => "OPERATION_PATH_ILLEGAL_ARRAY_INDEX",
            ValidationErrorKind::ValueOutOfBounds => "OPERATION_VALUE_OUT_OF_BOUNDS",
        }
    }
}

impl From<&PatchErrorKind> for ValidationErrorKind {
    fn from(kind: &PatchErrorKind) -> Self {
        match kind {
            PatchErrorKind::ValueRequired => ValidationErrorKind::ValueRequired,
            PatchErrorKind::FromRequired => ValidationErrorKind::FromRequired,
            PatchErrorKind::OpInvalid(_) => ValidationErrorKind::OpInvalid,
            PatchErrorKind::NotAnObject => ValidationErrorKind::NotAnObject,
            PatchErrorKind::SequenceNotAnArray => ValidationErrorKind::SequenceNotAnArray,
            PatchErrorKind::PathInvalid => ValidationErrorKind::PathInvalid,
            PatchErrorKind::IllegalArrayIndex(_) => ValidationErrorKind::IllegalArrayIndex,
            PatchErrorKind::PathUnresolvable | PatchErrorKind::FromUnresolvable => {
                ValidationErrorKind::PathUnresolvable
            }
            PatchErrorKind::IndexOutOfBounds { .. } => ValidationErrorKind::ValueOutOfBounds,
        }
    }
}

/// A problem found in a patch operation.
#[derive(Debug, Error, Clone, PartialEq)]
#[error("{kind}")]
pub struct ValidationError {
    pub kind: ValidationErrorKind,
    /// The offending operation in raw form; `None` for sequence-level errors.
    pub operation: Option<Value>,
    /// The document the operation was checked against, if any.
    pub document: Option<Value>,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, operation: &Value, document: Option<&Value>) -> Self {
        Self {
            kind,
            operation: Some(operation.clone()),
            document: document.cloned(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    pub fn message(&self) -> String {
        self.kind.to_string()
    }
}

// ── Public API ─────────────────────────────────────────────────────────────

/// Validate a single raw operation.
///
/// `old_value` is the value currently at the operation's path in `document`;
/// it only matters when a document is given. The first failing check wins.
pub fn validator(
    operation: &Value,
    document: Option<&Value>,
    old_value: Option<&Value>,
) -> Option<ValidationError> {
    check(operation, document, old_value)
        .err()
        .map(|kind| ValidationError::new(kind, operation, document))
}

fn check(
    operation: &Value,
    document: Option<&Value>,
    old_value: Option<&Value>,
) -> Result<(), ValidationErrorKind> {
    let map = operation
        .as_object()
        .ok_or(ValidationErrorKind::NotAnObject)?;
    let op: OpKind = map
        .get("op")
        .and_then(Value::as_str)
        .and_then(|s| s.parse().ok())
        .ok_or(ValidationErrorKind::OpInvalid)?;
    let path_ok = map
        .get("path")
        .and_then(Value::as_str)
        .is_some_and(|path| validate_json_pointer(path).is_ok());
    if !path_ok {
        return Err(ValidationErrorKind::PathInvalid);
    }
    if op.requires_from() && !map.get("from").is_some_and(Value::is_string) {
        return Err(ValidationErrorKind::FromRequired);
    }
    if op.requires_value() && !map.contains_key("value") {
        return Err(ValidationErrorKind::ValueRequired);
    }
    if document.is_some() {
        match (old_value, op) {
            (Some(_), OpKind::Add) => return Err(ValidationErrorKind::PathAlreadyExists),
            (None, kind) if kind != OpKind::Add => {
                return Err(ValidationErrorKind::PathUnresolvable)
            }
            _ => {}
        }
    }
    Ok(())
}

/// Validate a raw patch sequence, optionally against `document`.
///
/// Returns one slot per operation up to the last error found: `None` where
/// the operation is valid. An all-valid sequence yields an empty vector.
/// Valid operations are applied to a private copy of `document` so later
/// operations are checked against the evolving state; `document` itself is
/// never touched.
pub fn validate(
    sequence: &Value,
    document: Option<&Value>,
    stop_after_first_error: bool,
) -> Vec<Option<ValidationError>> {
    let Some(ops) = sequence.as_array() else {
        return vec![Some(ValidationError {
            kind: ValidationErrorKind::SequenceNotAnArray,
            operation: None,
            document: None,
        })];
    };

    let mut probe = document.map(clone);
    let mut errors: Vec<Option<ValidationError>> = Vec::new();
    for (index, operation) in ops.iter().enumerate() {
        let error = match probe.as_mut() {
            None => validator(operation, None, None),
            Some(doc) => {
                let current: &Value = doc;
                let old_value = operation
                    .get("path")
                    .and_then(Value::as_str)
                    .and_then(|path| get(current, path));
                validator(operation, Some(current), old_value)
                    .or_else(|| probe_apply(doc, operation))
            }
        };
        let Some(error) = error else { continue };
        debug!(index, name = error.name(), "invalid patch operation");
        errors.resize(index, None);
        errors.push(Some(error));
        if stop_after_first_error {
            break;
        }
    }
    errors
}

/// Apply an operation that passed [`validator`] to the probe document.
///
/// The operation runs on a scratch copy; the probe only takes the result
/// when the whole operation succeeded.
fn probe_apply(doc: &mut Value, operation: &Value) -> Option<ValidationError> {
    let mut scratch = clone(doc);
    let outcome = from_json(operation)
        .map_err(|err| err.kind)
        .and_then(|op| apply_op(&mut scratch, &op));
    match outcome {
        Ok(_) => {
            *doc = scratch;
            None
        }
        Err(kind) => Some(ValidationError::new(
            ValidationErrorKind::from(&kind),
            operation,
            Some(&*doc),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn name_of(operation: Value, document: Option<&Value>, old: Option<&Value>) -> Option<&'static str> {
        validator(&operation, document, old).map(|e| e.name())
    }

    #[test]
    fn validator_check_order() {
        assert_eq!(name_of(json!([]), None, None), Some("OPERATION_NOT_AN_OBJECT"));
        assert_eq!(name_of(json!(null), None, None), Some("OPERATION_NOT_AN_OBJECT"));
        assert_eq!(
            name_of(json!({"op": "bogus", "path": 1}), None, None),
            Some("OPERATION_OP_INVALID")
        );
        assert_eq!(
            name_of(json!({"op": "_get", "path": ""}), None, None),
            Some("OPERATION_OP_INVALID")
        );
        assert_eq!(
            name_of(json!({"op": "add", "path": 1}), None, None),
            Some("OPERATION_PATH_INVALID")
        );
        assert_eq!(
            name_of(json!({"op": "copy", "path": "/a"}), None, None),
            Some("OPERATION_FROM_REQUIRED")
        );
        assert_eq!(
            name_of(json!({"op": "test", "path": "/a"}), None, None),
            Some("OPERATION_VALUE_REQUIRED")
        );
        assert_eq!(name_of(json!({"op": "remove", "path": "/a"}), None, None), None);
    }

    #[test]
    fn null_value_is_present() {
        assert_eq!(
            name_of(json!({"op": "add", "path": "/a", "value": null}), None, None),
            None
        );
    }

    #[test]
    fn document_checks() {
        let doc = json!({"a": 1});
        assert_eq!(
            name_of(json!({"op": "add", "path": "/a", "value": 2}), Some(&doc), Some(&json!(1))),
            Some("OPERATION_PATH_ALREADY_EXISTS")
        );
        assert_eq!(
            name_of(json!({"op": "replace", "path": "/b", "value": 2}), Some(&doc), None),
            Some("OPERATION_PATH_UNRESOLVABLE")
        );
        assert_eq!(
            name_of(json!({"op": "add", "path": "/b", "value": 2}), Some(&doc), None),
            None
        );
    }

    #[test]
    fn error_carries_context() {
        let doc = json!({"a": 1});
        let op = json!({"op": "remove", "path": "/b"});
        let err = validator(&op, Some(&doc), None).unwrap();
        assert_eq!(err.operation, Some(op));
        assert_eq!(err.document, Some(doc));
        assert_eq!(
            err.message(),
            "Cannot perform the operation at a path that does not exist"
        );
    }

    #[test]
    fn sequence_must_be_array() {
        let errors = validate(&json!({"op": "add"}), None, false);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].as_ref().unwrap().name(), "SEQUENCE_NOT_AN_ARRAY");
    }

    #[test]
    fn valid_sequence_is_empty() {
        let doc = json!({"a": [1, 2]});
        let errors = validate(
            &json!([
                {"op": "add", "path": "/a/-", "value": 3},
                {"op": "test", "path": "/a/2", "value": 3},
                {"op": "remove", "path": "/a/0"},
            ]),
            Some(&doc),
            false,
        );
        assert!(errors.is_empty());
        assert_eq!(doc, json!({"a": [1, 2]}));
    }

    #[test]
    fn errors_are_sparse() {
        let errors = validate(
            &json!([
                {"op": "add", "path": "/a", "value": 1},
                {"op": "bogus", "path": "/a"},
                {"op": "add", "path": "/b", "value": 1},
                {"path": "/a"},
                {"op": "remove", "path": "/a"},
            ]),
            None,
            false,
        );
        assert_eq!(errors.len(), 4);
        assert!(errors[0].is_none());
        assert_eq!(errors[1].as_ref().unwrap().name(), "OPERATION_OP_INVALID");
        assert!(errors[2].is_none());
        assert_eq!(errors[3].as_ref().unwrap().name(), "OPERATION_OP_INVALID");
    }

    #[test]
    fn stop_after_first_error() {
        let seq = json!([{"op": "bogus"}, {"op": "bogus"}]);
        assert_eq!(validate(&seq, None, true).len(), 1);
        assert_eq!(validate(&seq, None, false).len(), 2);
    }

    #[test]
    fn probe_tracks_earlier_operations() {
        let doc = json!({});
        let errors = validate(
            &json!([
                {"op": "add", "path": "/a", "value": 1},
                {"op": "add", "path": "/a", "value": 2},
            ]),
            Some(&doc),
            false,
        );
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[1].as_ref().unwrap().name(), "OPERATION_PATH_ALREADY_EXISTS");
    }

    #[test]
    fn probe_apply_failures_are_reported() {
        let doc = json!({"list": [1]});
        let errors = validate(
            &json!([{"op": "add", "path": "/list/7", "value": 1}]),
            Some(&doc),
            false,
        );
        assert_eq!(errors[0].as_ref().unwrap().name(), "OPERATION_VALUE_OUT_OF_BOUNDS");

        let errors = validate(
            &json!([{"op": "add", "path": "/list/x", "value": 1}]),
            Some(&doc),
            false,
        );
        assert_eq!(
            errors[0].as_ref().unwrap().name(),
            "OPERATION_PATH_ILLEGAL_ARRAY_INDEX"
        );

        let errors = validate(
            &json!([{"op": "add", "path": "/missing/x", "value": 1}]),
            Some(&doc),
            false,
        );
        assert_eq!(errors[0].as_ref().unwrap().name(), "OPERATION_PATH_UNRESOLVABLE");
    }

    #[test]
    fn failed_move_leaves_probe_untouched() {
        let doc = json!({"a": {"b": 1}});
        let errors = validate(
            &json!([
                {"op": "move", "from": "/a", "path": "/a/b"},
                {"op": "test", "path": "/a/b", "value": 1},
            ]),
            Some(&doc),
            false,
        );
        assert_eq!(errors.len(), 1);
        let err = errors[0].as_ref().unwrap();
        assert_eq!(err.name(), "OPERATION_PATH_UNRESOLVABLE");
        assert_eq!(err.document, Some(json!({"a": {"b": 1}})));
    }

    #[test]
    fn malformed_path_is_invalid() {
        assert_eq!(
            name_of(json!({"op": "remove", "path": "a/b"}), None, None),
            Some("OPERATION_PATH_INVALID")
        );
        assert_eq!(
            name_of(json!({"op": "add", "path": "/a~2", "value": 1}), None, None),
            Some("OPERATION_PATH_INVALID")
        );
        assert_eq!(
            name_of(json!({"op": "remove", "path": ""}), None, None),
            None
        );
    }
}
