//! JSON Patch apply logic.
//!
//! Every operation resolves its path once into a [`TargetMut`] and then
//! dispatches on the operation kind and the kind of container it landed in.

use json_patch_duplex_pointer::{resolve, resolve_mut, JsonPointerError, TargetMut};
use json_patch_duplex_util::{clone, deep_equal};
use serde_json::{Map, Value};
use tracing::{debug, trace};

use super::codec::json::to_json;
use super::types::{
    ApplyPatchOptions, OpKind, Operation, PatchError, PatchErrorKind, PatchResult,
};

// ── Internal read ─────────────────────────────────────────────────────────

/// Read the value stored at `pointer`, if any.
///
/// Malformed pointers are errors; a well-formed pointer that names an
/// absent entry or the append slot yields `Ok(None)`.
pub fn read_at<'a>(doc: &'a Value, pointer: &str) -> Result<Option<&'a Value>, PatchErrorKind> {
    Ok(resolve(doc, pointer)?.into_value())
}

// ── Individual operation applicators ─────────────────────────────────────

fn apply_add(doc: &mut Value, path: &str, value: Value) -> Result<(), PatchErrorKind> {
    match resolve_mut(doc, path)? {
        TargetMut::Root(root) => *root = value,
        TargetMut::Entry(map, key) => {
            map.insert(key, value);
        }
        TargetMut::Slot(arr, idx) => {
            if idx > arr.len() {
                return Err(PatchErrorKind::IndexOutOfBounds {
                    index: idx,
                    len: arr.len(),
                });
            }
            arr.insert(idx, value);
        }
    }
    Ok(())
}

/// Returns the removed value; removing something absent is a no-op.
fn apply_remove(doc: &mut Value, path: &str) -> Result<Option<Value>, PatchErrorKind> {
    Ok(match resolve_mut(doc, path)? {
        TargetMut::Root(root) => Some(clear_root(root)),
        TargetMut::Entry(map, key) => map.shift_remove(&key),
        TargetMut::Slot(arr, idx) => (idx < arr.len()).then(|| arr.remove(idx)),
    })
}

/// Empty the document, keeping its container kind.
fn clear_root(root: &mut Value) -> Value {
    let empty = match root {
        Value::Object(_) => Value::Object(Map::new()),
        Value::Array(_) => Value::Array(Vec::new()),
        _ => Value::Null,
    };
    std::mem::replace(root, empty)
}

fn apply_replace(doc: &mut Value, path: &str, value: Value) -> Result<(), PatchErrorKind> {
    match resolve_mut(doc, path)? {
        TargetMut::Root(root) => *root = value,
        TargetMut::Entry(map, key) => {
            map.insert(key, value);
        }
        TargetMut::Slot(arr, idx) => match arr.get_mut(idx) {
            Some(slot) => *slot = value,
            None => {
                return Err(PatchErrorKind::IndexOutOfBounds {
                    index: idx,
                    len: arr.len(),
                })
            }
        },
    }
    Ok(())
}

fn apply_move(doc: &mut Value, from: &str, path: &str) -> Result<(), PatchErrorKind> {
    let value = apply_remove(doc, from)
        .map_err(from_error)?
        .ok_or(PatchErrorKind::FromUnresolvable)?;
    apply_add(doc, path, value)
}

fn apply_copy(doc: &mut Value, from: &str, path: &str) -> Result<(), PatchErrorKind> {
    let value = read_at(doc, from)
        .map_err(from_error)?
        .map(clone)
        .ok_or(PatchErrorKind::FromUnresolvable)?;
    apply_add(doc, path, value)
}

fn apply_test(doc: &Value, path: &str, expected: &Value) -> Result<bool, PatchErrorKind> {
    if path.is_empty() {
        return Ok(ordered_equal(doc, expected));
    }
    match resolve(doc, path) {
        Ok(target) => Ok(target
            .into_value()
            .is_some_and(|actual| deep_equal(actual, expected))),
        Err(JsonPointerError::NotFound) => Ok(false),
        Err(err) => Err(err.into()),
    }
}

/// Equality as seen through the compact serialized form: map keys must
/// match in order, numbers compare by value.
fn ordered_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Object(x), Value::Object(y)) => {
            x.len() == y.len()
                && x
                    .iter()
                    .zip(y)
                    .all(|((ka, va), (kb, vb))| ka == kb && ordered_equal(va, vb))
        }
        (Value::Array(x), Value::Array(y)) => {
            x.len() == y.len() && x.iter().zip(y).all(|(p, q)| ordered_equal(p, q))
        }
        _ => deep_equal(a, b),
    }
}

/// Path errors raised while resolving `from` are reported against `from`.
fn from_error(kind: PatchErrorKind) -> PatchErrorKind {
    match kind {
        PatchErrorKind::PathUnresolvable => PatchErrorKind::FromUnresolvable,
        other => other,
    }
}

fn required_value(op: &Operation) -> Result<&Value, PatchErrorKind> {
    op.value.as_ref().ok_or(PatchErrorKind::ValueRequired)
}

fn required_from(op: &Operation) -> Result<&str, PatchErrorKind> {
    op.from.as_deref().ok_or(PatchErrorKind::FromRequired)
}

// ── Public API ────────────────────────────────────────────────────────────

/// Apply a single operation to `doc` in place.
///
/// Returns the operation's boolean: `test` reports whether the values
/// matched, every other operation reports `true`.
pub fn apply_op(doc: &mut Value, op: &Operation) -> Result<bool, PatchErrorKind> {
    trace!(op = %op.op, path = %op.path, "apply operation");
    match op.op {
        OpKind::Add => {
            let value = clone(required_value(op)?);
            apply_add(doc, &op.path, value)?;
        }
        OpKind::Remove => {
            apply_remove(doc, &op.path)?;
        }
        OpKind::Replace => {
            let value = clone(required_value(op)?);
            apply_replace(doc, &op.path, value)?;
        }
        OpKind::Move => {
            let from = required_from(op)?;
            apply_move(doc, from, &op.path)?;
        }
        OpKind::Copy => {
            let from = required_from(op)?;
            apply_copy(doc, from, &op.path)?;
        }
        OpKind::Test => return apply_test(doc, &op.path, required_value(op)?),
    }
    Ok(true)
}

/// Apply `ops` to `doc` in order, mutating it in place.
///
/// Returns the last operation's result (`false` for an empty sequence). A
/// failed `test` does not stop the sequence. On error, operations before the
/// failing one stay applied.
pub fn apply(doc: &mut Value, ops: &[Operation]) -> Result<bool, PatchError> {
    let mut result = false;
    for (index, op) in ops.iter().enumerate() {
        result = apply_op(doc, op).map_err(|kind| PatchError::new(kind, index, to_json(op)))?;
    }
    debug!(ops = ops.len(), result, "patch applied");
    Ok(result)
}

/// Apply `ops` to a private copy of `doc`, leaving `doc` untouched.
pub fn apply_patch(doc: &Value, ops: &[Operation]) -> Result<PatchResult, PatchError> {
    let mut doc = clone(doc);
    let result = apply(&mut doc, ops)?;
    Ok(PatchResult { doc, result })
}

/// Apply `ops` to `doc`, either in place or all-or-nothing per `options`.
pub fn apply_with(
    doc: &mut Value,
    ops: &[Operation],
    options: &ApplyPatchOptions,
) -> Result<bool, PatchError> {
    if options.mutate {
        return apply(doc, ops);
    }
    let PatchResult { doc: patched, result } = apply_patch(doc, ops)?;
    *doc = patched;
    Ok(result)
}
