use serde_json::Value;

use crate::types::{Target, TargetMut};
use crate::util::{array_index, raw_tokens, unescape_component};
use crate::JsonPointerError;

/// Resolve `pointer` against `doc` without mutating it.
///
/// Every token but the last must name an existing child. The last token is
/// classified by the kind of its container and is not required to exist.
///
/// # Errors
///
/// - `PointerInvalid` if a non-empty pointer does not start with `/`
/// - `InvalidIndex` if a sequence token is neither `-` nor all digits
/// - `NotFound` if an intermediate step is missing or descends into a scalar
pub fn resolve<'a>(doc: &'a Value, pointer: &str) -> Result<Target<'a>, JsonPointerError> {
    let tokens = raw_tokens(pointer)?;
    let Some((last, parents)) = tokens.split_last() else {
        return Ok(Target::Root(doc));
    };
    let mut current = doc;
    for token in parents {
        current = step(current, token)?;
    }
    match current {
        Value::Array(arr) => Ok(Target::Slot(arr, array_index(last, arr.len())?)),
        Value::Object(map) => Ok(Target::Entry(map, unescape_component(last))),
        _ => Err(JsonPointerError::NotFound),
    }
}

/// Mutable counterpart of [`resolve`].
pub fn resolve_mut<'a>(
    doc: &'a mut Value,
    pointer: &str,
) -> Result<TargetMut<'a>, JsonPointerError> {
    let tokens = raw_tokens(pointer)?;
    let Some((last, parents)) = tokens.split_last() else {
        return Ok(TargetMut::Root(doc));
    };
    let mut current = doc;
    for token in parents {
        current = step_mut(current, token)?;
    }
    match current {
        Value::Array(arr) => {
            let idx = array_index(last, arr.len())?;
            Ok(TargetMut::Slot(arr, idx))
        }
        Value::Object(map) => Ok(TargetMut::Entry(map, unescape_component(last))),
        _ => Err(JsonPointerError::NotFound),
    }
}

fn step<'a>(current: &'a Value, token: &str) -> Result<&'a Value, JsonPointerError> {
    match current {
        Value::Array(arr) => arr
            .get(array_index(token, arr.len())?)
            .ok_or(JsonPointerError::NotFound),
        Value::Object(map) => map
            .get(&unescape_component(token))
            .ok_or(JsonPointerError::NotFound),
        _ => Err(JsonPointerError::NotFound),
    }
}

fn step_mut<'a>(current: &'a mut Value, token: &str) -> Result<&'a mut Value, JsonPointerError> {
    match current {
        Value::Array(arr) => {
            let idx = array_index(token, arr.len())?;
            arr.get_mut(idx).ok_or(JsonPointerError::NotFound)
        }
        Value::Object(map) => map
            .get_mut(&unescape_component(token))
            .ok_or(JsonPointerError::NotFound),
        _ => Err(JsonPointerError::NotFound),
    }
}
