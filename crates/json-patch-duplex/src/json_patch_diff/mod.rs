//! JSON Patch diff: generate a JSON Patch from two document values.
//!
//! Sequences are walked as maps keyed by index, so a value inserted in the
//! middle of a sequence comes out as a run of `replace` operations followed
//! by an `add` at the end. Removals are emitted from the last key to the
//! first, which keeps sequence indices valid while the patch is applied.

use json_patch_duplex_pointer::append_component;
use json_patch_duplex_util::{clone, loose_equal};
use serde_json::{Map, Value};
use tracing::debug;

use crate::json_patch::types::Operation;

// ── Public API ────────────────────────────────────────────────────────────

/// Generate the operations that transform `before` into `after`.
///
/// Applying the result to a copy of `before` yields a document deep-equal
/// to `after`. Payloads are copies; nothing in the result borrows from the
/// inputs.
pub fn compare(before: &Value, after: &Value) -> Vec<Operation> {
    let mut ops = Vec::new();
    match containers(before, after) {
        Some((src, dst)) => diff_node(&mut ops, "", src, dst),
        None if !loose_equal(before, after) => ops.push(Operation::replace("", clone(after))),
        None => {}
    }
    debug!(ops = ops.len(), "documents compared");
    ops
}

// ── Container view ────────────────────────────────────────────────────────

#[derive(Clone, Copy)]
enum Node<'a> {
    Map(&'a Map<String, Value>),
    Seq(&'a [Value]),
}

impl<'a> Node<'a> {
    fn entries(self) -> Vec<(String, &'a Value)> {
        match self {
            Node::Map(map) => map.iter().map(|(k, v)| (k.clone(), v)).collect(),
            Node::Seq(arr) => arr.iter().enumerate().map(|(i, v)| (i.to_string(), v)).collect(),
        }
    }

    fn get(self, key: &str) -> Option<&'a Value> {
        match self {
            Node::Map(map) => map.get(key),
            Node::Seq(arr) => key.parse::<usize>().ok().and_then(|i| arr.get(i)),
        }
    }

    fn len(self) -> usize {
        match self {
            Node::Map(map) => map.len(),
            Node::Seq(arr) => arr.len(),
        }
    }
}

/// Both values as containers, if they are containers of the same kind.
fn containers<'a>(a: &'a Value, b: &'a Value) -> Option<(Node<'a>, Node<'a>)> {
    match (a, b) {
        (Value::Object(x), Value::Object(y)) => Some((Node::Map(x), Node::Map(y))),
        (Value::Array(x), Value::Array(y)) => Some((Node::Seq(x), Node::Seq(y))),
        _ => None,
    }
}

// ── Core recursive differ ─────────────────────────────────────────────────

fn diff_node(ops: &mut Vec<Operation>, path: &str, src: Node<'_>, dst: Node<'_>) {
    let mut deleted = false;
    for (key, old) in src.entries().into_iter().rev() {
        let child = append_component(path, &key);
        match dst.get(&key) {
            Some(new) => match containers(old, new) {
                Some((old, new)) => diff_node(ops, &child, old, new),
                None if !loose_equal(old, new) => ops.push(Operation::replace(child, clone(new))),
                None => {}
            },
            None => {
                ops.push(Operation::remove(child));
                deleted = true;
            }
        }
    }

    if !deleted && src.len() == dst.len() {
        return;
    }

    for (key, new) in dst.entries() {
        if src.get(&key).is_none() {
            ops.push(Operation::add(append_component(path, &key), clone(new)));
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────
