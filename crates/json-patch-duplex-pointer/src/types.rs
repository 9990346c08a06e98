//! Resolution targets.
//!
//! A resolved path is never a bare value: it names the place where a value
//! lives (or is about to live), so `add` can target an absent map key or the
//! append slot of a sequence.

use serde_json::{Map, Value};

/// Read-only resolution of a path.
#[derive(Debug, Clone, PartialEq)]
pub enum Target<'a> {
    /// The path is `""`: the whole document.
    Root(&'a Value),
    /// An entry of a map, present or not.
    Entry(&'a Map<String, Value>, String),
    /// An index of a sequence in `0..=len`.
    Slot(&'a [Value], usize),
}

impl<'a> Target<'a> {
    /// The value currently stored at the target, if any.
    pub fn into_value(self) -> Option<&'a Value> {
        match self {
            Target::Root(doc) => Some(doc),
            Target::Entry(map, key) => map.get(&key),
            Target::Slot(arr, idx) => arr.get(idx),
        }
    }

    pub fn is_root(&self) -> bool {
        matches!(self, Target::Root(_))
    }
}

/// Mutable resolution of a path.
#[derive(Debug)]
pub enum TargetMut<'a> {
    Root(&'a mut Value),
    Entry(&'a mut Map<String, Value>, String),
    Slot(&'a mut Vec<Value>, usize),
}

impl<'a> TargetMut<'a> {
    /// The value currently stored at the target, if any.
    pub fn into_value(self) -> Option<&'a mut Value> {
        match self {
            TargetMut::Root(doc) => Some(doc),
            TargetMut::Entry(map, key) => map.get_mut(&key),
            TargetMut::Slot(arr, idx) => arr.get_mut(idx),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn entry_into_value() {
        let doc = json!({"foo": "bar"});
        let map = doc.as_object().unwrap();
        assert_eq!(
            Target::Entry(map, "foo".to_string()).into_value(),
            Some(&json!("bar"))
        );
        assert_eq!(Target::Entry(map, "nope".to_string()).into_value(), None);
    }

    #[test]
    fn slot_into_value_past_end() {
        let doc = json!([1, 2, 3]);
        let arr = doc.as_array().unwrap();
        assert_eq!(Target::Slot(arr, 2).into_value(), Some(&json!(3)));
        assert_eq!(Target::Slot(arr, 3).into_value(), None);
    }

    #[test]
    fn root_target() {
        let doc = json!(123);
        let target = Target::Root(&doc);
        assert!(target.is_root());
        assert_eq!(target.into_value(), Some(&json!(123)));
    }
}
