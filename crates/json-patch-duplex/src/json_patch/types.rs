//! Core types for the JSON Patch module: operations, options, errors.

use std::fmt;
use std::str::FromStr;

use json_patch_duplex_pointer::JsonPointerError;
use serde_json::Value;
use thiserror::Error;

// ── Error ─────────────────────────────────────────────────────────────────

/// What went wrong while decoding or applying a single operation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PatchErrorKind {
    #[error("'value' MUST be defined")]
    ValueRequired,
    #[error("'from' MUST be defined")]
    FromRequired,
    #[error("Operation `op` property is not one of operations defined in RFC-6902: {0:?}")]
    OpInvalid(String),
    #[error("Operation is not an object")]
    NotAnObject,
    #[error("Patch sequence must be an array")]
    SequenceNotAnArray,
    #[error("Operation `path` property is not a JSON pointer")]
    PathInvalid,
    #[error("Expected an unsigned base-10 integer value, making the new referenced value the array element with the zero-based index, got {0:?}")]
    IllegalArrayIndex(String),
    #[error("Cannot perform the operation at a path that does not exist")]
    PathUnresolvable,
    #[error("Cannot move or copy from a path that does not exist")]
    FromUnresolvable,
    #[error("The specified index MUST NOT be greater than the number of elements in the array (index {index}, length {len})")]
    IndexOutOfBounds { index: usize, len: usize },
}

impl PatchErrorKind {
    /// Stable machine-readable code.
    pub fn name(&self) -> &'static str {
        match self {
            PatchErrorKind::ValueRequired => "OPERATION_VALUE_REQUIRED",
            PatchErrorKind::FromRequired => "OPERATION_FROM_REQUIRED",
            PatchErrorKind::OpInvalid(_) => "OPERATION_OP_INVALID",
            PatchErrorKind::NotAnObject => "OPERATION_NOT_AN_OBJECT",
            PatchErrorKind::SequenceNotAnArray => "SEQUENCE_NOT_AN_ARRAY",
            PatchErrorKind::PathInvalid => "OPERATION_PATH_INVALID",
            PatchErrorKind::IllegalArrayIndex(_) => "OPERATION_PATH_ILLEGAL_ARRAY_INDEX",
            PatchErrorKind::PathUnresolvable => "OPERATION_PATH_UNRESOLVABLE",
            PatchErrorKind::FromUnresolvable => "OPERATION_FROM_UNRESOLVABLE",
            PatchErrorKind::IndexOutOfBounds { .. } => "OPERATION_VALUE_OUT_OF_BOUNDS",
        }
    }

}

impl From<JsonPointerError> for PatchErrorKind {
    fn from(err: JsonPointerError) -> Self {
        match err {
            JsonPointerError::PointerInvalid => PatchErrorKind::PathInvalid,
            JsonPointerError::InvalidIndex(token) => PatchErrorKind::IllegalArrayIndex(token),
            JsonPointerError::NotFound => PatchErrorKind::PathUnresolvable,
        }
    }
}

/// A fatal error from `apply` or the wire codec.
///
/// Carries the offending operation in wire form and its position in the
/// sequence.
#[derive(Debug, Error, Clone, PartialEq)]
#[error("{kind} [index = {index}]")]
pub struct PatchError {
    pub kind: PatchErrorKind,
    pub index: usize,
    pub operation: Value,
}

impl PatchError {
    pub fn new(kind: PatchErrorKind, index: usize, operation: Value) -> Self {
        Self {
            kind,
            index,
            operation,
        }
    }

    pub fn name(&self) -> &'static str {
        self.kind.name()
    }
}

// ── Operations ────────────────────────────────────────────────────────────

/// The six RFC 6902 operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OpKind {
    Add,
    Remove,
    Replace,
    Move,
    Copy,
    Test,
}

impl OpKind {
    pub const ALL: [OpKind; 6] = [
        OpKind::Add,
        OpKind::Remove,
        OpKind::Replace,
        OpKind::Move,
        OpKind::Copy,
        OpKind::Test,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OpKind::Add => "add",
            OpKind::Remove => "remove",
            OpKind::Replace => "replace",
            OpKind::Move => "move",
            OpKind::Copy => "copy",
            OpKind::Test => "test",
        }
    }

    /// `add`, `replace` and `test` carry a `value`.
    pub fn requires_value(&self) -> bool {
        matches!(self, OpKind::Add | OpKind::Replace | OpKind::Test)
    }

    /// `move` and `copy` carry a `from`.
    pub fn requires_from(&self) -> bool {
        matches!(self, OpKind::Move | OpKind::Copy)
    }
}

impl FromStr for OpKind {
    type Err = PatchErrorKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OpKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| PatchErrorKind::OpInvalid(s.to_string()))
    }
}

impl fmt::Display for OpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single patch operation.
///
/// `value` and `from` are optional so that an operation missing a required
/// field can still be represented; `apply` rejects it with a structural
/// error. A JSON `null` value is `Some(Value::Null)`.
#[derive(Debug, Clone, PartialEq)]
pub struct Operation {
    pub op: OpKind,
    pub path: String,
    pub value: Option<Value>,
    pub from: Option<String>,
}

impl Operation {
    pub fn add(path: impl Into<String>, value: Value) -> Self {
        Self::with_value(OpKind::Add, path, value)
    }

    pub fn remove(path: impl Into<String>) -> Self {
        Self {
            op: OpKind::Remove,
            path: path.into(),
            value: None,
            from: None,
        }
    }

    pub fn replace(path: impl Into<String>, value: Value) -> Self {
        Self::with_value(OpKind::Replace, path, value)
    }

    pub fn move_from(from: impl Into<String>, path: impl Into<String>) -> Self {
        Self::with_from(OpKind::Move, from, path)
    }

    pub fn copy_from(from: impl Into<String>, path: impl Into<String>) -> Self {
        Self::with_from(OpKind::Copy, from, path)
    }

    pub fn test(path: impl Into<String>, value: Value) -> Self {
        Self::with_value(OpKind::Test, path, value)
    }

    fn with_value(op: OpKind, path: impl Into<String>, value: Value) -> Self {
        Self {
            op,
            path: path.into(),
            value: Some(value),
            from: None,
        }
    }

    fn with_from(op: OpKind, from: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            op,
            path: path.into(),
            value: None,
            from: Some(from.into()),
        }
    }
}

// ── Result types ──────────────────────────────────────────────────────────

/// Result of applying a patch to a private copy of a document.
#[derive(Debug, Clone, PartialEq)]
pub struct PatchResult {
    /// The patched copy.
    pub doc: Value,
    /// The last operation's result.
    pub result: bool,
}

/// Options for `apply_with_options`.
#[derive(Debug, Clone, Default)]
pub struct ApplyPatchOptions {
    /// If true, mutate the document operation by operation; a failure leaves
    /// earlier operations applied.
    /// If false, patch a clone and swap it in only when every operation
    /// succeeded.
    pub mutate: bool,
}
