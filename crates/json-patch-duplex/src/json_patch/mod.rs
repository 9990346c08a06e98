//! JSON Patch implementation (RFC 6902).
//!
//! # Operations
//!
//! `add`, `remove`, `replace`, `copy`, `move`, `test`.
//!
//! `apply` mutates a document in place and is not atomic; `apply_patch`
//! works on a copy. `validate` checks a raw patch, optionally against a
//! document, without touching it.

pub mod apply;
pub mod codec;
pub mod types;
pub mod validate;

pub use apply::{apply, apply_op, apply_patch, apply_with, read_at};
pub use codec::json::{from_json, from_json_patch, to_json, to_json_patch};
pub use types::{ApplyPatchOptions, OpKind, Operation, PatchError, PatchErrorKind, PatchResult};
pub use validate::{validate, validator, ValidationError, ValidationErrorKind};
