//! json-patch-duplex: JSON Patch (RFC 6902) for `serde_json` values.
//!
//! Apply patches, generate them by comparing two documents, validate them
//! against a document, and track a document's changes with a [`Mirror`].
//!
//! ```
//! use json_patch_duplex::{apply, compare};
//! use serde_json::json;
//!
//! let before = json!({"name": "a", "tags": ["x"]});
//! let after = json!({"name": "b", "tags": ["x", "y"]});
//!
//! let ops = compare(&before, &after);
//! let mut doc = before.clone();
//! apply(&mut doc, &ops).unwrap();
//! assert_eq!(doc, after);
//! ```

pub mod json_mirror;
pub mod json_patch;
pub mod json_patch_diff;

#[cfg(feature = "cli")]
pub mod json_cli;

pub use json_mirror::Mirror;
pub use json_patch::{
    apply, apply_patch, apply_with, validate, validator, ApplyPatchOptions, OpKind, Operation,
    PatchError, PatchErrorKind, PatchResult, ValidationError, ValidationErrorKind,
};
pub use json_patch_diff::compare;
