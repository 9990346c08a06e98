//! json-patch-duplex-util - tree value helpers for json-patch-duplex
//!
//! Equality and cloning over `serde_json::Value`, shared by the applier, the
//! differ and the validator.

pub mod json_clone;
pub mod json_equal;

pub use json_clone::clone;
pub use json_equal::{deep_equal, loose_equal};
