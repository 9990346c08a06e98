//! JSON Pointer (RFC 6901) path resolution.
//!
//! Paths are slash-delimited strings such as `/foo/0/bar`. The empty string
//! is the document root, `/` alone is the entry with the empty key. Tokens
//! are unescaped (`~1` to `/`, then `~0` to `~`) before being used as map
//! keys; in a sequence a token is a base-10 index or `-`, the append slot.
//!
//! Resolution stops one step short of the value: it yields the container and
//! key (or index) where the value lives, so callers can insert at places that
//! do not exist yet.
//!
//! # Example
//!
//! ```
//! use json_patch_duplex_pointer::{get, parse_json_pointer, format_json_pointer, resolve, Target};
//!
//! let path = parse_json_pointer("/foo/bar").unwrap();
//! assert_eq!(path, vec!["foo".to_string(), "bar".to_string()]);
//! assert_eq!(format_json_pointer(&path), "/foo/bar");
//!
//! let doc = serde_json::json!({"foo": {"bar": 42}, "list": [1, 2]});
//! assert_eq!(get(&doc, "/foo/bar"), Some(&serde_json::json!(42)));
//!
//! match resolve(&doc, "/list/-").unwrap() {
//!     Target::Slot(_, idx) => assert_eq!(idx, 2),
//!     _ => unreachable!(),
//! }
//! ```

use thiserror::Error;

pub mod get;
pub mod resolve;
pub mod types;
pub mod util;
pub mod validate;

pub use get::get;
pub use resolve::{resolve, resolve_mut};
pub use types::{Target, TargetMut};
pub use util::{
    append_component, array_index, escape_component, format_json_pointer, is_integer,
    parse_json_pointer, unescape_component,
};
pub use validate::validate_json_pointer;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum JsonPointerError {
    #[error("POINTER_INVALID")]
    PointerInvalid,
    #[error("Expected an unsigned base-10 integer or \"-\", got {0:?}")]
    InvalidIndex(String),
    #[error("NOT_FOUND")]
    NotFound,
}
