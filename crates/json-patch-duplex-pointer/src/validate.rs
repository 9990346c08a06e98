//! Syntax check for JSON Pointer strings.

use crate::JsonPointerError;

/// Validate a JSON Pointer string without resolving it.
///
/// # Errors
///
/// Returns `PointerInvalid` if:
/// - The pointer is non-empty but doesn't start with `/`
/// - A `~` is not followed by `0` or `1`
///
/// # Example
///
/// ```
/// use json_patch_duplex_pointer::validate_json_pointer;
///
/// validate_json_pointer("").unwrap();  // Root is valid
/// validate_json_pointer("/foo/a~1b").unwrap();
/// validate_json_pointer("foo").unwrap_err();  // Missing leading /
/// validate_json_pointer("/a~2").unwrap_err();
/// ```
pub fn validate_json_pointer(pointer: &str) -> Result<(), JsonPointerError> {
    if pointer.is_empty() {
        return Ok(());
    }
    if !pointer.starts_with('/') {
        return Err(JsonPointerError::PointerInvalid);
    }
    let mut chars = pointer.chars();
    while let Some(c) = chars.next() {
        if c == '~' && !matches!(chars.next(), Some('0' | '1')) {
            return Err(JsonPointerError::PointerInvalid);
        }
    }
    Ok(())
}
