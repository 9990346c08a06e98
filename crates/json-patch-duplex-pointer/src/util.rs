use crate::JsonPointerError;

/// Unescapes a JSON Pointer path component.
///
/// `~1` is replaced before `~0`, so `~01` decodes to `~1` and not to `/`.
pub fn unescape_component(component: &str) -> String {
    if !component.contains('~') {
        return component.to_string();
    }
    component.replace("~1", "/").replace("~0", "~")
}

/// Escapes a JSON Pointer path component.
pub fn escape_component(component: &str) -> String {
    if !component.contains('/') && !component.contains('~') {
        return component.to_string();
    }
    component.replace('~', "~0").replace('/', "~1")
}

/// Appends one escaped component to an existing pointer string.
///
/// ```
/// use json_patch_duplex_pointer::append_component;
///
/// assert_eq!(append_component("", "a"), "/a");
/// assert_eq!(append_component("/a", "b/c"), "/a/b~1c");
/// ```
pub fn append_component(pointer: &str, component: &str) -> String {
    let escaped = escape_component(component);
    let mut out = String::with_capacity(pointer.len() + escaped.len() + 1);
    out.push_str(pointer);
    out.push('/');
    out.push_str(&escaped);
    out
}

/// Splits a pointer into its raw (still escaped) tokens.
///
/// The root pointer `""` has no tokens. Any other pointer must start with `/`.
pub(crate) fn raw_tokens(pointer: &str) -> Result<Vec<&str>, JsonPointerError> {
    if pointer.is_empty() {
        return Ok(Vec::new());
    }
    let rest = pointer
        .strip_prefix('/')
        .ok_or(JsonPointerError::PointerInvalid)?;
    Ok(rest.split('/').collect())
}

/// Parse a JSON Pointer string into unescaped path components.
pub fn parse_json_pointer(pointer: &str) -> Result<Vec<String>, JsonPointerError> {
    Ok(raw_tokens(pointer)?
        .into_iter()
        .map(unescape_component)
        .collect())
}

/// Format path components into a JSON Pointer string.
pub fn format_json_pointer(path: &[String]) -> String {
    let mut out = String::new();
    for component in path {
        out.push('/');
        out.push_str(&escape_component(component));
    }
    out
}

/// Check if a string consists only of ASCII digits.
///
/// Leading zeros are accepted (`"007"` is index 7).
pub fn is_integer(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// Map a sequence token onto an index for a sequence of length `len`.
///
/// `-` names the append slot, which is `len` itself.
pub fn array_index(token: &str, len: usize) -> Result<usize, JsonPointerError> {
    if token == "-" {
        return Ok(len);
    }
    if !is_integer(token) {
        return Err(JsonPointerError::InvalidIndex(token.to_string()));
    }
    token
        .parse()
        .map_err(|_| JsonPointerError::InvalidIndex(token.to_string()))
}
