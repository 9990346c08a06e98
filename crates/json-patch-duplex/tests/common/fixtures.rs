use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde_json::Value;

pub const EXPECTED_CASE_COUNT: usize = 22;

/// One apply scenario: either `expected` (and optionally `result`) or
/// `error` is set.
#[derive(Debug, Clone, Deserialize)]
pub struct PatchCase {
    pub comment: String,
    pub doc: Value,
    pub patch: Value,
    #[serde(default)]
    pub expected: Option<Value>,
    #[serde(default)]
    pub result: Option<bool>,
    #[serde(default)]
    pub error: Option<String>,
}

pub fn fixtures_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

pub fn load_cases(name: &str) -> Vec<PatchCase> {
    let path = fixtures_dir().join(name);
    let data = fs::read_to_string(&path).unwrap_or_else(|e| panic!("failed to read {:?}: {e}", path));
    serde_json::from_str(&data).unwrap_or_else(|e| panic!("failed to parse {:?}: {e}", path))
}
