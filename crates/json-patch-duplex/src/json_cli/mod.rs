//! Command-line tools for patching, diffing and validating JSON documents.
//!
//! Provides the core logic used by the binary entry points:
//! - `json-patch`: apply a JSON Patch to a document
//! - `json-diff`: print the JSON Patch between two documents
//! - `json-patch-validate`: report problems in a JSON Patch

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use serde_json::Value;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

use crate::json_patch::{apply_patch, from_json_patch, to_json_patch, validate, PatchError};
use crate::json_patch_diff::compare;

// ── Errors ────────────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum CliError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("stdin: {0}")]
    Stdin(io::Error),
    #[error("{}: {}", .0.name(), .0)]
    Patch(#[from] PatchError),
}

// ── Input / logging ───────────────────────────────────────────────────────

/// Read a whole file, or stdin when no path is given.
pub fn read_input(path: Option<&Path>) -> Result<String, CliError> {
    match path {
        Some(p) => fs::read_to_string(p).map_err(|source| CliError::Io {
            path: p.to_path_buf(),
            source,
        }),
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .map_err(CliError::Stdin)?;
            Ok(buf)
        }
    }
}

/// Log to stderr, filtered by `RUST_LOG` (default `warn`).
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .compact()
        .init();
}

// ── json-patch ────────────────────────────────────────────────────────────

/// Apply a JSON Patch (RFC 6902) to a document.
///
/// `doc_json`: the document as a JSON string.
/// `patch_json`: the patch operations as a JSON array string.
///
/// Returns the patched document as a pretty-printed JSON string.
pub fn apply_json_patch(doc_json: &str, patch_json: &str) -> Result<String, CliError> {
    let doc: Value = serde_json::from_str(doc_json)?;
    let ops = from_json_patch(&serde_json::from_str(patch_json)?)?;
    let result = apply_patch(&doc, &ops)?;
    Ok(serde_json::to_string_pretty(&result.doc)?)
}

// ── json-diff ─────────────────────────────────────────────────────────────

/// The patch turning `before_json` into `after_json`, pretty-printed.
pub fn diff_json(before_json: &str, after_json: &str) -> Result<String, CliError> {
    let before: Value = serde_json::from_str(before_json)?;
    let after: Value = serde_json::from_str(after_json)?;
    let ops = compare(&before, &after);
    Ok(serde_json::to_string_pretty(&to_json_patch(&ops))?)
}

// ── json-patch-validate ───────────────────────────────────────────────────

/// Validate a patch, optionally against a document.
///
/// Returns one `index: NAME message` line per problem; empty when the patch
/// is valid.
pub fn validate_json_patch(
    patch_json: &str,
    doc_json: Option<&str>,
    stop_after_first_error: bool,
) -> Result<Vec<String>, CliError> {
    let patch: Value = serde_json::from_str(patch_json)?;
    let doc: Option<Value> = doc_json.map(serde_json::from_str).transpose()?;
    let lines = validate(&patch, doc.as_ref(), stop_after_first_error)
        .into_iter()
        .enumerate()
        .filter_map(|(index, error)| {
            error.map(|e| format!("{index}: {} {}", e.name(), e.message()))
        })
        .collect();
    Ok(lines)
}

// ── Tests ─────────────────────────────────────────────────────────────────
