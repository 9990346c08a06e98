//! Pull-based change tracking for a document.
//!
//! A [`Mirror`] keeps a private snapshot of a document. Each call to
//! [`Mirror::generate`] diffs the snapshot against the current state and
//! folds the result into the snapshot, so consecutive calls report only
//! what changed in between.
//!
//! ```
//! use json_patch_duplex::json_mirror::Mirror;
//! use serde_json::json;
//!
//! let mut doc = json!({"name": "a"});
//! let mut mirror = Mirror::new(&doc);
//!
//! doc["name"] = json!("b");
//! assert_eq!(mirror.generate(&doc).len(), 1);
//! assert!(mirror.generate(&doc).is_empty());
//! ```

use json_patch_duplex_util::clone;
use serde_json::Value;
use tracing::warn;

use crate::json_patch::apply::apply;
use crate::json_patch::types::Operation;
use crate::json_patch_diff::compare;

#[derive(Debug, Clone)]
pub struct Mirror {
    snapshot: Value,
}

impl Mirror {
    pub fn new(doc: &Value) -> Self {
        Self {
            snapshot: clone(doc),
        }
    }

    /// Operations that turn the snapshot into `current`.
    ///
    /// The snapshot is brought up to date with `current` afterwards.
    pub fn generate(&mut self, current: &Value) -> Vec<Operation> {
        let ops = compare(&self.snapshot, current);
        if ops.is_empty() {
            return ops;
        }
        if let Err(err) = apply(&mut self.snapshot, &ops) {
            warn!(error = %err, "diff did not apply to snapshot, re-snapshotting");
            self.snapshot = clone(current);
        }
        ops
    }

    pub fn snapshot(&self) -> &Value {
        &self.snapshot
    }

    /// Forget tracked state and start over from `doc`.
    pub fn reset(&mut self, doc: &Value) {
        self.snapshot = clone(doc);
    }
}
