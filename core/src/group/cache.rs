//! Report cache
//!
//! Memoizes the settlement report on a content hash of the snapshot it was
//! computed from. Purely an optimization: `compute` is deterministic and
//! idempotent, so a hash failure or a stale entry can only cost an extra
//! recomputation, never change a result.

use crate::models::expense::Expense;
use crate::models::member::Member;
use crate::models::report::SettlementReport;
use crate::settlement;
use serde_json::Value;
use sha2::{Digest, Sha256};

/// SHA-256 hex digest of a canonical JSON rendering of the snapshot
///
/// Object keys are sorted recursively so the hash is independent of map
/// iteration order. Returns `None` if serialization fails, which these
/// types cannot actually trigger; callers treat `None` as "recompute".
pub(crate) fn snapshot_hash(members: &[Member], expenses: &[Expense]) -> Option<String> {
    let value = serde_json::to_value((members, expenses)).ok()?;
    let canonical = canonicalize(value);
    let bytes = serde_json::to_vec(&canonical).ok()?;

    let mut hasher = Sha256::new();
    hasher.update(&bytes);
    Some(format!("{:x}", hasher.finalize()))
}

/// Recursively sort all object keys for a canonical representation
fn canonicalize(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let sorted: std::collections::BTreeMap<String, Value> = map
                .into_iter()
                .map(|(key, value)| (key, canonicalize(value)))
                .collect();
            Value::Object(sorted.into_iter().collect())
        }
        Value::Array(items) => Value::Array(items.into_iter().map(canonicalize).collect()),
        other => other,
    }
}

/// Memoized settlement computation keyed by snapshot hash
#[derive(Debug, Clone, Default)]
pub struct ReportCache {
    /// Hash of the snapshot the cached report was computed from
    entry: Option<(String, SettlementReport)>,

    /// Number of actual engine invocations (cache misses)
    recomputes: u64,
}

impl ReportCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the report for this snapshot, recomputing only when it changed
    pub fn get_or_compute(
        &mut self,
        members: &[Member],
        expenses: &[Expense],
    ) -> &SettlementReport {
        let hash = snapshot_hash(members, expenses).unwrap_or_default();
        let stale = match &self.entry {
            // An empty hash means hashing failed; always recompute then.
            Some((cached, _)) => hash.is_empty() || *cached != hash,
            None => true,
        };

        if stale {
            self.recomputes += 1;
            self.entry = Some((hash, settlement::compute(members, expenses)));
        }

        // Populated just above whenever it was empty.
        let (_, report) = self.entry.get_or_insert_with(Default::default);
        report
    }

    /// Drop the cached report
    pub fn invalidate(&mut self) {
        self.entry = None;
    }

    /// Number of engine invocations so far
    pub fn recomputes(&self) -> u64 {
        self.recomputes
    }
}
