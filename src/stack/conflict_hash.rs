//! Stable identity of a stack entry's target/choice context
//!
//! The hash answers one question: has anything that could invalidate a
//! recorded replacement-order choice changed? It folds in the entry's own
//! context, the current zone of every referenced target, and the ids of
//! everything on the stack. The value is compared, never parsed or stored
//! long-term.

use crate::core::snapshot::SnapshotIndex;
use crate::stack::entry::{StackEntry, StackTarget};
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Compute the conflict-context hash for one stack entry
///
/// Structurally equal inputs hash identically regardless of JSON key order:
/// the composite goes through serde_json, whose object maps are key-sorted.
/// A referenced target changing zone, or the stack gaining/losing/reordering
/// entries, changes the hash.
pub fn conflict_hash(
    entry: &StackEntry,
    index: &SnapshotIndex<'_>,
    stack: &[StackEntry],
) -> String {
    let target_zones: Vec<serde_json::Value> = entry
        .targets
        .iter()
        .map(|target| match target {
            StackTarget::Object(id) => index
                .get(id)
                .and_then(|obj| serde_json::to_value(obj.zone).ok())
                .unwrap_or_else(|| serde_json::Value::String("unknown".to_string())),
            StackTarget::Player(_) => serde_json::Value::String("player".to_string()),
        })
        .collect();
    let stack_ids: Vec<_> = stack.iter().map(|e| e.id).collect();

    let composite = serde_json::json!({
        "kind": entry.kind,
        "controller": entry.controller,
        "source": entry.source,
        "targets": entry.targets,
        "choices": entry.choices,
        "target_zones": target_zones,
        "stack_ids": stack_ids,
    });

    // Canonical string then a plain hash, same pipeline as any other
    // equality-only fingerprint.
    let canonical = composite.to_string();
    let mut hasher = DefaultHasher::new();
    canonical.hash(&mut hasher);
    format!("{:016x}", hasher.finish())
}
