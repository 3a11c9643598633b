//! Replacement/prevention ordering conflicts
//!
//! When several replacement or prevention effects could apply to the same
//! event, the player owes the engine an application order. The resolver keeps
//! every conflict visible until the player records a choice; "let the engine
//! decide" is the explicit Auto sentinel, never a silent omission.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

/// One effect that could apply, in engine-proposed order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplacementCandidate {
    /// Engine-side effect id, echoed back in the chosen order
    pub id: String,

    /// Display text for the picker
    pub description: String,
}

/// An unresolved ordering question between competing effects
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplacementConflict {
    /// Stable key identifying the event this conflict is about
    pub key: String,

    pub label: String,

    pub candidates: Vec<ReplacementCandidate>,
}

/// The player's answer for one conflict key
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConflictResolution {
    /// Apply this candidate effect first
    Effect(String),
    /// Explicitly defer to the engine's default order
    Auto,
}

/// Tracks open conflicts and the choices recorded so far
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReplacementResolver {
    conflicts: Vec<ReplacementConflict>,
    choices: BTreeMap<String, ConflictResolution>,
}

impl ReplacementResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the tracked conflict set with the engine's latest
    ///
    /// Recorded choices survive for keys still present; choices for vanished
    /// conflicts are dropped so a re-appearing key starts unresolved.
    pub fn set_conflicts(&mut self, conflicts: Vec<ReplacementConflict>) {
        self.choices
            .retain(|key, _| conflicts.iter().any(|c| &c.key == key));
        self.conflicts = conflicts;
    }

    /// Record the player's choice for a conflict (overwrites any previous one)
    pub fn record_choice(&mut self, key: impl Into<String>, resolution: ConflictResolution) {
        let key = key.into();
        debug!(key = %key, resolution = ?resolution, "replacement choice recorded");
        self.choices.insert(key, resolution);
    }

    pub fn resolution(&self, key: &str) -> Option<&ConflictResolution> {
        self.choices.get(key)
    }

    /// Conflicts with no recorded choice, in tracked order
    pub fn unresolved(&self) -> Vec<&ReplacementConflict> {
        self.conflicts
            .iter()
            .filter(|conflict| !self.choices.contains_key(&conflict.key))
            .collect()
    }

    pub fn conflicts(&self) -> &[ReplacementConflict] {
        &self.conflicts
    }

    /// Per-key resolutions, in submission shape
    pub fn choices(&self) -> &BTreeMap<String, ConflictResolution> {
        &self.choices
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn conflict(key: &str) -> ReplacementConflict {
        ReplacementConflict {
            key: key.to_string(),
            label: format!("Order for {key}"),
            candidates: vec![
                ReplacementCandidate {
                    id: "effect-a".to_string(),
                    description: "Prevent the damage".to_string(),
                },
                ReplacementCandidate {
                    id: "effect-b".to_string(),
                    description: "Redirect the damage".to_string(),
                },
            ],
        }
    }

    #[test]
    fn test_unresolved_until_choice_recorded() {
        let mut resolver = ReplacementResolver::new();
        resolver.set_conflicts(vec![conflict("dmg-1"), conflict("dmg-2")]);
        assert_eq!(resolver.unresolved().len(), 2);

        resolver.record_choice("dmg-1", ConflictResolution::Effect("effect-a".to_string()));
        let open: Vec<_> = resolver.unresolved().iter().map(|c| c.key.clone()).collect();
        assert_eq!(open, vec!["dmg-2".to_string()]);
    }

    #[test]
    fn test_auto_is_an_explicit_resolution() {
        let mut resolver = ReplacementResolver::new();
        resolver.set_conflicts(vec![conflict("dmg-1")]);

        resolver.record_choice("dmg-1", ConflictResolution::Auto);
        assert!(resolver.unresolved().is_empty());
        assert_eq!(
            resolver.resolution("dmg-1"),
            Some(&ConflictResolution::Auto)
        );
    }

    #[test]
    fn test_record_choice_overwrites() {
        let mut resolver = ReplacementResolver::new();
        resolver.set_conflicts(vec![conflict("dmg-1")]);

        resolver.record_choice("dmg-1", ConflictResolution::Effect("effect-a".to_string()));
        resolver.record_choice("dmg-1", ConflictResolution::Effect("effect-b".to_string()));
        assert_eq!(
            resolver.resolution("dmg-1"),
            Some(&ConflictResolution::Effect("effect-b".to_string()))
        );
    }

    #[test]
    fn test_vanished_conflict_drops_its_choice() {
        let mut resolver = ReplacementResolver::new();
        resolver.set_conflicts(vec![conflict("dmg-1")]);
        resolver.record_choice("dmg-1", ConflictResolution::Auto);

        resolver.set_conflicts(vec![conflict("dmg-2")]);
        assert_eq!(resolver.resolution("dmg-1"), None);

        // Re-appearing key starts unresolved again
        resolver.set_conflicts(vec![conflict("dmg-1")]);
        assert_eq!(resolver.unresolved().len(), 1);
    }

    #[test]
    fn test_choice_submission_shape() {
        let mut resolver = ReplacementResolver::new();
        resolver.set_conflicts(vec![conflict("dmg-1"), conflict("dmg-2")]);
        resolver.record_choice("dmg-1", ConflictResolution::Effect("effect-b".to_string()));
        resolver.record_choice("dmg-2", ConflictResolution::Auto);

        let json = serde_json::to_value(resolver.choices()).unwrap();
        assert_eq!(json["dmg-1"]["effect"], "effect-b");
        assert_eq!(json["dmg-2"], "auto");
    }
}
