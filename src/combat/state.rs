//! Combat state as declared to the engine
//!
//! Created when attackers are declared and cleared at end of combat. Attacker
//! order and per-attacker blocker order are engine-supplied and treated as
//! authoritative tie-breaks; the advisor never re-derives them.
//! Uses BTreeMap for deterministic iteration order.

use crate::core::{ObjectId, PlayerId};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CombatState {
    /// Attacking creatures, in declaration order
    #[serde(default)]
    pub attackers: Vec<ObjectId>,

    /// Per-attacker blockers, in the engine's damage-assignment order
    #[serde(default)]
    pub blockers: BTreeMap<ObjectId, SmallVec<[ObjectId; 4]>>,

    /// Player being attacked
    #[serde(default)]
    pub defending_player: Option<PlayerId>,

    /// Planeswalker or other object being attacked, if any
    #[serde(default)]
    pub defending_object: Option<ObjectId>,
}

impl CombatState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn declare_attacker(&mut self, attacker: ObjectId) {
        if !self.attackers.contains(&attacker) {
            self.attackers.push(attacker);
        }
    }

    pub fn declare_blocker(&mut self, attacker: ObjectId, blocker: ObjectId) {
        let blockers = self.blockers.entry(attacker).or_default();
        if !blockers.contains(&blocker) {
            blockers.push(blocker);
        }
    }

    pub fn is_attacking(&self, id: ObjectId) -> bool {
        self.attackers.contains(&id)
    }

    pub fn is_blocked(&self, attacker: ObjectId) -> bool {
        self.blockers
            .get(&attacker)
            .is_some_and(|blockers| !blockers.is_empty())
    }

    /// Blockers for an attacker, in engine-supplied order
    pub fn blockers_of(&self, attacker: ObjectId) -> &[ObjectId] {
        self.blockers
            .get(&attacker)
            .map(|blockers| blockers.as_slice())
            .unwrap_or(&[])
    }

    /// Clear all combat state (end of combat)
    pub fn clear(&mut self) {
        self.attackers.clear();
        self.blockers.clear();
        self.defending_player = None;
        self.defending_object = None;
    }
}
