//! Player-facing combat selection state
//!
//! The one piece of mutable state in the combat path. Owned by a single
//! controller in the UI and synced against every engine snapshot: whenever
//! the (step, turn_number) pair changes, all selections are wiped and the
//! entry defaults for the new step are applied. That wholesale reset is the
//! only cancellation mechanism.

use crate::combat::Step;
use crate::core::snapshot::GameSnapshot;
use crate::core::{ObjectId, PlayerId};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::collections::BTreeMap;
use tracing::debug;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CombatSelection {
    /// (step, turn_number) this state was last synced to
    synced_to: Option<(Step, u32)>,

    /// Attackers the player has toggled on, in click order
    pub attackers: Vec<ObjectId>,

    /// Chosen blockers per attacker, in click order
    pub blocker_orders: BTreeMap<ObjectId, SmallVec<[ObjectId; 4]>>,

    /// Player the current attack is aimed at
    pub defending_player: Option<PlayerId>,

    /// Attacker whose blockers are currently being picked
    pub active_attacker: Option<ObjectId>,
}

impl CombatSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sync against the latest engine snapshot
    ///
    /// A change in (step, turn_number) clears every selection, then applies
    /// the entry defaults: entering declare_attackers targets the next player
    /// in seating order after the active player; entering declare_blockers
    /// focuses the first declared attacker.
    pub fn sync(&mut self, snapshot: &GameSnapshot) {
        let now = (snapshot.turn.step, snapshot.turn.turn_number);
        if self.synced_to == Some(now) {
            return;
        }
        debug!(step = ?now.0, turn = now.1, "combat selection reset");
        self.clear();
        self.synced_to = Some(now);

        match snapshot.turn.step {
            Step::DeclareAttackers => {
                self.defending_player = snapshot.next_player_after_active();
            }
            Step::DeclareBlockers => {
                self.active_attacker = snapshot
                    .turn
                    .combat
                    .as_ref()
                    .and_then(|combat| combat.attackers.first().copied());
            }
            _ => {}
        }
    }

    /// Toggle an attacker selection on or off
    ///
    /// Deselecting an attacker also forgets any blocker order built for it.
    pub fn toggle_attacker(&mut self, attacker: ObjectId) {
        if let Some(pos) = self.attackers.iter().position(|&id| id == attacker) {
            self.attackers.remove(pos);
            self.blocker_orders.remove(&attacker);
        } else {
            self.attackers.push(attacker);
        }
    }

    /// Toggle a blocker under the given attacker
    ///
    /// A blocker belongs to at most one attacker: assigning it under a new
    /// attacker first removes it from every other attacker's order.
    pub fn toggle_blocker(&mut self, attacker: ObjectId, blocker: ObjectId) {
        let already_here = self
            .blocker_orders
            .get(&attacker)
            .is_some_and(|order| order.contains(&blocker));

        for order in self.blocker_orders.values_mut() {
            order.retain(|&mut id| id != blocker);
        }
        self.blocker_orders.retain(|_, order| !order.is_empty());

        if !already_here {
            self.blocker_orders.entry(attacker).or_default().push(blocker);
        }
    }

    /// Blockers chosen for an attacker, in click order
    pub fn blockers_for(&self, attacker: ObjectId) -> &[ObjectId] {
        self.blocker_orders
            .get(&attacker)
            .map(|order| order.as_slice())
            .unwrap_or(&[])
    }

    pub fn set_active_attacker(&mut self, attacker: Option<ObjectId>) {
        self.active_attacker = attacker;
    }

    pub fn set_defending_player(&mut self, player: Option<PlayerId>) {
        self.defending_player = player;
    }

    fn clear(&mut self) {
        self.attackers.clear();
        self.blocker_orders.clear();
        self.defending_player = None;
        self.active_attacker = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::CombatState;
    use crate::core::snapshot::{PlayerSnapshot, TurnSnapshot};

    fn snapshot(step: Step, turn_number: u32, combat: Option<CombatState>) -> GameSnapshot {
        GameSnapshot {
            players: vec![
                PlayerSnapshot {
                    id: PlayerId::new(1),
                    name: "Alice".to_string(),
                },
                PlayerSnapshot {
                    id: PlayerId::new(2),
                    name: "Bob".to_string(),
                },
            ],
            objects: Vec::new(),
            turn: TurnSnapshot {
                step,
                turn_number,
                active_player_index: 0,
                combat,
            },
        }
    }

    #[test]
    fn test_step_change_resets_selections() {
        let mut selection = CombatSelection::new();
        selection.sync(&snapshot(Step::DeclareAttackers, 3, None));
        selection.toggle_attacker(ObjectId::new(10));
        assert_eq!(selection.attackers.len(), 1);

        selection.sync(&snapshot(Step::DeclareBlockers, 3, None));
        assert!(selection.attackers.is_empty());

        // Same (step, turn) again is a no-op
        selection.toggle_attacker(ObjectId::new(11));
        selection.sync(&snapshot(Step::DeclareBlockers, 3, None));
        assert_eq!(selection.attackers, vec![ObjectId::new(11)]);
    }

    #[test]
    fn test_same_step_new_turn_resets() {
        let mut selection = CombatSelection::new();
        selection.sync(&snapshot(Step::DeclareAttackers, 3, None));
        selection.toggle_attacker(ObjectId::new(10));

        selection.sync(&snapshot(Step::DeclareAttackers, 4, None));
        assert!(selection.attackers.is_empty());
    }

    #[test]
    fn test_declare_attackers_defaults_defender() {
        let mut selection = CombatSelection::new();
        selection.sync(&snapshot(Step::DeclareAttackers, 3, None));
        assert_eq!(selection.defending_player, Some(PlayerId::new(2)));
    }

    #[test]
    fn test_declare_blockers_focuses_first_attacker() {
        let mut combat = CombatState::new();
        combat.declare_attacker(ObjectId::new(10));
        combat.declare_attacker(ObjectId::new(11));

        let mut selection = CombatSelection::new();
        selection.sync(&snapshot(Step::DeclareBlockers, 3, Some(combat)));
        assert_eq!(selection.active_attacker, Some(ObjectId::new(10)));
    }

    #[test]
    fn test_blocker_belongs_to_one_attacker() {
        let mut selection = CombatSelection::new();
        let (a1, a2) = (ObjectId::new(10), ObjectId::new(11));
        let blocker = ObjectId::new(20);

        selection.toggle_blocker(a1, blocker);
        assert_eq!(selection.blockers_for(a1), &[blocker]);

        selection.toggle_blocker(a2, blocker);
        assert!(selection.blockers_for(a1).is_empty());
        assert_eq!(selection.blockers_for(a2), &[blocker]);
    }

    #[test]
    fn test_toggle_blocker_off() {
        let mut selection = CombatSelection::new();
        let attacker = ObjectId::new(10);
        let blocker = ObjectId::new(20);

        selection.toggle_blocker(attacker, blocker);
        selection.toggle_blocker(attacker, blocker);
        assert!(selection.blockers_for(attacker).is_empty());
    }

    #[test]
    fn test_deselecting_attacker_forgets_its_blockers() {
        let mut selection = CombatSelection::new();
        let attacker = ObjectId::new(10);
        selection.toggle_attacker(attacker);
        selection.toggle_blocker(attacker, ObjectId::new(20));

        selection.toggle_attacker(attacker);
        assert!(selection.blockers_for(attacker).is_empty());
        assert!(selection.attackers.is_empty());
    }
}
