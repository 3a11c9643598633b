//! Default combat-damage distribution
//!
//! Builds the pre-filled damage proposal the UI shows when a damage pass
//! begins. The player can edit it before submission and the engine performs
//! final validation, so this is a suggestion, never an enforcement. Rebuilt
//! from scratch on every pass; nothing is persisted.

use crate::combat::eligibility::{is_active_in_pass, DamagePass};
use crate::combat::lethal::lethal_requirement;
use crate::core::snapshot::{keywords, GameSnapshot, SnapshotIndex};
use crate::core::ObjectId;
use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;

/// Where one slice of an attacker's damage goes
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum DamageRecipient {
    /// A specific blocking creature
    Blocker(ObjectId),
    /// The defending object (planeswalker)
    Defender,
    /// The defending player
    Player,
}

impl fmt::Display for DamageRecipient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DamageRecipient::Blocker(id) => write!(f, "{id}"),
            DamageRecipient::Defender => write!(f, "defender"),
            DamageRecipient::Player => write!(f, "player"),
        }
    }
}

// Serialized as a JSON object key: the blocker id rendered as a decimal
// string, or the literal "defender" / "player".
impl Serialize for DamageRecipient {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for DamageRecipient {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct RecipientVisitor;

        impl Visitor<'_> for RecipientVisitor {
            type Value = DamageRecipient;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a blocker id, \"defender\", or \"player\"")
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<DamageRecipient, E> {
                match value {
                    "defender" => Ok(DamageRecipient::Defender),
                    "player" => Ok(DamageRecipient::Player),
                    other => other
                        .parse::<u32>()
                        .map(|id| DamageRecipient::Blocker(ObjectId::new(id)))
                        .map_err(|_| E::custom(format!("bad damage recipient: {other}"))),
                }
            }
        }

        deserializer.deserialize_str(RecipientVisitor)
    }
}

/// Proposed damage distribution for one pass: attacker -> recipient -> amount
///
/// Zero amounts are never recorded; an attacker with nothing to assign has no
/// entry at all.
pub type DamageAssignment = BTreeMap<ObjectId, BTreeMap<DamageRecipient, u32>>;

/// Build the default damage distribution for one pass
///
/// Covers only attackers that are eligible for the pass, flagged attacking,
/// and on the battlefield with positive power. Per attacker, in the engine's
/// declaration order:
/// - unblocked: full power to the defending object, else the defending player;
/// - blocked: each blocker in engine order gets the lesser of remaining power
///   and its lethal requirement (a blocker of unknown toughness soaks all
///   remaining power), until power runs out;
/// - leftover after covering every blocker goes to the defender/player only
///   with Trample, otherwise it is dropped without an entry.
///
/// Attackers are evaluated independently; the builder does not share
/// remaining-toughness state across attackers in the same pass. The engine
/// validates the final submission either way.
pub fn build_default_assignment(
    snapshot: &GameSnapshot,
    index: &SnapshotIndex<'_>,
    pass: Option<DamagePass>,
) -> DamageAssignment {
    let mut assignment = DamageAssignment::new();
    let Some(combat) = snapshot.turn.combat.as_ref() else {
        return assignment;
    };

    for attacker_id in &combat.attackers {
        let Some(attacker) = index.get(attacker_id) else {
            continue;
        };
        if !attacker.attacking
            || !attacker.is_on_battlefield()
            || !is_active_in_pass(attacker, pass)
        {
            continue;
        }
        let power = attacker.power.unwrap_or(0);
        if power <= 0 {
            continue;
        }
        let mut remaining = power as u32;
        let mut slices: BTreeMap<DamageRecipient, u32> = BTreeMap::new();

        let blockers: Vec<_> = combat
            .blockers_of(*attacker_id)
            .iter()
            .filter_map(|id| index.get(id).copied())
            .filter(|blocker| blocker.blocking && blocker.is_on_battlefield())
            .collect();

        if blockers.is_empty() {
            if let Some(recipient) = defending_recipient(combat) {
                slices.insert(recipient, remaining);
            }
        } else {
            let deathtouch = attacker.has_keyword(keywords::DEATHTOUCH);
            for blocker in &blockers {
                if remaining == 0 {
                    break;
                }
                let requirement = match (blocker.toughness, deathtouch) {
                    // Unknown toughness: assume it needs everything we have
                    (None, false) => remaining,
                    _ => lethal_requirement(blocker.toughness, blocker.damage_marked, deathtouch),
                };
                let amount = remaining.min(requirement);
                if amount > 0 {
                    slices.insert(DamageRecipient::Blocker(blocker.id), amount);
                    remaining -= amount;
                }
            }
            if remaining > 0 && attacker.has_keyword(keywords::TRAMPLE) {
                if let Some(recipient) = defending_recipient(combat) {
                    slices.insert(recipient, remaining);
                }
            }
        }

        if !slices.is_empty() {
            assignment.insert(*attacker_id, slices);
        }
    }

    assignment
}

fn defending_recipient(combat: &crate::combat::CombatState) -> Option<DamageRecipient> {
    if combat.defending_object.is_some() {
        Some(DamageRecipient::Defender)
    } else if combat.defending_player.is_some() {
        Some(DamageRecipient::Player)
    } else {
        None
    }
}
