//! Read-only game-state snapshot consumed from the authoritative engine
//!
//! The engine serializes its view of the game as JSON; this module is the
//! typed shape the advisor reads it into. Nothing here is ever written back -
//! proposals go out through separate payloads and the engine remains the
//! source of truth.

use crate::combat::{CombatState, Step};
use crate::core::{ObjectId, PlayerId};
use crate::error::{AdvisorError, Result};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Zones a game object can occupy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Zone {
    Library,
    Hand,
    Battlefield,
    Graveyard,
    Exile,
    Stack,
    Command,
}

/// Keyword strings as the engine spells them
pub mod keywords {
    pub const FIRST_STRIKE: &str = "First strike";
    pub const DOUBLE_STRIKE: &str = "Double strike";
    pub const TRAMPLE: &str = "Trample";
    pub const DEATHTOUCH: &str = "Deathtouch";
}

/// One game object as the engine last reported it
///
/// Power/toughness are `None` when the engine does not know them (face-down
/// objects, non-creatures); consumers must not treat `None` as zero.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameObjectSnapshot {
    pub id: ObjectId,

    pub name: String,

    pub zone: Zone,

    /// Card types, e.g. "Creature", "Artifact"
    #[serde(default)]
    pub types: BTreeSet<String>,

    #[serde(default)]
    pub power: Option<i32>,

    #[serde(default)]
    pub toughness: Option<i32>,

    /// Damage marked on this object so far this turn
    #[serde(default)]
    pub damage_marked: Option<i32>,

    /// Keyword abilities, verbatim engine strings
    #[serde(default)]
    pub keywords: BTreeSet<String>,

    /// Currently declared as an attacker
    #[serde(default)]
    pub attacking: bool,

    /// Currently declared as a blocker
    #[serde(default)]
    pub blocking: bool,
}

impl GameObjectSnapshot {
    pub fn has_keyword(&self, keyword: &str) -> bool {
        self.keywords.contains(keyword)
    }

    pub fn is_on_battlefield(&self) -> bool {
        self.zone == Zone::Battlefield
    }
}

/// One player seat; seating order is the order of `GameSnapshot::players`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerSnapshot {
    pub id: PlayerId,
    pub name: String,
}

/// Turn-level state: which step we are in and whose turn it is
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TurnSnapshot {
    pub step: Step,

    pub turn_number: u32,

    /// Index into `GameSnapshot::players` of the active player
    pub active_player_index: usize,

    #[serde(default)]
    pub combat: Option<CombatState>,
}

/// Fast id -> object lookup, built once per snapshot and passed down
///
/// Several components need the same lookup; building it once avoids every
/// consumer re-scanning the object list (FxHashMap for integer keys, as with
/// the rest of the id maps in this crate).
pub type SnapshotIndex<'a> = FxHashMap<ObjectId, &'a GameObjectSnapshot>;

/// Full engine snapshot handed to the advisor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub players: Vec<PlayerSnapshot>,

    pub objects: Vec<GameObjectSnapshot>,

    pub turn: TurnSnapshot,
}

impl GameSnapshot {
    /// Decode a snapshot from the engine's JSON payload
    pub fn from_json(value: serde_json::Value) -> Result<Self> {
        serde_json::from_value(value).map_err(|e| AdvisorError::SnapshotDecode(e.to_string()))
    }

    /// Build the shared id -> object index for this snapshot
    pub fn index(&self) -> SnapshotIndex<'_> {
        self.objects.iter().map(|obj| (obj.id, obj)).collect()
    }

    /// The player seated immediately after the active player, wrapping around
    ///
    /// Used as the default defending player when attackers are declared.
    /// Returns `None` for an empty or one-player table.
    pub fn next_player_after_active(&self) -> Option<PlayerId> {
        if self.players.len() < 2 {
            return None;
        }
        let next_idx = (self.turn.active_player_index + 1) % self.players.len();
        self.players.get(next_idx).map(|p| p.id)
    }
}
