//! Stack snapshot model
//!
//! One entry per pending spell, triggered ability, or activated ability, in
//! stack order. Choice payloads are opaque to the advisor and passed through
//! to the engine verbatim.

use crate::core::{ObjectId, PlayerId};
use serde::{Deserialize, Serialize};

/// A target reference carried by a stack entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StackTarget {
    /// A game object (permanent, spell, card)
    Object(ObjectId),
    /// A player
    Player(PlayerId),
}

/// One pending entry on the stack
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StackEntry {
    /// Object id of the spell or ability itself
    pub id: ObjectId,

    /// Entry kind as the engine reports it, e.g. "spell", "triggered"
    pub kind: String,

    pub controller: PlayerId,

    /// Object the ability came from, absent for plain spells
    #[serde(default)]
    pub source: Option<ObjectId>,

    #[serde(default)]
    pub targets: Vec<StackTarget>,

    /// Opaque choice context, forwarded to the engine untouched
    #[serde(default)]
    pub choices: serde_json::Value,
}
