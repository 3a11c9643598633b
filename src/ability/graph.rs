//! Typed model of a card's ability graph
//!
//! The engine describes each card as a list of tagged nodes. Only two shapes
//! carry data the advisor reads: effect nodes, and activated nodes wrapping
//! an effect payload one level down. Every other tag decodes to `Other` and
//! is skipped by traversal, so authoring-side additions never break the
//! client.

use crate::error::{AdvisorError, Result};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// One node of the ability graph, by its `kind` tag
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AbilityNode {
    Effect(EffectPayload),
    Activated(ActivatedPayload),
    #[serde(other)]
    Other,
}

/// Effect-node data the advisor reads; unknown fields are ignored
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EffectPayload {
    /// Normalized target descriptor, e.g. "target creature", "any"
    #[serde(default)]
    pub target: Option<String>,

    /// Optional target-count limit; the engine encodes this as a JSON number
    /// or a numeric string, so it is kept raw and parsed on use
    #[serde(default)]
    pub target_count: Option<serde_json::Value>,

    /// "As this enters" choice requirement, if any
    #[serde(default)]
    pub enter_choice: Option<EnterChoicePayload>,
}

/// Activated-node wrapper: its effect payload sits one level down
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ActivatedPayload {
    #[serde(default)]
    pub effect: Option<EffectPayload>,
}

/// Raw enter-choice requirement as authored on the card
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnterChoicePayload {
    /// Choice-type tag: "color", "card_type", "target", or free text
    #[serde(rename = "type")]
    pub choice_type: String,

    /// Fixed value, when the card dictates the choice
    #[serde(default)]
    pub value: Option<String>,
}

/// A card's full ability graph
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AbilityGraph {
    #[serde(default)]
    pub nodes: Vec<AbilityNode>,
}

impl AbilityGraph {
    /// Decode a graph from the engine's JSON payload
    pub fn from_json(value: serde_json::Value) -> Result<Self> {
        serde_json::from_value(value).map_err(|e| AdvisorError::GraphDecode(e.to_string()))
    }

    /// Decode leniently: a malformed graph is treated as absent
    ///
    /// Target hints and enter-choice extraction both recover from a missing
    /// graph with their permissive/empty defaults, so the UI keeps working.
    pub fn from_json_lenient(value: serde_json::Value) -> Option<Self> {
        match Self::from_json(value) {
            Ok(graph) => Some(graph),
            Err(e) => {
                warn!(error = %e, "ignoring malformed ability graph");
                None
            }
        }
    }

    /// Effect payloads in node order: effect nodes directly, activated nodes
    /// through their nested effect field
    pub fn effect_payloads(&self) -> impl Iterator<Item = &EffectPayload> {
        self.nodes.iter().filter_map(|node| match node {
            AbilityNode::Effect(payload) => Some(payload),
            AbilityNode::Activated(activated) => activated.effect.as_ref(),
            AbilityNode::Other => None,
        })
    }

    /// Effect payloads of effect-tagged nodes only
    pub fn direct_effect_payloads(&self) -> impl Iterator<Item = &EffectPayload> {
        self.nodes.iter().filter_map(|node| match node {
            AbilityNode::Effect(payload) => Some(payload),
            _ => None,
        })
    }
}
