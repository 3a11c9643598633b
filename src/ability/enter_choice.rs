//! "As this enters" choice requirements
//!
//! Extracts enter-choice configs from the ability graph, pre-fills sensible
//! defaults, and validates the player's recorded values before the action is
//! submitted. A missing required choice blocks submission with a readable
//! message; it is never silently defaulted away.

use crate::ability::graph::AbilityGraph;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;

/// What kind of value an enter-choice asks for
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ChoiceType {
    Color,
    CardType,
    Target,
    /// Free-text tag the advisor passes through without interpreting
    Other(String),
}

impl ChoiceType {
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "color" => ChoiceType::Color,
            "card_type" => ChoiceType::CardType,
            "target" => ChoiceType::Target,
            other => ChoiceType::Other(other.to_string()),
        }
    }

    /// Wire tag, as found in the graph payload
    pub fn tag(&self) -> &str {
        match self {
            ChoiceType::Color => "color",
            ChoiceType::CardType => "card_type",
            ChoiceType::Target => "target",
            ChoiceType::Other(tag) => tag,
        }
    }

    /// Human-readable label used in validation messages
    pub fn label(&self) -> Cow<'_, str> {
        match self {
            ChoiceType::CardType => Cow::Borrowed("card type"),
            other => Cow::Borrowed(other.tag()),
        }
    }

    /// Pre-fill when the card fixes nothing and the player chose nothing yet
    fn default_value(&self) -> &'static str {
        match self {
            ChoiceType::Color => "W",
            ChoiceType::CardType => "creature",
            _ => "",
        }
    }
}

impl From<String> for ChoiceType {
    fn from(tag: String) -> Self {
        ChoiceType::from_tag(&tag)
    }
}

impl From<ChoiceType> for String {
    fn from(choice_type: ChoiceType) -> Self {
        choice_type.tag().to_string()
    }
}

impl fmt::Display for ChoiceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// One required "as this enters" choice
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnterChoiceConfig {
    pub choice_type: ChoiceType,

    /// Fixed value dictated by the card; such a config never needs input
    pub value: Option<String>,
}

/// Collect enter-choice configs from a card's ability graph
///
/// Effect nodes carry the payload directly; activated nodes one level inside
/// their effect field. At most one config per choice type: the first fixed
/// value seen for a type wins and later occurrences never override it, though
/// a later fixed value does fill a config that has none yet.
pub fn extract_enter_choices(graph: &AbilityGraph) -> Vec<EnterChoiceConfig> {
    let mut configs: Vec<EnterChoiceConfig> = Vec::new();
    for payload in graph.effect_payloads() {
        let Some(choice) = payload.enter_choice.as_ref() else {
            continue;
        };
        let choice_type = ChoiceType::from_tag(&choice.choice_type);
        match configs.iter_mut().find(|c| c.choice_type == choice_type) {
            Some(existing) => {
                if existing.value.is_none() {
                    existing.value = choice.value.clone();
                }
            }
            None => configs.push(EnterChoiceConfig {
                choice_type,
                value: choice.value.clone(),
            }),
        }
    }
    configs
}

/// Pre-fill one value per config, keyed by the choice-type tag
///
/// A fixed value wins; otherwise a non-empty prior selection is reused;
/// otherwise the type's default ("W" for color, "creature" for card type,
/// empty for everything else).
pub fn build_choice_defaults(
    configs: &[EnterChoiceConfig],
    prior: &BTreeMap<String, String>,
) -> BTreeMap<String, String> {
    configs
        .iter()
        .map(|config| {
            let tag = config.choice_type.tag().to_string();
            let value = config
                .value
                .clone()
                .or_else(|| prior.get(&tag).filter(|v| !v.is_empty()).cloned())
                .unwrap_or_else(|| config.choice_type.default_value().to_string());
            (tag, value)
        })
        .collect()
}

/// Validate recorded choices; one message per unmet requirement
///
/// A config with a fixed value never errors. Everything else needs a
/// non-empty recorded value, or it yields "missing <label> choice".
pub fn validate_choices(
    configs: &[EnterChoiceConfig],
    recorded: &BTreeMap<String, String>,
) -> Vec<String> {
    configs
        .iter()
        .filter(|config| config.value.is_none())
        .filter(|config| {
            recorded
                .get(config.choice_type.tag())
                .map_or(true, |v| v.is_empty())
        })
        .map(|config| format!("missing {} choice", config.choice_type.label()))
        .collect()
}
