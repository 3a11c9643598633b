//! Per-card ability graph reading: legal-target hints and enter-choice
//! requirements derived from the declarative node structure the engine
//! executes

pub mod enter_choice;
pub mod graph;
pub mod target_hints;

pub use enter_choice::{
    build_choice_defaults, extract_enter_choices, validate_choices, ChoiceType, EnterChoiceConfig,
};
pub use graph::{AbilityGraph, AbilityNode, EffectPayload};
pub use target_hints::{derive_target_hints, ObjectCategory, TargetHints};
