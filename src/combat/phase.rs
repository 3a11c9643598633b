//! Turn steps as reported by the engine

use serde::{Deserialize, Serialize};

/// Steps of a turn, in the engine's wire spelling
///
/// The advisor never advances steps itself; it only reacts to the step the
/// engine snapshot reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    Untap,
    Upkeep,
    Draw,
    Main1,
    BeginCombat,
    DeclareAttackers,
    DeclareBlockers,
    CombatDamage,
    EndCombat,
    Main2,
    End,
    Cleanup,
}
