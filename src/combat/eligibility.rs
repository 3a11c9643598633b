//! Damage-pass eligibility for combat creatures

use crate::core::snapshot::{keywords, GameObjectSnapshot};
use serde::{Deserialize, Serialize};

/// Which combat-damage pass is being assigned
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DamagePass {
    FirstStrike,
    Regular,
}

/// Is this creature active in the given damage pass?
///
/// No pass means a combined single pass where every creature deals damage.
/// First-strike pass: only creatures with first or double strike. Regular
/// pass: everything except creatures with first strike alone (double strike
/// deals damage in both passes).
pub fn is_active_in_pass(object: &GameObjectSnapshot, pass: Option<DamagePass>) -> bool {
    let Some(pass) = pass else {
        return true;
    };
    let first = object.has_keyword(keywords::FIRST_STRIKE);
    let double = object.has_keyword(keywords::DOUBLE_STRIKE);
    match pass {
        DamagePass::FirstStrike => first || double,
        DamagePass::Regular => !(first && !double),
    }
}
