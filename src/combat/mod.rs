//! Combat assistance: damage-pass eligibility, lethal calculation, default
//! damage distributions, and the player's combat selection state

pub mod assignment;
pub mod eligibility;
pub mod lethal;
pub mod phase;
pub mod selection;
pub mod state;

pub use assignment::{build_default_assignment, DamageAssignment, DamageRecipient};
pub use eligibility::{is_active_in_pass, DamagePass};
pub use lethal::lethal_requirement;
pub use phase::Step;
pub use selection::CombatSelection;
pub use state::CombatState;
