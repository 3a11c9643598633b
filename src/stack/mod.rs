//! Stack-facing assistance: identity hashing of stack entries and tracking of
//! replacement/prevention ordering conflicts

pub mod conflict_hash;
pub mod entry;
pub mod replacement;

pub use conflict_hash::conflict_hash;
pub use entry::{StackEntry, StackTarget};
pub use replacement::{
    ConflictResolution, ReplacementCandidate, ReplacementConflict, ReplacementResolver,
};
