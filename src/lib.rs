//! MTG Advisor - client-side rules assistant for a trading-card game UI
//!
//! Computes default combat-damage distributions, derives legal-target hints
//! from declarative ability graphs, and tracks player-facing selection state.
//! Everything here is advisory: an external authoritative engine owns the
//! canonical game state and final rules enforcement, and may reject or clamp
//! anything this crate proposes.

pub mod ability;
pub mod combat;
pub mod core;
pub mod error;
pub mod stack;

pub use error::{AdvisorError, Result};
