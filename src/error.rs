//! Error types for MTG Advisor

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AdvisorError {
    #[error("Object not found in snapshot: {0}")]
    ObjectNotFound(u32),

    #[error("Player not found in snapshot: {0}")]
    PlayerNotFound(u32),

    #[error("Invalid snapshot payload: {0}")]
    SnapshotDecode(String),

    #[error("Invalid ability graph payload: {0}")]
    GraphDecode(String),
}

pub type Result<T> = std::result::Result<T, AdvisorError>;
