//! Core snapshot types shared by every advisor component

pub mod entity;
pub mod snapshot;

pub use entity::{ObjectId, PlayerId};
pub use snapshot::{
    GameObjectSnapshot, GameSnapshot, PlayerSnapshot, SnapshotIndex, TurnSnapshot, Zone,
};
