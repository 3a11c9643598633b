//! Simple integer IDs for engine-owned game entities
//!
//! The authoritative engine assigns these; the advisor never mints its own.
//! Keeping them as distinct newtypes prevents mixing up object and player ids
//! in selection maps.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Id of a game object (card, token, spell on the stack)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ObjectId(u32);

impl ObjectId {
    pub fn new(id: u32) -> Self {
        ObjectId(id)
    }

    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Id of a player seat
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(u32);

impl PlayerId {
    pub fn new(id: u32) -> Self {
        PlayerId(id)
    }

    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_roundtrip() {
        let id = ObjectId::new(7);
        assert_eq!(id.as_u32(), 7);
        assert_eq!(id.to_string(), "7");

        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "7");
        let back: ObjectId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn test_ids_are_ordered() {
        let mut ids = vec![PlayerId::new(3), PlayerId::new(1), PlayerId::new(2)];
        ids.sort();
        assert_eq!(
            ids,
            vec![PlayerId::new(1), PlayerId::new(2), PlayerId::new(3)]
        );
    }
}
