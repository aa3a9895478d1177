//! NPC definitions.

use serde::{Deserialize, Serialize};

use super::{EntityId, GridPos, Path};
use crate::behaviour::Behaviour;

/// A villager: where they stand, where they are walking, and what they are doing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Npc {
    pub id: EntityId,
    pub name: String,
    pub position: GridPos,
    pub path: Path,
    pub current_behaviour: Behaviour,
}

impl Npc {
    /// Create a new NPC with the given name standing at `position`.
    pub fn new(name: impl Into<String>, position: GridPos) -> Self {
        Self {
            id: EntityId::new(),
            name: name.into(),
            position,
            path: Path::default(),
            current_behaviour: Behaviour::Idle,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_npc() {
        let npc = Npc::new("Marta", GridPos::new(1, 2));
        assert_eq!(npc.name, "Marta");
        assert_eq!(npc.position, GridPos::new(1, 2));
        assert_eq!(npc.current_behaviour, Behaviour::Idle);
        assert!(npc.path.is_empty());
    }

    #[test]
    fn test_ids_are_unique() {
        let a = Npc::new("Oskar", GridPos::default());
        let b = Npc::new("Oskar", GridPos::default());
        assert_ne!(a.id, b.id);
    }
}
