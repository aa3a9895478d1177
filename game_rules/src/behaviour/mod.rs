//! Behaviour tags: which behaviour routine an NPC is currently running.
//!
//! The routines themselves belong to the host game. This crate only records
//! which one is active so schedulers and renderers agree on it.

use serde::{Deserialize, Serialize};

use crate::world_state::SquareId;

/// The behaviour an NPC is currently running.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Behaviour {
    #[default]
    Idle,
    /// Heading to, or spending time inside, the house on a square.
    VisitingHouse { square: SquareId },
}

impl Behaviour {
    /// Short name for logs and debug overlays.
    pub fn name(&self) -> &'static str {
        match self {
            Behaviour::Idle => "idle",
            Behaviour::VisitingHouse { .. } => "visiting_house",
        }
    }
}

impl std::fmt::Display for Behaviour {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Behaviour::VisitingHouse { square } => write!(f, "visiting_house:{}", square),
            other => write!(f, "{}", other.name()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_idle() {
        assert_eq!(Behaviour::default(), Behaviour::Idle);
    }

    #[test]
    fn test_display() {
        let visiting = Behaviour::VisitingHouse {
            square: SquareId(3),
        };
        assert_eq!(visiting.to_string(), "visiting_house:3");
        assert_eq!(Behaviour::Idle.to_string(), "idle");
    }
}
