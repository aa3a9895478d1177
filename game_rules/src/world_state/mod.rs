//! World state management - the central structure holding all game data.

mod clock;
mod square;

pub use clock::*;
pub use square::*;

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::entities::{EntityId, Npc};

/// World time tracking.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default)]
pub struct WorldTime {
    pub day: u32,
    pub hour: u8,
    pub minute: u8,
    pub season: Season,
}

impl WorldTime {
    /// Create a new world time.
    pub fn new(day: u32, hour: u8, minute: u8, season: Season) -> Self {
        Self {
            day,
            hour,
            minute,
            season,
        }
    }

    /// The time-of-day slot. Out-of-range fields wrap.
    pub fn clock(&self) -> ClockTime {
        ClockTime::from_minutes_of_day(
            u32::from(self.hour) * MINUTES_PER_HOUR + u32::from(self.minute),
        )
    }
}

/// Seasons of the year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Season {
    #[default]
    Spring,
    Summer,
    Autumn,
    Winter,
}

/// The complete state of the game world at any point in time.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct WorldState {
    /// Global time tracking.
    pub time: WorldTime,

    /// All NPCs in the world.
    pub npcs: HashMap<EntityId, Npc>,

    /// Village squares, indexed by `SquareId`.
    pub squares: Vec<Square>,
}

impl WorldState {
    /// Create a new empty world state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get NPC by ID.
    pub fn get_npc(&self, id: EntityId) -> Option<&Npc> {
        self.npcs.get(&id)
    }

    /// Get mutable NPC by ID.
    pub fn get_npc_mut(&mut self, id: EntityId) -> Option<&mut Npc> {
        self.npcs.get_mut(&id)
    }

    /// Add an NPC to the world.
    pub fn add_npc(&mut self, npc: Npc) -> EntityId {
        let id = npc.id;
        self.npcs.insert(id, npc);
        id
    }

    /// Append a square. Its id is reassigned to its index.
    pub fn add_square(&mut self, mut square: Square) -> SquareId {
        let id = SquareId(self.squares.len());
        square.id = id;
        self.squares.push(square);
        id
    }

    /// Get square by ID.
    pub fn square(&self, id: SquareId) -> Option<&Square> {
        self.squares.get(id.0)
    }

    /// Advance time by given minutes.
    pub fn advance_time(&mut self, minutes: u32) {
        let total_minutes = self.time.minute as u32 + minutes;
        self.time.minute = (total_minutes % 60) as u8;

        let hours_passed = total_minutes / 60;
        let total_hours = self.time.hour as u32 + hours_passed;
        self.time.hour = (total_hours % 24) as u8;

        let days_passed = total_hours / 24;
        self.time.day += days_passed;

        // Update season every 90 days
        let season_day = self.time.day % 360;
        self.time.season = match season_day {
            0..=89 => Season::Spring,
            90..=179 => Season::Summer,
            180..=269 => Season::Autumn,
            _ => Season::Winter,
        };
    }
}
