//! Squares of the village grid and the houses standing on them.

use serde::{Deserialize, Serialize};

use crate::entities::GridPos;

/// Index of a square in the world's square list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SquareId(pub usize);

impl std::fmt::Display for SquareId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Front door cell relative to the house origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DoorPos {
    pub row: i32,
    pub col: i32,
}

/// A house on a square.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct House {
    pub front_door: DoorPos,
}

impl House {
    pub fn with_front_door(row: i32, col: i32) -> Self {
        Self {
            front_door: DoorPos { row, col },
        }
    }
}

/// A plot of the village grid, anchored at (`x`, `y`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Square {
    pub id: SquareId,
    pub x: i32,
    pub y: i32,
    /// House origin relative to the square origin.
    pub house_x_offset: i32,
    pub house_y_offset: i32,
    pub house: Option<House>,
}

impl Square {
    /// Create an empty square.
    pub fn new(id: SquareId, x: i32, y: i32) -> Self {
        Self {
            id,
            x,
            y,
            house_x_offset: 0,
            house_y_offset: 0,
            house: None,
        }
    }

    /// Place a house on this square with its origin at the given offset.
    pub fn with_house(mut self, x_offset: i32, y_offset: i32, house: House) -> Self {
        self.house_x_offset = x_offset;
        self.house_y_offset = y_offset;
        self.house = Some(house);
        self
    }

    /// World cell of the house's front door.
    pub fn front_door(&self) -> Option<GridPos> {
        self.house.as_ref().map(|house| {
            GridPos::new(
                self.x + self.house_x_offset + house.front_door.col,
                self.y + self.house_y_offset + house.front_door.row,
            )
        })
    }
}
