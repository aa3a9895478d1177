//! Component definitions for entities.

use serde::{Deserialize, Serialize};

/// A cell on the world grid. `y` is the row, `x` the column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct GridPos {
    pub x: i32,
    pub y: i32,
}

impl GridPos {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Shift this position by a column/row delta.
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

impl std::fmt::Display for GridPos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A walk the NPC still has to take, front step first.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Path {
    steps: Vec<GridPos>,
}

impl Path {
    pub fn new(steps: impl IntoIterator<Item = GridPos>) -> Self {
        Self {
            steps: steps.into_iter().collect(),
        }
    }

    /// The final cell of the walk.
    pub fn destination(&self) -> Option<GridPos> {
        self.steps.last().copied()
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}
