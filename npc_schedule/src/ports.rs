//! Collaborator traits.
//!
//! The plan only needs four things from the host game: the time of day, an
//! NPC it can hand a path and a behaviour to, a pathfinder, and a way to look
//! up squares. Each is a trait here, implemented for the `game_rules` types.

use game_rules::{
    Behaviour, ClockTime, EntityId, GridPos, Npc, Path, Square, SquareId, WorldState, WorldTime,
};

/// Source of the current time of day.
pub trait GameClock {
    fn now(&self) -> ClockTime;
}

impl GameClock for ClockTime {
    fn now(&self) -> ClockTime {
        *self
    }
}

impl GameClock for WorldTime {
    fn now(&self) -> ClockTime {
        self.clock()
    }
}

impl GameClock for WorldState {
    fn now(&self) -> ClockTime {
        self.time.clock()
    }
}

/// The NPC a plan acts on.
pub trait PlanActor {
    fn id(&self) -> EntityId;
    fn position(&self) -> GridPos;
    /// Replace whatever path the NPC was following.
    fn assign_path(&mut self, path: Path);
    fn set_behaviour(&mut self, behaviour: Behaviour);
}

impl PlanActor for Npc {
    fn id(&self) -> EntityId {
        self.id
    }

    fn position(&self) -> GridPos {
        self.position
    }

    fn assign_path(&mut self, path: Path) {
        self.path = path;
    }

    fn set_behaviour(&mut self, behaviour: Behaviour) {
        self.current_behaviour = behaviour;
    }
}

/// Finds a walkable route between two cells.
pub trait Pathfinder {
    /// `None` when the target cannot be reached.
    fn find_path(&self, from: GridPos, to: GridPos) -> Option<Path>;
}

impl<F> Pathfinder for F
where
    F: Fn(GridPos, GridPos) -> Option<Path>,
{
    fn find_path(&self, from: GridPos, to: GridPos) -> Option<Path> {
        self(from, to)
    }
}

/// Access to the village squares.
pub trait SquareLookup {
    fn square(&self, id: SquareId) -> Option<&Square>;

    /// The square every visit goes to when parties are held at one place.
    fn home_square(&self) -> Option<&Square>;
}

impl SquareLookup for Vec<Square> {
    fn square(&self, id: SquareId) -> Option<&Square> {
        self.get(id.0)
    }

    fn home_square(&self) -> Option<&Square> {
        self.first()
    }
}

impl SquareLookup for WorldState {
    fn square(&self, id: SquareId) -> Option<&Square> {
        self.squares.square(id)
    }

    fn home_square(&self) -> Option<&Square> {
        self.squares.home_square()
    }
}
