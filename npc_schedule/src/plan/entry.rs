//! Plan entries and the actions they run.

use game_rules::{Behaviour, ClockOffset, GridPos, Square, SquareId};
use serde::{Deserialize, Serialize};

use crate::config::PlannerConfig;
use crate::error::ActionError;
use crate::ports::{Pathfinder, PlanActor, SquareLookup};

/// Everything an action may consult besides the NPC itself.
pub struct ActionContext<'a> {
    pub squares: &'a dyn SquareLookup,
    pub pathfinder: &'a dyn Pathfinder,
    pub config: &'a PlannerConfig,
}

/// What a plan entry does when its time comes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PlanAction {
    /// Does nothing and always succeeds.
    Idle,
    /// Walk to just inside the front door of the house on `square`.
    VisitNeighbour { square: SquareId },
}

impl PlanAction {
    pub fn name(&self) -> &'static str {
        match self {
            PlanAction::Idle => "idle",
            PlanAction::VisitNeighbour { .. } => "visit_neighbour",
        }
    }

    /// Carry out the action on `npc`.
    pub fn perform(
        &self,
        npc: &mut dyn PlanActor,
        ctx: &ActionContext<'_>,
    ) -> Result<(), ActionError> {
        match self {
            PlanAction::Idle => Ok(()),
            PlanAction::VisitNeighbour { square } => visit_neighbour(*square, npc, ctx),
        }
    }
}

fn visit_neighbour(
    requested: SquareId,
    npc: &mut dyn PlanActor,
    ctx: &ActionContext<'_>,
) -> Result<(), ActionError> {
    let square = if ctx.config.party_at_my_place {
        ctx.squares.home_square().ok_or(ActionError::NoSquares)?
    } else {
        ctx.squares
            .square(requested)
            .ok_or(ActionError::UnknownSquare(requested))?
    };

    let target = door_approach(square).ok_or(ActionError::NoHouse(square.id))?;
    let from = npc.position();
    let path = ctx
        .pathfinder
        .find_path(from, target)
        .ok_or(ActionError::NoPath { from, to: target })?;

    npc.assign_path(path);
    npc.set_behaviour(Behaviour::VisitingHouse { square: square.id });
    Ok(())
}

/// The cell one row inside the front door of the square's house.
pub fn door_approach(square: &Square) -> Option<GridPos> {
    square.front_door().map(|door| door.offset(0, -1))
}

/// A scheduled action with an optional retry delay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanEntry {
    pub action: PlanAction,
    /// Delay after a failed attempt before trying again. `None` means a
    /// failed entry is not moved.
    #[serde(default)]
    pub reschedule: Option<ClockOffset>,
}

impl PlanEntry {
    pub fn new(action: PlanAction) -> Self {
        Self {
            action,
            reschedule: None,
        }
    }

    pub fn idle() -> Self {
        Self::new(PlanAction::Idle)
    }

    pub fn visit_neighbour(square: SquareId) -> Self {
        Self::new(PlanAction::VisitNeighbour { square })
    }

    /// Retry `delay` after the failed attempt.
    pub fn with_reschedule(mut self, delay: ClockOffset) -> Self {
        self.reschedule = Some(delay);
        self
    }

    pub fn should_reschedule(&self) -> bool {
        self.reschedule.is_some()
    }

    pub fn reschedule_delay(&self) -> Option<ClockOffset> {
        self.reschedule
    }
}
