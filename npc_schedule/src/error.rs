//! Error types for plan actions and plan editing.

use game_rules::{ClockError, ClockTime, GridPos, SquareId};
use std::path::PathBuf;
use thiserror::Error;

/// Why a scheduled action could not be carried out.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActionError {
    #[error("square {0} does not exist")]
    UnknownSquare(SquareId),
    #[error("square {0} has no house")]
    NoHouse(SquareId),
    #[error("no path from {from} to {to}")]
    NoPath { from: GridPos, to: GridPos },
    #[error("the world has no squares")]
    NoSquares,
}

/// Errors from building, editing or loading plans.
#[derive(Debug, Error)]
pub enum PlanError {
    #[error("plan slot {0} is already taken")]
    SlotOccupied(ClockTime),
    #[error(transparent)]
    Clock(#[from] ClockError),
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid TOML: {0}")]
    Toml(#[from] toml::de::Error),
}
