//! # NPC Schedule
//!
//! Day plans for village NPCs. Each NPC owns a [`Plan`] mapping wall-clock
//! minutes to [`PlanEntry`] actions. Once per clock update the plan checks the
//! current minute, performs the entry due there, and either clears it, moves it
//! a fixed delay later, or leaves it where it was.
//!
//! ## Core Components
//!
//! - **plan**: the time-keyed entry map and the per-tick check
//! - **planner**: drives every NPC's plan against a `WorldState`
//! - **ports**: traits for the clock, NPC, pathfinder and square lookup
//! - **config**: TOML planner settings and plan files
//!
//! Pathfinding, house layout, behaviour routines and the clock itself belong
//! to the host game and are only reached through [`ports`].

pub mod config;
pub mod error;
pub mod plan;
pub mod planner;
pub mod ports;

pub use config::*;
pub use error::*;
pub use plan::*;
pub use planner::*;
pub use ports::*;
