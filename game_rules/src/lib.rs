//! # Game Rules
//!
//! World data shared by the hamlet simulation: NPC records, the squares and
//! houses they live in, and the world clock. This crate holds state only; the
//! day-plan logic that drives NPCs lives in `npc_schedule`.

pub mod behaviour;
pub mod entities;
pub mod world_state;

pub use behaviour::*;
pub use entities::*;
pub use world_state::*;
