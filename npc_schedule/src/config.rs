//! Planner settings and plan files.
//!
//! Both are TOML. Settings tune how the planner treats visits and failures:
//!
//! ```toml
//! party_at_my_place = false
//! drop_failed_without_retry = false
//! ```
//!
//! A plan file lists one NPC's day:
//!
//! ```toml
//! [[entries]]
//! at = "09:00"
//! action = { kind = "visit_neighbour", square = 2 }
//! retry_after = "0:30"
//! ```

use game_rules::{ClockOffset, ClockTime, EntityId};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::PlanError;
use crate::plan::{Plan, PlanAction, PlanEntry};

/// Planner-wide settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlannerConfig {
    /// Send every neighbour visit to the first square of the village.
    pub party_at_my_place: bool,
    /// Remove entries that fail and have no retry delay, instead of leaving
    /// them at their slot to fire again the next day.
    pub drop_failed_without_retry: bool,
}

impl PlannerConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, PlanError> {
        Ok(toml::from_str(text)?)
    }

    /// Load settings from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, PlanError> {
        Self::from_toml_str(&read_file(path.as_ref())?)
    }
}

/// One NPC's day plan as written in a plan file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlanFile {
    #[serde(default)]
    pub entries: Vec<PlanFileEntry>,
}

/// A single `[[entries]]` table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlanFileEntry {
    pub at: ClockTime,
    pub action: PlanAction,
    #[serde(default)]
    pub retry_after: Option<ClockOffset>,
}

impl PlanFile {
    pub fn from_toml_str(text: &str) -> Result<Self, PlanError> {
        Ok(toml::from_str(text)?)
    }

    /// Load a plan file from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, PlanError> {
        Self::from_toml_str(&read_file(path.as_ref())?)
    }

    /// Build the plan for `owner`. Two entries at the same time are an error.
    pub fn into_plan(self, owner: EntityId) -> Result<Plan, PlanError> {
        let mut plan = Plan::new(owner);
        for entry in self.entries {
            let mut planned = PlanEntry::new(entry.action);
            planned.reschedule = entry.retry_after;
            plan.schedule(entry.at, planned)?;
        }
        Ok(plan)
    }
}

fn read_file(path: &Path) -> Result<String, PlanError> {
    fs::read_to_string(path).map_err(|source| PlanError::Io {
        path: path.to_path_buf(),
        source,
    })
}
