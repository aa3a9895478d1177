//! Plan module - an NPC's day as a map from clock minutes to entries.
//!
//! The per-tick check works on exact minutes: an entry fires only when the
//! clock reads its slot. After it runs:
//! - **Success**: the entry is removed
//! - **Failure with a retry delay**: the entry moves to `now + delay`
//! - **Failure without one**: the entry stays put and comes round again the
//!   next day, unless the planner is configured to drop it

mod entry;

pub use entry::*;

use game_rules::{ClockTime, EntityId, MINUTES_PER_DAY};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{debug, info, warn};

use crate::error::{ActionError, PlanError};
use crate::ports::PlanActor;

/// What happened to a plan during one clock tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TickOutcome {
    /// No entry was due.
    Nothing,
    Completed {
        at: ClockTime,
    },
    Rescheduled {
        from: ClockTime,
        to: ClockTime,
        error: ActionError,
    },
    /// Failed without a retry delay and left at its slot.
    Retained {
        at: ClockTime,
        error: ActionError,
    },
    /// Failed without a retry delay and removed.
    Dropped {
        at: ClockTime,
        error: ActionError,
    },
}

impl TickOutcome {
    /// The action error, if the due entry failed.
    pub fn error(&self) -> Option<&ActionError> {
        match self {
            TickOutcome::Rescheduled { error, .. }
            | TickOutcome::Retained { error, .. }
            | TickOutcome::Dropped { error, .. } => Some(error),
            TickOutcome::Nothing | TickOutcome::Completed { .. } => None,
        }
    }
}

/// One NPC's day plan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Plan {
    owner: EntityId,
    entries: BTreeMap<ClockTime, PlanEntry>,
}

impl Plan {
    /// Create an empty plan for `owner`.
    pub fn new(owner: EntityId) -> Self {
        Self {
            owner,
            entries: BTreeMap::new(),
        }
    }

    pub fn owner(&self) -> EntityId {
        self.owner
    }

    /// Put `entry` at `at`, returning whatever was there before.
    pub fn add_entry(&mut self, at: ClockTime, entry: PlanEntry) -> Option<PlanEntry> {
        let replaced = self.entries.insert(at, entry);
        if replaced.is_some() {
            debug!(npc = %self.owner, %at, "replaced plan entry");
        }
        replaced
    }

    /// Like [`Plan::add_entry`], taking a raw hour and minute.
    pub fn add_entry_at(
        &mut self,
        hour: u8,
        minute: u8,
        entry: PlanEntry,
    ) -> Result<Option<PlanEntry>, PlanError> {
        let at = ClockTime::new(hour, minute)?;
        Ok(self.add_entry(at, entry))
    }

    /// Put `entry` at `at` only if the slot is free.
    pub fn schedule(&mut self, at: ClockTime, entry: PlanEntry) -> Result<(), PlanError> {
        if self.entries.contains_key(&at) {
            return Err(PlanError::SlotOccupied(at));
        }
        self.entries.insert(at, entry);
        Ok(())
    }

    pub fn remove_entry(&mut self, at: ClockTime) -> Option<PlanEntry> {
        self.entries.remove(&at)
    }

    pub fn entry_at(&self, at: ClockTime) -> Option<&PlanEntry> {
        self.entries.get(&at)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in clock order, from midnight.
    pub fn iter(&self) -> impl Iterator<Item = (ClockTime, &PlanEntry)> {
        self.entries.iter().map(|(at, entry)| (*at, entry))
    }

    /// The next entry at or after `now`, wrapping to the start of the day.
    pub fn next_due(&self, now: ClockTime) -> Option<(ClockTime, &PlanEntry)> {
        self.entries
            .range(now..)
            .next()
            .or_else(|| self.entries.iter().next())
            .map(|(at, entry)| (*at, entry))
    }

    /// Run the entry due at `now`, if any, and update the plan.
    pub fn check_and_execute(
        &mut self,
        now: ClockTime,
        npc: &mut dyn PlanActor,
        ctx: &ActionContext<'_>,
    ) -> TickOutcome {
        let Some(entry) = self.entries.remove(&now) else {
            return TickOutcome::Nothing;
        };
        let npc_id = npc.id();

        let error = match entry.action.perform(npc, ctx) {
            Ok(()) => {
                debug!(
                    npc = %npc_id,
                    at = %now,
                    action = entry.action.name(),
                    "plan entry completed"
                );
                return TickOutcome::Completed { at: now };
            }
            Err(error) => error,
        };

        match entry.reschedule {
            Some(delay) => {
                let wanted = now.advanced_by(delay);
                let to = self.first_free_slot(wanted);
                if to != wanted {
                    warn!(
                        npc = %npc_id,
                        %wanted,
                        %to,
                        "retry slot taken, using next free minute"
                    );
                }
                info!(
                    npc = %npc_id,
                    from = %now,
                    %to,
                    action = entry.action.name(),
                    %error,
                    "plan entry failed, rescheduled"
                );
                self.entries.insert(to, entry);
                TickOutcome::Rescheduled {
                    from: now,
                    to,
                    error,
                }
            }
            None if ctx.config.drop_failed_without_retry => {
                warn!(
                    npc = %npc_id,
                    at = %now,
                    action = entry.action.name(),
                    %error,
                    "plan entry failed, dropped"
                );
                TickOutcome::Dropped { at: now, error }
            }
            None => {
                warn!(
                    npc = %npc_id,
                    at = %now,
                    action = entry.action.name(),
                    %error,
                    "plan entry failed, left in place"
                );
                self.entries.insert(now, entry);
                TickOutcome::Retained { at: now, error }
            }
        }
    }

    fn first_free_slot(&self, start: ClockTime) -> ClockTime {
        let mut slot = start;
        for _ in 0..MINUTES_PER_DAY {
            if !self.entries.contains_key(&slot) {
                return slot;
            }
            slot = slot.next_minute();
        }
        start
    }
}
