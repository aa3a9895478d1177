//! Drives every NPC's plan against the world once per clock update.

use game_rules::{EntityId, WorldState};
use std::collections::HashMap;
use tracing::warn;

use crate::config::PlannerConfig;
use crate::plan::{ActionContext, Plan, TickOutcome};
use crate::ports::{GameClock, Pathfinder};

/// Holds one plan per NPC and runs them each tick.
pub struct DayPlanner {
    config: PlannerConfig,
    plans: HashMap<EntityId, Plan>,
}

impl DayPlanner {
    /// Create a planner with the given configuration.
    pub fn new(config: PlannerConfig) -> Self {
        Self {
            config,
            plans: HashMap::new(),
        }
    }

    /// Create a planner with default configuration.
    pub fn with_defaults() -> Self {
        Self::new(PlannerConfig::default())
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    pub fn plan(&self, owner: EntityId) -> Option<&Plan> {
        self.plans.get(&owner)
    }

    /// The plan for `owner`, created empty if it does not exist yet.
    pub fn plan_mut(&mut self, owner: EntityId) -> &mut Plan {
        self.plans.entry(owner).or_insert_with(|| Plan::new(owner))
    }

    /// Install a plan, replacing any previous plan for the same owner.
    pub fn insert_plan(&mut self, plan: Plan) -> Option<Plan> {
        self.plans.insert(plan.owner(), plan)
    }

    pub fn remove_plan(&mut self, owner: EntityId) -> Option<Plan> {
        self.plans.remove(&owner)
    }

    pub fn plan_count(&self) -> usize {
        self.plans.len()
    }

    /// Run every plan for the world's current minute.
    ///
    /// Returns the NPCs whose plan had an entry due, with what happened to it,
    /// ordered by NPC id. Plans whose owner is not in the world are skipped.
    pub fn tick(
        &mut self,
        world: &mut WorldState,
        pathfinder: &dyn Pathfinder,
    ) -> Vec<(EntityId, TickOutcome)> {
        let now = world.now();
        let WorldState { npcs, squares, .. } = world;
        let ctx = ActionContext {
            squares: &*squares,
            pathfinder,
            config: &self.config,
        };

        let mut outcomes = Vec::new();
        for (owner, plan) in self.plans.iter_mut() {
            let Some(npc) = npcs.get_mut(owner) else {
                warn!(npc = %owner, "plan owner is not in the world, skipping");
                continue;
            };

            match plan.check_and_execute(now, npc, &ctx) {
                TickOutcome::Nothing => {}
                outcome => outcomes.push((*owner, outcome)),
            }
        }
        outcomes.sort_by_key(|(owner, _)| *owner);
        outcomes
    }
}

impl Default for DayPlanner {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_rules::{ClockTime, GridPos, House, Npc, Path, Season, Square, SquareId, WorldTime};

    use crate::plan::PlanEntry;

    fn at(hour: u8, minute: u8) -> ClockTime {
        ClockTime::new(hour, minute).unwrap()
    }

    fn straight(from: GridPos, to: GridPos) -> Option<Path> {
        Some(Path::new([from, to]))
    }

    fn world_at(hour: u8, minute: u8) -> WorldState {
        let mut world = WorldState::new();
        world.time = WorldTime::new(1, hour, minute, Season::Spring);
        let house = House::with_front_door(2, 2);
        world.add_square(Square::new(SquareId(0), 0, 0).with_house(0, 0, house));
        world
    }

    #[test]
    fn test_plan_mut_creates_plan() {
        let mut planner = DayPlanner::with_defaults();
        let owner = EntityId::new();

        planner.plan_mut(owner).add_entry(at(9, 0), PlanEntry::idle());

        assert_eq!(planner.plan_count(), 1);
        assert_eq!(planner.plan(owner).unwrap().len(), 1);
        assert!(planner.remove_plan(owner).is_some());
        assert!(planner.plan(owner).is_none());
    }

    #[test]
    fn test_tick_fires_due_entries_only() {
        let mut world = world_at(9, 0);
        let early = world.add_npc(Npc::new("Early", GridPos::new(5, 5)));
        let late = world.add_npc(Npc::new("Late", GridPos::new(6, 6)));

        let visit = PlanEntry::visit_neighbour(SquareId(0));
        let mut planner = DayPlanner::with_defaults();
        planner.plan_mut(early).add_entry(at(9, 0), visit.clone());
        planner.plan_mut(late).add_entry(at(10, 0), visit);

        let outcomes = planner.tick(&mut world, &straight);

        assert_eq!(outcomes.len(), 1);
        assert_eq!(outcomes[0].0, early);
        assert!(matches!(outcomes[0].1, TickOutcome::Completed { .. }));

        let walked = world.get_npc(early).unwrap().path.destination();
        assert_eq!(walked, Some(GridPos::new(2, 1)));
        assert!(world.get_npc(late).unwrap().path.is_empty());
        assert!(planner.plan(early).unwrap().is_empty());
        assert_eq!(planner.plan(late).unwrap().len(), 1);
    }

    #[test]
    fn test_tick_skips_missing_owner() {
        let mut world = world_at(9, 0);
        let mut planner = DayPlanner::with_defaults();
        let ghost = EntityId::new();
        planner.plan_mut(ghost).add_entry(at(9, 0), PlanEntry::idle());

        let outcomes = planner.tick(&mut world, &straight);

        assert!(outcomes.is_empty());
        assert_eq!(planner.plan(ghost).unwrap().len(), 1);
    }

    #[test]
    fn test_tick_orders_outcomes_by_npc() {
        let mut world = world_at(9, 0);
        let mut planner = DayPlanner::with_defaults();
        for name in ["Ada", "Bo", "Cy", "Dag", "Eli", "Finn", "Gus", "Hal"] {
            let id = world.add_npc(Npc::new(name, GridPos::new(1, 1)));
            planner.plan_mut(id).add_entry(at(9, 0), PlanEntry::idle());
        }

        let outcomes = planner.tick(&mut world, &straight);

        assert_eq!(outcomes.len(), 8);
        let ids: Vec<EntityId> = outcomes.iter().map(|(id, _)| *id).collect();
        let mut sorted = ids.clone();
        sorted.sort();
        assert_eq!(ids, sorted);
    }
}
