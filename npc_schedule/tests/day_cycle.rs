//! Runs whole game days through the planner, minute by minute.

use std::cell::Cell;

use game_rules::{
    Behaviour, ClockOffset, ClockTime, EntityId, GridPos, House, Npc, Path, Season, Square,
    SquareId, WorldState, WorldTime, MINUTES_PER_DAY,
};
use npc_schedule::{ActionError, DayPlanner, PlanEntry, PlanFile, PlannerConfig, TickOutcome};

const PARTY_CONFIG: &str = r#"
    party_at_my_place = true
    drop_failed_without_retry = true
"#;

const DORA_PLAN: &str = r#"
    [[entries]]
    at = "07:30"
    action = { kind = "visit_neighbour", square = 2 }

    [[entries]]
    at = "07:45"
    action = { kind = "idle" }
"#;

fn at(hour: u8, minute: u8) -> ClockTime {
    ClockTime::new(hour, minute).unwrap()
}

fn visiting(square: usize) -> Behaviour {
    Behaviour::VisitingHouse {
        square: SquareId(square),
    }
}

fn village(start_hour: u8) -> WorldState {
    let mut world = WorldState::new();
    world.time = WorldTime::new(1, start_hour, 0, Season::Spring);
    for (id, x) in [(0, 0), (1, 16)] {
        let house = House::with_front_door(4, 3);
        world.add_square(Square::new(SquareId(id), x, 0).with_house(2, 2, house));
    }
    world.add_square(Square::new(SquareId(2), 32, 0));
    world
}

fn outcomes_for(log: &[(EntityId, TickOutcome)], npc: EntityId) -> Vec<TickOutcome> {
    log.iter()
        .filter(|(id, _)| *id == npc)
        .map(|(_, outcome)| outcome.clone())
        .collect()
}

#[test]
fn test_full_day() {
    let mut world = village(6);
    let anna = world.add_npc(Npc::new("Anna", GridPos::new(1, 1)));
    let bert = world.add_npc(Npc::new("Bert", GridPos::new(2, 2)));
    let carl = world.add_npc(Npc::new("Carl", GridPos::new(3, 3)));

    let anna_visit = PlanEntry::visit_neighbour(SquareId(1));
    let anna_visit = anna_visit.with_reschedule(ClockOffset::minutes(30));
    let bert_visit = PlanEntry::visit_neighbour(SquareId(2));

    let mut planner = DayPlanner::with_defaults();
    planner.plan_mut(anna).add_entry(at(9, 0), anna_visit);
    planner.plan_mut(bert).add_entry(at(12, 0), bert_visit);
    planner.plan_mut(carl).add_entry(at(8, 0), PlanEntry::idle());

    // The road only opens at half past nine.
    let road_open = Cell::new(false);
    let pathfinder = |from: GridPos, to: GridPos| road_open.get().then(|| Path::new([from, to]));

    let mut log = Vec::new();
    for _ in 0..MINUTES_PER_DAY {
        road_open.set(world.time.clock() >= at(9, 30));
        log.extend(planner.tick(&mut world, &pathfinder));
        world.advance_time(1);
    }

    assert_eq!(world.time.day, 2);
    assert_eq!(world.time.clock(), at(6, 0));

    let blocked = ActionError::NoPath {
        from: GridPos::new(1, 1),
        to: GridPos::new(21, 5),
    };
    let expected = vec![
        TickOutcome::Rescheduled {
            from: at(9, 0),
            to: at(9, 30),
            error: blocked,
        },
        TickOutcome::Completed { at: at(9, 30) },
    ];
    assert_eq!(outcomes_for(&log, anna), expected);

    let anna_npc = world.get_npc(anna).unwrap();
    assert_eq!(anna_npc.current_behaviour, visiting(1));
    assert_eq!(anna_npc.path.destination(), Some(GridPos::new(21, 5)));
    assert!(planner.plan(anna).unwrap().is_empty());

    // Bert's entry has no retry delay: it fails once and stays at noon.
    let retained = TickOutcome::Retained {
        at: at(12, 0),
        error: ActionError::NoHouse(SquareId(2)),
    };
    assert_eq!(outcomes_for(&log, bert), vec![retained]);

    let bert_plan = planner.plan(bert).unwrap();
    assert!(bert_plan.entry_at(at(12, 0)).is_some());
    let bert_npc = world.get_npc(bert).unwrap();
    assert_eq!(bert_npc.current_behaviour, Behaviour::Idle);

    let completed = TickOutcome::Completed { at: at(8, 0) };
    assert_eq!(outcomes_for(&log, carl), vec![completed]);
}

#[test]
fn test_retained_entry_fires_again_next_day() {
    let mut world = village(11);
    let bert = world.add_npc(Npc::new("Bert", GridPos::new(0, 0)));

    let mut planner = DayPlanner::with_defaults();
    let visit = PlanEntry::visit_neighbour(SquareId(2));
    planner.plan_mut(bert).add_entry(at(12, 0), visit);
    let pathfinder = |from: GridPos, to: GridPos| Some(Path::new([from, to]));

    let mut log = Vec::new();
    for _ in 0..(2 * MINUTES_PER_DAY) {
        log.extend(planner.tick(&mut world, &pathfinder));
        world.advance_time(1);
    }

    let retained = outcomes_for(&log, bert);
    assert_eq!(retained.len(), 2);
    for outcome in retained {
        let expected = TickOutcome::Retained {
            at: at(12, 0),
            error: ActionError::NoHouse(SquareId(2)),
        };
        assert_eq!(outcome, expected);
    }
}

#[test]
fn test_party_config_and_plan_file() {
    let config = PlannerConfig::from_toml_str(PARTY_CONFIG).unwrap();

    let mut world = village(7);
    let dora = world.add_npc(Npc::new("Dora", GridPos::new(30, 10)));
    let file = PlanFile::from_toml_str(DORA_PLAN).unwrap();
    let plan = file.into_plan(dora).unwrap();

    let mut planner = DayPlanner::new(config);
    assert!(planner.insert_plan(plan).is_none());

    let pathfinder = |from: GridPos, to: GridPos| Some(Path::new([from, to]));
    let mut log = Vec::new();
    for _ in 0..60 {
        log.extend(planner.tick(&mut world, &pathfinder));
        world.advance_time(1);
    }

    // Square 2 has no house, but every visit goes to square 0 instead.
    let expected = vec![
        TickOutcome::Completed { at: at(7, 30) },
        TickOutcome::Completed { at: at(7, 45) },
    ];
    assert_eq!(outcomes_for(&log, dora), expected);

    let dora_npc = world.get_npc(dora).unwrap();
    assert_eq!(dora_npc.current_behaviour, visiting(0));
    assert_eq!(dora_npc.path.destination(), Some(GridPos::new(5, 5)));
    assert!(planner.plan(dora).unwrap().is_empty());
}
