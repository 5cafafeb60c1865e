//! Lock tests for the reference two-jug instance: capacities (4, 3), start
//! (0, 0), goal x == 2.
//!
//! The exact path, counters, and node depths are pinned. Any change to
//! action enumeration order, dedup, or goal-test timing shows up here.

use decant_harness::contract::WorldHarness;
use decant_harness::render::render_outcome;
use decant_harness::worlds::two_jugs::{JugGoal, TwoJugs};
use decant_kernel::carrier::jug_state::{Jug, JugState};
use decant_kernel::operators::pour::{Endpoint, PourAction};
use decant_search::graph::{CandidateOutcome, TerminationReason};
use decant_search::node::NodeId;
use decant_search::path::verify_path;
use decant_search::search::solve;

fn solve_reference() -> decant_search::search::SearchResult<JugState, PourAction> {
    let world = TwoJugs::reference();
    solve(world.initial_state(), &world, &JugGoal::REFERENCE)
}

fn s(x: u32, y: u32) -> JugState {
    JugState::new(x, y)
}

// ---------------------------------------------------------------------------
// Path
// ---------------------------------------------------------------------------

#[test]
fn reference_path_is_pinned() {
    let result = solve_reference();
    assert_eq!(
        result.termination_reason(),
        TerminationReason::GoalReached {
            node_id: result.goal_node.unwrap()
        }
    );

    let path = result.path().unwrap();
    let states: Vec<JugState> = path.states().copied().collect();
    assert_eq!(
        states,
        vec![s(0, 0), s(4, 0), s(1, 3), s(1, 0), s(0, 1), s(4, 1), s(2, 3)]
    );
    assert_eq!(path.len(), 6);
}

#[test]
fn reference_path_actions_are_pinned() {
    let path = solve_reference().path().unwrap();
    let actions: Vec<(Endpoint, Endpoint, u32)> = path
        .actions()
        .map(|a| (a.source(), a.destination(), a.quantity()))
        .collect();
    assert_eq!(
        actions,
        vec![
            (Endpoint::ExternalSource, Endpoint::ContainerX, 4),
            (Endpoint::ContainerX, Endpoint::ContainerY, 3),
            (Endpoint::ContainerY, Endpoint::ExternalSink, 3),
            (Endpoint::ContainerX, Endpoint::ContainerY, 1),
            (Endpoint::ExternalSource, Endpoint::ContainerX, 4),
            (Endpoint::ContainerX, Endpoint::ContainerY, 2),
        ]
    );
}

#[test]
fn reference_path_replays() {
    let world = TwoJugs::reference();
    let path = solve_reference().path().unwrap();
    verify_path(&world, &path, &JugGoal::REFERENCE).unwrap();
}

#[test]
fn reference_listing_is_pinned() {
    let world = TwoJugs::reference();
    let path = solve_reference().path().unwrap();
    assert_eq!(
        render_outcome(Some(&path), world.capacities()),
        vec![
            "4 gallon jug has 0 gallons and 3 gallon jug has 0 gallons",
            "Fill x with water from tap (ie. 4 jugs) New state: 4,0",
            "Fill y with water from x (ie. 3 jugs) New state: 1,3",
            "Fill ground with water from y (ie. 3 jugs) New state: 1,0",
            "Fill y with water from x (ie. 1 jugs) New state: 0,1",
            "Fill x with water from tap (ie. 4 jugs) New state: 4,1",
            "Fill y with water from x (ie. 2 jugs) New state: 2,3",
        ]
    );
}

// ---------------------------------------------------------------------------
// Counters and explored set
// ---------------------------------------------------------------------------

#[test]
fn reference_counters_are_pinned() {
    let meta = solve_reference().graph.metadata;
    assert_eq!(meta.total_expansions, 11);
    assert_eq!(meta.explored_count, 11);
    assert_eq!(meta.total_candidates_generated, 24);
    assert_eq!(meta.total_duplicates_suppressed, 12);
    assert_eq!(meta.total_depth_skips, 0);
    assert_eq!(meta.nodes_created, 13);
    assert_eq!(meta.frontier_high_water, 3);
}

#[test]
fn explored_order_is_breadth_first() {
    let result = solve_reference();
    assert_eq!(
        result.explored,
        vec![
            s(0, 0),
            s(4, 0),
            s(0, 3),
            s(4, 3),
            s(1, 3),
            s(3, 0),
            s(1, 0),
            s(3, 3),
            s(0, 1),
            s(4, 2),
            s(4, 1),
        ]
    );
}

#[test]
fn node_depths_follow_levels() {
    let result = solve_reference();
    let depth_of = |state: JugState| {
        result
            .nodes
            .iter()
            .find(|n| n.state == state)
            .map(|n| n.depth)
            .unwrap()
    };
    assert_eq!(depth_of(s(0, 0)), 0);
    for state in [s(4, 0), s(0, 3)] {
        assert_eq!(depth_of(state), 1, "{state}");
    }
    for state in [s(4, 3), s(1, 3), s(3, 0)] {
        assert_eq!(depth_of(state), 2, "{state}");
    }
    for state in [s(1, 0), s(3, 3)] {
        assert_eq!(depth_of(state), 3, "{state}");
    }
    for state in [s(0, 1), s(4, 2)] {
        assert_eq!(depth_of(state), 4, "{state}");
    }
    for state in [s(4, 1), s(0, 2)] {
        assert_eq!(depth_of(state), 5, "{state}");
    }
    assert_eq!(depth_of(s(2, 3)), 6);
}

// ---------------------------------------------------------------------------
// Goal-test timing
// ---------------------------------------------------------------------------

#[test]
fn goal_node_is_never_expanded() {
    let result = solve_reference();
    let goal = result.goal().unwrap();
    assert!(!result.explored.contains(&goal.state));
    let last = result.graph.expansions.last().unwrap();
    assert!(matches!(
        last.candidates.last().unwrap().outcome,
        CandidateOutcome::GoalReached { .. }
    ));
}

#[test]
fn root_is_not_goal_tested_by_default() {
    // (0, 0) satisfies x == 0, but the first goal reported is a child.
    let world = TwoJugs::with_goal(JugGoal {
        jug: Jug::X,
        quantity: 0,
    });
    let result = solve(world.initial_state(), &world, &world.goal());
    let goal = result.goal().unwrap();
    assert_eq!(goal.state, s(0, 3));
    assert_eq!(goal.depth, 1);
    assert_eq!(goal.parent_id, Some(NodeId::ROOT));
}

#[test]
fn unreachable_goal_explores_every_reachable_state() {
    let world = TwoJugs::with_goal(JugGoal {
        jug: Jug::X,
        quantity: 5,
    });
    let result = solve(world.initial_state(), &world, &world.goal());
    assert!(result.goal().is_none());
    assert!(result.path().is_none());
    assert_eq!(result.termination_reason(), TerminationReason::FrontierExhausted);
    assert_eq!(result.explored.len(), 14);
    assert!(result.explored.len() <= 20);
    for state in &result.explored {
        assert!(
            state.x == 0 || state.x == 4 || state.y == 0 || state.y == 3,
            "unexpected interior state {state}"
        );
    }
    assert_eq!(
        render_outcome(None, world.capacities()),
        vec!["No solution found".to_string()]
    );
}
