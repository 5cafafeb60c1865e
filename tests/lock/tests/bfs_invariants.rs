//! Structural invariants of breadth-first search over two-jug instances.
//!
//! Checked against an independent level-order traversal of the same
//! transition model: shortest path length, no repeated expansion, parent
//! links consistent with the transition model, and complete exploration when
//! no goal is reachable.

use std::collections::{HashMap, HashSet, VecDeque};

use proptest::prelude::*;

use decant_harness::contract::WorldHarness;
use decant_harness::worlds::two_jugs::{JugGoal, TwoJugs};
use decant_kernel::carrier::jug_state::{Capacities, Jug, JugState};
use decant_kernel::operators::pour::PourAction;
use decant_search::contract::{GoalTest, TransitionModel};
use decant_search::path::verify_path;
use decant_search::search::{solve, SearchResult};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Distance (in actions) from `world`'s initial state to every reachable
/// state, by plain level-order traversal.
fn level_distances(world: &TwoJugs) -> HashMap<JugState, usize> {
    let root = world.initial_state();
    let mut dist = HashMap::from([(root, 0)]);
    let mut queue = VecDeque::from([root]);
    while let Some(state) = queue.pop_front() {
        let d = dist[&state];
        for action in world.feasible_actions(&state) {
            let next = world.apply(&state, &action);
            if let std::collections::hash_map::Entry::Vacant(slot) = dist.entry(next) {
                slot.insert(d + 1);
                queue.push_back(next);
            }
        }
    }
    dist
}

/// Length of the shortest non-empty action sequence reaching a goal state.
fn shortest_goal_distance(world: &TwoJugs) -> Option<usize> {
    let goal = world.goal();
    let root = world.initial_state();
    level_distances(world)
        .into_iter()
        .filter(|(state, _)| *state != root && goal.is_goal(state))
        .map(|(_, d)| d)
        .min()
}

fn run(world: &TwoJugs) -> SearchResult<JugState, PourAction> {
    solve(world.initial_state(), world, &world.goal())
}

fn instance(cx: u32, cy: u32, target: u32) -> TwoJugs {
    TwoJugs::new(
        Capacities::new(cx, cy),
        JugState::EMPTY,
        JugGoal {
            jug: Jug::X,
            quantity: target,
        },
    )
}

fn assert_bfs_invariants(world: &TwoJugs, result: &SearchResult<JugState, PourAction>) {
    // Each state expanded at most once.
    let unique: HashSet<&JugState> = result.explored.iter().collect();
    assert_eq!(unique.len(), result.explored.len(), "a state was expanded twice");

    // No two nodes share a state.
    let node_states: HashSet<JugState> = result.nodes.iter().map(|n| n.state).collect();
    assert_eq!(node_states.len(), result.nodes.len(), "duplicate node state");

    // Parent links agree with the transition model.
    for node in result.nodes.iter().filter(|n| !n.is_root()) {
        let parent_id = node.parent_id.unwrap();
        assert!(parent_id < node.node_id);
        let parent = &result.nodes[parent_id];
        assert_eq!(node.depth, parent.depth + 1);
        let action = node.producing_action.as_ref().unwrap();
        assert!(world.feasible_actions(&parent.state).contains(action));
        assert_eq!(world.apply(&parent.state, action), node.state);
    }

    // Every state stays within capacity.
    let caps = world.capacities();
    assert!(result.nodes.iter().all(|n| n.state.is_within(caps)));
    assert!(result.explored.len() as u64 <= caps.state_space_bound());
}

// ---------------------------------------------------------------------------
// Fixed instances
// ---------------------------------------------------------------------------

#[test]
fn reference_matches_level_order_distance() {
    let world = TwoJugs::reference();
    let result = run(&world);
    assert_bfs_invariants(&world, &result);
    assert_eq!(
        result.path().map(|p| p.len()),
        shortest_goal_distance(&world)
    );
}

#[test]
fn goal_in_second_jug() {
    let world = TwoJugs::with_goal(JugGoal {
        jug: Jug::Y,
        quantity: 2,
    });
    let result = run(&world);
    assert_bfs_invariants(&world, &result);
    let path = result.path().unwrap();
    assert_eq!(path.final_state().y, 2);
    assert_eq!(Some(path.len()), shortest_goal_distance(&world));
}

#[test]
fn gcd_unreachable_target_exhausts() {
    // gcd(6, 4) = 2, so odd quantities never appear.
    let world = instance(6, 4, 3);
    let result = run(&world);
    assert_bfs_invariants(&world, &result);
    assert!(result.goal().is_none());
    assert_eq!(result.explored.len(), level_distances(&world).len());
}

#[test]
fn classic_five_three_four() {
    let world = instance(5, 3, 4);
    let result = run(&world);
    assert_bfs_invariants(&world, &result);
    let path = result.path().unwrap();
    assert_eq!(path.final_state().x, 4);
    assert_eq!(path.len(), 6);
}

// ---------------------------------------------------------------------------
// Random instances
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn search_is_shortest_and_sound(cx in 1u32..=9, cy in 1u32..=9, target in 1u32..=10) {
        let world = instance(cx, cy, target);
        let result = run(&world);
        assert_bfs_invariants(&world, &result);

        match result.path() {
            Some(path) => {
                prop_assert!(verify_path(&world, &path, &world.goal()).is_ok());
                prop_assert_eq!(Some(path.len()), shortest_goal_distance(&world));
            }
            None => {
                prop_assert_eq!(shortest_goal_distance(&world), None);
                prop_assert_eq!(result.explored.len(), level_distances(&world).len());
            }
        }
    }

    #[test]
    fn search_is_deterministic(cx in 1u32..=9, cy in 1u32..=9, target in 1u32..=10) {
        let world = instance(cx, cy, target);
        let a = run(&world);
        let b = run(&world);
        prop_assert_eq!(a.path(), b.path());
        prop_assert_eq!(a.explored, b.explored);
    }
}
