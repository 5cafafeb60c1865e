//! The engine is generic over the transition model. These tests drive it
//! with models unrelated to jugs.

use decant_search::contract::TransitionModel;
use decant_search::graph::TerminationReason;
use decant_search::path::verify_path;
use decant_search::search::solve;

// ---------------------------------------------------------------------------
// River crossing: farmer, wolf, goat, cabbage
// ---------------------------------------------------------------------------

/// `true` = far bank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct Banks {
    farmer: bool,
    wolf: bool,
    goat: bool,
    cabbage: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Cargo {
    Nothing,
    Wolf,
    Goat,
    Cabbage,
}

impl Banks {
    const START: Self = Self {
        farmer: false,
        wolf: false,
        goat: false,
        cabbage: false,
    };

    fn is_safe(self) -> bool {
        let goat_alone_with_wolf = self.goat == self.wolf && self.farmer != self.goat;
        let goat_alone_with_cabbage = self.goat == self.cabbage && self.farmer != self.goat;
        !goat_alone_with_wolf && !goat_alone_with_cabbage
    }

    fn all_across(&self) -> bool {
        self.farmer && self.wolf && self.goat && self.cabbage
    }
}

struct RiverCrossing;

impl TransitionModel for RiverCrossing {
    type State = Banks;
    type Action = Cargo;

    fn feasible_actions(&self, state: &Banks) -> Vec<Cargo> {
        [Cargo::Nothing, Cargo::Wolf, Cargo::Goat, Cargo::Cabbage]
            .into_iter()
            .filter(|cargo| {
                let with_farmer = match cargo {
                    Cargo::Nothing => true,
                    Cargo::Wolf => state.wolf == state.farmer,
                    Cargo::Goat => state.goat == state.farmer,
                    Cargo::Cabbage => state.cabbage == state.farmer,
                };
                with_farmer && self.apply(state, cargo).is_safe()
            })
            .collect()
    }

    fn apply(&self, state: &Banks, cargo: &Cargo) -> Banks {
        let mut next = *state;
        next.farmer = !state.farmer;
        match cargo {
            Cargo::Nothing => {}
            Cargo::Wolf => next.wolf = !state.wolf,
            Cargo::Goat => next.goat = !state.goat,
            Cargo::Cabbage => next.cabbage = !state.cabbage,
        }
        next
    }
}

#[test]
fn river_crossing_takes_seven_trips() {
    let result = solve(Banks::START, &RiverCrossing, &Banks::all_across);
    let path = result.path().unwrap();
    assert_eq!(path.len(), 7);
    assert_eq!(path.actions().next(), Some(&Cargo::Goat));
    assert!(path.states().all(|s| s.is_safe()));
    verify_path(&RiverCrossing, &path, &Banks::all_across).unwrap();
}

#[test]
fn river_crossing_first_of_two_shortest_plans() {
    // Wolf-first and cabbage-first plans are both seven trips; enumeration
    // order puts the wolf first.
    let result = solve(Banks::START, &RiverCrossing, &Banks::all_across);
    let actions: Vec<Cargo> = result.path().unwrap().actions().copied().collect();
    assert_eq!(
        actions,
        vec![
            Cargo::Goat,
            Cargo::Nothing,
            Cargo::Wolf,
            Cargo::Goat,
            Cargo::Cabbage,
            Cargo::Nothing,
            Cargo::Goat,
        ]
    );
}

// ---------------------------------------------------------------------------
// Explicit graph
// ---------------------------------------------------------------------------

/// Directed graph given as adjacency lists; actions are target vertices.
struct Digraph {
    edges: Vec<Vec<usize>>,
}

impl TransitionModel for Digraph {
    type State = usize;
    type Action = usize;

    fn feasible_actions(&self, state: &usize) -> Vec<usize> {
        self.edges.get(*state).cloned().unwrap_or_default()
    }

    fn apply(&self, _state: &usize, target: &usize) -> usize {
        *target
    }
}

fn diamond() -> Digraph {
    // 0 -> 1, 2; 1 -> 3; 2 -> 3; 3 -> 4; 4 -> 0; 5 -> 0.
    Digraph {
        edges: vec![vec![1, 2], vec![3], vec![3], vec![4], vec![0], vec![0]],
    }
}

#[test]
fn ties_break_by_enumeration_order() {
    let result = solve(0, &diamond(), &|v: &usize| *v == 3);
    let path = result.path().unwrap();
    assert_eq!(path.states().copied().collect::<Vec<_>>(), vec![0, 1, 3]);
}

#[test]
fn goal_found_at_generation_not_expansion() {
    let result = solve(0, &diamond(), &|v: &usize| *v == 4);
    assert_eq!(result.path().unwrap().len(), 3);
    // 0, 1, 2 and 3 are expanded; 4 is generated and returned.
    assert_eq!(result.explored, vec![0, 1, 2, 3]);
}

#[test]
fn unreachable_vertex_exhausts_frontier() {
    let result = solve(0, &diamond(), &|v: &usize| *v == 5);
    assert!(result.goal().is_none());
    assert_eq!(result.termination_reason(), TerminationReason::FrontierExhausted);
    assert_eq!(result.explored, vec![0, 1, 2, 3, 4]);
}

#[test]
fn converging_and_cyclic_edges_are_suppressed() {
    // 2 -> 3 meets 3 in the frontier; 4 -> 0 meets an explored vertex.
    let result = solve(5, &diamond(), &|_: &usize| false);
    assert_eq!(result.explored, vec![5, 0, 1, 2, 3, 4]);
    assert_eq!(result.graph.metadata.total_duplicates_suppressed, 2);
    assert_eq!(result.nodes.len(), 6);
}
