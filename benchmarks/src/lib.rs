//! Shared helpers for decant benchmark suites.
//!
//! A [`Regime`] is a named two-jug instance plus the search policy to run it
//! under. Each regime exercises a different termination path.

use decant_harness::contract::WorldHarness;
use decant_harness::worlds::two_jugs::{JugGoal, TwoJugs};
use decant_kernel::carrier::jug_state::{Capacities, Jug, JugState};
use decant_kernel::operators::pour::PourAction;
use decant_search::observer::NoopObserver;
use decant_search::policy::SearchPolicy;
use decant_search::search::{search, SearchResult};

/// A benchmark scenario.
#[derive(Debug, Clone)]
pub struct Regime {
    pub name: &'static str,
    pub world: TwoJugs,
    pub policy: SearchPolicy,
}

fn x_goal(quantity: u32) -> JugGoal {
    JugGoal {
        jug: Jug::X,
        quantity,
    }
}

/// The 4/3 puzzle, goal x == 2.
#[must_use]
pub fn regime_reference() -> Regime {
    Regime {
        name: "reference",
        world: TwoJugs::reference(),
        policy: SearchPolicy::default(),
    }
}

/// The 4/3 jugs with an impossible goal: explores all 14 reachable states.
#[must_use]
pub fn regime_exhaustive_dead_end() -> Regime {
    Regime {
        name: "exhaustive_dead_end",
        world: TwoJugs::with_goal(x_goal(5)),
        policy: SearchPolicy::default(),
    }
}

/// Coprime 97/89 jugs, goal x == 1: a long solution over a wide boundary.
#[must_use]
pub fn regime_large_coprime() -> Regime {
    Regime {
        name: "large_coprime",
        world: TwoJugs::new(Capacities::new(97, 89), JugState::EMPTY, x_goal(1)),
        policy: SearchPolicy::default(),
    }
}

/// [`regime_large_coprime`] cut at depth 10.
#[must_use]
pub fn regime_depth_limited() -> Regime {
    Regime {
        name: "depth_limited",
        policy: SearchPolicy {
            max_depth: Some(10),
            ..SearchPolicy::default()
        },
        ..regime_large_coprime()
    }
}

/// [`regime_large_coprime`] capped at 50 expansions.
#[must_use]
pub fn regime_budget_limited() -> Regime {
    Regime {
        name: "budget_limited",
        policy: SearchPolicy {
            max_expansions: Some(50),
            ..SearchPolicy::default()
        },
        ..regime_large_coprime()
    }
}

/// Every regime, in a fixed order.
#[must_use]
pub fn all_regimes() -> Vec<Regime> {
    vec![
        regime_reference(),
        regime_exhaustive_dead_end(),
        regime_large_coprime(),
        regime_depth_limited(),
        regime_budget_limited(),
    ]
}

/// Run `search()` alone for a regime, skipping report serialization.
///
/// # Panics
///
/// Panics if the regime's policy is invalid. Benchmark setup failures are
/// fatal.
#[must_use]
pub fn run_search_only(regime: &Regime) -> SearchResult<JugState, PourAction> {
    let world = &regime.world;
    search(
        world.initial_state(),
        world,
        &world.goal(),
        &regime.policy,
        &mut NoopObserver,
    )
    .expect("regime policy is valid")
}
