//! `TwoJugs`: the water-jug puzzle as a search world.
//!
//! Two jugs of fixed capacities, a tap, and the ground. The goal is a
//! configured quantity in one jug. The reference instance is a 4 gallon and a
//! 3 gallon jug, both empty, with the goal of exactly 2 gallons in the 4
//! gallon jug.

use decant_kernel::carrier::jug_state::{Capacities, Jug, JugState};
use decant_kernel::operators::pour::{self, PourAction};
use decant_search::contract::{GoalTest, TransitionModel};

use crate::contract::WorldHarness;

/// Goal: `jug` holds exactly `quantity`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JugGoal {
    pub jug: Jug,
    pub quantity: u32,
}

impl JugGoal {
    /// Two gallons in jug `x`.
    pub const REFERENCE: Self = Self {
        jug: Jug::X,
        quantity: 2,
    };
}

impl GoalTest<JugState> for JugGoal {
    fn is_goal(&self, state: &JugState) -> bool {
        state.get(self.jug) == self.quantity
    }
}

/// A two-jug puzzle instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TwoJugs {
    capacities: Capacities,
    initial: JugState,
    goal: JugGoal,
}

impl TwoJugs {
    #[must_use]
    pub fn new(capacities: Capacities, initial: JugState, goal: JugGoal) -> Self {
        Self {
            capacities,
            initial,
            goal,
        }
    }

    /// Capacities (4, 3), start (0, 0), goal x == 2.
    #[must_use]
    pub fn reference() -> Self {
        Self::new(Capacities::REFERENCE, JugState::EMPTY, JugGoal::REFERENCE)
    }

    /// The reference jugs and start with a different goal.
    #[must_use]
    pub fn with_goal(goal: JugGoal) -> Self {
        Self {
            goal,
            ..Self::reference()
        }
    }

    #[must_use]
    pub fn capacities(&self) -> Capacities {
        self.capacities
    }

    #[must_use]
    pub fn goal(&self) -> JugGoal {
        self.goal
    }
}

impl Default for TwoJugs {
    fn default() -> Self {
        Self::reference()
    }
}

impl TransitionModel for TwoJugs {
    type State = JugState;
    type Action = PourAction;

    fn feasible_actions(&self, state: &JugState) -> Vec<PourAction> {
        pour::feasible_actions(self.capacities, *state)
    }

    fn apply(&self, state: &JugState, action: &PourAction) -> JugState {
        pour::apply(*state, action)
    }
}

impl WorldHarness for TwoJugs {
    #[allow(clippy::unnecessary_literal_bound)]
    fn world_id(&self) -> &str {
        "two_jugs"
    }

    fn initial_state(&self) -> JugState {
        self.initial
    }

    fn is_goal(&self, state: &JugState) -> bool {
        self.goal.is_goal(state)
    }
}
