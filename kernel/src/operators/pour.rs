//! Pour operators: the transition model of the two-jug puzzle.
//!
//! [`feasible_actions`] enumerates admissible pours in a fixed order
//! (fill x, fill y, empty x, empty y, pour x→y, pour y→x). The order is
//! significant: breadth-first search explores ties in enumeration order, so
//! changing it changes which of several equally short solutions is found.
//!
//! [`apply`] is pure. It adds the quantity to the `to` jug and subtracts it
//! from the `from` jug; external endpoints leave the state untouched.

use std::fmt;

use crate::carrier::jug_state::{Capacities, Jug, JugState};

/// Source or destination of a pour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Endpoint {
    ContainerX,
    ContainerY,
    /// The tap. Only valid as a source.
    ExternalSource,
    /// The ground. Only valid as a destination.
    ExternalSink,
}

impl Endpoint {
    /// The modeled jug behind this endpoint, if any.
    #[must_use]
    pub fn jug(self) -> Option<Jug> {
        match self {
            Self::ContainerX => Some(Jug::X),
            Self::ContainerY => Some(Jug::Y),
            Self::ExternalSource | Self::ExternalSink => None,
        }
    }

    /// Display name used in step listings.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::ContainerX => "x",
            Self::ContainerY => "y",
            Self::ExternalSource => "tap",
            Self::ExternalSink => "ground",
        }
    }
}

impl From<Jug> for Endpoint {
    fn from(jug: Jug) -> Self {
        match jug {
            Jug::X => Self::ContainerX,
            Jug::Y => Self::ContainerY,
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Rejected pour construction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ActionError {
    #[error("pour quantity must be positive")]
    ZeroQuantity,
    #[error("pour source and destination are both {0}")]
    SameEndpoint(Endpoint),
    #[error("{0} cannot be used as a pour source")]
    InvalidSource(Endpoint),
    #[error("{0} cannot be used as a pour destination")]
    InvalidDestination(Endpoint),
}

/// A single admissible transformation: move `quantity` from `from` to `to`.
///
/// Construct via [`PourAction::new`], which enforces `quantity > 0` and sane
/// endpoint roles. Actions produced by [`feasible_actions`] satisfy the same
/// checks by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PourAction {
    from: Endpoint,
    to: Endpoint,
    quantity: u32,
}

impl PourAction {
    /// Build a validated pour.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError`] if the quantity is zero, the endpoints are equal,
    /// the sink is used as a source, or the tap is used as a destination.
    pub fn new(from: Endpoint, to: Endpoint, quantity: u32) -> Result<Self, ActionError> {
        if quantity == 0 {
            return Err(ActionError::ZeroQuantity);
        }
        if from == to {
            return Err(ActionError::SameEndpoint(from));
        }
        if from == Endpoint::ExternalSink {
            return Err(ActionError::InvalidSource(from));
        }
        if to == Endpoint::ExternalSource {
            return Err(ActionError::InvalidDestination(to));
        }
        Ok(Self { from, to, quantity })
    }

    /// Fill `jug` from the tap.
    #[must_use]
    pub fn fill(jug: Jug, quantity: u32) -> Option<Self> {
        Self::new(Endpoint::ExternalSource, jug.into(), quantity).ok()
    }

    /// Empty `jug` onto the ground.
    #[must_use]
    pub fn empty(jug: Jug, quantity: u32) -> Option<Self> {
        Self::new(jug.into(), Endpoint::ExternalSink, quantity).ok()
    }

    /// Pour from one jug into the other.
    #[must_use]
    pub fn transfer(from: Jug, to: Jug, quantity: u32) -> Option<Self> {
        Self::new(from.into(), to.into(), quantity).ok()
    }

    /// Where the water comes from.
    #[must_use]
    pub fn source(&self) -> Endpoint {
        self.from
    }

    /// Where the water goes.
    #[must_use]
    pub fn destination(&self) -> Endpoint {
        self.to
    }

    #[must_use]
    pub fn quantity(&self) -> u32 {
        self.quantity
    }
}

/// Enumerate all admissible pours from `state`, in canonical order.
///
/// Empty jugs may be filled, full jugs may be emptied, and a non-empty jug may
/// be poured into the other while the other has room. No zero-quantity pour is
/// ever produced.
#[must_use]
pub fn feasible_actions(capacities: Capacities, state: JugState) -> Vec<PourAction> {
    let JugState { x, y } = state;
    let room_x = capacities.x.saturating_sub(x);
    let room_y = capacities.y.saturating_sub(y);

    let candidates = [
        (x == 0).then(|| PourAction::fill(Jug::X, capacities.x)),
        (y == 0).then(|| PourAction::fill(Jug::Y, capacities.y)),
        (x == capacities.x).then(|| PourAction::empty(Jug::X, x)),
        (y == capacities.y).then(|| PourAction::empty(Jug::Y, y)),
        (x > 0 && room_y > 0).then(|| PourAction::transfer(Jug::X, Jug::Y, room_y.min(x))),
        (y > 0 && room_x > 0).then(|| PourAction::transfer(Jug::Y, Jug::X, room_x.min(y))),
    ];

    // A zero-capacity jug yields a zero-quantity fill/empty, which `new` rejects.
    candidates.into_iter().flatten().flatten().collect()
}

/// Apply `action` to `state`, producing the successor state.
///
/// Pure: the input is a `Copy` value and is never modified. Quantities
/// saturate rather than wrap if an action from outside [`feasible_actions`]
/// would move more than a jug holds.
#[must_use]
pub fn apply(state: JugState, action: &PourAction) -> JugState {
    let mut next = state;
    if let Some(jug) = action.to.jug() {
        next = next.with(jug, state.get(jug).saturating_add(action.quantity));
    }
    if let Some(jug) = action.from.jug() {
        next = next.with(jug, state.get(jug).saturating_sub(action.quantity));
    }
    next
}
