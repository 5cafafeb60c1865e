//! `JugState`: the immutable state value of the two-jug puzzle.
//!
//! A state is the pair of quantities held by jug `x` and jug `y`. Bounds are
//! carried separately in [`Capacities`] so the state itself stays a plain
//! `Copy` value that can be hashed and compared for explored-set membership.

use std::fmt;

/// One of the two modeled jugs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Jug {
    X,
    Y,
}

impl Jug {
    /// Short display name (`"x"` or `"y"`).
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::X => "x",
            Self::Y => "y",
        }
    }
}

/// Fixed jug capacities for one puzzle instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Capacities {
    pub x: u32,
    pub y: u32,
}

impl Capacities {
    /// The reference instance: a 4 gallon jug and a 3 gallon jug.
    pub const REFERENCE: Self = Self { x: 4, y: 3 };

    #[must_use]
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// Capacity of the given jug.
    #[must_use]
    pub fn of(self, jug: Jug) -> u32 {
        match jug {
            Jug::X => self.x,
            Jug::Y => self.y,
        }
    }

    /// Upper bound on the number of distinct states: `(Cx + 1) * (Cy + 1)`.
    #[must_use]
    pub fn state_space_bound(self) -> u64 {
        (u64::from(self.x) + 1) * (u64::from(self.y) + 1)
    }
}

impl Default for Capacities {
    fn default() -> Self {
        Self::REFERENCE
    }
}

/// Quantities currently held by each jug.
///
/// Invariant (when produced by the pour operators from a valid state):
/// `0 <= x <= capacities.x` and `0 <= y <= capacities.y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct JugState {
    pub x: u32,
    pub y: u32,
}

impl JugState {
    /// Both jugs empty.
    pub const EMPTY: Self = Self { x: 0, y: 0 };

    #[must_use]
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// Quantity held by the given jug.
    #[must_use]
    pub fn get(self, jug: Jug) -> u32 {
        match jug {
            Jug::X => self.x,
            Jug::Y => self.y,
        }
    }

    /// Copy of this state with `jug` set to `quantity`.
    #[must_use]
    pub fn with(self, jug: Jug, quantity: u32) -> Self {
        match jug {
            Jug::X => Self { x: quantity, ..self },
            Jug::Y => Self { y: quantity, ..self },
        }
    }

    /// Whether both quantities respect the given capacities.
    #[must_use]
    pub fn is_within(self, capacities: Capacities) -> bool {
        self.x <= capacities.x && self.y <= capacities.y
    }
}

impl fmt::Display for JugState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

impl From<(u32, u32)> for JugState {
    fn from((x, y): (u32, u32)) -> Self {
        Self { x, y }
    }
}
