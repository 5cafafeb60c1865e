//! Console rendering for two-jug runs.
//!
//! Pure string builders; nothing here prints. The binary and the trace
//! observer decide where lines go.

use std::fmt::{Display, Write as _};

use decant_kernel::carrier::jug_state::{Capacities, JugState};
use decant_kernel::operators::pour::PourAction;
use decant_search::path::{PathStep, SolutionPath};

/// Printed when the search ends without reaching the goal.
pub const NO_SOLUTION: &str = "No solution found";

/// One expansion: `Current Node:[x,y]Childrenx1,y1| x2,y2| `.
///
/// `children` are the accepted children in enumeration order.
#[must_use]
pub fn render_expansion_line<'a, S, I>(expanded: &S, children: I) -> String
where
    S: Display + 'a,
    I: IntoIterator<Item = &'a S>,
{
    let mut line = format!("Current Node:[{expanded}]Children");
    for child in children {
        // Writing to a String cannot fail.
        let _ = write!(line, "{child}| ");
    }
    line
}

/// `<Cx> gallon jug has <x> gallons and <Cy> gallon jug has <y> gallons`.
#[must_use]
pub fn render_header(capacities: Capacities, state: JugState) -> String {
    format!(
        "{} gallon jug has {} gallons and {} gallon jug has {} gallons",
        capacities.x, state.x, capacities.y, state.y
    )
}

/// `Fill <to> with water from <from> (ie. <q> jugs) New state: x,y`.
#[must_use]
pub fn render_step(step: &PathStep<JugState, PourAction>) -> String {
    let action = &step.action;
    format!(
        "Fill {} with water from {} (ie. {} jugs) New state: {}",
        action.destination(),
        action.source(),
        action.quantity(),
        step.state
    )
}

/// Header line followed by one line per step.
#[must_use]
pub fn render_solution(
    path: &SolutionPath<JugState, PourAction>,
    capacities: Capacities,
) -> Vec<String> {
    std::iter::once(render_header(capacities, path.initial))
        .chain(path.steps.iter().map(render_step))
        .collect()
}

/// The solution listing, or the single [`NO_SOLUTION`] line.
#[must_use]
pub fn render_outcome(
    path: Option<&SolutionPath<JugState, PourAction>>,
    capacities: Capacities,
) -> Vec<String> {
    match path {
        Some(path) => render_solution(path, capacities),
        None => vec![NO_SOLUTION.to_string()],
    }
}
