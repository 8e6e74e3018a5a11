//! The transition rule.
//!
//! Only cells inside the bounding box grown by one can change: anything
//! further out has no living neighbor. Rows of that box are evaluated in
//! parallel against the previous, immutable state.

use rayon::prelude::*;

use crate::bounds::bounding_box;
use crate::cell::{contains, living_neighbors_of, Cell, State};

/// Decides whether `cell` is alive in the generation after `state`.
///
/// * A live cell with two or three live neighbors survives
/// * A dead cell with exactly three live neighbors becomes alive
/// * Every other cell is dead in the next generation
pub fn will_be_alive(cell: Cell, state: &[Cell]) -> bool {
    let live_neighbors = living_neighbors_of(cell, state).len();
    matches!(
        (contains(state, cell), live_neighbors),
        (true, 2) | (_, 3)
    )
}

/// Computes the generation after `state`.
///
/// The result lists cells row by row from the lowest `y`, left to right
/// within a row. `state` is left untouched.
pub fn next_generation(state: &[Cell]) -> State {
    let bounds = bounding_box(state).expanded(1);
    let (left, right) = (bounds.bottom_left.x, bounds.top_right.x);

    (bounds.bottom_left.y..=bounds.top_right.y)
        .into_par_iter()
        .flat_map_iter(move |y| {
            (left..=right)
                .map(move |x| Cell::new(x, y))
                .filter(move |&cell| will_be_alive(cell, state))
        })
        .collect()
}

/// What changed between two consecutive generations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Transition {
    /// Cells alive now that were dead before
    pub births: usize,
    /// Cells dead now that were alive before
    pub deaths: usize,
    /// Living cells after the step
    pub population: usize,
}

impl Transition {
    pub fn between(previous: &[Cell], next: &[Cell]) -> Self {
        Transition {
            births: next.iter().filter(|&&cell| !contains(previous, cell)).count(),
            deaths: previous.iter().filter(|&&cell| !contains(next, cell)).count(),
            population: next.len(),
        }
    }
}
