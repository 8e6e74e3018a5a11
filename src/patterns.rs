//! Starting configurations.

use rand::Rng;

use crate::cell::{Cell, State};

/// Probability of a cell being alive in a freshly seeded soup.
pub const SOUP_DENSITY: f64 = 0.3;

/// A named starting configuration.
pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [Cell],
}

pub const PATTERNS: &[Pattern] = &[
    Pattern {
        name: "rpentomino",
        cells: &[
            Cell::new(3, 2),
            Cell::new(2, 3),
            Cell::new(3, 3),
            Cell::new(3, 4),
            Cell::new(4, 4),
        ],
    },
    Pattern {
        name: "glider",
        cells: &[
            // Block
            Cell::new(-2, -2),
            Cell::new(-1, -2),
            Cell::new(-2, -1),
            Cell::new(-1, -1),
            // Glider
            Cell::new(1, 1),
            Cell::new(2, 1),
            Cell::new(3, 1),
            Cell::new(3, 2),
            Cell::new(2, 3),
        ],
    },
    Pattern {
        name: "square",
        cells: &[
            Cell::new(1, 1),
            Cell::new(2, 1),
            Cell::new(1, 2),
            Cell::new(2, 2),
        ],
    },
];

/// Looks up a pattern by name and returns a fresh copy of its cells.
pub fn pattern(name: &str) -> Option<State> {
    PATTERNS
        .iter()
        .find(|pattern| pattern.name == name)
        .map(|pattern| pattern.cells.to_vec())
}

pub fn pattern_names() -> impl Iterator<Item = &'static str> {
    PATTERNS.iter().map(|pattern| pattern.name)
}

/// Fills a `width` by `height` rectangle with its bottom-left corner at the
/// origin, each cell alive with probability `density`.
///
/// `density` is clamped to `0.0..=1.0`.
pub fn soup<R: Rng + ?Sized>(width: usize, height: usize, density: f64, rng: &mut R) -> State {
    let density = density.clamp(0.0, 1.0);
    let mut state = State::new();
    for y in 0..height as i64 {
        for x in 0..width as i64 {
            if rng.gen_bool(density) {
                state.push(Cell::new(x, y));
            }
        }
    }
    state
}
