//! # Sparse Life
//!
//! Conway's Game of Life on an unbounded grid. Only living cells are stored;
//! each generation is computed over the bounding box of the previous one,
//! grown by one cell on every side.

pub mod bounds;
pub mod cell;
pub mod engine;
pub mod history;
pub mod output;
pub mod patterns;
pub mod render;
pub mod viewer;

pub use bounds::{bounding_box, BoundingBox};
pub use cell::{contains, living_neighbors_of, neighbors_of, same, seed, Cell, State};
pub use engine::{next_generation, will_be_alive, Transition};
pub use history::{iterate, parse_iterations, Generations, MAX_ITERATIONS};
pub use output::{run, write_generations};
pub use patterns::{pattern, pattern_names, soup, Pattern, PATTERNS, SOUP_DENSITY};
pub use render::{printable_glyph, render, ALIVE_GLYPH, DEAD_GLYPH};
pub use viewer::{Viewer, ViewerConfig};
