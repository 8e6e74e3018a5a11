//! Text rendering of a single generation.
//!
//! The grid covers the bounding box of the state. The highest row is printed
//! first so that `y` grows upwards on screen. Cells in a row are separated by
//! a single space and every row ends with `\n`.

use crate::bounds::bounding_box;
use crate::cell::{contains, Cell};

/// Glyph for a living cell (U+25A3).
pub const ALIVE_GLYPH: char = '\u{25A3}';
/// Glyph for a dead cell (U+25A2).
pub const DEAD_GLYPH: char = '\u{25A2}';

pub fn printable_glyph(cell: Cell, state: &[Cell]) -> char {
    if contains(state, cell) {
        ALIVE_GLYPH
    } else {
        DEAD_GLYPH
    }
}

/// Renders `state` as a block of text.
///
/// An empty state renders as the single dead cell at the origin.
pub fn render(state: &[Cell]) -> String {
    let bounds = bounding_box(state);

    let mut rows: Vec<String> = (bounds.bottom_left.y..=bounds.top_right.y)
        .map(|y| {
            (bounds.bottom_left.x..=bounds.top_right.x)
                .map(|x| printable_glyph(Cell::new(x, y), state).to_string())
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect();
    rows.reverse();

    let mut text = String::new();
    for row in rows {
        text.push_str(&row);
        text.push('\n');
    }
    text
}
