//! Cells and the sparse living-cell set.
//!
//! The grid is unbounded, so a generation is stored as the list of its living
//! cells only. Membership is a linear scan; the patterns this crate is built
//! for are small enough that a hash set would buy nothing but noise.

use std::fmt;

/// A single grid position. `x` grows to the right, `y` grows upwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: i64,
    pub y: i64,
}

impl Cell {
    pub const fn new(x: i64, y: i64) -> Self {
        Cell { x, y }
    }
}

impl From<(i64, i64)> for Cell {
    fn from((x, y): (i64, i64)) -> Self {
        Cell { x, y }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// The living cells of one generation.
///
/// Order carries no meaning for the rules, but it is kept stable so that the
/// same seed always produces the same sequence of states.
pub type State = Vec<Cell>;

/// Builds a [`State`] from anything that yields cells or `(x, y)` pairs,
/// keeping the given order.
pub fn seed<I, C>(cells: I) -> State
where
    I: IntoIterator<Item = C>,
    C: Into<Cell>,
{
    cells.into_iter().map(Into::into).collect()
}

/// Returns `true` if both cells sit at the same position.
pub fn same(a: Cell, b: Cell) -> bool {
    a.x == b.x && a.y == b.y
}

/// Returns `true` if `cell` is one of the living cells in `state`.
pub fn contains(state: &[Cell], cell: Cell) -> bool {
    state.iter().any(|&entry| same(entry, cell))
}

/// Returns the Moore neighborhood of `cell`.
///
/// The order is fixed: the row below from left to right, then the left and
/// right neighbors, then the row above from left to right.
pub fn neighbors_of(cell: Cell) -> [Cell; 8] {
    let Cell { x, y } = cell;
    [
        Cell::new(x - 1, y - 1),
        Cell::new(x, y - 1),
        Cell::new(x + 1, y - 1),
        Cell::new(x - 1, y),
        Cell::new(x + 1, y),
        Cell::new(x - 1, y + 1),
        Cell::new(x, y + 1),
        Cell::new(x + 1, y + 1),
    ]
}

/// Returns the neighbors of `cell` that are alive in `state`, in the same
/// order as [`neighbors_of`].
pub fn living_neighbors_of(cell: Cell, state: &[Cell]) -> Vec<Cell> {
    neighbors_of(cell)
        .into_iter()
        .filter(|&neighbor| contains(state, neighbor))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_compares_both_components() {
        assert!(same(Cell::new(1, 2), Cell::new(1, 2)));
        assert!(!same(Cell::new(1, 2), Cell::new(2, 1)));
        assert!(!same(Cell::new(1, 2), Cell::new(1, 3)));
    }

    #[test]
    fn contains_finds_members_only() {
        let state = seed([(1, 1), (2, 2)]);
        assert!(contains(&state, Cell::new(2, 2)));
        assert!(!contains(&state, Cell::new(2, 1)));
        assert!(!contains(&[], Cell::new(0, 0)));
    }

    #[test]
    fn seed_keeps_order() {
        let state = seed([(3, 2), (-1, 0), (3, 2)]);
        assert_eq!(
            state,
            vec![Cell::new(3, 2), Cell::new(-1, 0), Cell::new(3, 2)]
        );
    }

    #[test]
    fn neighbors_of_origin() {
        let expected = seed([
            (-1, -1),
            (0, -1),
            (1, -1),
            (-1, 0),
            (1, 0),
            (-1, 1),
            (0, 1),
            (1, 1),
        ]);
        let neighbors = neighbors_of(Cell::new(0, 0));
        assert_eq!(neighbors.to_vec(), expected);
        assert!(!neighbors.contains(&Cell::new(0, 0)));
    }

    #[test]
    fn living_neighbors_follow_enumeration_order() {
        let state = seed([(1, 1), (5, 5), (-1, -1), (0, 1), (0, 0)]);
        assert_eq!(
            living_neighbors_of(Cell::new(0, 0), &state),
            seed([(-1, -1), (0, 1), (1, 1)])
        );
        assert!(living_neighbors_of(Cell::new(10, 10), &state).is_empty());
    }

    #[test]
    fn display_as_pair() {
        assert_eq!(Cell::new(-2, 7).to_string(), "(-2, 7)");
    }
}
