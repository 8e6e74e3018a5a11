use crate::cell::Cell;

/// Smallest axis-aligned rectangle holding every living cell, inclusive on
/// all sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    /// Largest `x` and largest `y`.
    pub top_right: Cell,
    /// Smallest `x` and smallest `y`.
    pub bottom_left: Cell,
}

impl BoundingBox {
    /// Returns a copy grown by `by` cells on every side.
    pub fn expanded(&self, by: i64) -> BoundingBox {
        BoundingBox {
            top_right: Cell::new(self.top_right.x + by, self.top_right.y + by),
            bottom_left: Cell::new(self.bottom_left.x - by, self.bottom_left.y - by),
        }
    }

    pub fn width(&self) -> i64 {
        self.top_right.x - self.bottom_left.x + 1
    }

    pub fn height(&self) -> i64 {
        self.top_right.y - self.bottom_left.y + 1
    }
}

impl Default for BoundingBox {
    /// The single cell at the origin.
    fn default() -> Self {
        BoundingBox {
            top_right: Cell::new(0, 0),
            bottom_left: Cell::new(0, 0),
        }
    }
}

/// Computes the bounding box of `state`.
///
/// An empty state has no extent; it is given the one-cell box at the origin
/// rather than an error, so rendering and stepping an empty state stay
/// well-defined.
pub fn bounding_box(state: &[Cell]) -> BoundingBox {
    let Some((first, rest)) = state.split_first() else {
        return BoundingBox::default();
    };

    rest.iter().fold(
        BoundingBox {
            top_right: *first,
            bottom_left: *first,
        },
        |bounds, cell| BoundingBox {
            top_right: Cell::new(bounds.top_right.x.max(cell.x), bounds.top_right.y.max(cell.y)),
            bottom_left: Cell::new(
                bounds.bottom_left.x.min(cell.x),
                bounds.bottom_left.y.min(cell.y),
            ),
        },
    )
}
