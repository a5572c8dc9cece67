//! Geometry primitives: [`GridPos`].
//!
//! Coordinates are 1-indexed, matching the request format the engine is fed:
//! row 1 is the top row, column 1 the leftmost column.

use std::fmt;

/// A 1-indexed grid coordinate. Row grows down, column grows right.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridPos {
    pub row: i32,
    pub col: i32,
}

impl GridPos {
    /// The fixed start of every hunt: `(1, 1)`.
    pub const ORIGIN: Self = Self { row: 1, col: 1 };

    /// Create a new position.
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Whether the position lies inside a `rows × cols` grid.
    #[inline]
    pub const fn in_grid(self, rows: i32, cols: i32) -> bool {
        self.row >= 1 && self.row <= rows && self.col >= 1 && self.col <= cols
    }
}

impl PartialOrd for GridPos {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for GridPos {
    /// Row-major order: the order in which a grid scan encounters positions.
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.row.cmp(&other.row).then(self.col.cmp(&other.col))
    }
}

impl fmt::Display for GridPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn grid_pos_round_trip() {
        let p = GridPos::new(2, 5);
        let json = serde_json::to_string(&p).unwrap();
        let back: GridPos = serde_json::from_str(&json).unwrap();
        assert_eq!(p, back);
    }
}
