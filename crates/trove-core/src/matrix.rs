//! The [`Matrix`] type — the chest grid as an owned row-major buffer.
//!
//! A `Matrix` owns its cells outright, so a solve holds no shared storage and
//! concurrent solves need no coordination. Shape validation happens at
//! construction; the chest-range check against `p` belongs to the index.

use crate::error::SolveError;
use crate::geom::GridPos;

/// A `rows × cols` grid of chest numbers, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix {
    cells: Vec<i32>,
    rows: i32,
    cols: i32,
}

impl Matrix {
    /// Build a matrix from nested rows, validating the declared shape.
    ///
    /// Fails with [`SolveError::InvalidDimensions`] if `rows`/`cols` are not
    /// both at least 1, if the row count disagrees with `rows`, or if any row
    /// does not hold exactly `cols` cells.
    pub fn from_rows(rows: i32, cols: i32, data: &[Vec<i32>]) -> Result<Self, SolveError> {
        if rows < 1 || cols < 1 {
            return Err(SolveError::InvalidDimensions(format!(
                "declared size {rows}x{cols}, both dimensions must be at least 1"
            )));
        }
        if data.len() != rows as usize {
            return Err(SolveError::InvalidDimensions(format!(
                "declared {rows} rows, got {}",
                data.len()
            )));
        }
        let mut cells = Vec::with_capacity((rows as usize) * (cols as usize));
        for (i, row) in data.iter().enumerate() {
            if row.len() != cols as usize {
                return Err(SolveError::InvalidDimensions(format!(
                    "row {} holds {} cells, declared {cols}",
                    i + 1,
                    row.len()
                )));
            }
            cells.extend_from_slice(row);
        }
        Ok(Self { cells, rows, cols })
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> i32 {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> i32 {
        self.cols
    }

    /// Read the cell at a 1-indexed position. `None` if out of bounds.
    #[inline]
    pub fn at(&self, p: GridPos) -> Option<i32> {
        if !p.in_grid(self.rows, self.cols) {
            return None;
        }
        let idx = (p.row as usize - 1) * (self.cols as usize) + (p.col as usize - 1);
        Some(self.cells[idx])
    }

    /// Row-major iterator over `(position, chest number)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (GridPos, i32)> + '_ {
        let cols = self.cols;
        self.cells.iter().enumerate().map(move |(i, &v)| {
            let row = (i as i32) / cols + 1;
            let col = (i as i32) % cols + 1;
            (GridPos::new(row, col), v)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_rows_valid() {
        let m = Matrix::from_rows(2, 3, &[vec![1, 2, 3], vec![3, 2, 1]]).unwrap();
        assert_eq!(m.rows(), 2);
        assert_eq!(m.cols(), 3);
        assert_eq!(m.at(GridPos::new(1, 1)), Some(1));
        assert_eq!(m.at(GridPos::new(2, 3)), Some(1));
        assert_eq!(m.at(GridPos::new(3, 1)), None);
        assert_eq!(m.at(GridPos::new(0, 1)), None);
    }

    #[test]
    fn from_rows_row_count_mismatch() {
        let err = Matrix::from_rows(3, 2, &[vec![1, 2], vec![2, 1]]).unwrap_err();
        assert!(matches!(err, SolveError::InvalidDimensions(_)));
    }

    #[test]
    fn from_rows_ragged_row() {
        let err = Matrix::from_rows(2, 2, &[vec![1, 2], vec![2]]).unwrap_err();
        assert!(matches!(err, SolveError::InvalidDimensions(_)));
    }

    #[test]
    fn from_rows_zero_dimension() {
        let err = Matrix::from_rows(0, 2, &[]).unwrap_err();
        assert!(matches!(err, SolveError::InvalidDimensions(_)));
    }

    #[test]
    fn iter_row_major() {
        let m = Matrix::from_rows(2, 2, &[vec![1, 2], vec![3, 4]]).unwrap();
        let got: Vec<_> = m.iter().collect();
        assert_eq!(
            got,
            vec![
                (GridPos::new(1, 1), 1),
                (GridPos::new(1, 2), 2),
                (GridPos::new(2, 1), 3),
                (GridPos::new(2, 2), 4),
            ]
        );
    }
}
