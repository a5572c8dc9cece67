//! Chest indexing — one scan of the matrix into per-chest candidate layers.

use trove_core::{GridPos, Matrix, SolveError};

/// All candidate positions for one chest number, in row-major scan order.
///
/// Scan order is the tie-break order for every solver, so results are
/// reproducible across runs.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChestLayer {
    pub chest: i32,
    pub candidates: Vec<GridPos>,
}

/// Scan `matrix` once and group cell positions by chest number.
///
/// Returns one layer per chest in `1..=p`, ordered by chest number, each
/// holding its candidates in row-major scan order. Fails with
/// [`SolveError::MalformedCell`] on a cell outside `[1, p]` and
/// [`SolveError::MissingChest`] when some chest has no candidates.
pub fn index_chests(matrix: &Matrix, p: i32) -> Result<Vec<ChestLayer>, SolveError> {
    if p < 1 {
        return Err(SolveError::InvalidDimensions(format!(
            "chest count {p}, must be at least 1"
        )));
    }

    let mut layers: Vec<ChestLayer> = (1..=p)
        .map(|chest| ChestLayer {
            chest,
            candidates: Vec::new(),
        })
        .collect();

    for (pos, value) in matrix.iter() {
        if value < 1 || value > p {
            return Err(SolveError::MalformedCell {
                pos,
                value,
                max_chest: p,
            });
        }
        layers[(value - 1) as usize].candidates.push(pos);
    }

    for layer in &layers {
        if layer.candidates.is_empty() {
            return Err(SolveError::MissingChest(layer.chest));
        }
    }

    log::debug!(
        "indexed {}x{} matrix into {p} layers, widest {}",
        matrix.rows(),
        matrix.cols(),
        layers.iter().map(|l| l.candidates.len()).max().unwrap_or(0)
    );
    Ok(layers)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matrix(rows: &[Vec<i32>]) -> Matrix {
        Matrix::from_rows(rows.len() as i32, rows[0].len() as i32, rows).unwrap()
    }

    #[test]
    fn groups_in_scan_order() {
        let m = matrix(&[vec![2, 1, 1], vec![1, 2, 1]]);
        let layers = index_chests(&m, 2).unwrap();
        assert_eq!(layers.len(), 2);
        assert_eq!(layers[0].chest, 1);
        assert_eq!(
            layers[0].candidates,
            vec![
                GridPos::new(1, 2),
                GridPos::new(1, 3),
                GridPos::new(2, 1),
                GridPos::new(2, 3),
            ]
        );
        assert_eq!(
            layers[1].candidates,
            vec![GridPos::new(1, 1), GridPos::new(2, 2)]
        );
    }

    #[test]
    fn missing_chest() {
        let m = matrix(&[vec![1, 2], vec![2, 1]]);
        assert_eq!(index_chests(&m, 3).unwrap_err(), SolveError::MissingChest(3));
    }

    #[test]
    fn malformed_cell_too_large() {
        let m = matrix(&[vec![1, 5], vec![2, 1]]);
        let err = index_chests(&m, 2).unwrap_err();
        assert_eq!(
            err,
            SolveError::MalformedCell {
                pos: GridPos::new(1, 2),
                value: 5,
                max_chest: 2,
            }
        );
    }

    #[test]
    fn malformed_cell_non_positive() {
        let m = matrix(&[vec![1, 0], vec![2, 1]]);
        assert!(matches!(
            index_chests(&m, 2).unwrap_err(),
            SolveError::MalformedCell { value: 0, .. }
        ));
    }

    #[test]
    fn rejects_non_positive_chest_count() {
        let m = matrix(&[vec![1]]);
        assert!(matches!(
            index_chests(&m, 0).unwrap_err(),
            SolveError::InvalidDimensions(_)
        ));
    }
}
