//! Exact layer-by-layer dynamic program.
//!
//! The ordering constraint fixes *which* chest comes next; the only freedom
//! is which same-numbered cell to visit. The DP sweeps the layers once,
//! carrying the minimum cumulative fuel to every candidate of the current
//! layer, and explores all per-layer choices without enumerating
//! combinations. `O(p · k²)` time for `k` candidates per layer, `O(p · k)`
//! space for the backpointer trail.

use std::time::Instant;

use rayon::prelude::*;
use trove_core::{GridPos, SolveError};

use crate::distance::euclidean;
use crate::layers::ChestLayer;
use crate::result::{PathStep, SolveResult};
use crate::traits::Solver;

/// Above this many `(predecessor, candidate)` pairs the layer transition is
/// evaluated on the rayon pool. Each candidate's predecessor scan stays
/// sequential, so the parallel sweep returns bit-identical results.
const PAR_PAIRS: usize = 1 << 14;

/// The exact solver. Guarantees the minimum total fuel over all candidate
/// choices, visited in strictly increasing chest order from the origin.
///
/// Owns its DP tables and backpointer arena so repeated solves reuse the
/// allocations; results are independent of solver state.
pub struct DpSolver {
    // Rolling per-candidate fuel tables for the previous / current layer.
    prev_fuel: Vec<f64>,
    cur_fuel: Vec<f64>,
    // Backpointer trail: one predecessor index per candidate per layer,
    // flat, addressed through per-layer offsets. `u32::MAX` marks the
    // origin-seeded first layer.
    parents: Vec<u32>,
    offsets: Vec<usize>,
    scored: Vec<(f64, u32)>,
    deadline: Option<Instant>,
}

impl DpSolver {
    pub fn new() -> Self {
        Self {
            prev_fuel: Vec::new(),
            cur_fuel: Vec::new(),
            parents: Vec::new(),
            offsets: Vec::new(),
            scored: Vec::new(),
            deadline: None,
        }
    }

    /// Abort with [`SolveError::DeadlineExceeded`] once the deadline elapses,
    /// checked between layers. Bounds the sweep on pathological inputs with
    /// candidate sets near the full grid.
    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Compute the minimum-fuel path through `layers` from the origin.
    ///
    /// Ties are broken toward the first-encountered candidate in scan order,
    /// so equal inputs always produce identical paths.
    pub fn solve(&mut self, layers: &[ChestLayer]) -> Result<SolveResult, SolveError> {
        let Some(first) = layers.first() else {
            return Ok(SolveResult {
                fuel: 0.0,
                path: vec![PathStep {
                    pos: GridPos::ORIGIN,
                    chest: 0,
                }],
            });
        };
        if first.candidates.is_empty() {
            return Err(SolveError::EmptyLayer(first.chest));
        }

        self.parents.clear();
        self.offsets.clear();
        self.prev_fuel.clear();

        // Layer 1 is seeded from the single origin.
        self.offsets.push(0);
        for &c in &first.candidates {
            self.prev_fuel.push(euclidean(GridPos::ORIGIN, c));
            self.parents.push(u32::MAX);
        }

        let mut prev_candidates: &[GridPos] = &first.candidates;
        for layer in &layers[1..] {
            if let Some(deadline) = self.deadline {
                if Instant::now() >= deadline {
                    return Err(SolveError::DeadlineExceeded);
                }
            }
            if layer.candidates.is_empty() {
                return Err(SolveError::EmptyLayer(layer.chest));
            }

            let prev_fuel = &self.prev_fuel;
            self.scored.clear();
            if prev_candidates.len() * layer.candidates.len() >= PAR_PAIRS {
                layer
                    .candidates
                    .par_iter()
                    .map(|&c| best_predecessor(prev_candidates, prev_fuel, c))
                    .collect_into_vec(&mut self.scored);
            } else {
                self.scored.extend(
                    layer
                        .candidates
                        .iter()
                        .map(|&c| best_predecessor(prev_candidates, prev_fuel, c)),
                );
            }

            self.offsets.push(self.parents.len());
            self.cur_fuel.clear();
            for &(fuel, parent) in &self.scored {
                self.cur_fuel.push(fuel);
                self.parents.push(parent);
            }
            std::mem::swap(&mut self.prev_fuel, &mut self.cur_fuel);
            prev_candidates = &layer.candidates;
        }

        // The answer is the cheapest candidate of the last layer.
        let mut best_idx = 0usize;
        let mut best_fuel = f64::INFINITY;
        for (i, &fuel) in self.prev_fuel.iter().enumerate() {
            if fuel < best_fuel {
                best_fuel = fuel;
                best_idx = i;
            }
        }

        // Walk the backpointer trail from the argmin to the origin.
        let mut path = Vec::with_capacity(layers.len() + 1);
        let mut ci = best_idx;
        for (li, layer) in layers.iter().enumerate().rev() {
            path.push(PathStep {
                pos: layer.candidates[ci],
                chest: layer.chest,
            });
            let parent = self.parents[self.offsets[li] + ci];
            ci = if parent == u32::MAX {
                0
            } else {
                parent as usize
            };
        }
        path.push(PathStep {
            pos: GridPos::ORIGIN,
            chest: 0,
        });
        path.reverse();

        log::debug!("dp: {} layers, fuel {best_fuel:.5}", layers.len());
        Ok(SolveResult {
            fuel: best_fuel,
            path,
        })
    }
}

impl Default for DpSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl Solver for DpSolver {
    fn solve(&mut self, layers: &[ChestLayer]) -> Result<SolveResult, SolveError> {
        DpSolver::solve(self, layers)
    }
}

/// Minimum cumulative fuel to reach `cand` over all predecessors, and the
/// index of the minimizing predecessor. Sequential strict-`<` scan keeps the
/// first-encountered tie-break.
#[inline]
fn best_predecessor(prev: &[GridPos], prev_fuel: &[f64], cand: GridPos) -> (f64, u32) {
    let mut best = f64::INFINITY;
    let mut parent = 0u32;
    for (i, (&p, &fuel)) in prev.iter().zip(prev_fuel).enumerate() {
        let total = fuel + euclidean(p, cand);
        if total < best {
            best = total;
            parent = i as u32;
        }
    }
    (best, parent)
}

#[cfg(test)]
mod tests {
    use super::*;
    use trove_core::Matrix;

    use crate::layers::index_chests;

    fn solve_grid(rows: &[Vec<i32>], p: i32) -> SolveResult {
        let m = Matrix::from_rows(rows.len() as i32, rows[0].len() as i32, rows).unwrap();
        let layers = index_chests(&m, p).unwrap();
        DpSolver::new().solve(&layers).unwrap()
    }

    fn path_fuel(r: &SolveResult) -> f64 {
        r.path
            .windows(2)
            .map(|w| euclidean(w[0].pos, w[1].pos))
            .sum()
    }

    #[test]
    fn single_chest_single_candidate() {
        let r = solve_grid(&[vec![1]], 1);
        assert_eq!(r.fuel, 0.0);
        assert_eq!(r.path.len(), 2);
        assert_eq!(r.path[0].pos, GridPos::ORIGIN);
        assert_eq!(r.path[1].pos, GridPos::new(1, 1));
    }

    #[test]
    fn picks_cheaper_candidate_over_nearest_chain() {
        // Chest 1 sits far from the origin; the optimum threads chest 2
        // through the candidate on the way back.
        let r = solve_grid(&[vec![3, 2, 2], vec![2, 2, 2], vec![2, 2, 1]], 3);
        assert!((r.fuel - 4.0 * 2f64.sqrt()).abs() < 1e-9);
    }

    #[test]
    fn shares_candidates_across_wide_layer() {
        let r = solve_grid(&[vec![2, 1, 1, 1], vec![1, 1, 1, 1], vec![2, 1, 1, 3]], 3);
        assert!((r.fuel - 5.0).abs() < 1e-9);
    }

    #[test]
    fn boustrophedon_unique_labels() {
        let r = solve_grid(
            &[vec![1, 2, 3, 4], vec![8, 7, 6, 5], vec![9, 10, 11, 12]],
            12,
        );
        assert_eq!(r.fuel, 11.0);
        // Unique labels force the snake path outright.
        assert_eq!(r.path[1].pos, GridPos::new(1, 1));
        assert_eq!(r.path[12].pos, GridPos::new(3, 4));
    }

    #[test]
    fn path_shape_and_fuel_consistency() {
        let r = solve_grid(&[vec![3, 2, 2], vec![2, 2, 2], vec![2, 2, 1]], 3);
        assert_eq!(r.path.len(), 4);
        assert_eq!(r.path[0].pos, GridPos::ORIGIN);
        for (k, step) in r.path.iter().enumerate() {
            assert_eq!(step.chest, k as i32);
        }
        assert!((r.fuel - path_fuel(&r)).abs() < 1e-9);
    }

    #[test]
    fn deterministic_across_runs() {
        let rows = vec![vec![1, 2, 1, 2], vec![2, 1, 2, 1], vec![1, 2, 1, 2]];
        let a = solve_grid(&rows, 2);
        let b = solve_grid(&rows, 2);
        assert_eq!(a, b);
    }

    #[test]
    fn solver_reuse_is_clean() {
        let m = Matrix::from_rows(3, 3, &[vec![3, 2, 2], vec![2, 2, 2], vec![2, 2, 1]]).unwrap();
        let layers = index_chests(&m, 3).unwrap();
        let mut solver = DpSolver::new();
        let first = solver.solve(&layers).unwrap();
        let second = solver.solve(&layers).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn empty_layer_is_rejected() {
        let layers = vec![ChestLayer {
            chest: 1,
            candidates: Vec::new(),
        }];
        assert_eq!(
            DpSolver::new().solve(&layers).unwrap_err(),
            SolveError::EmptyLayer(1)
        );
    }

    #[test]
    fn elapsed_deadline_aborts() {
        let m = Matrix::from_rows(2, 2, &[vec![1, 2], vec![2, 1]]).unwrap();
        let layers = index_chests(&m, 2).unwrap();
        let already_elapsed = Instant::now();
        let err = DpSolver::new()
            .with_deadline(already_elapsed)
            .solve(&layers)
            .unwrap_err();
        assert_eq!(err, SolveError::DeadlineExceeded);
    }
}
