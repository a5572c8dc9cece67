//! Greedy baseline — always step to the nearest legal candidate.
//!
//! Cheap (`O(p · k)` without lookahead) and always valid, but short-sighted:
//! a near candidate now can force a long hop later. The optional one-layer
//! lookahead blends the distance to the nearest candidate of the *next*
//! layer into each score, which softens that without making the solver
//! exact. Exists for benchmarking against [`DpSolver`](crate::DpSolver) and
//! as a fallback when exactness is not required.

use trove_core::{GridPos, SolveError};

use crate::distance::euclidean;
use crate::layers::ChestLayer;
use crate::result::{PathStep, SolveResult};
use crate::traits::Solver;

/// The heuristic solver. Returns a valid path whose fuel is never below the
/// exact solver's.
#[derive(Debug, Clone, Copy)]
pub struct GreedySolver {
    lookahead: Option<f64>,
}

impl GreedySolver {
    /// Default weight on the lookahead term; the estimated future hop
    /// counts for half of an immediate one.
    pub const DEFAULT_WEIGHT: f64 = 0.5;

    /// Plain nearest-candidate selection, no lookahead.
    pub fn new() -> Self {
        Self { lookahead: None }
    }

    /// Blend `weight ×` (distance from each candidate to the nearest
    /// candidate of the following layer) into the selection score.
    pub fn with_lookahead(weight: f64) -> Self {
        Self {
            lookahead: Some(weight),
        }
    }

    /// Walk the layers in chest order, picking the best-scoring candidate of
    /// each. Ties go to the first-encountered candidate in scan order.
    pub fn solve(&mut self, layers: &[ChestLayer]) -> Result<SolveResult, SolveError> {
        let mut path = Vec::with_capacity(layers.len() + 1);
        path.push(PathStep {
            pos: GridPos::ORIGIN,
            chest: 0,
        });
        let mut current = GridPos::ORIGIN;
        let mut fuel = 0.0;

        for (li, layer) in layers.iter().enumerate() {
            if layer.candidates.is_empty() {
                return Err(SolveError::EmptyLayer(layer.chest));
            }
            let next = layers.get(li + 1).map(|l| l.candidates.as_slice());

            let mut best = layer.candidates[0];
            let mut best_score = f64::INFINITY;
            let mut best_step = euclidean(current, best);
            for &c in &layer.candidates {
                let step = euclidean(current, c);
                let mut score = step;
                if let (Some(weight), Some(next)) = (self.lookahead, next) {
                    let ahead = next
                        .iter()
                        .map(|&n| euclidean(c, n))
                        .fold(f64::INFINITY, f64::min);
                    score += weight * ahead;
                }
                if score < best_score {
                    best_score = score;
                    best = c;
                    best_step = step;
                }
            }

            fuel += best_step;
            current = best;
            path.push(PathStep {
                pos: best,
                chest: layer.chest,
            });
        }

        Ok(SolveResult { fuel, path })
    }
}

impl Default for GreedySolver {
    fn default() -> Self {
        Self::new()
    }
}

impl Solver for GreedySolver {
    fn solve(&mut self, layers: &[ChestLayer]) -> Result<SolveResult, SolveError> {
        GreedySolver::solve(self, layers)
    }
}
