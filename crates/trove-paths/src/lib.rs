//! Solvers for the grid treasure hunt.
//!
//! A hunt visits one cell per chest number `1..=p`, in strictly increasing
//! order, starting from the fixed origin `(1, 1)`; fuel spent between
//! consecutive cells is their Euclidean distance. Cells share chest numbers,
//! so the solver chooses, per chest, the candidate minimizing the *total*
//! fuel — a constrained shortest path, not a nearest-neighbor walk.
//!
//! This crate provides:
//!
//! - **Indexing** ([`index_chests`]) — one matrix scan into per-chest
//!   candidate layers, validating chest coverage.
//! - **Exact solving** ([`DpSolver`]) — a layer-by-layer dynamic program,
//!   optimal for every `p`.
//! - **Greedy baseline** ([`GreedySolver`]) — nearest-candidate stepping
//!   with optional one-layer lookahead, for benchmarking and cheap answers.
//!
//! Both solvers implement [`Solver`] and break ties toward the
//! first-encountered candidate in scan order, so any given matrix always
//! yields the same path.

mod distance;
mod dp;
mod greedy;
mod layers;
mod result;
mod traits;

pub use distance::euclidean;
pub use dp::DpSolver;
pub use greedy::GreedySolver;
pub use layers::{ChestLayer, index_chests};
pub use result::{Comparison, PathStep, SolveResult};
pub use traits::Solver;

use trove_core::{Matrix, SolveError};

/// Index `matrix` and run the exact solver.
pub fn solve(matrix: &Matrix, p: i32) -> Result<SolveResult, SolveError> {
    let layers = index_chests(matrix, p)?;
    DpSolver::new().solve(&layers)
}

/// Index `matrix` and run the greedy solver with its default lookahead.
pub fn solve_greedy(matrix: &Matrix, p: i32) -> Result<SolveResult, SolveError> {
    let layers = index_chests(matrix, p)?;
    GreedySolver::with_lookahead(GreedySolver::DEFAULT_WEIGHT).solve(&layers)
}

/// Run both solvers on one index and report the fuel gap between them.
pub fn compare(matrix: &Matrix, p: i32) -> Result<Comparison, SolveError> {
    let layers = index_chests(matrix, p)?;
    let optimal = DpSolver::new().solve(&layers)?;
    let greedy = GreedySolver::with_lookahead(GreedySolver::DEFAULT_WEIGHT).solve(&layers)?;
    Ok(Comparison::new(optimal, greedy))
}
