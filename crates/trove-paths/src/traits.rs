use trove_core::SolveError;

use crate::layers::ChestLayer;
use crate::result::SolveResult;

/// Common interface of the exact and greedy solvers.
///
/// `layers` must be ordered by chest number as produced by
/// [`index_chests`](crate::index_chests). Implementations may reuse internal
/// scratch buffers between calls, hence `&mut self`; returned results share
/// nothing with the solver.
pub trait Solver {
    fn solve(&mut self, layers: &[ChestLayer]) -> Result<SolveResult, SolveError>;
}
