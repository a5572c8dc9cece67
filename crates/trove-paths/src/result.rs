//! Result types returned to the caller.

use trove_core::GridPos;

/// One visited position with the chest collected there (chest 0 = origin).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathStep {
    pub pos: GridPos,
    pub chest: i32,
}

/// A solved hunt: total fuel plus the full visiting path.
///
/// The path always has `p + 1` steps: the origin `(1, 1)` with chest 0
/// followed by one step per chest in increasing order. The result is
/// independent of solver state; nothing is shared with later solves.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolveResult {
    pub fuel: f64,
    pub path: Vec<PathStep>,
}

/// Both solvers' answers for one hunt, with the fuel gap between them.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Comparison {
    pub optimal: SolveResult,
    pub greedy: SolveResult,
    /// Extra fuel the greedy path burns over the optimum. Never negative.
    pub gap: f64,
    /// `gap` relative to the optimal fuel, 0 when the optimum is 0.
    pub gap_ratio: f64,
}

impl Comparison {
    pub fn new(optimal: SolveResult, greedy: SolveResult) -> Self {
        let gap = greedy.fuel - optimal.fuel;
        let gap_ratio = if optimal.fuel > 0.0 {
            gap / optimal.fuel
        } else {
            0.0
        };
        Self {
            optimal,
            greedy,
            gap,
            gap_ratio,
        }
    }
}
