//! The [`SolveError`] failure taxonomy.
//!
//! Every failure the engine can produce is one of these variants; there is no
//! partial or best-effort answer. The calling layer maps variants to
//! user-facing messages and status codes.

use std::fmt;

use crate::geom::GridPos;

/// Errors produced while indexing a matrix or solving a hunt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveError {
    /// Row/column counts do not match the declared dimensions.
    InvalidDimensions(String),
    /// A cell value lies outside `[1, p]`.
    MalformedCell {
        pos: GridPos,
        value: i32,
        max_chest: i32,
    },
    /// No cell carries the given chest number.
    MissingChest(i32),
    /// A layer reached the solver with no candidates. Unreachable when the
    /// layers come from `index_chests`.
    EmptyLayer(i32),
    /// The solver's deadline elapsed between layers.
    DeadlineExceeded,
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimensions(detail) => {
                write!(f, "invalid matrix dimensions: {detail}")
            }
            Self::MalformedCell {
                pos,
                value,
                max_chest,
            } => {
                write!(
                    f,
                    "cell {pos} holds {value}, outside the chest range 1..={max_chest}"
                )
            }
            Self::MissingChest(chest) => {
                write!(f, "chest {chest} not found in matrix")
            }
            Self::EmptyLayer(chest) => {
                write!(f, "layer for chest {chest} has no candidates")
            }
            Self::DeadlineExceeded => {
                write!(f, "solve deadline exceeded")
            }
        }
    }
}

impl std::error::Error for SolveError {}
