//! Solver error type

use std::fmt;

/// Structural failures of the solving core
///
/// All solver operations are pure, so none of these are transient.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolverError {
    /// A selector was asked to choose from an empty candidate set
    EmptyCandidates,
}

impl fmt::Display for SolverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyCandidates => write!(f, "No candidates to choose a guess from"),
        }
    }
}

impl std::error::Error for SolverError {}
