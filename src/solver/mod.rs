//! Wordle solving algorithms
//!
//! Two heuristics pick guesses: position-frequency scoring for the opening
//! guess and entropy maximization for every guess after it. The engine ties
//! them to the feedback engine and filters the candidate set each turn.

mod engine;
pub mod entropy;
mod error;
pub mod frequency;
mod selection;

pub use engine::{Attempt, Outcome, Phase, Session, SolveReport, solve};
pub use entropy::select_by_entropy;
pub use error::SolverError;
pub use frequency::{LetterStats, select_initial};
pub use selection::Scored;
