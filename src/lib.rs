//! Wordle Narrower
//!
//! Narrows a Wordle dictionary down to the answer: a position-frequency
//! heuristic picks the opening guess, then each following guess maximises the
//! Shannon entropy of the feedback over the remaining candidates.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_narrower::core::{Pattern, Word};
//! use wordle_narrower::solver::solve;
//! use wordle_narrower::wordlists::builtin;
//!
//! let guess = Word::new("crane").unwrap();
//! let answer = Word::new("slate").unwrap();
//! assert_eq!(Pattern::calculate(&guess, &answer).to_letters(), "--G-G");
//!
//! let report = solve(&builtin(), &answer).unwrap();
//! assert!(report.is_solved());
//! assert_eq!(report.attempts.last().unwrap().guess, answer);
//! ```

// Core domain types
pub mod core;

// Guess selection and the elimination loop
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
