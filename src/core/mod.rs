//! Core domain types for Wordle
//!
//! This module contains the word and feedback types with zero external dependencies.
//! Everything here is pure and deterministic.

mod pattern;
mod word;

pub use pattern::{Feedback, Pattern, feedback};
pub use word::{WORD_LENGTH, Word, WordError};
