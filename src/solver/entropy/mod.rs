//! Entropy-based guess selection
//!
//! Implements Shannon entropy calculation for Wordle pattern distributions
//! and the selector that maximizes it over the current candidate set.

mod calculator;
mod selector;

pub use calculator::{GuessMetrics, calculate_entropy, calculate_metrics, shannon_entropy};
pub use selector::select_by_entropy;
