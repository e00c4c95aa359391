//! Terminal output formatting
//!
//! Console reports for the command results.

pub mod display;
pub mod formatters;

pub use display::{print_analysis_result, print_benchmark_result, print_solve_result};
