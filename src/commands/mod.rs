//! Command implementations

pub mod analyze;
pub mod benchmark;
pub mod play;
pub mod solve;

pub use analyze::{AnalysisResult, analyze_word};
pub use benchmark::{BenchmarkConfig, BenchmarkResult, run_benchmark};
pub use play::{PlayInput, PlaySummary, parse_input, run_play, run_play_with};
pub use solve::{GuessStep, SolveConfig, SolveResult, solve_word};
