//! Benchmark command
//!
//! Solves many target words in parallel and collects guess statistics.

use crate::core::Word;
use crate::solver::{Outcome, solve};
use crate::wordlists::loader::dedup_in_order;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Configuration for a benchmark run
#[derive(Debug, Clone, Default)]
pub struct BenchmarkConfig {
    /// Number of dictionary words to solve (all when absent)
    pub count: Option<usize>,
    /// Draw a progress bar on stderr
    pub show_progress: bool,
}

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_words: usize,
    pub solved: usize,
    pub exhausted: usize,
    pub total_guesses: usize,
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    /// Guess count → number of solved words
    pub distribution: BTreeMap<usize, usize>,
    /// Solved words needing the most guesses, hardest first
    pub hardest: Vec<(String, usize)>,
    pub duration: Duration,
    pub words_per_second: f64,
}

/// Run the solver against the first `count` dictionary words
///
/// Every target gets its own session, so targets are solved in parallel.
///
/// # Errors
///
/// Returns an error if the dictionary is empty.
pub fn run_benchmark(
    config: &BenchmarkConfig,
    dictionary: &[Word],
) -> Result<BenchmarkResult, String> {
    let dictionary = dedup_in_order(dictionary.iter().cloned());
    if dictionary.is_empty() {
        return Err("Cannot benchmark an empty dictionary".to_string());
    }

    let count = config.count.unwrap_or(dictionary.len()).min(dictionary.len());
    let targets = &dictionary[..count];

    let pb = if config.show_progress {
        ProgressBar::new(count as u64)
    } else {
        ProgressBar::hidden()
    };
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .map_err(|e| e.to_string())?
            .progress_chars("█▓▒░"),
    );

    let start = Instant::now();

    let runs: Vec<(String, Outcome, usize)> = targets
        .par_iter()
        .map(|target| {
            let run = solve(&dictionary, target).map(|report| {
                (
                    target.text().to_string(),
                    report.outcome,
                    report.guess_count(),
                )
            });
            pb.inc(1);
            run
        })
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| e.to_string())?;

    pb.finish_with_message("Complete!");
    let duration = start.elapsed();

    let mut distribution: BTreeMap<usize, usize> = BTreeMap::new();
    let mut solved_counts = Vec::new();
    let mut exhausted = 0;
    for (_, outcome, guesses) in &runs {
        match outcome {
            Outcome::Solved => {
                *distribution.entry(*guesses).or_insert(0) += 1;
                solved_counts.push(*guesses);
            }
            Outcome::Exhausted => exhausted += 1,
        }
    }

    let solved = solved_counts.len();
    let total_guesses: usize = solved_counts.iter().sum();
    let average_guesses = if solved > 0 {
        total_guesses as f64 / solved as f64
    } else {
        0.0
    };

    let mut hardest: Vec<(String, usize)> = runs
        .iter()
        .filter(|(_, outcome, _)| *outcome == Outcome::Solved)
        .map(|(word, _, guesses)| (word.clone(), *guesses))
        .collect();
    // Stable sort keeps dictionary order among equal counts
    hardest.sort_by_key(|(_, guesses)| std::cmp::Reverse(*guesses));
    hardest.truncate(10);

    log::info!(
        "benchmark: {solved}/{count} solved, average {average_guesses:.3} guesses in {:.2}s",
        duration.as_secs_f64()
    );

    Ok(BenchmarkResult {
        total_words: count,
        solved,
        exhausted,
        total_guesses,
        average_guesses,
        min_guesses: solved_counts.iter().copied().min().unwrap_or(0),
        max_guesses: solved_counts.iter().copied().max().unwrap_or(0),
        distribution,
        hardest,
        duration,
        words_per_second: count as f64 / duration.as_secs_f64().max(f64::EPSILON),
    })
}
