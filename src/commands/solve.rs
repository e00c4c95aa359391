//! Word solving command
//!
//! Solves a specific (or randomly drawn) target word and returns the solution path.

use crate::core::{Pattern, Word, feedback};
use crate::solver::entropy::calculate_metrics;
use crate::solver::{Outcome, solve};
use crate::wordlists::loader::dedup_in_order;
use rand::SeedableRng;
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;

/// Configuration for solving a word
#[derive(Debug, Clone, Default)]
pub struct SolveConfig {
    /// Word to solve for; drawn from the dictionary when absent
    pub target: Option<String>,
    /// Seed for the random draw
    pub seed: Option<u64>,
}

impl SolveConfig {
    #[must_use]
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: Some(target.into()),
            seed: None,
        }
    }

    /// Draw the target at random from the dictionary
    #[must_use]
    pub const fn random(seed: Option<u64>) -> Self {
        Self { target: None, seed }
    }
}

/// Result of solving a word
pub struct SolveResult {
    pub target: String,
    pub outcome: Outcome,
    pub guesses: Vec<GuessStep>,
    /// Whether the target was drawn at random
    pub random_target: bool,
}

impl SolveResult {
    #[must_use]
    pub fn success(&self) -> bool {
        self.outcome == Outcome::Solved
    }
}

/// A single guess step in the solution
pub struct GuessStep {
    pub word: String,
    pub pattern: Pattern,
    pub candidates_before: usize,
    pub candidates_after: usize,
    /// Entropy of the guess over the candidates it was chosen from
    pub entropy: f64,
    pub expected_remaining: f64,
}

/// Solve a word against the given dictionary
///
/// # Errors
///
/// Returns an error if:
/// - The target word is invalid (not 5 letters or contains non-ASCII)
/// - The dictionary is empty
pub fn solve_word(config: SolveConfig, dictionary: &[Word]) -> Result<SolveResult, String> {
    let random_target = config.target.is_none();
    let target = match config.target {
        Some(text) => Word::new(text).map_err(|e| format!("Invalid target word: {e}"))?,
        None => draw_target(dictionary, config.seed)?,
    };

    let report = solve(dictionary, &target).map_err(|e| e.to_string())?;

    // Replay the attempts to report what each guess was chosen from
    let mut pool = dedup_in_order(dictionary.iter().cloned());
    let mut guesses = Vec::with_capacity(report.attempts.len());
    for attempt in &report.attempts {
        let metrics = calculate_metrics(&attempt.guess, &pool);
        guesses.push(GuessStep {
            word: attempt.guess.text().to_string(),
            pattern: attempt.pattern,
            candidates_before: pool.len(),
            candidates_after: attempt.remaining,
            entropy: metrics.entropy,
            expected_remaining: metrics.expected_remaining,
        });
        pool.retain(|candidate| feedback(&attempt.guess, candidate) == attempt.pattern);
    }

    Ok(SolveResult {
        target: target.text().to_string(),
        outcome: report.outcome,
        guesses,
        random_target,
    })
}

/// Pick a random dictionary word, reproducibly when `seed` is given
fn draw_target(dictionary: &[Word], seed: Option<u64>) -> Result<Word, String> {
    let choice = match seed {
        Some(seed) => dictionary.choose(&mut StdRng::seed_from_u64(seed)),
        None => dictionary.choose(&mut rand::rng()),
    };
    let target = choice.cloned().ok_or("Cannot draw a target from an empty dictionary")?;
    log::info!("drew random target {target}");
    Ok(target)
}
