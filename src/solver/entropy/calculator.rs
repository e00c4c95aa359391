//! Shannon entropy calculation for Wordle patterns
//!
//! Given a guess and set of candidates, computes the expected information gain.

use crate::core::{Pattern, Word};
use rustc_hash::FxHashMap;
use std::borrow::Borrow;

/// Comprehensive metrics for evaluating a guess
#[derive(Debug, Clone, Copy)]
pub struct GuessMetrics {
    /// Shannon entropy (expected information gain in bits)
    pub entropy: f64,
    /// Expected number of remaining candidates after this guess
    pub expected_remaining: f64,
    /// Maximum partition size (worst-case remaining candidates)
    pub max_partition: usize,
}

/// Calculate Shannon entropy for a guess against candidates
///
/// Returns the expected information gain in bits.
///
/// # Formula
/// H(X) = -Σ p(x) * log₂(p(x))
///
/// where p(x) is the probability of observing pattern x.
///
/// # Examples
/// ```
/// use wordle_narrower::core::Word;
/// use wordle_narrower::solver::entropy::calculate_entropy;
///
/// let candidates = vec![
///     Word::new("abcde").unwrap(),
///     Word::new("fghij").unwrap(),
/// ];
///
/// // All-green against one, all-gray against the other: one bit
/// let entropy = calculate_entropy(&candidates[0], &candidates);
/// assert!((entropy - 1.0).abs() < 1e-12);
/// ```
#[must_use]
pub fn calculate_entropy<W: Borrow<Word>>(guess: &Word, candidates: &[W]) -> f64 {
    if candidates.is_empty() {
        return 0.0;
    }

    let pattern_counts = group_by_pattern(guess, candidates);
    shannon_entropy(&pattern_counts)
}

/// Group candidates by the pattern they produce with the guess
fn group_by_pattern<W: Borrow<Word>>(guess: &Word, candidates: &[W]) -> FxHashMap<Pattern, usize> {
    let mut counts = FxHashMap::default();

    for candidate in candidates {
        let pattern = Pattern::calculate(guess, candidate.borrow());
        *counts.entry(pattern).or_insert(0) += 1;
    }

    counts
}

/// Calculate Shannon entropy from pattern distribution
///
/// H = -Σ p * log₂(p)
///
/// Counts are summed smallest first, so two distributions with the same bucket
/// sizes give bit-identical results whatever the map's iteration order.
///
/// # Properties
/// - Returns 0.0 for certain outcome (one pattern with p=1)
/// - Maximized for uniform distribution
/// - Always in range [0, log₂(n)] for n patterns
///
/// # Examples
/// ```
/// use wordle_narrower::solver::entropy::shannon_entropy;
/// use rustc_hash::FxHashMap;
/// use wordle_narrower::core::Pattern;
///
/// let mut uniform = FxHashMap::default();
/// uniform.insert(Pattern::new(0), 25);
/// uniform.insert(Pattern::new(1), 25);
/// uniform.insert(Pattern::new(2), 25);
/// uniform.insert(Pattern::new(3), 25);
///
/// let entropy = shannon_entropy(&uniform);
/// assert!((entropy - 2.0).abs() < 0.001); // log2(4) = 2 bits
/// ```
#[must_use]
pub fn shannon_entropy<S>(pattern_counts: &std::collections::HashMap<Pattern, usize, S>) -> f64
where
    S: std::hash::BuildHasher,
{
    let mut counts: Vec<usize> = pattern_counts
        .values()
        .copied()
        .filter(|&count| count > 0)
        .collect();
    if counts.is_empty() {
        return 0.0;
    }
    counts.sort_unstable();

    let total = counts.iter().sum::<usize>() as f64;

    counts
        .into_iter()
        .map(|count| {
            let count = count as f64;
            // p × log₂(1/p) keeps the single-bucket case at +0.0
            (count / total) * (total / count).log2()
        })
        .sum()
}

/// Calculate comprehensive metrics for a guess
///
/// Returns entropy, expected remaining candidates, and max partition size.
pub fn calculate_metrics<W: Borrow<Word>>(guess: &Word, candidates: &[W]) -> GuessMetrics {
    if candidates.is_empty() {
        return GuessMetrics {
            entropy: 0.0,
            expected_remaining: 0.0,
            max_partition: 0,
        };
    }

    let pattern_counts = group_by_pattern(guess, candidates);
    let total = candidates.len() as f64;

    let entropy = shannon_entropy(&pattern_counts);

    // Σ p × size: the expected size of the bucket the answer lands in
    let expected_remaining: f64 = pattern_counts
        .values()
        .map(|&count| {
            let count = count as f64;
            count * count / total
        })
        .sum();

    let max_partition = pattern_counts.values().copied().max().unwrap_or(0);

    GuessMetrics {
        entropy,
        expected_remaining,
        max_partition,
    }
}
