//! Pure entropy-based word selection
//!
//! Selects words that maximize Shannon entropy (expected information gain).

use super::calculator::calculate_entropy;
use crate::core::Word;
use crate::solver::SolverError;
use crate::solver::selection::{Scored, select_max};

/// Select the guess with the highest entropy over `candidates`
///
/// Only members of the current candidate set are considered as guesses. Ties
/// go to the word that comes first in `candidates`; a single candidate scores
/// 0 bits and is returned as is.
///
/// # Errors
/// Returns `SolverError::EmptyCandidates` if `candidates` is empty.
///
/// # Examples
/// ```
/// use wordle_narrower::core::Word;
/// use wordle_narrower::solver::select_by_entropy;
///
/// let candidates: Vec<Word> = ["zzzzz", "slate", "irate", "crate", "grate"]
///     .iter()
///     .map(|w| Word::new(*w).unwrap())
///     .collect();
///
/// let best = select_by_entropy(&candidates).unwrap();
/// assert_ne!(best.word.text(), "zzzzz");
/// assert!(best.score > 0.0);
/// ```
pub fn select_by_entropy(candidates: &[Word]) -> Result<Scored<'_>, SolverError> {
    let best = select_max(candidates, |guess| calculate_entropy(guess, candidates))?;
    log::trace!(
        "entropy guess {} scored {:.4} bits over {} candidates",
        best.word,
        best.score,
        candidates.len()
    );
    Ok(best)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(*w).unwrap()).collect()
    }

    #[test]
    fn selects_highest_entropy() {
        // AAAAA only tells grate-like words apart by their A; SLATE splits more
        let candidates = words(&["aaaaa", "slate", "irate", "crate", "grate"]);

        let best = select_by_entropy(&candidates).unwrap();

        assert_ne!(best.word.text(), "aaaaa");
        let aaaaa = calculate_entropy(&candidates[0], &candidates);
        assert!(best.score > aaaaa);
    }

    #[test]
    fn single_candidate_scores_zero() {
        let candidates = words(&["crane"]);

        let best = select_by_entropy(&candidates).unwrap();
        assert_eq!(best.word.text(), "crane");
        assert!(best.score.abs() < f64::EPSILON);
    }

    #[test]
    fn disjoint_pair_ties_to_first() {
        // Both words split the pair into all-green and all-gray: one bit each
        let candidates = words(&["fghij", "abcde"]);

        let best = select_by_entropy(&candidates).unwrap();
        assert_eq!(best.word.text(), "fghij");
        assert!((best.score - 1.0).abs() < 1e-12);
    }

    #[test]
    fn deterministic_across_calls() {
        let candidates = words(&[
            "crane", "slate", "trace", "crate", "raise", "arise", "stare", "roast", "toast",
            "beast",
        ]);

        let first = select_by_entropy(&candidates).unwrap();
        for _ in 0..5 {
            let again = select_by_entropy(&candidates).unwrap();
            assert_eq!(again.word, first.word);
            assert_eq!(again.score.to_bits(), first.score.to_bits());
        }
    }

    #[test]
    fn score_matches_calculator() {
        let candidates = words(&["crane", "slate", "trace", "crate"]);
        let best = select_by_entropy(&candidates).unwrap();
        let direct = calculate_entropy(best.word, &candidates);
        assert_eq!(best.score.to_bits(), direct.to_bits());
    }

    #[test]
    fn empty_set_is_rejected() {
        assert_eq!(select_by_entropy(&[]), Err(SolverError::EmptyCandidates));
    }
}
