//! Position-frequency scoring for the opening guess
//!
//! Scores words by how likely their letters are to come back green or yellow
//! over the whole candidate set, without simulating any feedback. Cheap enough
//! to run once against the full dictionary.

use super::selection::{Scored, select_max};
use super::SolverError;
use crate::core::{WORD_LENGTH, Word};

const ALPHABET: usize = 26;

/// Weight of the "present at another position" term
const ELSEWHERE_WEIGHT: f64 = 0.5;

/// Letter statistics over a candidate set
///
/// Built fresh for each selection and dropped afterwards.
#[derive(Debug, Clone)]
pub struct LetterStats {
    /// `positional[i][c]`: words with letter `c` at position `i`
    positional: [[u32; ALPHABET]; WORD_LENGTH],
    /// `overall[c]`: words containing letter `c` anywhere (counted once per word)
    overall: [u32; ALPHABET],
    total: usize,
}

impl LetterStats {
    /// Count letters over `words`
    #[must_use]
    pub fn from_words(words: &[Word]) -> Self {
        let mut positional = [[0u32; ALPHABET]; WORD_LENGTH];
        let mut overall = [0u32; ALPHABET];

        for word in words {
            let mut seen = [false; ALPHABET];
            for (i, table) in positional.iter_mut().enumerate() {
                let letter = word.letter_index(i);
                table[letter] += 1;
                if !seen[letter] {
                    seen[letter] = true;
                    overall[letter] += 1;
                }
            }
        }

        Self {
            positional,
            overall,
            total: words.len(),
        }
    }

    /// Number of words the statistics were built from
    #[must_use]
    pub const fn total(&self) -> usize {
        self.total
    }

    /// Opening score of `word`
    ///
    /// For every position, adds the share of words with the same letter there.
    /// The first time each distinct letter is met (left to right), also adds
    /// half the share of words holding that letter at some other position.
    /// Returns 0.0 for statistics built from no words.
    #[must_use]
    pub fn opening_score(&self, word: &Word) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        let n = self.total as f64;
        let mut seen = [false; ALPHABET];
        let mut score = 0.0;

        for (i, table) in self.positional.iter().enumerate() {
            let letter = word.letter_index(i);
            let here = table[letter];
            score += f64::from(here) / n;

            if !seen[letter] {
                seen[letter] = true;
                let elsewhere = self.overall[letter].saturating_sub(here);
                score += ELSEWHERE_WEIGHT * f64::from(elsewhere) / n;
            }
        }

        score
    }
}

/// Select the opening guess by position-frequency score
///
/// Ties go to the word that comes first in `candidates`.
///
/// # Errors
/// Returns `SolverError::EmptyCandidates` if `candidates` is empty.
///
/// # Examples
/// ```
/// use wordle_narrower::core::Word;
/// use wordle_narrower::solver::select_initial;
///
/// let candidates: Vec<Word> = ["crate", "crane", "zzzzz"]
///     .iter()
///     .map(|w| Word::new(*w).unwrap())
///     .collect();
///
/// let best = select_initial(&candidates).unwrap();
/// assert_eq!(best.word.text(), "crate");
/// ```
pub fn select_initial(candidates: &[Word]) -> Result<Scored<'_>, SolverError> {
    let stats = LetterStats::from_words(candidates);
    let best = select_max(candidates, |word| stats.opening_score(word))?;
    log::trace!(
        "opening guess {} scored {:.4} over {} candidates",
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

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn positional_and_elsewhere_terms() {
        let candidates = words(&["abcde", "eabcd", "vwxyz"]);
        let stats = LetterStats::from_words(&candidates);

        // Each letter of ABCDE is in place for 1/3 of the set and elsewhere
        // for another 1/3: 5 × (1/3 + 0.5 × 1/3)
        assert!(close(stats.opening_score(&candidates[0]), 2.5));
        assert!(close(stats.opening_score(&candidates[1]), 2.5));
        // VWXYZ shares nothing: only the positional 5 × 1/3
        assert!(close(stats.opening_score(&candidates[2]), 5.0 / 3.0));
    }

    #[test]
    fn elsewhere_bonus_only_on_first_occurrence() {
        let candidates = words(&["eerie", "abcde"]);
        let stats = LetterStats::from_words(&candidates);

        // Positional: 1/2 × 4 + 2/2 = 3; first E adds 0.5 × (2 - 1) / 2
        assert!(close(stats.opening_score(&candidates[0]), 3.25));
        assert!(close(stats.opening_score(&candidates[1]), 3.0));
    }

    #[test]
    fn overall_counts_each_word_once() {
        let candidates = words(&["aaaaa"]);
        let stats = LetterStats::from_words(&candidates);
        assert_eq!(stats.total(), 1);
        // Every A is in place; no other word holds an A elsewhere
        assert!(close(stats.opening_score(&candidates[0]), 5.0));
    }

    #[test]
    fn selects_best_opening() {
        let candidates = words(&["zzzzz", "crane", "crate", "trace"]);
        let best = select_initial(&candidates).unwrap();
        assert!(best.word.text() != "zzzzz");
        assert!(best.score > 0.0);
    }

    #[test]
    fn ties_resolve_to_first_encountered() {
        let forward = words(&["crane", "crate", "zzzzz"]);
        let backward = words(&["crate", "crane", "zzzzz"]);

        assert_eq!(select_initial(&forward).unwrap().word.text(), "crane");
        assert_eq!(select_initial(&backward).unwrap().word.text(), "crate");
    }

    #[test]
    fn empty_set_is_rejected() {
        assert_eq!(select_initial(&[]), Err(SolverError::EmptyCandidates));
    }

    #[test]
    fn empty_stats_score_zero() {
        let stats = LetterStats::from_words(&[]);
        assert!(close(stats.opening_score(&Word::new("crane").unwrap()), 0.0));
    }
}
