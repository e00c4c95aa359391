//! Word analysis command
//!
//! Scores a specific word as a guess against the whole dictionary, with both
//! heuristics, and compares it with the words each heuristic would pick.

use crate::core::Word;
use crate::solver::entropy::calculate_metrics;
use crate::solver::{LetterStats, select_by_entropy, select_initial};
use crate::wordlists::loader::dedup_in_order;

/// Result of analyzing a word
pub struct AnalysisResult {
    pub word: String,
    pub entropy: f64,
    pub expected_reduction: f64,
    pub expected_remaining: f64,
    pub max_partition: usize,
    pub opening_score: f64,
    pub total_candidates: usize,
    /// Word the opening heuristic picks, with its score
    pub best_opening: (String, f64),
    /// Word with the highest entropy over the dictionary, with its entropy
    pub best_entropy: (String, f64),
}

/// Analyze a word against the dictionary
///
/// # Errors
///
/// Returns an error if:
/// - The word is invalid (not 5 letters or contains non-ASCII)
/// - The word is not in the provided dictionary
pub fn analyze_word(word: &str, dictionary: &[Word]) -> Result<AnalysisResult, String> {
    let word_obj = Word::new(word).map_err(|e| format!("Invalid word: {e}"))?;

    let candidates = dedup_in_order(dictionary.iter().cloned());
    if !candidates.contains(&word_obj) {
        return Err(format!("Word '{word}' not in word list"));
    }

    let metrics = calculate_metrics(&word_obj, &candidates);
    let stats = LetterStats::from_words(&candidates);
    let best_opening = select_initial(&candidates).map_err(|e| e.to_string())?;
    let best_entropy = select_by_entropy(&candidates).map_err(|e| e.to_string())?;

    let expected_reduction = metrics.entropy.exp2();

    Ok(AnalysisResult {
        word: word_obj.text().to_string(),
        entropy: metrics.entropy,
        expected_reduction,
        expected_remaining: metrics.expected_remaining,
        max_partition: metrics.max_partition,
        opening_score: stats.opening_score(&word_obj),
        total_candidates: stats.total(),
        best_opening: (best_opening.word.text().to_string(), best_opening.score),
        best_entropy: (best_entropy.word.text().to_string(), best_entropy.score),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    fn small_dictionary() -> Vec<Word> {
        words_from_slice(&[
            "crane", "slate", "trace", "crate", "raise", "arise", "stare", "roast", "toast",
            "beast", "grate", "irate",
        ])
    }

    #[test]
    fn analyze_valid_word() {
        let dictionary = small_dictionary();
        let result = analyze_word("crane", &dictionary).unwrap();

        assert_eq!(result.word, "crane");
        assert!(result.entropy > 0.0);
        assert!(result.expected_reduction >= 1.0);
        assert!(result.max_partition >= 1);
        assert!(result.opening_score > 0.0);
        assert_eq!(result.total_candidates, 12);
    }

    #[test]
    fn analyze_reports_best_words() {
        let dictionary = small_dictionary();
        let result = analyze_word("toast", &dictionary).unwrap();

        // No dictionary word beats the entropy leader
        assert!(result.best_entropy.1 >= result.entropy);
        assert!(result.best_opening.1 >= result.opening_score);
    }

    #[test]
    fn analyze_best_word_matches_itself() {
        let dictionary = small_dictionary();
        let leader = analyze_word("crane", &dictionary).unwrap().best_entropy;
        let result = analyze_word(&leader.0, &dictionary).unwrap();

        assert_eq!(result.entropy.to_bits(), leader.1.to_bits());
    }

    #[test]
    fn analyze_uppercase_input() {
        let dictionary = small_dictionary();
        let result = analyze_word("SLATE", &dictionary).unwrap();
        assert_eq!(result.word, "slate");
    }

    #[test]
    fn analyze_invalid_word() {
        let dictionary = small_dictionary();
        assert!(analyze_word("toolong", &dictionary).is_err());
        assert!(analyze_word("cr4ne", &dictionary).is_err());
    }

    #[test]
    fn analyze_word_not_in_list() {
        let dictionary = small_dictionary();
        let err = analyze_word("zebra", &dictionary).err().unwrap();
        assert!(err.contains("not in word list"));
    }
}
