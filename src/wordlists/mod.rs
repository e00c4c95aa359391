//! Word lists for Wordle solving
//!
//! Provides the embedded dictionary and loaders for custom word lists.

mod embedded;
pub mod loader;

use crate::core::Word;

pub use embedded::{DICTIONARY, DICTIONARY_COUNT};

/// The embedded dictionary as validated, deduplicated words
#[must_use]
pub fn builtin() -> Vec<Word> {
    loader::words_from_slice(DICTIONARY)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dictionary_count_matches_const() {
        assert_eq!(DICTIONARY.len(), DICTIONARY_COUNT);
    }

    #[test]
    fn dictionary_entries_are_valid_words() {
        for &word in DICTIONARY {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn builtin_keeps_every_entry() {
        // The shipped list has no duplicates or invalid lines
        assert_eq!(builtin().len(), DICTIONARY_COUNT);
    }

    #[test]
    fn builtin_keeps_file_order() {
        let words = builtin();
        assert_eq!(words[0].text(), DICTIONARY[0]);
        assert_eq!(words[words.len() - 1].text(), DICTIONARY[DICTIONARY_COUNT - 1]);
    }
}
