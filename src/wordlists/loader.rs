//! Word list loading utilities
//!
//! Entries that are not five ASCII letters are skipped. Duplicates are dropped,
//! keeping the first occurrence, so the resulting order is the file order.

use crate::core::Word;
use rustc_hash::FxHashSet;
use std::fs;
use std::io;
use std::path::Path;

/// Load words from a file, one per line
///
/// Blank lines and lines starting with `#` are ignored.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_narrower::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let words = parse_word_list(&content);
    log::info!("loaded {} words from {}", words.len(), path.display());
    Ok(words)
}

/// Parse a newline-separated word list
#[must_use]
pub fn parse_word_list(content: &str) -> Vec<Word> {
    let entries: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .collect();
    words_from_slice(&entries)
}

/// Convert a string slice to a Word vector
///
/// # Examples
/// ```
/// use wordle_narrower::wordlists::loader::words_from_slice;
///
/// let words = words_from_slice(&["crane", "toolong", "slate", "crane"]);
/// assert_eq!(words.len(), 2);
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    let valid: Vec<Word> = slice
        .iter()
        .filter_map(|&entry| match Word::new(entry) {
            Ok(word) => Some(word),
            Err(e) => {
                log::debug!("skipping word list entry {entry:?}: {e}");
                None
            }
        })
        .collect();
    dedup_in_order(valid)
}

/// Remove duplicate words, keeping the first occurrence of each
#[must_use]
pub fn dedup_in_order(words: impl IntoIterator<Item = Word>) -> Vec<Word> {
    let mut seen = FxHashSet::default();
    let mut unique = Vec::new();
    let mut duplicates = 0usize;

    for word in words {
        if seen.insert(word.clone()) {
            unique.push(word);
        } else {
            duplicates += 1;
        }
    }

    if duplicates > 0 {
        log::debug!("dropped {duplicates} duplicate words");
    }
    unique
}
