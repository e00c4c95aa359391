//! Feedback engine and pattern representation
//!
//! A pattern encodes the feedback from a guess using base-3 encoding:
//! - 0 = Absent (gray, letter not in word or all occurrences claimed)
//! - 1 = Present (yellow, letter in word at another position)
//! - 2 = Correct (green, letter in the correct position)
//!
//! The pattern is stored as a single u8 value (0-242), where each position
//! contributes digit × 3^position to the total.

use super::word::{WORD_LENGTH, Word};
use std::fmt;

/// Feedback for a single letter position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feedback {
    /// Correct letter in correct position (green)
    Correct,
    /// Letter appears at another unclaimed position (yellow)
    Present,
    /// No unclaimed occurrence of the letter (gray)
    Absent,
}

impl Feedback {
    const fn digit(self) -> u8 {
        match self {
            Self::Absent => 0,
            Self::Present => 1,
            Self::Correct => 2,
        }
    }

    const fn from_digit(digit: u8) -> Self {
        match digit {
            2 => Self::Correct,
            1 => Self::Present,
            _ => Self::Absent,
        }
    }

    /// Parse a single feedback symbol
    ///
    /// Accepts G/🟩 for Correct, Y/🟨 for Present and `-`, `_`, B, X, ⬜, ⬛
    /// for Absent (letters in either case).
    #[must_use]
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            'G' | 'g' | '🟩' => Some(Self::Correct),
            'Y' | 'y' | '🟨' => Some(Self::Present),
            '-' | '_' | 'B' | 'b' | 'X' | 'x' | '⬜' | '⬛' => Some(Self::Absent),
            _ => None,
        }
    }

    /// Emoji square used in terminal output
    #[must_use]
    pub const fn to_emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

/// Feedback pattern for a guess against an answer
///
/// Represents the five feedback symbols as a single byte value.
/// Value range: 0-242 (3^5 - 1 = 243 possible patterns)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pattern(u8);

impl Pattern {
    /// All greens (perfect match)
    pub const PERFECT: Self = Self(242); // 2 + 2×3 + 2×9 + 2×27 + 2×81

    /// Create a new pattern from a raw value
    ///
    /// # Panics
    /// Panics in debug mode if value >= 243
    #[inline]
    #[must_use]
    pub const fn new(value: u8) -> Self {
        debug_assert!(value < 243, "Pattern value must be < 243");
        Self(value)
    }

    /// Get the raw pattern value (0-242)
    #[inline]
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Check if this is a perfect match (all greens)
    #[inline]
    #[must_use]
    pub const fn is_perfect(self) -> bool {
        self.0 == Self::PERFECT.0
    }

    /// Build a pattern from per-position feedback
    #[must_use]
    pub fn from_feedbacks(feedbacks: [Feedback; WORD_LENGTH]) -> Self {
        let value = feedbacks
            .iter()
            .rev()
            .fold(0u8, |acc, fb| acc * 3 + fb.digit());
        Self(value)
    }

    /// Decode the pattern into per-position feedback
    #[must_use]
    pub fn feedbacks(self) -> [Feedback; WORD_LENGTH] {
        let mut val = self.0;
        std::array::from_fn(|_| {
            let fb = Feedback::from_digit(val % 3);
            val /= 3;
            fb
        })
    }

    /// Calculate the pattern when `guess` is guessed and `answer` is the target
    ///
    /// Each answer letter can be claimed by at most one guess position.
    ///
    /// # Algorithm
    /// 1. First pass: every exact position match is Correct and claims that
    ///    answer position
    /// 2. Second pass: left to right over the remaining guess positions, claim
    ///    the first unclaimed answer position holding the same letter (Present),
    ///    or mark Absent when none is left
    ///
    /// # Examples
    /// ```
    /// use wordle_narrower::core::{Pattern, Word};
    ///
    /// let guess = Word::new("robot").unwrap();
    /// let answer = Word::new("world").unwrap();
    /// let pattern = Pattern::calculate(&guess, &answer);
    ///
    /// use wordle_narrower::core::Feedback::{Absent, Correct, Present};
    /// assert_eq!(pattern.feedbacks(), [Present, Correct, Absent, Absent, Absent]);
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, answer: &Word) -> Self {
        let guess = guess.chars();
        let answer = answer.chars();
        let mut claimed = [false; WORD_LENGTH];
        let mut result = [Feedback::Absent; WORD_LENGTH];

        // Index needed to pair guess[i], answer[i] and the claimed marker
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            if guess[i] == answer[i] {
                result[i] = Feedback::Correct;
                claimed[i] = true;
            }
        }

        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            if result[i] == Feedback::Correct {
                continue;
            }
            let hit = (0..WORD_LENGTH).find(|&j| !claimed[j] && answer[j] == guess[i]);
            if let Some(j) = hit {
                result[i] = Feedback::Present;
                claimed[j] = true;
            }
        }

        Self::from_feedbacks(result)
    }

    /// Count the number of green feedback squares
    #[must_use]
    pub fn count_greens(self) -> usize {
        self.feedbacks()
            .iter()
            .filter(|&&fb| fb == Feedback::Correct)
            .count()
    }

    /// Count the number of yellow feedback squares
    #[must_use]
    pub fn count_yellows(self) -> usize {
        self.feedbacks()
            .iter()
            .filter(|&&fb| fb == Feedback::Present)
            .count()
    }

    /// Parse a pattern from a string like "GY-GY" or "🟩🟨⬜🟩🟨"
    ///
    /// See [`Feedback::from_char`] for the accepted symbols.
    ///
    /// # Examples
    /// ```
    /// use wordle_narrower::core::Pattern;
    ///
    /// let p1 = Pattern::from_str("GY-GY").unwrap();
    /// let p2 = Pattern::from_str("🟩🟨⬜🟩🟨").unwrap();
    /// assert_eq!(p1, p2);
    /// ```
    #[must_use]
    #[allow(clippy::should_implement_trait)] // Option API; FromStr is implemented below
    pub fn from_str(s: &str) -> Option<Self> {
        let feedbacks: Vec<Feedback> = s
            .chars()
            .map(Feedback::from_char)
            .collect::<Option<_>>()?;
        let feedbacks: [Feedback; WORD_LENGTH] = feedbacks.try_into().ok()?;
        Some(Self::from_feedbacks(feedbacks))
    }

    /// Convert pattern to the plain letters accepted by [`Pattern::from_str`]
    ///
    /// # Examples
    /// ```
    /// use wordle_narrower::core::Pattern;
    ///
    /// assert_eq!(Pattern::from_str("gy-gy").unwrap().to_letters(), "GY-GY");
    /// ```
    #[must_use]
    pub fn to_letters(self) -> String {
        self.feedbacks()
            .iter()
            .map(|fb| match fb {
                Feedback::Correct => 'G',
                Feedback::Present => 'Y',
                Feedback::Absent => '-',
            })
            .collect()
    }

    /// Convert pattern to emoji string
    #[must_use]
    pub fn to_emoji(self) -> String {
        self.feedbacks().iter().map(|fb| fb.to_emoji()).collect()
    }
}

impl std::str::FromStr for Pattern {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str(s).ok_or_else(|| format!("Invalid pattern string: {s}"))
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_emoji())
    }
}

/// Feedback of `guess` against `answer`
///
/// Free-function form of [`Pattern::calculate`].
#[inline]
#[must_use]
pub fn feedback(guess: &Word, answer: &Word) -> Pattern {
    Pattern::calculate(guess, answer)
}
