//! Formatting utilities for terminal output

/// Bits of information in a guess that splits the candidates 64 ways
const ENTROPY_SCALE: f64 = 6.0;

/// Create a progress bar string
///
/// A non-positive `max` gives an empty bar.
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    let ratio = if max > 0.0 {
        (value / max).clamp(0.0, 1.0)
    } else {
        0.0
    };
    // Cast is safe: ratio is clamped to [0, 1]
    let filled = ((ratio * width as f64).round() as usize).min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format entropy as a bar scaled to six bits
#[must_use]
pub fn entropy_bar(entropy: f64, width: usize) -> String {
    create_progress_bar(entropy, ENTROPY_SCALE, width)
}

/// Share of `part` in `whole` as a percentage, 0 for an empty whole
#[must_use]
pub fn percentage(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64 * 100.0
    }
}

/// "guess" or "guesses" to follow a count
#[must_use]
pub const fn guess_noun(count: usize) -> &'static str {
    if count == 1 { "guess" } else { "guesses" }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_clamps_overflow() {
        assert_eq!(create_progress_bar(250.0, 100.0, 4), "████");
        assert_eq!(create_progress_bar(-1.0, 100.0, 4), "░░░░");
        assert_eq!(create_progress_bar(1.0, 0.0, 4), "░░░░");
    }

    #[test]
    fn entropy_bar_scale() {
        assert_eq!(entropy_bar(3.0, 6), "███░░░");
        assert_eq!(entropy_bar(8.0, 3).chars().count(), 3);
    }

    #[test]
    fn guess_noun_singular_only_for_one() {
        assert_eq!(guess_noun(1), "guess");
        assert_eq!(guess_noun(0), "guesses");
        assert_eq!(guess_noun(4), "guesses");
    }

    #[test]
    fn percentage_of_empty_whole() {
        assert!(percentage(3, 0).abs() < f64::EPSILON);
        assert!((percentage(1, 4) - 25.0).abs() < 1e-12);
    }
}
