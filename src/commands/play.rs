//! Interactive assistant mode
//!
//! Suggests a guess each turn and narrows the candidates with the feedback the
//! player reports from a real game.

use crate::core::{Pattern, Word};
use crate::output::formatters::guess_noun;
use crate::solver::entropy::calculate_metrics;
use crate::solver::{Phase, Session};
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// A parsed line of player input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayInput {
    Quit,
    NewGame,
    Undo,
    /// The suggested guess was the answer
    Win,
    /// Feedback for the suggested guess, or for `guess` when the player
    /// entered a different word
    Feedback {
        guess: Option<Word>,
        pattern: Pattern,
    },
    Invalid(String),
}

/// Summary of an assistant run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlaySummary {
    pub games_solved: usize,
}

/// Parse a line such as `GY--G`, `crane gy--g`, `undo` or `win`
#[must_use]
pub fn parse_input(line: &str) -> PlayInput {
    let line = line.trim();
    match line.to_lowercase().as_str() {
        "quit" | "q" | "exit" => return PlayInput::Quit,
        "new" | "n" => return PlayInput::NewGame,
        "undo" | "u" => return PlayInput::Undo,
        "win" | "correct" | "solved" => return PlayInput::Win,
        _ => {}
    }

    let parts: Vec<&str> = line.split_whitespace().collect();
    match parts.as_slice() {
        [pattern] => Pattern::from_str(pattern).map_or_else(
            || PlayInput::Invalid(format!("Invalid pattern '{pattern}'")),
            |pattern| PlayInput::Feedback {
                guess: None,
                pattern,
            },
        ),
        [word, pattern] => match (Word::new(*word), Pattern::from_str(pattern)) {
            (Ok(guess), Some(pattern)) => PlayInput::Feedback {
                guess: Some(guess),
                pattern,
            },
            (Err(e), _) => PlayInput::Invalid(format!("Invalid word '{word}': {e}")),
            (_, None) => PlayInput::Invalid(format!("Invalid pattern '{pattern}'")),
        },
        _ => PlayInput::Invalid("Expected a pattern, or a word and a pattern".to_string()),
    }
}

/// Run the assistant on stdin/stdout
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_play(dictionary: &[Word]) -> Result<PlaySummary, String> {
    let stdin = io::stdin();
    run_play_with(dictionary, stdin.lock(), io::stdout().lock())
}

/// Run the assistant over arbitrary input and output streams
///
/// Ends on `quit` or at end of input.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_play_with<R: BufRead, W: Write>(
    dictionary: &[Word],
    mut input: R,
    mut out: W,
) -> Result<PlaySummary, String> {
    play_loop(dictionary, &mut input, &mut out).map_err(|e| e.to_string())
}

#[allow(clippy::too_many_lines)] // Interactive game loop requires detailed handling
fn play_loop<R: BufRead, W: Write>(
    dictionary: &[Word],
    input: &mut R,
    out: &mut W,
) -> io::Result<PlaySummary> {
    let mut session = Session::new(dictionary);
    let mut summary = PlaySummary::default();

    writeln!(out, "\n{}", "Wordle Narrower - Assistant Mode".bright_cyan().bold())?;
    writeln!(out, "After each guess, enter the feedback pattern:")?;
    writeln!(out, "  - G for green, Y for yellow, - for gray (or the coloured squares)")?;
    writeln!(out, "  - Prefix a word to report a guess other than the suggestion")?;
    writeln!(out, "  - 'win' if the suggestion was right")?;
    writeln!(out, "Commands: 'undo', 'new', 'quit'\n")?;

    loop {
        if session.is_exhausted() {
            writeln!(out, "\n❌ No candidates remain! Your feedback may be incorrect.")?;
            writeln!(out, "Type 'undo' to go back, or 'new' to start over.\n")?;

            let Some(line) = read_input(input, out, "Command")? else {
                return Ok(summary);
            };
            match parse_input(&line) {
                PlayInput::Quit => {
                    writeln!(out, "\n👋 Thanks for playing!\n")?;
                    return Ok(summary);
                }
                PlayInput::Undo => {
                    if session.undo().is_some() {
                        writeln!(out, "✓ Undone!\n")?;
                    } else {
                        writeln!(out, "Nothing to undo!\n")?;
                    }
                }
                PlayInput::NewGame => {
                    session.reset();
                    writeln!(out, "\n🔄 New game started!\n")?;
                }
                PlayInput::Invalid(message) => {
                    writeln!(out, "❌ {message}. Use 'undo', 'new' or 'quit'.\n")?;
                }
                PlayInput::Win | PlayInput::Feedback { .. } => {
                    writeln!(out, "❌ No candidates to apply feedback to. Use 'undo', 'new' or 'quit'.\n")?;
                }
            }
            continue;
        }

        let (suggestion, score) = {
            let scored = session.next_guess().map_err(io::Error::other)?;
            (scored.word.clone(), scored.score)
        };
        let turn = session.attempts().len() + 1;

        writeln!(out, "{}", "─".repeat(60))?;
        writeln!(
            out,
            "Turn {turn}: {} candidates remaining",
            session.remaining()
        )?;
        writeln!(out, "{}", "─".repeat(60))?;
        writeln!(
            out,
            "\n📊 Suggested guess: {}",
            suggestion.text().to_uppercase().bright_yellow().bold()
        )?;

        match session.phase() {
            Phase::Initial => writeln!(out, "   Opening score:    {score:.3}")?,
            Phase::Refining => {
                let metrics = calculate_metrics(&suggestion, session.candidates());
                writeln!(out, "   Entropy:          {score:.3} bits")?;
                writeln!(
                    out,
                    "   Expected remain:  {:.1} candidates",
                    metrics.expected_remaining
                )?;
                writeln!(out, "   Worst case:       {} candidates", metrics.max_partition)?;
            }
        }
        writeln!(out)?;

        if session.remaining() <= 10 {
            writeln!(out, "Remaining candidates:")?;
            for candidate in session.candidates() {
                writeln!(out, "  • {}", candidate.text().to_uppercase())?;
            }
            writeln!(out)?;
        }

        loop {
            let Some(line) = read_input(input, out, "Enter feedback (G/Y/-, 'win', or command)")?
            else {
                return Ok(summary);
            };

            let (guess, pattern) = match parse_input(&line) {
                PlayInput::Quit => {
                    writeln!(out, "\n👋 Thanks for playing!\n")?;
                    return Ok(summary);
                }
                PlayInput::NewGame => {
                    session.reset();
                    writeln!(out, "\n🔄 New game started!\n")?;
                    break;
                }
                PlayInput::Undo => {
                    if session.undo().is_some() {
                        writeln!(out, "✓ Undone! Back to turn {}\n", session.attempts().len() + 1)?;
                        break;
                    }
                    writeln!(out, "Nothing to undo!\n")?;
                    continue;
                }
                PlayInput::Win => (suggestion.clone(), Pattern::PERFECT),
                PlayInput::Feedback { guess, pattern } => {
                    (guess.unwrap_or_else(|| suggestion.clone()), pattern)
                }
                PlayInput::Invalid(message) => {
                    writeln!(out, "❌ {message}. Use G/Y/-, 'win', or a command.\n")?;
                    continue;
                }
            };

            session.record(guess, pattern);

            if pattern.is_perfect() {
                let guesses = session.attempts().len();
                writeln!(out, "\n{}", "═".repeat(60).bright_cyan())?;
                writeln!(
                    out,
                    "{}",
                    format!(
                        "🎉 Solved in {guesses} {}!",
                        guess_noun(guesses)
                    )
                    .bright_green()
                    .bold()
                )?;
                for (i, attempt) in session.attempts().iter().enumerate() {
                    writeln!(
                        out,
                        "    {}. {} {}",
                        i + 1,
                        attempt.guess.text().to_uppercase(),
                        attempt.pattern
                    )?;
                }
                writeln!(out, "{}\n", "═".repeat(60).bright_cyan())?;

                summary.games_solved += 1;
                session.reset();
                writeln!(out, "🔄 New game started!\n")?;
            }
            break;
        }
    }
}

/// Print a prompt and read one line; `None` at end of input
fn read_input<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    prompt: &str,
) -> io::Result<Option<String>> {
    write!(out, "{prompt}: ")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::feedback;
    use crate::solver::select_initial;
    use crate::wordlists::loader::words_from_slice;
    use std::io::Cursor;

    fn dictionary() -> Vec<Word> {
        words_from_slice(&["crane", "slate", "trace", "crate", "grate", "irate"])
    }

    fn play(dictionary: &[Word], script: &str) -> (PlaySummary, String) {
        let mut out = Vec::new();
        let summary = run_play_with(dictionary, Cursor::new(script), &mut out).unwrap();
        (summary, String::from_utf8(out).unwrap())
    }

    #[test]
    fn parse_commands() {
        assert_eq!(parse_input("quit"), PlayInput::Quit);
        assert_eq!(parse_input("  Q "), PlayInput::Quit);
        assert_eq!(parse_input("new"), PlayInput::NewGame);
        assert_eq!(parse_input("undo"), PlayInput::Undo);
        assert_eq!(parse_input("WIN"), PlayInput::Win);
    }

    #[test]
    fn parse_pattern_only() {
        assert_eq!(
            parse_input("gy-gy"),
            PlayInput::Feedback {
                guess: None,
                pattern: Pattern::from_str("GY-GY").unwrap(),
            }
        );
    }

    #[test]
    fn parse_word_and_pattern() {
        assert_eq!(
            parse_input("Crane --g-g"),
            PlayInput::Feedback {
                guess: Some(Word::new("crane").unwrap()),
                pattern: Pattern::from_str("--G-G").unwrap(),
            }
        );
    }

    #[test]
    fn parse_invalid_input() {
        assert!(matches!(parse_input("gyz"), PlayInput::Invalid(_)));
        assert!(matches!(parse_input("cr4ne ggggg"), PlayInput::Invalid(_)));
        assert!(matches!(parse_input("crane ggg"), PlayInput::Invalid(_)));
        assert!(matches!(parse_input("a b c"), PlayInput::Invalid(_)));
    }

    #[test]
    fn win_on_first_suggestion() {
        let dictionary = dictionary();
        let (summary, output) = play(&dictionary, "win\n");

        let opening = select_initial(&dictionary).unwrap().word.text().to_uppercase();
        assert!(output.contains(&opening));
        assert!(output.contains("Solved in 1 guess!"));
        assert_eq!(summary.games_solved, 1);
    }

    #[test]
    fn narrows_with_reported_feedback() {
        let dictionary = dictionary();
        let answer = Word::new("irate").unwrap();
        let guess = Word::new("crane").unwrap();
        let pattern = feedback(&guess, &answer).to_letters();

        let script = format!("crane {pattern}\nirate ggggg\nquit\n");
        let (summary, output) = play(&dictionary, &script);

        assert!(output.contains("Turn 2:"));
        assert!(output.contains("Solved in 2 guesses!"));
        assert!(output.contains("Thanks for playing"));
        assert_eq!(summary.games_solved, 1);
    }

    #[test]
    fn exhausted_candidates_can_be_undone() {
        let dictionary = dictionary();
        let (summary, output) = play(&dictionary, "crane -----\nundo\nquit\n");

        assert!(output.contains("No candidates remain"));
        assert!(output.contains("Undone"));
        assert!(output.contains("Thanks for playing"));
        assert_eq!(summary.games_solved, 0);
    }

    #[test]
    fn invalid_input_is_reported() {
        let dictionary = dictionary();
        let (_, output) = play(&dictionary, "xyz\nquit\n");
        assert!(output.contains("Invalid pattern 'xyz'"));
    }

    #[test]
    fn nothing_to_undo_at_start() {
        let dictionary = dictionary();
        let (_, output) = play(&dictionary, "undo\n");
        assert!(output.contains("Nothing to undo!"));
    }

    #[test]
    fn exhausted_session_reports_every_command() {
        let (summary, output) = play(&[], "undo\nxyz\nwin\nquit\n");

        assert!(output.contains("No candidates remain"));
        assert!(output.contains("Nothing to undo!"));
        assert!(output.contains("Invalid pattern 'xyz'"));
        assert!(output.contains("No candidates to apply feedback to"));
        assert!(output.contains("Thanks for playing"));
        assert_eq!(summary.games_solved, 0);
    }

    #[test]
    fn end_of_input_stops_cleanly() {
        let dictionary = dictionary();
        let (summary, output) = play(&dictionary, "");
        assert_eq!(summary, PlaySummary::default());
        assert!(output.contains("Turn 1:"));
    }
}
