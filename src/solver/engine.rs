//! Elimination loop
//!
//! A [`Session`] owns the shrinking candidate set and the attempt record for one
//! game. [`solve`] drives a session against a known answer until the answer is
//! guessed or the candidates run out.

use super::entropy::select_by_entropy;
use super::frequency::select_initial;
use super::selection::Scored;
use super::SolverError;
use crate::core::{Pattern, Word, feedback};
use crate::wordlists::loader::dedup_in_order;

/// Which heuristic picks the next guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No feedback yet: position-frequency scoring over the full set
    Initial,
    /// At least one attempt recorded: entropy over the remaining set
    Refining,
}

/// One guess and what it left behind
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attempt {
    pub guess: Word,
    pub pattern: Pattern,
    /// Candidates consistent with every pattern up to and including this one
    pub remaining: usize,
}

/// How a solving run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The last attempt was the answer
    Solved,
    /// The candidate set emptied without reaching the answer, which means the
    /// answer was never in the dictionary
    Exhausted,
}

/// Ordered attempts of a finished run and how it ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveReport {
    pub outcome: Outcome,
    pub attempts: Vec<Attempt>,
}

impl SolveReport {
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.outcome == Outcome::Solved
    }

    /// Number of guesses issued
    #[must_use]
    pub fn guess_count(&self) -> usize {
        self.attempts.len()
    }
}

/// State of a single game
///
/// The candidate set only ever shrinks: each recorded pattern keeps exactly
/// the words that would have produced it.
#[derive(Debug, Clone)]
pub struct Session {
    dictionary: Vec<Word>,
    candidates: Vec<Word>,
    attempts: Vec<Attempt>,
}

impl Session {
    /// Start a session over `dictionary`
    ///
    /// Duplicate entries are dropped, keeping the first occurrence, so the
    /// candidate order (and with it every tie-break) is dictionary order.
    #[must_use]
    pub fn new(dictionary: &[Word]) -> Self {
        let dictionary = dedup_in_order(dictionary.iter().cloned());
        Self {
            candidates: dictionary.clone(),
            dictionary,
            attempts: Vec::new(),
        }
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        if self.attempts.is_empty() {
            Phase::Initial
        } else {
            Phase::Refining
        }
    }

    /// Words still consistent with every recorded pattern, in dictionary order
    #[must_use]
    pub fn candidates(&self) -> &[Word] {
        &self.candidates
    }

    #[must_use]
    pub fn attempts(&self) -> &[Attempt] {
        &self.attempts
    }

    #[must_use]
    pub fn remaining(&self) -> usize {
        self.candidates.len()
    }

    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Choose the next guess with the heuristic for the current phase
    ///
    /// # Errors
    /// Returns `SolverError::EmptyCandidates` once the candidate set is empty.
    pub fn next_guess(&self) -> Result<Scored<'_>, SolverError> {
        match self.phase() {
            Phase::Initial => select_initial(&self.candidates),
            Phase::Refining => select_by_entropy(&self.candidates),
        }
    }

    /// Record the pattern observed for `guess` and narrow the candidates
    pub fn record(&mut self, guess: Word, pattern: Pattern) -> &Attempt {
        self.candidates
            .retain(|candidate| feedback(&guess, candidate) == pattern);

        log::debug!(
            "attempt {}: {} {} ({} remaining)",
            self.attempts.len() + 1,
            guess,
            pattern,
            self.candidates.len()
        );

        self.attempts.push(Attempt {
            guess,
            pattern,
            remaining: self.candidates.len(),
        });
        &self.attempts[self.attempts.len() - 1]
    }

    /// Drop the last attempt and rebuild the candidates from the rest
    pub fn undo(&mut self) -> Option<Attempt> {
        let undone = self.attempts.pop()?;
        self.candidates = self
            .dictionary
            .iter()
            .filter(|&candidate| {
                self.attempts
                    .iter()
                    .all(|attempt| feedback(&attempt.guess, candidate) == attempt.pattern)
            })
            .cloned()
            .collect();
        Some(undone)
    }

    /// Forget all attempts and start over with the full dictionary
    pub fn reset(&mut self) {
        self.attempts.clear();
        self.candidates.clone_from(&self.dictionary);
    }

    fn into_report(self, outcome: Outcome) -> SolveReport {
        SolveReport {
            outcome,
            attempts: self.attempts,
        }
    }
}

/// Solve for `answer` starting from `dictionary`
///
/// Runs guess, feedback and filter until the guess equals the answer
/// ([`Outcome::Solved`]) or no candidate is left ([`Outcome::Exhausted`]).
/// Every guess comes from the current candidates and a wrong guess never
/// matches its own all-green pattern, so each turn removes at least that
/// guess and the loop ends within `dictionary.len()` turns.
///
/// # Errors
/// Returns `SolverError::EmptyCandidates` if `dictionary` is empty.
///
/// # Examples
/// ```
/// use wordle_narrower::core::Word;
/// use wordle_narrower::solver::{Outcome, solve};
///
/// let dictionary: Vec<Word> = ["crane", "slate", "trace", "crate", "grate"]
///     .iter()
///     .map(|w| Word::new(*w).unwrap())
///     .collect();
/// let answer = Word::new("grate").unwrap();
///
/// let report = solve(&dictionary, &answer).unwrap();
/// assert_eq!(report.outcome, Outcome::Solved);
/// assert_eq!(report.attempts.last().unwrap().guess, answer);
/// ```
pub fn solve(dictionary: &[Word], answer: &Word) -> Result<SolveReport, SolverError> {
    let mut session = Session::new(dictionary);

    loop {
        let guess = session.next_guess()?.word.clone();
        let pattern = feedback(&guess, answer);
        let solved = guess == *answer;
        session.record(guess, pattern);

        if solved {
            log::info!("solved {answer} in {} attempts", session.attempts().len());
            return Ok(session.into_report(Outcome::Solved));
        }
        if session.is_exhausted() {
            log::info!(
                "candidates exhausted after {} attempts; {answer} is not in the dictionary",
                session.attempts().len()
            );
            return Ok(session.into_report(Outcome::Exhausted));
        }
    }
}
