//! Deterministic best-of selection shared by both heuristics
//!
//! Scores are computed in parallel, then reduced with an explicit rule:
//! the higher score wins, and equal scores go to the word that comes first in
//! candidate order. The rule is associative and commutative, so the chosen
//! word does not depend on how rayon splits the work.

use super::SolverError;
use crate::core::Word;
use rayon::prelude::*;
use std::cmp::Ordering;

/// A candidate word together with the heuristic score that selected it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scored<'a> {
    pub word: &'a Word,
    pub score: f64,
}

/// Score every candidate and return the best one
///
/// # Errors
/// Returns `SolverError::EmptyCandidates` if `candidates` is empty.
pub(crate) fn select_max<'a, F>(candidates: &'a [Word], score: F) -> Result<Scored<'a>, SolverError>
where
    F: Fn(&Word) -> f64 + Sync,
{
    candidates
        .par_iter()
        .enumerate()
        .map(|(index, word)| {
            let scored = Scored {
                word,
                score: score(word),
            };
            (index, scored)
        })
        .reduce_with(|left, right| if keeps_left(&left, &right) { left } else { right })
        .map(|(_, best)| best)
        .ok_or(SolverError::EmptyCandidates)
}

fn keeps_left(left: &(usize, Scored<'_>), right: &(usize, Scored<'_>)) -> bool {
    match left.1.score.partial_cmp(&right.1.score) {
        Some(Ordering::Greater) => true,
        Some(Ordering::Less) => false,
        _ => left.0 < right.0,
    }
}
