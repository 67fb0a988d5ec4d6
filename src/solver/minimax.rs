//! Minimax worst-case calculation over feedback partitions
//!
//! Given a guess and set of candidates, computes the maximum number of
//! candidates that could remain after any possible feedback.

use crate::core::{Combination, Feedback, Result};
use rayon::prelude::*;
use rustc_hash::FxHashMap;

/// Calculate the maximum remaining candidates for a guess
///
/// # Errors
/// Returns `LengthMismatch` if a candidate differs in length from `guess`.
///
/// # Examples
/// ```
/// use mastermind_engine::core::Combination;
/// use mastermind_engine::solver::minimax::calculate_max_remaining;
///
/// let guess: Combination = "red,blue".parse().unwrap();
/// let candidates: Vec<Combination> = ["red,blue", "blue,red", "green,green"]
///     .iter()
///     .map(|s| s.parse().unwrap())
///     .collect();
/// let refs: Vec<&Combination> = candidates.iter().collect();
///
/// // every candidate gives different feedback
/// assert_eq!(calculate_max_remaining(&guess, &refs), Ok(1));
/// ```
pub fn calculate_max_remaining(guess: &Combination, candidates: &[&Combination]) -> Result<usize> {
    Ok(group_by_feedback(guess, candidates)?
        .values()
        .max()
        .copied()
        .unwrap_or(0))
}

/// Group candidates by the feedback they would give to the guess
fn group_by_feedback(
    guess: &Combination,
    candidates: &[&Combination],
) -> Result<FxHashMap<Feedback, usize>> {
    let mut counts = FxHashMap::default();

    for &candidate in candidates {
        let feedback = Feedback::calculate(candidate, guess)?;
        *counts.entry(feedback).or_insert(0) += 1;
    }

    Ok(counts)
}

/// Select the guess with the smallest worst-case partition
///
/// Ties go to the earliest guess in `guess_pool`. Returns `Ok(None)` if the
/// pool is empty.
///
/// # Errors
/// Returns `LengthMismatch` if any guess and candidate differ in length.
pub fn select_best_guess<'a>(
    guess_pool: &[&'a Combination],
    candidates: &[&Combination],
) -> Result<Option<(&'a Combination, usize)>> {
    let scored = guess_pool
        .par_iter()
        .map(|&guess| calculate_max_remaining(guess, candidates).map(|max| (guess, max)))
        .collect::<Result<Vec<_>>>()?;

    Ok(scored.into_iter().min_by_key(|(_, max)| *max))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::EngineError;

    fn codes(texts: &[&str]) -> Vec<Combination> {
        texts.iter().map(|s| s.parse().unwrap()).collect()
    }

    #[test]
    fn all_same_feedback_keeps_everything() {
        let guess: Combination = "white,white".parse().unwrap();
        let candidates = codes(&["red,red", "blue,blue", "green,green"]);
        let refs: Vec<&Combination> = candidates.iter().collect();

        assert_eq!(calculate_max_remaining(&guess, &refs), Ok(3));
    }

    #[test]
    fn empty_candidates() {
        let guess: Combination = "red,red".parse().unwrap();
        assert_eq!(calculate_max_remaining(&guess, &[]), Ok(0));
    }

    #[test]
    fn groups_sum_to_candidate_count() {
        let guess: Combination = "red,blue,green".parse().unwrap();
        let candidates = codes(&["red,red,red", "blue,green,red", "red,blue,white", "red,blue,green"]);
        let refs: Vec<&Combination> = candidates.iter().collect();

        let groups = group_by_feedback(&guess, &refs).unwrap();
        assert_eq!(groups.values().sum::<usize>(), 4);
    }

    #[test]
    fn mismatched_lengths_are_errors() {
        let guess: Combination = "red,blue".parse().unwrap();
        let candidates = codes(&["red,blue", "red,blue,green"]);
        let refs: Vec<&Combination> = candidates.iter().collect();

        assert_eq!(
            calculate_max_remaining(&guess, &refs),
            Err(EngineError::LengthMismatch {
                secret: 3,
                guess: 2
            })
        );
        assert!(select_best_guess(&[&guess], &refs).is_err());
    }

    #[test]
    fn prefers_splitting_guess() {
        let candidates = codes(&["red,red", "blue,blue", "red,blue"]);
        let refs: Vec<&Combination> = candidates.iter().collect();
        let pool = codes(&["white,white", "red,blue"]);
        let pool_refs: Vec<&Combination> = pool.iter().collect();

        // red,red and blue,blue both give one black to red,blue
        let (best, worst) = select_best_guess(&pool_refs, &refs).unwrap().unwrap();
        assert_eq!(best.to_string(), "red,blue");
        assert_eq!(worst, 2);
    }

    #[test]
    fn ties_go_to_first_guess() {
        let candidates = codes(&["green,green"]);
        let refs: Vec<&Combination> = candidates.iter().collect();
        let pool = codes(&["red,red", "blue,blue"]);
        let pool_refs: Vec<&Combination> = pool.iter().collect();

        let (best, _) = select_best_guess(&pool_refs, &refs).unwrap().unwrap();
        assert_eq!(best.to_string(), "red,red");
    }

    #[test]
    fn empty_pool_returns_none() {
        let candidates = codes(&["green,green"]);
        let refs: Vec<&Combination> = candidates.iter().collect();
        assert_eq!(select_best_guess(&[], &refs), Ok(None));
    }
}
