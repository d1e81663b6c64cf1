//! Sampled challenge sessions shared by both mini-games.

use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use crate::ports::RandomSource;

/// Feedback for the current challenge.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Feedback {
    #[default]
    Idle,
    Success,
    Failure,
}

/// A run through a shuffled sample of challenges.
///
/// Attempts are reset for every challenge. Once the last challenge is left
/// behind the session is `ended` and has no current challenge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session<C> {
    challenges: Vec<C>,
    index: Option<usize>,
    score: u32,
    attempts_left: u8,
    max_attempts: u8,
    feedback: Feedback,
    ended: bool,
}

impl<C: Clone> Session<C> {
    /// Shuffle `pool` uniformly and keep the first `length` challenges.
    ///
    /// Returns `None` when nothing would be sampled.
    pub fn start(
        pool: &[C],
        length: usize,
        max_attempts: u8,
        rng: &mut dyn RandomSource,
    ) -> Option<Self> {
        let mut challenges = pool.to_vec();
        challenges.shuffle(rng);
        challenges.truncate(length);
        if challenges.is_empty() {
            return None;
        }
        Some(Self {
            challenges,
            index: Some(0),
            score: 0,
            attempts_left: max_attempts,
            max_attempts,
            feedback: Feedback::Idle,
            ended: false,
        })
    }
}

impl<C> Session<C> {
    pub fn challenges(&self) -> &[C] {
        &self.challenges
    }

    pub fn current(&self) -> Option<&C> {
        self.index.and_then(|i| self.challenges.get(i))
    }

    pub fn index(&self) -> Option<usize> {
        self.index
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn attempts_left(&self) -> u8 {
        self.attempts_left
    }

    pub fn max_attempts(&self) -> u8 {
        self.max_attempts
    }

    pub fn feedback(&self) -> Feedback {
        self.feedback
    }

    pub fn ended(&self) -> bool {
        self.ended
    }

    pub fn is_exhausted(&self) -> bool {
        self.attempts_left == 0
    }

    /// Move to the next challenge with fresh attempts, or end the session
    /// after the last one. Returns whether a new challenge is current.
    pub fn advance(&mut self) -> bool {
        let Some(index) = self.index else {
            return false;
        };
        self.feedback = Feedback::Idle;
        if index + 1 < self.challenges.len() {
            self.index = Some(index + 1);
            self.attempts_left = self.max_attempts;
            true
        } else {
            self.index = None;
            self.ended = true;
            false
        }
    }

    pub(crate) fn record_success(&mut self) {
        self.score += 1;
        self.feedback = Feedback::Success;
    }

    pub(crate) fn record_failure(&mut self) {
        self.attempts_left = self.attempts_left.saturating_sub(1);
        self.feedback = Feedback::Failure;
    }

    pub(crate) fn clear_feedback(&mut self) {
        self.feedback = Feedback::Idle;
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::{SeedableRng, rngs::StdRng};

    use super::*;
    use crate::adapters::ScriptedRandom;

    #[test]
    fn start_samples_without_repetition() {
        let pool: Vec<u32> = (0..10).collect();
        let mut rng = StdRng::seed_from_u64(5);
        let session = Session::start(&pool, 5, 3, &mut rng).unwrap();

        assert_eq!(session.challenges().len(), 5);
        let distinct: HashSet<_> = session.challenges().iter().collect();
        assert_eq!(distinct.len(), 5);
        assert!(session.challenges().iter().all(|c| pool.contains(c)));
        assert_eq!(session.index(), Some(0));
        assert_eq!(session.attempts_left(), 3);
    }

    #[test]
    fn short_pool_is_used_in_full() {
        let pool = ["a", "b"];
        let mut rng = ScriptedRandom::default();
        let session = Session::start(&pool, 5, 2, &mut rng).unwrap();
        assert_eq!(session.challenges(), &["a", "b"]);
    }

    #[test]
    fn empty_pool_starts_nothing() {
        let pool: [u8; 0] = [];
        let mut rng = ScriptedRandom::default();
        assert!(Session::start(&pool, 5, 2, &mut rng).is_none());
    }

    #[test]
    fn advance_resets_attempts_then_ends() {
        let pool = [1, 2];
        let mut rng = ScriptedRandom::default();
        let mut session = Session::start(&pool, 2, 2, &mut rng).unwrap();

        session.record_failure();
        assert_eq!(session.attempts_left(), 1);
        assert_eq!(session.feedback(), Feedback::Failure);

        assert!(session.advance());
        assert_eq!(session.current(), Some(&2));
        assert_eq!(session.attempts_left(), 2);
        assert_eq!(session.feedback(), Feedback::Idle);

        assert!(!session.advance());
        assert!(session.ended());
        assert!(session.current().is_none());
        assert!(!session.advance());
    }

    #[test]
    fn failures_saturate_at_zero() {
        let pool = [1];
        let mut rng = ScriptedRandom::default();
        let mut session = Session::start(&pool, 1, 1, &mut rng).unwrap();
        session.record_failure();
        session.record_failure();
        assert_eq!(session.attempts_left(), 0);
        assert!(session.is_exhausted());
    }
}
