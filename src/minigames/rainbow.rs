//! Rainbow-Sequence: tap colors in the right order.

use serde::{Deserialize, Serialize};

use super::session::{Feedback, Session};
use crate::{catalog::RainbowChallenge, colors::ColorId, ports::RandomSource};

/// Result of a tap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TapOutcome {
    /// Still a correct prefix.
    Progress,
    Complete,
    Mismatch,
    Rejected,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RainbowSession {
    pub session: Session<RainbowChallenge>,
    /// Colors tapped in the current attempt, including a wrong final tap.
    pub sequence: Vec<ColorId>,
}

impl RainbowSession {
    pub fn start(
        pool: &[RainbowChallenge],
        length: usize,
        max_attempts: u8,
        rng: &mut dyn RandomSource,
    ) -> Option<Self> {
        Session::start(pool, length, max_attempts, rng).map(|session| Self {
            session,
            sequence: Vec::new(),
        })
    }

    pub fn current(&self) -> Option<&RainbowChallenge> {
        self.session.current()
    }

    /// Append a tap and check the prefix. Only accepted while no feedback is
    /// showing and for colors the challenge offers.
    pub fn tap(&mut self, color: ColorId) -> TapOutcome {
        let Some(challenge) = self.session.current() else {
            return TapOutcome::Rejected;
        };
        if self.session.feedback() != Feedback::Idle
            || !challenge.available_choices.contains(&color)
        {
            return TapOutcome::Rejected;
        }

        self.sequence.push(color);
        if !challenge.accepts_prefix(&self.sequence) {
            self.session.record_failure();
            TapOutcome::Mismatch
        } else if challenge.is_complete(&self.sequence) {
            self.session.record_success();
            TapOutcome::Complete
        } else {
            TapOutcome::Progress
        }
    }

    /// Start the current challenge over without consuming an attempt.
    ///
    /// Rejected after a success, and after a failure that used the last
    /// attempt.
    pub fn reset_attempt(&mut self) -> bool {
        if self.session.current().is_none() {
            return false;
        }
        match self.session.feedback() {
            Feedback::Success => return false,
            Feedback::Failure if self.session.is_exhausted() => return false,
            _ => {}
        }
        self.sequence.clear();
        self.session.clear_feedback();
        true
    }

    pub fn advance(&mut self) -> bool {
        self.sequence.clear();
        self.session.advance()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{adapters::ScriptedRandom, catalog::Catalog};

    fn primaries_first() -> RainbowSession {
        let catalog = Catalog::standard();
        let mut rng = ScriptedRandom::default();
        RainbowSession::start(&catalog.rainbow_challenges, 3, 2, &mut rng).unwrap()
    }

    #[test]
    fn wrong_third_tap_fails_immediately() {
        let mut game = primaries_first();
        assert_eq!(game.current().unwrap().id, "rs_primary");

        assert_eq!(game.tap(ColorId::Red), TapOutcome::Progress);
        assert_eq!(game.tap(ColorId::Yellow), TapOutcome::Progress);
        assert_eq!(game.tap(ColorId::Green), TapOutcome::Mismatch);

        assert_eq!(
            game.sequence,
            vec![ColorId::Red, ColorId::Yellow, ColorId::Green]
        );
        assert_eq!(game.session.attempts_left(), 1);
        assert_eq!(game.session.feedback(), Feedback::Failure);
        assert_eq!(game.tap(ColorId::Blue), TapOutcome::Rejected);
    }

    #[test]
    fn first_divergence_fails_even_early() {
        let mut game = primaries_first();
        assert_eq!(game.tap(ColorId::Blue), TapOutcome::Mismatch);
        assert_eq!(game.sequence, vec![ColorId::Blue]);
    }

    #[test]
    fn reset_after_failure_keeps_attempt_count() {
        let mut game = primaries_first();
        game.tap(ColorId::Yellow);
        assert!(game.reset_attempt());
        assert!(game.sequence.is_empty());
        assert_eq!(game.session.attempts_left(), 1);
        assert_eq!(game.session.feedback(), Feedback::Idle);

        for color in [ColorId::Red, ColorId::Yellow] {
            assert_eq!(game.tap(color), TapOutcome::Progress);
        }
        assert_eq!(game.tap(ColorId::Blue), TapOutcome::Complete);
        assert_eq!(game.session.score(), 1);
        assert!(!game.reset_attempt());
    }

    #[test]
    fn no_reset_once_attempts_are_exhausted() {
        let mut game = primaries_first();
        game.tap(ColorId::Blue);
        game.reset_attempt();
        game.tap(ColorId::Blue);
        assert!(game.session.is_exhausted());
        assert!(!game.reset_attempt());

        assert!(game.advance());
        assert!(game.sequence.is_empty());
        assert_eq!(game.session.attempts_left(), 2);
    }

    #[test]
    fn taps_outside_the_choices_are_rejected() {
        let mut game = primaries_first();
        assert_eq!(game.tap(ColorId::Silver), TapOutcome::Rejected);
        assert!(game.sequence.is_empty());
    }
}
