//! Color-Match: pick the color of the pictured object.

use serde::{Deserialize, Serialize};

use super::session::{Feedback, Session};
use crate::{catalog::ColorMatchChallenge, colors::ColorId, ports::RandomSource};

/// Result of submitting an answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Correct,
    Incorrect,
    Rejected,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorMatchSession {
    pub session: Session<ColorMatchChallenge>,
    pub selected: Option<ColorId>,
}

impl ColorMatchSession {
    pub fn start(
        pool: &[ColorMatchChallenge],
        length: usize,
        max_attempts: u8,
        rng: &mut dyn RandomSource,
    ) -> Option<Self> {
        Session::start(pool, length, max_attempts, rng).map(|session| Self {
            session,
            selected: None,
        })
    }

    pub fn current(&self) -> Option<&ColorMatchChallenge> {
        self.session.current()
    }

    /// Choose an answer. Replaces an earlier choice and clears failure
    /// feedback; rejected after a success or for a color the challenge does
    /// not offer.
    pub fn select(&mut self, color: ColorId) -> bool {
        let Some(challenge) = self.session.current() else {
            return false;
        };
        if self.session.feedback() == Feedback::Success
            || !challenge.choice_color_ids.contains(&color)
        {
            return false;
        }
        self.selected = Some(color);
        self.session.clear_feedback();
        true
    }

    /// Check the selected answer. Needs a selection, no feedback showing and
    /// attempts left. An incorrect answer keeps the selection.
    pub fn submit(&mut self) -> SubmitOutcome {
        let Some(challenge) = self.session.current() else {
            return SubmitOutcome::Rejected;
        };
        let Some(selected) = self.selected else {
            return SubmitOutcome::Rejected;
        };
        if self.session.feedback() != Feedback::Idle || self.session.is_exhausted() {
            return SubmitOutcome::Rejected;
        }

        if selected == challenge.correct_color_id {
            self.session.record_success();
            SubmitOutcome::Correct
        } else {
            self.session.record_failure();
            SubmitOutcome::Incorrect
        }
    }

    pub fn advance(&mut self) -> bool {
        self.selected = None;
        self.session.advance()
    }
}
