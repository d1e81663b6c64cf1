//! Main-game round state: the current challenge, the colors picked for it and
//! the phase of the round.
//!
//! The functions here are pure round logic. Progress updates, fun-fact picks,
//! cues and scheduled follow-ups are layered on top by the reducer.

use serde::{Deserialize, Serialize};

use crate::{
    colors::ColorId,
    identifiers::FactId,
    mixing::MixingTable,
    palette::PaletteId,
    progress::Stars,
    selector::Challenge,
};

/// Colors picked for the current mix: empty, one or two distinct colors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MixSelection(Vec<ColorId>);

impl MixSelection {
    pub fn colors(&self) -> &[ColorId] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, color: ColorId) -> bool {
        self.0.contains(&color)
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Single-slot selection used for fundamental targets: a different color
    /// replaces the current one. Returns whether anything changed.
    pub fn select_single(&mut self, color: ColorId) -> bool {
        if self.0 == [color] {
            return false;
        }
        self.0 = vec![color];
        true
    }

    /// Two-slot selection used for composite targets: up to two distinct
    /// colors, a duplicate or a third color is rejected.
    pub fn select_pair(&mut self, color: ColorId) -> bool {
        if self.0.len() >= 2 || self.contains(color) {
            return false;
        }
        self.0.push(color);
        true
    }
}

/// The answer shown after a reveal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevealedAnswer {
    pub target: ColorId,
    /// Inputs of the rule producing the target; `None` for fundamentals and
    /// targets no rule produces.
    pub inputs: Option<(ColorId, ColorId)>,
}

/// Where the current round stands.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "phase", rename_all = "snake_case")]
pub enum RoundPhase {
    /// Picking colors; also covers the shake after a failed mix and the
    /// exhausted state (no attempts left, reveal available).
    #[default]
    Selecting,
    /// Correct mix; the success splash is showing.
    Succeeded {
        result: ColorId,
        stars: Stars,
        fun_fact: Option<FactId>,
        fact_modal_open: bool,
    },
    /// Answer revealed after running out of attempts.
    Revealed { answer: RevealedAnswer },
}

/// Coarse view of the round for renderers and logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhaseKind {
    Selecting,
    Success,
    Failure,
    Exhausted,
    Revealed,
}

/// What an attempted mix did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MixOutcome {
    Correct { result: ColorId, stars: Stars },
    Incorrect { result: Option<ColorId> },
    /// Preconditions not met; nothing changed.
    Rejected,
}

/// State of the color-mixing quiz.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MainGame {
    pub palette: PaletteId,
    pub challenge: Option<Challenge>,
    pub selection: MixSelection,
    pub attempts_left: u8,
    /// Result of the last mix, or the target after a reveal.
    pub mixed_result: Option<ColorId>,
    pub shaking: bool,
    pub phase: RoundPhase,
}

impl MainGame {
    pub fn new(palette: PaletteId, max_attempts: u8) -> Self {
        Self {
            palette,
            challenge: None,
            selection: MixSelection::default(),
            attempts_left: max_attempts,
            mixed_result: None,
            shaking: false,
            phase: RoundPhase::Selecting,
        }
    }

    /// Install `challenge` (or none) with fresh round state.
    pub fn start_round(&mut self, challenge: Option<Challenge>, max_attempts: u8) {
        self.challenge = challenge;
        self.selection.clear();
        self.attempts_left = max_attempts;
        self.mixed_result = None;
        self.shaking = false;
        self.phase = RoundPhase::Selecting;
    }

    pub fn phase_kind(&self) -> PhaseKind {
        match self.phase {
            RoundPhase::Succeeded { .. } => PhaseKind::Success,
            RoundPhase::Revealed { .. } => PhaseKind::Revealed,
            RoundPhase::Selecting if self.attempts_left == 0 => PhaseKind::Exhausted,
            RoundPhase::Selecting if self.shaking => PhaseKind::Failure,
            RoundPhase::Selecting => PhaseKind::Selecting,
        }
    }

    pub fn is_selecting(&self) -> bool {
        matches!(self.phase, RoundPhase::Selecting)
    }

    pub fn is_revealed(&self) -> bool {
        matches!(self.phase, RoundPhase::Revealed { .. })
    }

    /// Pick a color for the current challenge.
    ///
    /// Only accepted while selecting with an active challenge. Returns
    /// whether the selection changed.
    pub fn select_color(&mut self, table: &MixingTable, color: ColorId) -> bool {
        let Some(challenge) = self.challenge else {
            return false;
        };
        if !self.is_selecting() {
            return false;
        }
        if table.is_fundamental(challenge.target_color_id) {
            self.selection.select_single(color)
        } else {
            self.selection.select_pair(color)
        }
    }

    /// Clear the selection and failure feedback. Rejected while a success or
    /// reveal is showing.
    pub fn reset_selection(&mut self) -> bool {
        if !self.is_selecting() {
            return false;
        }
        self.selection.clear();
        self.mixed_result = None;
        self.shaking = false;
        true
    }

    /// Mix the selected colors against the current target.
    ///
    /// Needs an active challenge, the selecting phase, attempts left and the
    /// right number of colors (one for a fundamental target, two otherwise).
    /// A correct mix moves to [`RoundPhase::Succeeded`]; an incorrect one
    /// consumes an attempt and starts the shake.
    pub fn attempt_mix(&mut self, table: &MixingTable, max_attempts: u8) -> MixOutcome {
        let Some(challenge) = self.challenge else {
            return MixOutcome::Rejected;
        };
        if !self.is_selecting() || self.attempts_left == 0 {
            return MixOutcome::Rejected;
        }

        let target = challenge.target_color_id;
        let result = match (table.is_fundamental(target), self.selection.colors()) {
            (true, [color]) => Some(*color),
            (false, [a, b]) => table.lookup(*a, *b),
            _ => return MixOutcome::Rejected,
        };

        if result == Some(target) {
            let stars = Stars::for_success(self.attempts_left, max_attempts);
            self.mixed_result = Some(target);
            self.shaking = false;
            self.phase = RoundPhase::Succeeded {
                result: target,
                stars,
                fun_fact: None,
                fact_modal_open: false,
            };
            MixOutcome::Correct {
                result: target,
                stars,
            }
        } else {
            self.attempts_left -= 1;
            self.mixed_result = result;
            self.shaking = true;
            MixOutcome::Incorrect { result }
        }
    }

    /// Reveal the answer once attempts are exhausted.
    pub fn reveal(&mut self, table: &MixingTable) -> Option<RevealedAnswer> {
        let challenge = self.challenge?;
        if !self.is_selecting() || self.attempts_left > 0 {
            return None;
        }
        let target = challenge.target_color_id;
        let answer = RevealedAnswer {
            target,
            inputs: table.recipe_for(target),
        };
        self.mixed_result = Some(target);
        self.shaking = false;
        self.phase = RoundPhase::Revealed { answer };
        Some(answer)
    }

    /// Open the fun-fact modal if the success splash with a fact is still
    /// showing and the modal is not yet open.
    pub fn open_fact_modal(&mut self) -> bool {
        match &mut self.phase {
            RoundPhase::Succeeded {
                fun_fact: Some(_),
                fact_modal_open,
                ..
            } if !*fact_modal_open => {
                *fact_modal_open = true;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn game_for(target: ColorId) -> MainGame {
        let mut game = MainGame::new(PaletteId::Warm, 2);
        game.start_round(
            Some(Challenge {
                target_color_id: target,
                palette_id: PaletteId::Warm,
            }),
            2,
        );
        game
    }

    #[test]
    fn composite_target_takes_two_distinct_colors() {
        let table = Catalog::standard().mixing;
        let mut game = game_for(ColorId::Orange);

        assert!(game.select_color(&table, ColorId::Red));
        assert!(!game.select_color(&table, ColorId::Red));
        assert!(game.select_color(&table, ColorId::Yellow));
        assert!(!game.select_color(&table, ColorId::Blue));
        assert_eq!(game.selection.colors(), &[ColorId::Red, ColorId::Yellow]);
    }

    #[test]
    fn fundamental_target_uses_a_single_replaceable_slot() {
        let table = Catalog::standard().mixing;
        let mut game = game_for(ColorId::Red);

        assert!(game.select_color(&table, ColorId::Blue));
        assert!(game.select_color(&table, ColorId::Red));
        assert!(!game.select_color(&table, ColorId::Red));
        assert_eq!(game.selection.colors(), &[ColorId::Red]);

        let outcome = game.attempt_mix(&table, 2);
        assert_eq!(
            outcome,
            MixOutcome::Correct {
                result: ColorId::Red,
                stars: Stars::THREE
            }
        );
    }

    #[test]
    fn wrong_selection_count_is_rejected_without_cost() {
        let table = Catalog::standard().mixing;
        let mut game = game_for(ColorId::Orange);
        game.select_color(&table, ColorId::Red);

        assert_eq!(game.attempt_mix(&table, 2), MixOutcome::Rejected);
        assert_eq!(game.attempts_left, 2);
        assert!(!game.shaking);
    }

    #[test]
    fn failures_exhaust_attempts_then_reveal() {
        let table = Catalog::standard().mixing;
        let mut game = game_for(ColorId::Orange);
        game.select_color(&table, ColorId::Red);
        game.select_color(&table, ColorId::Blue);

        assert_eq!(
            game.attempt_mix(&table, 2),
            MixOutcome::Incorrect {
                result: Some(ColorId::Purple)
            }
        );
        assert_eq!(game.phase_kind(), PhaseKind::Failure);
        assert!(game.reveal(&table).is_none());

        assert!(matches!(
            game.attempt_mix(&table, 2),
            MixOutcome::Incorrect { .. }
        ));
        assert_eq!(game.attempts_left, 0);
        assert_eq!(game.phase_kind(), PhaseKind::Exhausted);
        assert_eq!(game.attempt_mix(&table, 2), MixOutcome::Rejected);

        let answer = game.reveal(&table).unwrap();
        assert_eq!(answer.target, ColorId::Orange);
        assert_eq!(answer.inputs, Some((ColorId::Red, ColorId::Yellow)));
        assert_eq!(game.mixed_result, Some(ColorId::Orange));
        assert_eq!(game.phase_kind(), PhaseKind::Revealed);
    }

    #[test]
    fn second_attempt_success_earns_two_stars() {
        let table = Catalog::standard().mixing;
        let mut game = game_for(ColorId::Orange);
        game.select_color(&table, ColorId::Red);
        game.select_color(&table, ColorId::Blue);
        game.attempt_mix(&table, 2);

        assert!(game.reset_selection());
        game.select_color(&table, ColorId::Yellow);
        game.select_color(&table, ColorId::Red);
        assert_eq!(
            game.attempt_mix(&table, 2),
            MixOutcome::Correct {
                result: ColorId::Orange,
                stars: Stars::TWO
            }
        );
        assert!(!game.reset_selection());
        assert!(!game.select_color(&table, ColorId::Blue));
    }

    #[test]
    fn fact_modal_opens_once() {
        let mut game = game_for(ColorId::Orange);
        game.phase = RoundPhase::Succeeded {
            result: ColorId::Orange,
            stars: Stars::THREE,
            fun_fact: Some(FactId::new("gc6")),
            fact_modal_open: false,
        };
        assert!(game.open_fact_modal());
        assert!(!game.open_fact_modal());
    }

    #[test]
    fn no_challenge_means_no_selection() {
        let table = Catalog::standard().mixing;
        let mut game = MainGame::new(PaletteId::Warm, 2);
        assert!(!game.select_color(&table, ColorId::Red));
        assert_eq!(game.attempt_mix(&table, 2), MixOutcome::Rejected);
    }
}
