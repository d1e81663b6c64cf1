//! Mini-games played outside the main quiz. At most one is active at a time.

pub mod color_match;
pub mod rainbow;
pub mod session;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use color_match::{ColorMatchSession, SubmitOutcome};
pub use rainbow::{RainbowSession, TapOutcome};
pub use session::{Feedback, Session};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MiniGameKind {
    ColorMatch,
    RainbowSequence,
}

impl fmt::Display for MiniGameKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MiniGameKind::ColorMatch => f.write_str("color-match"),
            MiniGameKind::RainbowSequence => f.write_str("rainbow-sequence"),
        }
    }
}

/// Which mini-game is active and its session, if one is running.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MiniGames {
    pub active: Option<MiniGameKind>,
    pub color_match: Option<ColorMatchSession>,
    pub rainbow: Option<RainbowSession>,
}

impl MiniGames {
    /// Make `kind` (or nothing) the active mini-game, dropping the sessions
    /// of every other mini-game.
    pub fn activate(&mut self, kind: Option<MiniGameKind>) {
        self.active = kind;
        if kind != Some(MiniGameKind::ColorMatch) {
            self.color_match = None;
        }
        if kind != Some(MiniGameKind::RainbowSequence) {
            self.rainbow = None;
        }
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{adapters::ScriptedRandom, catalog::Catalog};

    #[test]
    fn activating_one_game_drops_the_other_session() {
        let catalog = Catalog::standard();
        let mut rng = ScriptedRandom::default();
        let mut games = MiniGames {
            active: Some(MiniGameKind::ColorMatch),
            color_match: ColorMatchSession::start(&catalog.color_match_challenges, 5, 3, &mut rng),
            rainbow: None,
        };

        games.activate(Some(MiniGameKind::RainbowSequence));
        assert!(games.color_match.is_none());
        assert_eq!(games.active, Some(MiniGameKind::RainbowSequence));

        games.activate(None);
        assert!(!games.is_active());
    }
}
