//! The application state tree published as an immutable snapshot after every
//! dispatch.

use serde::{Deserialize, Serialize};

use crate::{
    colors::Language,
    game::MainGame,
    identifiers::AvatarId,
    minigames::MiniGames,
    palette::PaletteId,
    progress::UserProgress,
    selector::Challenge,
};

/// Accessibility and audio preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub language: Language,
    pub text_to_speech: bool,
    pub sound_effects: bool,
    pub background_music: bool,
    pub colorblind_mode: bool,
    pub haptic_feedback: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            language: Language::En,
            text_to_speech: false,
            sound_effects: true,
            background_music: false,
            colorblind_mode: false,
            haptic_feedback: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AvatarReaction {
    Happy,
    Sad,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvatarState {
    pub selected: Option<AvatarId>,
    pub chooser_open: bool,
    pub reaction: Option<AvatarReaction>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SoundCue {
    Correct,
    Incorrect,
}

/// Vibration pattern in milliseconds (on, off, on, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HapticPattern(pub Vec<u32>);

/// One-shot intents for the audio/haptic layer and the error flash.
///
/// The UI plays a sound or vibration and then acknowledges it, which clears
/// the flag.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cues {
    pub sound: Option<SoundCue>,
    pub haptic: Option<HapticPattern>,
    pub error_flash: bool,
}

impl Cues {
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// The delayed follow-ups a transition can schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FollowUpKind {
    ResetShake,
    HideErrorFlash,
    ClearAvatarReaction,
    ShowFunFactModal,
}

/// Ticket carried by a scheduled follow-up.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct FollowUpId(u32);

/// Latest ticket issued per follow-up kind.
///
/// Scheduling a follow-up issues a new ticket and so invalidates any earlier
/// one of the same kind still waiting in the timer queue.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FollowUps([FollowUpId; 4]);

impl FollowUps {
    pub fn issue(&mut self, kind: FollowUpKind) -> FollowUpId {
        let slot = &mut self.0[kind as usize];
        *slot = FollowUpId(slot.0.wrapping_add(1));
        *slot
    }

    /// Whether `id` is still the latest ticket for `kind`.
    pub fn is_current(&self, kind: FollowUpKind, id: FollowUpId) -> bool {
        self.0[kind as usize] == id
    }
}

/// Everything the views render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppState {
    pub settings: Settings,
    pub avatar: AvatarState,
    pub progress: UserProgress,
    pub game: MainGame,
    pub mini_games: MiniGames,
    pub cues: Cues,
    #[serde(default)]
    pub follow_ups: FollowUps,
}

impl AppState {
    /// A state with nothing in progress, focused on `palette`.
    pub fn new(
        palette: PaletteId,
        progress: UserProgress,
        avatar: Option<AvatarId>,
        max_attempts: u8,
    ) -> Self {
        Self {
            settings: Settings::default(),
            avatar: AvatarState {
                selected: avatar,
                ..AvatarState::default()
            },
            progress,
            game: MainGame::new(palette, max_attempts),
            mini_games: MiniGames::default(),
            cues: Cues::default(),
            follow_ups: FollowUps::default(),
        }
    }

    pub fn current_palette(&self) -> PaletteId {
        self.game.palette
    }

    pub fn current_challenge(&self) -> Option<&Challenge> {
        self.game.challenge.as_ref()
    }

    /// Whether the main game is on screen (no mini-game active).
    pub fn in_main_game(&self) -> bool {
        !self.mini_games.is_active()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_settings_enable_only_sound_effects() {
        let settings = Settings::default();
        assert!(settings.sound_effects);
        assert!(!settings.text_to_speech);
        assert!(!settings.background_music);
        assert!(!settings.colorblind_mode);
        assert!(!settings.haptic_feedback);
        assert_eq!(settings.language, Language::En);
    }

    #[test]
    fn partial_settings_fill_in_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"language":"ar"}"#).unwrap();
        assert_eq!(settings.language, Language::Ar);
        assert!(settings.sound_effects);
    }

    #[test]
    fn fresh_state_is_in_main_game() {
        let state = AppState::new(
            PaletteId::Warm,
            UserProgress::initial(),
            Some(AvatarId::new("avatar1")),
            2,
        );
        assert!(state.in_main_game());
        assert!(state.current_challenge().is_none());
        assert_eq!(state.game.attempts_left, 2);
    }

    #[test]
    fn new_tickets_invalidate_older_ones_of_the_same_kind() {
        let mut follow_ups = FollowUps::default();
        let first = follow_ups.issue(FollowUpKind::HideErrorFlash);
        let shake = follow_ups.issue(FollowUpKind::ResetShake);
        assert!(follow_ups.is_current(FollowUpKind::HideErrorFlash, first));

        let second = follow_ups.issue(FollowUpKind::HideErrorFlash);
        assert!(!follow_ups.is_current(FollowUpKind::HideErrorFlash, first));
        assert!(follow_ups.is_current(FollowUpKind::HideErrorFlash, second));
        assert!(follow_ups.is_current(FollowUpKind::ResetShake, shake));
    }
}
