//! The single reducer that owns every state transition.
//!
//! `reduce(state, action)` clones the current snapshot, applies the action and
//! returns the new snapshot together with the effects the runtime must carry
//! out: follow-up actions to dispatch after a delay and notices for the user.
//! Invalid transitions (a third color, a mix with the wrong number of colors,
//! a locked palette) leave the state unchanged.

mod main_game;
mod mini_games;
mod settings;

use std::{fmt, time::Duration};

use serde::{Deserialize, Serialize};

use crate::{
    app::GameConfig,
    catalog::Catalog,
    colors::{ColorId, Language},
    identifiers::AvatarId,
    minigames::MiniGameKind,
    palette::PaletteId,
    ports::RandomSource,
    progress::UserProgress,
    state::{AppState, AvatarReaction, FollowUpId, FollowUpKind},
};

/// Every input the state machine accepts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum Action {
    // Settings
    SetLanguage(Language),
    ToggleTextToSpeech,
    ToggleSoundEffects,
    ToggleBackgroundMusic,
    ToggleColorblindMode,
    ToggleHapticFeedback,

    // Avatar
    SelectAvatar(AvatarId),
    ToggleAvatarChooser,
    ClearAvatarReaction(FollowUpId),

    // Cue acknowledgements
    AcknowledgeSound,
    AcknowledgeHaptic,
    HideErrorFlash(FollowUpId),

    // Main game
    ChangePalette(PaletteId),
    SelectColor(ColorId),
    ResetSelection,
    AttemptMix,
    ResetShake(FollowUpId),
    ShowFunFactModal(FollowUpId),
    CloseFunFactModal,
    RevealAnswer,
    CloseRevealModal,

    // Mini-games
    SetActiveMiniGame(Option<MiniGameKind>),
    StartColorMatch,
    SelectColorMatchAnswer(ColorId),
    SubmitColorMatchAnswer,
    NextColorMatchChallenge,
    EndColorMatch,
    StartRainbowSequence,
    TapRainbowColor(ColorId),
    ResetRainbowAttempt,
    NextRainbowChallenge,
    EndRainbowSequence,
}

/// User-facing notices raised by a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum Notice {
    PaletteLocked(PaletteId),
    PaletteMastered(PaletteId),
    PaletteUnlocked(PaletteId),
    MiniGameUnavailable(MiniGameKind),
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::PaletteLocked(palette) => write!(f, "{palette} palette is locked"),
            Notice::PaletteMastered(palette) => write!(f, "{palette} palette mastered"),
            Notice::PaletteUnlocked(palette) => write!(f, "{palette} palette unlocked"),
            Notice::MiniGameUnavailable(kind) => write!(f, "{kind} has no challenges"),
        }
    }
}

/// Work for the runtime after a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Dispatch `action` after `delay`. The action carries a ticket and does
    /// nothing once a newer follow-up of its kind was scheduled.
    Schedule { delay: Duration, action: Action },
    Notify(Notice),
}

/// Read-only data and randomness available to the reducer.
pub struct Context<'a> {
    pub catalog: &'a Catalog,
    pub config: &'a GameConfig,
    pub rng: &'a mut dyn RandomSource,
}

impl<'a> Context<'a> {
    pub fn new(
        catalog: &'a Catalog,
        config: &'a GameConfig,
        rng: &'a mut dyn RandomSource,
    ) -> Self {
        Self {
            catalog,
            config,
            rng,
        }
    }
}

/// New snapshot plus the effects of one action.
#[derive(Debug, Clone)]
pub struct Transition {
    pub state: AppState,
    pub effects: Vec<Effect>,
}

impl Transition {
    pub fn notices(&self) -> impl Iterator<Item = &Notice> {
        self.effects.iter().filter_map(|effect| match effect {
            Effect::Notify(notice) => Some(notice),
            Effect::Schedule { .. } => None,
        })
    }

    pub fn scheduled(&self) -> impl Iterator<Item = (Duration, &Action)> {
        self.effects.iter().filter_map(|effect| match effect {
            Effect::Schedule { delay, action } => Some((*delay, action)),
            Effect::Notify(_) => None,
        })
    }
}

/// Apply `action` to a copy of `state`.
pub fn reduce(state: &AppState, action: Action, ctx: &mut Context<'_>) -> Transition {
    let mut next = state.clone();
    let mut effects = Vec::new();
    apply(&mut next, action, ctx, &mut effects);
    Transition {
        state: next,
        effects,
    }
}

/// Fresh state: first palette unlocked, default avatar, first challenge
/// drawn.
pub fn initial_state(ctx: &mut Context<'_>) -> AppState {
    resume(UserProgress::initial(), ctx)
}

/// State for previously saved progress.
///
/// Focuses the configured default palette when it is unlocked, otherwise the
/// first unlocked palette.
pub fn resume(progress: UserProgress, ctx: &mut Context<'_>) -> AppState {
    let default = ctx.config.default_palette;
    let palette = if progress.is_unlocked(default) {
        default
    } else if let Some(palette) = progress.first_unlocked() {
        palette
    } else {
        tracing::error!(fallback = %PaletteId::ORDER[0], "no unlocked palette in progress");
        PaletteId::ORDER[0]
    };

    let avatar = ctx.catalog.default_avatar().map(|avatar| avatar.id.clone());
    let mut state = AppState::new(palette, progress, avatar, ctx.config.max_attempts);
    main_game::ensure_challenge(&mut state, ctx);
    state
}

fn apply(state: &mut AppState, action: Action, ctx: &mut Context<'_>, effects: &mut Vec<Effect>) {
    tracing::trace!(?action, "applying action");
    match action {
        Action::SetLanguage(language) => state.settings.language = language,
        Action::ToggleTextToSpeech
        | Action::ToggleSoundEffects
        | Action::ToggleBackgroundMusic
        | Action::ToggleColorblindMode
        | Action::ToggleHapticFeedback => settings::toggle(state, &action),
        Action::SelectAvatar(id) => settings::select_avatar(state, ctx, id),
        Action::ToggleAvatarChooser => state.avatar.chooser_open = !state.avatar.chooser_open,
        Action::ClearAvatarReaction(id) => {
            if state.follow_ups.is_current(FollowUpKind::ClearAvatarReaction, id) {
                state.avatar.reaction = None;
            }
        }
        Action::AcknowledgeSound => state.cues.sound = None,
        Action::AcknowledgeHaptic => state.cues.haptic = None,
        Action::HideErrorFlash(id) => {
            if state.follow_ups.is_current(FollowUpKind::HideErrorFlash, id) {
                state.cues.error_flash = false;
            }
        }

        Action::ChangePalette(palette) => main_game::change_palette(state, ctx, palette, effects),
        Action::SelectColor(color) => {
            state.game.select_color(&ctx.catalog.mixing, color);
        }
        Action::ResetSelection => main_game::reset_selection(state),
        Action::AttemptMix => main_game::attempt_mix(state, ctx, effects),
        Action::ResetShake(id) => {
            if state.follow_ups.is_current(FollowUpKind::ResetShake, id) {
                state.game.shaking = false;
            }
        }
        Action::ShowFunFactModal(id) => {
            if state.follow_ups.is_current(FollowUpKind::ShowFunFactModal, id) {
                state.game.open_fact_modal();
            }
        }
        Action::CloseFunFactModal => main_game::close_fun_fact_modal(state, ctx),
        Action::RevealAnswer => main_game::reveal_answer(state, ctx, effects),
        Action::CloseRevealModal => main_game::close_reveal_modal(state, ctx),

        Action::SetActiveMiniGame(kind) => mini_games::set_active(state, ctx, kind),
        Action::StartColorMatch => mini_games::start_color_match(state, ctx, effects),
        Action::SelectColorMatchAnswer(color) => {
            if let Some(session) = state.mini_games.color_match.as_mut() {
                session.select(color);
            }
        }
        Action::SubmitColorMatchAnswer => mini_games::submit_color_match(state, ctx, effects),
        Action::NextColorMatchChallenge => mini_games::next_color_match(state),
        Action::EndColorMatch => mini_games::end(state, ctx, MiniGameKind::ColorMatch),
        Action::StartRainbowSequence => mini_games::start_rainbow(state, ctx, effects),
        Action::TapRainbowColor(color) => mini_games::tap_rainbow(state, ctx, color, effects),
        Action::ResetRainbowAttempt => mini_games::reset_rainbow_attempt(state),
        Action::NextRainbowChallenge => mini_games::next_rainbow(state),
        Action::EndRainbowSequence => mini_games::end(state, ctx, MiniGameKind::RainbowSequence),
    }
}

/// Set the avatar reaction and schedule its clearing.
fn react(
    state: &mut AppState,
    ctx: &Context<'_>,
    reaction: AvatarReaction,
    effects: &mut Vec<Effect>,
) {
    state.avatar.reaction = Some(reaction);
    let delay = match reaction {
        AvatarReaction::Happy => ctx.config.delays.happy_reaction(),
        AvatarReaction::Sad => ctx.config.delays.sad_reaction(),
    };
    schedule(state, FollowUpKind::ClearAvatarReaction, delay, effects);
}

/// Schedule a follow-up of `kind`, superseding any still pending.
fn schedule(state: &mut AppState, kind: FollowUpKind, delay: Duration, effects: &mut Vec<Effect>) {
    let id = state.follow_ups.issue(kind);
    let action = match kind {
        FollowUpKind::ResetShake => Action::ResetShake(id),
        FollowUpKind::HideErrorFlash => Action::HideErrorFlash(id),
        FollowUpKind::ClearAvatarReaction => Action::ClearAvatarReaction(id),
        FollowUpKind::ShowFunFactModal => Action::ShowFunFactModal(id),
    };
    effects.push(Effect::Schedule { delay, action });
}

/// Raise success or failure cues, honouring the sound and haptic settings.
fn cue(state: &mut AppState, ctx: &Context<'_>, success: bool) {
    use crate::state::SoundCue;

    let (sound, haptic) = if success {
        (SoundCue::Correct, &ctx.config.haptics.success)
    } else {
        (SoundCue::Incorrect, &ctx.config.haptics.failure)
    };
    state.cues.sound = state.settings.sound_effects.then_some(sound);
    state.cues.haptic = state.settings.haptic_feedback.then(|| haptic.clone());
}
