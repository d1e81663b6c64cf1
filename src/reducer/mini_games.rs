//! Mini-game transitions.

use super::{Context, Effect, Notice, cue, main_game, react};
use crate::{
    colors::ColorId,
    minigames::{ColorMatchSession, MiniGameKind, RainbowSession, SubmitOutcome, TapOutcome},
    state::{AppState, AvatarReaction},
};

/// Switch to a mini-game, or back to the main game with `None`.
///
/// Sessions of other mini-games are dropped. Whenever the main game is left
/// or re-entered its in-progress round is discarded; palette progress is
/// kept.
pub(super) fn set_active(state: &mut AppState, ctx: &mut Context<'_>, kind: Option<MiniGameKind>) {
    let was_active = state.mini_games.is_active();
    state.mini_games.activate(kind);
    state.avatar.reaction = None;
    if kind.is_some() || was_active {
        state.game.start_round(None, ctx.config.max_attempts);
    }
    main_game::ensure_challenge(state, ctx);
}

pub(super) fn start_color_match(
    state: &mut AppState,
    ctx: &mut Context<'_>,
    effects: &mut Vec<Effect>,
) {
    let kind = MiniGameKind::ColorMatch;
    if state.mini_games.active != Some(kind) {
        set_active(state, ctx, Some(kind));
    }
    let limits = ctx.config.color_match;
    let session = ColorMatchSession::start(
        &ctx.catalog.color_match_challenges,
        limits.session_length,
        limits.max_attempts,
        &mut *ctx.rng,
    );
    match session {
        Some(session) => {
            state.mini_games.color_match = Some(session);
            state.avatar.reaction = None;
        }
        None => unavailable(state, ctx, kind, effects),
    }
}

pub(super) fn start_rainbow(
    state: &mut AppState,
    ctx: &mut Context<'_>,
    effects: &mut Vec<Effect>,
) {
    let kind = MiniGameKind::RainbowSequence;
    if state.mini_games.active != Some(kind) {
        set_active(state, ctx, Some(kind));
    }
    let limits = ctx.config.rainbow_sequence;
    let session = RainbowSession::start(
        &ctx.catalog.rainbow_challenges,
        limits.session_length,
        limits.max_attempts,
        &mut *ctx.rng,
    );
    match session {
        Some(session) => {
            state.mini_games.rainbow = Some(session);
            state.avatar.reaction = None;
        }
        None => unavailable(state, ctx, kind, effects),
    }
}

fn unavailable(
    state: &mut AppState,
    ctx: &mut Context<'_>,
    kind: MiniGameKind,
    effects: &mut Vec<Effect>,
) {
    tracing::warn!(%kind, "no challenges available, mini-game not started");
    effects.push(Effect::Notify(Notice::MiniGameUnavailable(kind)));
    set_active(state, ctx, None);
}

pub(super) fn submit_color_match(
    state: &mut AppState,
    ctx: &Context<'_>,
    effects: &mut Vec<Effect>,
) {
    let Some(session) = state.mini_games.color_match.as_mut() else {
        return;
    };
    match session.submit() {
        SubmitOutcome::Rejected => {}
        SubmitOutcome::Correct => {
            cue(state, ctx, true);
            react(state, ctx, AvatarReaction::Happy, effects);
        }
        SubmitOutcome::Incorrect => {
            cue(state, ctx, false);
            react(state, ctx, AvatarReaction::Sad, effects);
        }
    }
}

pub(super) fn next_color_match(state: &mut AppState) {
    if let Some(session) = state.mini_games.color_match.as_mut() {
        session.advance();
        state.avatar.reaction = None;
    }
}

pub(super) fn tap_rainbow(
    state: &mut AppState,
    ctx: &Context<'_>,
    color: ColorId,
    effects: &mut Vec<Effect>,
) {
    let Some(session) = state.mini_games.rainbow.as_mut() else {
        return;
    };
    match session.tap(color) {
        TapOutcome::Rejected | TapOutcome::Progress => {}
        TapOutcome::Complete => {
            cue(state, ctx, true);
            react(state, ctx, AvatarReaction::Happy, effects);
        }
        TapOutcome::Mismatch => {
            cue(state, ctx, false);
            react(state, ctx, AvatarReaction::Sad, effects);
        }
    }
}

pub(super) fn reset_rainbow_attempt(state: &mut AppState) {
    let Some(session) = state.mini_games.rainbow.as_mut() else {
        return;
    };
    if session.reset_attempt() {
        state.avatar.reaction = None;
        state.cues.sound = None;
        state.cues.haptic = None;
    }
}

pub(super) fn next_rainbow(state: &mut AppState) {
    if let Some(session) = state.mini_games.rainbow.as_mut() {
        session.advance();
        state.avatar.reaction = None;
        state.cues.sound = None;
        state.cues.haptic = None;
    }
}

/// Drop the session of `kind` and, if it was the active mini-game, return to
/// the main game.
pub(super) fn end(state: &mut AppState, ctx: &mut Context<'_>, kind: MiniGameKind) {
    match kind {
        MiniGameKind::ColorMatch => state.mini_games.color_match = None,
        MiniGameKind::RainbowSequence => state.mini_games.rainbow = None,
    }
    state.avatar.reaction = None;
    if state.mini_games.active == Some(kind) {
        set_active(state, ctx, None);
    }
}
