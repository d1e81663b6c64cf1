//! Main-game transitions: palette focus, mixing, reveal and advancing.

use rand::seq::IndexedRandom;

use super::{Context, Effect, Notice, cue, react, schedule};
use crate::{
    catalog::{Catalog, FactCategory, FunFact},
    colors::ColorId,
    game::{MixOutcome, RoundPhase},
    identifiers::FactId,
    palette::PaletteId,
    ports::RandomSource,
    progress::Stars,
    selector::{Challenge, Selection, select_next_challenge},
    state::{AppState, AvatarReaction, FollowUpKind},
};

/// Draw a challenge if the main game is showing and idle without one.
pub(super) fn ensure_challenge(state: &mut AppState, ctx: &mut Context<'_>) {
    if state.in_main_game() && state.game.challenge.is_none() && state.game.is_selecting() {
        generate_challenge(state, ctx, false);
    }
}

/// Replace the current challenge with the next one for the focused palette,
/// following palette switches until the selector settles.
pub(super) fn generate_challenge(state: &mut AppState, ctx: &mut Context<'_>, auto_advance: bool) {
    let mut auto_advance = auto_advance;
    // Each switch lands on an unlocked palette that is not mastered, so the
    // second selection always settles.
    for _ in 0..=PaletteId::ORDER.len() {
        let selection = select_next_challenge(
            ctx.catalog,
            &state.progress,
            state.game.palette,
            auto_advance,
            &mut *ctx.rng,
        );
        match selection {
            Selection::Challenge(challenge) => {
                start_round(state, ctx, Some(challenge));
                return;
            }
            Selection::NoChallenge => {
                start_round(state, ctx, None);
                return;
            }
            Selection::SwitchTo(palette) => {
                tracing::debug!(from = %state.game.palette, to = %palette, "switching palette");
                state.game.palette = palette;
                auto_advance = false;
            }
        }
    }
    tracing::error!(palette = %state.game.palette, "challenge selection did not settle");
    start_round(state, ctx, None);
}

fn start_round(state: &mut AppState, ctx: &Context<'_>, challenge: Option<Challenge>) {
    match &challenge {
        Some(challenge) => tracing::debug!(
            palette = %challenge.palette_id,
            target = %challenge.target_color_id,
            "new challenge"
        ),
        None => tracing::debug!(palette = %state.game.palette, "no challenge available"),
    }
    state.game.start_round(challenge, ctx.config.max_attempts);
    state.avatar.reaction = None;
    state.cues.clear();
}

pub(super) fn change_palette(
    state: &mut AppState,
    ctx: &mut Context<'_>,
    palette: PaletteId,
    effects: &mut Vec<Effect>,
) {
    if !state.progress.is_unlocked(palette) {
        effects.push(Effect::Notify(Notice::PaletteLocked(palette)));
        return;
    }
    state.game.palette = palette;
    start_round(state, ctx, None);
    ensure_challenge(state, ctx);
}

pub(super) fn reset_selection(state: &mut AppState) {
    if state.game.reset_selection() {
        state.cues.error_flash = false;
    }
}

pub(super) fn attempt_mix(state: &mut AppState, ctx: &mut Context<'_>, effects: &mut Vec<Effect>) {
    let Some(challenge) = state.game.challenge else {
        return;
    };
    match state
        .game
        .attempt_mix(&ctx.catalog.mixing, ctx.config.max_attempts)
    {
        MixOutcome::Rejected => {}
        MixOutcome::Correct { result, stars } => {
            let just_mastered = record(state, ctx, challenge, stars, effects);
            let fact = pick_fun_fact(ctx.catalog, result, just_mastered, &mut *ctx.rng);
            if let RoundPhase::Succeeded { fun_fact, .. } = &mut state.game.phase {
                *fun_fact = fact.clone();
            }
            if fact.is_some() {
                let delay = ctx.config.delays.fun_fact_modal();
                schedule(state, FollowUpKind::ShowFunFactModal, delay, effects);
            }
            cue(state, ctx, true);
            state.cues.error_flash = false;
            react(state, ctx, AvatarReaction::Happy, effects);
        }
        MixOutcome::Incorrect { result } => {
            tracing::debug!(
                target = %challenge.target_color_id,
                result = ?result,
                attempts_left = state.game.attempts_left,
                "incorrect mix"
            );
            fail(state, ctx, effects);
            let delay = ctx.config.delays.shake_reset();
            schedule(state, FollowUpKind::ResetShake, delay, effects);
        }
    }
}

pub(super) fn reveal_answer(
    state: &mut AppState,
    ctx: &mut Context<'_>,
    effects: &mut Vec<Effect>,
) {
    let Some(challenge) = state.game.challenge else {
        return;
    };
    if state.game.reveal(&ctx.catalog.mixing).is_none() {
        return;
    }
    record(state, ctx, challenge, Stars::ZERO, effects);
    fail(state, ctx, effects);
}

pub(super) fn close_fun_fact_modal(state: &mut AppState, ctx: &mut Context<'_>) {
    if matches!(state.game.phase, RoundPhase::Succeeded { .. }) {
        generate_challenge(state, ctx, true);
    }
}

pub(super) fn close_reveal_modal(state: &mut AppState, ctx: &mut Context<'_>) {
    if state.game.is_revealed() {
        generate_challenge(state, ctx, true);
    }
}

/// Failure cues shared by a wrong mix and a reveal.
fn fail(state: &mut AppState, ctx: &Context<'_>, effects: &mut Vec<Effect>) {
    cue(state, ctx, false);
    state.cues.error_flash = true;
    schedule(
        state,
        FollowUpKind::HideErrorFlash,
        ctx.config.delays.error_flash(),
        effects,
    );
    react(state, ctx, AvatarReaction::Sad, effects);
}

/// Record the challenge in the palette's progress and report mastery and
/// unlocks. Returns whether the palette was mastered by this completion.
fn record(
    state: &mut AppState,
    ctx: &Context<'_>,
    challenge: Challenge,
    stars: Stars,
    effects: &mut Vec<Effect>,
) -> bool {
    let recorded = ctx
        .catalog
        .require_palette(challenge.palette_id)
        .and_then(|palette| {
            state.progress.record_completion(
                palette,
                challenge.target_color_id,
                stars,
                ctx.config.challenges_per_palette,
            )
        });
    let outcome = match recorded {
        Ok(outcome) => outcome,
        Err(err) => {
            tracing::error!(%err, target = %challenge.target_color_id, "completion not recorded");
            return false;
        }
    };

    if outcome.just_mastered {
        effects.push(Effect::Notify(Notice::PaletteMastered(challenge.palette_id)));
    }
    if let Some(unlocked) = outcome.unlocked {
        effects.push(Effect::Notify(Notice::PaletteUnlocked(unlocked)));
    }
    outcome.just_mastered
}

/// A light-science fact when a palette was just mastered, otherwise the
/// first fact about the mixed color, otherwise any fact.
fn pick_fun_fact(
    catalog: &Catalog,
    result: ColorId,
    just_mastered: bool,
    rng: &mut dyn RandomSource,
) -> Option<FactId> {
    if just_mastered {
        let science: Vec<&FunFact> = catalog.facts_in(FactCategory::LightScience).collect();
        if let Some(fact) = science.choose(rng) {
            return Some(fact.id.clone());
        }
    }
    catalog
        .first_fact_about(result)
        .or_else(|| catalog.fun_facts.choose(rng))
        .map(|fact| fact.id.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{adapters::ScriptedRandom, app::GameConfig, progress::UserProgress};

    #[test]
    fn mastery_prefers_light_science_facts() {
        let catalog = Catalog::standard();
        let mut rng = ScriptedRandom::new([(1, 5)]);
        let fact = pick_fun_fact(&catalog, ColorId::Orange, true, &mut rng).unwrap();
        assert_eq!(fact, "ls2");
    }

    #[test]
    fn related_fact_is_used_otherwise() {
        let catalog = Catalog::standard();
        let mut rng = ScriptedRandom::default();
        let fact = pick_fun_fact(&catalog, ColorId::Orange, false, &mut rng).unwrap();
        assert_eq!(fact, "gc6");
    }

    #[test]
    fn unrelated_color_gets_a_random_fact() {
        let mut catalog = Catalog::standard();
        for fact in &mut catalog.fun_facts {
            fact.related_color_ids.retain(|c| *c != ColorId::Gold);
        }
        let mut rng = ScriptedRandom::new([(10, 20)]);
        let fact = pick_fun_fact(&catalog, ColorId::Gold, false, &mut rng).unwrap();
        assert_eq!(fact, "v1");
    }

    #[test]
    fn locked_palette_change_only_notifies() {
        let catalog = Catalog::standard();
        let config = GameConfig::default();
        let mut rng = ScriptedRandom::default();
        let mut ctx = Context::new(&catalog, &config, &mut rng);
        let mut state = super::super::initial_state(&mut ctx);
        let before = state.clone();

        let mut effects = Vec::new();
        change_palette(&mut state, &mut ctx, PaletteId::Cool, &mut effects);
        assert_eq!(state, before);
        assert_eq!(
            effects,
            vec![Effect::Notify(Notice::PaletteLocked(PaletteId::Cool))]
        );
    }

    #[test]
    fn missing_progress_record_is_logged_not_fatal() {
        let catalog = Catalog::standard();
        let config = GameConfig::default();
        let mut rng = ScriptedRandom::default();
        let ctx = Context::new(&catalog, &config, &mut rng);
        let mut state = AppState::new(PaletteId::Warm, UserProgress::default(), None, 2);

        let mut effects = Vec::new();
        let mastered = record(
            &mut state,
            &ctx,
            Challenge {
                target_color_id: ColorId::Orange,
                palette_id: PaletteId::Warm,
            },
            Stars::THREE,
            &mut effects,
        );
        assert!(!mastered);
        assert!(effects.is_empty());
        assert!(state.progress.get(PaletteId::Warm).is_none());
    }
}
