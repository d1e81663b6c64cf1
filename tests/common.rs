//! Common helpers for the integration test suite.
//!
//! Stores are driven through dispatched actions only, the way a UI would.

#![allow(dead_code)]

use mira_colors::{
    Action, App, ColorId, Notice, Store,
    adapters::ScriptedRandom,
    catalog::Catalog,
};

/// A store on the standard catalog whose random draws follow `picks`, each
/// an `(index, len)` pair.
///
/// Once the picks run out every draw takes the last candidate, which makes
/// shuffles the identity.
pub fn scripted_store(picks: impl IntoIterator<Item = (usize, usize)>) -> Store {
    App::new().create_store_with_random(Box::new(ScriptedRandom::new(picks)))
}

/// Colors that solve `target`: the color itself for a fundamental target,
/// the recipe inputs otherwise.
pub fn answer_for(catalog: &Catalog, target: ColorId) -> Option<Vec<ColorId>> {
    if catalog.mixing.is_fundamental(target) {
        return Some(vec![target]);
    }
    catalog
        .mixing
        .recipe_for(target)
        .map(|(a, b)| vec![a, b])
}

/// Two offered colors that do not mix into `target`.
pub fn wrong_pair(catalog: &Catalog, target: ColorId) -> (ColorId, ColorId) {
    let offered = &catalog.selectable_color_ids;
    for (i, a) in offered.iter().enumerate() {
        for b in &offered[i + 1..] {
            if catalog.mixing.lookup(*a, *b) != Some(target) {
                return (*a, *b);
            }
        }
    }
    panic!("every offered pair mixes into {target}");
}

pub fn select_all(store: &mut Store, colors: &[ColorId]) {
    for color in colors {
        store.dispatch(Action::SelectColor(*color));
    }
}

/// Finish the current main-game round and move on, returning the notices it
/// raised. Targets nobody can mix are exhausted and revealed.
pub fn finish_round(store: &mut Store) -> Vec<Notice> {
    let Some(challenge) = store.state().current_challenge().copied() else {
        return Vec::new();
    };
    let catalog = store.catalog().clone();

    match answer_for(&catalog, challenge.target_color_id) {
        Some(answer) => {
            store.dispatch(Action::ResetSelection);
            select_all(store, &answer);
            store.dispatch(Action::AttemptMix);
            store.dispatch(Action::CloseFunFactModal);
        }
        None => {
            let (a, b) = wrong_pair(&catalog, challenge.target_color_id);
            for _ in 0..store.config().max_attempts {
                store.dispatch(Action::ResetSelection);
                select_all(store, &[a, b]);
                store.dispatch(Action::AttemptMix);
            }
            store.dispatch(Action::RevealAnswer);
            store.dispatch(Action::CloseRevealModal);
        }
    }
    store.run_pending();
    store.drain_notices()
}
