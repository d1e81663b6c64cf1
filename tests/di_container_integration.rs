//! Integration tests for dependency injection.
//!
//! These tests exercise the container the way an embedding shell would:
//! - In-memory repositories (no file I/O)
//! - Deterministic stores from fixed seeds
//! - Custom catalogs and configuration

use std::path::Path;

use mira_colors::{
    Action, App, ColorId, GameConfig, PaletteId,
    adapters::{InMemoryRepository, ScriptedRandom},
    app::MiniGameLimits,
    ports::SnapshotRepository,
};

mod common;

use common::finish_round;

#[test]
fn test_app_with_in_memory_repository() {
    let repo = InMemoryRepository::new();
    let app = App::for_testing()
        .with_repository(repo.clone())
        .with_default_seed(42)
        .build()
        .unwrap();

    let mut store = app.create_store();
    finish_round(&mut store);
    store.dispatch(Action::ToggleColorblindMode);

    let path = Path::new("player-1");
    app.save_store(&store, path).unwrap();
    assert_eq!(repo.count(), 1);

    let loaded = app.load_store(path).unwrap();
    assert_eq!(loaded.state(), store.state());
    assert!(loaded.state().settings.colorblind_mode);
    assert_eq!(loaded.pending_timers().count(), 0);
}

#[test]
fn test_same_seed_gives_same_session() {
    let app1 = App::for_testing().with_default_seed(9).build().unwrap();
    let app2 = App::for_testing().with_default_seed(9).build().unwrap();
    let mut store1 = app1.create_store();
    let mut store2 = app2.create_store();

    for _ in 0..4 {
        finish_round(&mut store1);
        finish_round(&mut store2);
    }
    store1.dispatch(Action::StartColorMatch);
    store2.dispatch(Action::StartColorMatch);

    assert_eq!(store1.state(), store2.state());
}

#[test]
fn test_config_drives_new_stores() {
    let config = GameConfig::default()
        .with_max_attempts(4)
        .with_color_match(MiniGameLimits {
            session_length: 2,
            max_attempts: 1,
        });
    let app = App::for_testing().with_config(config).build().unwrap();

    let mut store = app.create_store_with_random(Box::new(ScriptedRandom::default()));
    assert_eq!(store.state().game.attempts_left, 4);

    store.dispatch(Action::StartColorMatch);
    let session = store.state().mini_games.color_match.as_ref().unwrap();
    assert_eq!(session.session.challenges().len(), 2);
    assert_eq!(session.session.attempts_left(), 1);
}

#[test]
fn test_fewer_challenges_per_palette_unlocks_sooner() {
    let app = App::for_testing()
        .with_config(GameConfig::default().with_challenges_per_palette(2))
        .with_default_seed(1)
        .build()
        .unwrap();
    let mut store = app.create_store();

    finish_round(&mut store);
    assert!(!store.state().progress.is_unlocked(PaletteId::Cool));
    finish_round(&mut store);
    assert!(store.state().progress.is_unlocked(PaletteId::Cool));
    assert_eq!(store.state().current_palette(), PaletteId::Cool);
}

#[test]
fn test_resume_store_keeps_progress_and_draws_a_round() {
    let app = App::for_testing().with_default_seed(5).build().unwrap();
    let mut store = app.create_store();
    for _ in 0..5 {
        finish_round(&mut store);
    }
    let progress = store.state().progress.clone();

    let resumed = app.resume_store(progress.clone());
    assert_eq!(resumed.state().progress, progress);
    assert!(resumed.state().current_challenge().is_some());
    assert!(!resumed.state().settings.colorblind_mode);
}

#[test]
fn test_load_store_refocuses_a_locked_palette() {
    let repo = InMemoryRepository::new();
    let app = App::for_testing()
        .with_repository(repo.clone())
        .with_default_seed(3)
        .build()
        .unwrap();

    let mut store = app.create_store();
    store.dispatch(Action::SelectColor(ColorId::Red));
    let mut snapshot = (*store.snapshot()).clone();
    snapshot.game.palette = PaletteId::Neutral;
    repo.save(&snapshot, Path::new("tampered")).unwrap();

    let loaded = app.load_store(Path::new("tampered")).unwrap();
    assert_eq!(loaded.state().current_palette(), PaletteId::Warm);
    assert!(loaded.state().game.selection.is_empty());
    assert!(loaded.state().current_challenge().is_some());
}
