//! The state container: owns the current snapshot, runs the reducer for each
//! dispatched action and keeps the queue of delayed follow-up actions.
//!
//! Time is virtual. The embedding runtime calls [`Store::advance_time`] from
//! its own clock (an animation frame, a tokio interval, a test) and due
//! follow-ups are dispatched in order. Dropping the store or calling
//! [`Store::cancel_timers`] discards everything still pending.

use std::{sync::Arc, time::Duration};

use crate::{
    app::GameConfig,
    catalog::Catalog,
    ports::{Observer, RandomSource},
    progress::UserProgress,
    reducer::{self, Action, Context, Effect, Notice},
    state::AppState,
};

#[derive(Debug, Clone)]
struct Timer {
    due: Duration,
    seq: u64,
    action: Action,
}

/// Single-writer application state container.
pub struct Store {
    catalog: Arc<Catalog>,
    config: GameConfig,
    rng: Box<dyn RandomSource>,
    snapshot: Arc<AppState>,
    clock: Duration,
    /// Ordered by `(due, seq)`.
    timers: Vec<Timer>,
    next_seq: u64,
    notices: Vec<Notice>,
    observers: Vec<Box<dyn Observer>>,
}

impl Store {
    /// Create a store with a fresh initial state.
    pub fn new(catalog: Arc<Catalog>, config: GameConfig, mut rng: Box<dyn RandomSource>) -> Self {
        let initial = {
            let mut ctx = Context::new(&catalog, &config, rng.as_mut());
            reducer::initial_state(&mut ctx)
        };
        Self::from_snapshot(catalog, config, rng, initial)
    }

    /// Create a store for previously saved progress, with fresh settings and
    /// a newly drawn challenge.
    pub fn resume(
        catalog: Arc<Catalog>,
        config: GameConfig,
        mut rng: Box<dyn RandomSource>,
        progress: UserProgress,
    ) -> Self {
        let state = {
            let mut ctx = Context::new(&catalog, &config, rng.as_mut());
            reducer::resume(progress, &mut ctx)
        };
        Self::from_snapshot(catalog, config, rng, state)
    }

    /// Create a store around an existing snapshot, e.g. one loaded from a
    /// repository.
    pub fn from_snapshot(
        catalog: Arc<Catalog>,
        config: GameConfig,
        rng: Box<dyn RandomSource>,
        state: AppState,
    ) -> Self {
        Self {
            catalog,
            config,
            rng,
            snapshot: Arc::new(state),
            clock: Duration::ZERO,
            timers: Vec::new(),
            next_seq: 0,
            notices: Vec::new(),
            observers: Vec::new(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The current snapshot. Cheap to clone and never mutated afterwards.
    pub fn snapshot(&self) -> Arc<AppState> {
        Arc::clone(&self.snapshot)
    }

    pub fn state(&self) -> &AppState {
        &self.snapshot
    }

    /// Virtual time elapsed since the store was created.
    pub fn now(&self) -> Duration {
        self.clock
    }

    pub fn add_observer(&mut self, observer: Box<dyn Observer>) {
        self.observers.push(observer);
    }

    /// Apply `action` and return the new snapshot.
    pub fn dispatch(&mut self, action: Action) -> Arc<AppState> {
        self.apply(action, false);
        self.snapshot()
    }

    /// Move the clock forward, dispatching every follow-up that falls due on
    /// the way in the order it was scheduled. Returns how many fired.
    pub fn advance_time(&mut self, elapsed: Duration) -> usize {
        let target = self.clock + elapsed;
        let mut fired = 0;
        while self.timers.first().is_some_and(|timer| timer.due <= target) {
            let timer = self.timers.remove(0);
            self.clock = timer.due;
            self.apply(timer.action, true);
            fired += 1;
        }
        self.clock = target;
        fired
    }

    /// Fire every pending follow-up, advancing the clock as far as needed.
    pub fn run_pending(&mut self) -> usize {
        let mut fired = 0;
        while let Some(last) = self.timers.last() {
            let remaining = last.due.saturating_sub(self.clock);
            fired += self.advance_time(remaining);
        }
        fired
    }

    /// Pending follow-ups as `(time until due, action)`, soonest first.
    pub fn pending_timers(&self) -> impl Iterator<Item = (Duration, &Action)> {
        self.timers
            .iter()
            .map(|timer| (timer.due.saturating_sub(self.clock), &timer.action))
    }

    /// Discard every pending follow-up.
    pub fn cancel_timers(&mut self) {
        if !self.timers.is_empty() {
            tracing::debug!(count = self.timers.len(), "cancelling pending follow-ups");
        }
        self.timers.clear();
    }

    /// Take the notices raised since the last call.
    pub fn drain_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    fn apply(&mut self, action: Action, scheduled: bool) {
        let transition = {
            let mut ctx = Context::new(&self.catalog, &self.config, self.rng.as_mut());
            reducer::reduce(&self.snapshot, action.clone(), &mut ctx)
        };
        self.snapshot = Arc::new(transition.state);

        let mut raised = Vec::new();
        for effect in transition.effects {
            match effect {
                Effect::Schedule { delay, action } => self.schedule(delay, action),
                Effect::Notify(notice) => raised.push(notice),
            }
        }

        for observer in &mut self.observers {
            if let Err(err) = observer.on_action(&action, &self.snapshot, scheduled) {
                tracing::warn!(%err, "observer failed");
            }
            for notice in &raised {
                if let Err(err) = observer.on_notice(notice) {
                    tracing::warn!(%err, "observer failed");
                }
            }
        }
        self.notices.extend(raised);
    }

    fn schedule(&mut self, delay: Duration, action: Action) {
        let due = self.clock + delay;
        let seq = self.next_seq;
        self.next_seq += 1;
        let index = self
            .timers
            .partition_point(|timer| (timer.due, timer.seq) <= (due, seq));
        self.timers.insert(index, Timer { due, seq, action });
    }
}

impl Drop for Store {
    fn drop(&mut self) {
        self.cancel_timers();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{adapters::ScriptedRandom, colors::ColorId, game::PhaseKind};

    fn store() -> Store {
        Store::new(
            Arc::new(Catalog::standard()),
            GameConfig::default(),
            Box::new(ScriptedRandom::new([(0, 8)])),
        )
    }

    fn fail_orange(store: &mut Store) {
        store.dispatch(Action::SelectColor(ColorId::Red));
        store.dispatch(Action::SelectColor(ColorId::Blue));
        store.dispatch(Action::AttemptMix);
    }

    #[test]
    fn snapshots_are_immutable_between_dispatches() {
        let mut store = store();
        let before = store.snapshot();
        let after = store.dispatch(Action::ToggleTextToSpeech);
        assert!(!before.settings.text_to_speech);
        assert!(after.settings.text_to_speech);
    }

    #[test]
    fn failure_follow_ups_fire_in_due_order() {
        let mut store = store();
        fail_orange(&mut store);
        assert!(store.state().game.shaking);
        assert!(store.state().cues.error_flash);

        let pending: Vec<_> = store.pending_timers().map(|(d, a)| (d, a.clone())).collect();
        assert_eq!(pending.len(), 3);
        assert!(pending.windows(2).all(|w| w[0].0 <= w[1].0));

        assert_eq!(store.advance_time(Duration::from_millis(499)), 0);
        assert!(store.state().game.shaking);

        assert_eq!(store.advance_time(Duration::from_millis(1)), 3);
        assert!(!store.state().game.shaking);
        assert!(!store.state().cues.error_flash);
        assert!(store.state().avatar.reaction.is_none());
        assert_eq!(store.now(), Duration::from_millis(500));
    }

    #[test]
    fn cancelled_timers_never_fire() {
        let mut store = store();
        fail_orange(&mut store);
        store.cancel_timers();
        assert_eq!(store.advance_time(Duration::from_secs(5)), 0);
        assert!(store.state().game.shaking);
        assert_eq!(store.state().game.phase_kind(), PhaseKind::Failure);
    }

    #[test]
    fn stale_follow_up_does_not_touch_a_new_round() {
        let mut store = store();
        store.dispatch(Action::SelectColor(ColorId::Red));
        store.dispatch(Action::SelectColor(ColorId::Yellow));
        store.dispatch(Action::AttemptMix);
        assert_eq!(store.state().game.phase_kind(), PhaseKind::Success);

        // Leave the round before the fun-fact modal timer fires.
        store.dispatch(Action::CloseFunFactModal);
        store.run_pending();
        assert_eq!(store.state().game.phase_kind(), PhaseKind::Selecting);
    }

    #[test]
    fn locked_palette_raises_a_notice() {
        let mut store = store();
        let before = store.snapshot();
        let after = store.dispatch(Action::ChangePalette(crate::palette::PaletteId::Neutral));
        assert_eq!(*before, *after);
        assert_eq!(
            store.drain_notices(),
            vec![Notice::PaletteLocked(crate::palette::PaletteId::Neutral)]
        );
        assert!(store.drain_notices().is_empty());
    }
}
