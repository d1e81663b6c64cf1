//! Observer that reports store activity through `tracing`.

use crate::{
    Result,
    ports::Observer,
    reducer::{Action, Notice},
    state::AppState,
};

/// Logs every applied action at debug level and every notice at info level.
///
/// Follow-ups fired from the timer queue are logged at trace level unless
/// `with_scheduled(true)` is set, since they are frequent and rarely
/// interesting.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver {
    scheduled: bool,
    actions: usize,
}

impl TracingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_scheduled(mut self, scheduled: bool) -> Self {
        self.scheduled = scheduled;
        self
    }

    /// Number of actions seen so far.
    pub fn actions(&self) -> usize {
        self.actions
    }
}

impl Observer for TracingObserver {
    fn on_action(&mut self, action: &Action, state: &AppState, scheduled: bool) -> Result<()> {
        self.actions += 1;
        let palette = state.current_palette();
        let target = state.current_challenge().map(|c| c.target_color_id);
        if scheduled && !self.scheduled {
            tracing::trace!(?action, %palette, ?target, "follow-up applied");
        } else {
            tracing::debug!(
                ?action,
                scheduled,
                %palette,
                ?target,
                phase = ?state.game.phase_kind(),
                attempts_left = state.game.attempts_left,
                "action applied"
            );
        }
        Ok(())
    }

    fn on_notice(&mut self, notice: &Notice) -> Result<()> {
        tracing::info!(%notice, "notice");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{palette::PaletteId, progress::UserProgress, state::FollowUpId};

    #[test]
    fn counts_every_action() {
        let mut observer = TracingObserver::new().with_scheduled(true);
        let state = AppState::new(PaletteId::Warm, UserProgress::initial(), None, 2);

        observer
            .on_action(&Action::ToggleSoundEffects, &state, false)
            .unwrap();
        observer
            .on_action(&Action::ResetShake(FollowUpId::default()), &state, true)
            .unwrap();
        observer
            .on_notice(&Notice::PaletteLocked(PaletteId::Cool))
            .unwrap();

        assert_eq!(observer.actions(), 2);
    }
}
