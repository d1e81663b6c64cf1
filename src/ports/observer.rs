//! Observer port for watching a store.
//!
//! Views and tooling register observers on a [`Store`](crate::store::Store)
//! to be told about every applied action and every notice the reducer raises.
//! Observers never mutate state; they can only dispatch through the store's
//! owner.

use crate::{
    Result,
    reducer::{Action, Notice},
    state::AppState,
};

/// Observer of store activity.
///
/// Event order for one dispatch:
/// 1. `on_action(action, state)` with the snapshot produced by the action
/// 2. `on_notice(notice)` for each notice the action raised
///
/// Actions fired from the timer queue are reported the same way with
/// `scheduled = true`.
///
/// # Examples
///
/// ```
/// use mira_colors::{ports::Observer, reducer::Action, state::AppState};
///
/// #[derive(Default)]
/// struct CountingObserver {
///     actions: usize,
/// }
///
/// impl Observer for CountingObserver {
///     fn on_action(
///         &mut self,
///         _action: &Action,
///         _state: &AppState,
///         _scheduled: bool,
///     ) -> mira_colors::Result<()> {
///         self.actions += 1;
///         Ok(())
///     }
/// }
/// ```
pub trait Observer: Send {
    /// Called after an action has been applied.
    ///
    /// Does nothing by default.
    fn on_action(&mut self, _action: &Action, _state: &AppState, _scheduled: bool) -> Result<()> {
        Ok(())
    }

    /// Called for each notice raised by an action.
    ///
    /// Does nothing by default.
    fn on_notice(&mut self, _notice: &Notice) -> Result<()> {
        Ok(())
    }
}
