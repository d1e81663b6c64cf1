//! Settings and avatar transitions.

use super::{Action, Context};
use crate::{identifiers::AvatarId, state::AppState};

pub(super) fn toggle(state: &mut AppState, action: &Action) {
    let settings = &mut state.settings;
    let flag = match action {
        Action::ToggleTextToSpeech => &mut settings.text_to_speech,
        Action::ToggleSoundEffects => &mut settings.sound_effects,
        Action::ToggleBackgroundMusic => &mut settings.background_music,
        Action::ToggleColorblindMode => &mut settings.colorblind_mode,
        Action::ToggleHapticFeedback => &mut settings.haptic_feedback,
        _ => return,
    };
    *flag = !*flag;
}

/// Select an avatar from the catalog and close the chooser. Unknown ids are
/// ignored.
pub(super) fn select_avatar(state: &mut AppState, ctx: &Context<'_>, id: AvatarId) {
    if ctx.catalog.avatar(&id).is_none() {
        tracing::warn!(avatar = %id, "ignoring unknown avatar");
        return;
    }
    state.avatar.selected = Some(id);
    state.avatar.chooser_open = false;
}
