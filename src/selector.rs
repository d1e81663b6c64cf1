//! Next-challenge selection for the main game.

use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};

use crate::{
    catalog::Catalog,
    colors::ColorId,
    palette::PaletteId,
    ports::RandomSource,
    progress::UserProgress,
};

/// The color the player is asked to produce, and the palette it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Challenge {
    pub target_color_id: ColorId,
    pub palette_id: PaletteId,
}

/// Outcome of [`select_next_challenge`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Challenge(Challenge),
    /// Focus should move to another palette; select again from there.
    SwitchTo(PaletteId),
    NoChallenge,
}

/// Pick the next main-game challenge for `palette`.
///
/// * A mastered palette with `auto_advance` moves to the first later palette
///   that is unlocked and not yet mastered; with nothing left to move to
///   there is no challenge.
/// * A locked palette (or one without progress) moves to the first unlocked,
///   unmastered palette.
/// * A mastered palette without `auto_advance` has no challenge.
/// * Otherwise a target is drawn uniformly from the palette's challenge colors
///   that are not yet completed.
pub fn select_next_challenge(
    catalog: &Catalog,
    progress: &UserProgress,
    palette: PaletteId,
    auto_advance: bool,
    rng: &mut dyn RandomSource,
) -> Selection {
    let record = progress.get(palette);

    if auto_advance && record.is_some_and(|r| r.mastered) {
        if let Some(next) = palette
            .later()
            .find(|p| progress.is_unlocked(*p) && !progress.is_mastered(*p))
        {
            tracing::debug!(from = %palette, to = %next, "advancing to next palette");
            return Selection::SwitchTo(next);
        }
        if catalog.all_palettes_mastered(progress) {
            tracing::debug!("all palettes mastered");
        }
        return Selection::NoChallenge;
    }

    let Some(record) = record.filter(|r| r.unlocked) else {
        return match progress.first_unlocked_unmastered() {
            Some(next) => Selection::SwitchTo(next),
            None => Selection::NoChallenge,
        };
    };

    if record.mastered {
        return Selection::NoChallenge;
    }

    let Some(definition) = catalog.palette(palette) else {
        tracing::error!(palette = %palette, "palette is not defined in the catalog");
        return Selection::NoChallenge;
    };

    let available: Vec<ColorId> = definition
        .challenge_color_ids
        .iter()
        .copied()
        .filter(|color| !record.is_completed(*color))
        .collect();

    match available.choose(rng) {
        Some(target) => Selection::Challenge(Challenge {
            target_color_id: *target,
            palette_id: palette,
        }),
        None => Selection::NoChallenge,
    }
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;
    use crate::{
        adapters::ScriptedRandom,
        progress::{PaletteProgress, Stars},
    };

    fn mastered() -> PaletteProgress {
        PaletteProgress {
            mastered: true,
            ..PaletteProgress::unlocked()
        }
    }

    #[test]
    fn fresh_progress_picks_from_warm() {
        let catalog = Catalog::standard();
        let progress = UserProgress::initial();
        let mut rng = ScriptedRandom::new([(0, 8)]);

        let selection =
            select_next_challenge(&catalog, &progress, PaletteId::Warm, false, &mut rng);
        assert_eq!(
            selection,
            Selection::Challenge(Challenge {
                target_color_id: ColorId::Orange,
                palette_id: PaletteId::Warm,
            })
        );
    }

    #[test]
    fn completed_colors_are_skipped() {
        let catalog = Catalog::standard();
        let warm = catalog.palette(PaletteId::Warm).unwrap();
        let mut progress = UserProgress::initial();
        for color in &warm.challenge_color_ids[..4] {
            progress
                .record_completion(warm, *color, Stars::THREE, 5)
                .unwrap();
        }

        let mut rng = StdRng::seed_from_u64(99);
        for _ in 0..50 {
            match select_next_challenge(&catalog, &progress, PaletteId::Warm, false, &mut rng) {
                Selection::Challenge(challenge) => {
                    assert!(!warm.challenge_color_ids[..4].contains(&challenge.target_color_id));
                }
                other => panic!("expected a challenge, got {other:?}"),
            }
        }
    }

    #[test]
    fn locked_palette_redirects_to_first_unlocked_unmastered() {
        let catalog = Catalog::standard();
        let progress = UserProgress::initial();
        let mut rng = ScriptedRandom::default();

        assert_eq!(
            select_next_challenge(&catalog, &progress, PaletteId::Neutral, false, &mut rng),
            Selection::SwitchTo(PaletteId::Warm)
        );
    }

    #[test]
    fn mastered_palette_without_auto_advance_has_no_challenge() {
        let catalog = Catalog::standard();
        let progress = UserProgress::from_records([
            (PaletteId::Warm, mastered()),
            (PaletteId::Cool, PaletteProgress::unlocked()),
            (PaletteId::Neutral, PaletteProgress::locked()),
        ]);
        let mut rng = ScriptedRandom::default();

        assert_eq!(
            select_next_challenge(&catalog, &progress, PaletteId::Warm, false, &mut rng),
            Selection::NoChallenge
        );
        assert_eq!(
            select_next_challenge(&catalog, &progress, PaletteId::Warm, true, &mut rng),
            Selection::SwitchTo(PaletteId::Cool)
        );
    }

    #[test]
    fn auto_advance_skips_mastered_later_palettes() {
        let catalog = Catalog::standard();
        let progress = UserProgress::from_records([
            (PaletteId::Warm, mastered()),
            (PaletteId::Cool, mastered()),
            (PaletteId::Neutral, PaletteProgress::unlocked()),
        ]);
        let mut rng = ScriptedRandom::default();

        assert_eq!(
            select_next_challenge(&catalog, &progress, PaletteId::Warm, true, &mut rng),
            Selection::SwitchTo(PaletteId::Neutral)
        );
    }

    #[test]
    fn everything_mastered_yields_no_challenge() {
        let catalog = Catalog::standard();
        let progress = UserProgress::from_records(
            PaletteId::ORDER.into_iter().map(|id| (id, mastered())),
        );
        let mut rng = ScriptedRandom::default();

        for palette in PaletteId::ORDER {
            assert_eq!(
                select_next_challenge(&catalog, &progress, palette, true, &mut rng),
                Selection::NoChallenge
            );
        }
    }

    #[test]
    fn nothing_unlocked_yields_no_challenge() {
        let catalog = Catalog::standard();
        let progress = UserProgress::from_records(
            PaletteId::ORDER
                .into_iter()
                .map(|id| (id, PaletteProgress::locked())),
        );
        let mut rng = ScriptedRandom::default();

        assert_eq!(
            select_next_challenge(&catalog, &progress, PaletteId::Warm, false, &mut rng),
            Selection::NoChallenge
        );
    }
}
