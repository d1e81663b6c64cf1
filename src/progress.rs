//! Per-palette progress: completed challenges, stars, mastery and unlocking.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::{
    Result,
    colors::ColorId,
    error::Error,
    palette::{Palette, PaletteId},
};

/// Stars awarded for a single challenge (0-3).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub struct Stars(u8);

impl Stars {
    pub const ZERO: Stars = Stars(0);
    pub const ONE: Stars = Stars(1);
    pub const TWO: Stars = Stars(2);
    pub const THREE: Stars = Stars(3);

    pub fn new(value: u8) -> Option<Self> {
        (value <= 3).then_some(Self(value))
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// Stars for a successful mix given the attempts still available at the
    /// moment of success: three on the first attempt, two on the second, one
    /// afterwards.
    pub fn for_success(attempts_left: u8, max_attempts: u8) -> Self {
        if attempts_left >= max_attempts {
            Stars::THREE
        } else if attempts_left + 1 == max_attempts {
            Stars::TWO
        } else {
            Stars::ONE
        }
    }
}

impl TryFrom<u8> for Stars {
    type Error = Error;

    fn try_from(value: u8) -> std::result::Result<Self, Self::Error> {
        Stars::new(value).ok_or(Error::InvalidStars { value })
    }
}

impl From<Stars> for u8 {
    fn from(stars: Stars) -> Self {
        stars.0
    }
}

/// Progress within a single palette.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaletteProgress {
    pub unlocked: bool,
    pub completed_challenges: BTreeSet<ColorId>,
    pub stars_per_challenge: BTreeMap<ColorId, Stars>,
    pub total_stars: u32,
    pub mastered: bool,
}

impl PaletteProgress {
    pub fn locked() -> Self {
        Self::default()
    }

    pub fn unlocked() -> Self {
        Self {
            unlocked: true,
            ..Self::default()
        }
    }

    pub fn completed_count(&self) -> usize {
        self.completed_challenges.len()
    }

    pub fn is_completed(&self, color: ColorId) -> bool {
        self.completed_challenges.contains(&color)
    }

    pub fn stars_for(&self, color: ColorId) -> Option<Stars> {
        self.stars_per_challenge.get(&color).copied()
    }

    fn recompute_total(&mut self) {
        self.total_stars = self
            .stars_per_challenge
            .values()
            .map(|s| u32::from(s.value()))
            .sum();
    }
}

/// What a recorded completion changed beyond the completed set itself.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CompletionOutcome {
    /// The palette became mastered with this completion.
    pub just_mastered: bool,
    /// A palette that was unlocked as a consequence.
    pub unlocked: Option<PaletteId>,
}

/// Progress across all palettes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserProgress {
    palettes: BTreeMap<PaletteId, PaletteProgress>,
}

impl UserProgress {
    /// Fresh progress: the first palette unlocked, the others locked.
    pub fn initial() -> Self {
        Self::from_records(PaletteId::ORDER.into_iter().map(|id| {
            let record = if id == PaletteId::ORDER[0] {
                PaletteProgress::unlocked()
            } else {
                PaletteProgress::locked()
            };
            (id, record)
        }))
    }

    pub fn from_records(records: impl IntoIterator<Item = (PaletteId, PaletteProgress)>) -> Self {
        Self {
            palettes: records.into_iter().collect(),
        }
    }

    pub fn get(&self, palette: PaletteId) -> Option<&PaletteProgress> {
        self.palettes.get(&palette)
    }

    pub fn iter(&self) -> impl Iterator<Item = (PaletteId, &PaletteProgress)> {
        self.palettes.iter().map(|(id, progress)| (*id, progress))
    }

    pub fn is_unlocked(&self, palette: PaletteId) -> bool {
        self.get(palette).is_some_and(|p| p.unlocked)
    }

    pub fn is_mastered(&self, palette: PaletteId) -> bool {
        self.get(palette).is_some_and(|p| p.mastered)
    }

    /// First unlocked palette in the fixed order.
    pub fn first_unlocked(&self) -> Option<PaletteId> {
        PaletteId::ORDER.into_iter().find(|p| self.is_unlocked(*p))
    }

    /// First palette in the fixed order that is unlocked but not mastered.
    pub fn first_unlocked_unmastered(&self) -> Option<PaletteId> {
        PaletteId::ORDER
            .into_iter()
            .find(|p| self.is_unlocked(*p) && !self.is_mastered(*p))
    }

    pub fn total_stars(&self) -> u32 {
        self.palettes.values().map(|p| p.total_stars).sum()
    }

    /// Record `color` as completed in `palette` with `stars`.
    ///
    /// Completion is idempotent on the set; the star value is overwritten.
    /// Mastery flips once `configured_per_palette` (capped by the palette's
    /// size) distinct colors are completed and never reverts. Mastering a
    /// palette unlocks its successor.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingProgress`] when there is no record for the
    /// palette; the progress is left untouched.
    pub fn record_completion(
        &mut self,
        palette: &Palette,
        color: ColorId,
        stars: Stars,
        configured_per_palette: usize,
    ) -> Result<CompletionOutcome> {
        let required = palette.effective_challenge_count(configured_per_palette);
        let record = self
            .palettes
            .get_mut(&palette.id)
            .ok_or(Error::MissingProgress {
                palette: palette.id,
            })?;

        record.completed_challenges.insert(color);
        record.stars_per_challenge.insert(color, stars);
        record.recompute_total();

        let mut outcome = CompletionOutcome::default();
        if !record.mastered && record.completed_count() >= required {
            record.mastered = true;
            outcome.just_mastered = true;
            tracing::debug!(palette = %palette.id, "palette mastered");

            if let Some(next) = palette.id.unlocks() {
                match self.palettes.get_mut(&next) {
                    Some(next_record) if !next_record.unlocked => {
                        next_record.unlocked = true;
                        outcome.unlocked = Some(next);
                        tracing::debug!(palette = %next, "palette unlocked");
                    }
                    Some(_) => {}
                    None => {
                        tracing::error!(palette = %next, "no progress record to unlock");
                    }
                }
            }
        }

        Ok(outcome)
    }
}
