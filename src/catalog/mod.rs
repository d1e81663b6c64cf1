//! Reference data: colors, mixing rules, palettes, fun facts, avatars and
//! mini-game challenges.
//!
//! The catalog is immutable once built. [`Catalog::standard`] is the built-in
//! data set; alternative catalogs can be loaded from JSON and are checked with
//! [`Catalog::validate`] before use.

pub mod challenges;
pub mod facts;
mod standard;

use std::{collections::HashSet, fs, path::Path};

use serde::{Deserialize, Serialize};

pub use challenges::{Avatar, ColorMatchChallenge, RainbowChallenge};
pub use facts::{FactCategory, FunFact};

use crate::{
    Result,
    colors::{Color, ColorId},
    error::Error,
    identifiers::{AvatarId, FactId},
    mixing::MixingTable,
    palette::{Palette, PaletteId},
    progress::UserProgress,
};

/// All static reference data the game reads from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    pub colors: Vec<Color>,
    pub mixing: MixingTable,
    /// Swatches offered in the mixing tray.
    pub selectable_color_ids: Vec<ColorId>,
    pub palettes: Vec<Palette>,
    pub fun_facts: Vec<FunFact>,
    pub avatars: Vec<Avatar>,
    pub color_match_challenges: Vec<ColorMatchChallenge>,
    pub rainbow_challenges: Vec<RainbowChallenge>,
}

impl Catalog {
    /// Load a catalog from a JSON file.
    ///
    /// The catalog is returned as parsed; call [`validate`](Self::validate)
    /// to check its integrity.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|source| Error::Io {
            operation: format!("read catalog {path:?}"),
            source,
        })?;
        Ok(serde_json::from_str(&contents)?)
    }

    pub fn color(&self, id: ColorId) -> Option<&Color> {
        self.colors.iter().find(|color| color.id == id)
    }

    pub fn palette(&self, id: PaletteId) -> Option<&Palette> {
        self.palettes.iter().find(|palette| palette.id == id)
    }

    /// Like [`palette`](Self::palette), for callers that cannot continue
    /// without the definition.
    pub fn require_palette(&self, id: PaletteId) -> Result<&Palette> {
        self.palette(id).ok_or(Error::MissingPalette { palette: id })
    }

    pub fn avatar(&self, id: &AvatarId) -> Option<&Avatar> {
        self.avatars.iter().find(|avatar| &avatar.id == id)
    }

    /// The avatar selected in a fresh state.
    pub fn default_avatar(&self) -> Option<&Avatar> {
        self.avatars.first()
    }

    pub fn fact(&self, id: &FactId) -> Option<&FunFact> {
        self.fun_facts.iter().find(|fact| &fact.id == id)
    }

    pub fn facts_in(&self, category: FactCategory) -> impl Iterator<Item = &FunFact> + '_ {
        self.fun_facts
            .iter()
            .filter(move |fact| fact.category == category)
    }

    /// First fact (in catalog order) that mentions `color`.
    pub fn first_fact_about(&self, color: ColorId) -> Option<&FunFact> {
        self.fun_facts.iter().find(|fact| fact.is_about(color))
    }

    /// Whether every palette with challenge colors is mastered.
    ///
    /// Palettes without challenge colors count as mastered.
    pub fn all_palettes_mastered(&self, progress: &UserProgress) -> bool {
        self.palettes
            .iter()
            .all(|palette| !palette.has_challenges() || progress.is_mastered(palette.id))
    }

    /// Check data integrity.
    ///
    /// Reports the first problem found: malformed mixing rules, duplicate
    /// ids, unparseable hex values, palettes missing from the fixed order,
    /// Color-Match challenges whose choices omit the answer, and Rainbow
    /// challenges whose choices omit a sequence color.
    pub fn validate(&self) -> Result<()> {
        self.mixing.validate()?;

        ensure_unique("color", self.colors.iter().map(|color| color.id.as_str()))?;
        ensure_unique("fun fact", self.fun_facts.iter().map(|fact| fact.id.as_str()))?;
        ensure_unique("avatar", self.avatars.iter().map(|avatar| avatar.id.as_str()))?;
        ensure_unique(
            "palette",
            self.palettes.iter().map(|palette| palette.id.as_str()),
        )?;
        ensure_unique(
            "challenge",
            self.color_match_challenges
                .iter()
                .map(|challenge| challenge.id.as_str())
                .chain(self.rainbow_challenges.iter().map(|c| c.id.as_str())),
        )?;

        if let Some(color) = self.colors.iter().find(|color| color.rgb().is_none()) {
            return Err(invalid(format!(
                "color {} has a malformed hex value {:?}",
                color.id, color.hex
            )));
        }

        for id in PaletteId::ORDER {
            if self.palette(id).is_none() {
                return Err(invalid(format!("palette {id} is not defined")));
            }
        }

        for challenge in &self.color_match_challenges {
            if !challenge
                .choice_color_ids
                .contains(&challenge.correct_color_id)
            {
                return Err(invalid(format!(
                    "color-match challenge {} does not offer its answer {}",
                    challenge.id, challenge.correct_color_id
                )));
            }
        }

        for challenge in &self.rainbow_challenges {
            if challenge.correct_sequence.is_empty() {
                return Err(invalid(format!(
                    "rainbow challenge {} has an empty sequence",
                    challenge.id
                )));
            }
            if let Some(missing) = challenge
                .correct_sequence
                .iter()
                .find(|color| !challenge.available_choices.contains(color))
            {
                return Err(invalid(format!(
                    "rainbow challenge {} does not offer sequence color {missing}",
                    challenge.id
                )));
            }
        }

        Ok(())
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::standard()
    }
}

fn invalid(message: String) -> Error {
    Error::InvalidCatalog { message }
}

fn ensure_unique<'a>(kind: &str, ids: impl IntoIterator<Item = &'a str>) -> Result<()> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(invalid(format!("duplicate {kind} id {id}")));
        }
    }
    Ok(())
}
