//! Palettes: named groups of challenge colors unlocked one after another.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{
    colors::{ColorId, LocalizedText},
    error::Error,
};

/// One of the three palettes, in unlock order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PaletteId {
    Warm,
    Cool,
    Neutral,
}

impl PaletteId {
    /// Fixed unlock and scan order.
    pub const ORDER: [PaletteId; 3] = [PaletteId::Warm, PaletteId::Cool, PaletteId::Neutral];

    pub fn as_str(self) -> &'static str {
        match self {
            PaletteId::Warm => "Warm",
            PaletteId::Cool => "Cool",
            PaletteId::Neutral => "Neutral",
        }
    }

    /// The palette unlocked by mastering this one.
    pub fn unlocks(self) -> Option<PaletteId> {
        match self {
            PaletteId::Warm => Some(PaletteId::Cool),
            PaletteId::Cool => Some(PaletteId::Neutral),
            PaletteId::Neutral => None,
        }
    }

    /// Palettes after this one in the fixed order.
    pub fn later(self) -> impl Iterator<Item = PaletteId> {
        PaletteId::ORDER.into_iter().filter(move |p| *p > self)
    }
}

impl fmt::Display for PaletteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaletteId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PaletteId::ORDER
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::UnknownPalette {
                input: s.to_string(),
                expected: "warm, cool, neutral".to_string(),
            })
    }
}

/// Palette definition: the colors challenged in it and a cosmetic display
/// subset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    pub id: PaletteId,
    pub name: LocalizedText,
    pub challenge_color_ids: Vec<ColorId>,
    #[serde(default)]
    pub display_color_ids: Vec<ColorId>,
}

impl Palette {
    /// Number of completed challenges needed to master this palette.
    ///
    /// Never more than the number of challenge colors actually defined.
    pub fn effective_challenge_count(&self, configured: usize) -> usize {
        configured.min(self.challenge_color_ids.len())
    }

    pub fn has_challenges(&self) -> bool {
        !self.challenge_color_ids.is_empty()
    }
}
