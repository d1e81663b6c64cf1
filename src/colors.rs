//! Color identities, localized names and display values.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Identity of one of the colors known to the game.
///
/// The set is closed: every challenge target, mixing input and mini-game answer
/// refers to one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorId {
    Red,
    Yellow,
    Blue,
    Orange,
    Green,
    Purple,
    White,
    Black,
    Gray,
    Brown,
    Pink,
    Vermilion,
    Amber,
    Chartreuse,
    Teal,
    Violet,
    Magenta,
    Cyan,
    Lime,
    Turquoise,
    Gold,
    Silver,
}

impl ColorId {
    /// Every color, in catalog order.
    pub const ALL: [ColorId; 22] = [
        ColorId::Red,
        ColorId::Yellow,
        ColorId::Blue,
        ColorId::Orange,
        ColorId::Green,
        ColorId::Purple,
        ColorId::White,
        ColorId::Black,
        ColorId::Gray,
        ColorId::Brown,
        ColorId::Pink,
        ColorId::Vermilion,
        ColorId::Amber,
        ColorId::Chartreuse,
        ColorId::Teal,
        ColorId::Violet,
        ColorId::Magenta,
        ColorId::Cyan,
        ColorId::Lime,
        ColorId::Turquoise,
        ColorId::Gold,
        ColorId::Silver,
    ];

    /// Lowercase identifier as used in catalogs and scripts.
    pub fn as_str(self) -> &'static str {
        match self {
            ColorId::Red => "red",
            ColorId::Yellow => "yellow",
            ColorId::Blue => "blue",
            ColorId::Orange => "orange",
            ColorId::Green => "green",
            ColorId::Purple => "purple",
            ColorId::White => "white",
            ColorId::Black => "black",
            ColorId::Gray => "gray",
            ColorId::Brown => "brown",
            ColorId::Pink => "pink",
            ColorId::Vermilion => "vermilion",
            ColorId::Amber => "amber",
            ColorId::Chartreuse => "chartreuse",
            ColorId::Teal => "teal",
            ColorId::Violet => "violet",
            ColorId::Magenta => "magenta",
            ColorId::Cyan => "cyan",
            ColorId::Lime => "lime",
            ColorId::Turquoise => "turquoise",
            ColorId::Gold => "gold",
            ColorId::Silver => "silver",
        }
    }
}

impl fmt::Display for ColorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColorId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase();
        let needle = if needle == "grey" { "gray".to_string() } else { needle };
        ColorId::ALL
            .into_iter()
            .find(|id| id.as_str() == needle)
            .ok_or_else(|| Error::UnknownColor {
                input: s.to_string(),
            })
    }
}

/// Display language. Arabic is laid out right-to-left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Ar,
}

/// A string available in every supported language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedText {
    pub en: String,
    pub ar: String,
}

impl LocalizedText {
    pub fn new(en: impl Into<String>, ar: impl Into<String>) -> Self {
        Self {
            en: en.into(),
            ar: ar.into(),
        }
    }

    /// Text in the requested language, falling back to English when the
    /// translation is empty.
    pub fn get(&self, language: Language) -> &str {
        match language {
            Language::Ar if !self.ar.is_empty() => &self.ar,
            _ => &self.en,
        }
    }
}

/// A color definition: identity, localized name and `#RRGGBB` display value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub id: ColorId,
    pub name: LocalizedText,
    pub hex: String,
}

impl Color {
    pub fn new(id: ColorId, en: &str, ar: &str, hex: &str) -> Self {
        Self {
            id,
            name: LocalizedText::new(en, ar),
            hex: hex.to_string(),
        }
    }

    /// Parse the display value into RGB components.
    ///
    /// Accepts `#RRGGBB` and the `#RGB` shorthand.
    pub fn rgb(&self) -> Option<(u8, u8, u8)> {
        let hex = self.hex.strip_prefix('#').unwrap_or(&self.hex);
        match hex.len() {
            6 => {
                let value = u32::from_str_radix(hex, 16).ok()?;
                Some(((value >> 16) as u8, (value >> 8) as u8, value as u8))
            }
            3 => {
                let mut channels = hex.chars().map(|c| {
                    let digit = c.to_digit(16)? as u8;
                    Some(digit * 16 + digit)
                });
                Some((channels.next()??, channels.next()??, channels.next()??))
            }
            _ => None,
        }
    }
}
