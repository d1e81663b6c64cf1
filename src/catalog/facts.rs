//! Fun facts shown after a successful mix and in the explorer.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{
    colors::{ColorId, LocalizedText},
    error::Error,
    identifiers::FactId,
};

/// Explorer category of a fun fact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum FactCategory {
    GeneralColors,
    Vision,
    LightScience,
}

impl FactCategory {
    pub const ALL: [FactCategory; 3] = [
        FactCategory::GeneralColors,
        FactCategory::Vision,
        FactCategory::LightScience,
    ];

    pub fn label(self) -> LocalizedText {
        match self {
            FactCategory::GeneralColors => LocalizedText::new("General Colors", "ألوان عامة"),
            FactCategory::Vision => LocalizedText::new("Vision", "الرؤية"),
            FactCategory::LightScience => LocalizedText::new("Light Science", "علم الضوء"),
        }
    }

    fn slug(self) -> &'static str {
        match self {
            FactCategory::GeneralColors => "general-colors",
            FactCategory::Vision => "vision",
            FactCategory::LightScience => "light-science",
        }
    }
}

impl fmt::Display for FactCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for FactCategory {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle: String = s
            .trim()
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .map(|c| c.to_ascii_lowercase())
            .collect();
        FactCategory::ALL
            .into_iter()
            .find(|category| category.slug().replace('-', "") == needle)
            .ok_or_else(|| Error::UnknownFactCategory {
                input: s.to_string(),
                expected: "general-colors, vision, light-science".to_string(),
            })
    }
}

/// A fun fact with optional links to the colors it talks about.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunFact {
    pub id: FactId,
    pub category: FactCategory,
    pub content: LocalizedText,
    #[serde(default)]
    pub related_color_ids: Vec<ColorId>,
}

impl FunFact {
    pub fn new(
        id: &str,
        category: FactCategory,
        en: &str,
        ar: &str,
        related_color_ids: &[ColorId],
    ) -> Self {
        Self {
            id: FactId::new(id),
            category,
            content: LocalizedText::new(en, ar),
            related_color_ids: related_color_ids.to_vec(),
        }
    }

    pub fn is_about(&self, color: ColorId) -> bool {
        self.related_color_ids.contains(&color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn categories_parse_from_several_spellings() {
        assert_eq!(
            "light-science".parse::<FactCategory>().unwrap(),
            FactCategory::LightScience
        );
        assert_eq!(
            "LightScience".parse::<FactCategory>().unwrap(),
            FactCategory::LightScience
        );
        assert_eq!(
            "general_colors".parse::<FactCategory>().unwrap(),
            FactCategory::GeneralColors
        );
        assert!("history".parse::<FactCategory>().is_err());
    }

    #[test]
    fn display_matches_parse() {
        for category in FactCategory::ALL {
            assert_eq!(category.to_string().parse::<FactCategory>().unwrap(), category);
        }
    }
}
