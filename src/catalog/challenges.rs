//! Mini-game challenge definitions and avatars.

use serde::{Deserialize, Serialize};

use crate::{
    colors::{ColorId, LocalizedText},
    identifiers::{AvatarId, ChallengeId},
};

/// "Which color is this object?" with a fixed set of choices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorMatchChallenge {
    pub id: ChallengeId,
    pub object_name: LocalizedText,
    pub image_url: String,
    pub correct_color_id: ColorId,
    pub choice_color_ids: Vec<ColorId>,
}

impl ColorMatchChallenge {
    pub fn new(
        id: &str,
        object_name: LocalizedText,
        image_url: &str,
        correct_color_id: ColorId,
        choice_color_ids: &[ColorId],
    ) -> Self {
        Self {
            id: ChallengeId::new(id),
            object_name,
            image_url: image_url.to_string(),
            correct_color_id,
            choice_color_ids: choice_color_ids.to_vec(),
        }
    }
}

/// Tap the colors of `correct_sequence` in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RainbowChallenge {
    pub id: ChallengeId,
    pub name: LocalizedText,
    pub description: LocalizedText,
    pub correct_sequence: Vec<ColorId>,
    pub available_choices: Vec<ColorId>,
}

impl RainbowChallenge {
    pub fn new(
        id: &str,
        name: LocalizedText,
        description: LocalizedText,
        correct_sequence: &[ColorId],
        available_choices: &[ColorId],
    ) -> Self {
        Self {
            id: ChallengeId::new(id),
            name,
            description,
            correct_sequence: correct_sequence.to_vec(),
            available_choices: available_choices.to_vec(),
        }
    }

    /// Whether `taps` is a prefix of the correct sequence.
    pub fn accepts_prefix(&self, taps: &[ColorId]) -> bool {
        self.correct_sequence.starts_with(taps)
    }

    pub fn is_complete(&self, taps: &[ColorId]) -> bool {
        self.correct_sequence == taps
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Avatar {
    pub id: AvatarId,
    pub name: LocalizedText,
    pub image_url: String,
}

impl Avatar {
    pub fn new(id: &str, en: &str, ar: &str, image_url: &str) -> Self {
        Self {
            id: AvatarId::new(id),
            name: LocalizedText::new(en, ar),
            image_url: image_url.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn primaries() -> RainbowChallenge {
        RainbowChallenge::new(
            "rs_test",
            LocalizedText::new("Test", "اختبار"),
            LocalizedText::new("Tap", "اضغط"),
            &[ColorId::Red, ColorId::Yellow, ColorId::Blue],
            &[ColorId::Red, ColorId::Yellow, ColorId::Blue, ColorId::Green],
        )
    }

    #[test]
    fn prefix_check_rejects_first_divergence() {
        let challenge = primaries();
        assert!(challenge.accepts_prefix(&[]));
        assert!(challenge.accepts_prefix(&[ColorId::Red, ColorId::Yellow]));
        assert!(!challenge.accepts_prefix(&[ColorId::Red, ColorId::Blue]));
        assert!(!challenge.accepts_prefix(&[
            ColorId::Red,
            ColorId::Yellow,
            ColorId::Blue,
            ColorId::Green
        ]));
    }

    #[test]
    fn completion_requires_the_full_sequence() {
        let challenge = primaries();
        assert!(!challenge.is_complete(&[ColorId::Red, ColorId::Yellow]));
        assert!(challenge.is_complete(&[ColorId::Red, ColorId::Yellow, ColorId::Blue]));
    }
}
