//! Game configuration.

use std::{fs, path::Path, time::Duration};

use serde::{Deserialize, Serialize};

use crate::{Result, error::Error, palette::PaletteId, state::HapticPattern};

/// Session size and attempt limit of a mini-game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MiniGameLimits {
    pub session_length: usize,
    pub max_attempts: u8,
}

/// Delays (milliseconds) before scheduled follow-up actions fire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FollowUpDelays {
    pub shake_reset_ms: u64,
    pub fun_fact_modal_ms: u64,
    pub error_flash_ms: u64,
    pub happy_reaction_ms: u64,
    pub sad_reaction_ms: u64,
}

impl FollowUpDelays {
    pub fn shake_reset(&self) -> Duration {
        Duration::from_millis(self.shake_reset_ms)
    }

    pub fn fun_fact_modal(&self) -> Duration {
        Duration::from_millis(self.fun_fact_modal_ms)
    }

    pub fn error_flash(&self) -> Duration {
        Duration::from_millis(self.error_flash_ms)
    }

    pub fn happy_reaction(&self) -> Duration {
        Duration::from_millis(self.happy_reaction_ms)
    }

    pub fn sad_reaction(&self) -> Duration {
        Duration::from_millis(self.sad_reaction_ms)
    }
}

impl Default for FollowUpDelays {
    fn default() -> Self {
        Self {
            shake_reset_ms: 500,
            fun_fact_modal_ms: 2100,
            error_flash_ms: 500,
            happy_reaction_ms: 600,
            sad_reaction_ms: 500,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HapticPatterns {
    pub success: HapticPattern,
    pub failure: HapticPattern,
}

impl Default for HapticPatterns {
    fn default() -> Self {
        Self {
            success: HapticPattern(vec![100]),
            failure: HapticPattern(vec![75, 50, 75]),
        }
    }
}

/// Tunable rules of the game.
///
/// Builder-style setters allow overriding individual values:
///
/// ```
/// use mira_colors::app::GameConfig;
/// use mira_colors::palette::PaletteId;
///
/// let config = GameConfig::default()
///     .with_max_attempts(3)
///     .with_default_palette(PaletteId::Cool)
///     .with_seed(42);
/// assert_eq!(config.max_attempts, 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Mix attempts per main-game challenge
    pub max_attempts: u8,
    /// Completed challenges needed to master a palette
    pub challenges_per_palette: usize,
    /// Palette focused in a fresh state
    pub default_palette: PaletteId,
    pub color_match: MiniGameLimits,
    pub rainbow_sequence: MiniGameLimits,
    pub delays: FollowUpDelays,
    pub haptics: HapticPatterns,
    /// Random seed for reproducibility
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_attempts: 2,
            challenges_per_palette: 5,
            default_palette: PaletteId::Warm,
            color_match: MiniGameLimits {
                session_length: 5,
                max_attempts: 3,
            },
            rainbow_sequence: MiniGameLimits {
                session_length: 3,
                max_attempts: 2,
            },
            delays: FollowUpDelays::default(),
            haptics: HapticPatterns::default(),
            seed: None,
        }
    }
}

impl GameConfig {
    /// Load a configuration from a JSON file. Missing fields take their
    /// default values.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|source| Error::Io {
            operation: format!("read config {path:?}"),
            source,
        })?;
        let config: Self = serde_json::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_max_attempts(mut self, attempts: u8) -> Self {
        self.max_attempts = attempts;
        self
    }

    pub fn with_challenges_per_palette(mut self, count: usize) -> Self {
        self.challenges_per_palette = count;
        self
    }

    pub fn with_default_palette(mut self, palette: PaletteId) -> Self {
        self.default_palette = palette;
        self
    }

    pub fn with_color_match(mut self, limits: MiniGameLimits) -> Self {
        self.color_match = limits;
        self
    }

    pub fn with_rainbow_sequence(mut self, limits: MiniGameLimits) -> Self {
        self.rainbow_sequence = limits;
        self
    }

    pub fn with_delays(mut self, delays: FollowUpDelays) -> Self {
        self.delays = delays;
        self
    }

    /// Set the random seed for deterministic behavior.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Reject limits that would make a game unplayable.
    pub fn validate(&self) -> Result<()> {
        let checks = [
            (self.max_attempts == 0, "max_attempts must be at least 1"),
            (
                self.challenges_per_palette == 0,
                "challenges_per_palette must be at least 1",
            ),
            (
                self.color_match.max_attempts == 0 || self.color_match.session_length == 0,
                "color_match limits must be at least 1",
            ),
            (
                self.rainbow_sequence.max_attempts == 0
                    || self.rainbow_sequence.session_length == 0,
                "rainbow_sequence limits must be at least 1",
            ),
        ];
        match checks.iter().find(|(failed, _)| *failed) {
            Some((_, message)) => Err(Error::InvalidConfiguration {
                message: (*message).to_string(),
            }),
            None => Ok(()),
        }
    }
}
