//! Two-color mixing rules and the fundamental color set.
//!
//! A rule maps an *unordered* pair of inputs to one output color. Lookups
//! normalize the pair before matching, so `lookup(a, b) == lookup(b, a)`.

use std::collections::{BTreeSet, HashMap};

use serde::{Deserialize, Serialize};

use crate::{Result, colors::ColorId, error::Error};

/// Canonical ordering of an unordered color pair.
pub fn normalize_pair(a: ColorId, b: ColorId) -> (ColorId, ColorId) {
    if a <= b { (a, b) } else { (b, a) }
}

/// One mixing rule: `inputs[0] + inputs[1] = output`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MixingRule {
    pub inputs: [ColorId; 2],
    pub output: ColorId,
}

impl MixingRule {
    pub fn new(a: ColorId, b: ColorId, output: ColorId) -> Self {
        let (first, second) = normalize_pair(a, b);
        Self {
            inputs: [first, second],
            output,
        }
    }

    /// The inputs in canonical order.
    pub fn pair(&self) -> (ColorId, ColorId) {
        normalize_pair(self.inputs[0], self.inputs[1])
    }

    pub fn matches(&self, a: ColorId, b: ColorId) -> bool {
        self.pair() == normalize_pair(a, b)
    }
}

/// The fixed rule table plus the set of colors that are challenged directly
/// rather than by mixing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MixingTable {
    rules: Vec<MixingRule>,
    fundamentals: BTreeSet<ColorId>,
}

impl MixingTable {
    pub fn new(rules: Vec<MixingRule>, fundamentals: impl IntoIterator<Item = ColorId>) -> Self {
        Self {
            rules,
            fundamentals: fundamentals.into_iter().collect(),
        }
    }

    /// Result of mixing `a` with `b`, if a rule exists for the pair.
    pub fn lookup(&self, a: ColorId, b: ColorId) -> Option<ColorId> {
        self.rules
            .iter()
            .find(|rule| rule.matches(a, b))
            .map(|rule| rule.output)
    }

    pub fn is_fundamental(&self, color: ColorId) -> bool {
        self.fundamentals.contains(&color)
    }

    /// The inputs of the first rule producing `target`.
    ///
    /// Fundamental colors have no recipe even if some rule happens to produce
    /// them.
    pub fn recipe_for(&self, target: ColorId) -> Option<(ColorId, ColorId)> {
        if self.is_fundamental(target) {
            return None;
        }
        self.rules
            .iter()
            .find(|rule| rule.output == target)
            .map(MixingRule::pair)
    }

    pub fn rules(&self) -> &[MixingRule] {
        &self.rules
    }

    pub fn fundamentals(&self) -> impl Iterator<Item = ColorId> + '_ {
        self.fundamentals.iter().copied()
    }

    /// Check the table invariants: no rule mixes a color with itself and no
    /// two rules share an unordered input pair.
    pub fn validate(&self) -> Result<()> {
        let mut seen: HashMap<(ColorId, ColorId), ColorId> = HashMap::new();
        for rule in &self.rules {
            let pair = rule.pair();
            if pair.0 == pair.1 {
                return Err(Error::InvalidCatalog {
                    message: format!("mixing rule mixes {} with itself", pair.0),
                });
            }
            if let Some(previous) = seen.insert(pair, rule.output) {
                return Err(Error::InvalidCatalog {
                    message: format!(
                        "mixing pair {} + {} is defined twice (-> {previous} and -> {})",
                        pair.0, pair.1, rule.output
                    ),
                });
            }
        }
        Ok(())
    }
}
