//! Evade and flee chances.

use crate::config::EncounterConfig;

/// Chance that an evade or flee attempt succeeds.
///
/// # Formula
///
/// ```text
/// chance = (luck + agility) / escape_divisor        // divisor 40 by default
/// ```
///
/// Not clamped; values above 1 always succeed.
pub fn escape_chance(luck: f64, agility: f64, config: &EncounterConfig) -> f64 {
    (luck + agility) / config.escape_divisor
}

/// Returns `true` if `roll` (uniform in `[0, 1)`) lands under the escape chance.
pub fn check_escape(luck: f64, agility: f64, roll: f64, config: &EncounterConfig) -> bool {
    roll < escape_chance(luck, agility, config)
}
