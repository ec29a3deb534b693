//! Damage calculation and application.

use crate::config::EncounterConfig;

/// A resolved hit: base damage, the variance applied to it, and what landed.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Strike {
    /// Damage before variance (weapon damage or strength fallback).
    pub base: f64,
    /// Variance multiplier in `[variance_min, variance_min + variance_span)`.
    pub multiplier: f64,
    /// Health actually removed from the target.
    pub dealt: f64,
}

/// Maps a uniform roll in `[0, 1)` onto the damage multiplier range.
///
/// # Formula
///
/// ```text
/// multiplier = roll * variance_span + variance_min    // [0.75, 1.25) by default
/// ```
pub fn damage_multiplier(roll: f64, config: &EncounterConfig) -> f64 {
    roll * config.variance_span + config.variance_min
}

/// Applies variance to `base` damage.
pub fn calculate_strike(base: f64, roll: f64, config: &EncounterConfig) -> Strike {
    let multiplier = damage_multiplier(roll, config);
    Strike {
        base,
        multiplier,
        dealt: base * multiplier,
    }
}

/// Apply damage to current health.
///
/// Health is not clamped: overkill leaves it negative, and anything `<= 0`
/// counts as defeated.
pub fn apply_damage(current_health: f64, damage: f64) -> f64 {
    current_health - damage
}
