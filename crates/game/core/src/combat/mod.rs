//! Combat resolution formulas.
//!
//! This module provides pure functions for resolving combat interactions.
//! Random rolls are passed in, so every function is deterministic.
//!
//! # Core Functions
//!
//! - `calculate_strike`: base damage × variance multiplier
//! - `apply_damage`: health reduction (unclamped)
//! - `check_escape`: evade/flee success from luck and agility
//! - `choose_enemy_action`: flee-or-attack policy for enemies

pub mod damage;
pub mod escape;
pub mod policy;

pub use damage::{Strike, apply_damage, calculate_strike, damage_multiplier};
pub use escape::{check_escape, escape_chance};
pub use policy::{choose_enemy_action, flee_threshold, target_candidates};
