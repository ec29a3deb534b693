//! Inventory item records.

use crate::config::EncounterConfig;

/// Coarse item category, deciding which equipment slot an item occupies.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ItemCategory {
    Weapon,
    Armor,
    #[default]
    Other,
}

/// A single item carried in an inventory.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    pub name: String,
    pub category: ItemCategory,
    #[cfg_attr(feature = "serde", serde(default))]
    pub damage: f64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub defense: f64,
    /// Sprite reference for the presentation layer.
    #[cfg_attr(feature = "serde", serde(default))]
    pub image: Option<String>,
    /// Fallback display glyph when no sprite is available.
    #[cfg_attr(feature = "serde", serde(default))]
    pub glyph: Option<String>,
}

impl Item {
    pub fn new(name: impl Into<String>, category: ItemCategory) -> Self {
        Self {
            name: name.into(),
            category,
            ..Self::default()
        }
    }

    pub fn weapon(name: impl Into<String>, damage: f64) -> Self {
        Self::new(name, ItemCategory::Weapon).with_damage(damage)
    }

    pub fn armor(name: impl Into<String>, defense: f64) -> Self {
        Self::new(name, ItemCategory::Armor).with_defense(defense)
    }

    pub fn with_damage(mut self, damage: f64) -> Self {
        self.damage = damage;
        self
    }

    pub fn with_defense(mut self, defense: f64) -> Self {
        self.defense = defense;
        self
    }

    pub fn with_glyph(mut self, glyph: impl Into<String>) -> Self {
        self.glyph = Some(glyph.into());
        self
    }

    /// Damage this item deals when wielded.
    ///
    /// Anything can be swung as a weapon; items without a positive damage
    /// value hit for `config.improvised_weapon_damage` instead of their raw
    /// `damage`. This applies to every armed strike, plain attacks and
    /// `attackAfterInventory` alike, so wielding a damageless item never
    /// deals zero. Only an empty weapon slot falls back to strength.
    pub fn weapon_damage(&self, config: &EncounterConfig) -> f64 {
        if self.damage > 0.0 {
            self.damage
        } else {
            config.improvised_weapon_damage
        }
    }
}
