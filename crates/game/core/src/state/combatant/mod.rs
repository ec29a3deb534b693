//! Combatant records.
//!
//! This module contains everything specific to a single fighter:
//! - Combatant: vital and derived stats plus gear
//! - Equipment: weapon and armor slots
//! - Inventory: ordered item storage

pub mod equipment;
pub mod inventory;

pub use equipment::{EquipSlot, Equipment, EquipmentBuilder};
pub use inventory::Inventory;

use crate::config::EncounterConfig;
use crate::state::{InventorySlot, Item, ItemCategory};

/// A player party member or an enemy.
///
/// # Invariants
///
/// - Equipment slots always point at existing inventory slots
/// - `health` may drop below zero; anything `<= 0` counts as defeated
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Combatant {
    pub name: String,
    pub health: f64,
    pub strength: f64,
    pub agility: f64,
    pub luck: f64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub equipment: Equipment,
    #[cfg_attr(feature = "serde", serde(default))]
    pub inventory: Inventory,
}

/// Result of equipping an inventory item.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Equipped {
    /// Slot the item went into.
    pub slot: EquipSlot,
    /// Item that previously occupied that slot.
    pub replaced: Option<InventorySlot>,
}

impl Combatant {
    pub fn new(name: impl Into<String>, health: f64) -> Self {
        Self {
            name: name.into(),
            health,
            ..Self::default()
        }
    }

    pub fn with_strength(mut self, strength: f64) -> Self {
        self.strength = strength;
        self
    }

    pub fn with_agility(mut self, agility: f64) -> Self {
        self.agility = agility;
        self
    }

    pub fn with_luck(mut self, luck: f64) -> Self {
        self.luck = luck;
        self
    }

    /// Adds `item` to the inventory and wields it.
    pub fn with_weapon(mut self, item: Item) -> Self {
        let slot = self.inventory.push(item);
        self.equipment.weapon = Some(slot);
        self
    }

    /// Adds `item` to the inventory and wears it.
    pub fn with_armor(mut self, item: Item) -> Self {
        let slot = self.inventory.push(item);
        self.equipment.armor = Some(slot);
        self
    }

    /// Quick check if the combatant is out of the fight.
    #[inline]
    pub fn is_defeated(&self) -> bool {
        self.health <= 0.0
    }

    pub fn weapon(&self) -> Option<&Item> {
        self.equipment.weapon.and_then(|slot| self.inventory.get(slot))
    }

    pub fn armor(&self) -> Option<&Item> {
        self.equipment.armor.and_then(|slot| self.inventory.get(slot))
    }

    /// Damage of an unarmed or armed basic attack, before variance.
    pub fn base_damage(&self, config: &EncounterConfig) -> f64 {
        match self.weapon() {
            Some(weapon) => weapon.weapon_damage(config),
            None => self.strength / config.strength_divisor,
        }
    }

    /// Appends an item picked up from the world.
    pub fn pick_up(&mut self, item: Item) -> InventorySlot {
        self.inventory.push(item)
    }

    /// Equips the item in `item`.
    ///
    /// Armor goes to the armor slot; anything else is wielded. Returns `None`
    /// if the inventory has no such slot.
    pub fn equip(&mut self, item: InventorySlot) -> Option<Equipped> {
        let category = self.inventory.get(item)?.category;
        let slot = match category {
            ItemCategory::Armor => EquipSlot::Armor,
            ItemCategory::Weapon | ItemCategory::Other => EquipSlot::Weapon,
        };
        let replaced = self.equipment.set(slot, item);
        Some(Equipped { slot, replaced })
    }

    /// Empties `slot`, returning the item slot that was equipped there.
    pub fn unequip(&mut self, slot: EquipSlot) -> Option<InventorySlot> {
        self.equipment.clear(slot)
    }

    /// Ensures every equipment slot references an existing item.
    pub fn equipment_is_consistent(&self) -> bool {
        [self.equipment.weapon, self.equipment.armor]
            .into_iter()
            .flatten()
            .all(|slot| self.inventory.get(slot).is_some())
    }
}
