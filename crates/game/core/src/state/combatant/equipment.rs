//! Equipment slots for combatants.
//!
//! Equipment stores slots into the combatant's own inventory; the item data
//! (name, category, damage) lives in the inventory.

use crate::state::InventorySlot;

/// Which equipment slot an operation targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum EquipSlot {
    Weapon,
    Armor,
}

/// Equipment state for a combatant.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Equipment {
    /// Currently wielded item; overrides strength-based damage.
    #[cfg_attr(feature = "serde", serde(default))]
    pub weapon: Option<InventorySlot>,

    /// Currently worn armor.
    #[cfg_attr(feature = "serde", serde(default))]
    pub armor: Option<InventorySlot>,
}

impl Equipment {
    /// Creates empty equipment (no weapon or armor).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates a builder for constructing equipment.
    pub fn builder() -> EquipmentBuilder {
        EquipmentBuilder::default()
    }

    pub fn get(&self, slot: EquipSlot) -> Option<InventorySlot> {
        match slot {
            EquipSlot::Weapon => self.weapon,
            EquipSlot::Armor => self.armor,
        }
    }

    /// Places `item` into `slot`, returning what was there before.
    pub fn set(&mut self, slot: EquipSlot, item: InventorySlot) -> Option<InventorySlot> {
        match slot {
            EquipSlot::Weapon => self.weapon.replace(item),
            EquipSlot::Armor => self.armor.replace(item),
        }
    }

    /// Empties `slot`, returning what was there.
    pub fn clear(&mut self, slot: EquipSlot) -> Option<InventorySlot> {
        match slot {
            EquipSlot::Weapon => self.weapon.take(),
            EquipSlot::Armor => self.armor.take(),
        }
    }

    /// Returns true if `item` is equipped in any slot.
    pub fn is_equipped(&self, item: InventorySlot) -> bool {
        self.weapon == Some(item) || self.armor == Some(item)
    }
}

/// Builder for constructing equipment.
#[derive(Default)]
pub struct EquipmentBuilder {
    weapon: Option<InventorySlot>,
    armor: Option<InventorySlot>,
}

impl EquipmentBuilder {
    pub fn weapon(mut self, slot: InventorySlot) -> Self {
        self.weapon = Some(slot);
        self
    }

    pub fn armor(mut self, slot: InventorySlot) -> Self {
        self.armor = Some(slot);
        self
    }

    pub fn build(self) -> Equipment {
        Equipment {
            weapon: self.weapon,
            armor: self.armor,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_replaces_and_clear_empties() {
        let mut equipment = Equipment::builder().weapon(InventorySlot(0)).build();
        assert_eq!(equipment.get(EquipSlot::Armor), None);

        assert_eq!(
            equipment.set(EquipSlot::Weapon, InventorySlot(2)),
            Some(InventorySlot(0))
        );
        assert!(equipment.is_equipped(InventorySlot(2)));
        assert!(!equipment.is_equipped(InventorySlot(0)));

        assert_eq!(equipment.clear(EquipSlot::Weapon), Some(InventorySlot(2)));
        assert_eq!(equipment, Equipment::empty());
    }

    #[test]
    fn slot_names_parse_case_insensitively() {
        assert_eq!("Armor".parse::<EquipSlot>(), Ok(EquipSlot::Armor));
        assert_eq!(EquipSlot::Weapon.to_string(), "weapon");
    }
}
