//! Ordered item storage for combatants.

use crate::state::{InventorySlot, Item};

/// Ordered, append-only sequence of items.
///
/// Slots are stable because items are never removed while an encounter
/// references them.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Inventory {
    items: Vec<Item>,
}

impl Inventory {
    pub fn new(items: Vec<Item>) -> Self {
        Self { items }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Appends an item and returns the slot it landed in.
    pub fn push(&mut self, item: Item) -> InventorySlot {
        self.items.push(item);
        InventorySlot(self.items.len() - 1)
    }

    pub fn get(&self, slot: InventorySlot) -> Option<&Item> {
        self.items.get(slot.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_returns_stable_slots() {
        let mut inventory = Inventory::new(vec![Item::weapon("Shiv", 8.0)]);
        let bread = inventory.push(Item::default());
        assert_eq!(bread, InventorySlot(1));
        assert_eq!(inventory.get(InventorySlot(0)).map(|i| i.name.as_str()), Some("Shiv"));
        assert_eq!(inventory.get(InventorySlot(2)), None);
        assert!(Inventory::empty().is_empty());
    }
}
