//! Combatant table shared between exploration and combat.

use crate::error::EncounterError;
use crate::state::{CombatantId, Combatant, EquipSlot, Equipped, InventorySlot, Item};

/// Owns every combatant record the exploration layer knows about.
///
/// Encounters hold [`CombatantId`] handles into this table and apply health
/// and inventory changes through them, so the exploration layer sees the
/// results once combat is over.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Roster {
    combatants: Vec<Combatant>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a combatant and returns its handle.
    pub fn insert(&mut self, combatant: Combatant) -> CombatantId {
        self.combatants.push(combatant);
        CombatantId((self.combatants.len() - 1) as u32)
    }

    pub fn get(&self, id: CombatantId) -> Option<&Combatant> {
        self.combatants.get(id.index())
    }

    pub fn get_mut(&mut self, id: CombatantId) -> Option<&mut Combatant> {
        self.combatants.get_mut(id.index())
    }

    /// Like [`get`](Self::get), but a stale handle is an error.
    pub fn require(&self, id: CombatantId) -> Result<&Combatant, EncounterError> {
        self.get(id).ok_or(EncounterError::UnknownCombatant(id))
    }

    pub fn require_mut(&mut self, id: CombatantId) -> Result<&mut Combatant, EncounterError> {
        self.get_mut(id).ok_or(EncounterError::UnknownCombatant(id))
    }

    pub fn len(&self) -> usize {
        self.combatants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.combatants.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (CombatantId, &Combatant)> {
        self.combatants
            .iter()
            .enumerate()
            .map(|(index, combatant)| (CombatantId(index as u32), combatant))
    }

    /// Puts an item found in the world into a combatant's inventory.
    pub fn pick_up(&mut self, id: CombatantId, item: Item) -> Result<InventorySlot, EncounterError> {
        let combatant = self.require_mut(id)?;
        tracing::debug!("{} picked up {}", combatant.name, item.name);
        Ok(combatant.pick_up(item))
    }

    /// Equips an inventory item of `id`.
    pub fn equip(&mut self, id: CombatantId, slot: InventorySlot) -> Result<Equipped, EncounterError> {
        let combatant = self.require_mut(id)?;
        let equipped = combatant
            .equip(slot)
            .ok_or(EncounterError::InvalidSlot { actor: id, slot })?;
        tracing::debug!("{} equipped slot {} as {}", combatant.name, slot, equipped.slot);
        Ok(equipped)
    }

    /// Empties an equipment slot of `id`. `Ok(None)` means nothing was equipped.
    pub fn unequip(
        &mut self,
        id: CombatantId,
        slot: EquipSlot,
    ) -> Result<Option<InventorySlot>, EncounterError> {
        Ok(self.require_mut(id)?.unequip(slot))
    }
}

impl FromIterator<Combatant> for Roster {
    fn from_iter<T: IntoIterator<Item = Combatant>>(iter: T) -> Self {
        Self {
            combatants: iter.into_iter().collect(),
        }
    }
}
