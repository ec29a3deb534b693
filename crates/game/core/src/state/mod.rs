//! Authoritative encounter and combatant state.
//!
//! This module owns the data structures that describe combatants, their
//! gear, the roster they live in, and the bookkeeping of a running
//! encounter. Presentation layers query this state but mutate it exclusively
//! through the engine.
pub mod combatant;
mod common;
mod encounter;
mod item;
mod roster;

pub use combatant::{Combatant, EquipSlot, Equipment, EquipmentBuilder, Equipped, Inventory};
pub use common::{CombatantId, InventorySlot, Side};
pub use encounter::{EncounterSnapshot, EncounterState};
pub use item::{Item, ItemCategory};
pub use roster::Roster;
