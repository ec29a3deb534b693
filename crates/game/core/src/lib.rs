//! Deterministic encounter rules shared by every client.
//!
//! `encounter-core` defines the canonical combat rules (combatants, actions,
//! turn order, round resolution, loot) and exposes pure APIs with no I/O.
//! All encounter mutation flows through [`engine::EncounterEngine`], and
//! supporting crates depend on the types re-exported here.
pub mod action;
pub mod combat;
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod state;

pub use action::{ActionKind, ActionQueue, EncounterAction, RoundAction};
pub use config::EncounterConfig;
pub use engine::{
    AdvanceOutcome, EncounterEngine, LootOutcome, RoundReport, SelectOutcome, Verdict,
};
pub use env::{EncounterEnv, FixedRng, PcgRng, RngOracle, RollContext, SequenceRng, compute_seed};
pub use error::{EncounterError, ErrorSeverity, GameError};
pub use state::{
    Combatant, CombatantId, EncounterSnapshot, EncounterState, EquipSlot, Equipment,
    EquipmentBuilder, Equipped, Inventory, InventorySlot, Item, ItemCategory, Roster, Side,
};
