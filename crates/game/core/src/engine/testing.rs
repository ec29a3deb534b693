//! Shared fixtures for engine tests.

use crate::state::{CombatantId, Combatant, EncounterState, Item, Roster};

pub const HERO: CombatantId = CombatantId(0);
pub const PRISONER: CombatantId = CombatantId(1);

pub fn wanderer() -> Combatant {
    Combatant::new("Wanderer", 100.0)
        .with_strength(10.0)
        .with_agility(14.0)
        .with_luck(12.0)
        .with_weapon(Item::weapon("Rusty Shank", 15.0))
}

pub fn prisoner() -> Combatant {
    Combatant::new("Escaped Prisoner", 50.0)
        .with_strength(5.0)
        .with_agility(5.0)
        .with_luck(1.0)
        .with_weapon(Item::weapon("Shiv", 8.0))
}

/// One wanderer against one escaped prisoner.
pub fn skirmish() -> (Roster, EncounterState) {
    let mut roster = Roster::new();
    let hero = roster.insert(wanderer());
    let prisoner = roster.insert(prisoner());
    (roster, EncounterState::new(vec![hero], vec![prisoner], 7))
}
