//! Roster loader.
//!
//! Loads the party and the enemies of an encounter from a RON file and places
//! them in a fresh [`Roster`].

use std::path::Path;

use encounter_core::{Combatant, CombatantId, EncounterState, Roster};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Roster file structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterFile {
    pub party: Vec<Combatant>,
    pub enemies: Vec<Combatant>,
}

/// A loaded roster with the handles of each side.
#[derive(Debug, Clone)]
pub struct LoadedRoster {
    pub roster: Roster,
    pub party: Vec<CombatantId>,
    pub enemies: Vec<CombatantId>,
}

impl LoadedRoster {
    /// Encounter bookkeeping for these sides, not yet started.
    pub fn encounter(&self, seed: u64) -> EncounterState {
        EncounterState::new(self.party.clone(), self.enemies.clone(), seed)
    }
}

/// Loader for rosters from RON files.
pub struct RosterLoader;

impl RosterLoader {
    /// Load a roster from a RON file.
    ///
    /// Party members are inserted first, then enemies, each in file order.
    /// Equipment must point at existing inventory slots.
    pub fn load(path: &Path) -> LoadResult<LoadedRoster> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub(crate) fn parse(content: &str) -> LoadResult<LoadedRoster> {
        let file: RosterFile = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse roster RON: {}", e))?;

        let mut roster = Roster::new();
        let mut insert_all = |combatants: Vec<Combatant>| -> LoadResult<Vec<CombatantId>> {
            combatants
                .into_iter()
                .map(|combatant| {
                    if !combatant.equipment_is_consistent() {
                        anyhow::bail!(
                            "Combatant '{}' equips an item that is not in its inventory",
                            combatant.name
                        );
                    }
                    Ok(roster.insert(combatant))
                })
                .collect()
        };

        let party = insert_all(file.party)?;
        let enemies = insert_all(file.enemies)?;

        tracing::debug!(
            "Loaded roster: {} party member(s), {} enemy(ies)",
            party.len(),
            enemies.len()
        );

        Ok(LoadedRoster {
            roster,
            party,
            enemies,
        })
    }
}
