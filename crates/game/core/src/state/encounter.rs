use crate::action::{ActionQueue, RoundAction};
use crate::state::{CombatantId, Side};

/// Persistent bookkeeping of one encounter between calls into the engine.
///
/// Mutated exclusively through [`EncounterEngine`](crate::engine::EncounterEngine).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EncounterState {
    /// Player-controlled combatants, fixed for the encounter.
    pub party: Vec<CombatantId>,

    /// Opposing combatants.
    pub enemies: Vec<CombatantId>,

    /// Index into `party ++ enemies` of the combatant choosing next.
    pub current_turn: usize,

    pub is_active: bool,

    pub action_queue: ActionQueue,

    /// Choices made so far this round, in choice order.
    pub round_actions: Vec<RoundAction>,

    /// RNG seed for the encounter. Set once at creation.
    pub seed: u64,

    /// Number of random draws taken so far. Combined with `seed` so every
    /// draw gets its own seed.
    pub nonce: u64,
}

impl EncounterState {
    pub fn new(party: Vec<CombatantId>, enemies: Vec<CombatantId>, seed: u64) -> Self {
        Self {
            party,
            enemies,
            current_turn: 0,
            is_active: false,
            action_queue: ActionQueue::empty(),
            round_actions: Vec::new(),
            seed,
            nonce: 0,
        }
    }

    /// Number of combatants taking turns.
    pub fn turn_count(&self) -> usize {
        self.party.len() + self.enemies.len()
    }

    /// Combatant at position `turn` of the turn order.
    pub fn actor_at(&self, turn: usize) -> Option<CombatantId> {
        self.party.iter().chain(self.enemies.iter()).nth(turn).copied()
    }

    pub fn current_actor(&self) -> Option<CombatantId> {
        self.actor_at(self.current_turn)
    }

    pub fn side_of(&self, id: CombatantId) -> Option<Side> {
        if self.party.contains(&id) {
            Some(Side::Player)
        } else if self.enemies.contains(&id) {
            Some(Side::Enemy)
        } else {
            None
        }
    }

    /// Read-only view for the presentation layer.
    pub fn snapshot(&self) -> EncounterSnapshot {
        EncounterSnapshot {
            is_active: self.is_active,
            current_actor: self.current_actor(),
            party: self.party.clone(),
            enemies: self.enemies.clone(),
            turn: self.current_turn,
            action_queue: self.action_queue,
            round_actions: self.round_actions.clone(),
        }
    }
}

/// Point-in-time view of an encounter.
///
/// Combatants appear as handles; their records are read from the roster.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EncounterSnapshot {
    pub is_active: bool,
    pub current_actor: Option<CombatantId>,
    pub party: Vec<CombatantId>,
    pub enemies: Vec<CombatantId>,
    pub turn: usize,
    pub action_queue: ActionQueue,
    pub round_actions: Vec<RoundAction>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn turn_order_is_party_then_enemies() {
        let state = EncounterState::new(
            vec![CombatantId(0), CombatantId(1)],
            vec![CombatantId(5)],
            0,
        );
        assert_eq!(state.turn_count(), 3);
        assert_eq!(state.actor_at(1), Some(CombatantId(1)));
        assert_eq!(state.actor_at(2), Some(CombatantId(5)));
        assert_eq!(state.actor_at(3), None);
        assert_eq!(state.side_of(CombatantId(5)), Some(Side::Enemy));
        assert_eq!(state.side_of(CombatantId(9)), None);
    }
}
