//! Turn progression, round resolution, and loot.
//!
//! The [`EncounterEngine`] is the only writer of [`EncounterState`] and of
//! combatant health during combat. It borrows the encounter bookkeeping and
//! the shared [`Roster`] for the duration of a call, so a half-resolved round
//! can never be observed from outside.

mod loot;
mod outcome;
mod round;
mod turns;

#[cfg(test)]
pub(crate) mod testing;

pub use outcome::{AdvanceOutcome, LootOutcome, RoundReport, SelectOutcome, Verdict};

use std::str::FromStr;

use crate::action::{ActionKind, ActionQueue, EncounterAction, RoundAction};
use crate::env::{EncounterEnv, RollContext, compute_seed};
use crate::error::EncounterError;
use crate::state::{CombatantId, EncounterSnapshot, EncounterState, Roster};

/// Encounter engine driving one combat session.
///
/// Every public operation runs to completion before returning; the caller
/// feeds it one discrete input at a time (a choice or an advance).
pub struct EncounterEngine<'a> {
    state: &'a mut EncounterState,
    roster: &'a mut Roster,
}

impl<'a> EncounterEngine<'a> {
    /// Creates an engine over the given encounter and the roster it refers to.
    pub fn new(state: &'a mut EncounterState, roster: &'a mut Roster) -> Self {
        Self { state, roster }
    }

    /// Activates the encounter and resets all round bookkeeping.
    pub fn start(&mut self) -> EncounterSnapshot {
        self.state.is_active = true;
        self.state.current_turn = 0;
        self.state.action_queue = ActionQueue::empty();
        self.state.round_actions.clear();

        tracing::info!(
            "Encounter started: {} party member(s) vs {} enemy(ies)",
            self.state.party.len(),
            self.state.enemies.len()
        );
        self.snapshot()
    }

    /// Deactivates the encounter and drops any pending round state. Idempotent.
    pub fn end(&mut self) {
        if self.state.is_active {
            tracing::info!("Encounter ended");
        }
        self.state.is_active = false;
        self.state.action_queue = ActionQueue::empty();
        self.state.round_actions.clear();
    }

    pub fn is_active(&self) -> bool {
        self.state.is_active
    }

    /// Read-only view of the encounter.
    pub fn snapshot(&self) -> EncounterSnapshot {
        self.state.snapshot()
    }

    pub fn roster(&self) -> &Roster {
        &*self.roster
    }

    /// Queues `kind` for `actor` until the round resolves.
    ///
    /// Attacks target the first enemy. Health and turn index are untouched.
    pub fn select_action(
        &mut self,
        actor: CombatantId,
        kind: ActionKind,
    ) -> Result<SelectOutcome, EncounterError> {
        let name = self.roster.require(actor)?.name.clone();
        if self.state.side_of(actor).is_none() {
            return Err(EncounterError::NotAParticipant(actor));
        }

        let target = self.state.enemies.first().copied();
        let action =
            EncounterAction::new(kind, target).ok_or(EncounterError::NoTarget { actor })?;
        let round_action = RoundAction::new(actor, action);
        self.state.round_actions.push(round_action);

        tracing::debug!("{} ({}) queued {:?}", name, actor, action);
        Ok(SelectOutcome::Chosen {
            action: round_action,
            narration: format!("{name} chooses to {kind}"),
        })
    }

    /// Like [`select_action`](Self::select_action), but parses the action name.
    ///
    /// An unknown name queues nothing and reports
    /// [`SelectOutcome::Unrecognized`].
    pub fn select_action_named(
        &mut self,
        actor: CombatantId,
        name: &str,
    ) -> Result<SelectOutcome, EncounterError> {
        match ActionKind::from_str(name.trim()) {
            Ok(kind) => self.select_action(actor, kind),
            Err(_) => {
                tracing::debug!("Ignoring unrecognized action {:?} for {}", name, actor);
                Ok(SelectOutcome::Unrecognized {
                    narration: format!("Unrecognized action: {name}"),
                })
            }
        }
    }

    /// Takes the next uniform draw for `actor`.
    fn roll(&mut self, env: &EncounterEnv<'_>, actor: CombatantId, context: RollContext) -> f64 {
        let seed = compute_seed(self.state.seed, self.state.nonce, actor.0, context as u32);
        self.state.nonce += 1;
        env.rng().uniform(seed)
    }

    /// Takes the next index draw in `[0, len)` for `actor`.
    fn pick(
        &mut self,
        env: &EncounterEnv<'_>,
        actor: CombatantId,
        context: RollContext,
        len: usize,
    ) -> usize {
        let seed = compute_seed(self.state.seed, self.state.nonce, actor.0, context as u32);
        self.state.nonce += 1;
        env.rng().pick_index(seed, len)
    }

    fn name_of(&self, id: CombatantId) -> Result<&str, EncounterError> {
        Ok(self.roster.require(id)?.name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::testing::*;
    use super::*;

    #[test]
    fn start_resets_round_bookkeeping() {
        let (mut roster, mut state) = skirmish();
        state.current_turn = 1;
        state.action_queue = ActionQueue::INVENTORY;
        state.round_actions.push(RoundAction::new(HERO, EncounterAction::Evade));

        let mut engine = EncounterEngine::new(&mut state, &mut roster);
        let snapshot = engine.start();

        assert!(snapshot.is_active);
        assert_eq!(snapshot.turn, 0);
        assert_eq!(snapshot.current_actor, Some(HERO));
        assert!(snapshot.action_queue.is_empty());
        assert!(snapshot.round_actions.is_empty());
        assert_eq!(snapshot.party, vec![HERO]);
        assert_eq!(snapshot.enemies, vec![PRISONER]);
    }

    #[test]
    fn end_is_idempotent() {
        let (mut roster, mut state) = skirmish();
        let mut engine = EncounterEngine::new(&mut state, &mut roster);
        engine.start();
        engine.select_action(HERO, ActionKind::Inventory).unwrap();

        engine.end();
        engine.end();
        assert!(!engine.is_active());
        assert!(engine.snapshot().round_actions.is_empty());
    }

    #[test]
    fn attacks_default_to_first_enemy() {
        let (mut roster, mut state) = skirmish();
        let mut engine = EncounterEngine::new(&mut state, &mut roster);
        engine.start();

        let outcome = engine.select_action(HERO, ActionKind::Attack).unwrap();
        assert_eq!(outcome.narration(), "Wanderer chooses to attack");
        assert_eq!(
            engine.snapshot().round_actions,
            vec![RoundAction::new(
                HERO,
                EncounterAction::Attack { target: PRISONER }
            )]
        );
    }

    #[test]
    fn selection_does_not_touch_health_or_turn() {
        let (mut roster, mut state) = skirmish();
        let mut engine = EncounterEngine::new(&mut state, &mut roster);
        engine.start();
        engine
            .select_action(HERO, ActionKind::AttackAfterInventory)
            .unwrap();

        assert_eq!(engine.snapshot().turn, 0);
        assert_eq!(engine.roster().require(PRISONER).unwrap().health, 50.0);
    }

    #[test]
    fn unrecognized_action_is_an_explicit_no_op() {
        let (mut roster, mut state) = skirmish();
        let mut engine = EncounterEngine::new(&mut state, &mut roster);
        engine.start();

        let outcome = engine.select_action_named(HERO, "dance").unwrap();
        assert!(!outcome.is_recognized());
        assert_eq!(outcome.narration(), "Unrecognized action: dance");
        assert!(engine.snapshot().round_actions.is_empty());

        let outcome = engine
            .select_action_named(HERO, "attackAfterInventory")
            .unwrap();
        assert_eq!(outcome.narration(), "Wanderer chooses to attackAfterInventory");
    }

    #[test]
    fn outsiders_and_empty_enemy_lists_are_rejected() {
        let (mut roster, mut state) = skirmish();
        let bystander = roster.insert(crate::state::Combatant::new("Bystander", 10.0));
        let mut engine = EncounterEngine::new(&mut state, &mut roster);
        assert_eq!(
            engine.select_action(bystander, ActionKind::Evade),
            Err(EncounterError::NotAParticipant(bystander))
        );

        let (mut roster, _) = skirmish();
        let mut lonely = EncounterState::new(vec![HERO], Vec::new(), 0);
        let mut engine = EncounterEngine::new(&mut lonely, &mut roster);
        assert_eq!(
            engine.select_action(HERO, ActionKind::Attack),
            Err(EncounterError::NoTarget { actor: HERO })
        );
        assert!(engine.select_action(HERO, ActionKind::Flee).is_ok());
    }
}
