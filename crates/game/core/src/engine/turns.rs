use crate::action::{EncounterAction, RoundAction};
use crate::combat::{choose_enemy_action, flee_threshold, target_candidates};
use crate::env::{EncounterEnv, RollContext};
use crate::error::EncounterError;
use crate::state::CombatantId;

use super::{AdvanceOutcome, EncounterEngine};

/// Turn progression methods for EncounterEngine.
impl<'a> EncounterEngine<'a> {
    /// Moves to the next combatant in `party ++ enemies` order.
    ///
    /// Wrapping past the last combatant resolves the round. An enemy's turn
    /// is chosen automatically; a party member's turn returns a prompt.
    /// Every handle involved is checked before the turn index moves, so an
    /// error leaves the encounter untouched. An inactive encounter is
    /// rejected with [`EncounterError::NotActive`].
    pub fn advance(&mut self, env: &EncounterEnv<'_>) -> Result<AdvanceOutcome, EncounterError> {
        if !self.state.is_active {
            tracing::debug!("Ignoring advance on an inactive encounter");
            return Err(EncounterError::NotActive);
        }

        let next = self.state.current_turn + 1;
        if next >= self.state.turn_count() {
            self.ordered_actions()?;
            self.state.current_turn = 0;
            return self.resolve_round(env).map(AdvanceOutcome::Round);
        }

        let party_size = self.state.party.len();
        if next >= party_size {
            let enemy = self.state.enemies[next - party_size];
            self.roster.require(enemy)?;
            self.state.current_turn = next;
            return self.choose_for_enemy(env, enemy);
        }

        let actor = self.state.party[next];
        let narration = format!("Select action for {}", self.name_of(actor)?);
        self.state.current_turn = next;
        Ok(AdvanceOutcome::Prompt { actor, narration })
    }

    /// Runs the enemy policy for `enemy` and queues its choice.
    fn choose_for_enemy(
        &mut self,
        env: &EncounterEnv<'_>,
        enemy: CombatantId,
    ) -> Result<AdvanceOutcome, EncounterError> {
        let config = env.config();
        let enemy_name = self.name_of(enemy)?.to_string();

        let threshold = flee_threshold(self.state.party.len(), self.state.enemies.len(), config);
        let policy_roll = self.roll(env, enemy, RollContext::Policy);

        let target = if policy_roll >= threshold {
            let candidates = target_candidates(&self.state.party, &*self.roster, config);
            if candidates.is_empty() {
                None
            } else {
                let index = self.pick(env, enemy, RollContext::Target, candidates.len());
                Some(candidates[index])
            }
        } else {
            None
        };

        let action = choose_enemy_action(policy_roll, threshold, target);
        let narration = match action {
            EncounterAction::Attack { target } => {
                format!("{enemy_name} chooses to attack {}", self.name_of(target)?)
            }
            other => format!("{enemy_name} chooses to {}", other.kind()),
        };

        let round_action = RoundAction::new(enemy, action);
        self.state.round_actions.push(round_action);
        tracing::debug!(
            "Enemy {} ({}) rolled {:.3} against flee threshold {:.2}: {:?}",
            enemy_name,
            enemy,
            policy_roll,
            threshold,
            action
        );

        Ok(AdvanceOutcome::EnemyChoice {
            action: round_action,
            narration,
        })
    }
}
