use crate::action::{ActionQueue, EncounterAction, RoundAction};
use crate::combat::{apply_damage, calculate_strike, check_escape};
use crate::env::{EncounterEnv, RollContext};
use crate::error::EncounterError;
use crate::state::CombatantId;

use super::{EncounterEngine, RoundReport, Verdict};

const VICTORY_LINE: &str = "Enemies defeated! Would you like to loot? (y/n)";
const DEFEAT_LINE: &str = "You have been defeated! Start over or load a saved game.";

/// Narration of a single resolved action and whether it ended the encounter.
struct Resolved {
    narration: String,
    escaped: bool,
}

impl Resolved {
    fn line(narration: String) -> Self {
        Self {
            narration,
            escaped: false,
        }
    }
}

/// Round resolution methods for EncounterEngine.
impl<'a> EncounterEngine<'a> {
    /// Resolves every queued action of the round and decides the verdict.
    ///
    /// Actions resolve by actor agility, highest first; equal agility keeps
    /// choice order. A successful evade or flee ends the encounter at once and
    /// discards the remaining actions.
    pub(super) fn resolve_round(
        &mut self,
        env: &EncounterEnv<'_>,
    ) -> Result<RoundReport, EncounterError> {
        let ordered = self.ordered_actions()?;
        self.resolve_ordered(env, ordered)
    }

    /// Checks every handle the round touches and returns the queued actions
    /// in resolution order. Nothing is mutated, so a stale handle leaves the
    /// round exactly as it was.
    pub(super) fn ordered_actions(&self) -> Result<Vec<(f64, RoundAction)>, EncounterError> {
        for &id in self.state.party.iter().chain(&self.state.enemies) {
            self.roster.require(id)?;
        }

        let mut ordered = Vec::with_capacity(self.state.round_actions.len());
        for round_action in &self.state.round_actions {
            let actor = self.roster.require(round_action.actor)?;
            if let Some(target) = round_action.action.target() {
                self.roster.require(target)?;
            }
            ordered.push((actor.agility, *round_action));
        }
        // stable: ties stay in choice order
        ordered.sort_by(|a, b| b.0.total_cmp(&a.0));
        Ok(ordered)
    }

    fn resolve_ordered(
        &mut self,
        env: &EncounterEnv<'_>,
        ordered: Vec<(f64, RoundAction)>,
    ) -> Result<RoundReport, EncounterError> {
        self.state.round_actions.clear();

        tracing::debug!("Resolving round with {} action(s)", ordered.len());

        let mut lines = Vec::with_capacity(ordered.len() + 1);
        let mut escaped = false;
        for (_, round_action) in ordered {
            let resolved = self.resolve_action(env, round_action)?;
            lines.push(resolved.narration);
            if resolved.escaped {
                escaped = true;
                break;
            }
        }

        let verdict = if self.all_defeated(&self.state.enemies)? {
            lines.push(VICTORY_LINE.to_string());
            self.end();
            Verdict::Victory { loot: true }
        } else if self.all_defeated(&self.state.party)? {
            lines.push(DEFEAT_LINE.to_string());
            self.end();
            Verdict::Defeat
        } else if escaped {
            Verdict::Escape
        } else {
            self.state.round_actions.clear();
            self.state.action_queue = ActionQueue::empty();
            Verdict::Ongoing(self.snapshot())
        };

        tracing::info!("Round resolved: {:?}", verdict.victor());
        Ok(RoundReport {
            narration: lines.join("\n"),
            verdict,
        })
    }

    fn resolve_action(
        &mut self,
        env: &EncounterEnv<'_>,
        round_action: RoundAction,
    ) -> Result<Resolved, EncounterError> {
        let actor = round_action.actor;
        let actor_name = self.name_of(actor)?.to_string();

        let resolved = match round_action.action {
            EncounterAction::Attack { target } => {
                let base = self.roster.require(actor)?.base_damage(env.config());
                let narration = self.strike(env, actor, target, base, "")?;
                Resolved::line(narration)
            }
            EncounterAction::Inventory => {
                self.state.action_queue.insert(ActionQueue::INVENTORY);
                Resolved::line(format!("{actor_name} is accessing inventory..."))
            }
            EncounterAction::Evade => self.attempt_escape(
                env,
                actor,
                format!("{actor_name} successfully evades!"),
                format!("{actor_name} fails to evade!"),
            )?,
            EncounterAction::Flee => self.attempt_escape(
                env,
                actor,
                format!("{actor_name} flees the encounter!"),
                format!("{actor_name} fails to flee!"),
            )?,
            EncounterAction::AttackAfterInventory { target } => {
                let weapon_damage = self
                    .roster
                    .require(actor)?
                    .weapon()
                    .map(|weapon| weapon.weapon_damage(env.config()));

                match weapon_damage {
                    Some(base) if self.state.action_queue.contains(ActionQueue::INVENTORY) => {
                        let narration = self.strike(env, actor, target, base, " with new weapon")?;
                        self.state.action_queue = ActionQueue::empty();
                        Resolved::line(narration)
                    }
                    _ => Resolved::line(format!(
                        "{actor_name} cannot attack without selecting a weapon!"
                    )),
                }
            }
        };

        tracing::debug!("{}", resolved.narration);
        Ok(resolved)
    }

    /// Rolls variance for `base` damage and takes it off `target`'s health.
    fn strike(
        &mut self,
        env: &EncounterEnv<'_>,
        actor: CombatantId,
        target: CombatantId,
        base: f64,
        flourish: &str,
    ) -> Result<String, EncounterError> {
        let roll = self.roll(env, actor, RollContext::Damage);
        let strike = calculate_strike(base, roll, env.config());

        let actor_name = self.name_of(actor)?.to_string();
        let victim = self.roster.require_mut(target)?;
        victim.health = apply_damage(victim.health, strike.dealt);

        Ok(format!(
            "{actor_name} attacks {target_name} for {base:.1} damage{flourish}! {target_name} has {health:.1} health left.",
            target_name = victim.name,
            base = strike.base,
            health = victim.health,
        ))
    }

    fn attempt_escape(
        &mut self,
        env: &EncounterEnv<'_>,
        actor: CombatantId,
        success: String,
        failure: String,
    ) -> Result<Resolved, EncounterError> {
        let (luck, agility) = {
            let combatant = self.roster.require(actor)?;
            (combatant.luck, combatant.agility)
        };
        let roll = self.roll(env, actor, RollContext::Escape);

        if check_escape(luck, agility, roll, env.config()) {
            self.end();
            Ok(Resolved {
                narration: success,
                escaped: true,
            })
        } else {
            Ok(Resolved::line(failure))
        }
    }

    fn all_defeated(&self, group: &[CombatantId]) -> Result<bool, EncounterError> {
        for &id in group {
            if !self.roster.require(id)?.is_defeated() {
                return Ok(false);
            }
        }
        Ok(true)
    }
}
