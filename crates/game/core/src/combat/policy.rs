//! Enemy decision policy.
//!
//! Enemies do not deliberate: an outnumbered group runs more often, and
//! whoever stays attacks a random party member.

use crate::action::EncounterAction;
use crate::config::EncounterConfig;
use crate::state::{CombatantId, Roster};

/// Flee probability for an enemy facing `party_size` fighters with `enemy_count` allies.
pub fn flee_threshold(party_size: usize, enemy_count: usize, config: &EncounterConfig) -> f64 {
    if party_size > enemy_count {
        config.outnumbered_flee_chance
    } else {
        config.flee_chance
    }
}

/// Party members an enemy may pick as its target.
///
/// Defeated members stay eligible unless `skip_defeated_targets` is set.
/// Handles missing from the roster are never eligible.
pub fn target_candidates(
    party: &[CombatantId],
    roster: &Roster,
    config: &EncounterConfig,
) -> Vec<CombatantId> {
    party
        .iter()
        .copied()
        .filter(|&id| match roster.get(id) {
            Some(member) => !(config.skip_defeated_targets && member.is_defeated()),
            None => false,
        })
        .collect()
}

/// Turns the policy roll and the picked target into an action.
///
/// A roll under `threshold` flees. Without any target the enemy flees too.
pub fn choose_enemy_action(
    policy_roll: f64,
    threshold: f64,
    target: Option<CombatantId>,
) -> EncounterAction {
    match target {
        Some(target) if policy_roll >= threshold => EncounterAction::Attack { target },
        _ => EncounterAction::Flee,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Combatant;

    #[test]
    fn outnumbered_enemies_flee_more_often() {
        let config = EncounterConfig::default();
        assert_eq!(flee_threshold(3, 1, &config), 0.7);
        assert_eq!(flee_threshold(1, 1, &config), 0.3);
        assert_eq!(flee_threshold(1, 2, &config), 0.3);
    }

    #[test]
    fn roll_under_threshold_flees() {
        let target = Some(CombatantId(0));
        assert_eq!(choose_enemy_action(0.2, 0.3, target), EncounterAction::Flee);
        assert_eq!(
            choose_enemy_action(0.3, 0.3, target),
            EncounterAction::Attack {
                target: CombatantId(0)
            }
        );
        assert_eq!(choose_enemy_action(0.9, 0.3, None), EncounterAction::Flee);
    }

    #[test]
    fn defeated_members_are_targets_unless_configured_otherwise() {
        let mut roster = Roster::new();
        let fallen = roster.insert(Combatant::new("Fallen", 0.0));
        let standing = roster.insert(Combatant::new("Standing", 10.0));
        let party = [fallen, standing];

        let faithful = EncounterConfig::default();
        assert_eq!(target_candidates(&party, &roster, &faithful), vec![fallen, standing]);

        let filtered = EncounterConfig::default().with_skip_defeated_targets(true);
        assert_eq!(target_candidates(&party, &roster, &filtered), vec![standing]);
    }
}
