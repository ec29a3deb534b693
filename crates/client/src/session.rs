//! Scripted encounter session.
//!
//! Plays an encounter to the end with every party member repeating the same
//! action, writing each narration line as it happens.

use std::io::Write;

use anyhow::Result;
use encounter_core::{ActionKind, AdvanceOutcome, EncounterEngine, EncounterEnv, Verdict};

/// How to play the party's side.
#[derive(Clone, Copy, Debug)]
pub struct PartyScript {
    pub action: ActionKind,
    pub max_rounds: usize,
    pub auto_loot: bool,
}

/// Plays rounds until the encounter ends or `max_rounds` is reached.
///
/// Returns the terminal verdict, or `None` when the round cap stopped play.
pub fn play(
    engine: &mut EncounterEngine<'_>,
    env: &EncounterEnv<'_>,
    script: PartyScript,
    out: &mut impl Write,
) -> Result<Option<Verdict>> {
    let opening = engine.start();
    if opening.party.is_empty() {
        anyhow::bail!("Encounter has no party members");
    }
    let mut actor = opening.party[0];

    for round in 1..=script.max_rounds {
        tracing::debug!("Round {}", round);
        loop {
            let selected = engine.select_action(actor, script.action)?;
            writeln!(out, "{}", selected.narration())?;

            match advance_to_prompt(engine, env, out)? {
                Step::Prompt(next) => actor = next,
                Step::Resolved(verdict) => {
                    if verdict.is_terminal() {
                        if verdict.loot() {
                            offer_loot(engine, env, script.auto_loot, out)?;
                        }
                        return Ok(Some(verdict));
                    }
                    actor = opening.party[0];
                    break;
                }
            }
        }
    }

    tracing::info!("Stopping after {} round(s) without a result", script.max_rounds);
    engine.end();
    Ok(None)
}

enum Step {
    Prompt(encounter_core::CombatantId),
    Resolved(Verdict),
}

/// Advances through enemy turns until a party member is prompted or the
/// round resolves.
fn advance_to_prompt(
    engine: &mut EncounterEngine<'_>,
    env: &EncounterEnv<'_>,
    out: &mut impl Write,
) -> Result<Step> {
    loop {
        let outcome = engine.advance(env)?;
        writeln!(out, "{}", outcome.narration())?;
        match outcome {
            AdvanceOutcome::Prompt { actor, .. } => return Ok(Step::Prompt(actor)),
            AdvanceOutcome::EnemyChoice { .. } => continue,
            AdvanceOutcome::Round(report) => return Ok(Step::Resolved(report.verdict)),
        }
    }
}

fn offer_loot(
    engine: &mut EncounterEngine<'_>,
    env: &EncounterEnv<'_>,
    accept: bool,
    out: &mut impl Write,
) -> Result<()> {
    writeln!(out, "> {}", if accept { "y" } else { "n" })?;
    if accept {
        let loot = engine.loot(env)?;
        writeln!(out, "{}", loot.narration())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use encounter_core::{
        Combatant, EncounterConfig, EncounterState, FixedRng, Item, Roster, SequenceRng,
    };

    fn duel(prisoner_health: f64) -> (Roster, EncounterState) {
        let mut roster = Roster::new();
        let hero = roster.insert(
            Combatant::new("Wanderer", 100.0)
                .with_agility(14.0)
                .with_luck(12.0)
                .with_weapon(Item::weapon("Rusty Shank", 15.0)),
        );
        let foe = roster.insert(
            Combatant::new("Escaped Prisoner", prisoner_health)
                .with_agility(5.0)
                .with_luck(1.0)
                .with_weapon(Item::weapon("Shiv", 8.0)),
        );
        (roster, EncounterState::new(vec![hero], vec![foe], 5))
    }

    fn script(action: ActionKind) -> PartyScript {
        PartyScript {
            action,
            max_rounds: 10,
            auto_loot: true,
        }
    }

    #[test]
    fn plays_to_victory_and_loots() {
        let (mut roster, mut state) = duel(20.0);
        let config = EncounterConfig::default();
        let rng = FixedRng(0.5);
        let env = EncounterEnv::new(&rng, &config);
        let mut out = Vec::new();

        let mut engine = EncounterEngine::new(&mut state, &mut roster);
        let verdict = play(&mut engine, &env, script(ActionKind::Attack), &mut out).unwrap();
        assert_eq!(verdict, Some(Verdict::Victory { loot: true }));

        let transcript = String::from_utf8(out).unwrap();
        assert!(transcript.starts_with("Wanderer chooses to attack\n"));
        assert!(transcript.contains("Escaped Prisoner has 5.0 health left."));
        assert!(transcript.contains("Enemies defeated! Would you like to loot? (y/n)\n> y\n"));
        assert!(transcript.ends_with("Looted: Looted Escaped Prisoner's Shiv\n"));
    }

    #[test]
    fn round_cap_ends_a_stalemate() {
        let (mut roster, mut state) = duel(20.0);
        let config = EncounterConfig::default();
        // the enemy always attacks but cannot win within two rounds
        let rng = SequenceRng::new(vec![0.99]);
        let env = EncounterEnv::new(&rng, &config);
        let mut out = Vec::new();

        let mut engine = EncounterEngine::new(&mut state, &mut roster);
        let script = PartyScript {
            max_rounds: 2,
            ..script(ActionKind::Inventory)
        };
        let verdict = play(&mut engine, &env, script, &mut out).unwrap();
        assert_eq!(verdict, None);
        assert!(!engine.is_active());

        let transcript = String::from_utf8(out).unwrap();
        assert_eq!(transcript.matches("Wanderer is accessing inventory...").count(), 2);
    }

    #[test]
    fn successful_evade_ends_play() {
        let (mut roster, mut state) = duel(20.0);
        let config = EncounterConfig::default();
        let rng = FixedRng(0.1);
        let env = EncounterEnv::new(&rng, &config);
        let mut out = Vec::new();

        let mut engine = EncounterEngine::new(&mut state, &mut roster);
        let verdict = play(&mut engine, &env, script(ActionKind::Evade), &mut out).unwrap();
        assert_eq!(verdict, Some(Verdict::Escape));
        assert!(String::from_utf8(out).unwrap().contains("Wanderer successfully evades!"));
    }
}
