use crate::config::EncounterConfig;
use crate::env::EncounterEnv;
use crate::error::EncounterError;
use crate::state::{Combatant, Item, ItemCategory};

use super::{EncounterEngine, LootOutcome};

impl<'a> EncounterEngine<'a> {
    /// Converts the gear of every defeated enemy into a trophy item for the
    /// first party member.
    ///
    /// Not idempotent: each call appends a fresh set of trophies, so callers
    /// loot once per victory.
    pub fn loot(&mut self, env: &EncounterEnv<'_>) -> Result<LootOutcome, EncounterError> {
        let Some(&recipient) = self.state.party.first() else {
            return Ok(LootOutcome::Nothing);
        };

        let mut trophies = Vec::new();
        for &enemy in &self.state.enemies {
            let combatant = self.roster.require(enemy)?;
            if combatant.is_defeated() {
                trophies.push(trophy_from(combatant, env.config()));
            }
        }
        if trophies.is_empty() {
            return Ok(LootOutcome::Nothing);
        }

        let items: Vec<String> = trophies.iter().map(|item| item.name.clone()).collect();
        for trophy in trophies {
            self.roster.pick_up(recipient, trophy)?;
        }

        tracing::info!("{} looted {} item(s)", recipient, items.len());
        Ok(LootOutcome::Looted { recipient, items })
    }
}

fn trophy_from(enemy: &Combatant, config: &EncounterConfig) -> Item {
    let gear = enemy.weapon().or_else(|| enemy.armor());
    let (name, category, damage, defense, glyph) = match gear {
        Some(item) => (
            item.name.as_str(),
            item.category,
            item.damage,
            item.defense,
            item.glyph.clone(),
        ),
        None => ("nothing", ItemCategory::Other, 0.0, 0.0, None),
    };

    Item {
        name: format!("Looted {}'s {}", enemy.name, name),
        category,
        damage,
        defense,
        image: None,
        glyph: Some(glyph.unwrap_or_else(|| config.loot_glyph.clone())),
    }
}

#[cfg(test)]
mod tests {
    use crate::config::EncounterConfig;
    use crate::engine::testing::*;
    use crate::engine::{EncounterEngine, LootOutcome};
    use crate::env::{EncounterEnv, FixedRng};
    use crate::state::{Combatant, EncounterState, Item, ItemCategory, Roster};

    #[test]
    fn defeated_enemy_weapon_goes_to_first_party_member() {
        let mut roster = Roster::new();
        let hero = roster.insert(wanderer());
        let sidekick = roster.insert(Combatant::new("Sidekick", 60.0));
        let foe = roster.insert(prisoner());
        roster.require_mut(foe).unwrap().health = -3.0;
        let mut state = EncounterState::new(vec![hero, sidekick], vec![foe], 0);
        let config = EncounterConfig::default();
        let rng = FixedRng(0.5);
        let env = EncounterEnv::new(&rng, &config);

        let before = roster.require(hero).unwrap().inventory.len();
        let mut engine = EncounterEngine::new(&mut state, &mut roster);
        let outcome = engine.loot(&env).unwrap();

        assert_eq!(
            outcome,
            LootOutcome::Looted {
                recipient: hero,
                items: vec!["Looted Escaped Prisoner's Shiv".to_string()],
            }
        );
        assert_eq!(outcome.narration(), "Looted: Looted Escaped Prisoner's Shiv");

        let inventory = &engine.roster().require(hero).unwrap().inventory;
        assert_eq!(inventory.len(), before + 1);
        let trophy = inventory.iter().last().unwrap();
        assert_eq!(trophy.category, ItemCategory::Weapon);
        assert_eq!(trophy.damage, 8.0);
        assert_eq!(trophy.image, None);
        assert_eq!(trophy.glyph.as_deref(), Some(config.loot_glyph.as_str()));
        assert!(engine.roster().require(sidekick).unwrap().inventory.is_empty());
    }

    #[test]
    fn nothing_to_loot_without_defeated_enemies() {
        let (mut roster, mut state) = skirmish();
        let config = EncounterConfig::default();
        let rng = FixedRng(0.5);
        let env = EncounterEnv::new(&rng, &config);

        let before = roster.require(HERO).unwrap().inventory.len();
        let mut engine = EncounterEngine::new(&mut state, &mut roster);
        let outcome = engine.loot(&env).unwrap();
        assert_eq!(outcome, LootOutcome::Nothing);
        assert_eq!(outcome.narration(), "No loot available!");
        assert_eq!(engine.roster().require(HERO).unwrap().inventory.len(), before);
    }

    #[test]
    fn armor_and_empty_handed_enemies_still_drop_something() {
        let mut roster = Roster::new();
        let hero = roster.insert(wanderer());
        let knight = roster.insert(
            Combatant::new("Knight", 0.0)
                .with_armor(Item::armor("Tin Plate", 3.0).with_glyph("🛡️")),
        );
        let rat = roster.insert(Combatant::new("Rat", -1.0));
        let mut state = EncounterState::new(vec![hero], vec![knight, rat], 0);
        let config = EncounterConfig::default();
        let rng = FixedRng(0.5);
        let env = EncounterEnv::new(&rng, &config);

        let mut engine = EncounterEngine::new(&mut state, &mut roster);
        let outcome = engine.loot(&env).unwrap();
        assert_eq!(
            outcome.narration(),
            "Looted: Looted Knight's Tin Plate, Looted Rat's nothing"
        );

        let inventory = &engine.roster().require(hero).unwrap().inventory;
        let items: Vec<&Item> = inventory.iter().collect();
        let (plate, nothing) = (items[items.len() - 2], items[items.len() - 1]);
        assert_eq!(plate.glyph.as_deref(), Some("🛡️"));
        assert_eq!(plate.defense, 3.0);
        assert_eq!(nothing.category, ItemCategory::Other);
        assert_eq!(nothing.glyph.as_deref(), Some(config.loot_glyph.as_str()));
    }

    #[test]
    fn looting_twice_appends_twice() {
        let (mut roster, mut state) = skirmish();
        roster.require_mut(PRISONER).unwrap().health = 0.0;
        let config = EncounterConfig::default();
        let rng = FixedRng(0.5);
        let env = EncounterEnv::new(&rng, &config);

        let before = roster.require(HERO).unwrap().inventory.len();
        let mut engine = EncounterEngine::new(&mut state, &mut roster);
        let first = engine.loot(&env).unwrap();
        let second = engine.loot(&env).unwrap();
        assert_eq!(first, second);

        let inventory = &engine.roster().require(HERO).unwrap().inventory;
        assert_eq!(inventory.len(), before + 2);
        let shivs = inventory
            .iter()
            .filter(|item| item.name == "Looted Escaped Prisoner's Shiv")
            .count();
        assert_eq!(shivs, 2);
    }

    #[test]
    fn no_party_means_no_loot() {
        let (mut roster, _) = skirmish();
        roster.require_mut(PRISONER).unwrap().health = 0.0;
        let mut state = EncounterState::new(Vec::new(), vec![PRISONER], 0);
        let config = EncounterConfig::default();
        let rng = FixedRng(0.5);
        let env = EncounterEnv::new(&rng, &config);

        let mut engine = EncounterEngine::new(&mut state, &mut roster);
        assert_eq!(engine.loot(&env).unwrap(), LootOutcome::Nothing);
    }
}
