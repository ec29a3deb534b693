//! Encounter client binary.
//!
//! Composition root that assembles:
//! 1. Content (balance config and roster) via `ContentFactory`
//! 2. Engine environment (PCG oracle + config)
//! 3. A scripted party that plays one encounter and prints the narration
//!
//! # Examples
//!
//! ```bash
//! ENCOUNTER_SEED=42 cargo run -p encounter-client
//! ENCOUNTER_PARTY_ACTION=evade RUST_LOG=debug cargo run -p encounter-client
//! ```

mod config;
mod session;

use anyhow::Result;
use encounter_content::ContentFactory;
use encounter_core::{EncounterEngine, EncounterEnv, PcgRng};

use crate::config::ClientConfig;
use crate::session::PartyScript;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = ClientConfig::from_env();

    // 1. Load content
    let factory = ContentFactory::new(&config.data_dir);
    let mut encounter_config = factory.load_config()?;
    if let Some(skip) = config.skip_defeated_targets {
        encounter_config.skip_defeated_targets = skip;
    }
    let mut loaded = factory.load_roster()?;
    tracing::info!("Content loaded from {}", factory.data_dir().display());

    // 2. Build the encounter
    let seed = config.seed.unwrap_or_else(rand::random);
    tracing::info!("Encounter seed: {}", seed);
    let mut state = loaded.encounter(seed);
    let rng = PcgRng;
    let env = EncounterEnv::new(&rng, &encounter_config);

    // 3. Play
    let script = PartyScript {
        action: config.party_action,
        max_rounds: config.max_rounds,
        auto_loot: config.auto_loot,
    };
    let mut engine = EncounterEngine::new(&mut state, &mut loaded.roster);
    let verdict = session::play(&mut engine, &env, script, &mut std::io::stdout().lock())?;

    match verdict {
        Some(verdict) => tracing::info!("Encounter finished: {:?}", verdict),
        None => tracing::info!("Encounter stopped after {} round(s)", config.max_rounds),
    }

    for &id in &loaded.party {
        let member = loaded.roster.require(id)?;
        tracing::info!(
            "{}: {:.1} health, {} item(s)",
            member.name,
            member.health,
            member.inventory.len()
        );
    }

    Ok(())
}
