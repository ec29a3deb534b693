//! Client configuration read from the process environment.

use std::env;
use std::path::PathBuf;

use encounter_core::ActionKind;

/// Settings for one scripted encounter run.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// Directory holding `config.toml` and `roster.ron`.
    pub data_dir: PathBuf,
    /// Encounter seed; a random one is drawn when unset.
    pub seed: Option<u64>,
    /// Action every party member picks on its turn.
    pub party_action: ActionKind,
    /// Rounds to play before giving up on a stalemate.
    pub max_rounds: usize,
    /// Answer to the loot prompt after a victory.
    pub auto_loot: bool,
    /// Overrides `skip_defeated_targets` from the content config.
    pub skip_defeated_targets: Option<bool>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/../game/content/data")),
            seed: None,
            party_action: ActionKind::Attack,
            max_rounds: 20,
            auto_loot: true,
            skip_defeated_targets: None,
        }
    }
}

impl ClientConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `ENCOUNTER_DATA_DIR` - Content directory (default: bundled content data)
    /// - `ENCOUNTER_SEED` - Encounter seed (default: random)
    /// - `ENCOUNTER_PARTY_ACTION` - Party action name (default: attack)
    /// - `ENCOUNTER_MAX_ROUNDS` - Round cap (default: 20)
    /// - `ENCOUNTER_AUTO_LOOT` - Loot after a victory (default: true)
    /// - `ENCOUNTER_SKIP_DEFEATED` - Enemies ignore downed party members (default: from content)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(dir) = env::var("ENCOUNTER_DATA_DIR") {
            config.data_dir = PathBuf::from(dir);
        }
        config.seed = read_env::<u64>("ENCOUNTER_SEED");

        if let Ok(name) = env::var("ENCOUNTER_PARTY_ACTION") {
            match name.trim().parse::<ActionKind>() {
                Ok(kind) => config.party_action = kind,
                Err(_) => tracing::warn!(
                    "Unknown ENCOUNTER_PARTY_ACTION {:?}, keeping {}",
                    name,
                    config.party_action
                ),
            }
        }
        if let Some(rounds) = read_env::<usize>("ENCOUNTER_MAX_ROUNDS") {
            config.max_rounds = rounds.max(1);
        }
        if let Some(loot) = read_env_bool("ENCOUNTER_AUTO_LOOT") {
            config.auto_loot = loot;
        }
        config.skip_defeated_targets = read_env_bool("ENCOUNTER_SKIP_DEFEATED");

        config
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

fn read_env_bool(key: &str) -> Option<bool> {
    match env::var(key).ok()?.to_lowercase().as_str() {
        "true" | "1" | "yes" | "y" | "on" => Some(true),
        "false" | "0" | "no" | "n" | "off" => Some(false),
        _ => None,
    }
}
