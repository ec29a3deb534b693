//! Encounter configuration loader.

use std::path::Path;

use encounter_core::EncounterConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for encounter configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Keys missing from the file keep their [`EncounterConfig::default`] value.
    pub fn load(path: &Path) -> LoadResult<EncounterConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub(crate) fn parse(content: &str) -> LoadResult<EncounterConfig> {
        let config: EncounterConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        if config.escape_divisor <= 0.0 || config.strength_divisor <= 0.0 {
            anyhow::bail!(
                "Config divisors must be positive (escape_divisor = {}, strength_divisor = {})",
                config.escape_divisor,
                config.strength_divisor
            );
        }

        Ok(config)
    }
}
