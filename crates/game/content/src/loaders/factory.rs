//! Content factory for loading encounter content from data files.

use std::path::{Path, PathBuf};

use encounter_core::EncounterConfig;

use crate::loaders::{ConfigLoader, LoadResult, LoadedRoster, RosterLoader};

/// Content factory that loads all encounter content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// └── roster.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load encounter configuration from `config.toml`.
    ///
    /// A missing file falls back to the default configuration.
    pub fn load_config(&self) -> LoadResult<EncounterConfig> {
        let path = self.data_dir.join("config.toml");
        if !path.exists() {
            tracing::debug!("{} not found, using default config", path.display());
            return Ok(EncounterConfig::default());
        }
        ConfigLoader::load(&path)
    }

    /// Load the party and enemies from `roster.ron`.
    pub fn load_roster(&self) -> LoadResult<LoadedRoster> {
        let path = self.data_dir.join("roster.ron");
        RosterLoader::load(&path)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
