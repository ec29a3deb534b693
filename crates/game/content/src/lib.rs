//! Data-driven encounter content and loaders.
//!
//! This crate reads the static content an encounter is set up from:
//! - Encounter balance configuration (data-driven via TOML)
//! - Party and enemy rosters with their gear (data-driven via RON)
//!
//! All loaders use encounter-core types directly with serde for RON/TOML
//! deserialization.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, ContentFactory, LoadResult, LoadedRoster, RosterLoader};
