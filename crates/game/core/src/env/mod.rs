//! Read-only collaborators the engine consults while resolving an encounter.
//!
//! The [`EncounterEnv`] aggregate bundles the RNG oracle and the balance
//! config so the engine can reach both without hard coupling to concrete
//! implementations.
mod rng;

pub use rng::{FixedRng, PcgRng, RngOracle, RollContext, SequenceRng, compute_seed};

use crate::config::EncounterConfig;

/// Aggregates the oracles required by the encounter engine.
#[derive(Clone, Copy)]
pub struct EncounterEnv<'a> {
    rng: &'a dyn RngOracle,
    config: &'a EncounterConfig,
}

impl<'a> EncounterEnv<'a> {
    pub fn new(rng: &'a dyn RngOracle, config: &'a EncounterConfig) -> Self {
        Self { rng, config }
    }

    pub fn rng(&self) -> &'a dyn RngOracle {
        self.rng
    }

    pub fn config(&self) -> &'a EncounterConfig {
        self.config
    }
}

impl core::fmt::Debug for EncounterEnv<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("EncounterEnv")
            .field("config", self.config)
            .finish_non_exhaustive()
    }
}
