//! Action domain - what a combatant chose to do this round.
//!
//! - `ActionKind`: payload-free tag, parsed from command text
//! - `EncounterAction`: closed set of actions with their target payload
//! - `RoundAction`: an actor paired with its chosen action, queued until the
//!   round resolves
//! - `ActionQueue`: markers gating follow-up actions within a round

mod kind;
mod queue;

pub use kind::ActionKind;
pub use queue::ActionQueue;

use crate::state::CombatantId;

/// A chosen action with whatever target it needs.
///
/// Targets are carried only by the variants that strike someone, so a queued
/// attack can never lack a target.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EncounterAction {
    Attack { target: CombatantId },
    Inventory,
    Evade,
    Flee,
    AttackAfterInventory { target: CombatantId },
}

impl EncounterAction {
    /// Builds the action for `kind`, using `target` for the kinds that need one.
    ///
    /// Returns `None` if `kind` requires a target and none was given.
    pub fn new(kind: ActionKind, target: Option<CombatantId>) -> Option<Self> {
        match kind {
            ActionKind::Attack => target.map(|target| Self::Attack { target }),
            ActionKind::AttackAfterInventory => {
                target.map(|target| Self::AttackAfterInventory { target })
            }
            ActionKind::Inventory => Some(Self::Inventory),
            ActionKind::Evade => Some(Self::Evade),
            ActionKind::Flee => Some(Self::Flee),
        }
    }

    pub const fn kind(&self) -> ActionKind {
        match self {
            Self::Attack { .. } => ActionKind::Attack,
            Self::Inventory => ActionKind::Inventory,
            Self::Evade => ActionKind::Evade,
            Self::Flee => ActionKind::Flee,
            Self::AttackAfterInventory { .. } => ActionKind::AttackAfterInventory,
        }
    }

    pub const fn target(&self) -> Option<CombatantId> {
        match self {
            Self::Attack { target } | Self::AttackAfterInventory { target } => Some(*target),
            Self::Inventory | Self::Evade | Self::Flee => None,
        }
    }
}

/// A chosen-but-unresolved action of the current round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoundAction {
    pub actor: CombatantId,
    pub action: EncounterAction,
}

impl RoundAction {
    pub fn new(actor: CombatantId, action: EncounterAction) -> Self {
        Self { actor, action }
    }
}
