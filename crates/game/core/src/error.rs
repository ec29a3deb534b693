//! Common error infrastructure for encounter-core.
//!
//! Only contract violations by the caller are errors here: stale handles,
//! actors that are not part of the encounter, bad inventory slots. Normal game
//! flow outcomes (a failed weapon attack, nothing to loot, an unrecognized
//! action name) are reported as narration instead.

use crate::state::{CombatantId, InventorySlot};

/// Severity level of an error, used for categorization and recovery strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Recoverable error - can retry with same or alternative input.
    ///
    /// Examples: no enemy left to target
    Recoverable,

    /// Validation error - invalid input, should not retry without changes.
    ///
    /// Examples: actor is not part of the encounter, slot out of range
    Validation,

    /// Internal error - the caller's roster and the encounter disagree.
    ///
    /// Examples: a handle that no longer resolves in the roster
    Internal,
}

impl ErrorSeverity {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
        }
    }

    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal)
    }
}

/// Common trait for all encounter-core errors.
///
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

/// Errors surfaced by encounter and roster operations.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EncounterError {
    #[error("combatant {0} does not exist in the roster")]
    UnknownCombatant(CombatantId),

    #[error("combatant {0} is not taking part in this encounter")]
    NotAParticipant(CombatantId),

    #[error("combatant {actor} has no enemy to target")]
    NoTarget { actor: CombatantId },

    #[error("encounter is not active")]
    NotActive,

    #[error("combatant {actor} has no item in inventory slot {slot}")]
    InvalidSlot {
        actor: CombatantId,
        slot: InventorySlot,
    },
}

impl GameError for EncounterError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::UnknownCombatant(_) => ErrorSeverity::Internal,
            Self::NotAParticipant(_) | Self::InvalidSlot { .. } => ErrorSeverity::Validation,
            Self::NoTarget { .. } | Self::NotActive => ErrorSeverity::Recoverable,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownCombatant(_) => "UNKNOWN_COMBATANT",
            Self::NotAParticipant(_) => "NOT_A_PARTICIPANT",
            Self::NoTarget { .. } => "NO_TARGET",
            Self::NotActive => "NOT_ACTIVE",
            Self::InvalidSlot { .. } => "INVALID_SLOT",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_errors_by_recoverability() {
        let stale = EncounterError::UnknownCombatant(CombatantId(9));
        assert!(stale.severity().is_internal());
        assert_eq!(stale.error_code(), "UNKNOWN_COMBATANT");

        let no_target = EncounterError::NoTarget {
            actor: CombatantId(0),
        };
        assert!(no_target.severity().is_recoverable());
        assert_eq!(
            no_target.to_string(),
            "combatant #0 has no enemy to target"
        );

        let inactive = EncounterError::NotActive;
        assert!(inactive.severity().is_recoverable());
        assert_eq!(inactive.error_code(), "NOT_ACTIVE");
    }
}
