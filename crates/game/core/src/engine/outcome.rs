//! Results returned to the presentation layer.
//!
//! Every result carries the narration to display; the enums tell the caller
//! what happened without parsing it.

use crate::action::RoundAction;
use crate::state::{CombatantId, EncounterSnapshot, Side};

/// Outcome of choosing an action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SelectOutcome {
    /// The action was queued for round resolution.
    Chosen {
        action: RoundAction,
        narration: String,
    },
    /// The command text named no known action; nothing was queued.
    Unrecognized { narration: String },
}

impl SelectOutcome {
    pub fn narration(&self) -> &str {
        match self {
            Self::Chosen { narration, .. } | Self::Unrecognized { narration } => narration,
        }
    }

    pub fn is_recognized(&self) -> bool {
        matches!(self, Self::Chosen { .. })
    }
}

/// Outcome of moving to the next turn.
#[derive(Clone, Debug, PartialEq)]
pub enum AdvanceOutcome {
    /// A party member has to choose next.
    Prompt {
        actor: CombatantId,
        narration: String,
    },
    /// An enemy made its choice automatically.
    EnemyChoice {
        action: RoundAction,
        narration: String,
    },
    /// Every combatant had chosen; the round was resolved.
    Round(RoundReport),
}

impl AdvanceOutcome {
    pub fn narration(&self) -> &str {
        match self {
            Self::Prompt { narration, .. } | Self::EnemyChoice { narration, .. } => narration,
            Self::Round(report) => &report.narration,
        }
    }

    pub fn round(&self) -> Option<&RoundReport> {
        match self {
            Self::Round(report) => Some(report),
            _ => None,
        }
    }
}

/// Narration and verdict of one resolved round.
#[derive(Clone, Debug, PartialEq)]
pub struct RoundReport {
    /// One line per resolved action in resolution order, newline-joined,
    /// followed by the verdict line if the encounter ended.
    pub narration: String,
    pub verdict: Verdict,
}

/// How a round left the encounter.
#[derive(Clone, Debug, PartialEq)]
pub enum Verdict {
    /// Every enemy is down.
    Victory { loot: bool },
    /// Every party member is down.
    Defeat,
    /// Someone evaded or fled and the encounter ended.
    Escape,
    /// Nobody won; the next round starts with the first party member.
    Ongoing(EncounterSnapshot),
}

impl Verdict {
    /// Side that won, if any.
    pub fn victor(&self) -> Option<Side> {
        match self {
            Self::Victory { .. } => Some(Side::Player),
            Self::Defeat => Some(Side::Enemy),
            Self::Escape | Self::Ongoing(_) => None,
        }
    }

    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Ongoing(_))
    }

    pub fn loot(&self) -> bool {
        matches!(self, Self::Victory { loot: true })
    }

    pub fn defeat(&self) -> bool {
        matches!(self, Self::Defeat)
    }

    pub fn escape(&self) -> bool {
        matches!(self, Self::Escape)
    }
}

/// Outcome of converting defeated enemies' gear into inventory items.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LootOutcome {
    /// Items were appended to `recipient`'s inventory, in defeated-enemy order.
    Looted {
        recipient: CombatantId,
        items: Vec<String>,
    },
    /// No enemy was defeated (or nobody is left to carry anything).
    Nothing,
}

impl LootOutcome {
    pub fn narration(&self) -> String {
        match self {
            Self::Looted { items, .. } => format!("Looted: {}", items.join(", ")),
            Self::Nothing => "No loot available!".to_string(),
        }
    }
}
