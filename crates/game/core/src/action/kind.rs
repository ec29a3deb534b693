//! Action kind enumeration - every choice a combatant can make on its turn.

/// Payload-free tag of an [`EncounterAction`](super::EncounterAction).
///
/// Parsed from the presentation layer's command text; `Display` yields the
/// name used in narration.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[strum(serialize_all = "camelCase", ascii_case_insensitive)]
pub enum ActionKind {
    /// Strike the target with the equipped weapon, or bare-handed.
    Attack,

    /// Rummage through the inventory; arms [`AttackAfterInventory`](Self::AttackAfterInventory).
    Inventory,

    /// Try to slip away from the fight.
    Evade,

    /// Try to run from the fight.
    Flee,

    /// Strike with a freshly selected weapon.
    #[strum(to_string = "attackAfterInventory", serialize = "attack_after_inventory")]
    AttackAfterInventory,
}

impl ActionKind {
    /// Returns true if this kind needs a target.
    #[inline]
    pub const fn requires_target(self) -> bool {
        matches!(self, Self::Attack | Self::AttackAfterInventory)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn names_round_trip_through_display() {
        for kind in ActionKind::iter() {
            assert_eq!(ActionKind::from_str(&kind.to_string()), Ok(kind));
        }
        assert_eq!(
            ActionKind::AttackAfterInventory.to_string(),
            "attackAfterInventory"
        );
    }

    #[test]
    fn accepts_snake_case_and_mixed_case_input() {
        assert_eq!(
            ActionKind::from_str("attack_after_inventory"),
            Ok(ActionKind::AttackAfterInventory)
        );
        assert_eq!(ActionKind::from_str("FLEE"), Ok(ActionKind::Flee));
        assert!(ActionKind::from_str("dance").is_err());
    }

    #[test]
    fn only_attacks_need_a_target() {
        let targeted: Vec<ActionKind> = ActionKind::iter()
            .filter(|kind| kind.requires_target())
            .collect();
        assert_eq!(
            targeted,
            vec![ActionKind::Attack, ActionKind::AttackAfterInventory]
        );
    }
}
