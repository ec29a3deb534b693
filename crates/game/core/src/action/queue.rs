use bitflags::bitflags;

bitflags! {
    /// Special-action markers pending within the current round.
    ///
    /// A marker gates a follow-up action of the same round: `INVENTORY`
    /// must be set for an attack with a freshly selected weapon to land. The
    /// queue is cleared once a marker is consumed and after every round.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct ActionQueue: u8 {
        const INVENTORY = 1 << 0;
    }
}
