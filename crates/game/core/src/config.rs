/// Encounter balance parameters.
///
/// `Default` reproduces the constants of the shipped game; content files may
/// override any subset of them (see `encounter-content::ConfigLoader`).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EncounterConfig {
    /// Chance that an enemy flees when the party does not outnumber its group.
    pub flee_chance: f64,

    /// Chance that an enemy flees when the party outnumbers its group.
    pub outnumbered_flee_chance: f64,

    /// Divisor applied to `luck + agility` for evade/flee chance.
    pub escape_divisor: f64,

    /// Unarmed attacks deal `strength / strength_divisor`.
    pub strength_divisor: f64,

    /// Lower bound of the damage multiplier.
    pub variance_min: f64,

    /// Width of the damage multiplier range: `[variance_min, variance_min + variance_span)`.
    pub variance_span: f64,

    /// Damage of an equipped item that carries no damage value of its own.
    pub improvised_weapon_damage: f64,

    /// When set, enemies never pick an already defeated party member as target.
    pub skip_defeated_targets: bool,

    /// Display glyph for looted items whose source carried none.
    pub loot_glyph: String,
}

impl EncounterConfig {
    // ===== runtime-tunable defaults =====
    pub const DEFAULT_FLEE_CHANCE: f64 = 0.3;
    pub const DEFAULT_OUTNUMBERED_FLEE_CHANCE: f64 = 0.7;
    pub const DEFAULT_ESCAPE_DIVISOR: f64 = 40.0;
    pub const DEFAULT_STRENGTH_DIVISOR: f64 = 2.0;
    pub const DEFAULT_VARIANCE_MIN: f64 = 0.75;
    pub const DEFAULT_VARIANCE_SPAN: f64 = 0.5;
    pub const DEFAULT_IMPROVISED_WEAPON_DAMAGE: f64 = 0.1;
    pub const DEFAULT_LOOT_GLYPH: &'static str = "🕳️";

    pub fn new() -> Self {
        Self {
            flee_chance: Self::DEFAULT_FLEE_CHANCE,
            outnumbered_flee_chance: Self::DEFAULT_OUTNUMBERED_FLEE_CHANCE,
            escape_divisor: Self::DEFAULT_ESCAPE_DIVISOR,
            strength_divisor: Self::DEFAULT_STRENGTH_DIVISOR,
            variance_min: Self::DEFAULT_VARIANCE_MIN,
            variance_span: Self::DEFAULT_VARIANCE_SPAN,
            improvised_weapon_damage: Self::DEFAULT_IMPROVISED_WEAPON_DAMAGE,
            skip_defeated_targets: false,
            loot_glyph: Self::DEFAULT_LOOT_GLYPH.to_string(),
        }
    }

    pub fn with_skip_defeated_targets(mut self, skip: bool) -> Self {
        self.skip_defeated_targets = skip;
        self
    }
}

impl Default for EncounterConfig {
    fn default() -> Self {
        Self::new()
    }
}
