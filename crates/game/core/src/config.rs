/// Game configuration constants and balance parameters.
///
/// Everything tunable about the rules lives here so the engine modules stay
/// free of magic numbers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GameConfig;

impl GameConfig {
    // ===== compile-time constants used as type parameters =====
    /// Maximum members per party (both player side and enemy side).
    pub const MAX_PARTY_MEMBERS: usize = 4;
    /// Number of recent battle log lines exposed to callers.
    pub const BATTLE_LOG_RECENT: usize = 10;
    /// Number of economy conditions retained in the history ring.
    pub const CONDITION_HISTORY: usize = 10;

    // ===== progression =====
    /// Experience needed for the next level is `level * EXP_PER_LEVEL`.
    pub const EXP_PER_LEVEL: u32 = 100;
    /// Experience granted per enemy level on victory.
    pub const EXP_PER_ENEMY_LEVEL: u32 = 20;
    /// Flat attack gain per level.
    pub const LEVEL_ATTACK_GAIN: u32 = 2;
    /// Flat defense gain per level.
    pub const LEVEL_DEFENSE_GAIN: u32 = 2;

    // ===== combat =====
    /// Guarding multiplies effective defense by 3/2 for one incoming hit.
    pub const GUARD_DEFENSE_NUM: u32 = 3;
    pub const GUARD_DEFENSE_DEN: u32 = 2;
    /// Every landed hit deals at least this much damage.
    pub const MINIMUM_DAMAGE: u32 = 1;

    // ===== monster scaling =====
    /// Monster stats scale by `(SCALE_DEN + SCALE_STEP * level_diff) / SCALE_DEN`
    /// when instantiated away from their template's base level (0.15 per level).
    pub const LEVEL_SCALE_STEP: i64 = 3;
    pub const LEVEL_SCALE_DEN: i64 = 20;
    /// Floor for the scale numerator so deep down-leveling never zeroes stats.
    pub const LEVEL_SCALE_MIN_NUM: i64 = 1;

    // ===== encounters =====
    pub const MIN_ENEMIES: u32 = 1;
    pub const MAX_ENEMIES: u32 = 3;

    // ===== economy =====
    /// Chance (per 10 000) that the economy shifts when a new encounter starts.
    pub const ECONOMY_SHIFT_CHANCE: u32 = 3_000;
    /// Reference price of one ticket, in gold, at the Stable condition.
    pub const TICKET_BASE_VALUE: u32 = 50;

    // ===== player defaults =====
    pub const STARTING_GOLD: u32 = 500;
    pub const DEFEAT_GOLD_PENALTY: u32 = 50;
    pub const HERO_MAX_HP: u32 = 100;
    pub const HERO_MAX_MP: u32 = 20;
    pub const HERO_ATTACK: u32 = 15;
    pub const HERO_DEFENSE: u32 = 10;
}
