// Forge costs
pub const TITLE_FORGE_COST: f64 = 100.0;
pub const WEAPON_FORGE_GLYPH_COST: f64 = 200.0;
pub const WEAPON_FORGE_MATERIAL_COST: f64 = 10.0;

// Title composition
pub const TITLE_BASE_VALUE: f64 = 100.0;
pub const PURITY_VALUE_FACTOR: f64 = 5.0;
pub const SYNERGY_VALUE_FACTOR: f64 = 3.0;
pub const MUTATION_BASE_CHANCE: f64 = 0.05;
pub const MUTATION_LUCK_FACTOR: f64 = 0.10;
pub const WEAPON_MUTATION_CHANCE: f64 = 0.10;

// Weapon stats. Rarity is drawn uniformly from the bottom tiers only;
// top-tier weapons are not obtainable from the forge.
pub const WEAPON_RARITY_CEILING: usize = 8;
pub const WEAPON_DAMAGE_PER_TIER: f64 = 10.0;
pub const WEAPON_SPEED_MIN: f64 = 0.5;
pub const WEAPON_SPEED_SPREAD: f64 = 1.5;

// Market random walk
pub const MARKET_TICK_SECONDS: u64 = 30;
pub const MARKET_DELTA_SPREAD: f64 = 0.2;
pub const MARKET_MULTIPLIER_MIN: f64 = 0.5;
pub const MARKET_MULTIPLIER_MAX: f64 = 2.5;

// Sacrifice ritual
pub const SACRIFICE_COUNT: usize = 3;
pub const SACRIFICE_MATERIAL_YIELD: f64 = 30.0;

// Fusion ritual
pub const FUSION_MIN_TITLES: usize = 2;
pub const FUSION_MAX_TITLES: usize = 5;
pub const FUSION_TITLE_VALUE: f64 = 10_000_000.0;
pub const FUSION_DEFAULT_WORLD: u32 = 3;

// Charm market: (cost in glyphs, bonus per purchase)
pub const LUCK_CHARM: (f64, f64) = (500.0, 0.10);
pub const PURITY_CHARM: (f64, f64) = (750.0, 0.05);
pub const SYNERGY_CHARM: (f64, f64) = (1000.0, 0.10);

// World gating
pub const NUM_WORLDS: u32 = 3;
pub const WORLD_2_UNLOCK_GLYPHS: f64 = 50_000.0;
pub const WORLD_3_UNLOCK_SHARDS: f64 = 50_000.0;

// Starting player
pub const STARTING_GLYPHS: f64 = 2500.0;
pub const STARTING_BASE_HEALTH: f64 = 100.0;

// Wave defense
pub const DEFENSE_MOVEMENT_TICK_MS: u64 = 50;
pub const DEFENSE_SPAWN_BASE_MS: u64 = 2000;
pub const DEFENSE_SPAWN_FLOOR_MS: u64 = 500;
pub const DEFENSE_SPAWN_SHRINK_PER_KILL_MS: u64 = 20;
pub const ENEMY_BASE_HP: f64 = 20.0;
pub const ENEMY_HP_PER_KILL: f64 = 2.0;
pub const ENEMY_SPEED_MIN: f64 = 0.2;
pub const ENEMY_SPEED_SPREAD: f64 = 0.3;
pub const ENEMY_SPAWN_POSITION: f64 = 100.0;
pub const BREACH_THRESHOLD: f64 = 5.0;
pub const BREACH_DAMAGE: f64 = 10.0;
pub const KILL_BOUNTY_GLYPHS: f64 = 5.0;
pub const KILL_BOUNTY_MATERIALS: f64 = 0.5;

// Lore thresholds (by rarity ordinal comparison)
pub const CRACK_CUE_SECONDS: f64 = 2.0;

// Persistence
pub const SAVE_VERSION_MAGIC: u64 = 0x544954_4C45_0001;
pub const AUTOSAVE_INTERVAL_SECONDS: u64 = 30;
