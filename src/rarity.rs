use rand::Rng;
use serde::{Deserialize, Serialize};

/// Reward tier for forged titles and weapons, ordered Common -> Chaos.
///
/// Ordinal position drives "highest rarity among N draws" comparisons, so
/// the declaration order here is load-bearing and must not be rearranged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rarity {
    Common = 0,
    Uncommon = 1,
    Rare = 2,
    Epic = 3,
    Legendary = 4,
    Mythic = 5,
    Royalty = 6,
    Elite = 7,
    Exotic = 8,
    Secret = 9,
    Divine = 10,
    Fabled = 11,
    Transcendental = 12,
    Cosmic = 13,
    Chaos = 14,
}

pub const NUM_RARITIES: usize = 15;

impl Rarity {
    /// All tiers in sampling order.
    pub fn all() -> [Rarity; NUM_RARITIES] {
        [
            Rarity::Common,
            Rarity::Uncommon,
            Rarity::Rare,
            Rarity::Epic,
            Rarity::Legendary,
            Rarity::Mythic,
            Rarity::Royalty,
            Rarity::Elite,
            Rarity::Exotic,
            Rarity::Secret,
            Rarity::Divine,
            Rarity::Fabled,
            Rarity::Transcendental,
            Rarity::Cosmic,
            Rarity::Chaos,
        ]
    }

    /// Base sampling weight. Chaos is 0: it is only reachable through fusion.
    pub fn weight(&self) -> f64 {
        match self {
            Rarity::Common => 1000.0,
            Rarity::Uncommon => 400.0,
            Rarity::Rare => 150.0,
            Rarity::Epic => 60.0,
            Rarity::Legendary => 25.0,
            Rarity::Mythic => 10.0,
            Rarity::Royalty => 5.0,
            Rarity::Elite => 2.0,
            Rarity::Exotic => 1.0,
            Rarity::Secret => 0.5,
            Rarity::Divine => 0.2,
            Rarity::Fabled => 0.1,
            Rarity::Transcendental => 0.05,
            Rarity::Cosmic => 0.01,
            Rarity::Chaos => 0.0,
        }
    }

    /// Base value multiplier, monotonically non-decreasing across tiers.
    pub fn value_multiplier(&self) -> f64 {
        match self {
            Rarity::Common => 1.0,
            Rarity::Uncommon => 3.0,
            Rarity::Rare => 10.0,
            Rarity::Epic => 25.0,
            Rarity::Legendary => 100.0,
            Rarity::Mythic => 250.0,
            Rarity::Royalty => 750.0,
            Rarity::Elite => 2000.0,
            Rarity::Exotic => 5000.0,
            Rarity::Secret => 15000.0,
            Rarity::Divine => 50000.0,
            Rarity::Fabled => 150000.0,
            Rarity::Transcendental => 500000.0,
            Rarity::Cosmic => 2000000.0,
            Rarity::Chaos => 10000000.0,
        }
    }

    /// Returns the display name for this rarity tier.
    pub fn label(&self) -> &'static str {
        match self {
            Rarity::Common => "Common",
            Rarity::Uncommon => "Uncommon",
            Rarity::Rare => "Rare",
            Rarity::Epic => "Epic",
            Rarity::Legendary => "Legendary",
            Rarity::Mythic => "Mythic",
            Rarity::Royalty => "Royalty",
            Rarity::Elite => "Elite",
            Rarity::Exotic => "Exotic",
            Rarity::Secret => "Secret",
            Rarity::Divine => "Divine",
            Rarity::Fabled => "Fabled",
            Rarity::Transcendental => "Transcendental",
            Rarity::Cosmic => "Cosmic",
            Rarity::Chaos => "Chaos",
        }
    }

    /// Display color (hex) for UI layers.
    pub fn color(&self) -> &'static str {
        match self {
            Rarity::Common => "#9ca3af",
            Rarity::Uncommon => "#4ade80",
            Rarity::Rare => "#60a5fa",
            Rarity::Epic => "#c084fc",
            Rarity::Legendary => "#facc15",
            Rarity::Mythic => "#fb923c",
            Rarity::Royalty => "#f87171",
            Rarity::Elite => "#e2e8f0",
            Rarity::Exotic => "#2dd4bf",
            Rarity::Secret => "#171717",
            Rarity::Divine => "#ffffff",
            Rarity::Fabled => "#8b5cf6",
            Rarity::Transcendental => "#ec4899",
            Rarity::Cosmic => "#0ea5e9",
            Rarity::Chaos => "#ff00ff",
        }
    }

    pub fn ordinal(&self) -> usize {
        *self as usize
    }
}

/// Per-world scalar applied to every non-Common weight. Later worlds
/// suppress rare odds rather than boosting them; that is the shipped
/// balance, not a bug.
pub fn world_difficulty_modifier(world: u32) -> f64 {
    match world {
        1 => 1.0,
        2 => 0.8,
        _ => 0.6,
    }
}

/// Effective sampling weight for one tier given a luck modifier and world.
/// Common keeps its base weight; everything else scales with luck and the
/// world difficulty scalar. Luck is clamped at -1.0 so weights stay
/// non-negative.
fn effective_weight(rarity: Rarity, luck_modifier: f64, world: u32) -> f64 {
    let base = rarity.weight();
    if rarity == Rarity::Common {
        return base;
    }
    let luck = luck_modifier.max(-1.0);
    base * (1.0 + luck) * world_difficulty_modifier(world)
}

/// Draws one rarity tier by weighted sampling: uniform value in
/// `[0, total)`, then walk the tiers in enum order subtracting each
/// effective weight. A zero total (all weights zeroed out) falls back to
/// Common instead of dividing by zero.
pub fn roll_rarity(luck_modifier: f64, world: u32, rng: &mut impl Rng) -> Rarity {
    let total: f64 = Rarity::all()
        .iter()
        .map(|r| effective_weight(*r, luck_modifier, world))
        .sum();

    if total <= 0.0 {
        return Rarity::Common;
    }

    let mut remaining = rng.gen_range(0.0..total);
    for rarity in Rarity::all() {
        let weight = effective_weight(rarity, luck_modifier, world);
        if remaining < weight {
            return rarity;
        }
        remaining -= weight;
    }

    Rarity::Common
}
