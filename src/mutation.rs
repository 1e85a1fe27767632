use rand::Rng;
use serde::{Deserialize, Serialize};

/// Cosmetic-plus-value modifier drawn independently of rarity. `None` is
/// never stored on an entity; an unmutated title simply carries no
/// mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MutationKind {
    None,
    Glitched,
    VoidScarred,
    SolarFlare,
    Spectral,
    AncientDust,
    FrozenTime,
    Corrupted,
    BloodMoon,
    QuantumStutter,
    Hollow,
    Radiant,
    Singularity,
    Molten,
    Verdant,
    Echoing,
    Kinetic,
    Abyssal,
    Prismatic,
    Cybernetic,
    NullPointer,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Mutation {
    pub kind: MutationKind,
    pub value_multiplier: f64,
}

impl MutationKind {
    /// Every rollable (non-None) kind.
    pub fn rollable() -> [MutationKind; 20] {
        [
            MutationKind::Glitched,
            MutationKind::VoidScarred,
            MutationKind::SolarFlare,
            MutationKind::Spectral,
            MutationKind::AncientDust,
            MutationKind::FrozenTime,
            MutationKind::Corrupted,
            MutationKind::BloodMoon,
            MutationKind::QuantumStutter,
            MutationKind::Hollow,
            MutationKind::Radiant,
            MutationKind::Singularity,
            MutationKind::Molten,
            MutationKind::Verdant,
            MutationKind::Echoing,
            MutationKind::Kinetic,
            MutationKind::Abyssal,
            MutationKind::Prismatic,
            MutationKind::Cybernetic,
            MutationKind::NullPointer,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            MutationKind::None => "None",
            MutationKind::Glitched => "Glitched",
            MutationKind::VoidScarred => "Void-Scarred",
            MutationKind::SolarFlare => "Solar Flare",
            MutationKind::Spectral => "Spectral",
            MutationKind::AncientDust => "Ancient Dust",
            MutationKind::FrozenTime => "Frozen Time",
            MutationKind::Corrupted => "Corrupted",
            MutationKind::BloodMoon => "Blood Moon",
            MutationKind::QuantumStutter => "Quantum Stutter",
            MutationKind::Hollow => "Hollow",
            MutationKind::Radiant => "Radiant",
            MutationKind::Singularity => "Singularity",
            MutationKind::Molten => "Molten",
            MutationKind::Verdant => "Verdant",
            MutationKind::Echoing => "Echoing",
            MutationKind::Kinetic => "Kinetic",
            MutationKind::Abyssal => "Abyssal",
            MutationKind::Prismatic => "Prismatic",
            MutationKind::Cybernetic => "Cybernetic",
            MutationKind::NullPointer => "Null Pointer",
        }
    }

    /// Display color (hex) for UI layers.
    pub fn color(&self) -> &'static str {
        match self {
            MutationKind::None => "#ffffff",
            MutationKind::Glitched => "#ff00ff",
            MutationKind::VoidScarred => "#000000",
            MutationKind::SolarFlare => "#f59e0b",
            MutationKind::Spectral => "#a5f3fc",
            MutationKind::AncientDust => "#78350f",
            MutationKind::FrozenTime => "#38bdf8",
            MutationKind::Corrupted => "#10b981",
            MutationKind::BloodMoon => "#991b1b",
            MutationKind::QuantumStutter => "#8b5cf6",
            MutationKind::Hollow => "#1e1e1e",
            MutationKind::Radiant => "#fff7ed",
            MutationKind::Singularity => "#000000",
            MutationKind::Molten => "#ea580c",
            MutationKind::Verdant => "#22c55e",
            MutationKind::Echoing => "#64748b",
            MutationKind::Kinetic => "#3b82f6",
            MutationKind::Abyssal => "#312e81",
            MutationKind::Prismatic => "#f0abfc",
            MutationKind::Cybernetic => "#06b6d4",
            MutationKind::NullPointer => "#ef4444",
        }
    }

    pub fn value_multiplier(&self) -> f64 {
        match self {
            MutationKind::None => 1.0,
            MutationKind::Glitched => 3.0,
            MutationKind::VoidScarred => 2.5,
            MutationKind::SolarFlare => 2.2,
            MutationKind::Spectral => 2.0,
            MutationKind::AncientDust => 1.8,
            MutationKind::FrozenTime => 2.4,
            MutationKind::Corrupted => 2.6,
            MutationKind::BloodMoon => 2.8,
            MutationKind::QuantumStutter => 3.5,
            MutationKind::Hollow => 3.2,
            MutationKind::Radiant => 2.5,
            MutationKind::Singularity => 4.0,
            MutationKind::Molten => 2.1,
            MutationKind::Verdant => 1.9,
            MutationKind::Echoing => 2.2,
            MutationKind::Kinetic => 2.3,
            MutationKind::Abyssal => 3.1,
            MutationKind::Prismatic => 5.0,
            MutationKind::Cybernetic => 2.7,
            MutationKind::NullPointer => 10.0,
        }
    }

    pub fn mutation(&self) -> Option<Mutation> {
        if *self == MutationKind::None {
            return None;
        }
        Some(Mutation {
            kind: *self,
            value_multiplier: self.value_multiplier(),
        })
    }
}

/// Rolls for a mutation with the given probability, picking a uniform
/// rollable kind on success. The probability is clamped to [0, 1]; stacked
/// luck charms can push the raw title-forge chance past 1.0 otherwise.
pub fn roll_mutation(chance: f64, rng: &mut impl Rng) -> Option<Mutation> {
    let chance = chance.clamp(0.0, 1.0);
    if rng.gen::<f64>() >= chance {
        return None;
    }
    let kinds = MutationKind::rollable();
    kinds[rng.gen_range(0..kinds.len())].mutation()
}
