use crate::constants::*;
use crate::mutation::{roll_mutation, Mutation};
use crate::rarity::Rarity;
use crate::words::{WEAPON_NAMES, WEAPON_SUFFIXES};
use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A forged combat instrument, owned by the player's arsenal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Weapon {
    pub id: String,
    pub name: String,
    pub rarity: Rarity,
    pub damage: f64,
    pub attack_speed: f64,
    pub mutation: Option<Mutation>,
}

/// Forges a new weapon. Unlike titles, weapon rarity is drawn uniformly
/// from the bottom tiers only, and the mutation chance is a flat 10%
/// that ignores luck charms. Both are deliberate asymmetries with the
/// title forge.
pub fn forge_weapon(rng: &mut impl Rng) -> Weapon {
    let rarity = Rarity::all()[rng.gen_range(0..WEAPON_RARITY_CEILING)];
    let tier = rarity.ordinal() as f64;

    let name = format!(
        "{} {}",
        WEAPON_NAMES[rng.gen_range(0..WEAPON_NAMES.len())],
        WEAPON_SUFFIXES[rng.gen_range(0..WEAPON_SUFFIXES.len())]
    );

    Weapon {
        id: Uuid::new_v4().to_string(),
        name,
        rarity,
        damage: WEAPON_DAMAGE_PER_TIER * (tier + 1.0) * (1.0 + rng.gen::<f64>()),
        attack_speed: WEAPON_SPEED_MIN + rng.gen::<f64>() * WEAPON_SPEED_SPREAD,
        mutation: roll_mutation(WEAPON_MUTATION_CHANCE, rng),
    }
}
