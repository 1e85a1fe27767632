//! The command surface: every player-initiated operation, validated
//! before any state is touched so that failures never leave a partial
//! mutation behind.

use crate::arsenal::{forge_weapon, Weapon};
use crate::constants::*;
use crate::forge::{forge_title, ForgeOutcome};
use crate::market::{market_value, MarketTrend};
use crate::player::PlayerState;
use rand::Rng;
use std::fmt;

/// Recoverable rejection reasons. Nothing here is fatal; the caller may
/// retry the same command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    InsufficientFunds,
    InvalidSelection,
    NoWeaponEquipped,
    SiegeAlreadyActive,
    ExternalService(String),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::InsufficientFunds => write!(f, "not enough currency or materials"),
            GameError::InvalidSelection => write!(f, "invalid selection of titles"),
            GameError::NoWeaponEquipped => {
                write!(f, "you need to equip a weapon in the arsenal first")
            }
            GameError::SiegeAlreadyActive => write!(f, "a siege is already underway"),
            GameError::ExternalService(msg) => {
                write!(f, "the fusion was too unstable and collapsed: {}", msg)
            }
        }
    }
}

impl std::error::Error for GameError {}

/// Charm kinds sold at the charm market.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharmKind {
    Luck,
    Purity,
    Synergy,
}

impl CharmKind {
    /// (cost in glyphs, bonus per purchase)
    pub fn price(&self) -> (f64, f64) {
        match self {
            CharmKind::Luck => LUCK_CHARM,
            CharmKind::Purity => PURITY_CHARM,
            CharmKind::Synergy => SYNERGY_CHARM,
        }
    }
}

/// Forges a title in the player's current world for 100 of that world's
/// currency. The new title lands at the front of the inventory.
pub fn request_forge(player: &mut PlayerState, rng: &mut impl Rng) -> Result<ForgeOutcome, GameError> {
    let world = player.current_world;
    if !player.debit(world, TITLE_FORGE_COST) {
        return Err(GameError::InsufficientFunds);
    }
    let outcome = forge_title(world, player.charms.luck, rng);
    player.inventory.insert(0, outcome.title.clone());
    Ok(outcome)
}

/// Forges a weapon for 200 glyphs and 10 materials.
pub fn request_weapon_forge(
    player: &mut PlayerState,
    rng: &mut impl Rng,
) -> Result<Weapon, GameError> {
    if player.glyphs < WEAPON_FORGE_GLYPH_COST || player.materials < WEAPON_FORGE_MATERIAL_COST {
        return Err(GameError::InsufficientFunds);
    }
    player.glyphs -= WEAPON_FORGE_GLYPH_COST;
    player.materials -= WEAPON_FORGE_MATERIAL_COST;
    let weapon = forge_weapon(rng);
    player.arsenal.insert(0, weapon.clone());
    Ok(weapon)
}

/// Sells a title at its market value, crediting the currency pool of the
/// title's origin world. Returns the credited amount.
pub fn sell_title(
    player: &mut PlayerState,
    id: &str,
    trends: &[MarketTrend],
) -> Result<u64, GameError> {
    let title = player.remove_title(id).ok_or(GameError::InvalidSelection)?;
    let proceeds = market_value(&title, trends);
    player.credit(title.world, proceeds as f64);
    Ok(proceeds)
}

/// Incinerates exactly three owned titles for 30 materials. Returns the
/// material yield. Wrong count or unknown ids reject before anything
/// burns.
pub fn request_sacrifice(player: &mut PlayerState, ids: &[String]) -> Result<f64, GameError> {
    if ids.len() != SACRIFICE_COUNT {
        return Err(GameError::InvalidSelection);
    }
    if !distinct(ids) || !ids.iter().all(|id| player.title(id).is_some()) {
        return Err(GameError::InvalidSelection);
    }
    for id in ids {
        player.remove_title(id);
    }
    player.materials += SACRIFICE_MATERIAL_YIELD;
    Ok(SACRIFICE_MATERIAL_YIELD)
}

/// Buys one charm upgrade with glyphs.
pub fn buy_charm(player: &mut PlayerState, kind: CharmKind) -> Result<(), GameError> {
    let (cost, bonus) = kind.price();
    if !player.debit(1, cost) {
        return Err(GameError::InsufficientFunds);
    }
    match kind {
        CharmKind::Luck => player.charms.luck += bonus,
        CharmKind::Purity => player.charms.purity += bonus,
        CharmKind::Synergy => player.charms.synergy += bonus,
    }
    Ok(())
}

/// Switches to a world, paying the unlock fee the first time: world 2
/// costs glyphs, world 3 costs astral shards.
pub fn switch_world(player: &mut PlayerState, world: u32) -> Result<(), GameError> {
    if world == 0 || world > NUM_WORLDS {
        return Err(GameError::InvalidSelection);
    }
    if player.unlocked_worlds.contains(&world) {
        player.current_world = world;
        return Ok(());
    }
    let paid = match world {
        2 => player.debit(1, WORLD_2_UNLOCK_GLYPHS),
        3 => player.debit(2, WORLD_3_UNLOCK_SHARDS),
        _ => false,
    };
    if !paid {
        return Err(GameError::InsufficientFunds);
    }
    player.unlocked_worlds.push(world);
    player.current_world = world;
    Ok(())
}

fn distinct(ids: &[String]) -> bool {
    ids.iter()
        .all(|id| ids.iter().filter(|other| *other == id).count() == 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::market::new_trends;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn forge_n(player: &mut PlayerState, n: usize) -> Vec<String> {
        let mut rng = ChaCha8Rng::seed_from_u64(51);
        (0..n)
            .map(|_| request_forge(player, &mut rng).unwrap().title.id)
            .collect()
    }

    #[test]
    fn test_forge_costs_current_world_currency() {
        let mut rng = ChaCha8Rng::seed_from_u64(52);
        let mut player = PlayerState::new();
        let before = player.glyphs;
        request_forge(&mut player, &mut rng).unwrap();
        assert_eq!(player.glyphs, before - 100.0);
        assert_eq!(player.inventory.len(), 1);
    }

    #[test]
    fn test_forge_rejects_when_broke() {
        let mut rng = ChaCha8Rng::seed_from_u64(53);
        let mut player = PlayerState::new();
        player.glyphs = 99.0;
        assert_eq!(
            request_forge(&mut player, &mut rng),
            Err(GameError::InsufficientFunds)
        );
        assert_eq!(player.glyphs, 99.0);
        assert!(player.inventory.is_empty());
    }

    #[test]
    fn test_weapon_forge_costs_glyphs_and_materials() {
        let mut rng = ChaCha8Rng::seed_from_u64(54);
        let mut player = PlayerState::new();
        player.materials = 10.0;
        request_weapon_forge(&mut player, &mut rng).unwrap();
        assert_eq!(player.glyphs, 2300.0);
        assert_eq!(player.materials, 0.0);
        assert_eq!(player.arsenal.len(), 1);

        assert_eq!(
            request_weapon_forge(&mut player, &mut rng),
            Err(GameError::InsufficientFunds)
        );
        assert_eq!(player.arsenal.len(), 1);
    }

    #[test]
    fn test_sell_routes_currency_by_world() {
        let mut rng = ChaCha8Rng::seed_from_u64(55);
        let mut player = PlayerState::new();
        player.astral_shards = 200.0;
        player.unlocked_worlds.push(2);
        player.current_world = 2;
        let outcome = request_forge(&mut player, &mut rng).unwrap();
        let shards_after_forge = player.astral_shards;

        let proceeds = sell_title(&mut player, &outcome.title.id, &new_trends()).unwrap();
        assert_eq!(proceeds as f64, outcome.title.value.floor());
        assert_eq!(player.astral_shards, shards_after_forge + proceeds as f64);
        assert!(player.inventory.is_empty());
    }

    #[test]
    fn test_sell_unknown_title_rejected() {
        let mut player = PlayerState::new();
        assert_eq!(
            sell_title(&mut player, "nope", &new_trends()),
            Err(GameError::InvalidSelection)
        );
    }

    #[test]
    fn test_sacrifice_requires_exactly_three() {
        let mut player = PlayerState::new();
        let ids = forge_n(&mut player, 4);

        assert_eq!(
            request_sacrifice(&mut player, &ids[..2].to_vec()),
            Err(GameError::InvalidSelection)
        );
        assert_eq!(player.inventory.len(), 4);
        assert_eq!(player.materials, 0.0);

        request_sacrifice(&mut player, &ids[..3].to_vec()).unwrap();
        assert_eq!(player.inventory.len(), 1);
        assert_eq!(player.materials, 30.0);
    }

    #[test]
    fn test_sacrifice_rejects_duplicates() {
        let mut player = PlayerState::new();
        let ids = forge_n(&mut player, 2);
        let duped = vec![ids[0].clone(), ids[0].clone(), ids[1].clone()];
        assert_eq!(
            request_sacrifice(&mut player, &duped),
            Err(GameError::InvalidSelection)
        );
        assert_eq!(player.inventory.len(), 2);
    }

    #[test]
    fn test_buy_charm_accumulates() {
        let mut player = PlayerState::new();
        buy_charm(&mut player, CharmKind::Luck).unwrap();
        buy_charm(&mut player, CharmKind::Luck).unwrap();
        assert!((player.charms.luck - 0.2).abs() < 1e-12);
        assert_eq!(player.glyphs, 1500.0);

        player.glyphs = 0.0;
        assert_eq!(
            buy_charm(&mut player, CharmKind::Synergy),
            Err(GameError::InsufficientFunds)
        );
    }

    #[test]
    fn test_world_unlock_and_switch() {
        let mut player = PlayerState::new();
        assert_eq!(
            switch_world(&mut player, 2),
            Err(GameError::InsufficientFunds)
        );
        assert_eq!(player.current_world, 1);

        player.glyphs = 60_000.0;
        switch_world(&mut player, 2).unwrap();
        assert_eq!(player.current_world, 2);
        assert_eq!(player.glyphs, 10_000.0);
        assert!(player.unlocked_worlds.contains(&2));

        // Already unlocked: free to switch back and forth.
        switch_world(&mut player, 1).unwrap();
        switch_world(&mut player, 2).unwrap();
        assert_eq!(player.glyphs, 10_000.0);
    }

    #[test]
    fn test_world_three_costs_shards() {
        let mut player = PlayerState::new();
        player.astral_shards = 50_000.0;
        switch_world(&mut player, 3).unwrap();
        assert_eq!(player.astral_shards, 0.0);
        assert_eq!(player.current_world, 3);
    }
}
