//! Integration test: a full wave defense session.
//!
//! Covers the siege life cycle: arming with a forged weapon, spawn
//! cadence ramping with kills, breach damage, base overrun recovery, and
//! the kill bounty feeding back into the forge economy.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use titleforge::defense::{DefenseState, Enemy};
use titleforge::game_logic::{request_weapon_forge, GameError};
use titleforge::player::PlayerState;

/// Forges and equips a weapon so the siege can be armed.
fn armed_player(rng: &mut ChaCha8Rng) -> PlayerState {
    let mut player = PlayerState::new();
    player.materials = 10.0;
    let weapon = request_weapon_forge(&mut player, rng).unwrap();
    player.equipped_weapon_id = Some(weapon.id);
    player
}

fn enemy(id: &str, hp: f64, position: f64, speed: f64) -> Enemy {
    Enemy {
        id: id.to_string(),
        hp,
        max_hp: hp,
        position,
        speed,
    }
}

// =============================================================================
// Session life cycle
// =============================================================================

#[test]
fn test_session_requires_weapon_and_is_single_flight() {
    let mut rng = ChaCha8Rng::seed_from_u64(201);
    let mut defense = DefenseState::new();

    let unarmed = PlayerState::new();
    assert_eq!(defense.start(&unarmed), Err(GameError::NoWeaponEquipped));

    let player = armed_player(&mut rng);
    defense.start(&player).unwrap();
    assert_eq!(defense.start(&player), Err(GameError::SiegeAlreadyActive));

    defense.stop();
    defense.start(&player).unwrap();
}

#[test]
fn test_kills_accelerate_spawns_and_toughen_enemies() {
    let mut rng = ChaCha8Rng::seed_from_u64(202);
    let mut defense = DefenseState::new();
    let player = armed_player(&mut rng);
    defense.start(&player).unwrap();

    assert_eq!(defense.spawn_period(), 2000);
    defense.kills = 40;
    assert_eq!(defense.spawn_period(), 1200);
    defense.kills = 200;
    assert_eq!(defense.spawn_period(), 500, "cadence bottoms out");

    defense.spawn_enemy(&mut rng);
    let spawned = defense.enemies.last().unwrap();
    assert_eq!(spawned.hp, 20.0 + 200.0 * 2.0);
    assert_eq!(spawned.position, 100.0);
}

// =============================================================================
// Breach mechanics
// =============================================================================

#[test]
fn test_simultaneous_breaches_cost_one_flat_hit() {
    let mut rng = ChaCha8Rng::seed_from_u64(203);
    let mut defense = DefenseState::new();
    let mut player = armed_player(&mut rng);
    defense.start(&player).unwrap();

    // A crawler and a sprinter both cross the line this tick; a third
    // enemy stays out of range. The tick costs 10, not 20.
    defense.enemies.push(enemy("crawler", 20.0, 5.2, 0.3));
    defense.enemies.push(enemy("sprinter", 20.0, 45.0, 40.0));
    defense.enemies.push(enemy("distant", 20.0, 90.0, 0.3));

    let report = defense.movement_tick(&mut player);
    assert_eq!(report.breaches, 2);
    assert_eq!(player.base_health, 90.0);
    assert_eq!(defense.enemies.len(), 1);
    assert_eq!(defense.enemies[0].id, "distant");
}

#[test]
fn test_enemies_march_every_tick_until_they_breach() {
    let mut rng = ChaCha8Rng::seed_from_u64(204);
    let mut defense = DefenseState::new();
    let mut player = armed_player(&mut rng);
    defense.start(&player).unwrap();
    defense.enemies.push(enemy("walker", 20.0, 8.0, 1.0));

    // 8.0 -> 7.0 -> 6.0 -> 5.0: breaches on the third tick (<= 5).
    for expected in [7.0, 6.0] {
        let report = defense.movement_tick(&mut player);
        assert_eq!(report.breaches, 0);
        assert_eq!(defense.enemies[0].position, expected);
    }
    let report = defense.movement_tick(&mut player);
    assert_eq!(report.breaches, 1);
    assert_eq!(player.base_health, 90.0);
}

#[test]
fn test_overrun_ends_session_and_restores_base() {
    let mut rng = ChaCha8Rng::seed_from_u64(205);
    let mut defense = DefenseState::new();
    let mut player = armed_player(&mut rng);
    defense.start(&player).unwrap();

    // The base is already one hit from falling.
    player.base_health = 10.0;
    defense.enemies.push(enemy("finisher", 20.0, 5.4, 1.0));

    let report = defense.movement_tick(&mut player);
    assert!(report.base_overrun);
    assert!(!defense.active);
    assert_eq!(player.base_health, player.max_base_health);

    // Idle sessions ignore further ticks.
    let quiet = defense.movement_tick(&mut player);
    assert_eq!(quiet.breaches, 0);
    assert!(!quiet.base_overrun);
}

// =============================================================================
// Fighting back
// =============================================================================

#[test]
fn test_kill_bounty_flows_into_the_economy() {
    let mut rng = ChaCha8Rng::seed_from_u64(206);
    let mut defense = DefenseState::new();
    let mut player = armed_player(&mut rng);
    defense.start(&player).unwrap();

    let damage = player.equipped_weapon().unwrap().damage;
    defense.enemies.push(enemy("target", damage, 60.0, 0.3));
    let glyphs_before = player.glyphs;
    let materials_before = player.materials;

    assert!(defense.attack_enemy(&mut player, "target"));
    assert_eq!(defense.kills, 1);
    assert_eq!(player.glyphs, glyphs_before + 5.0);
    assert_eq!(player.materials, materials_before + 0.5);

    // The id is gone; hammering the key again pays nothing.
    assert!(!defense.attack_enemy(&mut player, "target"));
    assert_eq!(player.glyphs, glyphs_before + 5.0);
}

#[test]
fn test_damage_twenty_five_kills_twenty_hp_enemy_in_one_hit() {
    let mut rng = ChaCha8Rng::seed_from_u64(207);
    let mut defense = DefenseState::new();
    let mut player = armed_player(&mut rng);
    // Pin the damage so the hit count is exact.
    player.arsenal[0].damage = 25.0;
    defense.start(&player).unwrap();
    defense.enemies.push(enemy("fresh", 20.0, 60.0, 0.3));

    assert!(defense.attack_enemy(&mut player, "fresh"));
    assert!(defense.enemies.is_empty());
}

#[test]
fn test_attack_on_breached_target_is_a_silent_miss() {
    let mut rng = ChaCha8Rng::seed_from_u64(208);
    let mut defense = DefenseState::new();
    let mut player = armed_player(&mut rng);
    defense.start(&player).unwrap();
    defense.enemies.push(enemy("gone", 20.0, 5.5, 1.0));

    defense.movement_tick(&mut player);
    assert!(defense.enemies.is_empty());
    assert!(!defense.attack_enemy(&mut player, "gone"));
    assert_eq!(defense.kills, 0);
}
