//! Wave defense: enemies march from the spawn line toward the player's
//! base. Spawning accelerates with the kill count, movement runs on a
//! fixed 50ms tick, and any enemy crossing the breach line chips the
//! base for a flat amount per tick.

use crate::constants::*;
use crate::game_logic::GameError;
use crate::player::PlayerState;
use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enemy {
    pub id: String,
    pub hp: f64,
    pub max_hp: f64,
    /// Distance from the base; spawns at 100, breaches at 5 or below.
    pub position: f64,
    /// Distance covered per movement tick.
    pub speed: f64,
}

/// What a movement tick did to the world, for the UI to narrate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickReport {
    pub breaches: usize,
    pub base_overrun: bool,
}

/// One siege session. Constructed idle; `start` arms it, `movement_tick`
/// and `attack_enemy` drive it, and base overrun (or `stop`) disarms it.
#[derive(Debug, Clone, Default)]
pub struct DefenseState {
    pub active: bool,
    pub enemies: Vec<Enemy>,
    pub kills: u64,
}

impl DefenseState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arms the siege. Rejected while a session is already running, and
    /// rejected without an equipped weapon since the player would have
    /// no way to fight back.
    pub fn start(&mut self, player: &PlayerState) -> Result<(), GameError> {
        if self.active {
            return Err(GameError::SiegeAlreadyActive);
        }
        if player.equipped_weapon().is_none() {
            return Err(GameError::NoWeaponEquipped);
        }
        self.active = true;
        self.enemies.clear();
        self.kills = 0;
        Ok(())
    }

    pub fn stop(&mut self) {
        self.active = false;
        self.enemies.clear();
    }

    /// Milliseconds until the next spawn: starts at 2s and shrinks 20ms
    /// per kill down to a 500ms floor.
    pub fn spawn_period(&self) -> u64 {
        DEFENSE_SPAWN_BASE_MS
            .saturating_sub(self.kills * DEFENSE_SPAWN_SHRINK_PER_KILL_MS)
            .max(DEFENSE_SPAWN_FLOOR_MS)
    }

    /// Spawns one enemy at the spawn line. Enemies toughen with the kill
    /// count so a long session ramps.
    pub fn spawn_enemy(&mut self, rng: &mut impl Rng) {
        if !self.active {
            return;
        }
        let hp = ENEMY_BASE_HP + self.kills as f64 * ENEMY_HP_PER_KILL;
        self.enemies.push(Enemy {
            id: Uuid::new_v4().to_string(),
            hp,
            max_hp: hp,
            position: ENEMY_SPAWN_POSITION,
            speed: ENEMY_SPEED_MIN + rng.gen::<f64>() * ENEMY_SPEED_SPREAD,
        });
    }

    /// Advances every enemy one tick. Positions are decided from a single
    /// snapshot, then any tick with at least one enemy at or past the
    /// breach line costs a flat 10 base damage. The penalty is per tick,
    /// not per enemy; a pile-up crossing together still costs 10.
    /// Breaching enemies are consumed by the strike; they do not linger
    /// to hit again. If the base drops to zero the session ends and base
    /// health resets to max.
    pub fn movement_tick(&mut self, player: &mut PlayerState) -> TickReport {
        let mut report = TickReport::default();
        if !self.active {
            return report;
        }

        for enemy in self.enemies.iter_mut() {
            enemy.position -= enemy.speed;
        }

        let before = self.enemies.len();
        self.enemies.retain(|e| e.position > BREACH_THRESHOLD);
        report.breaches = before - self.enemies.len();

        if report.breaches > 0 {
            player.base_health -= BREACH_DAMAGE;
            if player.base_health <= 0.0 {
                player.base_health = player.max_base_health;
                self.stop();
                report.base_overrun = true;
            }
        }
        report
    }

    /// Strikes one enemy with the equipped weapon. Silently ignores
    /// unknown ids (the target may have breached between input and
    /// resolution) and does nothing without a weapon. A kill pays the
    /// bounty exactly once and bumps the kill counter.
    pub fn attack_enemy(&mut self, player: &mut PlayerState, enemy_id: &str) -> bool {
        if !self.active {
            return false;
        }
        let damage = match player.equipped_weapon() {
            Some(weapon) => weapon.damage,
            None => return false,
        };
        let Some(index) = self.enemies.iter().position(|e| e.id == enemy_id) else {
            return false;
        };

        self.enemies[index].hp -= damage;
        if self.enemies[index].hp > 0.0 {
            return false;
        }

        self.enemies.remove(index);
        self.kills += 1;
        player.glyphs += KILL_BOUNTY_GLYPHS;
        player.materials += KILL_BOUNTY_MATERIALS;
        true
    }
}
