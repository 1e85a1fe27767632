use crate::arsenal::Weapon;
use crate::constants::*;
use crate::title::Title;
use serde::{Deserialize, Serialize};

/// Additive probability modifiers bought at the charm market.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Charms {
    pub luck: f64,
    pub purity: f64,
    pub synergy: f64,
}

/// Everything the player owns. The simulation subsystems mutate a
/// snapshot of this through the command surface; persistence is the
/// caller's job (see `save_manager`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerState {
    pub glyphs: f64,
    pub astral_shards: f64,
    pub cosmic_essence: f64,
    pub inventory: Vec<Title>,
    pub arsenal: Vec<Weapon>,
    pub equipped_id: Option<String>,
    pub equipped_weapon_id: Option<String>,
    pub base_health: f64,
    pub max_base_health: f64,
    pub charms: Charms,
    pub materials: f64,
    pub current_world: u32,
    pub unlocked_worlds: Vec<u32>,
}

impl PlayerState {
    /// Creates a fresh player: starting glyphs, world 1 unlocked, full
    /// base health.
    pub fn new() -> Self {
        Self {
            glyphs: STARTING_GLYPHS,
            astral_shards: 0.0,
            cosmic_essence: 0.0,
            inventory: Vec::new(),
            arsenal: Vec::new(),
            equipped_id: None,
            equipped_weapon_id: None,
            base_health: STARTING_BASE_HEALTH,
            max_base_health: STARTING_BASE_HEALTH,
            charms: Charms::default(),
            materials: 0.0,
            current_world: 1,
            unlocked_worlds: vec![1],
        }
    }

    /// The currency pool for a world. Worlds hold three disjoint pools
    /// with no exchange rate between them.
    pub fn currency(&self, world: u32) -> f64 {
        match world {
            1 => self.glyphs,
            2 => self.astral_shards,
            _ => self.cosmic_essence,
        }
    }

    pub fn credit(&mut self, world: u32, amount: f64) {
        match world {
            1 => self.glyphs += amount,
            2 => self.astral_shards += amount,
            _ => self.cosmic_essence += amount,
        }
    }

    /// Debits the world's pool; returns false (and leaves the pool
    /// untouched) when funds are short.
    pub fn debit(&mut self, world: u32, amount: f64) -> bool {
        if self.currency(world) < amount {
            return false;
        }
        self.credit(world, -amount);
        true
    }

    pub fn title(&self, id: &str) -> Option<&Title> {
        self.inventory.iter().find(|t| t.id == id)
    }

    pub fn title_mut(&mut self, id: &str) -> Option<&mut Title> {
        self.inventory.iter_mut().find(|t| t.id == id)
    }

    pub fn equipped_weapon(&self) -> Option<&Weapon> {
        let id = self.equipped_weapon_id.as_deref()?;
        self.arsenal.iter().find(|w| w.id == id)
    }

    /// Removes a title from the inventory, clearing the equipped slot if
    /// it pointed at the removed title. Returns the title if present.
    pub fn remove_title(&mut self, id: &str) -> Option<Title> {
        let index = self.inventory.iter().position(|t| t.id == id)?;
        if self.equipped_id.as_deref() == Some(id) {
            self.equipped_id = None;
        }
        Some(self.inventory.remove(index))
    }
}

impl Default for PlayerState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_player_defaults() {
        let player = PlayerState::new();
        assert_eq!(player.glyphs, 2500.0);
        assert_eq!(player.astral_shards, 0.0);
        assert_eq!(player.cosmic_essence, 0.0);
        assert_eq!(player.base_health, 100.0);
        assert_eq!(player.max_base_health, 100.0);
        assert_eq!(player.unlocked_worlds, vec![1]);
        assert_eq!(player.current_world, 1);
        assert!(player.inventory.is_empty());
        assert!(player.arsenal.is_empty());
    }

    #[test]
    fn test_currency_pools_are_disjoint() {
        let mut player = PlayerState::new();
        player.credit(2, 100.0);
        player.credit(3, 50.0);
        assert_eq!(player.glyphs, 2500.0);
        assert_eq!(player.astral_shards, 100.0);
        assert_eq!(player.cosmic_essence, 50.0);
    }

    #[test]
    fn test_debit_rejects_insufficient_funds() {
        let mut player = PlayerState::new();
        assert!(!player.debit(2, 1.0));
        assert_eq!(player.astral_shards, 0.0);
        assert!(player.debit(1, 2500.0));
        assert_eq!(player.glyphs, 0.0);
    }

    #[test]
    fn test_remove_title_clears_equipped_slot() {
        use crate::forge::forge_title;
        let mut player = PlayerState::new();
        let title = forge_title(1, 0.0, &mut rand::thread_rng()).title;
        let id = title.id.clone();
        player.inventory.push(title);
        player.equipped_id = Some(id.clone());

        let removed = player.remove_title(&id);
        assert!(removed.is_some());
        assert!(player.equipped_id.is_none());
        assert!(player.inventory.is_empty());
    }
}
