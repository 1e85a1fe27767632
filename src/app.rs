//! Runtime state for the terminal session: the player, the live
//! simulations, and the cursor/tab bookkeeping the scenes render from.

use crate::constants::*;
use crate::defense::DefenseState;
use crate::forge::ForgeOutcome;
use crate::fusion;
use crate::game_logic::{
    buy_charm, request_forge, request_sacrifice, request_weapon_forge, sell_title, switch_world,
    CharmKind,
};
use crate::lore::{self, LoreClient, LoreEvent};
use crate::market::{new_trends, MarketTrend};
use crate::player::PlayerState;
use rand::Rng;
use std::sync::mpsc::{Receiver, Sender};
use std::sync::Arc;
use std::time::{Duration, Instant};

const STATUS_LOG_CAP: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Forge,
    Arsenal,
    Market,
    Defense,
}

impl Tab {
    pub fn title(&self) -> &'static str {
        match self {
            Tab::Forge => "Forge",
            Tab::Arsenal => "Arsenal",
            Tab::Market => "Market",
            Tab::Defense => "Defense",
        }
    }
}

pub struct App {
    pub player: PlayerState,
    pub trends: Vec<MarketTrend>,
    pub defense: DefenseState,
    pub tab: Tab,
    pub inventory_cursor: usize,
    pub arsenal_cursor: usize,
    pub enemy_cursor: usize,
    /// Titles marked for sacrifice or fusion.
    pub marked: Vec<String>,
    pub last_forge: Option<ForgeOutcome>,
    /// Transient reveal flash for very high tiers.
    pub crack_until: Option<Instant>,
    pub status: Vec<String>,
    lore_client: Option<Arc<dyn LoreClient + Send + Sync>>,
    lore_tx: Sender<LoreEvent>,
    lore_rx: Receiver<LoreEvent>,
}

impl App {
    pub fn new(player: PlayerState, trends: Vec<MarketTrend>) -> Self {
        let (lore_tx, lore_rx) = std::sync::mpsc::channel();
        Self {
            player,
            trends,
            defense: DefenseState::new(),
            tab: Tab::Forge,
            inventory_cursor: 0,
            arsenal_cursor: 0,
            enemy_cursor: 0,
            marked: Vec::new(),
            last_forge: None,
            crack_until: None,
            status: Vec::new(),
            lore_client: lore::HttpLoreClient::from_env()
                .map(|c| Arc::new(c) as Arc<dyn LoreClient + Send + Sync>),
            lore_tx,
            lore_rx,
        }
    }

    pub fn fresh() -> Self {
        Self::new(PlayerState::new(), new_trends())
    }

    pub fn push_status(&mut self, message: impl Into<String>) {
        self.status.insert(0, message.into());
        self.status.truncate(STATUS_LOG_CAP);
    }

    pub fn crack_active(&self) -> bool {
        self.crack_until.map_or(false, |until| Instant::now() < until)
    }

    /// Forge a title in the current world and kick off lore backfill for
    /// high tiers.
    pub fn forge(&mut self, rng: &mut impl Rng) {
        match request_forge(&mut self.player, rng) {
            Ok(outcome) => {
                if outcome.crack_cue {
                    self.crack_until =
                        Some(Instant::now() + Duration::from_secs_f64(CRACK_CUE_SECONDS));
                }
                if outcome.wants_lore {
                    self.backfill_lore(&outcome);
                }
                self.push_status(format!(
                    "Forged \"{}\" ({})",
                    outcome.title.full_text(),
                    outcome.title.rarity.label()
                ));
                self.inventory_cursor = 0;
                self.last_forge = Some(outcome);
            }
            Err(e) => self.push_status(e.to_string()),
        }
    }

    fn backfill_lore(&mut self, outcome: &ForgeOutcome) {
        match &self.lore_client {
            Some(client) => lore::request_history(
                Arc::clone(client),
                outcome.title.id.clone(),
                outcome.title.full_text(),
                self.lore_tx.clone(),
            ),
            None => {
                // No service configured: stamp the fallback immediately.
                lore::apply_history(
                    &mut self.player,
                    &outcome.title.id,
                    lore::DEFAULT_HISTORY.to_string(),
                );
            }
        }
    }

    /// Drains finished lore requests. Called every loop iteration.
    pub fn drain_lore(&mut self) {
        while let Ok(LoreEvent::History { title_id, history }) = self.lore_rx.try_recv() {
            lore::apply_history(&mut self.player, &title_id, history);
        }
    }

    pub fn forge_weapon(&mut self, rng: &mut impl Rng) {
        match request_weapon_forge(&mut self.player, rng) {
            Ok(weapon) => {
                self.arsenal_cursor = 0;
                self.push_status(format!("Forged weapon \"{}\"", weapon.name));
            }
            Err(e) => self.push_status(e.to_string()),
        }
    }

    pub fn sell_selected(&mut self) {
        let Some(id) = self.selected_title_id() else { return };
        match sell_title(&mut self.player, &id, &self.trends) {
            Ok(proceeds) => {
                self.marked.retain(|m| m != &id);
                self.push_status(format!("Sold for {}", proceeds));
                self.clamp_cursors();
            }
            Err(e) => self.push_status(e.to_string()),
        }
    }

    pub fn toggle_mark(&mut self) {
        let Some(id) = self.selected_title_id() else { return };
        if let Some(index) = self.marked.iter().position(|m| m == &id) {
            self.marked.remove(index);
        } else {
            self.marked.push(id);
        }
    }

    pub fn sacrifice_marked(&mut self) {
        let ids = self.marked.clone();
        match request_sacrifice(&mut self.player, &ids) {
            Ok(yield_) => {
                self.marked.clear();
                self.push_status(format!("Sacrifice complete: +{} materials", yield_));
                self.clamp_cursors();
            }
            Err(e) => self.push_status(e.to_string()),
        }
    }

    pub fn fuse_marked(&mut self) {
        let Some(client) = self.lore_client.clone() else {
            self.push_status("Chaos fusion needs the lore service (set TITLEFORGE_LORE_KEY)");
            return;
        };
        let ids = self.marked.clone();
        match fusion::fuse(&mut self.player, &ids, client.as_ref()) {
            Ok(title) => {
                self.marked.clear();
                self.inventory_cursor = 0;
                self.push_status(format!("Chaos fusion forged \"{}\"", title.full_text()));
            }
            Err(e) => self.push_status(e.to_string()),
        }
    }

    pub fn buy_charm(&mut self, kind: CharmKind) {
        match buy_charm(&mut self.player, kind) {
            Ok(()) => self.push_status("Charm purchased"),
            Err(e) => self.push_status(e.to_string()),
        }
    }

    pub fn switch_world(&mut self, world: u32) {
        match switch_world(&mut self.player, world) {
            Ok(()) => self.push_status(format!("Now forging in world {}", world)),
            Err(e) => self.push_status(e.to_string()),
        }
    }

    pub fn equip_selected_title(&mut self) {
        if let Some(title) = self.player.inventory.get(self.inventory_cursor) {
            self.player.equipped_id = Some(title.id.clone());
            self.push_status(format!("Now bearing \"{}\"", title.full_text()));
        }
    }

    pub fn equip_selected_weapon(&mut self) {
        if let Some(weapon) = self.player.arsenal.get(self.arsenal_cursor) {
            self.player.equipped_weapon_id = Some(weapon.id.clone());
            self.push_status(format!("Equipped \"{}\"", weapon.name));
        }
    }

    pub fn start_defense(&mut self) {
        match self.defense.start(&self.player) {
            Ok(()) => {
                self.enemy_cursor = 0;
                self.push_status("The siege begins");
            }
            Err(e) => self.push_status(e.to_string()),
        }
    }

    pub fn attack_selected_enemy(&mut self) {
        let Some(enemy) = self.defense.enemies.get(self.enemy_cursor) else {
            return;
        };
        let id = enemy.id.clone();
        if self.defense.attack_enemy(&mut self.player, &id) {
            self.push_status("Enemy slain (+5 glyphs, +0.5 materials)");
        }
        self.clamp_cursors();
    }

    pub fn defense_tick(&mut self) {
        let report = self.defense.movement_tick(&mut self.player);
        if report.breaches > 0 {
            self.push_status(format!("{} enemy(s) breached the base!", report.breaches));
        }
        if report.base_overrun {
            self.push_status("The base was overrun. The siege ends.");
        }
        self.clamp_cursors();
    }

    pub fn move_cursor(&mut self, delta: i64) {
        let (cursor, len) = match self.tab {
            Tab::Forge | Tab::Market => (&mut self.inventory_cursor, self.player.inventory.len()),
            Tab::Arsenal => (&mut self.arsenal_cursor, self.player.arsenal.len()),
            Tab::Defense => (&mut self.enemy_cursor, self.defense.enemies.len()),
        };
        if len == 0 {
            *cursor = 0;
            return;
        }
        let next = (*cursor as i64 + delta).rem_euclid(len as i64);
        *cursor = next as usize;
    }

    fn selected_title_id(&self) -> Option<String> {
        self.player
            .inventory
            .get(self.inventory_cursor)
            .map(|t| t.id.clone())
    }

    fn clamp_cursors(&mut self) {
        let clamp = |cursor: &mut usize, len: usize| {
            if len == 0 {
                *cursor = 0;
            } else if *cursor >= len {
                *cursor = len - 1;
            }
        };
        clamp(&mut self.inventory_cursor, self.player.inventory.len());
        clamp(&mut self.arsenal_cursor, self.player.arsenal.len());
        clamp(&mut self.enemy_cursor, self.defense.enemies.len());
    }
}
