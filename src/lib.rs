//! Title Forge - Terminal Collectible Forge Library
//!
//! This module exposes the game logic for testing and external use.

pub mod app;
pub mod arsenal;
pub mod constants;
pub mod defense;
pub mod forge;
pub mod fusion;
pub mod game_logic;
pub mod lore;
pub mod market;
pub mod mutation;
pub mod player;
pub mod rarity;
pub mod save_manager;
pub mod title;
pub mod ui;
pub mod words;
