//! Checksummed binary persistence for the player and market state.

use crate::constants::SAVE_VERSION_MAGIC;
use crate::market::MarketTrend;
use crate::player::PlayerState;
use chrono::Utc;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

/// Everything worth keeping between sessions. Transient siege state is
/// deliberately absent; an interrupted siege just ends.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaveData {
    pub player: PlayerState,
    pub trends: Vec<MarketTrend>,
    pub saved_at: i64,
}

impl SaveData {
    pub fn new(player: PlayerState, trends: Vec<MarketTrend>) -> Self {
        Self {
            player,
            trends,
            saved_at: Utc::now().timestamp(),
        }
    }
}

/// Reads and writes the save file.
///
/// File format:
/// - Version magic (8 bytes, little endian)
/// - Data length (4 bytes, little endian)
/// - Bincode-serialized [`SaveData`]
/// - SHA256 checksum over everything above (32 bytes)
pub struct SaveManager {
    save_path: PathBuf,
}

impl SaveManager {
    /// Places the save file in the platform config directory.
    pub fn new() -> io::Result<Self> {
        let project_dirs = ProjectDirs::from("", "", "titleforge").ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, "could not determine config directory")
        })?;
        let config_dir = project_dirs.config_dir();
        fs::create_dir_all(config_dir)?;
        Ok(Self {
            save_path: config_dir.join("forge.dat"),
        })
    }

    /// Uses an explicit path instead of the platform directory.
    pub fn with_path(save_path: PathBuf) -> Self {
        Self { save_path }
    }

    pub fn save(&self, data: &SaveData) -> io::Result<()> {
        let payload = bincode::serialize(data)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        let payload_len = payload.len() as u32;

        let mut hasher = Sha256::new();
        hasher.update(SAVE_VERSION_MAGIC.to_le_bytes());
        hasher.update(payload_len.to_le_bytes());
        hasher.update(&payload);
        let checksum = hasher.finalize();

        let mut file = fs::File::create(&self.save_path)?;
        file.write_all(&SAVE_VERSION_MAGIC.to_le_bytes())?;
        file.write_all(&payload_len.to_le_bytes())?;
        file.write_all(&payload)?;
        file.write_all(&checksum)?;
        Ok(())
    }

    /// Loads and verifies the save. Fails on a missing file, a foreign
    /// version magic, a checksum mismatch, or undecodable payload.
    pub fn load(&self) -> io::Result<SaveData> {
        let mut file = fs::File::open(&self.save_path)?;

        let mut version_bytes = [0u8; 8];
        file.read_exact(&mut version_bytes)?;
        let version = u64::from_le_bytes(version_bytes);
        if version != SAVE_VERSION_MAGIC {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!(
                    "unrecognized save version: expected 0x{:016X}, got 0x{:016X}",
                    SAVE_VERSION_MAGIC, version
                ),
            ));
        }

        let mut length_bytes = [0u8; 4];
        file.read_exact(&mut length_bytes)?;
        let payload_len = u32::from_le_bytes(length_bytes);

        let mut payload = vec![0u8; payload_len as usize];
        file.read_exact(&mut payload)?;

        let mut stored_checksum = [0u8; 32];
        file.read_exact(&mut stored_checksum)?;

        let mut hasher = Sha256::new();
        hasher.update(version_bytes);
        hasher.update(length_bytes);
        hasher.update(&payload);
        if stored_checksum != hasher.finalize().as_slice() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                "save file checksum mismatch",
            ));
        }

        bincode::deserialize(&payload).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    pub fn save_exists(&self) -> bool {
        self.save_path.exists()
    }
}
