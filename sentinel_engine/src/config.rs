//! Engine configuration loaded from `config.toml`.
//!
//! Every key is optional. A missing file means all defaults; a file that exists
//! but can't be parsed is a startup error.

use crate::player::DEFAULT_CAPACITY;
use crate::save_files::{DEFAULT_SLOT, SAVE_DIR};

use anyhow::{Context, Result};
use log::{info, warn};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub player: PlayerConfig,
    pub saves: SaveConfig,
    pub content: ContentConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    pub inventory_capacity: usize,
}
impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            inventory_capacity: DEFAULT_CAPACITY,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SaveConfig {
    /// Root directory for save files; each world gets a subdirectory.
    pub directory: PathBuf,
    /// Slot used when `save` or `load` is given no name.
    pub default_slot: String,
}
impl Default for SaveConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from(SAVE_DIR),
            default_slot: DEFAULT_SLOT.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ContentConfig {
    /// RON world file to play instead of the built-in world.
    pub world: Option<PathBuf>,
}

/// Parse configuration from TOML text.
///
/// # Errors
/// - on malformed TOML or mistyped values
pub fn parse_config(raw: &str) -> Result<EngineConfig> {
    let config: EngineConfig = toml::from_str(raw).context("parsing engine config")?;
    Ok(config)
}

/// Load configuration from `path`, falling back to defaults if it doesn't exist.
///
/// # Errors
/// - if the file exists but can't be read or parsed
pub fn load_config(path: &Path) -> Result<EngineConfig> {
    if !path.exists() {
        warn!("no config file at {}; using defaults", path.display());
        return Ok(EngineConfig::default());
    }
    let raw = fs::read_to_string(path).with_context(|| format!("reading config file {}", path.display()))?;
    let config = parse_config(&raw).with_context(|| format!("in config file {}", path.display()))?;
    info!("loaded config from {}", path.display());
    Ok(config)
}
