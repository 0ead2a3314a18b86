//! Save-game capture, validation, and serialization helpers.
//!
//! A save is a [`SaveState`] snapshot of the mutable parts of the world, written as
//! RON to `<save root>/<world slug>/<slot>.ron`. Content (rooms, items, text) is never
//! saved; it comes from the world definition, and every id in a save is checked
//! against it before anything is applied.
use crate::error::PersistenceError;
use crate::slug::sanitize_slug;
use crate::{Id, ItemHolder, SENTINEL_VERSION, SentinelWorld};

use anyhow::{Context, Result};
use log::{info, warn};
use ron::ser::PrettyConfig;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub const SAVE_DIR: &str = "saved_games";
pub const DEFAULT_SLOT: &str = "save_game";

/// Snapshot of everything that can change during play.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveState {
    pub engine_version: String,
    /// Id of the room the player is in.
    pub location: Id,
    /// Lock state of every room that started out locked.
    pub locks: BTreeMap<Id, bool>,
    pub inventory: Vec<Id>,
    pub won: bool,
    /// Items lying in each room. Rooms not listed are empty.
    #[serde(default)]
    pub room_items: BTreeMap<Id, Vec<Id>>,
    #[serde(default)]
    pub solved: BTreeSet<Id>,
    /// Dialogue cursor for each NPC.
    #[serde(default)]
    pub dialogue: BTreeMap<Id, usize>,
}

impl SaveState {
    /// Capture the current state of `world`.
    pub fn capture(world: &SentinelWorld) -> Self {
        Self {
            engine_version: SENTINEL_VERSION.to_string(),
            location: world.player.location.clone(),
            locks: world
                .rooms
                .values()
                .filter(|room| room.lockable)
                .map(|room| (room.id.clone(), room.locked))
                .collect(),
            inventory: world.player.inventory.ids().to_vec(),
            won: world.won,
            room_items: world
                .rooms
                .values()
                .filter(|room| !room.items.is_empty())
                .map(|room| (room.id.clone(), room.items.clone()))
                .collect(),
            solved: world
                .puzzles
                .values()
                .filter(|puzzle| puzzle.solved)
                .map(|puzzle| puzzle.id.clone())
                .collect(),
            dialogue: world.npcs.values().map(|npc| (npc.id.clone(), npc.cursor)).collect(),
        }
    }

    /// Check every reference in the snapshot against the world's content.
    ///
    /// # Errors
    /// - `UnknownReference` for any id the world doesn't define
    /// - `NotLockable` for a lock entry on a room that never has a lock
    /// - `DuplicateItem` if an item would end up in two places
    /// - `OverCapacity` if the inventory doesn't fit in the backpack
    pub fn validate(&self, world: &SentinelWorld) -> Result<(), PersistenceError> {
        let unknown = |kind: &'static str, id: &Id| PersistenceError::UnknownReference { kind, id: id.clone() };

        if !world.rooms.contains_key(&self.location) {
            return Err(unknown("room", &self.location));
        }
        for id in self.locks.keys() {
            match world.rooms.get(id) {
                None => return Err(unknown("room", id)),
                Some(room) if !room.lockable => return Err(PersistenceError::NotLockable(id.clone())),
                Some(_) => {},
            }
        }

        let capacity = world.player.inventory.capacity;
        if self.inventory.len() > capacity {
            return Err(PersistenceError::OverCapacity {
                count: self.inventory.len(),
                capacity,
            });
        }

        let mut placed = HashSet::new();
        let room_lists = self.room_items.iter().map(|(room_id, items)| (Some(room_id), items));
        for (room_id, items) in std::iter::once((None, &self.inventory)).chain(room_lists) {
            if let Some(room_id) = room_id
                && !world.rooms.contains_key(room_id)
            {
                return Err(unknown("room", room_id));
            }
            for item_id in items {
                if !world.items.contains_key(item_id) {
                    return Err(unknown("item", item_id));
                }
                if !placed.insert(item_id) {
                    return Err(PersistenceError::DuplicateItem(item_id.clone()));
                }
            }
        }

        if let Some(id) = self.solved.iter().find(|id| !world.puzzles.contains_key(*id)) {
            return Err(unknown("puzzle", id));
        }
        if let Some(id) = self.dialogue.keys().find(|id| !world.npcs.contains_key(*id)) {
            return Err(unknown("npc", id));
        }
        Ok(())
    }

    /// Validate, then overwrite the world's mutable state with this snapshot.
    ///
    /// # Errors
    /// Any validation failure; the world is untouched in that case.
    pub fn apply(&self, world: &mut SentinelWorld) -> Result<(), PersistenceError> {
        self.validate(world)?;
        if self.engine_version != SENTINEL_VERSION {
            warn!(
                "save was written by engine v{}, running v{}",
                self.engine_version, SENTINEL_VERSION
            );
        }

        world.player.location.clone_from(&self.location);
        world.player.inventory.clear();
        for item_id in &self.inventory {
            world.player.inventory.add_item(item_id);
        }
        for room in world.rooms.values_mut() {
            if let Some(locked) = self.locks.get(&room.id) {
                room.locked = *locked;
            }
            room.items = self.room_items.get(&room.id).cloned().unwrap_or_default();
        }
        for puzzle in world.puzzles.values_mut() {
            puzzle.solved = self.solved.contains(&puzzle.id);
        }
        for npc in world.npcs.values_mut() {
            npc.set_cursor(self.dialogue.get(&npc.id).copied().unwrap_or(0));
        }
        world.won = self.won;
        info!("save state applied (location '{}')", self.location);
        Ok(())
    }
}

/// Directory holding saves for this particular world.
pub fn save_dir_for_world(root: &Path, world: &SentinelWorld) -> PathBuf {
    let raw = if world.slug.trim().is_empty() {
        world.title.as_str()
    } else {
        world.slug.as_str()
    };
    root.join(sanitize_slug(raw, "world"))
}

/// File path for a slot within a save directory.
pub fn save_path(dir: &Path, slot: &str) -> PathBuf {
    dir.join(format!("{}.ron", sanitize_slug(slot, DEFAULT_SLOT)))
}

/// Serialize `state` into the slot, creating the directory if needed.
///
/// # Errors
/// - on encoding failure or any filesystem error
pub fn write_save(dir: &Path, slot: &str, state: &SaveState) -> Result<PathBuf, PersistenceError> {
    let encoded = ron::ser::to_string_pretty(state, PrettyConfig::default())
        .map_err(|e| PersistenceError::Encode(e.to_string()))?;
    fs::create_dir_all(dir)?;
    let path = save_path(dir, slot);
    fs::write(&path, encoded)?;
    info!("game saved to {}", path.display());
    Ok(path)
}

/// Read and parse the snapshot stored in a slot.
///
/// # Errors
/// - `NoSave` if the slot file doesn't exist
/// - `Malformed` if it can't be parsed
pub fn read_save(dir: &Path, slot: &str) -> Result<SaveState, PersistenceError> {
    let path = save_path(dir, slot);
    let raw = match fs::read_to_string(&path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(PersistenceError::NoSave { slot: slot.to_string() });
        },
        Err(e) => return Err(e.into()),
    };
    ron::from_str::<SaveState>(&raw).map_err(|e| PersistenceError::Malformed {
        slot: slot.to_string(),
        reason: e.to_string(),
    })
}

/// Names of the save slots found in `dir`, sorted.
///
/// # Errors
/// Returns an error if the directory contents cannot be read or enumerated.
pub fn collect_save_slots(dir: &Path) -> Result<Vec<String>> {
    if !dir.exists() {
        return Ok(Vec::new());
    }
    let mut slots = Vec::new();
    for entry in fs::read_dir(dir).with_context(|| format!("reading {}", dir.display()))? {
        let entry = entry.with_context(|| format!("enumerating {}", dir.display()))?;
        let path = entry.path();
        if path.is_file()
            && path.extension().and_then(|ext| ext.to_str()) == Some("ron")
            && let Some(stem) = path.file_stem().and_then(|stem| stem.to_str())
        {
            slots.push(stem.to_string());
        }
    }
    slots.sort();
    Ok(slots)
}
