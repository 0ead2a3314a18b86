//! Placement helpers for populating rooms and the starting inventory.
//!
//! WorldDef items, NPCs, and puzzles carry their starting locations; these
//! helpers apply them in content order so room listings are stable between runs.

use anyhow::{Context, Result, bail};
use log::info;
use sentinel_data::{LocationRef, WorldDef};

use crate::ItemHolder;
use crate::world::SentinelWorld;

/// Place items in their starting locations.
///
/// # Errors
/// - on failed lookups of rooms, or a starting inventory over capacity
pub fn place_items(world: &mut SentinelWorld, def: &WorldDef) -> Result<()> {
    let mut unspawned = 0;
    for item in &def.items {
        match &item.location {
            LocationRef::Room(room_id) => {
                let room = world
                    .rooms
                    .get_mut(room_id)
                    .with_context(|| format!("room id {room_id} not found in world.rooms"))?;
                room.add_item(&item.id);
            },
            LocationRef::Inventory => {
                world
                    .player
                    .inventory
                    .try_add(&item.id)
                    .with_context(|| format!("placing '{}' in starting inventory", item.id))?;
            },
            LocationRef::Nowhere => unspawned += 1,
        }
    }
    info!("{unspawned} items remain unspawned (Location::Nowhere)");
    Ok(())
}

/// Place NPCs in their starting rooms.
///
/// # Errors
/// - on invalid placement locations
pub fn place_npcs(world: &mut SentinelWorld, def: &WorldDef) -> Result<()> {
    for npc in &def.npcs {
        match &npc.location {
            LocationRef::Room(room_id) => {
                let room = world
                    .rooms
                    .get_mut(room_id)
                    .with_context(|| format!("room id {room_id} not found in world.rooms"))?;
                room.npcs.push(npc.id.clone());
            },
            LocationRef::Nowhere => info!("npc '{}' starts offstage", npc.id),
            LocationRef::Inventory => bail!("npc '{}' cannot start in the player's inventory", npc.id),
        }
    }
    Ok(())
}

/// Attach each puzzle to its room.
///
/// # Errors
/// - if a puzzle's room is missing
pub fn place_puzzles(world: &mut SentinelWorld, def: &WorldDef) -> Result<()> {
    for puzzle in &def.puzzles {
        let room = world
            .rooms
            .get_mut(&puzzle.room)
            .with_context(|| format!("room id {} for puzzle '{}' not found", puzzle.room, puzzle.id))?;
        room.puzzles.push(puzzle.id.clone());
    }
    Ok(())
}
