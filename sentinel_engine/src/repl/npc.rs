//! `repl::npc` module
//!
//! Contains repl loop handlers for commands involving NPCs

use crate::{SentinelWorld, View, ViewItem};

use anyhow::{Context, Result};
use log::info;

/// Talk to the first NPC in the room.
///
/// # Errors
/// - if the player's room, or an NPC it lists, can't be resolved
pub fn speak_handler(world: &mut SentinelWorld, view: &mut View) -> Result<()> {
    let Some(npc_id) = world.player_room_ref()?.npcs.first().cloned() else {
        view.push(ViewItem::ActionFailure("There's noone to speak to here.".to_string()));
        return Ok(());
    };
    let room_id = world.player.location.clone();
    let npc = world
        .npcs
        .get_mut(&npc_id)
        .with_context(|| format!("npc '{npc_id}' listed in room '{room_id}' not found"))?;
    let quote = npc.speak();
    info!("player spoke with {} ({})", npc.name, npc.id);
    view.push(ViewItem::NpcSpeech {
        speaker: npc.name.clone(),
        quote,
    });
    Ok(())
}
