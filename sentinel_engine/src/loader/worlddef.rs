//! WorldDef loader and conversion helpers.
//!
//! Converts the serialized `WorldDef` data model into runtime engine structs.
//! Placement of items, NPCs, and puzzles into rooms happens afterwards in
//! [`placement`](super::placement).

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use sentinel_data::{ChallengeDef, ItemDef, NpcDef, PuzzleDef, ReactionDef, ReactionEffectDef, RoomDef, WorldDef};

use crate::item::Item;
use crate::npc::Npc;
use crate::puzzle::{Challenge, Puzzle};
use crate::reaction::{Reaction, ReactionEffect};
use crate::room::Room;
use crate::world::SentinelWorld;

/// Load a `WorldDef` from a RON file.
///
/// # Errors
/// - if the file can't be read or isn't a valid `WorldDef`
pub fn load_worlddef(path: &Path) -> Result<WorldDef> {
    let text = fs::read_to_string(path).with_context(|| format!("reading worlddef from '{}'", path.display()))?;
    parse_worlddef(&text).with_context(|| format!("in worlddef file '{}'", path.display()))
}

/// Parse a `WorldDef` from RON text.
///
/// # Errors
/// - on RON syntax errors or a shape mismatch
pub fn parse_worlddef(text: &str) -> Result<WorldDef> {
    ron::from_str(text).context("parsing worlddef RON")
}

/// Convert a `WorldDef` into a `SentinelWorld` (player and placement applied separately).
///
/// # Errors
/// - if content fails a runtime invariant that validation doesn't cover
pub fn build_world_from_def(def: &WorldDef) -> Result<SentinelWorld> {
    let mut world = SentinelWorld::new_empty();
    world.title.clone_from(&def.game.title);
    world.slug.clone_from(&def.game.slug);
    world.intro.clone_from(&def.game.intro);
    world.help_text.clone_from(&def.game.help);
    world.victory_text.clone_from(&def.game.victory);

    for room_def in &def.rooms {
        let room = room_from_def(room_def);
        world.rooms.insert(room.id.clone(), room);
    }

    for item_def in &def.items {
        let item = item_from_def(item_def);
        world.items.insert(item.id.clone(), item);
    }

    for puzzle_def in &def.puzzles {
        let puzzle = puzzle_from_def(puzzle_def);
        world.puzzles.insert(puzzle.id.clone(), puzzle);
    }

    for npc_def in &def.npcs {
        let npc = npc_from_def(npc_def)?;
        world.npcs.insert(npc.id.clone(), npc);
    }

    for reaction_def in &def.reactions {
        let (npc, item, reaction) = reaction_from_def(reaction_def);
        world.reactions.insert(npc, item, reaction);
    }

    Ok(world)
}

fn room_from_def(def: &RoomDef) -> Room {
    let mut room = Room::new(def.id.clone(), def.name.clone(), def.desc.clone(), def.locked, def.required_level);
    for exit in &def.exits {
        room.add_exit(&exit.direction, exit.to.clone());
    }
    room
}

fn item_from_def(def: &ItemDef) -> Item {
    Item {
        id: def.id.clone(),
        name: def.name.clone(),
        description: def.desc.clone(),
        takeable: def.takeable,
        usable: def.usable,
        credential_level: def.credential_level,
    }
}

fn puzzle_from_def(def: &PuzzleDef) -> Puzzle {
    let challenge = match &def.challenge {
        ChallengeDef::Password(password) => Challenge::Password(password.clone()),
        ChallengeDef::Items(items) => Challenge::Items(items.clone()),
    };
    Puzzle {
        id: def.id.clone(),
        name: def.name.clone(),
        description: def.desc.clone(),
        success_message: def.success_message.clone(),
        challenge,
        unlocks: def.unlocks.clone(),
        rewards: def.rewards.clone(),
        solved: false,
    }
}

fn npc_from_def(def: &NpcDef) -> Result<Npc> {
    anyhow::ensure!(!def.dialogue.is_empty(), "npc '{}' has no dialogue", def.id);
    Ok(Npc::new(def.id.clone(), def.name.clone(), def.desc.clone(), def.dialogue.clone()))
}

fn reaction_from_def(def: &ReactionDef) -> (String, String, Reaction) {
    let effects = def
        .effects
        .iter()
        .map(|effect| match effect {
            ReactionEffectDef::Unlock { room } => ReactionEffect::Unlock { room: room.clone() },
            ReactionEffectDef::Win => ReactionEffect::Win,
        })
        .collect();
    (
        def.npc.clone(),
        def.item.clone(),
        Reaction {
            message: def.message.clone(),
            effects,
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use sentinel_data::{ExitDef, LocationRef};

    #[test]
    fn room_level_overrides_unlocked_flag() {
        let def = RoomDef {
            id: "lab".into(),
            name: "Lab".into(),
            desc: "A lab".into(),
            locked: false,
            required_level: 2,
            exits: vec![ExitDef {
                direction: "West".into(),
                to: "corridor".into(),
            }],
        };
        let room = room_from_def(&def);
        assert!(room.locked);
        assert_eq!(room.exit("west"), Some(&"corridor".to_string()));
    }

    #[test]
    fn item_flags_carry_over() {
        let def = ItemDef {
            id: "book".into(),
            name: "book".into(),
            desc: "Heavy".into(),
            takeable: false,
            usable: true,
            credential_level: None,
            location: LocationRef::Nowhere,
        };
        let item = item_from_def(&def);
        assert!(!item.takeable);
        assert!(!item.is_credential());
    }

    #[test]
    fn bad_ron_is_reported() {
        assert!(parse_worlddef("WorldDef(").is_err());
    }

    #[test]
    fn reactions_are_keyed_by_npc_and_item() {
        let def = ReactionDef {
            npc: "sam".into(),
            item: "handbook".into(),
            message: "OMG".into(),
            effects: vec![ReactionEffectDef::Win],
        };
        let (npc, item, reaction) = reaction_from_def(&def);
        assert_eq!((npc.as_str(), item.as_str()), ("sam", "handbook"));
        assert_eq!(reaction.effects, vec![ReactionEffect::Win]);
    }
}
