//! Loader utilities for building a `SentinelWorld` from serialized data.
//!
//! World content is a `WorldDef` in RON: either the built-in world compiled into
//! the binary, or a file named in the engine config. Content is validated as a
//! whole before anything is built.

pub mod placement;
pub mod player;
pub mod worlddef;

use crate::config::EngineConfig;
use crate::loader::placement::{place_items, place_npcs, place_puzzles};
use crate::loader::player::build_player;
use crate::loader::worlddef::{build_world_from_def, load_worlddef, parse_worlddef};
use crate::{SentinelWorld, WorldObject};

use anyhow::{Context, Result, bail};
use log::info;
use sentinel_data::WorldDef;

/// The world that ships with the engine.
pub const BUILTIN_WORLD: &str = include_str!("../data/world.ron");

/// Load the world named by `config`, or the built-in world if none is set.
///
/// # Errors
/// Errors bubble up from file IO, deserialization, or content validation.
pub fn load_world(config: &EngineConfig) -> Result<SentinelWorld> {
    let def = match &config.content.world {
        Some(path) => load_worlddef(path).context("while loading worlddef from file")?,
        None => parse_worlddef(BUILTIN_WORLD).context("while parsing built-in worlddef")?,
    };
    world_from_def(&def, config.player.inventory_capacity)
}

/// Build the built-in world with the given backpack capacity.
///
/// # Errors
/// Only if the compiled-in content is broken.
pub fn load_builtin_world(capacity: usize) -> Result<SentinelWorld> {
    let def = parse_worlddef(BUILTIN_WORLD).context("while parsing built-in worlddef")?;
    world_from_def(&def, capacity)
}

/// Validate a `WorldDef`, then build and populate the runtime world.
///
/// # Errors
/// - if validation fails (all problems are reported together)
/// - if building or placement hits a missing reference
pub fn world_from_def(def: &WorldDef, capacity: usize) -> Result<SentinelWorld> {
    validate_worlddef(def)?;
    let mut world = build_world_from_def(def).context("while building world from worlddef")?;
    info!("{} rooms added to SentinelWorld", world.rooms.len());
    info!("{} items added to SentinelWorld", world.items.len());
    info!("{} puzzles added to SentinelWorld", world.puzzles.len());
    info!("{} NPCs added to SentinelWorld", world.npcs.len());
    info!("{} reactions added to SentinelWorld", world.reactions.len());

    world.player = build_player(&def.game.player, capacity);
    info!(
        "player \"{}\" added to SentinelWorld at {}",
        world.player.name(),
        world.player.location
    );

    place_items(&mut world, def)?;
    place_npcs(&mut world, def)?;
    place_puzzles(&mut world, def)?;
    Ok(world)
}

/// Validate the WorldDef and return a single aggregated error.
fn validate_worlddef(def: &WorldDef) -> Result<()> {
    let errors = sentinel_data::validate_world(def);
    if errors.is_empty() {
        return Ok(());
    }
    let details = errors
        .into_iter()
        .map(|err| format!("- {err}"))
        .collect::<Vec<_>>()
        .join("\n");
    bail!("worlddef validation failed:\n{details}");
}
