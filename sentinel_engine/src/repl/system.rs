//! `repl::system` module
//!
//! Contains repl loop handlers for commands that are for system utilities.

use crate::command::help_entries;
use crate::config::EngineConfig;
use crate::save_files::{SaveState, read_save, save_dir_for_world, save_path, write_save};
use crate::{SentinelWorld, View, ViewItem, WorldObject, repl::ReplControl};

use anyhow::Result;
use log::{info, warn};

/// Quit the game.
pub fn quit_handler(world: &SentinelWorld, view: &mut View) -> ReplControl {
    info!("{} quit in '{}'", world.player.name(), world.player.location);
    info!("ending inventory:");
    world
        .player
        .inventory
        .ids()
        .iter()
        .filter_map(|id| world.items.get(id))
        .for_each(|i| info!("- {} ({})", i.name(), i.id()));
    view.push(ViewItem::EngineMessage("Thank you for playing!".to_string()));
    ReplControl::Quit
}

/// Show available commands.
pub fn help_handler(world: &SentinelWorld, view: &mut View) {
    view.push(ViewItem::Help {
        basic_text: world.help_text.clone(),
        commands: help_entries(),
    });
}

/// Save the game to a slot (or the configured default slot).
pub fn save_handler(world: &SentinelWorld, view: &mut View, config: &EngineConfig, slot: Option<&str>) {
    let slot = slot.unwrap_or(&config.saves.default_slot);
    let dir = save_dir_for_world(&config.saves.directory, world);
    let state = SaveState::capture(world);
    match write_save(&dir, slot, &state) {
        Ok(path) => {
            info!("player saved game to slot \"{slot}\"");
            view.push(ViewItem::GameSaved {
                save_slot: slot.to_string(),
                save_file: path.display().to_string(),
            });
        },
        Err(err) => {
            warn!("save to slot \"{slot}\" failed: {err:?}");
            view.push(ViewItem::Error(format!("Unable to save the game: {err}")));
        },
    }
}

/// Load a saved game, then describe where the player now stands.
///
/// Nothing in the world changes unless the whole save checks out.
///
/// # Errors
/// - if the restored room can't be described
pub fn load_handler(world: &mut SentinelWorld, view: &mut View, config: &EngineConfig, slot: Option<&str>) -> Result<()> {
    let slot = slot.unwrap_or(&config.saves.default_slot);
    let dir = save_dir_for_world(&config.saves.directory, world);
    let loaded = read_save(&dir, slot).and_then(|state| state.apply(world));
    if let Err(err) = loaded {
        warn!("load of slot \"{slot}\" failed: {err:?}");
        view.push(ViewItem::Error(err.to_string()));
        return Ok(());
    }

    info!("player reloaded slot \"{slot}\" from {}", dir.display());
    view.push(ViewItem::GameLoaded {
        save_slot: slot.to_string(),
        save_file: save_path(&dir, slot).display().to_string(),
    });
    world.player_room_ref()?.show(world, view)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Item, ItemHolder, Room};
    use std::fs;

    fn world() -> SentinelWorld {
        let mut world = SentinelWorld::new_empty();
        world.slug = "system-test".into();
        world.help_text = "Figure out what happened.".into();
        let mut lobby = Room::new("lobby", "Lobby", "A lobby", false, 0);
        lobby.add_exit("east", "corridor");
        lobby.add_item("fan");
        world.rooms.insert("lobby".into(), lobby);
        world
            .rooms
            .insert("corridor".into(), Room::new("corridor", "Corridor", "White", false, 1));
        world.items.insert("fan".into(), Item::new("fan", "fan", "A fan"));
        world.player.location = "lobby".into();
        world
    }

    fn config(dir: &std::path::Path) -> EngineConfig {
        let mut config = EngineConfig::default();
        config.saves.directory = dir.to_path_buf();
        config
    }

    #[test]
    fn save_then_load_restores_progress() {
        let tmp = tempfile::tempdir().unwrap();
        let config = config(tmp.path());
        let mut world = world();
        world.take("fan").unwrap();
        world.rooms.get_mut("corridor").unwrap().unlock();

        let mut view = View::new();
        save_handler(&world, &mut view, &config, None);
        assert_eq!(view.transcript(), vec!["Game saved successfully!"]);

        let mut fresh = self::world();
        view.reset();
        load_handler(&mut fresh, &mut view, &config, None).unwrap();
        assert_eq!(view.transcript()[0], "Game loaded successfully!");
        assert!(fresh.player.inventory.contains_item("fan"));
        assert!(!fresh.rooms["lobby"].contains_item("fan"));
        assert!(!fresh.rooms["corridor"].locked);
    }

    #[test]
    fn missing_save_changes_nothing() {
        let tmp = tempfile::tempdir().unwrap();
        let config = config(tmp.path());
        let mut world = world();
        let before = SaveState::capture(&world);
        let mut view = View::new();
        load_handler(&mut world, &mut view, &config, Some("nope")).unwrap();
        assert_eq!(view.transcript(), vec!["No saved game found for 'nope'!"]);
        assert_eq!(SaveState::capture(&world), before);
    }

    #[test]
    fn malformed_save_changes_nothing() {
        let tmp = tempfile::tempdir().unwrap();
        let config = config(tmp.path());
        let mut world = world();
        let dir = save_dir_for_world(tmp.path(), &world);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("broken.ron"), "SaveState(location: ").unwrap();

        let before = SaveState::capture(&world);
        let mut view = View::new();
        load_handler(&mut world, &mut view, &config, Some("broken")).unwrap();
        assert!(view.items[0].view_item.is_error());
        assert_eq!(SaveState::capture(&world), before);
    }

    #[test]
    fn help_lists_every_command() {
        let world = world();
        let mut view = View::new();
        help_handler(&world, &mut view);
        let lines = view.transcript();
        assert_eq!(lines[0], "Figure out what happened.");
        assert_eq!(lines.len(), 1 + help_entries().len());
    }

    #[test]
    fn quit_says_goodbye() {
        let world = world();
        let mut view = View::new();
        assert!(matches!(quit_handler(&world, &mut view), ReplControl::Quit));
        assert_eq!(view.transcript(), vec!["Thank you for playing!"]);
    }
}
