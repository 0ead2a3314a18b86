//! `repl::movement` module
//!
//! Contains repl loop handlers for commands that change or describe the player's location.

use crate::error::InputError;
use crate::{SentinelWorld, View, ViewItem, WorldObject};

use anyhow::Result;
use log::info;

/// Move the player through an exit, if the room beyond is open.
///
/// # Errors
/// - if the new room (or anything it lists) can't be resolved
pub fn go_handler(world: &mut SentinelWorld, view: &mut View, direction: Option<&str>) -> Result<()> {
    let Some(direction) = direction else {
        view.push(ViewItem::ActionFailure(InputError::MissingArgument("Go where?").to_string()));
        return Ok(());
    };

    match world.move_player(direction) {
        Ok(room_id) => {
            info!("{} moved {direction} to '{room_id}'", world.player.name());
            world.player_room_ref()?.show(world, view)?;
        },
        Err(err) => {
            info!("{} could not go {direction}: {err:?}", world.player.name());
            view.push(ViewItem::ActionFailure(err.to_string()));
        },
    }
    Ok(())
}

/// Describe the current room again.
///
/// # Errors
/// - if the player's room can't be resolved
pub fn look_handler(world: &SentinelWorld, view: &mut View) -> Result<()> {
    world.player_room_ref()?.show(world, view)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Room;

    fn world() -> SentinelWorld {
        let mut world = SentinelWorld::new_empty();
        let mut lobby = Room::new("lobby", "Lobby", "A lobby", false, 0);
        lobby.add_exit("east", "corridor");
        lobby.add_exit("south", "tunnel");
        let mut corridor = Room::new("corridor", "Corridor", "A corridor", false, 0);
        corridor.add_exit("west", "lobby");
        world.rooms.insert("lobby".into(), lobby);
        world.rooms.insert("corridor".into(), corridor);
        world.rooms.insert("tunnel".into(), Room::new("tunnel", "Tunnel", "Dark", true, 0));
        world.player.location = "lobby".into();
        world
    }

    #[test]
    fn missing_direction_asks_where() {
        let mut world = world();
        let mut view = View::new();
        go_handler(&mut world, &mut view, None).unwrap();
        assert_eq!(view.transcript(), vec!["Go where?"]);
    }

    #[test]
    fn unknown_exit_reports_no_door() {
        let mut world = world();
        let mut view = View::new();
        go_handler(&mut world, &mut view, Some("up")).unwrap();
        assert_eq!(view.transcript(), vec!["There is no door!"]);
        assert_eq!(world.player.location, "lobby");
    }

    #[test]
    fn locked_room_stops_player() {
        let mut world = world();
        let mut view = View::new();
        go_handler(&mut world, &mut view, Some("south")).unwrap();
        assert_eq!(view.transcript(), vec!["That door is locked!"]);
        assert_eq!(world.player.location, "lobby");
    }

    #[test]
    fn moving_describes_new_room() {
        let mut world = world();
        let mut view = View::new();
        go_handler(&mut world, &mut view, Some("East")).unwrap();
        assert_eq!(world.player.location, "corridor");
        let lines = view.transcript();
        assert_eq!(lines[0], "Corridor");
        assert!(lines.contains(&"west (to Lobby)".to_string()));
    }
}
