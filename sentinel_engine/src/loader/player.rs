//! Player building helpers.
//!
//! The player character is described in the world's `game.player` block. The
//! backpack size is an engine setting, not content, so it is passed in.

use log::info;
use sentinel_data::PlayerDef;

use crate::player::{Inventory, Player};

/// Build a `Player` standing in the start room with an empty backpack.
pub fn build_player(def: &PlayerDef, capacity: usize) -> Player {
    info!("building player with a backpack of {capacity} slots");
    Player {
        name: def.name.clone(),
        description: def.description.clone(),
        location: def.start_room.clone(),
        inventory: Inventory::with_capacity(capacity),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn player_starts_in_start_room_with_given_capacity() {
        let def = PlayerDef {
            name: "Gary".into(),
            description: "An intern".into(),
            start_room: "outside".into(),
        };
        let player = build_player(&def, 3);
        assert_eq!(player.location, "outside");
        assert_eq!(player.inventory.capacity, 3);
        assert!(player.inventory.is_empty());
    }
}
