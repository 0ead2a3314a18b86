//! `repl::inventory` module
//!
//! Contains repl loop handlers for commands that affect player inventory

use crate::error::{InputError, InventoryError};
use crate::{SentinelWorld, View, ViewItem, WorldObject};

use anyhow::Result;
use log::info;

/// Removes an item from current room and adds it to inventory.
///
/// # Errors
/// - if the player's room can't be resolved
pub fn take_handler(world: &mut SentinelWorld, view: &mut View, thing: Option<&str>) -> Result<()> {
    let Some(thing) = thing else {
        view.push(ViewItem::ActionFailure(InputError::MissingArgument("Take what?").to_string()));
        return Ok(());
    };

    let Some(item) = world.player_room_ref()?.find_item(world, thing) else {
        view.push(ViewItem::ActionFailure(InventoryError::NotHere(thing.to_string()).to_string()));
        return Ok(());
    };
    let (item_id, item_name) = (item.id.clone(), item.name.clone());

    match world.take(&item_id) {
        Ok(()) => view.push(ViewItem::ActionSuccess(format!("You took the {item_name}"))),
        Err(err) => {
            info!("{} failed to take '{item_id}': {err:?}", world.player.name());
            view.push(ViewItem::ActionFailure(err.to_string()));
        },
    }
    Ok(())
}

/// Drops an item from inventory in the current room.
pub fn drop_handler(world: &mut SentinelWorld, view: &mut View, thing: Option<&str>) {
    let Some(thing) = thing else {
        view.push(ViewItem::ActionFailure(InputError::MissingArgument("Drop what?").to_string()));
        return;
    };

    let Some(item) = world.player.inventory.find(&world.items, thing) else {
        view.push(ViewItem::ActionFailure(InventoryError::NotCarried(thing.to_string()).to_string()));
        return;
    };
    let (item_id, item_name) = (item.id.clone(), item.name.clone());

    match world.drop(&item_id) {
        Ok(()) => view.push(ViewItem::ActionSuccess(format!("You dropped the {item_name}"))),
        Err(err) => view.push(ViewItem::ActionFailure(err.to_string())),
    }
}

/// Lists the contents of the backpack.
pub fn inv_handler(world: &SentinelWorld, view: &mut View) {
    let items = world
        .player
        .inventory
        .ids()
        .iter()
        .filter_map(|id| world.items.get(id))
        .map(|item| item.name.clone())
        .collect();
    view.push(ViewItem::Inventory {
        items,
        capacity: world.player.inventory.capacity,
    });
}
