//! `repl::item` module
//!
//! The `use` command. What using an item does depends on where the player is
//! standing, checked in this order:
//!
//! 1. an unsolved item puzzle in the room gets the whole backpack presented to it
//! 2. a keycard is swiped at every card-reader door next to the player
//! 3. the first NPC in the room is shown the item
//! 4. otherwise the item's own usability decides

use crate::error::{InputError, InventoryError};
use crate::repl::puzzle::report_puzzle;
use crate::{Item, SentinelWorld, View, ViewItem, WorldObject};

use anyhow::{Context, Result};
use log::info;

/// Use an item from the backpack.
///
/// # Errors
/// - if the player's room, a puzzle, or an exit target can't be resolved
pub fn use_handler(world: &mut SentinelWorld, view: &mut View, thing: Option<&str>) -> Result<()> {
    let Some(thing) = thing else {
        view.push(ViewItem::ActionFailure(InputError::MissingArgument("Use what?").to_string()));
        return Ok(());
    };
    let Some(item) = world.player.inventory.find(&world.items, thing).cloned() else {
        view.push(ViewItem::ActionFailure(InventoryError::NotCarried(thing.to_string()).to_string()));
        return Ok(());
    };
    info!("{} uses the {} ({})", world.player.name(), item.name, item.id);

    if let Some(puzzle_id) = world.active_item_puzzle().map(|puzzle| puzzle.id.clone()) {
        let presented = world.player.inventory.ids().to_vec();
        let report = world
            .resolve_puzzle(&puzzle_id, None, Some(&presented))
            .with_context(|| format!("presenting items to '{puzzle_id}'"))?;
        report_puzzle(world, view, &report);
        return Ok(());
    }

    if item.is_credential() && swipe_credential(world, view, &item)? {
        return Ok(());
    }

    if let Some(npc_id) = world.player_room_ref()?.npcs.first().cloned() {
        let npc_name = world
            .npcs
            .get(&npc_id)
            .with_context(|| format!("npc '{npc_id}' not found"))?
            .name
            .clone();
        view.push(ViewItem::ActionSuccess(format!("You show the {} to {npc_name}.", item.name)));
        if let Some(message) = world.use_item_with(&npc_id, &item.id) {
            view.push(ViewItem::NpcReaction {
                speaker: npc_name,
                message,
            });
            return Ok(());
        }
    }

    generic_use(view, &item);
    Ok(())
}

/// Try a keycard on every locked card-reader door here. Returns true if there was at least one.
fn swipe_credential(world: &mut SentinelWorld, view: &mut View, item: &Item) -> Result<bool> {
    let level = item.access_level();
    let attempts = world.use_credential(level)?;
    for attempt in &attempts {
        if attempt.unlocked {
            view.push(ViewItem::ActionSuccess(format!(
                "You use the level {level} keycard to unlock the {} door.",
                attempt.direction
            )));
        } else {
            view.push(ViewItem::ActionFailure(format!(
                "This keycard (level {level}) isn't high enough level for the {} door (requires level {})",
                attempt.direction, attempt.required_level
            )));
        }
    }
    Ok(!attempts.is_empty())
}

fn generic_use(view: &mut View, item: &Item) {
    if item.is_credential() {
        view.push(ViewItem::ActionFailure(
            "There are no doors nearby that need a keycard.".to_string(),
        ));
    } else if item.use_item() {
        view.push(ViewItem::ActionSuccess(format!("You used the {}", item.name)));
    } else {
        view.push(ViewItem::ActionFailure(format!("You can't use the {}", item.name)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::npc::Npc;
    use crate::puzzle::{Challenge, Puzzle};
    use crate::reaction::{Reaction, ReactionEffect};
    use crate::{ItemHolder, Room};

    fn keycard(id: &str, level: u32) -> Item {
        let mut card = Item::new(id, id.replace('_', "-"), "A keycard");
        card.credential_level = Some(level);
        card
    }

    /// lobby --east--> corridor(level 1), lobby --north--> vault(level 3), lobby --south--> tunnel(locked, no reader)
    fn world() -> SentinelWorld {
        let mut world = SentinelWorld::new_empty();
        let mut lobby = Room::new("lobby", "Lobby", "A lobby", false, 0);
        lobby.add_exit("east", "corridor");
        lobby.add_exit("north", "vault");
        lobby.add_exit("south", "tunnel");
        world.rooms.insert("lobby".into(), lobby);
        world
            .rooms
            .insert("corridor".into(), Room::new("corridor", "Corridor", "White", false, 1));
        world.rooms.insert("vault".into(), Room::new("vault", "Vault", "Cash", false, 3));
        world.rooms.insert("tunnel".into(), Room::new("tunnel", "Tunnel", "Dark", true, 0));
        world.rooms.insert("closet".into(), Room::new("closet", "Closet", "Small", false, 0));
        world.items.insert("basic_keycard".into(), keycard("basic_keycard", 1));
        world.items.insert("fan".into(), Item::new("fan", "fan", "A fan"));
        let mut rock = Item::new("rock", "rock", "Just a rock");
        rock.usable = false;
        world.items.insert("rock".into(), rock);
        world.player.location = "lobby".into();
        for id in ["basic_keycard", "fan", "rock"] {
            world.player.inventory.add_item(id);
        }
        world
    }

    #[test]
    fn keycard_opens_doors_it_can_and_reports_the_rest() {
        let mut world = world();
        let mut view = View::new();
        use_handler(&mut world, &mut view, Some("basic-keycard")).unwrap();
        assert_eq!(
            view.transcript(),
            vec![
                "You use the level 1 keycard to unlock the east door.",
                "This keycard (level 1) isn't high enough level for the north door (requires level 3)",
            ]
        );
        assert!(!world.rooms["corridor"].locked);
        assert!(world.rooms["vault"].locked);
        assert!(world.rooms["tunnel"].locked);
    }

    #[test]
    fn keycard_with_no_readers_nearby() {
        let mut world = world();
        world.player.location = "closet".into();
        let mut view = View::new();
        use_handler(&mut world, &mut view, Some("basic-keycard")).unwrap();
        assert_eq!(view.transcript(), vec!["There are no doors nearby that need a keycard."]);
    }

    #[test]
    fn plain_items_fall_back_to_usability() {
        let mut world = world();
        world.player.location = "closet".into();
        let mut view = View::new();
        use_handler(&mut world, &mut view, Some("fan")).unwrap();
        use_handler(&mut world, &mut view, Some("rock")).unwrap();
        use_handler(&mut world, &mut view, Some("banana")).unwrap();
        use_handler(&mut world, &mut view, None).unwrap();
        assert_eq!(
            view.transcript(),
            vec!["You used the fan", "You can't use the rock", "You don't have a banana", "Use what?"]
        );
    }

    #[test]
    fn item_puzzle_takes_priority_over_keycard() {
        let mut world = world();
        world.puzzles.insert(
            "gpu_cooling".into(),
            Puzzle {
                id: "gpu_cooling".into(),
                name: "GPU Cooling".into(),
                description: "Hot".into(),
                success_message: "The GPUs cool down".into(),
                challenge: Challenge::Items(vec!["fan".into()]),
                unlocks: Some("tunnel".into()),
                rewards: Vec::new(),
                solved: false,
            },
        );
        world.rooms.get_mut("lobby").unwrap().puzzles.push("gpu_cooling".into());
        let mut view = View::new();
        use_handler(&mut world, &mut view, Some("basic-keycard")).unwrap();
        assert_eq!(view.transcript(), vec!["The GPUs cool down"]);
        assert!(!world.rooms["tunnel"].locked);
        assert!(world.rooms["corridor"].locked, "keycard tier must not run");

        // once solved, the keycard reaches the doors again
        view.reset();
        use_handler(&mut world, &mut view, Some("basic-keycard")).unwrap();
        assert!(!world.rooms["corridor"].locked);
    }

    #[test]
    fn npc_reaction_fires_and_can_win() {
        let mut world = world();
        world.player.location = "closet".into();
        world.rooms.get_mut("closet").unwrap().npcs.push("terminal".into());
        world.npcs.insert(
            "terminal".into(),
            Npc::new("terminal", "Truth Terminal", "Laughing", vec!["hi".into()]),
        );
        world.reactions.insert(
            "terminal",
            "fan",
            Reaction {
                message: "NOOO!".into(),
                effects: vec![ReactionEffect::Win],
            },
        );
        let mut view = View::new();
        use_handler(&mut world, &mut view, Some("rock")).unwrap();
        assert_eq!(
            view.transcript(),
            vec!["You show the rock to Truth Terminal.", "You can't use the rock"]
        );
        assert!(!world.won);

        view.reset();
        use_handler(&mut world, &mut view, Some("fan")).unwrap();
        assert_eq!(view.transcript(), vec!["You show the fan to Truth Terminal.", "NOOO!"]);
        assert!(world.won);
    }
}
