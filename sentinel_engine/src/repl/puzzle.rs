//! `repl::puzzle` module
//!
//! Handlers for searching a room and answering its puzzles.

use crate::error::PuzzleError;
use crate::view::ContentLine;
use crate::world::{Location, PuzzleReport};
use crate::{SentinelWorld, View, ViewItem, WorldObject};

use anyhow::{Context, Result};
use log::info;

/// List the items and puzzles in the current room.
///
/// # Errors
/// - if the player's room can't be resolved
pub fn search_handler(world: &SentinelWorld, view: &mut View) -> Result<()> {
    let room = world.player_room_ref()?;
    let items = room
        .items
        .iter()
        .filter_map(|id| world.items.get(id))
        .map(|item| ContentLine {
            name: item.name.clone(),
            description: item.description.clone(),
        })
        .collect();
    let puzzles = room
        .puzzles
        .iter()
        .filter_map(|id| world.puzzles.get(id))
        .map(|puzzle| ContentLine {
            name: puzzle.name.clone(),
            description: puzzle.description.clone(),
        })
        .collect();
    view.push(ViewItem::RoomItems(items));
    view.push(ViewItem::RoomPuzzles(puzzles));
    Ok(())
}

/// Answer the room's password puzzle.
///
/// # Errors
/// - if the player's room or the puzzle it lists can't be resolved
pub fn solve_handler(world: &mut SentinelWorld, view: &mut View, answer: Option<&str>) -> Result<()> {
    let room = world.player_room_ref()?;
    if room.puzzles.is_empty() {
        view.push(ViewItem::ActionFailure(PuzzleError::NoPuzzle.to_string()));
        return Ok(());
    }
    let password_puzzle = room
        .puzzles
        .iter()
        .filter_map(|id| world.puzzles.get(id))
        .find(|puzzle| !puzzle.needs_items())
        .map(|puzzle| puzzle.id.clone());
    let Some(puzzle_id) = password_puzzle else {
        view.push(ViewItem::ActionFailure(PuzzleError::RequiresItems.to_string()));
        return Ok(());
    };
    let Some(answer) = answer else {
        view.push(ViewItem::ActionFailure(PuzzleError::MissingAnswer.to_string()));
        return Ok(());
    };

    let report = world
        .resolve_puzzle(&puzzle_id, Some(answer), None)
        .with_context(|| format!("solving '{puzzle_id}'"))?;
    report_puzzle(world, view, &report);
    Ok(())
}

/// Push the result of a puzzle attempt, noting any reward that didn't fit in the backpack.
pub(crate) fn report_puzzle(world: &SentinelWorld, view: &mut View, report: &PuzzleReport) {
    if !report.success {
        view.push(ViewItem::ActionFailure(report.message.clone()));
        return;
    }
    view.push(ViewItem::ActionSuccess(report.message.clone()));
    if let Some(room_id) = &report.unlocked {
        info!("{} opened '{room_id}' by solving a puzzle", world.player.name());
    }
    for (item_id, location) in &report.deposited {
        match location {
            Location::Room(_) => {
                let name = world.items.get(item_id).map_or(item_id.as_str(), |item| item.name.as_str());
                view.push(ViewItem::TriggeredEvent(format!(
                    "Your backpack is full, so the {name} is left here."
                )));
            },
            Location::Inventory => info!("reward '{item_id}' went into the backpack"),
            Location::Nowhere => {},
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::puzzle::{Challenge, Puzzle};
    use crate::{Item, ItemHolder, Room};

    fn world() -> SentinelWorld {
        let mut world = SentinelWorld::new_empty();
        let mut den = Room::new("roon_den", "Den", "Monitors", false, 0);
        den.puzzles.push("roons_phone".into());
        den.add_item("cans");
        let mut gpu = Room::new("gpu_cluster", "GPUs", "Hot", false, 0);
        gpu.puzzles.push("gpu_cooling".into());
        world.rooms.insert("roon_den".into(), den);
        world.rooms.insert("gpu_cluster".into(), gpu);
        world.rooms.insert("lab".into(), Room::new("lab", "Lab", "A lab", false, 2));
        world.rooms.insert("hall".into(), Room::new("hall", "Hall", "Bare", false, 0));
        world.items.insert("cans".into(), Item::new("cans", "cans", "Empty Red Bull"));
        world.items.insert(
            "scientific_keycard".into(),
            Item::new("scientific_keycard", "scientific-keycard", "Level 2"),
        );
        world.puzzles.insert(
            "roons_phone".into(),
            Puzzle {
                id: "roons_phone".into(),
                name: "Roon's Phone".into(),
                description: "Locked phone".into(),
                success_message: "Phone unlocked!".into(),
                challenge: Challenge::Password("xitter".into()),
                unlocks: Some("lab".into()),
                rewards: vec!["scientific_keycard".into()],
                solved: false,
            },
        );
        world.puzzles.insert(
            "gpu_cooling".into(),
            Puzzle {
                id: "gpu_cooling".into(),
                name: "GPU Cooling".into(),
                description: "Overheating".into(),
                success_message: "Cool.".into(),
                challenge: Challenge::Items(vec!["fan".into()]),
                unlocks: None,
                rewards: Vec::new(),
                solved: false,
            },
        );
        world.player.location = "roon_den".into();
        world
    }

    #[test]
    fn search_lists_items_and_puzzles() {
        let world = world();
        let mut view = View::new();
        search_handler(&world, &mut view).unwrap();
        assert_eq!(view.transcript(), vec!["cans, Empty Red Bull", "Roon's Phone, Locked phone"]);
    }

    #[test]
    fn search_of_bare_room() {
        let mut world = world();
        world.player.location = "hall".into();
        let mut view = View::new();
        search_handler(&world, &mut view).unwrap();
        assert_eq!(
            view.transcript(),
            vec!["You see no items in this room", "There are no puzzles in this room"]
        );
    }

    #[test]
    fn wrong_then_right_password() {
        let mut world = world();
        let mut view = View::new();
        solve_handler(&mut world, &mut view, Some("twitter")).unwrap();
        assert_eq!(view.transcript(), vec!["That's not correct."]);
        assert!(world.rooms["lab"].locked);

        view.reset();
        solve_handler(&mut world, &mut view, Some("xitter")).unwrap();
        assert_eq!(view.transcript(), vec!["Phone unlocked!"]);
        assert!(!world.rooms["lab"].locked);
        assert!(world.player.inventory.contains_item("scientific_keycard"));
    }

    #[test]
    fn full_backpack_leaves_reward_on_floor() {
        let mut world = world();
        world.player.inventory.capacity = 0;
        let mut view = View::new();
        solve_handler(&mut world, &mut view, Some("xitter")).unwrap();
        assert!(world.rooms["roon_den"].contains_item("scientific_keycard"));
        assert_eq!(view.transcript().len(), 2);
    }

    #[test]
    fn solve_prompts() {
        let mut world = world();
        let mut view = View::new();
        solve_handler(&mut world, &mut view, None).unwrap();
        world.player.location = "gpu_cluster".into();
        solve_handler(&mut world, &mut view, Some("fan")).unwrap();
        world.player.location = "hall".into();
        solve_handler(&mut world, &mut view, Some("anything")).unwrap();
        assert_eq!(
            view.transcript(),
            vec![
                "What's your solution?",
                "This puzzle requires using items. Try using an item instead.",
                "There's no puzzle to solve here.",
            ]
        );
    }
}
