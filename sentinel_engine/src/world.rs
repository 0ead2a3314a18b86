//! Data structures representing the game world.
//!
//! This module defines [`SentinelWorld`] and related types used at runtime to
//! track the current state of the adventure. All state changes that touch more
//! than one entity (moving items, solving puzzles, reactions) go through methods
//! here so that checks happen before anything is mutated.

use crate::SENTINEL_VERSION;
use crate::error::{InventoryError, NavigationError};
use crate::npc::Npc;
use crate::puzzle::Puzzle;
use crate::reaction::{ReactionEffect, ReactionTable};
use crate::{Id, Item, ItemHolder, Player, Room};

use anyhow::{Context, Result, anyhow};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use variantly::Variantly;

/// Kinds of places where an item may be located.
/// Reward items that have not been handed out yet are `Nowhere`.
#[derive(Debug, Default, Clone, Serialize, Deserialize, Variantly, PartialEq, Eq)]
pub enum Location {
    Inventory,
    #[default]
    Nowhere,
    Room(Id),
}

/// Methods common to any object in the world.
pub trait WorldObject {
    fn id(&self) -> &str;
    fn name(&self) -> &str;
    fn description(&self) -> &str;
}

/// What happened when a puzzle was attempted through the world.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuzzleReport {
    pub success: bool,
    pub message: String,
    /// Room opened by this attempt, if it was still locked.
    pub unlocked: Option<Id>,
    /// Reward items handed out by this attempt and where each ended up.
    pub deposited: Vec<(Id, Location)>,
}

/// One keycard-gated door examined while using a credential.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredentialAttempt {
    pub direction: String,
    pub required_level: u32,
    pub unlocked: bool,
}

/// Complete state of the running game.
///
/// `SentinelWorld` contains every room, item, puzzle and NPC, the reaction
/// table, and the player character. It is created during loading and then
/// mutated throughout gameplay.
#[derive(Debug, Clone, Default)]
pub struct SentinelWorld {
    pub title: String,
    /// Content slug, used to keep save files of different worlds apart.
    pub slug: String,
    pub intro: String,
    pub help_text: String,
    pub victory_text: String,
    pub rooms: HashMap<Id, Room>,
    pub items: HashMap<Id, Item>,
    pub puzzles: HashMap<Id, Puzzle>,
    pub npcs: HashMap<Id, Npc>,
    pub reactions: ReactionTable,
    pub player: Player,
    /// Global win flag. Once raised it stays raised.
    pub won: bool,
    pub version: String,
}

impl SentinelWorld {
    /// Create a new empty world with a default player.
    pub fn new_empty() -> SentinelWorld {
        let world = Self {
            victory_text: "You win!".to_string(),
            version: SENTINEL_VERSION.to_string(),
            ..Self::default()
        };
        info!("new, empty 'SentinelWorld' created");
        world
    }

    /// Obtain a reference to the room the player occupies.
    /// # Errors
    /// - if the player's room id is not found
    pub fn player_room_ref(&self) -> Result<&Room> {
        self.rooms
            .get(&self.player.location)
            .ok_or_else(|| anyhow!("player's room ({}) not found in world", self.player.location))
    }

    /// Obtain a mutable reference to the room the player occupies.
    /// # Errors
    /// - if the player's room id is not found
    pub fn player_room_mut(&mut self) -> Result<&mut Room> {
        self.rooms
            .get_mut(&self.player.location)
            .ok_or_else(|| anyhow!("player's room ({}) not found in world", self.player.location))
    }

    /// Where an item currently is, derived from its containers.
    pub fn item_location(&self, item_id: &str) -> Location {
        if self.player.inventory.contains_item(item_id) {
            return Location::Inventory;
        }
        self.rooms
            .values()
            .find(|room| room.contains_item(item_id))
            .map_or(Location::Nowhere, |room| Location::Room(room.id.clone()))
    }

    fn item_name(&self, item_id: &str) -> String {
        self.items
            .get(item_id)
            .map_or_else(|| item_id.to_string(), |item| item.name.clone())
    }

    /// Check whether the player may enter a room. Only the lock matters here;
    /// `required_level` is reported so the caller can mention it.
    /// # Errors
    /// - `NavigationError::Locked` if the room is locked
    /// - `NavigationError::NoExit` if the room does not exist
    pub fn attempt_enter(&self, room_id: &str) -> Result<(), NavigationError> {
        let room = self
            .rooms
            .get(room_id)
            .ok_or_else(|| NavigationError::NoExit(room_id.to_string()))?;
        if room.locked {
            return Err(NavigationError::Locked {
                room: room.id.clone(),
                required_level: room.required_level,
            });
        }
        Ok(())
    }

    /// Move the player through the exit in `direction`, returning the new room id.
    /// # Errors
    /// - `NavigationError::NoExit` if there is no such exit
    /// - `NavigationError::Locked` if the room beyond is locked
    pub fn move_player(&mut self, direction: &str) -> Result<Id, NavigationError> {
        let target = self
            .rooms
            .get(&self.player.location)
            .and_then(|room| room.exit(direction))
            .cloned()
            .ok_or_else(|| NavigationError::NoExit(direction.to_string()))?;
        self.attempt_enter(&target)?;
        self.player.relocate(&target);
        Ok(target)
    }

    /// Move an item from the current room into the backpack.
    ///
    /// Every check happens before anything changes, so a refused take leaves the
    /// world exactly as it was.
    /// # Errors
    /// - `NotHere` if the item is not in the current room
    /// - `NotTakeable` if the item is fixed in place
    /// - `Full` if the backpack has no room
    pub fn take(&mut self, item_id: &str) -> Result<(), InventoryError> {
        let name = self.item_name(item_id);
        let in_room = self
            .rooms
            .get(&self.player.location)
            .is_some_and(|room| room.contains_item(item_id));
        if !in_room {
            return Err(InventoryError::NotHere(name));
        }
        if !self.items.get(item_id).is_some_and(|item| item.takeable) {
            return Err(InventoryError::NotTakeable(name));
        }
        if self.player.inventory.is_full() {
            return Err(InventoryError::Full {
                capacity: self.player.inventory.capacity,
            });
        }

        if let Some(room) = self.rooms.get_mut(&self.player.location) {
            room.remove_item(item_id);
        }
        self.player.inventory.try_add(item_id)?;
        info!("player took '{item_id}'");
        Ok(())
    }

    /// Move an item from the backpack into the current room.
    /// # Errors
    /// - `NotCarried` if the player does not hold the item
    /// - `NotHere` if the player's room cannot be found
    pub fn drop(&mut self, item_id: &str) -> Result<(), InventoryError> {
        let name = self.item_name(item_id);
        if !self.player.inventory.contains_item(item_id) {
            return Err(InventoryError::NotCarried(name));
        }
        let Some(room) = self.rooms.get_mut(&self.player.location) else {
            return Err(InventoryError::NotHere(name));
        };
        room.add_item(item_id);
        self.player.inventory.remove_item(item_id);
        info!("player dropped '{item_id}' in '{}'", self.player.location);
        Ok(())
    }

    /// Unlock a room by id. Returns true if it was locked before.
    /// # Errors
    /// - if the room id is unknown
    pub fn unlock_room(&mut self, room_id: &str) -> Result<bool> {
        let room = self
            .rooms
            .get_mut(room_id)
            .with_context(|| format!("cannot unlock unknown room '{room_id}'"))?;
        let was_locked = room.locked;
        room.unlock();
        Ok(was_locked)
    }

    /// Hand a reward to the player.
    ///
    /// Rewards already held somewhere stay where they are. Otherwise the item goes
    /// into the backpack, or onto the floor of the current room if the backpack is full.
    fn deposit_reward(&mut self, item_id: &str) -> Option<Location> {
        if !self.item_location(item_id).is_nowhere() {
            return None;
        }
        if self.player.inventory.try_add(item_id).is_ok() {
            info!("reward '{item_id}' added to inventory");
            return Some(Location::Inventory);
        }
        let room = self.rooms.get_mut(&self.player.location)?;
        room.add_item(item_id);
        warn!("backpack full: reward '{item_id}' left in '{}'", room.id);
        Some(Location::Room(room.id.clone()))
    }

    /// Attempt a puzzle and apply its consequences on success.
    /// # Errors
    /// - if the puzzle id, or the room it unlocks, is unknown
    pub fn resolve_puzzle(
        &mut self,
        puzzle_id: &str,
        attempt: Option<&str>,
        presented: Option<&[Id]>,
    ) -> Result<PuzzleReport> {
        let puzzle = self
            .puzzles
            .get_mut(puzzle_id)
            .with_context(|| format!("puzzle '{puzzle_id}' not found"))?;
        let outcome = puzzle.solve(attempt, presented);
        let unlocks = puzzle.unlocks.clone();

        let mut report = PuzzleReport {
            success: outcome.success,
            message: outcome.message,
            unlocked: None,
            deposited: Vec::new(),
        };
        if !outcome.success {
            return Ok(report);
        }

        if let Some(room_id) = unlocks
            && self.unlock_room(&room_id)?
        {
            report.unlocked = Some(room_id);
        }
        for reward in &outcome.rewards {
            if let Some(location) = self.deposit_reward(reward) {
                report.deposited.push((reward.clone(), location));
            }
        }
        Ok(report)
    }

    /// Present an item to an NPC.
    ///
    /// If a reaction exists for the pair, its effects are applied and its message
    /// is returned. `None` means the NPC doesn't react and the caller should fall back.
    pub fn use_item_with(&mut self, npc_id: &str, item_id: &str) -> Option<String> {
        let reaction = self.reactions.get(npc_id, item_id)?.clone();
        info!("reaction fired: npc '{npc_id}' shown '{item_id}'");
        for effect in &reaction.effects {
            match effect {
                ReactionEffect::Unlock { room } => {
                    if let Err(e) = self.unlock_room(room) {
                        warn!("reaction ({npc_id}, {item_id}): {e}");
                    }
                },
                ReactionEffect::Win => {
                    info!("win flag raised by reaction ({npc_id}, {item_id})");
                    self.won = true;
                },
            }
        }
        Some(reaction.message)
    }

    /// Swipe a credential at every keycard door next to the player.
    ///
    /// Only exits whose target is locked and has a card reader count. Returns one
    /// entry per such door; an empty list means there was nothing to use it on.
    /// # Errors
    /// - if the player's room or an exit target cannot be found
    pub fn use_credential(&mut self, level: u32) -> Result<Vec<CredentialAttempt>> {
        let exits: Vec<(String, Id)> = self
            .player_room_ref()?
            .exits
            .iter()
            .map(|(dir, id)| (dir.clone(), id.clone()))
            .collect();

        let mut attempts = Vec::new();
        for (direction, target_id) in exits {
            let target = self
                .rooms
                .get_mut(&target_id)
                .with_context(|| format!("exit '{direction}' leads to unknown room '{target_id}'"))?;
            if !target.locked || target.required_level == 0 {
                continue;
            }
            let unlocked = level >= target.required_level;
            if unlocked {
                target.unlock();
            }
            attempts.push(CredentialAttempt {
                direction,
                required_level: target.required_level,
                unlocked,
            });
        }
        Ok(attempts)
    }

    /// First unsolved item-mode puzzle in the player's room.
    pub fn active_item_puzzle(&self) -> Option<&Puzzle> {
        self.rooms
            .get(&self.player.location)?
            .puzzles
            .iter()
            .filter_map(|id| self.puzzles.get(id))
            .find(|puzzle| puzzle.needs_items() && !puzzle.solved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::puzzle::Challenge;
    use crate::reaction::Reaction;

    /// lobby --east--> corridor(level 1) --east--> lab(level 2); lobby --south--> tunnel(locked)
    fn test_world() -> SentinelWorld {
        let mut world = SentinelWorld::new_empty();
        let mut lobby = Room::new("lobby", "Lobby", "A lobby", false, 0);
        lobby.add_exit("east", "corridor");
        lobby.add_exit("south", "tunnel");
        let mut corridor = Room::new("corridor", "Corridor", "A corridor", false, 1);
        corridor.add_exit("west", "lobby");
        corridor.add_exit("east", "lab");
        let lab = Room::new("lab", "Lab", "A lab", false, 2);
        let tunnel = Room::new("tunnel", "Tunnel", "A tunnel", true, 0);
        for room in [lobby, corridor, lab, tunnel] {
            world.rooms.insert(room.id.clone(), room);
        }

        let mut card = Item::new("basic_keycard", "basic-keycard", "A keycard");
        card.credential_level = Some(1);
        let mut statue = Item::new("statue", "statue", "Heavy");
        statue.takeable = false;
        for item in [card, statue, Item::new("fan", "fan", "A fan"), Item::new("gem", "gem", "Shiny")] {
            world.items.insert(item.id.clone(), item);
        }
        if let Some(lobby) = world.rooms.get_mut("lobby") {
            lobby.add_item("basic_keycard");
            lobby.add_item("statue");
            lobby.add_item("fan");
        }
        world.player.location = "lobby".into();
        world
    }

    fn add_phone_puzzle(world: &mut SentinelWorld) {
        world.puzzles.insert(
            "phone".into(),
            Puzzle {
                id: "phone".into(),
                name: "Phone".into(),
                description: "Locked phone".into(),
                success_message: "Unlocked!".into(),
                challenge: Challenge::Password("xitter".into()),
                unlocks: Some("tunnel".into()),
                rewards: vec!["gem".into()],
                solved: false,
            },
        );
        if let Some(lobby) = world.rooms.get_mut("lobby") {
            lobby.puzzles.push("phone".into());
        }
    }

    #[test]
    fn new_empty_world_has_version_and_no_win() {
        let world = SentinelWorld::new_empty();
        assert_eq!(world.version, SENTINEL_VERSION);
        assert!(!world.won);
        assert!(world.rooms.is_empty());
    }

    #[test]
    fn player_room_ref_errors_for_unknown_room() {
        let mut world = test_world();
        assert_eq!(world.player_room_ref().unwrap().id, "lobby");
        world.player.location = "void".into();
        assert!(world.player_room_ref().is_err());
        assert!(world.player_room_mut().is_err());
    }

    #[test]
    fn locked_room_refuses_entry_and_player_stays() {
        let mut world = test_world();
        let err = world.move_player("east").unwrap_err();
        assert_eq!(
            err,
            NavigationError::Locked {
                room: "corridor".into(),
                required_level: 1
            }
        );
        assert_eq!(world.player.location, "lobby");
        assert!(matches!(world.move_player("up"), Err(NavigationError::NoExit(_))));
    }

    #[test]
    fn take_and_drop_round_trip() {
        let mut world = test_world();
        world.take("fan").unwrap();
        assert_eq!(world.item_location("fan"), Location::Inventory);
        world.drop("fan").unwrap();
        assert_eq!(world.item_location("fan"), Location::Room("lobby".into()));
        assert!(!world.player.inventory.contains_item("fan"));
    }

    #[test]
    fn refused_take_changes_nothing() {
        let mut world = test_world();
        assert_eq!(world.take("statue"), Err(InventoryError::NotTakeable("statue".into())));
        assert!(world.rooms["lobby"].contains_item("statue"));
        assert!(world.player.inventory.is_empty());

        assert_eq!(world.take("gem"), Err(InventoryError::NotHere("gem".into())));

        world.player.inventory.capacity = 1;
        world.take("fan").unwrap();
        assert_eq!(world.take("basic_keycard"), Err(InventoryError::Full { capacity: 1 }));
        assert!(world.rooms["lobby"].contains_item("basic_keycard"));
        assert_eq!(world.player.inventory.len(), 1);
    }

    #[test]
    fn drop_of_uncarried_item_fails() {
        let mut world = test_world();
        assert_eq!(world.drop("fan"), Err(InventoryError::NotCarried("fan".into())));
        assert!(world.rooms["lobby"].contains_item("fan"));
    }

    #[test]
    fn credential_opens_only_doors_it_meets() {
        let mut world = test_world();
        let attempts = world.use_credential(1).unwrap();
        assert_eq!(attempts.len(), 1, "tunnel has no reader and is skipped");
        assert!(attempts[0].unlocked);
        assert!(!world.rooms["corridor"].locked);
        assert!(world.rooms["tunnel"].locked);

        world.move_player("east").unwrap();
        let attempts = world.use_credential(1).unwrap();
        assert_eq!(
            attempts,
            vec![CredentialAttempt {
                direction: "east".into(),
                required_level: 2,
                unlocked: false
            }]
        );
        assert!(world.rooms["lab"].locked);
    }

    #[test]
    fn solved_puzzle_unlocks_and_rewards_once() {
        let mut world = test_world();
        add_phone_puzzle(&mut world);

        let wrong = world.resolve_puzzle("phone", Some("twitter"), None).unwrap();
        assert!(!wrong.success);
        assert!(world.rooms["tunnel"].locked);

        let report = world.resolve_puzzle("phone", Some("xitter"), None).unwrap();
        assert!(report.success);
        assert_eq!(report.unlocked, Some("tunnel".into()));
        assert_eq!(report.deposited, vec![("gem".into(), Location::Inventory)]);
        assert!(!world.rooms["tunnel"].locked);

        let again = world.resolve_puzzle("phone", Some("xitter"), None).unwrap();
        assert!(again.success);
        assert_eq!(again.unlocked, None);
        assert!(again.deposited.is_empty());
        assert_eq!(world.player.inventory.len(), 1);
    }

    #[test]
    fn reward_falls_to_floor_when_backpack_full() {
        let mut world = test_world();
        add_phone_puzzle(&mut world);
        world.player.inventory.capacity = 1;
        world.take("fan").unwrap();

        let report = world.resolve_puzzle("phone", Some("xitter"), None).unwrap();
        assert_eq!(report.deposited, vec![("gem".into(), Location::Room("lobby".into()))]);
        assert_eq!(world.item_location("gem"), Location::Room("lobby".into()));
    }

    #[test]
    fn reactions_apply_effects() {
        let mut world = test_world();
        world.reactions.insert(
            "sam",
            "fan",
            Reaction {
                message: "Thanks!".into(),
                effects: vec![ReactionEffect::Unlock { room: "tunnel".into() }, ReactionEffect::Win],
            },
        );
        assert_eq!(world.use_item_with("sam", "gem"), None);
        assert!(!world.won);
        assert_eq!(world.use_item_with("sam", "fan"), Some("Thanks!".to_string()));
        assert!(world.won);
        assert!(!world.rooms["tunnel"].locked);
    }

    #[test]
    fn active_item_puzzle_skips_solved_ones() {
        let mut world = test_world();
        world.puzzles.insert(
            "cooling".into(),
            Puzzle {
                id: "cooling".into(),
                name: "Cooling".into(),
                description: "Hot".into(),
                success_message: "Cool".into(),
                challenge: Challenge::Items(vec!["fan".into()]),
                unlocks: None,
                rewards: Vec::new(),
                solved: false,
            },
        );
        if let Some(lobby) = world.rooms.get_mut("lobby") {
            lobby.puzzles.push("cooling".into());
        }
        assert_eq!(world.active_item_puzzle().map(|p| p.id.as_str()), Some("cooling"));
        if let Some(p) = world.puzzles.get_mut("cooling") {
            p.solved = true;
        }
        assert!(world.active_item_puzzle().is_none());
    }
}
