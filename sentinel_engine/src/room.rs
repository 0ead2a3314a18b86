//! Room definitions and spatial utilities.
//!
//! Any location a player or NPC can inhabit is represented as a "Room", whether it's a lobby
//! or a bunker. Rooms own their exits and list the ids of the items, puzzles, and NPCs
//! currently inside them.

use crate::{
    Id, Item, ItemHolder, View, ViewItem, WorldObject,
    view::{ExitLine, NpcLine},
    world::SentinelWorld,
};

use anyhow::{Result, anyhow};
use log::info;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Any visitable location in the game world.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub id: Id,
    pub name: String,
    pub description: String,
    /// Direction (lowercase) to target room id.
    pub exits: BTreeMap<String, Id>,
    pub items: Vec<Id>,
    pub puzzles: Vec<Id>,
    pub npcs: Vec<Id>,
    pub locked: bool,
    /// Minimum credential level that opens this room with a keycard. 0 means no reader.
    pub required_level: u32,
    /// True if the room started out locked; only these rooms have lock state worth saving.
    pub lockable: bool,
}

impl WorldObject for Room {
    fn id(&self) -> &str {
        &self.id
    }
    fn name(&self) -> &str {
        &self.name
    }
    fn description(&self) -> &str {
        &self.description
    }
}

impl ItemHolder for Room {
    fn add_item(&mut self, item_id: &str) {
        if !self.contains_item(item_id) {
            self.items.push(item_id.to_string());
        }
    }

    fn remove_item(&mut self, item_id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|id| id != item_id);
        before != self.items.len()
    }

    fn contains_item(&self, item_id: &str) -> bool {
        self.items.iter().any(|id| id == item_id)
    }
}

impl Room {
    /// Create a room. A non-zero `required_level` always starts the room locked.
    pub fn new(
        id: impl Into<Id>,
        name: impl Into<String>,
        description: impl Into<String>,
        locked: bool,
        required_level: u32,
    ) -> Self {
        let locked = locked || required_level > 0;
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            exits: BTreeMap::new(),
            items: Vec::new(),
            puzzles: Vec::new(),
            npcs: Vec::new(),
            locked,
            required_level,
            lockable: locked,
        }
    }

    /// Add or replace the exit in `direction`.
    pub fn add_exit(&mut self, direction: &str, target: impl Into<Id>) {
        self.exits.insert(direction.to_lowercase(), target.into());
    }

    /// Resolve a direction to the id of the room it leads to.
    pub fn exit(&self, direction: &str) -> Option<&Id> {
        self.exits.get(&direction.trim().to_lowercase())
    }

    /// Open the room. Unlocking is one-way; nothing ever relocks a room during play.
    pub fn unlock(&mut self) {
        if self.locked {
            info!("room '{}' unlocked", self.id);
        }
        self.locked = false;
    }

    /// Find an item lying in this room by display name.
    pub fn find_item<'a>(&self, world: &'a SentinelWorld, name: &str) -> Option<&'a Item> {
        self.items
            .iter()
            .filter_map(|id| world.items.get(id))
            .find(|item| item.matches_name(name))
    }

    /// Pushes the long description: text, exits (with lock details), and who is here.
    ///
    /// # Errors
    /// Returns an error if an exit or NPC id cannot be resolved.
    pub fn show(&self, world: &SentinelWorld, view: &mut View) -> Result<()> {
        view.push(ViewItem::RoomDescription {
            name: self.name.clone(),
            description: self.description.clone(),
        });
        self.show_exits(world, view)?;
        self.show_npcs(world, view)
    }

    /// Displays list of available exits from the Room.
    ///
    /// # Errors
    /// Returns an error if a referenced destination room cannot be found.
    pub fn show_exits(&self, world: &SentinelWorld, view: &mut View) -> Result<()> {
        let mut exit_lines = Vec::new();
        for (direction, target_id) in &self.exits {
            let target = world.rooms.get(target_id).ok_or_else(|| {
                anyhow!(
                    "Room({}) not found ({} exit from Room({}))",
                    target_id,
                    direction,
                    self.id
                )
            })?;
            exit_lines.push(ExitLine {
                direction: direction.clone(),
                destination: target.name.clone(),
                locked: target.locked,
                required_level: target.required_level,
            });
        }
        view.push(ViewItem::RoomExits(exit_lines));
        Ok(())
    }

    /// Displays list of NPCs present in the `Room`.
    ///
    /// # Errors
    /// Returns an error if an NPC id listed here is unknown.
    pub fn show_npcs(&self, world: &SentinelWorld, view: &mut View) -> Result<()> {
        if self.npcs.is_empty() {
            return Ok(());
        }
        let npc_lines = self
            .npcs
            .iter()
            .map(|npc_id| {
                world
                    .npcs
                    .get(npc_id)
                    .map(|npc| NpcLine {
                        name: npc.name.clone(),
                        description: npc.description.clone(),
                    })
                    .ok_or_else(|| anyhow!("Npc({npc_id}) listed in Room({}) not found", self.id))
            })
            .collect::<Result<Vec<_>>>()?;
        view.push(ViewItem::RoomNpcs(npc_lines));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::npc::Npc;

    fn test_world() -> SentinelWorld {
        let mut world = SentinelWorld::new_empty();
        let mut lobby = Room::new("lobby", "Lobby", "A lobby", false, 0);
        lobby.add_exit("east", "corridor");
        lobby.add_exit("south", "tunnel");
        lobby.npcs.push("guard".into());
        world.rooms.insert("lobby".into(), lobby);
        world
            .rooms
            .insert("corridor".into(), Room::new("corridor", "Corridor", "A corridor", false, 1));
        world
            .rooms
            .insert("tunnel".into(), Room::new("tunnel", "Tunnel", "A tunnel", true, 0));
        world.npcs.insert(
            "guard".into(),
            Npc::new("guard", "Guard", "bored", vec!["Halt.".into()]),
        );
        world
    }

    #[test]
    fn required_level_forces_locked() {
        let room = Room::new("lab", "Lab", "A lab", false, 2);
        assert!(room.locked);
        assert!(room.lockable);
        let open = Room::new("hall", "Hall", "A hall", false, 0);
        assert!(!open.locked);
        assert!(!open.lockable);
    }

    #[test]
    fn add_exit_overwrites_and_matching_ignores_case() {
        let mut room = Room::new("hall", "Hall", "A hall", false, 0);
        room.add_exit("North", "a");
        room.add_exit("north", "b");
        assert_eq!(room.exits.len(), 1);
        assert_eq!(room.exit("NORTH"), Some(&"b".to_string()));
        assert_eq!(room.exit("west"), None);
    }

    #[test]
    fn unlock_is_one_way() {
        let mut room = Room::new("lab", "Lab", "A lab", false, 2);
        room.unlock();
        room.unlock();
        assert!(!room.locked);
        assert_eq!(room.required_level, 2);
    }

    #[test]
    fn item_holder_never_duplicates() {
        let mut room = Room::new("hall", "Hall", "A hall", false, 0);
        room.add_item("fan");
        room.add_item("fan");
        assert_eq!(room.items.len(), 1);
        assert!(room.remove_item("fan"));
        assert!(!room.contains_item("fan"));
    }

    #[test]
    fn show_lists_exits_with_lock_details() {
        let world = test_world();
        let mut view = View::new();
        world.rooms["lobby"].show(&world, &mut view).unwrap();
        let exits = view
            .items
            .iter()
            .find_map(|e| match &e.view_item {
                ViewItem::RoomExits(lines) => Some(lines.clone()),
                _ => None,
            })
            .unwrap();
        assert_eq!(exits.len(), 2);
        assert_eq!(exits[0].direction, "east");
        assert!(exits[0].locked);
        assert_eq!(exits[0].required_level, 1);
        assert_eq!(exits[1].direction, "south");
        assert_eq!(exits[1].required_level, 0);
        assert!(view.items.iter().any(|e| e.view_item.is_room_npcs()));
    }

    #[test]
    fn show_fails_on_dangling_exit() {
        let mut world = test_world();
        if let Some(lobby) = world.rooms.get_mut("lobby") {
            lobby.add_exit("up", "attic");
        }
        let mut view = View::new();
        assert!(world.rooms["lobby"].show(&world, &mut view).is_err());
    }
}
