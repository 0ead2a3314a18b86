//! Player -- the adventurer and their backpack.
use crate::error::InventoryError;
use crate::{Id, Item, ItemHolder, WorldObject};

use log::info;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Default number of items the backpack holds.
pub const DEFAULT_CAPACITY: usize = 5;

/// Ordered, bounded set of carried item ids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inventory {
    pub capacity: usize,
    contents: Vec<Id>,
}

impl Default for Inventory {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

impl Inventory {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            contents: Vec::new(),
        }
    }

    /// Add an item, refusing if the backpack is full. Adding an item already
    /// carried is a no-op.
    /// # Errors
    /// - `InventoryError::Full` if there is no room left
    pub fn try_add(&mut self, item_id: &str) -> Result<(), InventoryError> {
        if self.contains_item(item_id) {
            return Ok(());
        }
        if self.is_full() {
            return Err(InventoryError::Full {
                capacity: self.capacity,
            });
        }
        self.contents.push(item_id.to_string());
        Ok(())
    }

    pub fn is_full(&self) -> bool {
        self.contents.len() >= self.capacity
    }

    pub fn len(&self) -> usize {
        self.contents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contents.is_empty()
    }

    /// Carried ids in the order they were picked up.
    pub fn ids(&self) -> &[Id] {
        &self.contents
    }

    /// Find a carried item by display name (case-insensitive).
    pub fn find<'a>(&self, items: &'a HashMap<Id, Item>, name: &str) -> Option<&'a Item> {
        self.contents
            .iter()
            .filter_map(|id| items.get(id))
            .find(|item| item.matches_name(name))
    }

    pub fn clear(&mut self) {
        self.contents.clear();
    }
}

impl ItemHolder for Inventory {
    /// Unchecked insert; callers that care about capacity use [`Inventory::try_add`].
    fn add_item(&mut self, item_id: &str) {
        if !self.contains_item(item_id) {
            self.contents.push(item_id.to_string());
        }
    }

    fn remove_item(&mut self, item_id: &str) -> bool {
        let before = self.contents.len();
        self.contents.retain(|id| id != item_id);
        before != self.contents.len()
    }

    fn contains_item(&self, item_id: &str) -> bool {
        self.contents.iter().any(|id| id == item_id)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub description: String,
    /// Id of the room the player is standing in.
    pub location: Id,
    pub inventory: Inventory,
}

impl Default for Player {
    fn default() -> Player {
        Self {
            name: "default".into(),
            description: "default".into(),
            location: Id::new(),
            inventory: Inventory::default(),
        }
    }
}

impl WorldObject for Player {
    fn id(&self) -> &str {
        "player"
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }
}

impl Player {
    /// Move the player without any lock checks.
    pub fn relocate(&mut self, room_id: &str) {
        info!("player moved from '{}' to '{}'", self.location, room_id);
        self.location = room_id.to_string();
    }
}
