//! Item types and related helpers.
//!
//! Items are plain values. Where an item currently is (a room, the backpack,
//! or nowhere yet) is tracked by its container, never by the item itself.

use crate::{Id, WorldObject};

use serde::{Deserialize, Serialize};

/// Implemented by anything that can hold items (rooms, the player's backpack).
pub trait ItemHolder {
    fn add_item(&mut self, item_id: &str);
    /// Remove an item, returning true if it was held.
    fn remove_item(&mut self, item_id: &str) -> bool;
    fn contains_item(&self, item_id: &str) -> bool;
}

/// Anything the player can find, carry, or use.
///
/// An item with a `credential_level` is a keycard: using it opens adjacent
/// rooms whose required level it meets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// The stable id of this item.
    pub id: Id,
    /// The display name, also what the player types to refer to it.
    pub name: String,
    /// A general description of the item.
    pub description: String,
    /// Whether the item can be picked up.
    pub takeable: bool,
    /// Whether `use` on its own does anything.
    pub usable: bool,
    /// Access level if this item is a credential.
    pub credential_level: Option<u32>,
}

impl WorldObject for Item {
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

impl Item {
    /// Create a plain, takeable, usable item.
    pub fn new(id: impl Into<Id>, name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            takeable: true,
            usable: true,
            credential_level: None,
        }
    }

    /// Returns true if the item can open credential-locked rooms.
    pub fn is_credential(&self) -> bool {
        self.credential_level.is_some()
    }

    /// Credential level, or 0 if this is not a credential.
    pub fn access_level(&self) -> u32 {
        self.credential_level.unwrap_or(0)
    }

    /// Generic use with no target; true if the item does anything on its own.
    pub fn use_item(&self) -> bool {
        self.usable
    }

    /// Case-insensitive match against the display name.
    pub fn matches_name(&self, query: &str) -> bool {
        self.name.eq_ignore_ascii_case(query.trim())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_item_is_not_a_credential() {
        let fan = Item::new("fan", "fan", "A cooling fan");
        assert!(!fan.is_credential());
        assert_eq!(fan.access_level(), 0);
        assert!(fan.use_item());
    }

    #[test]
    fn keycard_reports_its_level() {
        let mut card = Item::new("basic_keycard", "basic-keycard", "A keycard");
        card.credential_level = Some(1);
        assert!(card.is_credential());
        assert_eq!(card.access_level(), 1);
    }

    #[test]
    fn name_matching_ignores_case_and_padding() {
        let card = Item::new("basic_keycard", "basic-keycard", "A keycard");
        assert!(card.matches_name("Basic-Keycard"));
        assert!(card.matches_name("  basic-keycard "));
        assert!(!card.matches_name("keycard"));
    }
}
