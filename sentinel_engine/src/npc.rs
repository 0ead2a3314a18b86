//! NPC Module

use crate::{Id, WorldObject};

use log::info;
use serde::{Deserialize, Serialize};

/// A non-playable character with a fixed, ordered script of lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Npc {
    pub id: Id,
    pub name: String,
    pub description: String,
    pub dialogue: Vec<String>,
    /// Index of the next line to speak. Never exceeds the last line.
    pub cursor: usize,
}

impl Npc {
    pub fn new(id: impl Into<Id>, name: impl Into<String>, description: impl Into<String>, dialogue: Vec<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            dialogue,
            cursor: 0,
        }
    }

    /// Return the current line of dialogue and advance the script.
    ///
    /// Once the last line is reached it is repeated forever.
    pub fn speak(&mut self) -> String {
        let Some(last) = self.dialogue.len().checked_sub(1) else {
            return "...".to_string();
        };
        let line = self.dialogue[self.cursor.min(last)].clone();
        if self.cursor < last {
            self.cursor += 1;
        }
        info!("{} ({}) spoke line {}", self.name, self.id, self.cursor);
        line
    }

    /// Move the script to a saved position, clamped to the last line.
    pub fn set_cursor(&mut self, cursor: usize) {
        self.cursor = cursor.min(self.dialogue.len().saturating_sub(1));
    }
}

impl WorldObject for Npc {
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
