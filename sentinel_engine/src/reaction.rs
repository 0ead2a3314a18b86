//! Reactions: what an NPC does when shown a particular item.
//!
//! Behavior lives in data. Each (npc, item) pair maps to at most one reaction,
//! and a reaction is a message plus zero or more world effects.

use crate::Id;

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use variantly::Variantly;

/// A world mutation performed by a reaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Variantly)]
pub enum ReactionEffect {
    /// Unlock the room with this id.
    Unlock { room: Id },
    /// Raise the global win flag.
    Win,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reaction {
    pub message: String,
    pub effects: Vec<ReactionEffect>,
}

/// Lookup table of reactions keyed by `(npc_id, item_id)`.
#[derive(Debug, Clone, Default)]
pub struct ReactionTable {
    entries: HashMap<(Id, Id), Reaction>,
}

impl ReactionTable {
    /// Register a reaction, replacing any earlier one for the same pair.
    pub fn insert(&mut self, npc_id: impl Into<Id>, item_id: impl Into<Id>, reaction: Reaction) {
        self.entries.insert((npc_id.into(), item_id.into()), reaction);
    }

    pub fn get(&self, npc_id: &str, item_id: &str) -> Option<&Reaction> {
        self.entries.get(&(npc_id.to_string(), item_id.to_string()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
