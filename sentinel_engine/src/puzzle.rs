//! Puzzles gate progress behind either a password or a set of items.

use crate::{Id, WorldObject};

use log::info;
use serde::{Deserialize, Serialize};
use variantly::Variantly;

const NEED_ITEMS_MSG: &str = "You might need some items to solve this...";
const WRONG_ITEMS_MSG: &str = "You don't have the right combination of items.";
const WRONG_PASSWORD_MSG: &str = "That's not correct.";

/// How a puzzle is resolved. A puzzle has exactly one mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Variantly)]
pub enum Challenge {
    /// Exact, case-sensitive match against the player's answer.
    Password(String),
    /// Every listed item must be presented; extras are fine.
    Items(Vec<Id>),
}

/// Result of a single solve attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveOutcome {
    pub success: bool,
    pub message: String,
    /// Items the caller should hand to the player. Empty on failure.
    pub rewards: Vec<Id>,
}
impl SolveOutcome {
    fn failure(message: &str) -> Self {
        Self {
            success: false,
            message: message.to_string(),
            rewards: Vec::new(),
        }
    }
}

/// A gated challenge living in a room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Puzzle {
    pub id: Id,
    pub name: String,
    pub description: String,
    pub success_message: String,
    pub challenge: Challenge,
    /// Room opened when the puzzle is solved.
    pub unlocks: Option<Id>,
    pub rewards: Vec<Id>,
    pub solved: bool,
}

impl WorldObject for Puzzle {
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

impl Puzzle {
    /// Returns true if this puzzle is solved by presenting items.
    pub fn needs_items(&self) -> bool {
        self.challenge.is_items()
    }

    /// Attempt the puzzle.
    ///
    /// Item puzzles ignore `attempt`; password puzzles ignore `presented`.
    /// Solving an already-solved puzzle runs the same check again, so a correct
    /// attempt succeeds (and returns the rewards) every time.
    pub fn solve(&mut self, attempt: Option<&str>, presented: Option<&[Id]>) -> SolveOutcome {
        let passed = match &self.challenge {
            Challenge::Items(required) => match presented {
                None | Some([]) => return SolveOutcome::failure(NEED_ITEMS_MSG),
                Some(held) => {
                    if !required.iter().all(|needed| held.contains(needed)) {
                        return SolveOutcome::failure(WRONG_ITEMS_MSG);
                    }
                    true
                },
            },
            Challenge::Password(password) => attempt == Some(password.as_str()),
        };

        if !passed {
            info!("wrong answer given for puzzle '{}'", self.id);
            return SolveOutcome::failure(WRONG_PASSWORD_MSG);
        }

        self.solved = true;
        info!("puzzle '{}' solved", self.id);
        SolveOutcome {
            success: true,
            message: self.success_message.clone(),
            rewards: self.rewards.clone(),
        }
    }
}
