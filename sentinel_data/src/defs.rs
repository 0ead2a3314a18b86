use serde::{Deserialize, Serialize};

/// Stable identifier used across WorldDef references.
pub type Id = String;

/// Top-level world content loaded by the engine.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct WorldDef {
    pub game: GameDef,
    #[serde(default)]
    pub rooms: Vec<RoomDef>,
    #[serde(default)]
    pub items: Vec<ItemDef>,
    #[serde(default)]
    pub puzzles: Vec<PuzzleDef>,
    #[serde(default)]
    pub npcs: Vec<NpcDef>,
    #[serde(default)]
    pub reactions: Vec<ReactionDef>,
}

/// Game-level metadata and startup configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct GameDef {
    pub title: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub version: String,
    pub intro: String,
    /// Short orientation text shown above the command list by `help`.
    #[serde(default)]
    pub help: String,
    /// Shown once when the global win flag is raised.
    #[serde(default = "default_victory")]
    pub victory: String,
    pub player: PlayerDef,
}

fn default_victory() -> String {
    "You win!".to_string()
}

/// Player definition.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PlayerDef {
    pub name: String,
    pub description: String,
    pub start_room: Id,
}

/// Room definition used by the engine at load time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomDef {
    pub id: Id,
    pub name: String,
    pub desc: String,
    #[serde(default)]
    pub locked: bool,
    /// Minimum credential level that opens this room. Non-zero implies the room starts locked.
    #[serde(default)]
    pub required_level: u32,
    #[serde(default)]
    pub exits: Vec<ExitDef>,
}

/// A one-way connection to another room.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExitDef {
    pub direction: String,
    pub to: Id,
}

/// Item definition used by the engine at load time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemDef {
    pub id: Id,
    pub name: String,
    pub desc: String,
    #[serde(default = "default_true")]
    pub takeable: bool,
    #[serde(default = "default_true")]
    pub usable: bool,
    /// Access level if the item is a credential.
    #[serde(default)]
    pub credential_level: Option<u32>,
    pub location: LocationRef,
}

fn default_true() -> bool {
    true
}

/// Authoring-time reference to an object's starting location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LocationRef {
    Inventory,
    Nowhere,
    Room(Id),
}

/// Puzzle definition. Each puzzle lives in exactly one room.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PuzzleDef {
    pub id: Id,
    pub name: String,
    pub desc: String,
    pub room: Id,
    pub challenge: ChallengeDef,
    pub success_message: String,
    #[serde(default)]
    pub unlocks: Option<Id>,
    #[serde(default)]
    pub rewards: Vec<Id>,
}

/// How a puzzle is resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChallengeDef {
    /// Solved by typing this exact string.
    Password(String),
    /// Solved by holding every listed item.
    Items(Vec<Id>),
}

/// Non-playable character definition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NpcDef {
    pub id: Id,
    pub name: String,
    pub desc: String,
    pub location: LocationRef,
    pub dialogue: Vec<String>,
}

/// What happens when a particular item is presented to a particular NPC.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReactionDef {
    pub npc: Id,
    pub item: Id,
    pub message: String,
    #[serde(default)]
    pub effects: Vec<ReactionEffectDef>,
}

/// World mutations a reaction can perform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReactionEffectDef {
    Unlock { room: Id },
    Win,
}
