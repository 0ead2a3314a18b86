#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]

pub const SENTINEL_VERSION: &str = env!("CARGO_PKG_VERSION");

// Core modules
pub mod command;
pub mod config;
pub mod data_paths;
pub mod error;
pub mod item;
pub mod loader;
pub mod npc;
pub mod player;
pub mod puzzle;
pub mod reaction;
pub mod repl;
pub mod room;
pub mod save_files;
pub mod slug;
pub mod style;
pub mod view;
pub mod world;

// Re-exports for convenience
pub use item::{Item, ItemHolder};
pub use loader::load_world;
pub use player::Player;
pub use repl::{SessionState, process_command, run_repl};
pub use room::Room;
pub use sentinel_data::Id;
pub use view::{View, ViewItem};
pub use world::{Location, SentinelWorld, WorldObject};
