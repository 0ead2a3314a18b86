//! REPL and command handling utilities.
//!
//! The game runs in a read-eval-print loop. This module and its submodules
//! implement the various command handlers that manipulate the [`SentinelWorld`].
//! [`process_command`] is the whole dispatcher: it runs one line of input against
//! the world and reports whether the session goes on.

mod input;
pub mod inventory;
pub mod item;
pub mod movement;
pub mod npc;
pub mod puzzle;
pub mod system;

pub use inventory::*;
pub use item::*;
pub use movement::*;
pub use npc::*;
pub use puzzle::*;
pub use system::*;

use crate::command::{Command, parse_command};
use crate::config::EngineConfig;
use crate::error::InputError;
use crate::save_files::save_dir_for_world;
use crate::style::GameStyle;
use crate::{SentinelWorld, View, ViewItem};

use anyhow::Result;
use log::{error, info};
use variantly::Variantly;

use input::{InputEvent, InputManager};

/// Control flow signal used by handlers to exit the REPL.
pub enum ReplControl {
    Continue,
    Quit,
}

/// Where the session stands after a command. `Won` and `Quit` are final.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Variantly)]
pub enum SessionState {
    Running,
    Won,
    Quit,
}

/// Run one line of input against the world.
///
/// Gameplay failures are pushed to the view and leave the world as it was. The
/// win flag is checked after every command, before a quit takes effect.
///
/// # Errors
/// - only if the world is internally inconsistent (e.g. a dangling room id)
pub fn process_command(
    world: &mut SentinelWorld,
    view: &mut View,
    config: &EngineConfig,
    input: &str,
) -> Result<SessionState> {
    #[allow(clippy::enum_glob_use)]
    use Command::*;

    let command = parse_command(input);
    info!("command: {command:?}");
    let control = match &command {
        Empty => {
            view.push(ViewItem::Error(InputError::Empty.to_string()));
            ReplControl::Continue
        },
        Unknown(verb) => {
            view.push(ViewItem::Error(InputError::Unknown(verb.clone()).to_string()));
            ReplControl::Continue
        },
        Go(direction) => {
            go_handler(world, view, direction.as_deref())?;
            ReplControl::Continue
        },
        Look => {
            look_handler(world, view)?;
            ReplControl::Continue
        },
        Search => {
            search_handler(world, view)?;
            ReplControl::Continue
        },
        Take(thing) => {
            take_handler(world, view, thing.as_deref())?;
            ReplControl::Continue
        },
        Drop(thing) => {
            drop_handler(world, view, thing.as_deref());
            ReplControl::Continue
        },
        Use(thing) => {
            use_handler(world, view, thing.as_deref())?;
            ReplControl::Continue
        },
        Solve(answer) => {
            solve_handler(world, view, answer.as_deref())?;
            ReplControl::Continue
        },
        Speak => {
            speak_handler(world, view)?;
            ReplControl::Continue
        },
        Inventory => {
            inv_handler(world, view);
            ReplControl::Continue
        },
        Help => {
            help_handler(world, view);
            ReplControl::Continue
        },
        Save(slot) => {
            save_handler(world, view, config, slot.as_deref());
            ReplControl::Continue
        },
        Load(slot) => {
            load_handler(world, view, config, slot.as_deref())?;
            ReplControl::Continue
        },
        Quit => quit_handler(world, view),
    };

    if world.won {
        info!("session won");
        view.push(ViewItem::Victory(world.victory_text.clone()));
        return Ok(SessionState::Won);
    }
    Ok(match control {
        ReplControl::Continue => SessionState::Running,
        ReplControl::Quit => SessionState::Quit,
    })
}

/// Run the main read–eval–print loop until the game is won or the user quits.
///
/// Handles prompting, reading input, dispatching via [`process_command`], and
/// flushing the view each turn. Internal errors from a handler are logged and
/// shown, and the loop carries on.
pub fn run_repl(world: &mut SentinelWorld, config: &EngineConfig) {
    let mut view = View::new();
    let mut input_manager = InputManager::new(save_dir_for_world(&config.saves.directory, world));
    let prompt = "\n> ".prompt_style().to_string();

    loop {
        let input = match input_manager.read_line(&prompt) {
            Ok(InputEvent::Line(line)) => line,
            Ok(InputEvent::Eof) => "quit".to_string(),
            Ok(InputEvent::Interrupted) => {
                view.push(ViewItem::EngineMessage("Command canceled.".to_string()));
                view.flush();
                continue;
            },
            Err(err) => {
                error!("failed to read input: {err}");
                view.push(ViewItem::Error("Failed to read input. Try again.".to_string()));
                view.flush();
                continue;
            },
        };

        let state = match process_command(world, &mut view, config, &input) {
            Ok(state) => state,
            Err(err) => {
                error!("command \"{}\" failed: {err:?}", input.trim());
                view.push(ViewItem::Error(format!("Something went wrong: {err}")));
                SessionState::Running
            },
        };
        view.flush();
        if !state.is_running() {
            info!("session ended: {state:?}");
            break;
        }
    }
}
