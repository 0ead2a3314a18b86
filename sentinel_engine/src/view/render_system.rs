//! module Render System
//!
//! This module contains the `ViewItem` renderers for system/engine messages,
//! such as help, save/load confirmations, or other items related more to the
//! system than to the game content.

use colored::Colorize as _;
use textwrap::fill;

use crate::{
    View, ViewItem,
    style::normal_block,
    view::icons::ICON_ENGINE,
};

/// Used for generic messages from the engine -- rare.
pub(super) fn engine_message(view: &View) {
    let engine_msgs = view.items.iter().filter(|i| i.view_item.is_engine_message());
    for msg in engine_msgs {
        println!(
            "{}",
            fill(
                format!("{ICON_ENGINE:<4}{}", msg.view_item.clone().unwrap_engine_message()).as_str(),
                normal_block()
            )
        );
    }
}

/// Displays confirmation message when a game is loaded or saved.
pub(super) fn load_or_save(view: &View) {
    if let Some(entry) = view
        .items
        .iter()
        .find(|i| matches!(i.view_item, ViewItem::GameSaved { .. }))
        && let ViewItem::GameSaved { save_slot, save_file } = &entry.view_item
    {
        println!("{}: \"{}\" ({})", "Game Saved".green().bold(), save_slot, save_file);
        println!("{}", format!("Type \"load {save_slot}\" to reload it.").italic());
        println!();
    }
    if let Some(entry) = view
        .items
        .iter()
        .find(|i| matches!(i.view_item, ViewItem::GameLoaded { .. }))
        && let ViewItem::GameLoaded { save_slot, save_file } = &entry.view_item
    {
        println!("{}: \"{}\" ({})", "Game Loaded".green().bold(), save_slot, save_file);
        println!();
    }
}

/// Displays the general help message and command guide.
pub(super) fn show_help(view: &View) {
    if let Some(entry) = view
        .items
        .iter()
        .find(|item| matches!(&item.view_item, ViewItem::Help { .. }))
        && let ViewItem::Help { basic_text, commands } = &entry.view_item
    {
        println!("{}", fill(basic_text, normal_block()).italic().cyan());
        println!();

        println!("{}", "Your command words are:".bold().yellow());
        println!();
        for command in commands {
            let formatted_line = format!("{} - {}", command.command.bold().green(), command.description.italic());
            println!("{}", fill(&formatted_line, normal_block()));
        }
        println!();
    }
}
