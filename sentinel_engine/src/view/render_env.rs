//! # Render Env(ironment) Module
//!
//! This module contains the individual `ViewItem` renderers for the "environment" section
//! of an output frame.

use textwrap::fill;

use crate::{
    View, ViewItem,
    style::{GameStyle as _, normal_block},
};

/// Used by `flush()` to show the room title and description.
pub(super) fn room_description(view: &View) {
    if let Some(ViewItem::RoomDescription { name, description }) = view.items.iter().find_map(|i| match i.view_item {
        ViewItem::RoomDescription { .. } => Some(&i.view_item),
        _ => None,
    }) {
        println!("{:^width$}", name.room_titlebar_style(), width = view.width);
        println!("{}", fill(description, normal_block()).description_style());
        println!();
    }
}

pub(super) fn room_exit_list(view: &View) {
    if let Some(ViewItem::RoomExits(exit_lines)) = view.items.iter().find_map(|i| match i.view_item {
        ViewItem::RoomExits(_) => Some(&i.view_item),
        _ => None,
    }) {
        println!("{}:", "Exits".subheading_style());
        for exit in exit_lines {
            print!("    > ");
            match (exit.locked, exit.required_level) {
                (false, _) => println!(
                    "{} (to {})",
                    exit.direction.exit_open_style(),
                    exit.destination.room_style()
                ),
                (true, 0) => println!("{} (locked)", exit.direction.exit_locked_style()),
                (true, level) => println!(
                    "{} (requires level {} keycard)",
                    exit.direction.exit_locked_style(),
                    level
                ),
            }
        }
        println!();
    }
}

/// Render a `ViewItem::RoomNpcs` into a list of NPCs and their descriptions.
pub(super) fn room_npc_list(view: &View) {
    if let Some(ViewItem::RoomNpcs(npcs)) = view.items.iter().find_map(|i| match i.view_item {
        ViewItem::RoomNpcs(_) => Some(&i.view_item),
        _ => None,
    }) {
        println!("{}:", "Present".subheading_style());
        for npc_line in npcs {
            println!(
                "    {} - {}",
                npc_line.name.npc_style(),
                npc_line.description.description_style()
            );
        }
        println!();
    }
}
