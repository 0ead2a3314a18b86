//! module Render Action
//!
//! This module contains the individual `ViewItem` renderers for direct responses to action
//! commands -- search listings, inventory, successes, failures, and errors.

use colored::Colorize as _;
use textwrap::fill;

use crate::{
    View, ViewItem,
    style::{GameStyle as _, normal_block},
    view::icons::{ICON_ERROR, ICON_FAILURE, ICON_SUCCESS},
    view::{NO_ITEMS_MSG, NO_PUZZLES_MSG},
};

pub(super) fn room_item_list(view: &View) {
    if let Some(ViewItem::RoomItems(lines)) = view.items.iter().find_map(|i| match i.view_item {
        ViewItem::RoomItems(_) => Some(&i.view_item),
        _ => None,
    }) {
        println!("{}:", "Items".subheading_style());
        if lines.is_empty() {
            println!("    {}", NO_ITEMS_MSG.italic().dimmed());
        }
        for line in lines {
            println!("    * {} - {}", line.name.item_style(), line.description.description_style());
        }
        println!();
    }
}

pub(super) fn room_puzzle_list(view: &View) {
    if let Some(ViewItem::RoomPuzzles(lines)) = view.items.iter().find_map(|i| match i.view_item {
        ViewItem::RoomPuzzles(_) => Some(&i.view_item),
        _ => None,
    }) {
        println!("{}:", "Puzzles".subheading_style());
        if lines.is_empty() {
            println!("    {}", NO_PUZZLES_MSG.italic().dimmed());
        }
        for line in lines {
            println!("    * {} - {}", line.name.puzzle_style(), line.description.description_style());
        }
        println!();
    }
}

pub(super) fn inventory(view: &View) {
    if let Some(entry) = view
        .items
        .iter()
        .find(|i| matches!(i.view_item, ViewItem::Inventory { .. }))
        && let ViewItem::Inventory { items, capacity } = &entry.view_item
    {
        println!("{} ({}/{}):", "Backpack".subheading_style(), items.len(), capacity);
        if items.is_empty() {
            println!("   {}", "Your backpack is empty".italic().dimmed());
        } else {
            for name in items {
                println!("   {}", name.item_style());
            }
        }
    }
}

pub(super) fn action_success(view: &View) {
    let messages = view.items.iter().filter_map(|i| match &i.view_item {
        ViewItem::ActionSuccess(msg) => Some(msg),
        _ => None,
    });
    for msg in messages {
        println!(
            "{}",
            fill(
                format!("{} {}", ICON_SUCCESS.bright_green(), msg).as_str(),
                normal_block()
            )
        );
    }
}

pub(super) fn action_failure(view: &View) {
    let messages = view.items.iter().filter_map(|i| match &i.view_item {
        ViewItem::ActionFailure(msg) => Some(msg),
        _ => None,
    });
    for msg in messages {
        println!(
            "{}",
            fill(
                format!("{} {}", ICON_FAILURE.bright_red(), msg).as_str(),
                normal_block()
            )
        );
    }
}

pub(super) fn errors(view: &View) {
    let messages = view.items.iter().filter_map(|i| match &i.view_item {
        ViewItem::Error(msg) => Some(msg),
        _ => None,
    });
    for msg in messages {
        println!(
            "{}",
            fill(
                format!("{:<4}{}", ICON_ERROR.error_icon_style(), msg.error_style()).as_str(),
                normal_block()
            )
        );
    }
}
