//! module Render Trig(gered Events)
//!
//! Renderers for world changes that follow from a command rather than being its
//! direct result: doors opening elsewhere, and the end of the game.

use textwrap::{fill, termwidth};

use crate::{
    ViewItem,
    style::{GameStyle as _, normal_block},
    view::ViewEntry,
    view::icons::{ICON_CELEBRATE, ICON_TRIGGER},
};

pub(super) fn triggered_event(entry: &ViewEntry) {
    if let ViewItem::TriggeredEvent(text) = &entry.view_item {
        let formatted = format!("{:<4}{}", ICON_TRIGGER.error_icon_style(), text.triggered_style());
        println!("{}", fill(formatted.as_str(), normal_block()));
        println!();
    }
}

pub(super) fn victory(entry: &ViewEntry) {
    if let ViewItem::Victory(text) = &entry.view_item {
        println!(
            "{:^width$}",
            format!(" {ICON_CELEBRATE} {text} {ICON_CELEBRATE} ").victory_style(),
            width = termwidth()
        );
        println!();
    }
}
