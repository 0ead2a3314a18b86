//! module Render NPC
//!
//! Renderers for things NPCs say, either as conversation or in reaction to an item.

use textwrap::fill;

use crate::{
    ViewItem,
    style::{GameStyle as _, indented_block},
    view::ViewEntry,
};

pub(super) fn npc_speech(entry: &ViewEntry) {
    if let ViewItem::NpcSpeech { speaker, quote } = &entry.view_item {
        println!("{}:", speaker.npc_style());
        println!("{}", fill(&format!("\"{quote}\""), indented_block()).speech_style());
        println!();
    }
}

pub(super) fn npc_reaction(entry: &ViewEntry) {
    if let ViewItem::NpcReaction { speaker, message } = &entry.view_item {
        println!("{} reacts:", speaker.npc_style());
        println!("{}", fill(message, indented_block()).speech_style());
        println!();
    }
}
