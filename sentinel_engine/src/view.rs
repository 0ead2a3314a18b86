//! View module.
//! This contains the view to the game world / messages.
//! Rather than printing to the console from each handler, we aggregate needed information and messages
//! to be organized and displayed at the end of the turn.
use textwrap::{fill, termwidth};
use variantly::Variantly;

use crate::style::{GameStyle, normal_block};

pub mod icons;
mod render_action;
mod render_env;
mod render_npc;
mod render_system;
mod render_trig;

/// View aggregates information to be displayed on each pass through the REPL and then organizes
/// and displays the result.
#[derive(Debug, Clone)]
pub struct View {
    pub width: usize,
    pub items: Vec<ViewEntry>,
    pub sequence: usize,
}
impl Default for View {
    fn default() -> Self {
        Self::new()
    }
}

impl View {
    /// Create a new empty view.
    pub fn new() -> Self {
        Self {
            width: termwidth(),
            items: Vec::new(),
            sequence: 0,
        }
    }

    pub fn push(&mut self, item: ViewItem) {
        self.items.push(ViewEntry {
            section: item.section(),
            view_item: item,
            sequence: self.sequence,
        });
        self.sequence += 1;
    }

    /// Compose and display all message contents in the current frame / turn.
    pub fn flush(&mut self) {
        // re-check terminal width in case it's been resized
        self.width = termwidth();

        let has = |section: Section| self.items.iter().any(|e| e.section == section);

        // Section Zero: opening / transition text
        for entry in self.items.iter().filter(|e| e.section == Section::Transition) {
            if let ViewItem::TransitionMessage(msg) = &entry.view_item {
                println!("\n{}", fill(msg, normal_block()).description_style());
            }
        }

        // First Section: Environment / Frame of Reference
        if has(Section::Environment) {
            println!("{:.>width$}\n", "scene".section_style(), width = self.width);
            render_env::room_description(self);
            render_env::room_exit_list(self);
            render_env::room_npc_list(self);
        }
        // Second Section: Immediate / direct results of player command
        if has(Section::DirectResult) {
            println!("{:.>width$}\n", "results".section_style(), width = self.width);
            render_action::room_item_list(self);
            render_action::room_puzzle_list(self);
            render_action::inventory(self);
            render_action::action_success(self);
            render_action::action_failure(self);
            render_action::errors(self);
        }
        // Third Section: World / NPC reaction to Command
        if has(Section::WorldResponse) {
            println!("{:.>width$}\n", "responses".section_style(), width = self.width);
            self.world_reaction();
        }
        // Fourth Section: System Commands (load/save, help, quit etc)
        if has(Section::System) {
            println!("{:.>width$}\n", "game".section_style(), width = self.width);
            render_system::show_help(self);
            render_system::load_or_save(self);
            render_system::engine_message(self);
        }

        // clear the buffer for the next turn
        self.items.clear();

        // create a little space before the next prompt
        println!("\n");
    }

    /// World responses are shown strictly in the order they happened.
    fn world_reaction(&self) {
        for entry in self.world_entries_sorted() {
            match &entry.view_item {
                ViewItem::NpcSpeech { .. } => render_npc::npc_speech(entry),
                ViewItem::NpcReaction { .. } => render_npc::npc_reaction(entry),
                ViewItem::TriggeredEvent(_) => render_trig::triggered_event(entry),
                ViewItem::Victory(_) => render_trig::victory(entry),
                _ => {},
            }
        }
    }

    fn world_entries_sorted(&self) -> Vec<&ViewEntry> {
        let mut entries: Vec<&ViewEntry> = self
            .items
            .iter()
            .filter(|e| e.section == Section::WorldResponse)
            .collect();
        entries.sort_by_key(|e| e.sequence);
        entries
    }

    /// Plain, unstyled text of everything buffered so far, in push order.
    pub fn transcript(&self) -> Vec<String> {
        self.items.iter().flat_map(|e| e.view_item.plain_lines()).collect()
    }

    /// Clears the View's buffer.
    pub fn reset(&mut self) {
        self.items.clear();
    }
}

/// Subsections of the output.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Section {
    /// Opening text shown before the first room.
    Transition,
    /// Room description, exits, and who is present.
    Environment,
    /// Direct results of the player's command.
    DirectResult,
    /// Follow-up reactions from the world or NPCs.
    WorldResponse,
    /// Meta/game-system feedback (saves, help, etc.).
    System,
}

/// Wrapper for a `ViewItem` that remembers where and when it was pushed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewEntry {
    pub section: Section,
    pub view_item: ViewItem,
    pub sequence: usize,
}

/// `ViewItems` are each of the various types of information / messages that may be displayed to the player.
#[derive(Debug, Clone, PartialEq, Eq, Variantly)]
pub enum ViewItem {
    ActionFailure(String),
    ActionSuccess(String),
    EngineMessage(String),
    Error(String),
    GameLoaded {
        save_slot: String,
        save_file: String,
    },
    GameSaved {
        save_slot: String,
        save_file: String,
    },
    Help {
        basic_text: String,
        commands: Vec<HelpCommand>,
    },
    Inventory {
        items: Vec<String>,
        capacity: usize,
    },
    NpcReaction {
        speaker: String,
        message: String,
    },
    NpcSpeech {
        speaker: String,
        quote: String,
    },
    RoomDescription {
        name: String,
        description: String,
    },
    RoomExits(Vec<ExitLine>),
    RoomItems(Vec<ContentLine>),
    RoomNpcs(Vec<NpcLine>),
    RoomPuzzles(Vec<ContentLine>),
    TransitionMessage(String),
    TriggeredEvent(String),
    Victory(String),
}
impl ViewItem {
    /// Classify a view item into a top-level output section.
    pub fn section(&self) -> Section {
        match self {
            ViewItem::RoomDescription { .. } | ViewItem::RoomExits(_) | ViewItem::RoomNpcs(_) => {
                Section::Environment
            },
            ViewItem::ActionSuccess(_)
            | ViewItem::ActionFailure(_)
            | ViewItem::Error(_)
            | ViewItem::RoomItems(_)
            | ViewItem::RoomPuzzles(_)
            | ViewItem::Inventory { .. } => Section::DirectResult,
            ViewItem::NpcSpeech { .. }
            | ViewItem::NpcReaction { .. }
            | ViewItem::TriggeredEvent(_)
            | ViewItem::Victory(_) => Section::WorldResponse,
            ViewItem::EngineMessage(_)
            | ViewItem::Help { .. }
            | ViewItem::GameLoaded { .. }
            | ViewItem::GameSaved { .. } => Section::System,
            ViewItem::TransitionMessage(_) => Section::Transition,
        }
    }

    /// Unstyled text lines for this item.
    pub fn plain_lines(&self) -> Vec<String> {
        match self {
            ViewItem::ActionFailure(msg)
            | ViewItem::ActionSuccess(msg)
            | ViewItem::EngineMessage(msg)
            | ViewItem::Error(msg)
            | ViewItem::TransitionMessage(msg)
            | ViewItem::TriggeredEvent(msg)
            | ViewItem::Victory(msg) => vec![msg.clone()],
            ViewItem::GameLoaded { .. } => vec!["Game loaded successfully!".to_string()],
            ViewItem::GameSaved { .. } => vec!["Game saved successfully!".to_string()],
            ViewItem::Help { basic_text, commands } => std::iter::once(basic_text.clone())
                .chain(commands.iter().map(|c| format!("{} - {}", c.command, c.description)))
                .collect(),
            ViewItem::Inventory { items, .. } => {
                if items.is_empty() {
                    vec!["Your backpack is empty".to_string()]
                } else {
                    vec![format!("Your backpack contains: {}", items.join(", "))]
                }
            },
            ViewItem::NpcReaction { message, .. } => vec![message.clone()],
            ViewItem::NpcSpeech { quote, .. } => vec![quote.clone()],
            ViewItem::RoomDescription { name, description } => vec![name.clone(), description.clone()],
            ViewItem::RoomExits(exits) => exits.iter().map(ExitLine::plain).collect(),
            ViewItem::RoomItems(lines) => {
                if lines.is_empty() {
                    vec![NO_ITEMS_MSG.to_string()]
                } else {
                    lines.iter().map(ContentLine::plain).collect()
                }
            },
            ViewItem::RoomPuzzles(lines) => {
                if lines.is_empty() {
                    vec![NO_PUZZLES_MSG.to_string()]
                } else {
                    lines.iter().map(ContentLine::plain).collect()
                }
            },
            ViewItem::RoomNpcs(npcs) => npcs.iter().map(|n| format!("{} - {}", n.name, n.description)).collect(),
        }
    }
}

pub(crate) const NO_ITEMS_MSG: &str = "You see no items in this room";
pub(crate) const NO_PUZZLES_MSG: &str = "There are no puzzles in this room";

/// Row data for listing items or puzzles found by searching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentLine {
    pub name: String,
    pub description: String,
}
impl ContentLine {
    fn plain(&self) -> String {
        format!("{}, {}", self.name, self.description)
    }
}

/// Row data for the exit listing portion of the view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExitLine {
    pub direction: String,
    pub destination: String,
    pub locked: bool,
    /// Keycard level needed, 0 if the door has no card reader.
    pub required_level: u32,
}
impl ExitLine {
    fn plain(&self) -> String {
        match (self.locked, self.required_level) {
            (true, 0) => format!("{} (locked)", self.direction),
            (true, level) => format!("{} (requires level {level} keycard)", self.direction),
            (false, _) => format!("{} (to {})", self.direction, self.destination),
        }
    }
}

/// Row data for the NPC list within room descriptions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NpcLine {
    pub name: String,
    pub description: String,
}

/// One entry in the `help` command listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelpCommand {
    pub command: String,
    pub description: String,
}
