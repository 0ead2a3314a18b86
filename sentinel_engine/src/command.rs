//! Command module
//!
//! Describes possible commands used during gameplay. Input is a verb plus an
//! optional free-text remainder: the first whitespace-separated word is the verb
//! (case-insensitive) and everything after it, re-joined with single spaces, is
//! the argument.

use crate::view::HelpCommand;

/// Commands that can be executed by the player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Drop(Option<String>),
    Empty,
    Go(Option<String>),
    Help,
    Inventory,
    Load(Option<String>),
    Look,
    Quit,
    Save(Option<String>),
    Search,
    Solve(Option<String>),
    Speak,
    Take(Option<String>),
    Unknown(String),
    Use(Option<String>),
}

/// Verbs offered for tab completion and listed by `help`.
pub const COMMAND_WORDS: [&str; 13] = [
    "go",
    "search",
    "take",
    "drop",
    "use",
    "solve",
    "speak",
    "look",
    "inventory",
    "help",
    "save",
    "load",
    "quit",
];

/// Splits a line into a lowercase verb and the remaining words, if any.
pub fn tokenize(input: &str) -> Option<(String, Option<String>)> {
    let mut words = input.split_whitespace();
    let verb = words.next()?.to_lowercase();
    let rest = words.collect::<Vec<_>>().join(" ");
    Some((verb, if rest.is_empty() { None } else { Some(rest) }))
}

/// Parses an input string and returns the corresponding `Command`.
pub fn parse_command(input: &str) -> Command {
    let Some((verb, arg)) = tokenize(input) else {
        return Command::Empty;
    };
    match verb.as_str() {
        "go" => Command::Go(arg),
        "search" => Command::Search,
        "take" => Command::Take(arg),
        "drop" => Command::Drop(arg),
        "use" => Command::Use(arg),
        "solve" => Command::Solve(arg),
        "speak" => Command::Speak,
        "look" => Command::Look,
        "inventory" | "inv" | "i" => Command::Inventory,
        "help" | "?" => Command::Help,
        "save" => Command::Save(arg),
        "load" => Command::Load(arg),
        "quit" | "exit" => Command::Quit,
        _ => Command::Unknown(verb),
    }
}

/// One-line descriptions of each command, in `help` order.
pub fn help_entries() -> Vec<HelpCommand> {
    [
        ("go <direction>", "walk through an exit, e.g. \"go north\""),
        ("search", "list the items and puzzles in this room"),
        ("take <item>", "put an item in your backpack"),
        ("drop <item>", "leave an item from your backpack here"),
        ("use <item>", "use something you carry (keycards open doors)"),
        ("solve <answer>", "answer the puzzle in this room"),
        ("speak", "talk to whoever is here"),
        ("look", "describe your surroundings again"),
        ("inventory", "show what you are carrying"),
        ("help", "show this list"),
        ("save [slot]", "save your progress"),
        ("load [slot]", "restore saved progress"),
        ("quit", "leave the game"),
    ]
    .into_iter()
    .map(|(command, description)| HelpCommand {
        command: command.to_string(),
        description: description.to_string(),
    })
    .collect()
}
