//! Terminal input handling for the Sentinel REPL.
//!
//! Wraps rustyline configuration and completion tailored to the engine's
//! command set and save-slot workflow.

use std::fs;
use std::io::{self, IsTerminal, Write};
use std::path::{Path, PathBuf};

use log::{info, warn};
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::history::DefaultHistory;
use rustyline::validate::Validator;
use rustyline::{Context, Helper};

use crate::command::COMMAND_WORDS;
use crate::save_files::collect_save_slots;

/// Outcome of reading a line from the REPL input.
#[derive(Debug, PartialEq, Eq)]
pub enum InputEvent {
    Line(String),
    Eof,
    Interrupted,
}

/// Verbs whose argument is a save slot.
const SLOT_VERBS: [&str; 2] = ["load", "save"];

type ReplEditor = rustyline::Editor<SentinelHelper, DefaultHistory>;

/// Completes command words, and slot names after `load` / `save`.
struct SentinelHelper {
    save_dir: PathBuf,
}

impl Helper for SentinelHelper {}

impl Completer for SentinelHelper {
    type Candidate = Pair;

    fn complete(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> rustyline::Result<(usize, Vec<Self::Candidate>)> {
        let (start, prefix) = current_prefix(line, pos);
        if prefix.is_empty() {
            return Ok((start, Vec::new()));
        }
        let lower = prefix.to_lowercase();
        if let Some((replacement_start, candidates)) = slot_completions(&self.save_dir, &lower, start) {
            return Ok((replacement_start, candidates));
        }
        Ok((start, command_completions(&lower)))
    }
}

impl Hinter for SentinelHelper {
    type Hint = String;
}

impl Highlighter for SentinelHelper {}

impl Validator for SentinelHelper {}

fn current_prefix(line: &str, pos: usize) -> (usize, String) {
    let slice = &line[..pos];
    let trimmed = slice.trim_start_matches(char::is_whitespace);
    let start = pos - trimmed.len();
    (start, trimmed.to_string())
}

fn command_completions(lower: &str) -> Vec<Pair> {
    COMMAND_WORDS
        .iter()
        .filter(|word| word.starts_with(lower))
        .map(|word| Pair {
            display: (*word).to_string(),
            replacement: (*word).to_string(),
        })
        .collect()
}

/// Offer save slots once the line starts with a slot verb followed by whitespace.
fn slot_completions(save_dir: &Path, lower: &str, start: usize) -> Option<(usize, Vec<Pair>)> {
    let keyword = SLOT_VERBS.iter().find(|verb| matches_keyword(lower, verb))?;
    let after_keyword = &lower[keyword.len()..];
    let partial = after_keyword.trim_start();
    let insertion_offset = lower.len() - partial.len();

    let pairs = available_save_slots(save_dir)
        .into_iter()
        .filter(|slot| slot.starts_with(partial))
        .map(|slot| Pair {
            display: slot.clone(),
            replacement: slot,
        })
        .collect();
    Some((start + insertion_offset, pairs))
}

fn matches_keyword(lower: &str, keyword: &str) -> bool {
    lower.len() > keyword.len()
        && lower.starts_with(keyword)
        && lower[keyword.len()..].starts_with(char::is_whitespace)
}

fn available_save_slots(save_dir: &Path) -> Vec<String> {
    match collect_save_slots(save_dir) {
        Ok(slots) => slots,
        Err(err) => {
            warn!("failed to enumerate save slots for completion: {err}");
            Vec::new()
        },
    }
}

/// Helper responsible for managing the interactive input backend.
///
/// Prefers `rustyline` when an interactive terminal is available, falling back to
/// a basic stdin reader otherwise.
pub struct InputManager {
    backend: Backend,
}

impl InputManager {
    pub fn new(save_dir: PathBuf) -> Self {
        let backend = if io::stdin().is_terminal() {
            match RustylineInput::new(save_dir) {
                Ok(editor) => {
                    info!("using rustyline-backed REPL input");
                    Backend::Rustyline(Box::new(editor))
                },
                Err(err) => {
                    warn!("failed to initialize rustyline ({err}), falling back to basic stdin");
                    Backend::plain()
                },
            }
        } else {
            info!("stdin is not a TTY; using basic input mode");
            Backend::plain()
        };

        Self { backend }
    }

    /// Read a line from the current backend. If the interactive backend reports an
    /// unrecoverable error, switch to the plain stdin backend and retry once.
    ///
    /// # Errors
    /// - if stdin itself can't be read
    pub fn read_line(&mut self, prompt: &str) -> io::Result<InputEvent> {
        match self.backend.read_line(prompt) {
            Ok(event) => Ok(event),
            Err(err) => {
                if self.backend.is_rustyline() {
                    warn!("rustyline input failed: {err} -- switching to basic stdin");
                    self.backend = Backend::plain();
                    self.backend.read_line(prompt)
                } else {
                    Err(err)
                }
            },
        }
    }
}

enum Backend {
    Rustyline(Box<RustylineInput>),
    Plain(StdinInput),
}

impl Backend {
    fn plain() -> Self {
        Backend::Plain(StdinInput::default())
    }

    fn is_rustyline(&self) -> bool {
        matches!(self, Backend::Rustyline(_))
    }

    fn read_line(&mut self, prompt: &str) -> io::Result<InputEvent> {
        match self {
            Backend::Rustyline(editor) => editor.read_line(prompt),
            Backend::Plain(stdin) => stdin.read_line(prompt),
        }
    }
}

struct RustylineInput {
    editor: ReplEditor,
    history_path: Option<PathBuf>,
}

impl RustylineInput {
    fn new(save_dir: PathBuf) -> io::Result<Self> {
        let mut editor = rustyline::Editor::<SentinelHelper, _>::new().map_err(map_io_err)?;
        editor.set_helper(Some(SentinelHelper { save_dir }));
        let history_path = history_file_path();

        if let Some(path) = history_path.as_ref() {
            if let Some(dir) = path.parent()
                && let Err(err) = fs::create_dir_all(dir)
            {
                warn!("failed to create history directory {}: {err}", dir.display());
            }

            if let Err(err) = editor.load_history(path) {
                match err {
                    ReadlineError::Io(ref io_err) if io_err.kind() == io::ErrorKind::NotFound => {
                        info!("no prior history found at {}, starting fresh", path.display());
                    },
                    other => {
                        warn!("failed to load history from {}: {other}", path.display());
                    },
                }
            }
        }

        Ok(Self { editor, history_path })
    }

    fn read_line(&mut self, prompt: &str) -> io::Result<InputEvent> {
        match self.editor.readline(prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    if let Err(err) = self.editor.add_history_entry(line.as_str()) {
                        warn!("failed to append to history: {err}");
                    }
                    if let Some(path) = self.history_path.as_ref()
                        && let Err(err) = self.editor.save_history(path)
                    {
                        warn!("failed to persist history to {}: {err}", path.display());
                    }
                }
                Ok(InputEvent::Line(line))
            },
            Err(err) => convert_readline_error(err),
        }
    }
}

#[derive(Default)]
struct StdinInput {
    buffer: String,
}

impl StdinInput {
    fn read_line(&mut self, prompt: &str) -> io::Result<InputEvent> {
        print!("{prompt}");
        io::stdout().flush()?;

        self.buffer.clear();
        let bytes = io::stdin().read_line(&mut self.buffer)?;
        if bytes == 0 {
            return Ok(InputEvent::Eof);
        }

        if self.buffer.ends_with('\n') {
            self.buffer.pop();
            if self.buffer.ends_with('\r') {
                self.buffer.pop();
            }
        }

        Ok(InputEvent::Line(self.buffer.clone()))
    }
}

fn convert_readline_error(err: ReadlineError) -> io::Result<InputEvent> {
    match err {
        ReadlineError::Interrupted => Ok(InputEvent::Interrupted),
        ReadlineError::Eof => Ok(InputEvent::Eof),
        ReadlineError::Io(io_err) => Err(io_err),
        other => Err(io::Error::other(other)),
    }
}

fn map_io_err(err: ReadlineError) -> io::Error {
    match err {
        ReadlineError::Io(io_err) => io_err,
        other => io::Error::other(other),
    }
}

fn history_file_path() -> Option<PathBuf> {
    dirs::data_dir()
        .or_else(dirs::data_local_dir)
        .map(|base| build_history_path(&base))
}

fn build_history_path(base: &Path) -> PathBuf {
    let mut path = base.to_path_buf();
    path.push("sentinel_engine");
    path.push("history.txt");
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::save_files::{SaveState, write_save};
    use crate::world::SentinelWorld;

    #[test]
    fn converts_readline_ctrl_c_to_interrupt() {
        let result = convert_readline_error(ReadlineError::Interrupted).unwrap();
        assert_eq!(result, InputEvent::Interrupted);
    }

    #[test]
    fn converts_readline_eof() {
        let result = convert_readline_error(ReadlineError::Eof).unwrap();
        assert_eq!(result, InputEvent::Eof);
    }

    #[test]
    fn history_path_appends_components() {
        let base = PathBuf::from("/tmp/sentinel-test");
        let path = build_history_path(&base);
        assert!(path.ends_with(Path::new("sentinel_engine/history.txt")));
    }

    #[test]
    fn command_words_complete_by_prefix() {
        let found: Vec<String> = command_completions("s").into_iter().map(|p| p.replacement).collect();
        assert_eq!(found, vec!["search", "solve", "speak", "save"]);
    }

    #[test]
    fn bare_slot_verb_is_completed_as_a_command() {
        assert!(slot_completions(Path::new("."), "load", 0).is_none());
        assert!(matches_keyword("load ", "load"));
        assert!(!matches_keyword("loadx", "load"));
    }

    #[test]
    fn slot_names_follow_load() {
        let dir = tempfile::tempdir().unwrap();
        let state = SaveState::capture(&SentinelWorld::new_empty());
        write_save(dir.path(), "alpha", &state).unwrap();
        write_save(dir.path(), "beta", &state).unwrap();

        let (offset, pairs) = slot_completions(dir.path(), "load a", 0).unwrap();
        assert_eq!(offset, 5);
        let names: Vec<String> = pairs.into_iter().map(|p| p.replacement).collect();
        assert_eq!(names, vec!["alpha"]);
    }
}
