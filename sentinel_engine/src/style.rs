//! Styling helpers for terminal output.
//!
//! The [`GameStyle`] trait provides a set of convenience methods for applying
//! ANSI styling via the `colored` crate. Implementations for `&str` and
//! `String` are provided so string literals can be styled directly.

use colored::{ColoredString, Colorize};
use textwrap::{Options, termwidth};

/// Convenience trait for applying color and style to text output.
pub trait GameStyle {
    fn item_style(&self) -> ColoredString;
    fn npc_style(&self) -> ColoredString;
    fn room_style(&self) -> ColoredString;
    fn room_titlebar_style(&self) -> ColoredString;
    fn description_style(&self) -> ColoredString;
    fn puzzle_style(&self) -> ColoredString;
    fn speech_style(&self) -> ColoredString;
    fn triggered_style(&self) -> ColoredString;
    fn exit_open_style(&self) -> ColoredString;
    fn exit_locked_style(&self) -> ColoredString;
    fn error_style(&self) -> ColoredString;
    fn error_icon_style(&self) -> ColoredString;
    fn subheading_style(&self) -> ColoredString;
    fn section_style(&self) -> ColoredString;
    fn highlight(&self) -> ColoredString;
    fn victory_style(&self) -> ColoredString;
    fn prompt_style(&self) -> ColoredString;
}

impl GameStyle for &str {
    fn section_style(&self) -> ColoredString {
        let bracketed = format!("[{self}]");
        bracketed.truecolor(75, 80, 75)
    }
    fn subheading_style(&self) -> ColoredString {
        self.underline()
    }
    fn item_style(&self) -> ColoredString {
        self.truecolor(220, 180, 40)
    }
    fn npc_style(&self) -> ColoredString {
        self.truecolor(13, 130, 60).underline()
    }
    fn room_style(&self) -> ColoredString {
        self.truecolor(223, 77, 10)
    }
    fn room_titlebar_style(&self) -> ColoredString {
        self.truecolor(223, 77, 10).underline()
    }
    fn description_style(&self) -> ColoredString {
        self.italic().truecolor(102, 208, 250)
    }
    fn puzzle_style(&self) -> ColoredString {
        self.truecolor(220, 40, 220)
    }
    fn speech_style(&self) -> ColoredString {
        self.italic().truecolor(180, 230, 180)
    }
    fn triggered_style(&self) -> ColoredString {
        self.italic().truecolor(230, 230, 30)
    }
    fn exit_open_style(&self) -> ColoredString {
        self.italic().truecolor(110, 220, 110)
    }
    fn exit_locked_style(&self) -> ColoredString {
        self.italic().truecolor(200, 50, 50)
    }
    fn error_style(&self) -> ColoredString {
        self.truecolor(230, 30, 30)
    }
    fn error_icon_style(&self) -> ColoredString {
        self.bold().truecolor(230, 80, 80)
    }
    fn highlight(&self) -> ColoredString {
        self.bold().truecolor(250, 250, 250)
    }
    fn victory_style(&self) -> ColoredString {
        self.bold().black().on_yellow()
    }
    fn prompt_style(&self) -> ColoredString {
        self.truecolor(150, 150, 150)
    }
}

impl GameStyle for String {
    fn section_style(&self) -> ColoredString {
        self.as_str().section_style()
    }
    fn subheading_style(&self) -> ColoredString {
        self.as_str().subheading_style()
    }
    fn item_style(&self) -> ColoredString {
        self.as_str().item_style()
    }
    fn npc_style(&self) -> ColoredString {
        self.as_str().npc_style()
    }
    fn room_style(&self) -> ColoredString {
        self.as_str().room_style()
    }
    fn room_titlebar_style(&self) -> ColoredString {
        self.as_str().room_titlebar_style()
    }
    fn description_style(&self) -> ColoredString {
        self.as_str().description_style()
    }
    fn puzzle_style(&self) -> ColoredString {
        self.as_str().puzzle_style()
    }
    fn speech_style(&self) -> ColoredString {
        self.as_str().speech_style()
    }
    fn triggered_style(&self) -> ColoredString {
        self.as_str().triggered_style()
    }
    fn exit_open_style(&self) -> ColoredString {
        self.as_str().exit_open_style()
    }
    fn exit_locked_style(&self) -> ColoredString {
        self.as_str().exit_locked_style()
    }
    fn error_style(&self) -> ColoredString {
        self.as_str().error_style()
    }
    fn error_icon_style(&self) -> ColoredString {
        self.as_str().error_icon_style()
    }
    fn highlight(&self) -> ColoredString {
        self.as_str().highlight()
    }
    fn victory_style(&self) -> ColoredString {
        self.as_str().victory_style()
    }
    fn prompt_style(&self) -> ColoredString {
        self.as_str().prompt_style()
    }
}

/// Wrapping options for ordinary paragraphs at the current terminal width.
pub fn normal_block() -> Options<'static> {
    Options::new(termwidth())
}

/// Wrapping options for text set off from the left margin (quotes, listings).
pub fn indented_block() -> Options<'static> {
    Options::new(termwidth()).initial_indent("    ").subsequent_indent("    ")
}
