//! Parsing of typed commands.

/// A line typed by the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Click a cell.
    Cell(usize),
    /// Press the Flip/Start/Clear button.
    Button,
    /// Show the command list.
    Help,
    /// Leave the client.
    Quit,
}

/// Parses one input line; `None` if it is not a command.
pub fn parse_command(line: &str) -> Option<Command> {
    let line = line.trim();
    match line.to_ascii_lowercase().as_str() {
        "" | "b" | "button" | "flip" | "start" | "clear" => Some(Command::Button),
        "q" | "quit" | "exit" => Some(Command::Quit),
        "h" | "help" | "?" => Some(Command::Help),
        other => other.parse().ok().map(Command::Cell),
    }
}

/// Help text listing the commands.
pub const HELP: &str = "Commands: 0-15 play a cell, b (or enter) press the button, h help, q quit";
