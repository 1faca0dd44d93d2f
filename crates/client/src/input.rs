//! Input processing for the terminal client.
//!
//! This module owns the text-to-command mapping so the rest of the client can
//! stay agnostic about concrete spellings and aliases.

/// A player command understood by the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Zero-based position in the visible enemy list, first when omitted.
    Attack(Option<usize>),
    Search,
    Wait,
    Look,
    Status,
    Help,
}

/// High-level outcome of processing one input line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LineAction {
    /// Exit the client.
    Quit,
    /// Run the decoded command.
    Submit(Command),
    /// Input that maps to nothing, reported back verbatim.
    Unknown(String),
    /// Blank line.
    None,
}

/// Converts a raw input line into a higher-level action.
///
/// Attack targets are typed 1-based ("attack 2") and stored 0-based.
pub fn parse_line(line: &str) -> LineAction {
    let mut words = line.split_whitespace();
    let Some(first) = words.next() else {
        return LineAction::None;
    };

    let command = match first.to_ascii_lowercase().as_str() {
        "q" | "quit" | "exit" => return LineAction::Quit,
        "a" | "attack" => match words.next() {
            None => Command::Attack(None),
            Some(target) => match target.parse::<usize>() {
                Ok(n) if n > 0 => Command::Attack(Some(n - 1)),
                _ => return LineAction::Unknown(line.trim().to_string()),
            },
        },
        "s" | "search" => Command::Search,
        "w" | "wait" | "." => Command::Wait,
        "l" | "look" => Command::Look,
        "st" | "status" => Command::Status,
        "h" | "help" | "?" => Command::Help,
        _ => return LineAction::Unknown(line.trim().to_string()),
    };
    LineAction::Submit(command)
}

pub const HELP: [&str; 7] = [
    "attack [n]  strike the n-th visible enemy (default: first)",
    "search      look harder for hidden enemies for a couple of turns",
    "wait        let a turn pass",
    "look        list the enemies you can see",
    "status      show health, effects and skills",
    "help        show this list",
    "quit        leave the dungeon",
];
