//! Line-oriented terminal client for a single encounter.
//!
//! Reads one command per line, hands it to the [`Session`], and prints every
//! line the session produced. The loop ends on `quit`, end of input, the
//! player's death or an empty room.

pub mod input;

pub use input::{Command, HELP, LineAction, parse_line};

use std::io::{BufRead, Write};

use anyhow::Result;
use game_core::{Combatant, GameError, RngSource};
use runtime::Session;
use tracing::{error, info, warn};

pub const VICTORY: &str = "🏆 Every foe in the room has fallen.";

/// Drives `session` from `input` until the encounter ends.
pub fn run<R, I, O>(session: &mut Session<R>, input: I, output: &mut O) -> Result<()>
where
    R: RngSource,
    I: BufRead,
    O: Write,
{
    print_lines(output, &session.begin())?;

    for line in input.lines() {
        let line = line?;
        let command = match parse_line(&line) {
            LineAction::Quit => break,
            LineAction::None => continue,
            LineAction::Unknown(text) => {
                writeln!(output, "Unknown command '{text}'. Type 'help' for a list.")?;
                continue;
            }
            LineAction::Submit(command) => command,
        };

        let lines = execute(session, command);
        print_lines(output, &lines)?;

        if session.is_game_over() {
            info!(turn = session.turn(), "player died");
            break;
        }
        if session.is_cleared() {
            info!(turn = session.turn(), "encounter cleared");
            writeln!(output, "{VICTORY}")?;
            break;
        }
    }

    output.flush()?;
    Ok(())
}

/// Runs one command and returns its display lines.
pub fn execute<R: RngSource>(session: &mut Session<R>, command: Command) -> Vec<String> {
    match command {
        Command::Attack(target) => match session.attack(target) {
            Ok(lines) => lines,
            Err(err) => {
                if err.severity().is_recoverable() {
                    warn!(error = %err, code = err.error_code(), "attack rejected");
                } else {
                    error!(error = %err, code = err.error_code(), "attack failed");
                }
                vec![err.to_string()]
            }
        },
        Command::Search => session.search(),
        Command::Wait => session.wait(),
        Command::Look => session.look(),
        Command::Status => status_lines(session),
        Command::Help => HELP.iter().map(|line| line.to_string()).collect(),
    }
}

/// Health, active effects and known skills.
pub fn status_lines<R: RngSource>(session: &Session<R>) -> Vec<String> {
    let player = session.player();
    let mut lines = vec![format!(
        "💖 Health: {}/{}",
        player.health(),
        player.scalars().max_health
    )];

    let effects: Vec<String> = player
        .status_effects()
        .iter()
        .map(|effect| effect.kind.to_string())
        .collect();
    if !effects.is_empty() {
        lines.push(format!("Effects: {}", effects.join(", ")));
    }

    let skills: Vec<String> = session
        .progression()
        .visible_skills()
        .into_iter()
        .map(|(tag, level)| format!("{tag} {level}"))
        .collect();
    if !skills.is_empty() {
        lines.push(format!("Skills: {}", skills.join(", ")));
    }
    lines
}

fn print_lines<O: Write>(output: &mut O, lines: &[String]) -> Result<()> {
    for line in lines {
        writeln!(output, "{line}")?;
    }
    Ok(())
}
