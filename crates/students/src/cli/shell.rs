//! `students shell`: many commands against one live roster.
//!
//! Each input line is split into words (double quotes group words), parsed as
//! a [`ShellLine`] and dispatched. Failures are reported inline and the session
//! carries on; only `exit` or end of input ends it.

use super::commands::execute;
use super::render::{render, render_messages};
use super::setup::{OutputMode, ShellCommands, ShellLine};
use clap::Parser;
use studentapp::api::{CmdMessage, CmdResult, StudentApi};
use studentapp::error::Result;
use studentapp::store::DataStore;
use std::io::{BufRead, Write};
use tracing::debug;

const PROMPT: &str = "students> ";

pub fn run_session<S: DataStore, R: BufRead, W: Write>(
    api: &mut StudentApi<S>,
    mut input: R,
    out: &mut W,
    mode: OutputMode,
    interactive: bool,
) -> anyhow::Result<()> {
    let mut line = String::new();
    loop {
        if interactive {
            write!(out, "{}", PROMPT)?;
            out.flush()?;
        }

        line.clear();
        if input.read_line(&mut line)? == 0 {
            break;
        }

        let words = match split_line(&line) {
            Ok(words) => words,
            Err(message) => {
                write!(out, "{}", render_messages(&[CmdMessage::error(message)]))?;
                continue;
            }
        };
        if words.is_empty() || words[0].starts_with('#') {
            continue;
        }

        let parsed = match ShellLine::try_parse_from(&words) {
            Ok(parsed) => parsed,
            Err(err) => {
                // clap renders help and usage errors itself
                write!(out, "{}", err.render())?;
                continue;
            }
        };
        debug!(command = ?parsed.command, "shell command");

        let result = match dispatch(api, parsed.command) {
            Some(Ok(result)) => result,
            Some(Err(err)) => {
                let mut failed = CmdResult::default();
                failed.add_message(CmdMessage::error(err.to_string()));
                failed
            }
            None => break,
        };
        write!(out, "{}", render(&result, mode)?)?;
    }
    Ok(())
}

/// `None` means the session should end.
fn dispatch<S: DataStore>(
    api: &mut StudentApi<S>,
    command: ShellCommands,
) -> Option<Result<CmdResult>> {
    match command {
        ShellCommands::Roster(cmd) => Some(execute(api, cmd)),
        ShellCommands::Reset { seed } => Some(api.reset(seed)),
        ShellCommands::Clear => Some(api.clear()),
        ShellCommands::Exit => None,
    }
}

/// Splits on whitespace. Double quotes group words and are dropped.
fn split_line(line: &str) -> std::result::Result<Vec<String>, String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut quoted = false;

    for ch in line.chars() {
        match ch {
            '"' => {
                quoted = !quoted;
                in_word = true;
            }
            c if c.is_whitespace() && !quoted => {
                if in_word {
                    words.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            c => {
                current.push(c);
                in_word = true;
            }
        }
    }

    if quoted {
        return Err("unterminated quote".to_string());
    }
    if in_word {
        words.push(current);
    }
    Ok(words)
}
