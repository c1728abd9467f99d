//! Read-Eval-Print Loop
//!
//! Reads command lines, dispatches them and prints results or errors.

use std::io::{self, Write};

use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::warn;

use crate::cli::{App, Command, Flow};
use crate::error::CommandError;

pub const PROMPT: &str = "Pokedex > ";

/// Lowercases `text` and splits it into words.
pub fn clean_input(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Runs the shell until `exit` or end of input.
///
/// Command failures are printed and the loop continues; only I/O errors on
/// `input` or `out` end the session early.
pub async fn run<R, W>(app: &mut App, input: R, out: &mut W) -> io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut lines = input.lines();

    loop {
        write!(out, "{}", PROMPT)?;
        out.flush()?;

        let Some(line) = lines.next_line().await? else {
            writeln!(out)?;
            break;
        };

        let words = clean_input(&line);
        if words.is_empty() {
            continue;
        }

        let command = match Command::parse(&words) {
            Ok(command) => command,
            Err(err) => {
                writeln!(out, "{}", err)?;
                continue;
            }
        };

        match app.execute(command, out).await {
            Ok(Flow::Continue) => {}
            Ok(Flow::Exit) => break,
            Err(CommandError::Io(err)) => return Err(err),
            Err(err) => {
                warn!(error = %err, "command failed");
                writeln!(out, "{}", err)?;
            }
        }
    }

    Ok(())
}
