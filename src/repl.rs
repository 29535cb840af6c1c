//! The interactive read-eval loop.

use crate::commands::CommandDispatcher;
use std::io::{self, BufRead, Write};
use tracing::info;

pub const WELCOME: &str = "Welcome to the Assistant! How can I help you?";
pub const PROMPT: &str = "Enter a command: ";

/// Read commands from `input` until an exit command or end of input,
/// writing each reply to `output`.
///
/// Blank lines are skipped. Command failures are shown and the loop goes on;
/// only I/O errors end it early.
pub fn run<R: BufRead, W: Write>(
    dispatcher: &mut CommandDispatcher,
    mut input: R,
    mut output: W,
) -> io::Result<()> {
    writeln!(output, "{}", WELCOME)?;

    let mut line = String::new();
    loop {
        write!(output, "{}", PROMPT)?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            info!("End of input");
            writeln!(output)?;
            break;
        }

        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let outcome = dispatcher.handle_line(trimmed);
        writeln!(output, "{}", outcome.text())?;
        if outcome.is_exit() {
            break;
        }
    }

    Ok(())
}
