//! Repl command handler
//!
//! Each input line is split on whitespace and every token is pressed in
//! order; the display is printed after the line. State carries over between
//! lines. `quit` or `exit` ends the session, as does end of input.

use crate::config::CliConfig;
use crate::error::CliResult;
use crate::output::{write_report, OutputFormat, PressReport};
use crate::ReplArgs;
use keypad_calc::prelude::*;
use std::io::{BufRead, Write};

const PROMPT: &str = "> ";

/// Execute the repl command, returning the number of lines handled
pub fn run_repl<R, W>(config: &CliConfig, args: &ReplArgs, mut input: R, out: &mut W) -> CliResult<usize>
where
    R: BufRead,
    W: Write,
{
    let mut session = Session::new();
    let mut handled = 0;
    let mut line = String::new();

    loop {
        if args.prompt && config.format == OutputFormat::Text {
            write!(out, "{PROMPT}")?;
            out.flush()?;
        }

        line.clear();
        if input.read_line(&mut line)? == 0 {
            break;
        }
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if matches!(trimmed, "quit" | "exit") {
            break;
        }

        for token in trimmed.split_whitespace() {
            session.press(token);
        }
        handled += 1;
        write_report(out, config.format, &PressReport::from_session(&session, Vec::new()))?;
    }

    tracing::info!(lines = handled, presses = session.presses(), "repl finished");
    Ok(handled)
}
