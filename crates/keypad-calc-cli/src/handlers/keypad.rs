//! Keypad command handler

use crate::config::CliConfig;
use crate::error::CliResult;
use crate::output::{render_key, OutputFormat};
use keypad_calc::keypad::Keypad;
use std::io::Write;

/// Execute the keypad command
pub fn execute_keypad<W: Write>(config: &CliConfig, out: &mut W) -> CliResult<()> {
    let keypad = Keypad::new();
    match config.format {
        OutputFormat::Text => writeln!(out, "{}", keypad.render_with(render_key))?,
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, keypad.buttons())?;
            writeln!(out)?;
        }
    }
    Ok(())
}
