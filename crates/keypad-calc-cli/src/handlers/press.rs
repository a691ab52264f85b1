//! Press command handler

use crate::config::CliConfig;
use crate::error::{CliError, CliResult};
use crate::output::{write_report, PressReport, Step};
use crate::PressArgs;
use keypad_calc::prelude::*;
use std::io::Write;

/// Execute the press command
pub fn execute_press<W: Write>(config: &CliConfig, args: &PressArgs, out: &mut W) -> CliResult<()> {
    let (session, steps) = press_labels(&args.labels, args.steps, args.strict)?;
    tracing::info!(
        presses = session.presses(),
        ignored = session.ignored(),
        display = %session.display(),
        "press run finished"
    );
    write_report(out, config.format, &PressReport::from_session(&session, steps))
}

/// Presses labels on a fresh session, recording steps when asked
pub fn press_labels(
    labels: &[String],
    record_steps: bool,
    strict: bool,
) -> CliResult<(Session, Vec<Step>)> {
    let mut session = Session::new();
    let mut steps = Vec::new();

    for label in labels {
        let accepted = session.press(label);
        if !accepted && strict {
            return Err(CliError::unknown_button(label.as_str()));
        }
        if record_steps {
            steps.push(Step {
                label: label.clone(),
                accepted,
                display: session.display(),
            });
        }
    }

    Ok((session, steps))
}
