//! Output formatting

use crate::error::CliResult;
use console::style;
use keypad_calc::prelude::*;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// Output format for results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    Text,
    /// JSON output
    Json,
}

/// One press and what the display showed afterwards
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Step {
    /// Label as given
    pub label: String,
    /// Whether the label matched a button
    pub accepted: bool,
    /// Display after the press
    pub display: String,
}

/// Outcome of a run of presses
#[derive(Debug, Clone, Serialize)]
pub struct PressReport {
    /// Final display text
    pub display: String,
    /// Final machine phase
    pub phase: Phase,
    /// Accepted presses
    pub presses: usize,
    /// Ignored labels
    pub ignored: usize,
    /// Per-press trace, when requested
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub steps: Vec<Step>,
    /// Full final state
    pub state: CalcState,
}

impl PressReport {
    /// Snapshot a session
    #[must_use]
    pub fn from_session(session: &Session, steps: Vec<Step>) -> Self {
        let state = session.state().clone();
        Self {
            display: state.display(),
            phase: state.phase(),
            presses: session.presses(),
            ignored: session.ignored(),
            steps,
            state,
        }
    }
}

/// Writes a report: the display line for text, one JSON document otherwise
pub fn write_report<W: Write>(out: &mut W, format: OutputFormat, report: &PressReport) -> CliResult<()> {
    match format {
        OutputFormat::Text => {
            for step in &report.steps {
                writeln!(out, "{}", render_step(step))?;
            }
            writeln!(out, "{}", render_display(&report.display, report.phase))?;
        }
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, report)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

/// Styles the display text; errors stand out in red
#[must_use]
pub fn render_display(display: &str, phase: Phase) -> String {
    match phase {
        Phase::Error => style(display).red().bold().to_string(),
        Phase::Idle | Phase::OperatorPending => style(display).bold().to_string(),
    }
}

fn render_step(step: &Step) -> String {
    if step.accepted {
        format!("{:>3} -> {}", step.label, step.display)
    } else {
        format!("{:>3} -> {}", step.label, style("(ignored)").dim())
    }
}

/// Styles one keypad cell by button kind
#[must_use]
pub fn render_key(label: &str) -> String {
    let cell = format!("[ {label} ]");
    match Button::from_label(label) {
        Some(Button::Operator(_) | Button::Equals) => style(cell).yellow().to_string(),
        Some(Button::Clear | Button::Backspace) => style(cell).red().to_string(),
        _ => cell,
    }
}
