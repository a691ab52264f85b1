//! Button presses understood by the state machine

use crate::core::Operator;
use serde::{Deserialize, Serialize};

/// A single button press
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Button {
    /// Digit 0-9
    Digit(u8),
    /// Decimal point
    Decimal,
    /// Arithmetic operator
    Operator(Operator),
    /// Evaluate the pending operation
    Equals,
    /// Reset everything
    Clear,
    /// Remove the last entered character
    Backspace,
}

impl Button {
    /// Label of the backspace key
    pub const BACKSPACE_GLYPH: &'static str = "←";

    /// Maps a button label to a press. Surrounding whitespace is ignored;
    /// unknown labels map to `None`.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        match label {
            "." => Some(Self::Decimal),
            "=" => Some(Self::Equals),
            "C" => Some(Self::Clear),
            Self::BACKSPACE_GLYPH => Some(Self::Backspace),
            _ => Operator::from_glyph(label)
                .map(Self::Operator)
                .or_else(|| single_digit(label).map(Self::Digit)),
        }
    }

    /// Returns the label printed on the key
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Digit(d) => d.to_string(),
            Self::Decimal => ".".to_string(),
            Self::Operator(op) => op.symbol().to_string(),
            Self::Equals => "=".to_string(),
            Self::Clear => "C".to_string(),
            Self::Backspace => Self::BACKSPACE_GLYPH.to_string(),
        }
    }

    /// Returns the element ID used for this key
    #[must_use]
    pub fn id(&self) -> String {
        match self {
            Self::Digit(d) => format!("btn-{d}"),
            Self::Decimal => "btn-decimal".to_string(),
            Self::Operator(op) => format!("btn-{}", op.name()),
            Self::Equals => "btn-equals".to_string(),
            Self::Clear => "btn-clear".to_string(),
            Self::Backspace => "btn-backspace".to_string(),
        }
    }
}

fn single_digit(label: &str) -> Option<u8> {
    let mut chars = label.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => c.to_digit(10).and_then(|d| u8::try_from(d).ok()),
        _ => None,
    }
}
