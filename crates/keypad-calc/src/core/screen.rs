//! What the calculator screen shows

use crate::core::{parse_display, CalcError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Screen contents: an editable number, or a failed evaluation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Screen {
    /// Digits being entered or the last result
    Entry(String),
    /// Last evaluation failed; sticky until cleared
    Error(CalcError),
}

impl Default for Screen {
    fn default() -> Self {
        Self::zero()
    }
}

impl Screen {
    /// Text shown for any failed evaluation
    pub const ERROR_TEXT: &'static str = "Error";

    /// The initial "0" screen
    #[must_use]
    pub fn zero() -> Self {
        Self::Entry("0".to_string())
    }

    /// Returns true when showing an error
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    /// Returns the entry text, if not in error
    #[must_use]
    pub fn entry(&self) -> Option<&str> {
        match self {
            Self::Entry(text) => Some(text),
            Self::Error(_) => None,
        }
    }

    /// Returns the error, if any
    #[must_use]
    pub const fn error(&self) -> Option<CalcError> {
        match self {
            Self::Entry(_) => None,
            Self::Error(err) => Some(*err),
        }
    }

    /// Numeric value of the entry; NaN when in error
    #[must_use]
    pub fn value(&self) -> f64 {
        self.entry().map_or(f64::NAN, parse_display)
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Entry(text) => f.write_str(text),
            Self::Error(_) => f.write_str(Self::ERROR_TEXT),
        }
    }
}
