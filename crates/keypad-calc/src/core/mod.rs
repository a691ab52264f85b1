//! Core calculator: arithmetic, number text and the button state machine
//!
//! Error prevention: the evaluator returns a typed result, and only the
//! screen decides how a failure is rendered.

mod button;
mod number;
mod operations;
mod screen;
mod state;

pub use button::Button;
pub use number::{format_number, parse_display};
pub use operations::{evaluate, Operator};
pub use screen::Screen;
pub use state::{transition, CalcState, PendingOp, Phase};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type for calculator operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Calculator error - a single kind, detected after the arithmetic ran
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum CalcError {
    /// The operation produced no usable number
    #[error("Invalid result: {0}")]
    InvalidResult(InvalidCause),
}

impl CalcError {
    /// Division with a zero divisor
    #[must_use]
    pub const fn division_by_zero() -> Self {
        Self::InvalidResult(InvalidCause::DivisionByZero)
    }

    /// NaN or infinite result
    #[must_use]
    pub const fn not_finite() -> Self {
        Self::InvalidResult(InvalidCause::NotFinite)
    }

    /// Why the result was rejected
    #[must_use]
    pub const fn cause(&self) -> InvalidCause {
        match self {
            Self::InvalidResult(cause) => *cause,
        }
    }
}

/// What made a result invalid. Only used for diagnostics; both causes
/// surface identically on the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvalidCause {
    /// Divisor was zero
    DivisionByZero,
    /// NaN or infinity after computing
    NotFinite,
}

impl std::fmt::Display for InvalidCause {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DivisionByZero => write!(f, "division by zero"),
            Self::NotFinite => write!(f, "result is not a finite number"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calc_error_display_division_by_zero() {
        let err = CalcError::division_by_zero();
        assert_eq!(format!("{err}"), "Invalid result: division by zero");
    }

    #[test]
    fn test_calc_error_display_not_finite() {
        let err = CalcError::not_finite();
        assert_eq!(
            format!("{err}"),
            "Invalid result: result is not a finite number"
        );
    }

    #[test]
    fn test_calc_error_cause() {
        assert_eq!(
            CalcError::division_by_zero().cause(),
            InvalidCause::DivisionByZero
        );
        assert_eq!(CalcError::not_finite().cause(), InvalidCause::NotFinite);
    }

    #[test]
    fn test_calc_error_is_error_trait() {
        let err: Box<dyn std::error::Error> = Box::new(CalcError::division_by_zero());
        assert!(err.to_string().contains("division"));
    }

    #[test]
    fn test_calc_error_serializes_cause() {
        let json = serde_json::to_string(&CalcError::not_finite()).unwrap();
        assert_eq!(json, r#"{"InvalidResult":"not_finite"}"#);
    }
}
