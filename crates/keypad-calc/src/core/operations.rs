//! Four-function arithmetic
//!
//! Error prevention: operators are a closed enum, so every glyph is
//! normalized before it reaches the evaluator.

use crate::core::{CalcError, CalcResult};
use serde::{Deserialize, Serialize};

/// Canonical operator tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operator {
    /// Addition (+)
    Add,
    /// Subtraction (−)
    Subtract,
    /// Multiplication (×)
    Multiply,
    /// Division (÷)
    Divide,
}

impl Operator {
    /// Every operator, in keypad order
    pub const ALL: [Self; 4] = [Self::Add, Self::Subtract, Self::Multiply, Self::Divide];

    /// Returns the glyph shown on the keypad
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "−",
            Self::Multiply => "×",
            Self::Divide => "÷",
        }
    }

    /// Returns a name for element IDs
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Add => "plus",
            Self::Subtract => "minus",
            Self::Multiply => "times",
            Self::Divide => "divide",
        }
    }

    /// Normalizes an operator glyph. ASCII hyphen and U+2212 both mean
    /// subtract; `*` and `/` are accepted for typed input.
    #[must_use]
    pub fn from_glyph(glyph: &str) -> Option<Self> {
        match glyph {
            "+" => Some(Self::Add),
            "-" | "−" => Some(Self::Subtract),
            "×" | "*" => Some(Self::Multiply),
            "÷" | "/" => Some(Self::Divide),
            _ => None,
        }
    }

    /// Applies this operator to two operands
    pub fn apply(self, a: f64, b: f64) -> CalcResult<f64> {
        evaluate(a, b, self)
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Evaluates `a op b`
///
/// A zero divisor is rejected up front; every other result is checked after
/// computing, so overflow to infinity and NaN operands are caught too.
pub fn evaluate(a: f64, b: f64, op: Operator) -> CalcResult<f64> {
    let raw = match op {
        Operator::Add => a + b,
        Operator::Subtract => a - b,
        Operator::Multiply => a * b,
        Operator::Divide => {
            if b == 0.0 {
                return Err(CalcError::division_by_zero());
            }
            a / b
        }
    };
    check_result(raw)
}

fn check_result(raw: f64) -> CalcResult<f64> {
    if raw.is_finite() {
        Ok(raw)
    } else {
        Err(CalcError::not_finite())
    }
}
