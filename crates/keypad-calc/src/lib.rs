//! Keypad Calculator - button-driven four-function calculator
//!
//! The calculator is a pure state machine: a `CalcState` plus one `Button`
//! press yields the next `CalcState`. Nothing here touches a UI, so every
//! scenario is unit-testable.
//!
//! # Principles
//!
//! - **Error prevention**: operators and presses are closed enums; glyphs
//!   are normalized before dispatch
//! - **Sticky errors**: a failed evaluation blocks input until Clear
//! - **Balanced testing**: front ends share the `CalculatorDriver` trait
//!
//! # Example
//!
//! ```rust
//! use keypad_calc::prelude::*;
//!
//! let state = ["9", "÷", "0", "="]
//!     .into_iter()
//!     .filter_map(Button::from_label)
//!     .fold(CalcState::new(), CalcState::apply);
//! assert_eq!(state.display(), "Error");
//!
//! // Only Clear recovers
//! let state = state.apply(Button::Digit(1)).apply(Button::Clear);
//! assert_eq!(state.display(), "0");
//! ```

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod core;
pub mod driver;
pub mod keypad;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::core::{
        evaluate, format_number, parse_display, transition, Button, CalcError, CalcResult,
        CalcState, InvalidCause, Operator, PendingOp, Phase, Screen,
    };
    pub use crate::driver::{press_sequence, CalculatorDriver, Session};
    pub use crate::keypad::{Keypad, KeypadButtonDef};
}
