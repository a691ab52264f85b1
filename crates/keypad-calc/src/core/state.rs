//! Calculator state machine
//!
//! Error prevention: the pending operand and operator live in one
//! `Option`, so one can never be set without the other.

use crate::core::{evaluate, format_number, parse_display, Button, CalcError, Operator, Screen};
use serde::{Deserialize, Serialize};

/// Left operand and operator waiting for a right operand
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PendingOp {
    /// Left-hand value
    pub operand: f64,
    /// Operator to apply
    pub operator: Operator,
}

/// Coarse machine state, for logging and display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// No operator chosen
    Idle,
    /// Operator chosen, waiting for the second operand
    OperatorPending,
    /// Last evaluation failed
    Error,
}

/// Complete interaction state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalcState {
    screen: Screen,
    pending: Option<PendingOp>,
    awaiting_new_operand: bool,
}

impl Default for CalcState {
    fn default() -> Self {
        Self::new()
    }
}

impl CalcState {
    /// Initial state: "0", nothing pending
    #[must_use]
    pub fn new() -> Self {
        Self {
            screen: Screen::zero(),
            pending: None,
            awaiting_new_operand: false,
        }
    }

    /// Returns the screen
    #[must_use]
    pub const fn screen(&self) -> &Screen {
        &self.screen
    }

    /// Returns the text to display
    #[must_use]
    pub fn display(&self) -> String {
        self.screen.to_string()
    }

    /// Returns the pending operation
    #[must_use]
    pub const fn pending(&self) -> Option<PendingOp> {
        self.pending
    }

    /// Returns the pending left operand
    #[must_use]
    pub fn first_operand(&self) -> Option<f64> {
        self.pending.map(|p| p.operand)
    }

    /// Returns the pending operator
    #[must_use]
    pub fn pending_operator(&self) -> Option<Operator> {
        self.pending.map(|p| p.operator)
    }

    /// True right after an operator or equals press
    #[must_use]
    pub const fn awaiting_new_operand(&self) -> bool {
        self.awaiting_new_operand
    }

    /// Returns true when showing an error
    #[must_use]
    pub const fn is_error(&self) -> bool {
        self.screen.is_error()
    }

    /// Returns the coarse machine state
    #[must_use]
    pub const fn phase(&self) -> Phase {
        if self.screen.is_error() {
            Phase::Error
        } else if self.pending.is_some() {
            Phase::OperatorPending
        } else {
            Phase::Idle
        }
    }

    /// Applies one button press and returns the next state
    #[must_use]
    pub fn apply(mut self, button: Button) -> Self {
        match button {
            Button::Digit(d) => self.input_digit(d),
            Button::Decimal => self.input_decimal(),
            Button::Backspace => self.backspace(),
            Button::Clear => self = Self::new(),
            Button::Operator(op) => self.choose_operator(op),
            Button::Equals => self.equals(),
        }
        self
    }

    fn input_digit(&mut self, digit: u8) {
        let Some(ch) = char::from_digit(u32::from(digit), 10) else {
            return;
        };
        let Screen::Entry(text) = &mut self.screen else {
            return;
        };

        if self.awaiting_new_operand {
            *text = ch.to_string();
            self.awaiting_new_operand = false;
        } else if *text == "0" {
            *text = ch.to_string();
        } else {
            text.push(ch);
        }
    }

    fn input_decimal(&mut self) {
        let Screen::Entry(text) = &mut self.screen else {
            return;
        };

        if self.awaiting_new_operand {
            *text = "0.".to_string();
            self.awaiting_new_operand = false;
        } else if !text.contains('.') {
            text.push('.');
        }
    }

    fn backspace(&mut self) {
        if self.awaiting_new_operand {
            return;
        }
        let Screen::Entry(text) = &mut self.screen else {
            return;
        };

        if text.chars().count() <= 1 {
            *text = "0".to_string();
        } else {
            text.pop();
        }
    }

    fn choose_operator(&mut self, operator: Operator) {
        let Screen::Entry(text) = &self.screen else {
            return;
        };
        let input = parse_display(text);

        let operand = match self.pending {
            None => input,
            Some(pending) => match evaluate(pending.operand, input, pending.operator) {
                Ok(result) => {
                    self.screen = Screen::Entry(format_number(result));
                    result
                }
                Err(err) => {
                    self.fail(err);
                    return;
                }
            },
        };

        self.pending = Some(PendingOp { operand, operator });
        self.awaiting_new_operand = true;
    }

    fn equals(&mut self) {
        if self.awaiting_new_operand {
            return;
        }
        let Some(pending) = self.pending else {
            return;
        };
        let Screen::Entry(text) = &self.screen else {
            return;
        };
        let input = parse_display(text);

        self.screen = match evaluate(pending.operand, input, pending.operator) {
            Ok(result) => Screen::Entry(format_number(result)),
            Err(err) => Screen::Error(err),
        };
        self.pending = None;
        self.awaiting_new_operand = true;
    }

    fn fail(&mut self, err: CalcError) {
        self.screen = Screen::Error(err);
        self.pending = None;
        self.awaiting_new_operand = true;
    }
}

/// Pure transition function: `state` + `button` -> next state
#[must_use]
pub fn transition(state: CalcState, button: Button) -> CalcState {
    state.apply(button)
}
