//! Calculator driver
//!
//! Balanced testing: scenarios are written once against `CalculatorDriver`
//! and run against any front end that implements it.

use crate::core::{Button, CalcState, Phase};
use tracing::{debug, trace, warn};

/// Abstract driver for button-driven calculator interactions
///
/// # Example
///
/// ```rust
/// use keypad_calc::driver::{press_sequence, CalculatorDriver, Session};
///
/// let mut session = Session::new();
/// assert_eq!(press_sequence(&mut session, ["5", "+", "3", "="]), "8");
/// ```
pub trait CalculatorDriver {
    /// Presses the button with this label. Returns false when the label is
    /// not a known button and nothing happened.
    fn press(&mut self, label: &str) -> bool;

    /// Gets the current display text
    fn display(&self) -> String;

    /// Resets to the initial state
    fn clear(&mut self);

    /// Gets the full state
    fn state(&self) -> &CalcState;
}

/// Presses every label in order and returns the final display
pub fn press_sequence<D, I, S>(driver: &mut D, labels: I) -> String
where
    D: CalculatorDriver + ?Sized,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    for label in labels {
        driver.press(label.as_ref());
    }
    driver.display()
}

/// In-process driver holding a single `CalcState`
#[derive(Debug, Clone, Default)]
pub struct Session {
    state: CalcState,
    presses: usize,
    ignored: usize,
}

impl Session {
    /// Creates a session in the initial state
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a session resuming from `state`
    #[must_use]
    pub fn with_state(state: CalcState) -> Self {
        Self {
            state,
            ..Self::default()
        }
    }

    /// Applies a press and returns the new state
    pub fn press_button(&mut self, button: Button) -> &CalcState {
        let before = self.state.phase();
        self.state = std::mem::take(&mut self.state).apply(button);
        self.presses += 1;

        debug!(
            ?button,
            display = %self.state.screen(),
            phase = ?self.state.phase(),
            "button pressed"
        );
        if before != Phase::Error {
            if let Some(err) = self.state.screen().error() {
                warn!(error = %err, ?button, "evaluation failed");
            }
        }

        &self.state
    }

    /// Number of accepted presses
    #[must_use]
    pub const fn presses(&self) -> usize {
        self.presses
    }

    /// Number of labels that matched no button
    #[must_use]
    pub const fn ignored(&self) -> usize {
        self.ignored
    }

    /// Consumes the session, returning its state
    #[must_use]
    pub fn into_state(self) -> CalcState {
        self.state
    }
}

impl CalculatorDriver for Session {
    fn press(&mut self, label: &str) -> bool {
        if let Some(button) = Button::from_label(label) {
            self.press_button(button);
            true
        } else {
            self.ignored += 1;
            trace!(label, "ignoring unknown button label");
            false
        }
    }

    fn display(&self) -> String {
        self.state.display()
    }

    fn clear(&mut self) {
        self.press_button(Button::Clear);
    }

    fn state(&self) -> &CalcState {
        &self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Operator;

    #[test]
    fn test_session_new() {
        let session = Session::new();
        assert_eq!(session.display(), "0");
        assert_eq!(session.presses(), 0);
        assert_eq!(session.ignored(), 0);
    }

    #[test]
    fn test_press_known_label() {
        let mut session = Session::new();
        assert!(session.press("7"));
        assert_eq!(session.display(), "7");
        assert_eq!(session.presses(), 1);
    }

    #[test]
    fn test_press_unknown_label() {
        let mut session = Session::new();
        assert!(!session.press("sqrt"));
        assert_eq!(session.display(), "0");
        assert_eq!(session.presses(), 0);
        assert_eq!(session.ignored(), 1);
    }

    #[test]
    fn test_press_sequence_returns_display() {
        let mut session = Session::new();
        assert_eq!(press_sequence(&mut session, ["1", ".", "2", ".", "5"]), "1.25");
    }

    #[test]
    fn test_press_sequence_accepts_owned_strings() {
        let mut session = Session::new();
        let labels = vec!["4".to_string(), "×".to_string(), "2".to_string(), "=".to_string()];
        assert_eq!(press_sequence(&mut session, labels), "8");
    }

    #[test]
    fn test_clear() {
        let mut session = Session::new();
        press_sequence(&mut session, ["9", "÷", "0", "="]);
        assert_eq!(session.display(), "Error");
        session.clear();
        assert_eq!(session.state(), &CalcState::new());
    }

    #[test]
    fn test_press_button_returns_state() {
        let mut session = Session::new();
        session.press_button(Button::Digit(3));
        let state = session.press_button(Button::Operator(Operator::Add));
        assert_eq!(state.first_operand(), Some(3.0));
    }

    #[test]
    fn test_with_state_resumes() {
        let state = CalcState::new().apply(Button::Digit(4));
        let mut session = Session::with_state(state);
        session.press("2");
        assert_eq!(session.into_state().display(), "42");
    }

    #[test]
    fn test_driver_as_trait_object() {
        let mut session = Session::new();
        let driver: &mut dyn CalculatorDriver = &mut session;
        assert_eq!(press_sequence(driver, ["5", "+", "3", "="]), "8");
    }
}
