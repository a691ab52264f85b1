//! On-screen keypad layout
//!
//! Visual feedback: every button has a fixed grid slot and element ID, so
//! front ends can draw the same keypad and route clicks back to a `Button`.

use crate::core::{Button, Operator};
use serde::{Deserialize, Serialize};

/// A single keypad button definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeypadButtonDef {
    /// The press this button produces
    pub button: Button,
    /// Element ID for this button
    pub id: String,
    /// Grid row (0-indexed)
    pub row: usize,
    /// Grid column (0-indexed)
    pub col: usize,
}

impl KeypadButtonDef {
    /// Creates a new button definition
    #[must_use]
    pub fn new(button: Button, row: usize, col: usize) -> Self {
        Self {
            button,
            id: button.id(),
            row,
            col,
        }
    }

    /// Returns the key label
    #[must_use]
    pub fn label(&self) -> String {
        self.button.label()
    }
}

/// Keypad layout definition
/// Layout:
/// ```text
/// [ C ] [ ← ] [ ÷ ] [ × ]
/// [ 7 ] [ 8 ] [ 9 ] [ − ]
/// [ 4 ] [ 5 ] [ 6 ] [ + ]
/// [ 1 ] [ 2 ] [ 3 ] [ = ]
/// [ 0 ] [ . ]
/// ```
#[derive(Debug, Clone)]
pub struct Keypad {
    buttons: Vec<KeypadButtonDef>,
    cols: usize,
    rows: usize,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

impl Keypad {
    /// Creates the standard four-function keypad
    #[must_use]
    pub fn new() -> Self {
        use Button::{Backspace, Clear, Decimal, Digit, Equals};
        let op = Button::Operator;

        let buttons = vec![
            // Row 0: C ← ÷ ×
            KeypadButtonDef::new(Clear, 0, 0),
            KeypadButtonDef::new(Backspace, 0, 1),
            KeypadButtonDef::new(op(Operator::Divide), 0, 2),
            KeypadButtonDef::new(op(Operator::Multiply), 0, 3),
            // Row 1: 7 8 9 −
            KeypadButtonDef::new(Digit(7), 1, 0),
            KeypadButtonDef::new(Digit(8), 1, 1),
            KeypadButtonDef::new(Digit(9), 1, 2),
            KeypadButtonDef::new(op(Operator::Subtract), 1, 3),
            // Row 2: 4 5 6 +
            KeypadButtonDef::new(Digit(4), 2, 0),
            KeypadButtonDef::new(Digit(5), 2, 1),
            KeypadButtonDef::new(Digit(6), 2, 2),
            KeypadButtonDef::new(op(Operator::Add), 2, 3),
            // Row 3: 1 2 3 =
            KeypadButtonDef::new(Digit(1), 3, 0),
            KeypadButtonDef::new(Digit(2), 3, 1),
            KeypadButtonDef::new(Digit(3), 3, 2),
            KeypadButtonDef::new(Equals, 3, 3),
            // Row 4: 0 .
            KeypadButtonDef::new(Digit(0), 4, 0),
            KeypadButtonDef::new(Decimal, 4, 1),
        ];

        Self {
            buttons,
            cols: 4,
            rows: 5,
        }
    }

    /// Returns the number of buttons
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }

    /// Returns the grid dimensions (rows, cols)
    #[must_use]
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Gets all button definitions
    #[must_use]
    pub fn buttons(&self) -> &[KeypadButtonDef] {
        &self.buttons
    }

    /// Gets a button by index
    #[must_use]
    pub fn get_button(&self, index: usize) -> Option<&KeypadButtonDef> {
        self.buttons.get(index)
    }

    /// Gets a button by row and column. The last row is short, so empty
    /// slots return `None`.
    #[must_use]
    pub fn get_button_at(&self, row: usize, col: usize) -> Option<&KeypadButtonDef> {
        self.buttons.iter().find(|b| b.row == row && b.col == col)
    }

    /// Finds a button by its element ID
    #[must_use]
    pub fn find_button_by_id(&self, id: &str) -> Option<&KeypadButtonDef> {
        self.buttons.iter().find(|b| b.id == id)
    }

    /// Finds a button by label, after glyph normalization
    #[must_use]
    pub fn find_button_by_label(&self, label: &str) -> Option<&KeypadButtonDef> {
        let button = Button::from_label(label)?;
        self.buttons.iter().find(|b| b.button == button)
    }

    /// Maps a clicked element ID to its press
    #[must_use]
    pub fn handle_click(&self, element_id: &str) -> Option<Button> {
        self.find_button_by_id(element_id).map(|b| b.button)
    }

    /// Draws the keypad as text, one line per row
    #[must_use]
    pub fn render(&self) -> String {
        self.render_with(|label| format!("[ {label} ]"))
    }

    /// Draws the keypad, formatting each key with `cell`
    pub fn render_with<F>(&self, mut cell: F) -> String
    where
        F: FnMut(&str) -> String,
    {
        (0..self.rows)
            .map(|row| {
                (0..self.cols)
                    .filter_map(|col| self.get_button_at(row, col))
                    .map(|b| cell(&b.label()))
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_keypad_new() {
        let keypad = Keypad::new();
        assert_eq!(keypad.button_count(), 18);
        assert_eq!(keypad.dimensions(), (5, 4));
    }

    #[test]
    fn test_keypad_default() {
        assert_eq!(Keypad::default().button_count(), 18);
    }

    #[test]
    fn test_button_def_new() {
        let def = KeypadButtonDef::new(Button::Digit(5), 2, 1);
        assert_eq!(def.id, "btn-5");
        assert_eq!(def.label(), "5");
        assert_eq!((def.row, def.col), (2, 1));
    }

    #[test]
    fn test_get_button() {
        let keypad = Keypad::new();
        assert_eq!(keypad.get_button(0).unwrap().button, Button::Clear);
        assert!(keypad.get_button(18).is_none());
    }

    #[test]
    fn test_get_button_at() {
        let keypad = Keypad::new();
        assert_eq!(
            keypad.get_button_at(1, 3).unwrap().button,
            Button::Operator(Operator::Subtract)
        );
        assert_eq!(keypad.get_button_at(3, 3).unwrap().button, Button::Equals);
        assert_eq!(keypad.get_button_at(4, 1).unwrap().button, Button::Decimal);
    }

    #[test]
    fn test_get_button_at_empty_slot() {
        let keypad = Keypad::new();
        assert!(keypad.get_button_at(4, 2).is_none());
        assert!(keypad.get_button_at(4, 3).is_none());
        assert!(keypad.get_button_at(9, 0).is_none());
    }

    #[test]
    fn test_find_by_id() {
        let keypad = Keypad::new();
        let def = keypad.find_button_by_id("btn-divide").unwrap();
        assert_eq!(def.button, Button::Operator(Operator::Divide));
        assert!(keypad.find_button_by_id("btn-power").is_none());
    }

    #[test]
    fn test_find_by_label_normalizes_minus() {
        let keypad = Keypad::new();
        let ascii = keypad.find_button_by_label("-").unwrap();
        let unicode = keypad.find_button_by_label("−").unwrap();
        assert_eq!(ascii, unicode);
        assert_eq!(ascii.id, "btn-minus");
    }

    #[test]
    fn test_handle_click() {
        let keypad = Keypad::new();
        assert_eq!(keypad.handle_click("btn-7"), Some(Button::Digit(7)));
        assert_eq!(keypad.handle_click("btn-backspace"), Some(Button::Backspace));
        assert_eq!(keypad.handle_click("btn-unknown"), None);
    }

    #[test]
    fn test_all_digits_present() {
        let keypad = Keypad::new();
        for d in 0..=9 {
            assert!(keypad.handle_click(&format!("btn-{d}")).is_some());
        }
    }

    #[test]
    fn test_ids_unique() {
        let keypad = Keypad::new();
        let ids: std::collections::HashSet<_> =
            keypad.buttons().iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids.len(), keypad.button_count());
    }

    #[test]
    fn test_render() {
        let text = Keypad::new().render();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "[ C ] [ ← ] [ ÷ ] [ × ]");
        assert_eq!(lines[4], "[ 0 ] [ . ]");
    }

    #[test]
    fn test_render_with_custom_cell() {
        let text = Keypad::new().render_with(|label| label.to_string());
        assert!(text.starts_with("C ← ÷ ×"));
    }

    proptest! {
        #[test]
        fn prop_positions_inside_grid(index in 0usize..18) {
            let keypad = Keypad::new();
            let def = keypad.get_button(index).unwrap();
            let (rows, cols) = keypad.dimensions();
            prop_assert!(def.row < rows && def.col < cols);
            prop_assert_eq!(keypad.get_button_at(def.row, def.col), Some(def));
        }
    }
}
