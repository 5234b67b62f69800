//! Editable player-name input.
//!
//! Applies the engine's own sanitizer on every keystroke, so the field can
//! never hold a name the engine would change.

use tictactoe_core::names;

/// A single-line name input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameField {
    value: String,
}

impl NameField {
    /// Creates a field holding the sanitized `initial`.
    pub fn new(initial: &str) -> Self {
        Self {
            value: names::sanitize(initial),
        }
    }

    /// Appends a typed character, if it survives sanitization.
    pub fn push(&mut self, c: char) {
        self.value.push(c);
        self.value = names::sanitize(&self.value);
    }

    /// Deletes the last character.
    pub fn pop(&mut self) {
        self.value.pop();
    }

    /// Empties the field.
    pub fn clear(&mut self) {
        self.value.clear();
    }

    /// Current contents.
    pub fn value(&self) -> &str {
        &self.value
    }
}
