//! Abstract input key event, independent of the browser event types.
//!
//! The web frontend converts `KeyboardEvent`s into [`KeyInput`] at the DOM
//! boundary so key mapping can be tested natively.

/// Abstract key, converted from `KeyboardEvent::key()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputKey {
    /// Printable character other than space
    Char(char),
    Space,
    Up,
    Down,
    Left,
    Right,
    Esc,
    /// Any key without a binding
    Other,
}

impl InputKey {
    /// Map a DOM `KeyboardEvent.key` value.
    pub fn from_dom_key(key: &str) -> Self {
        match key {
            " " | "Spacebar" => InputKey::Space,
            "ArrowUp" => InputKey::Up,
            "ArrowDown" => InputKey::Down,
            "ArrowLeft" => InputKey::Left,
            "ArrowRight" => InputKey::Right,
            "Escape" | "Esc" => InputKey::Esc,
            _ => {
                let mut chars = key.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => InputKey::Char(c),
                    _ => InputKey::Other,
                }
            }
        }
    }
}

/// A key press with the context needed to decide whether it is bound.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyInput {
    pub key: InputKey,
    pub ctrl: bool,
    pub meta: bool,
    pub alt: bool,
    /// Focus is inside a text input or textarea
    pub in_text_field: bool,
}

impl KeyInput {
    /// Plain key press: no modifiers, focus outside text fields.
    pub fn plain(key: InputKey) -> Self {
        Self {
            key,
            ctrl: false,
            meta: false,
            alt: false,
            in_text_field: false,
        }
    }

    pub fn has_modifier(&self) -> bool {
        self.ctrl || self.meta || self.alt
    }
}
