//! # Core Event Types
//!
//! Input reaching the calculator: key presses and keypad button activations.

/// A keyboard key, reduced to what the calculator cares about
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Key {
    Backspace,
    /// Enter or Return
    Enter,
    Insert,
    Delete,
    Escape,
    /// A key producing a single printable character
    Char(char),
    /// Any other named key
    Other(String),
}

impl Key {
    /// Classic numeric key code
    pub fn code(&self) -> u32 {
        match self {
            Key::Backspace => 8,
            Key::Enter => 13,
            Key::Escape => 27,
            Key::Insert => 45,
            Key::Delete => 46,
            Key::Char(ch) => *ch as u32,
            Key::Other(_) => 0,
        }
    }

    /// Key name as text; printable keys produce their character
    pub fn text(&self) -> String {
        match self {
            Key::Backspace => "Backspace".to_string(),
            Key::Enter => "Enter".to_string(),
            Key::Insert => "Insert".to_string(),
            Key::Delete => "Delete".to_string(),
            Key::Escape => "Escape".to_string(),
            Key::Char(ch) => ch.to_string(),
            Key::Other(name) => name.clone(),
        }
    }

    /// Parse a key name such as `Backspace` or `Return`.
    ///
    /// Single characters become [`Key::Char`]; unknown names yield `None`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Backspace" => Some(Key::Backspace),
            "Enter" | "Return" => Some(Key::Enter),
            "Insert" => Some(Key::Insert),
            "Delete" => Some(Key::Delete),
            "Escape" | "Esc" => Some(Key::Escape),
            _ => {
                let mut chars = name.chars();
                match (chars.next(), chars.next()) {
                    (Some(ch), None) => Some(Key::Char(ch)),
                    _ => None,
                }
            }
        }
    }
}

/// A single key press
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPress {
    pub key: Key,
    /// Classic numeric key code of `key`
    pub code: u32,
    /// Generated by holding the key down
    pub repeat: bool,
}

impl KeyPress {
    pub fn with_repeat(key: Key, repeat: bool) -> Self {
        let code = key.code();
        Self { key, code, repeat }
    }

    pub fn new(key: Key) -> Self {
        Self::with_repeat(key, false)
    }

    pub fn repeated(key: Key) -> Self {
        Self::with_repeat(key, true)
    }

    pub fn char(ch: char) -> Self {
        Self::new(Key::Char(ch))
    }
}

/// Input event delivered to the calculator
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CalcEvent {
    KeyPress(KeyPress),
    /// A keypad button was clicked
    ButtonActivate { label: String },
}

impl CalcEvent {
    pub fn key(key: Key) -> Self {
        CalcEvent::KeyPress(KeyPress::new(key))
    }

    pub fn button(label: impl Into<String>) -> Self {
        CalcEvent::ButtonActivate {
            label: label.into(),
        }
    }
}

impl From<KeyPress> for CalcEvent {
    fn from(press: KeyPress) -> Self {
        CalcEvent::KeyPress(press)
    }
}
