//! # Key Binding Infrastructure
//!
//! A key binding decides whether it handles a key press and which keypad
//! action the press stands for. Bindings are checked in order by the
//! [`KeyDispatcher`](super::KeyDispatcher); the first relevant one wins.

use std::collections::BTreeMap;

use crate::calc::{
    events::{Key, KeyPress},
    models::{ButtonAction, Keypad, Operator},
};

/// Read-only context available to bindings
#[derive(Debug, Clone, Copy)]
pub struct DispatchContext<'a> {
    pub keypad: &'a Keypad,
    /// Key text to keypad label substitutions
    pub aliases: &'a BTreeMap<String, String>,
}

/// A keyboard rule
///
/// Only one binding handles any given key press. A relevant binding may
/// resolve to no action, which swallows the press.
pub trait KeyBinding: Send + Sync {
    /// Check if this binding handles the key press
    fn is_relevant(&self, press: &KeyPress, context: &DispatchContext) -> bool;

    /// Action the key press triggers, if any
    fn resolve(&self, press: &KeyPress, context: &DispatchContext) -> Option<ButtonAction>;

    /// Binding name for logging
    fn name(&self) -> &'static str;
}

/// Backspace deletes, and keeps deleting while held down
pub struct BackspaceBinding;

impl KeyBinding for BackspaceBinding {
    fn is_relevant(&self, press: &KeyPress, _context: &DispatchContext) -> bool {
        press.key == Key::Backspace
    }

    fn resolve(&self, _press: &KeyPress, _context: &DispatchContext) -> Option<ButtonAction> {
        Some(ButtonAction::Backspace)
    }

    fn name(&self) -> &'static str {
        "Backspace"
    }
}

/// Swallows auto-repeated presses of every other key
pub struct RepeatGuardBinding;

impl KeyBinding for RepeatGuardBinding {
    fn is_relevant(&self, press: &KeyPress, _context: &DispatchContext) -> bool {
        press.repeat
    }

    fn resolve(&self, _press: &KeyPress, _context: &DispatchContext) -> Option<ButtonAction> {
        None
    }

    fn name(&self) -> &'static str {
        "RepeatGuard"
    }
}

/// Enter or Return commits the calculation
pub struct EqualsBinding;

impl KeyBinding for EqualsBinding {
    fn is_relevant(&self, press: &KeyPress, _context: &DispatchContext) -> bool {
        press.key == Key::Enter
    }

    fn resolve(&self, _press: &KeyPress, _context: &DispatchContext) -> Option<ButtonAction> {
        Some(ButtonAction::Operator(Operator::Equals))
    }

    fn name(&self) -> &'static str {
        "Equals"
    }
}

/// Insert toggles the sign
pub struct NegateBinding;

impl KeyBinding for NegateBinding {
    fn is_relevant(&self, press: &KeyPress, _context: &DispatchContext) -> bool {
        press.key == Key::Insert
    }

    fn resolve(&self, _press: &KeyPress, _context: &DispatchContext) -> Option<ButtonAction> {
        Some(ButtonAction::Negate)
    }

    fn name(&self) -> &'static str {
        "Negate"
    }
}

/// Delete behaves like the CE button
pub struct ClearEntryBinding;

impl KeyBinding for ClearEntryBinding {
    fn is_relevant(&self, press: &KeyPress, _context: &DispatchContext) -> bool {
        press.key == Key::Delete
    }

    fn resolve(&self, _press: &KeyPress, _context: &DispatchContext) -> Option<ButtonAction> {
        Some(ButtonAction::ClearEntry)
    }

    fn name(&self) -> &'static str {
        "ClearEntry"
    }
}

/// Any other key activates the button whose label equals the key text
pub struct LabelBinding;

impl LabelBinding {
    fn label_for<'a>(press: &KeyPress, context: &DispatchContext<'a>) -> Option<&'a str> {
        let text = press.key.text();
        let label = context
            .aliases
            .get(&text)
            .map(String::as_str)
            .unwrap_or(text.as_str());
        context.keypad.find(label).map(|button| button.label.as_str())
    }
}

impl KeyBinding for LabelBinding {
    fn is_relevant(&self, press: &KeyPress, context: &DispatchContext) -> bool {
        Self::label_for(press, context).is_some()
    }

    fn resolve(&self, press: &KeyPress, context: &DispatchContext) -> Option<ButtonAction> {
        Self::label_for(press, context).and_then(|label| context.keypad.action_for(label))
    }

    fn name(&self) -> &'static str {
        "Label"
    }
}
