//! On-screen keypad: button labels and the action each one triggers
//!
//! Labels are unique. The keyboard adapter resolves most keys by comparing
//! the key text against these labels, so changing a label changes which key
//! activates it.

use super::operator::Operator;

/// What pressing a keypad button does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonAction {
    /// Append a digit (`'0'` routes to the zero rules)
    Digit(char),
    Decimal,
    Backspace,
    Negate,
    Sqrt,
    Percent,
    Reciprocal,
    ClearEntry,
    AllClear,
    /// Commit the pending operator and select a new one (`=` included)
    Operator(Operator),
}

/// A single keypad button
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Button {
    pub label: String,
    pub action: ButtonAction,
}

impl Button {
    pub fn new(label: impl Into<String>, action: ButtonAction) -> Self {
        Self {
            label: label.into(),
            action,
        }
    }
}

/// Keypad arranged in rows, top to bottom
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keypad {
    rows: Vec<Vec<Button>>,
}

impl Keypad {
    /// Create a keypad from rows of buttons.
    ///
    /// Later duplicates of a label are dropped so label lookup stays unambiguous.
    pub fn new(rows: Vec<Vec<Button>>) -> Self {
        let mut seen = std::collections::HashSet::new();
        let rows = rows
            .into_iter()
            .map(|row| {
                row.into_iter()
                    .filter(|button| {
                        let fresh = seen.insert(button.label.clone());
                        if !fresh {
                            tracing::warn!("Dropping duplicate keypad label '{}'", button.label);
                        }
                        fresh
                    })
                    .collect::<Vec<_>>()
            })
            .filter(|row| !row.is_empty())
            .collect();
        Self { rows }
    }

    /// The standard calculator layout
    pub fn standard() -> Self {
        let op = |operator: Operator| {
            Button::new(operator.symbol(), ButtonAction::Operator(operator))
        };
        let digit = |d: char| Button::new(d.to_string(), ButtonAction::Digit(d));

        Self::new(vec![
            vec![
                Button::new("%", ButtonAction::Percent),
                Button::new("CE", ButtonAction::ClearEntry),
                Button::new("C", ButtonAction::AllClear),
                Button::new("⌫", ButtonAction::Backspace),
            ],
            vec![
                Button::new("1/x", ButtonAction::Reciprocal),
                Button::new("√", ButtonAction::Sqrt),
                Button::new("±", ButtonAction::Negate),
                op(Operator::Divide),
            ],
            vec![digit('7'), digit('8'), digit('9'), op(Operator::Multiply)],
            vec![digit('4'), digit('5'), digit('6'), op(Operator::Subtract)],
            vec![digit('1'), digit('2'), digit('3'), op(Operator::Add)],
            vec![
                digit('0'),
                Button::new(".", ButtonAction::Decimal),
                op(Operator::Equals),
            ],
        ])
    }

    pub fn rows(&self) -> &[Vec<Button>] {
        &self.rows
    }

    /// All buttons in reading order
    pub fn buttons(&self) -> impl Iterator<Item = &Button> {
        self.rows.iter().flatten()
    }

    /// Action bound to the button with exactly this label
    pub fn action_for(&self, label: &str) -> Option<ButtonAction> {
        self.find(label).map(|button| button.action)
    }

    pub fn find(&self, label: &str) -> Option<&Button> {
        self.buttons().find(|button| button.label == label)
    }

    pub fn len(&self) -> usize {
        self.buttons().count()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl Default for Keypad {
    fn default() -> Self {
        Self::standard()
    }
}
