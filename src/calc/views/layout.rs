//! Screen geometry of the calculator: display box and keypad grid
//!
//! ```text
//!  ┌─────────────────────────────┐   display box (top row = origin)
//!  │                        -1.5 │   buffer, right aligned
//!  │ 12 +                        │   accumulator and pending operator
//!  └─────────────────────────────┘
//!
//!  [  %  ] [ CE  ] [  C  ] [  ⌫  ]  keypad rows, one blank line apart
//! ```

use crate::calc::models::Keypad;

/// Width of a rendered button in cells
pub const BUTTON_WIDTH: u16 = 7;
/// Blank cells between buttons
pub const BUTTON_GAP: u16 = 1;
/// Rows taken by the display box
pub const DISPLAY_HEIGHT: u16 = 4;
/// Border and padding cells around the display text
const DISPLAY_FRAME: u16 = 4;

/// A button placed on screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacedButton {
    pub label: String,
    pub x: u16,
    pub y: u16,
}

impl PlacedButton {
    pub fn contains(&self, column: u16, row: u16) -> bool {
        row == self.y && column >= self.x && column < self.x + BUTTON_WIDTH
    }

    /// Button face, label centred between brackets
    pub fn face(&self) -> String {
        let inner = (BUTTON_WIDTH - 2) as usize;
        format!("[{:^inner$}]", self.label)
    }
}

/// Positions of every calculator element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeypadLayout {
    origin: (u16, u16),
    width: u16,
    buttons: Vec<PlacedButton>,
    keypad_rows: u16,
}

impl KeypadLayout {
    /// Lay out the keypad below the display box, starting at `origin`.
    ///
    /// The display box widens past the keypad when `display_chars` needs it.
    pub fn new(keypad: &Keypad, origin: (u16, u16), display_chars: usize) -> Self {
        let (left, top) = origin;
        let columns = keypad.rows().iter().map(Vec::len).max().unwrap_or(1).max(1) as u16;
        let keypad_width = columns * (BUTTON_WIDTH + BUTTON_GAP) - BUTTON_GAP;
        let display_width = u16::try_from(display_chars)
            .unwrap_or(u16::MAX)
            .saturating_add(DISPLAY_FRAME);
        let width = keypad_width.max(display_width);
        let keypad_top = top + DISPLAY_HEIGHT + 1;

        let buttons = keypad
            .rows()
            .iter()
            .enumerate()
            .flat_map(|(row_index, row)| {
                row.iter().enumerate().map(move |(column_index, button)| PlacedButton {
                    label: button.label.clone(),
                    x: left + column_index as u16 * (BUTTON_WIDTH + BUTTON_GAP),
                    y: keypad_top + row_index as u16 * 2,
                })
            })
            .collect();

        Self {
            origin,
            width,
            buttons,
            keypad_rows: keypad.rows().len() as u16,
        }
    }

    pub fn origin(&self) -> (u16, u16) {
        self.origin
    }

    /// Total width in cells
    pub fn width(&self) -> u16 {
        self.width
    }

    /// Total height in rows, including the hint line
    pub fn height(&self) -> u16 {
        DISPLAY_HEIGHT + 1 + self.keypad_rows * 2 + 1
    }

    /// Row of the hint line under the keypad
    pub fn hint_row(&self) -> u16 {
        self.origin.1 + self.height() - 1
    }

    /// Cells available for text inside the display box
    pub fn display_inner_width(&self) -> usize {
        self.width.saturating_sub(DISPLAY_FRAME) as usize
    }

    pub fn buttons(&self) -> &[PlacedButton] {
        &self.buttons
    }

    /// Label of the button under a screen cell
    pub fn button_at(&self, column: u16, row: u16) -> Option<&str> {
        self.buttons
            .iter()
            .find(|button| button.contains(column, row))
            .map(|button| button.label.as_str())
    }

    /// Whether the whole calculator fits in a terminal of this size
    pub fn fits(&self, size: (u16, u16)) -> bool {
        self.origin.0 + self.width <= size.0 && self.origin.1 + self.height() <= size.1
    }
}
