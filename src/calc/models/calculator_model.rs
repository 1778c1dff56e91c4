//! Calculator model: the entry/result state machine
//!
//! The model owns the display buffer together with the hidden state that
//! drives it: the accumulator, the pending operator and the display mode.
//! It contains only logical state. Mirroring the buffer to a screen is the
//! controller's job.
//!
//! ```text
//!              digit / . / 0
//!   ┌────────┐ ─────────────▶ ┌───────┐
//!   │ Result │                │ Entry │ ◀─┐ digit / . / 0 / ⌫ / %
//!   └────────┘ ◀───────────── └───────┘ ──┘
//!        ▲      operator / =
//!        └──── C (all clear)
//! ```

use serde::Serialize;

use super::number::{finite_or_zero, format_number, parse_number_or_zero};
use super::operator::Operator;

/// Maximum number of characters accepted while entering a number
pub const MAX_CHARS: usize = 23;

const ZERO: &str = "0";
const ZERO_DOT: &str = "0.";
const DOT: char = '.';
const NEG: char = '-';

/// Whether the buffer shows a committed value or one being typed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    /// The buffer holds a committed value; the next digit starts a fresh entry
    Result,
    /// The buffer is being built; digits append
    Entry,
}

/// Serializable view of the calculator state
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalcSnapshot {
    pub display: String,
    pub result: f64,
    pub operator: Operator,
    pub mode: DisplayMode,
}

/// The calculator state tuple and every editing operation on it
#[derive(Debug, Clone, PartialEq)]
pub struct CalculatorModel {
    buffer: String,
    result: f64,
    operator: Operator,
    mode: DisplayMode,
    max_chars: usize,
}

impl CalculatorModel {
    /// Create a model in its initial state: `"0"`, result 0, `+`, result mode
    pub fn new() -> Self {
        Self::with_max_chars(MAX_CHARS)
    }

    /// Create a model accepting at most `max_chars` typed characters
    pub fn with_max_chars(max_chars: usize) -> Self {
        Self {
            buffer: ZERO.to_string(),
            result: 0.0,
            operator: Operator::default(),
            mode: DisplayMode::Result,
            max_chars: max_chars.max(1),
        }
    }

    pub fn display(&self) -> &str {
        &self.buffer
    }

    pub fn result(&self) -> f64 {
        self.result
    }

    pub fn operator(&self) -> Operator {
        self.operator
    }

    pub fn mode(&self) -> DisplayMode {
        self.mode
    }

    pub fn max_chars(&self) -> usize {
        self.max_chars
    }

    pub fn is_showing_result(&self) -> bool {
        self.mode == DisplayMode::Result
    }

    pub fn snapshot(&self) -> CalcSnapshot {
        CalcSnapshot {
            display: self.buffer.clone(),
            result: self.result,
            operator: self.operator,
            mode: self.mode,
        }
    }

    fn len(&self) -> usize {
        self.buffer.chars().count()
    }

    fn has_room(&self) -> bool {
        self.len() < self.max_chars
    }

    fn activate_entry_state(&mut self) {
        self.mode = DisplayMode::Entry;
    }

    fn activate_result_state(&mut self) {
        self.mode = DisplayMode::Result;
    }

    /// Append a non-zero symbol (typically a digit 1-9).
    ///
    /// In result mode the symbol replaces the buffer and starts an entry.
    /// A lone `"0"` is replaced rather than extended.
    pub fn append_symbol(&mut self, symbol: &str) {
        if self.is_showing_result() {
            self.activate_entry_state();
            self.buffer = symbol.to_string();
        } else if self.buffer == ZERO {
            self.buffer = symbol.to_string();
        } else if self.has_room() {
            self.buffer.push_str(symbol);
        }
    }

    /// Enter a decimal digit. Non-digits are ignored.
    pub fn digit(&mut self, d: char) {
        match d {
            '0' => self.zero(),
            '1'..='9' => {
                let mut encoded = [0u8; 4];
                self.append_symbol(d.encode_utf8(&mut encoded));
            }
            _ => tracing::trace!("Ignoring non-digit '{}'", d),
        }
    }

    /// Enter a zero, suppressing redundant leading zeros
    pub fn zero(&mut self) {
        if self.is_showing_result() {
            self.activate_entry_state();
            self.buffer = ZERO.to_string();
            return;
        }

        if self.has_room() && self.buffer != ZERO {
            self.buffer.push('0');
        }
    }

    /// Enter the decimal point, at most once per entry
    pub fn decimal_point(&mut self) {
        if self.is_showing_result() {
            self.activate_entry_state();
            self.buffer = ZERO_DOT.to_string();
            return;
        }

        if self.has_room() && !self.buffer.contains(DOT) {
            self.buffer.push(DOT);
        }
    }

    /// Delete the last typed character. Does nothing while showing a result.
    pub fn backspace(&mut self) {
        if self.is_showing_result() {
            return;
        }

        if self.len() > 1 {
            self.buffer.pop();
        } else {
            self.buffer = ZERO.to_string();
        }

        if matches!(self.buffer.as_str(), "-" | "-0" | "-0.") {
            self.buffer = ZERO.to_string();
        }
    }

    /// Toggle the sign of the displayed value. Zero values are left alone.
    ///
    /// The sign is not counted against `max_chars`: a full buffer can still be
    /// negated, so the buffer holds at most `max_chars + 1` characters.
    pub fn negate(&mut self) {
        if self.buffer == ZERO || self.buffer == ZERO_DOT {
            return;
        }

        if self.is_showing_result() {
            self.result = -self.result;
        }

        self.buffer = match self.buffer.strip_prefix(NEG) {
            Some(rest) if !rest.is_empty() => rest.to_string(),
            _ => format!("{NEG}{}", self.buffer),
        };
    }

    /// Square root of the displayed value (and of the accumulator in result mode)
    pub fn sqrt(&mut self) {
        if self.is_showing_result() {
            self.result = finite_or_zero(self.result.sqrt());
        }
        self.buffer = format_number(parse_number_or_zero(&self.buffer).sqrt());
    }

    /// Replace the entry with that percentage of the accumulator.
    /// Does nothing while showing a result.
    pub fn percent(&mut self) {
        if self.is_showing_result() {
            return;
        }
        self.buffer = format_number(parse_number_or_zero(&self.buffer) * self.result / 100.0);
    }

    /// Reciprocal of the displayed value (and of the accumulator in result mode)
    pub fn reciprocal(&mut self) {
        if self.is_showing_result() {
            self.result = finite_or_zero(1.0 / self.result);
        }
        self.buffer = format_number(1.0 / parse_number_or_zero(&self.buffer));
    }

    /// Reset the whole state tuple
    pub fn all_clear(&mut self) {
        self.operator = Operator::default();
        self.result = 0.0;
        self.activate_result_state();
        self.buffer = ZERO.to_string();
    }

    /// Clear the entry, or everything right after a completed calculation
    pub fn clear_entry(&mut self) {
        if self.operator == Operator::Equals {
            self.all_clear();
        } else {
            self.buffer = ZERO.to_string();
        }
    }

    /// Select a binary operator.
    ///
    /// While entering, the pending operator is applied to the accumulator and
    /// the entry first, and the result is shown. While showing a result the
    /// pending operator is replaced.
    pub fn apply_operator(&mut self, operator: Operator) {
        if !self.is_showing_result() {
            let operand = parse_number_or_zero(&self.buffer);
            self.result = self.operator.apply(self.result, operand);
            self.buffer = format_number(self.result);
            self.activate_result_state();
        }
        self.operator = operator;
    }

    /// Commit the pending calculation
    pub fn equals(&mut self) {
        self.apply_operator(Operator::Equals);
    }
}

impl Default for CalculatorModel {
    fn default() -> Self {
        Self::new()
    }
}
