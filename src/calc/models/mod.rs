//! # Models Module
//!
//! Logical calculator state with no knowledge of how it is displayed.

pub mod calculator_model;
pub mod keypad;
pub mod number;
pub mod operator;

pub use calculator_model::{CalcSnapshot, CalculatorModel, DisplayMode, MAX_CHARS};
pub use keypad::{Button, ButtonAction, Keypad};
pub use number::{finite_or_zero, format_number, parse_number_or_zero};
pub use operator::Operator;
