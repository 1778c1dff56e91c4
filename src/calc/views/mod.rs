//! # Views Module
//!
//! Terminal rendering of the calculator.

pub mod layout;
pub mod terminal_renderer;

pub use layout::{KeypadLayout, PlacedButton};
pub use terminal_renderer::{TerminalRenderer, ViewRenderer, DEFAULT_ORIGIN};
