//! # Events Module
//!
//! Calculator input events and their translation from terminal events.

pub mod terminal_events;
pub mod types;

pub use terminal_events::{is_quit_request, key_press_from_crossterm};
pub use types::{CalcEvent, Key, KeyPress};
