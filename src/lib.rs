//! # calcline - Keypad Calculator for the Terminal
//!
//! A four-function calculator with a clickable keypad and full keyboard
//! control. The display text is owned by a small state machine; the screen
//! only mirrors it.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐  crossterm   ┌───────────────┐  CalcEvent  ┌───────────────────┐
//! │ EventStream │─────────────►│ AppController │────────────►│ DisplayController │
//! └─────────────┘              └───────┬───────┘             │                   │
//!                                      │ redraw              │ - KeyDispatcher   │
//!                                      ▼                     │ - Keypad          │
//!                              ┌──────────────────┐  text    │ - CalculatorModel │
//!                              │ TerminalRenderer │◄─────────│                   │
//!                              │ (DisplaySurface) │          └───────────────────┘
//!                              └──────────────────┘
//! ```
//!
//! The same [`DisplayController`] runs headless over a [`MemoryDisplay`],
//! which is how key scripts and tests drive it.

pub mod calc;
pub mod cmd_args;
pub mod config;

pub use calc::*;
pub use config::CalcSettings;
