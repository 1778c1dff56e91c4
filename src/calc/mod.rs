//! # Calculator
//!
//! Entry/display state machine, keyboard dispatch and the terminal front end.

pub mod commands;
pub mod controller;
pub mod controllers;
pub mod events;
pub mod io;
pub mod models;
pub mod script;
pub mod views;

pub use commands::{default_aliases, KeyBinding, KeyDispatcher};
pub use controller::DisplayController;
pub use controllers::AppController;
pub use events::{CalcEvent, Key, KeyPress};
pub use io::{DisplaySurface, EventStream, MemoryDisplay, RenderStream};
pub use models::{
    ButtonAction, CalcSnapshot, CalculatorModel, DisplayMode, Keypad, Operator, MAX_CHARS,
};
pub use script::{parse_script, run_script};
pub use views::{TerminalRenderer, ViewRenderer};
