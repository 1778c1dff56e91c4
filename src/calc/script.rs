//! Headless key scripts
//!
//! A script is a whitespace-separated list of tokens. Key names
//! (`Backspace`, `Enter`, `Return`, `Insert`, `Delete`) and single characters
//! become key presses and go through the keyboard dispatcher like real
//! typing. Any other token is a keypad button label such as `CE` or `1/x`.

use crate::calc::{
    controller::DisplayController,
    events::{CalcEvent, Key, KeyPress},
    io::MemoryDisplay,
    models::CalcSnapshot,
};
use crate::config::CalcSettings;

/// Turn a script into calculator events
pub fn parse_script(script: &str) -> Vec<CalcEvent> {
    script
        .split_whitespace()
        .map(|token| match Key::from_name(token) {
            Some(key) => CalcEvent::KeyPress(KeyPress::new(key)),
            None => CalcEvent::button(token),
        })
        .collect()
}

/// Run a script against a fresh calculator and return its final state
pub fn run_script(settings: &CalcSettings, script: &str) -> CalcSnapshot {
    let mut controller = DisplayController::with_parts(
        settings.model(),
        Default::default(),
        settings.dispatcher(),
        MemoryDisplay::new(),
    );

    for event in parse_script(script) {
        if !controller.handle_event(&event) {
            tracing::debug!("Script event {:?} had no effect", event);
        }
    }

    controller.snapshot()
}
