//! Step definitions for checking what the calculator shows

use crate::common::world::CalcWorld;
use calcline::{DisplayMode, Operator};
use cucumber::then;

#[then(expr = "the display shows {string}")]
async fn then_display_shows(world: &mut CalcWorld, expected: String) {
    assert_eq!(world.display(), expected);
    assert_eq!(world.calculator.model().display(), expected);
}

#[then(expr = "the display has {int} characters")]
async fn then_display_length(world: &mut CalcWorld, expected: usize) {
    assert_eq!(world.display().chars().count(), expected);
}

#[then(expr = "the accumulator is {float}")]
async fn then_accumulator(world: &mut CalcWorld, expected: f64) {
    assert_eq!(world.calculator.model().result(), expected);
}

#[then(expr = "the pending operator is {string}")]
async fn then_pending_operator(world: &mut CalcWorld, symbol: String) {
    let expected =
        Operator::from_symbol(&symbol).unwrap_or_else(|| panic!("Unknown operator '{symbol}'"));
    assert_eq!(world.calculator.model().operator(), expected);
}

#[then(expr = "the calculator is in {word} mode")]
async fn then_mode(world: &mut CalcWorld, mode: String) {
    let expected = match mode.as_str() {
        "entry" => DisplayMode::Entry,
        "result" => DisplayMode::Result,
        other => panic!("Unknown mode '{other}'"),
    };
    assert_eq!(world.calculator.model().mode(), expected);
}

#[then("the last key was ignored")]
async fn then_key_ignored(world: &mut CalcWorld) {
    assert_eq!(world.last_handled, Some(false));
}

#[then("the last key was handled")]
async fn then_key_handled(world: &mut CalcWorld) {
    assert_eq!(world.last_handled, Some(true));
}
