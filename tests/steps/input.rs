//! Step definitions for setting up the calculator and feeding it input

use crate::common::world::CalcWorld;
use calcline::{parse_script, KeyPress};
use cucumber::{given, when};

#[given("a fresh calculator")]
async fn given_fresh_calculator(world: &mut CalcWorld) {
    world.rebuild();
}

#[given(expr = "a calculator limited to {int} characters")]
async fn given_limited_calculator(world: &mut CalcWorld, max_chars: usize) {
    world.settings.max_chars = max_chars;
    world.rebuild();
}

#[given("the Insert key is not bound to negate")]
async fn given_insert_unbound(world: &mut CalcWorld) {
    world.settings.insert_negates = false;
    world.rebuild();
}

#[given(expr = "the key {string} is aliased to {string}")]
async fn given_alias(world: &mut CalcWorld, key: String, label: String) {
    world.settings.aliases.insert(key, label);
    world.rebuild();
}

#[when(expr = "I press the {string} button")]
async fn when_press_button(world: &mut CalcWorld, label: String) {
    world.press_button(&label);
}

#[when(expr = "I press the buttons {string}")]
async fn when_press_buttons(world: &mut CalcWorld, labels: String) {
    for label in labels.split_whitespace() {
        world.press_button(label);
    }
}

#[when(expr = "I type {string}")]
async fn when_type(world: &mut CalcWorld, text: String) {
    world.type_text(&text);
}

#[when(expr = "I press the {word} key")]
async fn when_press_key(world: &mut CalcWorld, name: String) {
    let key = CalcWorld::named_key(&name);
    world.press_key(KeyPress::new(key));
}

#[when(expr = "I hold the {word} key for {int} repeats")]
async fn when_hold_key(world: &mut CalcWorld, name: String, repeats: usize) {
    let key = CalcWorld::named_key(&name);
    world.press_key(KeyPress::new(key.clone()));
    for _ in 0..repeats {
        world.press_key(KeyPress::repeated(key.clone()));
    }
}

#[when(expr = "I run the key script {string}")]
async fn when_run_script(world: &mut CalcWorld, script: String) {
    for event in parse_script(&script) {
        world.send(event);
    }
}
