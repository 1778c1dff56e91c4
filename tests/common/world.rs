use calcline::{
    calc::models::Keypad,
    CalcEvent, CalcSettings, DisplayController, DisplaySurface, Key, KeyPress, MemoryDisplay,
};
use cucumber::World;

/// Calculator state shared by the steps of one scenario
#[derive(Debug, World)]
#[world(init = Self::new)]
pub struct CalcWorld {
    /// Settings the calculator is (re)built from
    pub settings: CalcSettings,

    /// Real controller writing to an in-memory display
    pub calculator: DisplayController<MemoryDisplay>,

    /// Whether the last event changed anything
    pub last_handled: Option<bool>,
}

impl CalcWorld {
    fn new() -> Self {
        let settings = CalcSettings::default();
        let calculator = Self::build(&settings);
        Self {
            settings,
            calculator,
            last_handled: None,
        }
    }

    fn build(settings: &CalcSettings) -> DisplayController<MemoryDisplay> {
        DisplayController::with_parts(
            settings.model(),
            Keypad::standard(),
            settings.dispatcher(),
            MemoryDisplay::new(),
        )
    }

    /// Rebuild the calculator after a settings change
    pub fn rebuild(&mut self) {
        self.calculator = Self::build(&self.settings);
        self.last_handled = None;
    }

    pub fn send(&mut self, event: CalcEvent) {
        let handled = self.calculator.handle_event(&event);
        tracing::debug!("{:?} handled: {}", event, handled);
        self.last_handled = Some(handled);
    }

    pub fn press_button(&mut self, label: &str) {
        self.send(CalcEvent::button(label));
    }

    pub fn press_key(&mut self, press: KeyPress) {
        self.send(CalcEvent::KeyPress(press));
    }

    /// Type each non-blank character as a key press
    pub fn type_text(&mut self, text: &str) {
        for ch in text.chars().filter(|ch| !ch.is_whitespace()) {
            self.press_key(KeyPress::char(ch));
        }
    }

    pub fn named_key(name: &str) -> Key {
        Key::from_name(name).unwrap_or_else(|| panic!("Unknown key name '{name}'"))
    }

    pub fn display(&self) -> &str {
        self.calculator.surface().text()
    }
}
