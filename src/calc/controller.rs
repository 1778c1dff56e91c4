//! # Entry/Display Controller
//!
//! Owns the calculator model and mirrors its buffer to a display surface
//! after every operation. Input arrives either as a keypad action or as a
//! raw [`CalcEvent`], which is routed through the keypad (button clicks) or
//! the keyboard dispatcher (key presses).

use crate::calc::{
    commands::KeyDispatcher,
    events::CalcEvent,
    io::DisplaySurface,
    models::{ButtonAction, CalcSnapshot, CalculatorModel, Keypad, Operator},
};

/// Calculator controller bound to a display surface
#[derive(Debug)]
pub struct DisplayController<S: DisplaySurface> {
    model: CalculatorModel,
    keypad: Keypad,
    dispatcher: KeyDispatcher,
    surface: S,
}

impl<S: DisplaySurface> DisplayController<S> {
    /// Create a controller with the standard keypad and default key bindings
    pub fn new(surface: S) -> Self {
        Self::with_parts(
            CalculatorModel::new(),
            Keypad::standard(),
            KeyDispatcher::default(),
            surface,
        )
    }

    /// Create a controller from explicit parts. The surface is synced immediately.
    pub fn with_parts(
        model: CalculatorModel,
        keypad: Keypad,
        dispatcher: KeyDispatcher,
        surface: S,
    ) -> Self {
        let mut controller = Self {
            model,
            keypad,
            dispatcher,
            surface,
        };
        controller.render();
        controller
    }

    pub fn model(&self) -> &CalculatorModel {
        &self.model
    }

    pub fn keypad(&self) -> &Keypad {
        &self.keypad
    }

    pub fn dispatcher(&self) -> &KeyDispatcher {
        &self.dispatcher
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn snapshot(&self) -> CalcSnapshot {
        self.model.snapshot()
    }

    fn render(&mut self) {
        if self.surface.text() != self.model.display() {
            self.surface.set_text(self.model.display().to_string());
        }
    }

    fn update(&mut self, operation: impl FnOnce(&mut CalculatorModel)) {
        operation(&mut self.model);
        self.render();
    }

    pub fn digit(&mut self, d: char) {
        self.update(|model| model.digit(d));
    }

    pub fn append_symbol(&mut self, symbol: &str) {
        self.update(|model| model.append_symbol(symbol));
    }

    pub fn zero(&mut self) {
        self.update(CalculatorModel::zero);
    }

    pub fn decimal_point(&mut self) {
        self.update(CalculatorModel::decimal_point);
    }

    pub fn backspace(&mut self) {
        self.update(CalculatorModel::backspace);
    }

    pub fn negate(&mut self) {
        self.update(CalculatorModel::negate);
    }

    pub fn sqrt(&mut self) {
        self.update(CalculatorModel::sqrt);
    }

    pub fn percent(&mut self) {
        self.update(CalculatorModel::percent);
    }

    pub fn reciprocal(&mut self) {
        self.update(CalculatorModel::reciprocal);
    }

    pub fn all_clear(&mut self) {
        self.update(CalculatorModel::all_clear);
    }

    pub fn clear_entry(&mut self) {
        self.update(CalculatorModel::clear_entry);
    }

    pub fn operator(&mut self, operator: Operator) {
        self.update(|model| model.apply_operator(operator));
    }

    pub fn equals(&mut self) {
        self.update(CalculatorModel::equals);
    }

    /// Execute a keypad action
    pub fn perform(&mut self, action: ButtonAction) {
        tracing::debug!("Performing {:?}", action);

        match action {
            ButtonAction::Digit(d) => self.digit(d),
            ButtonAction::Decimal => self.decimal_point(),
            ButtonAction::Backspace => self.backspace(),
            ButtonAction::Negate => self.negate(),
            ButtonAction::Sqrt => self.sqrt(),
            ButtonAction::Percent => self.percent(),
            ButtonAction::Reciprocal => self.reciprocal(),
            ButtonAction::ClearEntry => self.clear_entry(),
            ButtonAction::AllClear => self.all_clear(),
            ButtonAction::Operator(Operator::Equals) => self.equals(),
            ButtonAction::Operator(operator) => self.operator(operator),
        }

        tracing::trace!("State after {:?}: {:?}", action, self.model);
    }

    /// Route an input event to its operation.
    ///
    /// Returns whether an operation ran.
    pub fn handle_event(&mut self, event: &CalcEvent) -> bool {
        let action = match event {
            CalcEvent::ButtonActivate { label } => self.keypad.action_for(label),
            CalcEvent::KeyPress(press) => self.dispatcher.dispatch(press, &self.keypad),
        };

        match action {
            Some(action) => {
                self.perform(action);
                true
            }
            None => {
                tracing::trace!("Ignoring {:?}", event);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calc::events::{Key, KeyPress};
    use crate::calc::io::MemoryDisplay;
    use crate::calc::models::DisplayMode;

    fn controller() -> DisplayController<MemoryDisplay> {
        DisplayController::new(MemoryDisplay::new())
    }

    fn press_all(controller: &mut DisplayController<MemoryDisplay>, labels: &[&str]) {
        for label in labels {
            controller.handle_event(&CalcEvent::button(*label));
        }
    }

    #[test]
    fn surface_should_mirror_buffer_after_each_operation() {
        let mut controller = controller();
        controller.digit('1');
        controller.decimal_point();
        controller.digit('5');

        assert_eq!(controller.surface().text(), "1.5");
        assert_eq!(controller.surface().history(), ["1", "1.", "1.5"]);
    }

    #[test]
    fn unchanged_buffer_should_not_rewrite_surface() {
        let mut controller = controller();
        controller.negate();
        controller.backspace();
        assert!(controller.surface().history().is_empty());
    }

    #[test]
    fn with_parts_should_sync_surface_to_model() {
        let mut model = CalculatorModel::new();
        model.digit('9');
        let controller = DisplayController::with_parts(
            model,
            Keypad::standard(),
            KeyDispatcher::default(),
            MemoryDisplay::new(),
        );
        assert_eq!(controller.surface().text(), "9");
    }

    #[test]
    fn button_activation_should_follow_worked_example() {
        let mut controller = controller();
        press_all(&mut controller, &["1", ".", "5", "±"]);
        assert_eq!(controller.surface().text(), "-1.5");
        assert_eq!(controller.model().mode(), DisplayMode::Entry);

        let expected = ["-1.", "-1", "0", "0"];
        for text in expected {
            controller.handle_event(&CalcEvent::button("⌫"));
            assert_eq!(controller.surface().text(), text);
        }
    }

    #[test]
    fn unknown_button_should_be_ignored() {
        let mut controller = controller();
        assert!(!controller.handle_event(&CalcEvent::button("M+")));
        assert_eq!(controller.surface().text(), "0");
    }

    #[test]
    fn key_presses_should_drive_calculation() {
        let mut controller = controller();
        for press in [
            KeyPress::char('1'),
            KeyPress::char('2'),
            KeyPress::char('*'),
            KeyPress::char('3'),
            KeyPress::new(Key::Enter),
        ] {
            assert!(controller.handle_event(&press.into()));
        }

        assert_eq!(controller.surface().text(), "36");
        assert_eq!(controller.model().result(), 36.0);
    }

    #[test]
    fn held_backspace_should_keep_deleting() {
        let mut controller = controller();
        press_all(&mut controller, &["1", "2", "3"]);
        controller.handle_event(&CalcEvent::key(Key::Backspace));
        controller.handle_event(&KeyPress::repeated(Key::Backspace).into());
        assert_eq!(controller.surface().text(), "1");
    }

    #[test]
    fn held_digit_should_not_repeat() {
        let mut controller = controller();
        controller.handle_event(&KeyPress::char('7').into());
        assert!(!controller.handle_event(&KeyPress::repeated(Key::Char('7')).into()));
        assert_eq!(controller.surface().text(), "7");
    }

    #[test]
    fn delete_key_should_clear_all_after_equals() {
        let mut controller = controller();
        press_all(&mut controller, &["4", "×", "5", "="]);
        assert_eq!(controller.surface().text(), "20");

        controller.handle_event(&CalcEvent::key(Key::Delete));
        assert_eq!(controller.snapshot(), CalculatorModel::new().snapshot());
    }

    #[test]
    fn insert_key_should_negate() {
        let mut controller = controller();
        press_all(&mut controller, &["8"]);
        controller.handle_event(&CalcEvent::key(Key::Insert));
        assert_eq!(controller.surface().text(), "-8");
    }

    #[test]
    fn unary_buttons_should_update_display() {
        let mut controller = controller();
        press_all(&mut controller, &["1", "6", "√"]);
        assert_eq!(controller.surface().text(), "4");

        press_all(&mut controller, &["1/x"]);
        assert_eq!(controller.surface().text(), "0.25");
    }
}
