//! # Application Controller
//!
//! Runs the interactive event loop: reads terminal events, turns them into
//! calculator events, hands them to the [`DisplayController`] and redraws
//! the parts of the screen that changed.

use crate::calc::{
    controller::DisplayController,
    events::{is_quit_request, key_press_from_crossterm, CalcEvent},
    io::{EventStream, RenderStream},
    models::Keypad,
    views::{TerminalRenderer, ViewRenderer},
};
use crate::config::CalcSettings;
use anyhow::Result;
use crossterm::event::{Event, MouseButton, MouseEvent, MouseEventKind};
use std::time::Duration;

const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// The main application controller
pub struct AppController<ES: EventStream, RS: RenderStream> {
    calculator: DisplayController<TerminalRenderer<RS>>,
    event_stream: ES,
    should_quit: bool,
}

impl<ES: EventStream, RS: RenderStream> AppController<ES, RS> {
    /// Create the application with injected I/O streams
    pub fn with_io_streams(
        settings: &CalcSettings,
        event_stream: ES,
        render_stream: RS,
    ) -> Result<Self> {
        let keypad = Keypad::standard();
        // One extra cell for the sign a full entry can still receive
        let renderer =
            TerminalRenderer::with_render_stream(render_stream, &keypad, settings.max_chars + 1)?;
        let calculator = DisplayController::with_parts(
            settings.model(),
            keypad,
            settings.dispatcher(),
            renderer,
        );

        tracing::debug!("Calculator ready with {:?}", calculator.dispatcher());

        Ok(Self {
            calculator,
            event_stream,
            should_quit: false,
        })
    }

    pub fn calculator(&self) -> &DisplayController<TerminalRenderer<RS>> {
        &self.calculator
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    fn renderer(&mut self) -> &mut TerminalRenderer<RS> {
        self.calculator.surface_mut()
    }

    /// Run the main application loop until quit or the event stream ends
    pub fn run(&mut self) -> Result<()> {
        self.renderer().initialize()?;

        let outcome = self.event_loop();

        // Always restore the terminal, even when the loop failed
        let cleanup = self.renderer().cleanup();
        outcome.and(cleanup)
    }

    fn event_loop(&mut self) -> Result<()> {
        let snapshot = self.calculator.snapshot();
        self.renderer().render_full(&snapshot)?;

        while !self.should_quit && !self.event_stream.is_exhausted() {
            if self.event_stream.poll(POLL_INTERVAL)? {
                let event = self.event_stream.read()?;
                self.handle_terminal_event(event)?;
            }
        }

        Ok(())
    }

    /// Process a single terminal event
    pub fn handle_terminal_event(&mut self, event: Event) -> Result<()> {
        match event {
            Event::Key(key_event) => {
                tracing::debug!("Received key event: {:?}", key_event);

                if is_quit_request(&key_event) {
                    self.should_quit = true;
                    return Ok(());
                }
                if let Some(press) = key_press_from_crossterm(&key_event) {
                    self.dispatch(CalcEvent::KeyPress(press))?;
                }
            }
            Event::Mouse(mouse_event) => {
                if let Some(label) = self.clicked_label(&mouse_event) {
                    tracing::debug!("Clicked button '{}'", label);
                    self.dispatch(CalcEvent::ButtonActivate { label })?;
                }
            }
            Event::Resize(width, height) => {
                self.renderer().update_size(width, height);
                let snapshot = self.calculator.snapshot();
                self.renderer().render_full(&snapshot)?;
            }
            _ => {}
        }
        Ok(())
    }

    fn clicked_label(&self, mouse_event: &MouseEvent) -> Option<String> {
        match mouse_event.kind {
            MouseEventKind::Down(MouseButton::Left) => self
                .calculator
                .surface()
                .layout()
                .button_at(mouse_event.column, mouse_event.row)
                .map(str::to_string),
            _ => None,
        }
    }

    fn dispatch(&mut self, event: CalcEvent) -> Result<()> {
        if self.calculator.handle_event(&event) {
            let snapshot = self.calculator.snapshot();
            self.renderer().render_display(&snapshot)?;
        }
        Ok(())
    }
}
