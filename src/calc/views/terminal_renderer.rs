//! # Terminal View Renderer
//!
//! Draws the display box and keypad through a [`RenderStream`]. The renderer
//! is also the controller's [`DisplaySurface`]: it keeps the mirrored buffer
//! text and paints it on the next display render.

use crate::calc::{
    io::{DisplaySurface, RenderStream},
    models::{format_number, CalcSnapshot, DisplayMode, Keypad},
    views::layout::KeypadLayout,
};
use anyhow::Result;
use crossterm::{
    queue,
    style::{Attribute, Color, ResetColor, SetAttribute, SetForegroundColor},
    terminal::{Clear, ClearType},
};
use std::io::Write;

/// Top-left corner of the calculator on screen
pub const DEFAULT_ORIGIN: (u16, u16) = (2, 1);

const HINT: &str = "Esc: quit  Del: CE  Ins: ±  Enter: =";

/// Trait for rendering views
pub trait ViewRenderer {
    /// Prepare the terminal for rendering
    fn initialize(&mut self) -> Result<()>;

    /// Render everything
    fn render_full(&mut self, state: &CalcSnapshot) -> Result<()>;

    /// Render only the display box
    fn render_display(&mut self, state: &CalcSnapshot) -> Result<()>;

    /// Restore the terminal on exit
    fn cleanup(&mut self) -> Result<()>;
}

/// Terminal-based view renderer
pub struct TerminalRenderer<RS: RenderStream> {
    render_stream: RS,
    layout: KeypadLayout,
    terminal_size: (u16, u16),
    text: String,
    keyboard_enhanced: bool,
}

impl<RS: RenderStream> TerminalRenderer<RS> {
    /// Create a renderer for this keypad drawing through `render_stream`.
    ///
    /// The display box holds `display_chars` characters without clipping.
    pub fn with_render_stream(
        render_stream: RS,
        keypad: &Keypad,
        display_chars: usize,
    ) -> Result<Self> {
        let terminal_size = render_stream.get_size()?;
        Ok(Self {
            render_stream,
            layout: KeypadLayout::new(keypad, DEFAULT_ORIGIN, display_chars),
            terminal_size,
            text: "0".to_string(),
            keyboard_enhanced: false,
        })
    }

    pub fn layout(&self) -> &KeypadLayout {
        &self.layout
    }

    pub fn terminal_size(&self) -> (u16, u16) {
        self.terminal_size
    }

    pub fn update_size(&mut self, width: u16, height: u16) {
        self.terminal_size = (width, height);
    }

    pub fn render_stream(&self) -> &RS {
        &self.render_stream
    }

    pub fn render_stream_mut(&mut self) -> &mut RS {
        &mut self.render_stream
    }

    fn print_at(&mut self, x: u16, y: u16, text: &str) -> Result<()> {
        self.render_stream.move_cursor(x, y)?;
        self.render_stream.write_all(text.as_bytes())?;
        Ok(())
    }

    /// Keep the rightmost cells when the text is wider than the box
    fn fit_right(text: &str, width: usize) -> String {
        let count = text.chars().count();
        let visible: String = text.chars().skip(count.saturating_sub(width)).collect();
        format!("{visible:>width$}")
    }

    fn status_line(state: &CalcSnapshot) -> String {
        let marker = match state.mode {
            DisplayMode::Result => "",
            DisplayMode::Entry => "…",
        };
        format!("{} {} {}", format_number(state.result), state.operator, marker)
    }

    fn draw_display(&mut self, state: &CalcSnapshot) -> Result<()> {
        let (x, y) = self.layout.origin();
        let inner = self.layout.display_inner_width();
        let border = "─".repeat(inner + 2);

        self.print_at(x, y, &format!("┌{border}┐"))?;

        let value = Self::fit_right(&self.text, inner);
        self.print_at(x, y + 1, &format!("│ {value} │"))?;

        let status: String = Self::status_line(state).chars().take(inner).collect();
        let status = format!("{status:<inner$}");
        self.render_stream.move_cursor(x, y + 2)?;
        self.render_stream.write_all("│ ".as_bytes())?;
        queue!(self.render_stream, SetForegroundColor(Color::DarkGrey))?;
        self.render_stream.write_all(status.as_bytes())?;
        queue!(self.render_stream, ResetColor)?;
        self.render_stream.write_all(" │".as_bytes())?;

        self.print_at(x, y + 3, &format!("└{border}┘"))?;
        Ok(())
    }

    fn draw_keypad(&mut self) -> Result<()> {
        let buttons = self.layout.buttons().to_vec();
        for button in &buttons {
            self.print_at(button.x, button.y, &button.face())?;
        }

        let (x, _) = self.layout.origin();
        let hint_row = self.layout.hint_row();
        self.render_stream.move_cursor(x, hint_row)?;
        queue!(self.render_stream, SetAttribute(Attribute::Dim))?;
        self.render_stream.write_all(HINT.as_bytes())?;
        queue!(self.render_stream, SetAttribute(Attribute::Reset))?;
        Ok(())
    }
}

impl<RS: RenderStream> DisplaySurface for TerminalRenderer<RS> {
    fn text(&self) -> &str {
        &self.text
    }

    fn set_text(&mut self, text: String) {
        self.text = text;
    }
}

impl<RS: RenderStream> ViewRenderer for TerminalRenderer<RS> {
    fn initialize(&mut self) -> Result<()> {
        self.render_stream.enable_raw_mode()?;
        self.keyboard_enhanced = self.render_stream.push_keyboard_enhancement()?;
        if !self.keyboard_enhanced {
            tracing::debug!("Terminal does not report key repeats; held keys act as presses");
        }
        self.render_stream.enter_alternate_screen()?;
        self.render_stream.enable_mouse_capture()?;
        self.render_stream.hide_cursor()?;
        Ok(())
    }

    fn render_full(&mut self, state: &CalcSnapshot) -> Result<()> {
        self.render_stream.clear_screen()?;

        if !self.layout.fits(self.terminal_size) {
            tracing::warn!(
                "Terminal {:?} too small for calculator ({}x{})",
                self.terminal_size,
                self.layout.width(),
                self.layout.height()
            );
            self.print_at(0, 0, "Terminal too small")?;
            self.render_stream.flush()?;
            return Ok(());
        }

        self.draw_display(state)?;
        self.draw_keypad()?;
        self.render_stream.flush()?;
        Ok(())
    }

    fn render_display(&mut self, state: &CalcSnapshot) -> Result<()> {
        if !self.layout.fits(self.terminal_size) {
            return Ok(());
        }
        self.draw_display(state)?;
        self.render_stream.flush()?;
        Ok(())
    }

    fn cleanup(&mut self) -> Result<()> {
        queue!(self.render_stream, Clear(ClearType::All))?;
        self.render_stream.show_cursor()?;
        self.render_stream.disable_mouse_capture()?;
        if self.keyboard_enhanced {
            self.render_stream.pop_keyboard_enhancement()?;
            self.keyboard_enhanced = false;
        }
        self.render_stream.leave_alternate_screen()?;
        self.render_stream.disable_raw_mode()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calc::io::{MockRenderStream, RenderCommand};
    use crate::calc::models::{CalculatorModel, MAX_CHARS};

    fn renderer(size: (u16, u16)) -> TerminalRenderer<MockRenderStream> {
        TerminalRenderer::with_render_stream(
            MockRenderStream::with_size(size),
            &Keypad::standard(),
            MAX_CHARS + 1,
        )
        .unwrap()
    }

    #[test]
    fn initialize_should_prepare_terminal() -> Result<()> {
        let mut renderer = renderer((80, 24));
        renderer.initialize()?;

        let stream = renderer.render_stream();
        assert!(stream.is_raw_mode());
        assert!(stream.is_alternate_screen());
        assert!(stream.has_command(&RenderCommand::EnableMouseCapture));
        assert!(stream.has_command(&RenderCommand::HideCursor));
        assert!(stream.has_command(&RenderCommand::PushKeyboardEnhancement));
        assert!(stream.is_keyboard_enhanced());
        Ok(())
    }

    #[test]
    fn cleanup_should_pop_keyboard_enhancement() -> Result<()> {
        let mut renderer = renderer((80, 24));
        renderer.initialize()?;
        renderer.cleanup()?;

        let stream = renderer.render_stream();
        assert!(stream.has_command(&RenderCommand::PopKeyboardEnhancement));
        assert!(!stream.is_keyboard_enhanced());
        Ok(())
    }

    #[test]
    fn unsupported_keyboard_enhancement_should_not_be_popped() -> Result<()> {
        let stream = MockRenderStream::with_size((80, 24)).without_keyboard_enhancement();
        let mut renderer = TerminalRenderer::with_render_stream(stream, &Keypad::standard(), 24)?;
        renderer.initialize()?;
        renderer.cleanup()?;

        let stream = renderer.render_stream();
        assert!(!stream.has_command(&RenderCommand::PushKeyboardEnhancement));
        assert!(!stream.has_command(&RenderCommand::PopKeyboardEnhancement));
        Ok(())
    }

    #[test]
    fn long_buffer_should_be_painted_whole() -> Result<()> {
        let text = "1234567890".repeat(4);
        let stream = MockRenderStream::with_size((80, 24));
        let mut renderer = TerminalRenderer::with_render_stream(stream, &Keypad::standard(), 41)?;
        assert!(renderer.layout().display_inner_width() >= 41);

        renderer.set_text(text.clone());
        renderer.render_full(&CalculatorModel::new().snapshot())?;

        let written = renderer.render_stream().written_text();
        assert!(written.contains(&format!("{text} │")));
        Ok(())
    }

    #[test]
    fn render_full_should_draw_display_and_every_button() -> Result<()> {
        let mut renderer = renderer((80, 24));
        renderer.set_text("-1.5".to_string());
        renderer.render_full(&CalculatorModel::new().snapshot())?;

        let written = renderer.render_stream().written_text();
        assert!(written.contains("-1.5 │"));
        for label in ["%", "CE", "C", "⌫", "1/x", "√", "±", "÷", "×", "="] {
            assert!(written.contains(label), "missing button {label}");
        }
        assert!(written.contains(HINT));
        Ok(())
    }

    #[test]
    fn render_display_should_only_touch_display_rows() -> Result<()> {
        let mut renderer = renderer((80, 24));
        renderer.set_text("42".to_string());
        renderer.render_display(&CalculatorModel::new().snapshot())?;

        let stream = renderer.render_stream();
        assert!(!stream.has_command(&RenderCommand::ClearScreen));
        assert!(stream.written_text().contains("42"));
        assert!(!stream.written_text().contains("[ CE  ]"));
        Ok(())
    }

    #[test]
    fn small_terminal_should_show_notice() -> Result<()> {
        let mut renderer = renderer((20, 10));
        renderer.render_full(&CalculatorModel::new().snapshot())?;
        assert!(renderer
            .render_stream()
            .written_text()
            .contains("Terminal too small"));
        Ok(())
    }

    #[test]
    fn cleanup_should_restore_terminal() -> Result<()> {
        let mut renderer = renderer((80, 24));
        renderer.initialize()?;
        renderer.cleanup()?;

        let stream = renderer.render_stream();
        assert!(!stream.is_raw_mode());
        assert!(!stream.is_alternate_screen());
        assert!(stream.has_command(&RenderCommand::ShowCursor));
        Ok(())
    }

    #[test]
    fn fit_right_should_keep_trailing_cells() {
        assert_eq!(TerminalRenderer::<MockRenderStream>::fit_right("12", 4), "  12");
        assert_eq!(
            TerminalRenderer::<MockRenderStream>::fit_right("123456", 4),
            "3456"
        );
    }

    #[test]
    fn status_line_should_show_accumulator_and_operator() {
        let mut model = CalculatorModel::new();
        model.digit('7');
        model.apply_operator(crate::calc::models::Operator::Multiply);
        let status = TerminalRenderer::<MockRenderStream>::status_line(&model.snapshot());
        assert_eq!(status.trim_end(), "7 ×");
    }
}
