//! # Mock I/O Implementations for Testing
//!
//! Implementations of the I/O traits that need no terminal.

use super::{DisplaySurface, EventStream, RenderStream, TerminalSize};
use anyhow::Result;
use crossterm::event::Event;
use std::collections::VecDeque;
use std::io::Write;
use std::time::Duration;

/// In-memory display readout
///
/// Keeps every text written to it so tests can check what was rendered.
#[derive(Debug, Clone)]
pub struct MemoryDisplay {
    text: String,
    history: Vec<String>,
}

impl MemoryDisplay {
    pub fn new() -> Self {
        Self {
            text: "0".to_string(),
            history: Vec::new(),
        }
    }

    /// Every text written, oldest first
    pub fn history(&self) -> &[String] {
        &self.history
    }
}

impl Default for MemoryDisplay {
    fn default() -> Self {
        Self::new()
    }
}

impl DisplaySurface for MemoryDisplay {
    fn text(&self) -> &str {
        &self.text
    }

    fn set_text(&mut self, text: String) {
        self.history.push(text.clone());
        self.text = text;
    }
}

/// Mock event stream replaying pre-programmed events
pub struct MockEventStream {
    events: VecDeque<Event>,
}

impl MockEventStream {
    pub fn new(events: Vec<Event>) -> Self {
        Self {
            events: events.into(),
        }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    pub fn push_event(&mut self, event: Event) {
        self.events.push_back(event);
    }

    pub fn pending_count(&self) -> usize {
        self.events.len()
    }
}

impl EventStream for MockEventStream {
    fn poll(&mut self, _timeout: Duration) -> Result<bool> {
        Ok(!self.events.is_empty())
    }

    fn read(&mut self) -> Result<Event> {
        self.events
            .pop_front()
            .ok_or_else(|| anyhow::anyhow!("No events available"))
    }

    fn is_exhausted(&self) -> bool {
        self.events.is_empty()
    }
}

/// Recorded render command for verification
#[derive(Debug, Clone, PartialEq)]
pub enum RenderCommand {
    ClearScreen,
    MoveCursor(u16, u16),
    HideCursor,
    ShowCursor,
    EnterAlternateScreen,
    LeaveAlternateScreen,
    EnableRawMode,
    DisableRawMode,
    EnableMouseCapture,
    DisableMouseCapture,
    PushKeyboardEnhancement,
    PopKeyboardEnhancement,
    Write(String),
    Flush,
}

/// Mock render stream recording every command
pub struct MockRenderStream {
    commands: Vec<RenderCommand>,
    terminal_size: TerminalSize,
    raw_mode: bool,
    alternate_screen: bool,
    supports_keyboard_enhancement: bool,
    keyboard_enhanced: bool,
}

impl MockRenderStream {
    pub fn new() -> Self {
        Self::with_size((80, 24))
    }

    pub fn with_size(size: TerminalSize) -> Self {
        Self {
            commands: Vec::new(),
            terminal_size: size,
            raw_mode: false,
            alternate_screen: false,
            supports_keyboard_enhancement: true,
            keyboard_enhanced: false,
        }
    }

    /// Behave like a terminal that cannot report key repeats
    pub fn without_keyboard_enhancement(mut self) -> Self {
        self.supports_keyboard_enhancement = false;
        self
    }

    pub fn commands(&self) -> &[RenderCommand] {
        &self.commands
    }

    pub fn clear_commands(&mut self) {
        self.commands.clear();
    }

    pub fn has_command(&self, command: &RenderCommand) -> bool {
        self.commands.contains(command)
    }

    /// All written text concatenated
    pub fn written_text(&self) -> String {
        self.commands
            .iter()
            .filter_map(|command| match command {
                RenderCommand::Write(text) => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn is_raw_mode(&self) -> bool {
        self.raw_mode
    }

    pub fn is_alternate_screen(&self) -> bool {
        self.alternate_screen
    }

    pub fn is_keyboard_enhanced(&self) -> bool {
        self.keyboard_enhanced
    }

    fn record(&mut self, command: RenderCommand) {
        self.commands.push(command);
    }
}

impl Default for MockRenderStream {
    fn default() -> Self {
        Self::new()
    }
}

impl Write for MockRenderStream {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.record(RenderCommand::Write(
            String::from_utf8_lossy(buf).into_owned(),
        ));
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.record(RenderCommand::Flush);
        Ok(())
    }
}

impl RenderStream for MockRenderStream {
    fn clear_screen(&mut self) -> Result<()> {
        self.record(RenderCommand::ClearScreen);
        Ok(())
    }

    fn move_cursor(&mut self, x: u16, y: u16) -> Result<()> {
        self.record(RenderCommand::MoveCursor(x, y));
        Ok(())
    }

    fn hide_cursor(&mut self) -> Result<()> {
        self.record(RenderCommand::HideCursor);
        Ok(())
    }

    fn show_cursor(&mut self) -> Result<()> {
        self.record(RenderCommand::ShowCursor);
        Ok(())
    }

    fn get_size(&self) -> Result<TerminalSize> {
        Ok(self.terminal_size)
    }

    fn enter_alternate_screen(&mut self) -> Result<()> {
        self.record(RenderCommand::EnterAlternateScreen);
        self.alternate_screen = true;
        Ok(())
    }

    fn leave_alternate_screen(&mut self) -> Result<()> {
        self.record(RenderCommand::LeaveAlternateScreen);
        self.alternate_screen = false;
        Ok(())
    }

    fn enable_raw_mode(&mut self) -> Result<()> {
        self.record(RenderCommand::EnableRawMode);
        self.raw_mode = true;
        Ok(())
    }

    fn disable_raw_mode(&mut self) -> Result<()> {
        self.record(RenderCommand::DisableRawMode);
        self.raw_mode = false;
        Ok(())
    }

    fn enable_mouse_capture(&mut self) -> Result<()> {
        self.record(RenderCommand::EnableMouseCapture);
        Ok(())
    }

    fn disable_mouse_capture(&mut self) -> Result<()> {
        self.record(RenderCommand::DisableMouseCapture);
        Ok(())
    }

    fn push_keyboard_enhancement(&mut self) -> Result<bool> {
        if !self.supports_keyboard_enhancement {
            return Ok(false);
        }
        self.record(RenderCommand::PushKeyboardEnhancement);
        self.keyboard_enhanced = true;
        Ok(true)
    }

    fn pop_keyboard_enhancement(&mut self) -> Result<()> {
        self.record(RenderCommand::PopKeyboardEnhancement);
        self.keyboard_enhanced = false;
        Ok(())
    }
}
