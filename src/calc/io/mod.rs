//! # I/O Abstraction Layer
//!
//! Trait seams between the calculator and the outside world:
//!
//! - **EventStream**: terminal input events (keys, mouse, resize)
//! - **RenderStream**: terminal output (cursor, screen, raw mode)
//! - **DisplaySurface**: the text readout the controller mirrors its buffer to
//!
//! ```text
//! Production:  AppController ──▶ TerminalEventStream  ──▶ crossterm::event::read()
//!                            ──▶ TerminalRenderStream ──▶ crossterm::execute!()
//!
//! Testing:     AppController ──▶ MockEventStream      ──▶ VecDeque<Event>
//!                            ──▶ MockRenderStream     ──▶ Vec<RenderCommand>
//! ```

use anyhow::Result;
use crossterm::event::Event;
use std::io::Write;
use std::time::Duration;

pub mod mock;
pub mod terminal;

pub use mock::{MemoryDisplay, MockEventStream, MockRenderStream, RenderCommand};
pub use terminal::{TerminalEventStream, TerminalRenderStream};

/// Type alias for terminal size (width, height)
pub type TerminalSize = (u16, u16);

/// Text readout showing the calculator buffer
pub trait DisplaySurface {
    /// Text currently shown
    fn text(&self) -> &str;

    /// Replace the shown text
    fn set_text(&mut self, text: String);
}

/// Input event stream abstraction
pub trait EventStream {
    /// Check if events are available without blocking
    ///
    /// Returns true if events are ready to be read within the timeout period.
    fn poll(&mut self, timeout: Duration) -> Result<bool>;

    /// Read the next available event
    ///
    /// This should only be called after poll() returns true.
    fn read(&mut self) -> Result<Event>;

    /// Whether no more events will ever arrive. Terminal input never ends.
    fn is_exhausted(&self) -> bool {
        false
    }
}

/// Output render stream abstraction
pub trait RenderStream: Write {
    /// Clear the entire screen
    fn clear_screen(&mut self) -> Result<()>;

    /// Move cursor to specific position (column, row)
    fn move_cursor(&mut self, x: u16, y: u16) -> Result<()>;

    fn hide_cursor(&mut self) -> Result<()>;

    fn show_cursor(&mut self) -> Result<()>;

    /// Get terminal size as (width, height)
    fn get_size(&self) -> Result<TerminalSize>;

    fn enter_alternate_screen(&mut self) -> Result<()>;

    fn leave_alternate_screen(&mut self) -> Result<()>;

    fn enable_raw_mode(&mut self) -> Result<()>;

    fn disable_raw_mode(&mut self) -> Result<()>;

    /// Start reporting mouse clicks as events
    fn enable_mouse_capture(&mut self) -> Result<()>;

    fn disable_mouse_capture(&mut self) -> Result<()>;

    /// Ask the terminal to report key repeats and releases as distinct events.
    ///
    /// Returns false when the terminal has no such mode; held keys then arrive
    /// as plain presses.
    fn push_keyboard_enhancement(&mut self) -> Result<bool>;

    fn pop_keyboard_enhancement(&mut self) -> Result<()>;
}
