//! Translation of crossterm key events into calculator key presses

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::types::{Key, KeyPress};

/// Convert a crossterm key event.
///
/// Releases are dropped. Control and Alt chords are not calculator input.
pub fn key_press_from_crossterm(event: &KeyEvent) -> Option<KeyPress> {
    if event.kind == KeyEventKind::Release {
        return None;
    }
    if event
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
    {
        return None;
    }

    let key = match event.code {
        KeyCode::Backspace => Key::Backspace,
        KeyCode::Enter => Key::Enter,
        KeyCode::Insert => Key::Insert,
        KeyCode::Delete => Key::Delete,
        KeyCode::Esc => Key::Escape,
        KeyCode::Char(ch) => Key::Char(ch),
        other => Key::Other(format!("{other:?}")),
    };

    Some(KeyPress::with_repeat(key, event.kind == KeyEventKind::Repeat))
}

/// Whether the event asks the application to exit (`Esc` or `Ctrl+C`)
pub fn is_quit_request(event: &KeyEvent) -> bool {
    if event.kind == KeyEventKind::Release {
        return false;
    }
    matches!(event.code, KeyCode::Esc)
        || (event.code == KeyCode::Char('c') && event.modifiers.contains(KeyModifiers::CONTROL))
}
