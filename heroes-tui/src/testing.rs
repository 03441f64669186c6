//! Test utilities for components and reducers
//!
//! - [`key`] builds a `KeyEvent` from a string like `"q"`, `"ctrl+c"` or `"f5"`
//! - [`RenderHarness`] renders into a ratatui `TestBackend` and returns text
//! - [`ActionAssertions`] adds fluent checks on emitted actions
//!
//! # Example
//!
//! ```
//! use heroes_tui::testing::{key, ActionAssertions};
//! use crossterm::event::{KeyCode, KeyModifiers};
//!
//! let k = key("ctrl+c");
//! assert_eq!(k.code, KeyCode::Char('c'));
//! assert!(k.modifiers.contains(KeyModifiers::CONTROL));
//!
//! let emitted = vec![1, 2, 3];
//! emitted.assert_count(3);
//! emitted.assert_first(1);
//! emitted.assert_contains(3);
//! ```

use std::fmt::Debug;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::{Frame, Terminal};

/// Parse a key string into a `KeyEvent`
///
/// Returns `None` for strings that name no key.
pub fn parse_key(s: &str) -> Option<KeyEvent> {
    let s = s.trim().to_lowercase();
    if s.is_empty() {
        return None;
    }

    let parts: Vec<&str> = s.split('+').collect();
    let (key_part, modifier_parts) = parts.split_last()?;

    let mut modifiers = KeyModifiers::empty();
    for part in modifier_parts {
        match part.trim() {
            "ctrl" | "control" => modifiers |= KeyModifiers::CONTROL,
            "shift" => modifiers |= KeyModifiers::SHIFT,
            "alt" => modifiers |= KeyModifiers::ALT,
            _ => return None,
        }
    }

    let code = match key_part.trim() {
        "esc" | "escape" => KeyCode::Esc,
        "enter" | "return" => KeyCode::Enter,
        "tab" => KeyCode::Tab,
        "backspace" => KeyCode::Backspace,
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "pageup" => KeyCode::PageUp,
        "pagedown" => KeyCode::PageDown,
        "space" => KeyCode::Char(' '),
        f if f.len() > 1 && f.starts_with('f') => KeyCode::F(f[1..].parse().ok()?),
        c if c.chars().count() == 1 => KeyCode::Char(c.chars().next()?),
        _ => return None,
    };

    Some(KeyEvent {
        code,
        modifiers,
        kind: KeyEventKind::Press,
        state: KeyEventState::empty(),
    })
}

/// Build a `KeyEvent` from a key string
///
/// # Panics
///
/// Panics if the string names no key.
pub fn key(s: &str) -> KeyEvent {
    parse_key(s).unwrap_or_else(|| panic!("Invalid key string: {:?}", s))
}

/// Build one `KeyEvent` per whitespace-separated key string
pub fn keys(s: &str) -> Vec<KeyEvent> {
    s.split_whitespace().map(key).collect()
}

/// Renders components into an in-memory terminal
pub struct RenderHarness {
    terminal: Terminal<TestBackend>,
}

impl RenderHarness {
    pub fn new(width: u16, height: u16) -> Self {
        let terminal = Terminal::new(TestBackend::new(width, height))
            .unwrap_or_else(|e| panic!("test terminal: {e}"));
        Self { terminal }
    }

    /// Draw one frame and return the resulting buffer
    pub fn render<F>(&mut self, draw: F) -> &Buffer
    where
        F: FnOnce(&mut Frame),
    {
        self.terminal
            .draw(draw)
            .unwrap_or_else(|e| panic!("test draw: {e}"));
        self.terminal.backend().buffer()
    }

    /// Draw one frame and return its text, one line per terminal row,
    /// trailing spaces trimmed
    pub fn render_to_string_plain<F>(&mut self, draw: F) -> String
    where
        F: FnOnce(&mut Frame),
    {
        buffer_to_string_plain(self.render(draw))
    }

    pub fn resize(&mut self, width: u16, height: u16) {
        self.terminal.backend_mut().resize(width, height);
    }
}

/// Text content of a buffer without styling
pub fn buffer_to_string_plain(buffer: &Buffer) -> String {
    let width = buffer.area.width.max(1) as usize;
    buffer
        .content()
        .chunks(width)
        .map(|row| {
            let line: String = row.iter().map(|cell| cell.symbol()).collect();
            line.trim_end().to_string()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Fluent assertions over a list of emitted actions
pub trait ActionAssertions<A> {
    fn assert_empty(&self);
    fn assert_count(&self, expected: usize);
    fn assert_first(&self, expected: A);
    fn assert_contains(&self, expected: A);
}

impl<A: PartialEq + Debug> ActionAssertions<A> for Vec<A> {
    #[track_caller]
    fn assert_empty(&self) {
        assert!(self.is_empty(), "expected no actions, got {:?}", self);
    }

    #[track_caller]
    fn assert_count(&self, expected: usize) {
        assert_eq!(
            self.len(),
            expected,
            "expected {} actions, got {:?}",
            expected,
            self
        );
    }

    #[track_caller]
    fn assert_first(&self, expected: A) {
        match self.first() {
            Some(first) => assert_eq!(first, &expected, "unexpected first action"),
            None => panic!("expected first action {:?}, got none", expected),
        }
    }

    #[track_caller]
    fn assert_contains(&self, expected: A) {
        assert!(
            self.contains(&expected),
            "expected {:?} among {:?}",
            expected,
            self
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::widgets::Paragraph;

    #[test]
    fn test_key_simple() {
        let k = key("q");
        assert_eq!(k.code, KeyCode::Char('q'));
        assert_eq!(k.modifiers, KeyModifiers::empty());
    }

    #[test]
    fn test_key_with_ctrl() {
        let k = key("ctrl+c");
        assert_eq!(k.code, KeyCode::Char('c'));
        assert!(k.modifiers.contains(KeyModifiers::CONTROL));
    }

    #[test]
    fn test_key_special() {
        assert_eq!(key("esc").code, KeyCode::Esc);
        assert_eq!(key("Down").code, KeyCode::Down);
        assert_eq!(key("f5").code, KeyCode::F(5));
        assert_eq!(key("space").code, KeyCode::Char(' '));
    }

    #[test]
    fn test_parse_key_rejects_garbage() {
        assert!(parse_key("").is_none());
        assert!(parse_key("hyper+x").is_none());
        assert!(parse_key("fx").is_none());
        assert!(parse_key("banana").is_none());
    }

    #[test]
    fn test_keys_sequence() {
        let codes: Vec<KeyCode> = keys("j j k").into_iter().map(|k| k.code).collect();
        assert_eq!(
            codes,
            vec![KeyCode::Char('j'), KeyCode::Char('j'), KeyCode::Char('k')]
        );
    }

    #[test]
    fn test_render_to_string_plain() {
        let mut render = RenderHarness::new(10, 2);
        let output = render.render_to_string_plain(|frame| {
            let area = frame.area();
            frame.render_widget(Paragraph::new("hi\nthere"), area);
        });
        assert_eq!(output, "hi\nthere");
    }

    #[test]
    fn test_action_assertions() {
        let actions = vec!["a", "b"];
        actions.assert_count(2);
        actions.assert_first("a");
        actions.assert_contains("b");
        Vec::<&str>::new().assert_empty();
    }

    #[test]
    #[should_panic(expected = "expected no actions")]
    fn test_assert_empty_fails_on_actions() {
        vec![1].assert_empty();
    }
}
