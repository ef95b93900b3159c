//! Low-level key collection: the blocking key source the menu loop reads from,
//! plus classification of crossterm key events into menu intents.

use crate::error::Result;
use ratatui::crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use std::time::Duration;

/// A source of key presses.
///
/// `read_key` is the only place the renderer suspends waiting for the user; there is
/// no timeout.
pub trait KeySource {
    /// Block until the next key press arrives.
    fn read_key(&mut self) -> Result<KeyEvent>;

    /// Whether a key press is waiting to be read. Never blocks.
    fn is_pending(&mut self) -> Result<bool>;

    /// Read and throw away every key press already waiting. Returns how many were dropped.
    fn discard_pending(&mut self) -> Result<usize> {
        let mut discarded = 0;
        while self.is_pending()? {
            self.read_key()?;
            discarded += 1;
        }
        if discarded > 0 {
            log::trace!("discarded {discarded} buffered key press(es)");
        }
        Ok(discarded)
    }
}

impl<K: KeySource + ?Sized> KeySource for &mut K {
    fn read_key(&mut self) -> Result<KeyEvent> {
        (**self).read_key()
    }

    fn is_pending(&mut self) -> Result<bool> {
        (**self).is_pending()
    }

    fn discard_pending(&mut self) -> Result<usize> {
        (**self).discard_pending()
    }
}

/// What a key press means to a menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyClass {
    Confirm,
    MoveUp,
    MoveDown,
    Other,
}

impl From<&KeyEvent> for KeyClass {
    fn from(key: &KeyEvent) -> Self {
        match key.code {
            KeyCode::Enter => KeyClass::Confirm,
            KeyCode::Up => KeyClass::MoveUp,
            KeyCode::Down => KeyClass::MoveDown,
            _ => KeyClass::Other,
        }
    }
}

/// Character value of a key press.
///
/// Printable keys map to themselves; Enter, Tab, Backspace and Esc map to their control
/// characters; keys without a character (arrows, function keys) map to `'\0'`.
pub fn key_char(key: &KeyEvent) -> char {
    match key.code {
        KeyCode::Char(c) => c,
        KeyCode::Enter => '\r',
        KeyCode::Tab => '\t',
        KeyCode::Backspace => '\u{8}',
        KeyCode::Esc => '\u{1b}',
        _ => '\0',
    }
}

/// Key source backed by the host terminal through crossterm.
///
/// Only key presses are surfaced: resize, mouse, focus and paste events are dropped, as
/// are key release/repeat events reported by terminals with enhanced keyboard support.
#[derive(Debug, Default)]
pub struct TerminalKeys {
    /// Press found by `is_pending` that has not been handed out yet.
    peeked: Option<KeyEvent>,
}

impl TerminalKeys {
    pub fn new() -> Self {
        Self::default()
    }

    fn as_press(event: Event) -> Option<KeyEvent> {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => Some(key),
            _ => None,
        }
    }
}

impl KeySource for TerminalKeys {
    fn read_key(&mut self) -> Result<KeyEvent> {
        if let Some(key) = self.peeked.take() {
            return Ok(key);
        }
        loop {
            if let Some(key) = Self::as_press(event::read()?) {
                return Ok(key);
            }
        }
    }

    fn is_pending(&mut self) -> Result<bool> {
        if self.peeked.is_some() {
            return Ok(true);
        }
        // Events that are not presses would never satisfy `read_key`, so skip past them.
        while event::poll(Duration::ZERO)? {
            if let Some(key) = Self::as_press(event::read()?) {
                self.peeked = Some(key);
                return Ok(true);
            }
        }
        Ok(false)
    }
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use crate::error::ScreenError;
    use ratatui::crossterm::event::KeyModifiers;
    use std::collections::VecDeque;

    pub fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    /// Key source replaying a fixed script.
    ///
    /// Keys in `pending` count as already buffered and are what `is_pending` reports;
    /// keys in `script` arrive only when `read_key` blocks for them.
    #[derive(Debug, Default)]
    pub struct ScriptedKeys {
        pub script: VecDeque<KeyEvent>,
        pub pending: VecDeque<KeyEvent>,
        pub reads: usize,
    }

    impl ScriptedKeys {
        pub fn new(codes: impl IntoIterator<Item = KeyCode>) -> Self {
            Self {
                script: codes.into_iter().map(key).collect(),
                ..Self::default()
            }
        }

        pub fn with_pending(mut self, codes: impl IntoIterator<Item = KeyCode>) -> Self {
            self.pending.extend(codes.into_iter().map(key));
            self
        }
    }

    impl KeySource for ScriptedKeys {
        fn read_key(&mut self) -> Result<KeyEvent> {
            self.reads += 1;
            self.pending
                .pop_front()
                .or_else(|| self.script.pop_front())
                .ok_or_else(|| {
                    ScreenError::terminal(
                        "key script exhausted",
                        std::io::Error::from(std::io::ErrorKind::UnexpectedEof),
                    )
                })
        }

        fn is_pending(&mut self) -> Result<bool> {
            Ok(!self.pending.is_empty())
        }
    }

    #[test]
    fn classifies_navigation_keys() {
        assert_eq!(KeyClass::from(&key(KeyCode::Enter)), KeyClass::Confirm);
        assert_eq!(KeyClass::from(&key(KeyCode::Up)), KeyClass::MoveUp);
        assert_eq!(KeyClass::from(&key(KeyCode::Down)), KeyClass::MoveDown);
        assert_eq!(KeyClass::from(&key(KeyCode::Char('j'))), KeyClass::Other);
        assert_eq!(KeyClass::from(&key(KeyCode::Esc)), KeyClass::Other);
    }

    #[test]
    fn maps_keys_to_chars() {
        assert_eq!(key_char(&key(KeyCode::Char('x'))), 'x');
        assert_eq!(key_char(&key(KeyCode::Char('Q'))), 'Q');
        assert_eq!(key_char(&key(KeyCode::Enter)), '\r');
        assert_eq!(key_char(&key(KeyCode::Up)), '\0');
    }

    #[test]
    fn discard_drains_only_buffered_keys() {
        let mut keys = ScriptedKeys::new([KeyCode::Enter])
            .with_pending([KeyCode::Down, KeyCode::Char('a')]);

        assert_eq!(keys.discard_pending().unwrap(), 2);
        assert_eq!(keys.discard_pending().unwrap(), 0);
        assert_eq!(keys.read_key().unwrap().code, KeyCode::Enter);
    }

    #[test]
    fn exhausted_script_is_an_error() {
        let mut keys = ScriptedKeys::default();
        assert!(keys.read_key().is_err());
    }
}
