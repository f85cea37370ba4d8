//! Keyboard event types and handler

use super::KeyCode;

/// Type of keyboard event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyEventType {
    /// Key was pressed down
    Press,
    /// Key was released
    Release,
}

/// A keyboard event as delivered by the capture backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyEvent {
    /// The hardware key code
    pub key: KeyCode,
    /// Symbolic name of the key, if the backend could produce one
    pub keystring: Option<String>,
    /// Type of event (press/release)
    pub event_type: KeyEventType,
}

impl KeyEvent {
    pub fn new(key: KeyCode, keystring: Option<String>, event_type: KeyEventType) -> Self {
        Self {
            key,
            keystring,
            event_type,
        }
    }

    pub fn press(key: KeyCode, keystring: Option<String>) -> Self {
        Self::new(key, keystring, KeyEventType::Press)
    }

    pub fn release(key: KeyCode, keystring: Option<String>) -> Self {
        Self::new(key, keystring, KeyEventType::Release)
    }

    /// Whether the key would have produced a printable character
    pub fn has_keystring(&self) -> bool {
        self.keystring.is_some()
    }
}

/// Receiver of key events, registered with a [`KeyboardCapture`](super::KeyboardCapture).
///
/// The capture backend calls these from its own thread.
pub trait KeyHandler: Send + Sync {
    /// Called when a key is pressed
    fn on_key_down(&self, event: &KeyEvent);

    /// Called when a key is released
    fn on_key_up(&self, event: &KeyEvent);

    /// Dispatch an event to the matching callback
    fn handle(&self, event: &KeyEvent) {
        match event.event_type {
            KeyEventType::Press => self.on_key_down(event),
            KeyEventType::Release => self.on_key_up(event),
        }
    }
}
