//! Shared test utilities
//!
//! Event constructors and in-memory stand-ins for the OS keyboard layer, so
//! the machine can be driven without real hardware.

use crate::keyboard::{KeyCode, KeyEvent, KeyHandler, KeyboardCapture, KeyboardEmulation};
use crate::machine::{MachineState, Stroke, StrokeListener};
use parking_lot::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

/// Initialise logging for tests; safe to call more than once
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Creates a key press event carrying a symbolic name
pub fn press(code: u16) -> KeyEvent {
    KeyEvent::press(KeyCode(code), Some(format!("key{}", code)))
}

/// Creates a key release event carrying a symbolic name
pub fn release(code: u16) -> KeyEvent {
    KeyEvent::release(KeyCode(code), Some(format!("key{}", code)))
}

/// Capture backend that delivers whatever events the test sends it
pub struct FakeCapture {
    handler: Mutex<Option<Arc<dyn KeyHandler>>>,
    started: AtomicBool,
    requested: AtomicBool,
    effective: AtomicBool,
}

impl FakeCapture {
    /// A backend whose OS-level suppression always works
    pub fn new() -> Self {
        Self {
            handler: Mutex::new(None),
            started: AtomicBool::new(false),
            requested: AtomicBool::new(false),
            effective: AtomicBool::new(true),
        }
    }

    /// Set whether suppression actually holds at the OS level
    pub fn set_effective(&self, effective: bool) {
        self.effective.store(effective, Ordering::SeqCst);
    }

    pub fn has_handler(&self) -> bool {
        self.handler.lock().is_some()
    }

    pub fn is_started(&self) -> bool {
        self.started.load(Ordering::SeqCst)
    }

    pub fn suppression_requested(&self) -> bool {
        self.requested.load(Ordering::SeqCst)
    }

    /// Deliver an event to the registered handler, started or not
    pub fn send(&self, event: &KeyEvent) {
        let handler = self.handler.lock().clone();
        if let Some(handler) = handler {
            handler.handle(event);
        }
    }

    /// Press all keys in order, then release them in order
    pub fn chord(&self, codes: &[u16]) {
        for &code in codes {
            self.send(&press(code));
        }
        for &code in codes {
            self.send(&release(code));
        }
    }
}

impl Default for FakeCapture {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyboardCapture for FakeCapture {
    fn register(&self, handler: Arc<dyn KeyHandler>) {
        *self.handler.lock() = Some(handler);
    }

    fn start(&self) {
        self.started.store(true, Ordering::SeqCst);
    }

    fn cancel(&self) {
        self.started.store(false, Ordering::SeqCst);
    }

    fn suppress_keyboard(&self, suppress: bool) {
        self.requested.store(suppress, Ordering::SeqCst);
    }

    fn is_keyboard_suppressed(&self) -> bool {
        self.requested.load(Ordering::SeqCst) && self.effective.load(Ordering::SeqCst)
    }
}

/// Emulation backend that counts backspaces
#[derive(Default)]
pub struct FakeEmulation {
    backspaces: AtomicUsize,
}

impl FakeEmulation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn backspaces(&self) -> usize {
        self.backspaces.load(Ordering::SeqCst)
    }
}

impl KeyboardEmulation for FakeEmulation {
    fn send_backspaces(&self, count: usize) {
        self.backspaces.fetch_add(count, Ordering::SeqCst);
    }
}

/// Listener that records everything it is told
#[derive(Default)]
pub struct RecordingListener {
    strokes: Mutex<Vec<Stroke>>,
    states: Mutex<Vec<MachineState>>,
}

impl RecordingListener {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn strokes(&self) -> Vec<Stroke> {
        self.strokes.lock().clone()
    }

    /// Recorded strokes as plain key lists
    pub fn stroke_keys(&self) -> Vec<Vec<&'static str>> {
        self.strokes()
            .iter()
            .map(|stroke| stroke.keys().to_vec())
            .collect()
    }

    pub fn states(&self) -> Vec<MachineState> {
        self.states.lock().clone()
    }
}

impl StrokeListener for RecordingListener {
    fn on_stroke(&self, stroke: &Stroke) {
        self.strokes.lock().push(stroke.clone());
    }

    fn on_state_changed(&self, state: MachineState) {
        self.states.lock().push(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keyboard::KeyEventType;

    #[test]
    fn press_creates_named_press_event() {
        let event = press(24);
        assert_eq!(event.key, KeyCode(24));
        assert_eq!(event.event_type, KeyEventType::Press);
        assert_eq!(event.keystring.as_deref(), Some("key24"));
    }

    #[test]
    fn release_creates_release_event() {
        let event = release(25);
        assert_eq!(event.key, KeyCode(25));
        assert_eq!(event.event_type, KeyEventType::Release);
    }

    #[test]
    fn capture_effective_only_when_requested() {
        let capture = FakeCapture::new();
        assert!(!capture.is_keyboard_suppressed());
        capture.suppress_keyboard(true);
        assert!(capture.is_keyboard_suppressed());
        capture.set_effective(false);
        assert!(!capture.is_keyboard_suppressed());
    }

    #[test]
    fn emulation_accumulates_backspaces() {
        let emulation = FakeEmulation::new();
        emulation.send_backspaces(2);
        emulation.send_backspaces(3);
        assert_eq!(emulation.backspaces(), 5);
    }
}
