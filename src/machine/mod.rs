//! Stenotype machine driven by a regular keyboard
//!
//! The machine registers a key handler with the capture backend, folds the
//! incoming key events into chords and reports each completed stroke to the
//! host's [`StrokeListener`].
//!
//! ## Usage
//!
//! ```no_run
//! # use std::sync::Arc;
//! # use sidewinder_steno::keyboard::{KeyboardCapture, KeyboardEmulation};
//! use sidewinder_steno::machine::{ChannelListener, SidewinderMachine};
//! use sidewinder_steno::MachineConfig;
//!
//! # fn run(capture: Arc<dyn KeyboardCapture>, emulation: Arc<dyn KeyboardEmulation>) {
//! let mut machine = SidewinderMachine::new(MachineConfig::default(), capture, emulation);
//! let (listener, strokes) = ChannelListener::channel();
//! machine.set_stroke_listener(Arc::new(listener));
//! machine.start_capture();
//!
//! for event in strokes.iter() {
//!     println!("{:?}", event);
//! }
//! # }
//! ```

mod chord;
mod stroke;
mod suppression;

pub use chord::ChordState;
pub use stroke::{ChannelListener, MachineEvent, Stroke, StrokeEmitter, StrokeListener};
pub use suppression::SuppressionController;

use crate::config::MachineConfig;
use crate::keyboard::{KeyEvent, KeyHandler, KeyboardCapture, KeyboardEmulation};
use parking_lot::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Weak};

/// Lifecycle state reported to the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MachineState {
    /// Not capturing
    #[default]
    Stopped,
    /// Capturing and turning key events into strokes
    Ready,
}

/// Key handler registered with the capture backend.
///
/// Holds everything touched from the capture thread.
struct StenoHandler {
    chord: Mutex<ChordState>,
    capturing: AtomicBool,
    suppression: SuppressionController,
    emitter: StrokeEmitter,
    capture: Weak<dyn KeyboardCapture>,
    emulation: Arc<dyn KeyboardEmulation>,
}

impl StenoHandler {
    fn new(
        config: &MachineConfig,
        capture: Weak<dyn KeyboardCapture>,
        emulation: Arc<dyn KeyboardEmulation>,
    ) -> Self {
        Self {
            chord: Mutex::new(ChordState::new()),
            capturing: AtomicBool::new(false),
            suppression: SuppressionController::new(config.arpeggiate),
            emitter: StrokeEmitter::new(),
            capture,
            emulation,
        }
    }

    fn is_capturing(&self) -> bool {
        self.capturing.load(Ordering::SeqCst)
    }

    /// Whether the backend is withholding keys from other applications.
    ///
    /// A dropped backend delivers no more keys, so nothing can leak.
    fn capture_suppressing(&self) -> bool {
        self.capture
            .upgrade()
            .map(|capture| capture.is_keyboard_suppressed())
            .unwrap_or(true)
    }

    /// Flip capturing and drop any partial stroke under the chord lock, so no
    /// key event can land between the two.
    fn set_capturing(&self, capturing: bool) {
        let mut chord = self.chord.lock();
        self.capturing.store(capturing, Ordering::SeqCst);
        chord.reset();
    }
}

impl KeyHandler for StenoHandler {
    fn on_key_down(&self, event: &KeyEvent) {
        let mut chord = self.chord.lock();
        if !self.is_capturing() {
            return;
        }

        if self
            .suppression
            .needs_backspace(event, self.capture_suppressing())
        {
            log::debug!("key {:?} leaked through suppression", event.key);
            self.emulation.send_backspaces(1);
        }
        chord.press(event.key);
        log::trace!(
            "key down {:?} ({:?}), {} held",
            event.key,
            event.keystring,
            chord.down_count()
        );
    }

    fn on_key_up(&self, event: &KeyEvent) {
        let stroke = {
            let mut chord = self.chord.lock();
            if !self.is_capturing() {
                return;
            }
            let stroke = chord.release(event.key);
            log::trace!(
                "key up {:?} ({:?}), {}/{} released",
                event.key,
                event.keystring,
                chord.released_count(),
                chord.down_count()
            );
            stroke
        };

        if let Some(stroke) = stroke {
            self.emitter.emit(&stroke);
        }
    }
}

/// Keyboard-based steno machine
pub struct SidewinderMachine {
    config: MachineConfig,
    state: MachineState,
    capture: Arc<dyn KeyboardCapture>,
    handler: Arc<StenoHandler>,
}

impl SidewinderMachine {
    /// Create a machine and register its key handler with `capture`.
    ///
    /// Keyboard suppression is switched on right away.
    pub fn new(
        config: MachineConfig,
        capture: Arc<dyn KeyboardCapture>,
        emulation: Arc<dyn KeyboardEmulation>,
    ) -> Self {
        let handler = Arc::new(StenoHandler::new(
            &config,
            Arc::downgrade(&capture),
            emulation,
        ));
        capture.register(handler.clone());

        let machine = Self {
            config,
            state: MachineState::Stopped,
            capture,
            handler,
        };
        machine.suppress_keyboard(true);
        machine
    }

    pub fn config(&self) -> &MachineConfig {
        &self.config
    }

    pub fn state(&self) -> MachineState {
        self.state
    }

    /// Register the listener that receives strokes, replacing any previous one
    pub fn set_stroke_listener(&self, listener: Arc<dyn StrokeListener>) {
        self.handler.emitter.set_listener(listener);
    }

    /// Begin listening to the keyboard
    pub fn start_capture(&mut self) {
        self.handler.set_capturing(true);
        self.capture.start();
        self.state = MachineState::Ready;
        log::info!(
            "steno capture started (arpeggiate: {})",
            self.config.arpeggiate
        );
        self.handler.emitter.emit_state(MachineState::Ready);
    }

    /// Stop listening to the keyboard. A stroke in progress is discarded.
    pub fn stop_capture(&mut self) {
        self.capture.cancel();
        self.handler.set_capturing(false);
        self.state = MachineState::Stopped;
        log::info!("steno capture stopped");
        self.handler.emitter.emit_state(MachineState::Stopped);
    }

    /// Enable or disable keyboard suppression
    pub fn suppress_keyboard(&self, suppress: bool) {
        self.handler.suppression.set_keyboard_suppressed(suppress);
        self.capture.suppress_keyboard(suppress);
    }

    pub fn is_keyboard_suppressed(&self) -> bool {
        self.handler.suppression.is_keyboard_suppressed()
    }

    /// Number of backspaces needed to take back a literally typed stroke
    pub fn stroke_backspaces(&self, stroke: &Stroke) -> usize {
        self.handler.suppression.stroke_backspaces(stroke.len())
    }

    /// Take back a stroke that turned out to be a command.
    ///
    /// `suppress` receives the backspace count and performs the erase.
    pub fn post_suppress<F>(&self, stroke: &Stroke, suppress: F)
    where
        F: FnOnce(usize),
    {
        self.handler.suppression.post_suppress(stroke, suppress);
    }

    /// Whether no stroke is in progress
    pub fn is_idle(&self) -> bool {
        self.handler.chord.lock().is_idle()
    }
}
