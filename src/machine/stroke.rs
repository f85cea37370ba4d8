//! Completed strokes and delivery to the host

use super::MachineState;
use parking_lot::RwLock;
use std::fmt;
use std::sync::mpsc;
use std::sync::Arc;

/// A completed chord, as steno keys in ascending keycode order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stroke {
    keys: Vec<&'static str>,
}

impl Stroke {
    pub fn new(keys: Vec<&'static str>) -> Self {
        Self { keys }
    }

    pub fn keys(&self) -> &[&'static str] {
        &self.keys
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// True when every held key was unmapped
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

impl fmt::Display for Stroke {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.keys.join(" "))
    }
}

/// Host-side receiver of strokes and machine state changes
pub trait StrokeListener: Send + Sync {
    /// Called once per completed stroke. The stroke may be empty.
    fn on_stroke(&self, stroke: &Stroke);

    /// Called when the machine becomes ready or stops
    fn on_state_changed(&self, _state: MachineState) {}
}

/// Events forwarded by a [`ChannelListener`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MachineEvent {
    Stroke(Stroke),
    State(MachineState),
}

/// Listener that hands strokes off over a channel.
///
/// Sending never blocks, so a slow consumer cannot stall key intake.
pub struct ChannelListener {
    event_tx: mpsc::Sender<MachineEvent>,
}

impl ChannelListener {
    pub fn new(event_tx: mpsc::Sender<MachineEvent>) -> Self {
        Self { event_tx }
    }

    /// Create a listener together with the receiving end
    pub fn channel() -> (Self, mpsc::Receiver<MachineEvent>) {
        let (event_tx, event_rx) = mpsc::channel();
        (Self::new(event_tx), event_rx)
    }
}

impl StrokeListener for ChannelListener {
    fn on_stroke(&self, stroke: &Stroke) {
        let _ = self.event_tx.send(MachineEvent::Stroke(stroke.clone()));
    }

    fn on_state_changed(&self, state: MachineState) {
        let _ = self.event_tx.send(MachineEvent::State(state));
    }
}

/// Delivers strokes to the single registered listener.
///
/// The listener is cloned out of the lock before it is called, so a listener
/// may replace itself from inside a callback.
#[derive(Default)]
pub struct StrokeEmitter {
    listener: RwLock<Option<Arc<dyn StrokeListener>>>,
}

impl StrokeEmitter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the listener, replacing any previous one
    pub fn set_listener(&self, listener: Arc<dyn StrokeListener>) {
        *self.listener.write() = Some(listener);
    }

    fn listener(&self) -> Option<Arc<dyn StrokeListener>> {
        self.listener.read().clone()
    }

    pub fn emit(&self, stroke: &Stroke) {
        match self.listener() {
            Some(listener) => {
                log::debug!("stroke: [{}]", stroke);
                listener.on_stroke(stroke);
            }
            None => log::debug!("stroke [{}] dropped, no listener", stroke),
        }
    }

    pub fn emit_state(&self, state: MachineState) {
        if let Some(listener) = self.listener() {
            listener.on_state_changed(state);
        }
    }
}
