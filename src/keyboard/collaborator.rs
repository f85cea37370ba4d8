//! Interfaces to the OS keyboard layer
//!
//! Capturing raw key events and emulating keystrokes are platform specific and
//! live outside this crate. The machine only talks to them through these traits.

use super::KeyHandler;
use std::sync::Arc;

/// Source of raw key events
pub trait KeyboardCapture: Send + Sync {
    /// Register the handler that receives every key event
    fn register(&self, handler: Arc<dyn KeyHandler>);

    /// Begin delivering events
    fn start(&self);

    /// Stop delivering events
    fn cancel(&self);

    /// Ask the backend to withhold captured keys from other applications
    fn suppress_keyboard(&self, suppress: bool);

    /// Whether the backend is currently withholding keys at the OS level
    fn is_keyboard_suppressed(&self) -> bool;
}

/// Sink for synthetic keystrokes
pub trait KeyboardEmulation: Send + Sync {
    /// Erase `count` previously typed characters
    fn send_backspaces(&self, count: usize);
}
