//! Chord accumulation
//!
//! Tracks which keys have gone down and which of those have come back up
//! since the stroke began. A stroke completes when every key that went down
//! has been released, so rolled and overlapping finger motion still forms a
//! single chord.

use super::Stroke;
use crate::keyboard::{keymap, KeyCode};
use std::collections::BTreeSet;

/// Key state for the stroke in progress
#[derive(Debug, Clone, Default)]
pub struct ChordState {
    /// Keys pressed since the stroke began
    down: BTreeSet<KeyCode>,
    /// Keys released since the stroke began; always a subset of `down`
    released: BTreeSet<KeyCode>,
}

impl ChordState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key press.
    ///
    /// Returns false if the key was already down (e.g. auto-repeat).
    pub fn press(&mut self, key: KeyCode) -> bool {
        self.down.insert(key)
    }

    /// Record a key release and return the stroke if it completes one.
    ///
    /// Releases of keys that never went down in this stroke are ignored.
    pub fn release(&mut self, key: KeyCode) -> Option<Stroke> {
        if !self.down.contains(&key) {
            return None;
        }
        self.released.insert(key);

        if self.down != self.released {
            return None;
        }

        // BTreeSet iteration gives ascending keycode order
        let keys = self
            .down
            .iter()
            .flat_map(|&code| keymap::resolve(code))
            .collect();

        self.reset();
        Some(Stroke::new(keys))
    }

    /// Drop any partial stroke
    pub fn reset(&mut self) {
        self.down.clear();
        self.released.clear();
    }

    pub fn is_idle(&self) -> bool {
        self.down.is_empty()
    }

    pub fn down_count(&self) -> usize {
        self.down.len()
    }

    pub fn released_count(&self) -> usize {
        self.released.len()
    }
}
