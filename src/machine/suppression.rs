//! Backspace accounting for keys that leak through as text
//!
//! When the keyboard is suppressed, steno keys should never reach other
//! applications. Two situations still need typed characters erased:
//!
//! - the capture backend has not (yet) managed to withhold keys at the OS
//!   level, so each key press inserts a character that must be backspaced
//!   immediately;
//! - a stroke was typed out literally and later recognised as a command, so
//!   the whole stroke has to be taken back.

use super::Stroke;
use crate::keyboard::KeyEvent;
use std::sync::atomic::{AtomicBool, Ordering};

#[derive(Debug)]
pub struct SuppressionController {
    /// Whether keyboard suppression has been requested
    keyboard_suppressed: AtomicBool,
    /// Arpeggiate mode adds a finishing keystroke to every stroke
    arpeggiate: bool,
}

impl SuppressionController {
    pub fn new(arpeggiate: bool) -> Self {
        Self {
            keyboard_suppressed: AtomicBool::new(false),
            arpeggiate,
        }
    }

    pub fn set_keyboard_suppressed(&self, suppress: bool) {
        self.keyboard_suppressed.store(suppress, Ordering::SeqCst);
    }

    pub fn is_keyboard_suppressed(&self) -> bool {
        self.keyboard_suppressed.load(Ordering::SeqCst)
    }

    /// Whether a key press leaked a character that must be erased.
    ///
    /// `capture_suppressing` is whether the capture backend is withholding
    /// keys at the OS level right now.
    pub fn needs_backspace(&self, event: &KeyEvent, capture_suppressing: bool) -> bool {
        self.is_keyboard_suppressed() && event.has_keystring() && !capture_suppressing
    }

    /// Number of characters a literally typed stroke occupies
    pub fn stroke_backspaces(&self, stroke_len: usize) -> usize {
        if self.arpeggiate {
            stroke_len + 1
        } else {
            stroke_len
        }
    }

    /// Pass the stroke's backspace count to `suppress`.
    ///
    /// The caller supplies the erase function so it can run on whichever
    /// thread owns the output.
    pub fn post_suppress<F>(&self, stroke: &Stroke, suppress: F)
    where
        F: FnOnce(usize),
    {
        let count = self.stroke_backspaces(stroke.len());
        log::debug!("taking back stroke [{}] with {} backspaces", stroke, count);
        suppress(count);
    }
}
