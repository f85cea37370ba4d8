//! Keyboard events, steno keymap and OS keyboard interfaces

mod collaborator;
mod event;
pub mod keymap;

pub use collaborator::{KeyboardCapture, KeyboardEmulation};
pub use event::{KeyEvent, KeyEventType, KeyHandler};
pub use keymap::{resolve, KeyCode, STENO_KEYMAP};
