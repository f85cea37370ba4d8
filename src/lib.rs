//! Sidewinder Steno - chord detection for keyboard-based stenography
//!
//! Turns raw key presses and releases from a regular keyboard into completed
//! steno strokes, using a shifted Sidewinder layout with double keys.

pub mod config;
pub mod keyboard;
pub mod machine;

#[cfg(test)]
mod test_helpers;

pub use config::MachineConfig;
pub use machine::{MachineState, SidewinderMachine, Stroke, StrokeListener};
