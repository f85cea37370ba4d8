//! Key code definitions and the steno keymap
//!
//! Keycodes are X11 hardware keycodes of a standard PC keyboard. The layout is
//! the Sidewinder steno layout shifted up one row, with extra double keys so
//! that two steno keys can be struck with a single finger.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Represents a physical key code
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct KeyCode(pub u16);

impl KeyCode {
    pub fn new(code: u16) -> Self {
        Self(code)
    }

    pub fn as_u16(&self) -> u16 {
        self.0
    }
}

impl From<u16> for KeyCode {
    fn from(code: u16) -> Self {
        Self(code)
    }
}

/// Static keymap from keycode to steno key binding.
///
/// A binding is one or two steno keys separated by a space; compound bindings
/// are split apart by [`resolve`].
pub static STENO_KEYMAP: LazyLock<HashMap<KeyCode, &'static str>> = LazyLock::new(|| {
    let mut map = HashMap::new();

    // Number row
    map.insert(KeyCode(10), "S-"); // 1
    map.insert(KeyCode(11), "T-"); // 2
    map.insert(KeyCode(12), "P-"); // 3
    map.insert(KeyCode(13), "H-"); // 4
    map.insert(KeyCode(14), "*"); // 5
    map.insert(KeyCode(15), "#"); // 6
    map.insert(KeyCode(16), "-F"); // 7
    map.insert(KeyCode(17), "-P"); // 8
    map.insert(KeyCode(18), "-L"); // 9
    map.insert(KeyCode(19), "-T"); // 0
    map.insert(KeyCode(20), "-D"); // -
    map.insert(KeyCode(21), "-T -D"); // =

    // Top letter row
    map.insert(KeyCode(24), "S-"); // q
    map.insert(KeyCode(25), "K-"); // w
    map.insert(KeyCode(26), "W-"); // e
    map.insert(KeyCode(27), "R-"); // r
    map.insert(KeyCode(28), "*"); // t
    map.insert(KeyCode(29), "*"); // y
    map.insert(KeyCode(30), "-R"); // u
    map.insert(KeyCode(31), "-B"); // i
    map.insert(KeyCode(32), "-G"); // o
    map.insert(KeyCode(33), "-S"); // p
    map.insert(KeyCode(34), "-Z"); // [
    map.insert(KeyCode(35), "-S -Z"); // ]

    // Home row
    map.insert(KeyCode(38), "#"); // a
    map.insert(KeyCode(39), "T- K-"); // s
    map.insert(KeyCode(40), "P- W-"); // d
    map.insert(KeyCode(41), "H- R-"); // f
    map.insert(KeyCode(42), "#"); // g
    map.insert(KeyCode(43), "#"); // h
    map.insert(KeyCode(44), "-F -R"); // j
    map.insert(KeyCode(45), "-P -B"); // k
    map.insert(KeyCode(46), "-L -G"); // l
    map.insert(KeyCode(47), "-T -S"); // ;
    map.insert(KeyCode(48), "-D -Z"); // '

    // Bottom row, vowels
    map.insert(KeyCode(53), "A- O-"); // x
    map.insert(KeyCode(54), "A-"); // c
    map.insert(KeyCode(55), "O-"); // v

    map.insert(KeyCode(57), "-E"); // n
    map.insert(KeyCode(58), "-U"); // m
    map.insert(KeyCode(59), "-E -U"); // ,

    map
});

/// Resolve a keycode into the steno keys it produces, in binding order.
///
/// Unmapped keycodes resolve to nothing.
pub fn resolve(key: KeyCode) -> Vec<&'static str> {
    STENO_KEYMAP
        .get(&key)
        .copied()
        .map(|binding| binding.split_whitespace().collect())
        .unwrap_or_default()
}
