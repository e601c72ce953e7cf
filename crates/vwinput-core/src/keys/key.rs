//! The canonical key enumeration.
//!
//! Every physical/logical keyboard key the subsystem knows about has exactly
//! one canonical [`Key`] value, shared by all platforms. The numeric layout
//! is deliberate:
//!
//! - Printable keys carry their ASCII-uppercase value (`Key::KeyA` = 0x41,
//!   `Key::Digit0` = 0x30, `Key::Space` = 0x20). This makes the printable
//!   string codec trivial and keeps binding files human-readable.
//! - Named keys (Enter, arrows, function keys, numpad, modifiers) live in
//!   the 0x80–0xBF range, which no ASCII-printable key occupies.
//! - [`Key::None`] (0xFF) is the neutral sentinel: it is what lookup misses
//!   degrade to, and what an unused chord axis stores.
//!
//! The whole enumeration fits in a `u8`, so per-key frame state can be held
//! in a flat 256-slot array indexed by `key.as_u8()`.

use serde::{Deserialize, Serialize};

/// Canonical, platform-independent key identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Key {
    // Printable keys (ASCII-uppercase values)
    Space = 0x20,
    Apostrophe = 0x27,
    Comma = 0x2C,
    Minus = 0x2D,
    Period = 0x2E,
    Slash = 0x2F,
    Digit0 = 0x30,
    Digit1 = 0x31,
    Digit2 = 0x32,
    Digit3 = 0x33,
    Digit4 = 0x34,
    Digit5 = 0x35,
    Digit6 = 0x36,
    Digit7 = 0x37,
    Digit8 = 0x38,
    Digit9 = 0x39,
    Semicolon = 0x3B,
    Equal = 0x3D,
    KeyA = 0x41,
    KeyB = 0x42,
    KeyC = 0x43,
    KeyD = 0x44,
    KeyE = 0x45,
    KeyF = 0x46,
    KeyG = 0x47,
    KeyH = 0x48,
    KeyI = 0x49,
    KeyJ = 0x4A,
    KeyK = 0x4B,
    KeyL = 0x4C,
    KeyM = 0x4D,
    KeyN = 0x4E,
    KeyO = 0x4F,
    KeyP = 0x50,
    KeyQ = 0x51,
    KeyR = 0x52,
    KeyS = 0x53,
    KeyT = 0x54,
    KeyU = 0x55,
    KeyV = 0x56,
    KeyW = 0x57,
    KeyX = 0x58,
    KeyY = 0x59,
    KeyZ = 0x5A,
    BracketLeft = 0x5B,
    Backslash = 0x5C,
    BracketRight = 0x5D,
    Backquote = 0x60,

    // Named keys (0x80–0xBF)
    Return = 0x80,
    Escape = 0x81,
    Backspace = 0x82,
    Tab = 0x83,
    Shift = 0x84,
    Control = 0x85,
    Alt = 0x86,
    /// The OS key: Command on macOS, Windows key elsewhere.
    Meta = 0x87,
    CapsLock = 0x88,
    Home = 0x89,
    End = 0x8A,
    PageUp = 0x8B,
    PageDown = 0x8C,
    Insert = 0x8D,
    Delete = 0x8E,
    ArrowLeft = 0x8F,
    ArrowRight = 0x90,
    ArrowUp = 0x91,
    ArrowDown = 0x92,
    F1 = 0x93,
    F2 = 0x94,
    F3 = 0x95,
    F4 = 0x96,
    F5 = 0x97,
    F6 = 0x98,
    F7 = 0x99,
    F8 = 0x9A,
    F9 = 0x9B,
    F10 = 0x9C,
    F11 = 0x9D,
    F12 = 0x9E,
    PrintScreen = 0x9F,
    ScrollLock = 0xA0,
    Pause = 0xA1,
    NumLock = 0xA2,
    ContextMenu = 0xA3,
    Numpad0 = 0xA4,
    Numpad1 = 0xA5,
    Numpad2 = 0xA6,
    Numpad3 = 0xA7,
    Numpad4 = 0xA8,
    Numpad5 = 0xA9,
    Numpad6 = 0xAA,
    Numpad7 = 0xAB,
    Numpad8 = 0xAC,
    Numpad9 = 0xAD,
    NumpadDivide = 0xAE,
    NumpadMultiply = 0xAF,
    NumpadSubtract = 0xB0,
    NumpadAdd = 0xB1,
    NumpadEnter = 0xB2,
    NumpadDecimal = 0xB3,

    /// Sentinel: no key. Lookup misses and the unused chord axis store this.
    None = 0xFF,
}

impl Key {
    /// Converts a raw canonical byte back to a [`Key`].
    ///
    /// Returns [`Key::None`] for values that do not correspond to a known
    /// canonical key.
    pub fn from_u8(value: u8) -> Self {
        match value {
            0x20 => Key::Space,
            0x27 => Key::Apostrophe,
            0x2C => Key::Comma,
            0x2D => Key::Minus,
            0x2E => Key::Period,
            0x2F => Key::Slash,
            0x30 => Key::Digit0,
            0x31 => Key::Digit1,
            0x32 => Key::Digit2,
            0x33 => Key::Digit3,
            0x34 => Key::Digit4,
            0x35 => Key::Digit5,
            0x36 => Key::Digit6,
            0x37 => Key::Digit7,
            0x38 => Key::Digit8,
            0x39 => Key::Digit9,
            0x3B => Key::Semicolon,
            0x3D => Key::Equal,
            0x41 => Key::KeyA,
            0x42 => Key::KeyB,
            0x43 => Key::KeyC,
            0x44 => Key::KeyD,
            0x45 => Key::KeyE,
            0x46 => Key::KeyF,
            0x47 => Key::KeyG,
            0x48 => Key::KeyH,
            0x49 => Key::KeyI,
            0x4A => Key::KeyJ,
            0x4B => Key::KeyK,
            0x4C => Key::KeyL,
            0x4D => Key::KeyM,
            0x4E => Key::KeyN,
            0x4F => Key::KeyO,
            0x50 => Key::KeyP,
            0x51 => Key::KeyQ,
            0x52 => Key::KeyR,
            0x53 => Key::KeyS,
            0x54 => Key::KeyT,
            0x55 => Key::KeyU,
            0x56 => Key::KeyV,
            0x57 => Key::KeyW,
            0x58 => Key::KeyX,
            0x59 => Key::KeyY,
            0x5A => Key::KeyZ,
            0x5B => Key::BracketLeft,
            0x5C => Key::Backslash,
            0x5D => Key::BracketRight,
            0x60 => Key::Backquote,
            0x80 => Key::Return,
            0x81 => Key::Escape,
            0x82 => Key::Backspace,
            0x83 => Key::Tab,
            0x84 => Key::Shift,
            0x85 => Key::Control,
            0x86 => Key::Alt,
            0x87 => Key::Meta,
            0x88 => Key::CapsLock,
            0x89 => Key::Home,
            0x8A => Key::End,
            0x8B => Key::PageUp,
            0x8C => Key::PageDown,
            0x8D => Key::Insert,
            0x8E => Key::Delete,
            0x8F => Key::ArrowLeft,
            0x90 => Key::ArrowRight,
            0x91 => Key::ArrowUp,
            0x92 => Key::ArrowDown,
            0x93 => Key::F1,
            0x94 => Key::F2,
            0x95 => Key::F3,
            0x96 => Key::F4,
            0x97 => Key::F5,
            0x98 => Key::F6,
            0x99 => Key::F7,
            0x9A => Key::F8,
            0x9B => Key::F9,
            0x9C => Key::F10,
            0x9D => Key::F11,
            0x9E => Key::F12,
            0x9F => Key::PrintScreen,
            0xA0 => Key::ScrollLock,
            0xA1 => Key::Pause,
            0xA2 => Key::NumLock,
            0xA3 => Key::ContextMenu,
            0xA4 => Key::Numpad0,
            0xA5 => Key::Numpad1,
            0xA6 => Key::Numpad2,
            0xA7 => Key::Numpad3,
            0xA8 => Key::Numpad4,
            0xA9 => Key::Numpad5,
            0xAA => Key::Numpad6,
            0xAB => Key::Numpad7,
            0xAC => Key::Numpad8,
            0xAD => Key::Numpad9,
            0xAE => Key::NumpadDivide,
            0xAF => Key::NumpadMultiply,
            0xB0 => Key::NumpadSubtract,
            0xB1 => Key::NumpadAdd,
            0xB2 => Key::NumpadEnter,
            0xB3 => Key::NumpadDecimal,
            _ => Key::None,
        }
    }

    /// Returns the raw canonical byte for this key.
    pub fn as_u8(self) -> u8 {
        self as u8
    }

    /// Converts a printable character to the canonical key that produces it.
    ///
    /// Letters fold to their uppercase key; returns [`Key::None`] for
    /// characters that are not canonical printable keys.
    pub fn from_char(c: char) -> Self {
        let upper = c.to_ascii_uppercase();
        if upper.is_ascii() {
            let key = Key::from_u8(upper as u8);
            if key.is_printable() {
                return key;
            }
        }
        Key::None
    }

    /// Returns the printable character for this key, or `None` for named keys.
    pub fn as_char(self) -> Option<char> {
        if self.is_printable() {
            Some(self.as_u8() as char)
        } else {
            Option::None
        }
    }

    /// Returns `true` for keys whose canonical value is a printable ASCII
    /// character (letters, digits, punctuation, space).
    pub fn is_printable(self) -> bool {
        let v = self.as_u8();
        (0x20..0x7F).contains(&v)
    }

    /// Returns `true` if this is a modifier key.
    pub fn is_modifier(self) -> bool {
        matches!(self, Key::Shift | Key::Control | Key::Alt | Key::Meta)
    }
}

impl Default for Key {
    fn default() -> Self {
        Key::None
    }
}
