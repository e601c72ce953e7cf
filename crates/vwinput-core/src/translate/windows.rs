//! Windows virtual-key translation table.
//!
//! Reference: Virtual-Key Codes (winuser.h),
//! https://learn.microsoft.com/windows/win32/inputdev/virtual-key-codes
//!
//! Letters and digits use their ASCII values (`VK_A` = 0x41), so those rows
//! are identity mappings onto the canonical layout. Left/right modifier VKs
//! are listed before the generic `VK_SHIFT`/`VK_CONTROL`/`VK_MENU` codes so
//! the inverse map resolves to the generic code.

use crate::keys::key::Key;

/// VK → canonical key, in insertion order (later duplicates win the inverse).
pub const MAIN_TABLE: &[(u16, Key)] = &[
    // ── Alphabet (VK_A..VK_Z, identity) ──────────────────────────────────
    (0x41, Key::KeyA),
    (0x42, Key::KeyB),
    (0x43, Key::KeyC),
    (0x44, Key::KeyD),
    (0x45, Key::KeyE),
    (0x46, Key::KeyF),
    (0x47, Key::KeyG),
    (0x48, Key::KeyH),
    (0x49, Key::KeyI),
    (0x4A, Key::KeyJ),
    (0x4B, Key::KeyK),
    (0x4C, Key::KeyL),
    (0x4D, Key::KeyM),
    (0x4E, Key::KeyN),
    (0x4F, Key::KeyO),
    (0x50, Key::KeyP),
    (0x51, Key::KeyQ),
    (0x52, Key::KeyR),
    (0x53, Key::KeyS),
    (0x54, Key::KeyT),
    (0x55, Key::KeyU),
    (0x56, Key::KeyV),
    (0x57, Key::KeyW),
    (0x58, Key::KeyX),
    (0x59, Key::KeyY),
    (0x5A, Key::KeyZ),
    // ── Digit row (VK_0..VK_9, identity) ─────────────────────────────────
    (0x30, Key::Digit0),
    (0x31, Key::Digit1),
    (0x32, Key::Digit2),
    (0x33, Key::Digit3),
    (0x34, Key::Digit4),
    (0x35, Key::Digit5),
    (0x36, Key::Digit6),
    (0x37, Key::Digit7),
    (0x38, Key::Digit8),
    (0x39, Key::Digit9),
    // ── Control keys ─────────────────────────────────────────────────────
    (0x0D, Key::Return),      // VK_RETURN
    (0x1B, Key::Escape),      // VK_ESCAPE
    (0x08, Key::Backspace),   // VK_BACK
    (0x09, Key::Tab),         // VK_TAB
    (0x20, Key::Space),       // VK_SPACE
    (0x14, Key::CapsLock),    // VK_CAPITAL
    (0x13, Key::Pause),       // VK_PAUSE
    (0x91, Key::ScrollLock),  // VK_SCROLL
    (0x2C, Key::PrintScreen), // VK_SNAPSHOT
    (0x2D, Key::Insert),      // VK_INSERT
    (0x2E, Key::Delete),      // VK_DELETE
    (0x24, Key::Home),        // VK_HOME
    (0x23, Key::End),         // VK_END
    (0x21, Key::PageUp),      // VK_PRIOR
    (0x22, Key::PageDown),    // VK_NEXT
    (0x5D, Key::ContextMenu), // VK_APPS
    // ── Arrows ───────────────────────────────────────────────────────────
    (0x25, Key::ArrowLeft),
    (0x26, Key::ArrowUp),
    (0x27, Key::ArrowRight),
    (0x28, Key::ArrowDown),
    // ── Function keys (VK_F1..VK_F12) ────────────────────────────────────
    (0x70, Key::F1),
    (0x71, Key::F2),
    (0x72, Key::F3),
    (0x73, Key::F4),
    (0x74, Key::F5),
    (0x75, Key::F6),
    (0x76, Key::F7),
    (0x77, Key::F8),
    (0x78, Key::F9),
    (0x79, Key::F10),
    (0x7A, Key::F11),
    (0x7B, Key::F12),
    // ── Numpad ───────────────────────────────────────────────────────────
    (0x60, Key::Numpad0),
    (0x61, Key::Numpad1),
    (0x62, Key::Numpad2),
    (0x63, Key::Numpad3),
    (0x64, Key::Numpad4),
    (0x65, Key::Numpad5),
    (0x66, Key::Numpad6),
    (0x67, Key::Numpad7),
    (0x68, Key::Numpad8),
    (0x69, Key::Numpad9),
    (0x6A, Key::NumpadMultiply), // VK_MULTIPLY
    (0x6B, Key::NumpadAdd),      // VK_ADD
    (0x6D, Key::NumpadSubtract), // VK_SUBTRACT
    (0x6E, Key::NumpadDecimal),  // VK_DECIMAL
    (0x6F, Key::NumpadDivide),   // VK_DIVIDE
    (0x90, Key::NumLock),        // VK_NUMLOCK
    // ── Punctuation ──────────────────────────────────────────────────────
    (0xBA, Key::Semicolon),    // VK_OEM_1      (; :)
    (0xBB, Key::Equal),        // VK_OEM_PLUS   (= +)
    (0xBC, Key::Comma),        // VK_OEM_COMMA  (, <)
    (0xBD, Key::Minus),        // VK_OEM_MINUS  (- _)
    (0xBE, Key::Period),       // VK_OEM_PERIOD (. >)
    (0xBF, Key::Slash),        // VK_OEM_2      (/ ?)
    (0xC0, Key::Backquote),    // VK_OEM_3      (` ~)
    (0xDB, Key::BracketLeft),  // VK_OEM_4      ([ {)
    (0xDC, Key::Backslash),    // VK_OEM_5      (\ |)
    (0xDD, Key::BracketRight), // VK_OEM_6      (] })
    (0xDE, Key::Apostrophe),   // VK_OEM_7      (' ")
    // ── Modifiers (sided codes first; generic codes win the inverse) ─────
    (0xA0, Key::Shift),   // VK_LSHIFT
    (0xA1, Key::Shift),   // VK_RSHIFT
    (0xA2, Key::Control), // VK_LCONTROL
    (0xA3, Key::Control), // VK_RCONTROL
    (0xA4, Key::Alt),     // VK_LMENU
    (0xA5, Key::Alt),     // VK_RMENU
    (0x5B, Key::Meta),    // VK_LWIN
    (0x5C, Key::Meta),    // VK_RWIN
    (0x10, Key::Shift),   // VK_SHIFT
    (0x11, Key::Control), // VK_CONTROL
    (0x12, Key::Alt),     // VK_MENU
];

/// Navigation meaning of the physical numpad codes, with Num Lock off.
pub const NUMPAD_OVERLAY: &[(u16, Key)] = &[
    (0x60, Key::Insert),        // numpad 0
    (0x61, Key::End),           // numpad 1
    (0x62, Key::ArrowDown),     // numpad 2
    (0x63, Key::PageDown),      // numpad 3
    (0x64, Key::ArrowLeft),     // numpad 4
    (0x66, Key::ArrowRight),    // numpad 6
    (0x67, Key::Home),          // numpad 7
    (0x68, Key::ArrowUp),       // numpad 8
    (0x69, Key::PageUp),        // numpad 9
    (0x6E, Key::Delete),        // numpad .
];
