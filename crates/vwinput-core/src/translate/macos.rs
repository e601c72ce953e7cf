//! macOS key code translation table.
//!
//! Reference: `kVK_*` constants in Carbon's `Events.h` (the same values
//! Cocoa reports through `NSEvent.keyCode`). macOS key codes identify
//! physical ANSI positions, so the letter rows are not ASCII-ordered.
//!
//! Left and right sided modifiers collapse onto one canonical key; the
//! left-side codes are listed last so the inverse map prefers them.

use crate::keys::key::Key;

/// macOS key code → canonical key, in insertion order.
pub const MAIN_TABLE: &[(u16, Key)] = &[
    // ── ANSI letter positions ────────────────────────────────────────────
    (0x00, Key::KeyA),
    (0x01, Key::KeyS),
    (0x02, Key::KeyD),
    (0x03, Key::KeyF),
    (0x04, Key::KeyH),
    (0x05, Key::KeyG),
    (0x06, Key::KeyZ),
    (0x07, Key::KeyX),
    (0x08, Key::KeyC),
    (0x09, Key::KeyV),
    (0x0B, Key::KeyB),
    (0x0C, Key::KeyQ),
    (0x0D, Key::KeyW),
    (0x0E, Key::KeyE),
    (0x0F, Key::KeyR),
    (0x10, Key::KeyY),
    (0x11, Key::KeyT),
    (0x1F, Key::KeyO),
    (0x20, Key::KeyU),
    (0x22, Key::KeyI),
    (0x23, Key::KeyP),
    (0x25, Key::KeyL),
    (0x26, Key::KeyJ),
    (0x28, Key::KeyK),
    (0x2D, Key::KeyN),
    (0x2E, Key::KeyM),
    // ── Digit row ────────────────────────────────────────────────────────
    (0x12, Key::Digit1),
    (0x13, Key::Digit2),
    (0x14, Key::Digit3),
    (0x15, Key::Digit4),
    (0x17, Key::Digit5),
    (0x16, Key::Digit6),
    (0x1A, Key::Digit7),
    (0x1C, Key::Digit8),
    (0x19, Key::Digit9),
    (0x1D, Key::Digit0),
    // ── Punctuation ──────────────────────────────────────────────────────
    (0x18, Key::Equal),        // kVK_ANSI_Equal
    (0x1B, Key::Minus),        // kVK_ANSI_Minus
    (0x1E, Key::BracketRight), // kVK_ANSI_RightBracket
    (0x21, Key::BracketLeft),  // kVK_ANSI_LeftBracket
    (0x27, Key::Apostrophe),   // kVK_ANSI_Quote
    (0x29, Key::Semicolon),    // kVK_ANSI_Semicolon
    (0x2A, Key::Backslash),    // kVK_ANSI_Backslash
    (0x2B, Key::Comma),        // kVK_ANSI_Comma
    (0x2C, Key::Slash),        // kVK_ANSI_Slash
    (0x2F, Key::Period),       // kVK_ANSI_Period
    (0x32, Key::Backquote),    // kVK_ANSI_Grave
    // ── Control keys ─────────────────────────────────────────────────────
    (0x24, Key::Return),    // kVK_Return
    (0x30, Key::Tab),       // kVK_Tab
    (0x31, Key::Space),     // kVK_Space
    (0x33, Key::Backspace), // kVK_Delete (backward delete)
    (0x35, Key::Escape),    // kVK_Escape
    (0x39, Key::CapsLock),  // kVK_CapsLock
    (0x72, Key::Insert),    // kVK_Help (Insert on PC keyboards)
    (0x73, Key::Home),      // kVK_Home
    (0x74, Key::PageUp),    // kVK_PageUp
    (0x75, Key::Delete),    // kVK_ForwardDelete
    (0x77, Key::End),       // kVK_End
    (0x79, Key::PageDown),  // kVK_PageDown
    // ── Arrows ───────────────────────────────────────────────────────────
    (0x7B, Key::ArrowLeft),
    (0x7C, Key::ArrowRight),
    (0x7D, Key::ArrowDown),
    (0x7E, Key::ArrowUp),
    // ── Function keys ────────────────────────────────────────────────────
    (0x7A, Key::F1),
    (0x78, Key::F2),
    (0x63, Key::F3),
    (0x76, Key::F4),
    (0x60, Key::F5),
    (0x61, Key::F6),
    (0x62, Key::F7),
    (0x64, Key::F8),
    (0x65, Key::F9),
    (0x6D, Key::F10),
    (0x67, Key::F11),
    (0x6F, Key::F12),
    // ── Keypad ───────────────────────────────────────────────────────────
    (0x52, Key::Numpad0),
    (0x53, Key::Numpad1),
    (0x54, Key::Numpad2),
    (0x55, Key::Numpad3),
    (0x56, Key::Numpad4),
    (0x57, Key::Numpad5),
    (0x58, Key::Numpad6),
    (0x59, Key::Numpad7),
    (0x5B, Key::Numpad8),
    (0x5C, Key::Numpad9),
    (0x41, Key::NumpadDecimal),  // kVK_ANSI_KeypadDecimal
    (0x43, Key::NumpadMultiply), // kVK_ANSI_KeypadMultiply
    (0x45, Key::NumpadAdd),      // kVK_ANSI_KeypadPlus
    (0x47, Key::NumLock),        // kVK_ANSI_KeypadClear
    (0x4B, Key::NumpadDivide),   // kVK_ANSI_KeypadDivide
    (0x4C, Key::NumpadEnter),    // kVK_ANSI_KeypadEnter
    (0x4E, Key::NumpadSubtract), // kVK_ANSI_KeypadMinus
    // ── Modifiers (right-side codes first; left codes win the inverse) ───
    (0x3C, Key::Shift),   // kVK_RightShift
    (0x3E, Key::Control), // kVK_RightControl
    (0x3D, Key::Alt),     // kVK_RightOption
    (0x36, Key::Meta),    // kVK_RightCommand
    (0x38, Key::Shift),   // kVK_Shift
    (0x3B, Key::Control), // kVK_Control
    (0x3A, Key::Alt),     // kVK_Option
    (0x37, Key::Meta),    // kVK_Command
];

/// Navigation meaning of the keypad codes, with Num Lock (Clear) off.
pub const NUMPAD_OVERLAY: &[(u16, Key)] = &[
    (0x52, Key::Insert),     // keypad 0
    (0x53, Key::End),        // keypad 1
    (0x54, Key::ArrowDown),  // keypad 2
    (0x55, Key::PageDown),   // keypad 3
    (0x56, Key::ArrowLeft),  // keypad 4
    (0x58, Key::ArrowRight), // keypad 6
    (0x59, Key::Home),       // keypad 7
    (0x5B, Key::ArrowUp),    // keypad 8
    (0x5C, Key::PageUp),     // keypad 9
    (0x41, Key::Delete),     // keypad .
];
