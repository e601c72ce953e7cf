//! SDL keysym translation table (Linux).
//!
//! Reference: classic `SDLK_*` keysym values (SDL_keysym.h). Printable
//! keysyms are ASCII — SDL reports letters as their *lowercase* codes, so
//! the letter rows fold 0x61..0x7A onto the canonical uppercase keys.
//! Named keysyms start at 256 and all fit in 16 bits; the platform adapter
//! masks wider keysyms before calling the translator, and anything that
//! does not fit is simply an unmapped code.

use crate::keys::key::Key;

/// SDL keysym → canonical key, in insertion order.
pub const MAIN_TABLE: &[(u16, Key)] = &[
    // ── Letters (SDL reports lowercase ASCII) ────────────────────────────
    (0x61, Key::KeyA),
    (0x62, Key::KeyB),
    (0x63, Key::KeyC),
    (0x64, Key::KeyD),
    (0x65, Key::KeyE),
    (0x66, Key::KeyF),
    (0x67, Key::KeyG),
    (0x68, Key::KeyH),
    (0x69, Key::KeyI),
    (0x6A, Key::KeyJ),
    (0x6B, Key::KeyK),
    (0x6C, Key::KeyL),
    (0x6D, Key::KeyM),
    (0x6E, Key::KeyN),
    (0x6F, Key::KeyO),
    (0x70, Key::KeyP),
    (0x71, Key::KeyQ),
    (0x72, Key::KeyR),
    (0x73, Key::KeyS),
    (0x74, Key::KeyT),
    (0x75, Key::KeyU),
    (0x76, Key::KeyV),
    (0x77, Key::KeyW),
    (0x78, Key::KeyX),
    (0x79, Key::KeyY),
    (0x7A, Key::KeyZ),
    // ── Digits and punctuation (ASCII identity) ──────────────────────────
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
    (0x20, Key::Space),
    (0x27, Key::Apostrophe),
    (0x2C, Key::Comma),
    (0x2D, Key::Minus),
    (0x2E, Key::Period),
    (0x2F, Key::Slash),
    (0x3B, Key::Semicolon),
    (0x3D, Key::Equal),
    (0x5B, Key::BracketLeft),
    (0x5C, Key::Backslash),
    (0x5D, Key::BracketRight),
    (0x60, Key::Backquote),
    // ── Control keys ─────────────────────────────────────────────────────
    (0x0D, Key::Return),     // SDLK_RETURN
    (0x1B, Key::Escape),     // SDLK_ESCAPE
    (0x08, Key::Backspace),  // SDLK_BACKSPACE
    (0x09, Key::Tab),        // SDLK_TAB
    (0x7F, Key::Delete),     // SDLK_DELETE
    (19, Key::Pause),        // SDLK_PAUSE
    (277, Key::Insert),      // SDLK_INSERT
    (278, Key::Home),        // SDLK_HOME
    (279, Key::End),         // SDLK_END
    (280, Key::PageUp),      // SDLK_PAGEUP
    (281, Key::PageDown),    // SDLK_PAGEDOWN
    (300, Key::NumLock),     // SDLK_NUMLOCK
    (301, Key::CapsLock),    // SDLK_CAPSLOCK
    (302, Key::ScrollLock),  // SDLK_SCROLLOCK
    (316, Key::PrintScreen), // SDLK_PRINT
    (319, Key::ContextMenu), // SDLK_MENU
    // ── Arrows ───────────────────────────────────────────────────────────
    (273, Key::ArrowUp),
    (274, Key::ArrowDown),
    (275, Key::ArrowRight),
    (276, Key::ArrowLeft),
    // ── Function keys (SDLK_F1..SDLK_F12) ────────────────────────────────
    (282, Key::F1),
    (283, Key::F2),
    (284, Key::F3),
    (285, Key::F4),
    (286, Key::F5),
    (287, Key::F6),
    (288, Key::F7),
    (289, Key::F8),
    (290, Key::F9),
    (291, Key::F10),
    (292, Key::F11),
    (293, Key::F12),
    // ── Keypad (SDLK_KP0..SDLK_KP_ENTER) ─────────────────────────────────
    (256, Key::Numpad0),
    (257, Key::Numpad1),
    (258, Key::Numpad2),
    (259, Key::Numpad3),
    (260, Key::Numpad4),
    (261, Key::Numpad5),
    (262, Key::Numpad6),
    (263, Key::Numpad7),
    (264, Key::Numpad8),
    (265, Key::Numpad9),
    (266, Key::NumpadDecimal),  // SDLK_KP_PERIOD
    (267, Key::NumpadDivide),   // SDLK_KP_DIVIDE
    (268, Key::NumpadMultiply), // SDLK_KP_MULTIPLY
    (269, Key::NumpadSubtract), // SDLK_KP_MINUS
    (270, Key::NumpadAdd),      // SDLK_KP_PLUS
    (271, Key::NumpadEnter),    // SDLK_KP_ENTER
    // ── Modifiers (right codes first; left codes win the inverse) ────────
    (303, Key::Shift),   // SDLK_RSHIFT
    (305, Key::Control), // SDLK_RCTRL
    (307, Key::Alt),     // SDLK_RALT
    (309, Key::Meta),    // SDLK_RMETA
    (304, Key::Shift),   // SDLK_LSHIFT
    (306, Key::Control), // SDLK_LCTRL
    (308, Key::Alt),     // SDLK_LALT
    (310, Key::Meta),    // SDLK_LMETA
];

/// Navigation meaning of the keypad keysyms, with Num Lock off.
pub const NUMPAD_OVERLAY: &[(u16, Key)] = &[
    (256, Key::Insert),     // KP0
    (257, Key::End),        // KP1
    (258, Key::ArrowDown),  // KP2
    (259, Key::PageDown),   // KP3
    (260, Key::ArrowLeft),  // KP4
    (262, Key::ArrowRight), // KP6
    (263, Key::Home),       // KP7
    (264, Key::ArrowUp),    // KP8
    (265, Key::PageUp),     // KP9
    (266, Key::Delete),     // KP.
];
