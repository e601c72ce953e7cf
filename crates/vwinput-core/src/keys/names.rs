//! Locale-independent string codec for canonical keys, plus accelerator
//! label assembly.
//!
//! The textual form is used both for persisted binding files and for
//! building human-readable accelerator labels. Printable keys render as the
//! single character they carry (so a binding file says `key = "W"`); named
//! keys use a fixed short name (`"PgUp"`, `"NumEnter"`, …). The one
//! exception is Space, which renders as `"Space"` because a bare `" "` does
//! not survive hand-editing of binding files.
//!
//! Label assembly is platform-flavoured: macOS spells modifiers as the
//! symbol words `Control`/`Option`/`Shift` joined with `-` in that fixed
//! order; every other platform uses `Ctrl`/`Alt`/`Shift` joined with `+`.

use super::key::Key;
use super::mask::Mask;
use super::mouse::MouseButton;
use crate::platform::Platform;

/// Fixed names for every non-printable key (plus the Space exception).
///
/// This table is the single source of truth for both directions of the
/// codec; `from_name` scans it case-insensitively.
const NAMED_KEYS: &[(Key, &str)] = &[
    (Key::Space, "Space"),
    (Key::Return, "Enter"),
    (Key::Escape, "Esc"),
    (Key::Backspace, "Backspace"),
    (Key::Tab, "Tab"),
    (Key::Shift, "Shift"),
    (Key::Control, "Ctrl"),
    (Key::Alt, "Alt"),
    (Key::Meta, "Cmd"),
    (Key::CapsLock, "CapsLock"),
    (Key::Home, "Home"),
    (Key::End, "End"),
    (Key::PageUp, "PgUp"),
    (Key::PageDown, "PgDn"),
    (Key::Insert, "Ins"),
    (Key::Delete, "Del"),
    (Key::ArrowLeft, "Left"),
    (Key::ArrowRight, "Right"),
    (Key::ArrowUp, "Up"),
    (Key::ArrowDown, "Down"),
    (Key::F1, "F1"),
    (Key::F2, "F2"),
    (Key::F3, "F3"),
    (Key::F4, "F4"),
    (Key::F5, "F5"),
    (Key::F6, "F6"),
    (Key::F7, "F7"),
    (Key::F8, "F8"),
    (Key::F9, "F9"),
    (Key::F10, "F10"),
    (Key::F11, "F11"),
    (Key::F12, "F12"),
    (Key::PrintScreen, "PrtScn"),
    (Key::ScrollLock, "ScrLk"),
    (Key::Pause, "Pause"),
    (Key::NumLock, "NumLk"),
    (Key::ContextMenu, "Menu"),
    (Key::Numpad0, "Num0"),
    (Key::Numpad1, "Num1"),
    (Key::Numpad2, "Num2"),
    (Key::Numpad3, "Num3"),
    (Key::Numpad4, "Num4"),
    (Key::Numpad5, "Num5"),
    (Key::Numpad6, "Num6"),
    (Key::Numpad7, "Num7"),
    (Key::Numpad8, "Num8"),
    (Key::Numpad9, "Num9"),
    (Key::NumpadDivide, "NumDiv"),
    (Key::NumpadMultiply, "NumMul"),
    (Key::NumpadSubtract, "NumSub"),
    (Key::NumpadAdd, "NumAdd"),
    (Key::NumpadEnter, "NumEnter"),
    (Key::NumpadDecimal, "NumDot"),
];

impl Key {
    /// Renders the canonical textual form of this key.
    ///
    /// [`Key::None`] renders as the empty string, which persistence treats
    /// as an absent key field.
    pub fn name(self) -> String {
        for &(key, name) in NAMED_KEYS {
            if key == self {
                return name.to_string();
            }
        }
        match self.as_char() {
            Some(c) => c.to_string(),
            None => String::new(),
        }
    }

    /// Recovers a key from its canonical textual form.
    ///
    /// Single printable characters map through [`Key::from_char`]; longer
    /// names are matched case-insensitively against the fixed name table.
    /// Unknown names degrade to [`Key::None`].
    pub fn from_name(name: &str) -> Key {
        let mut chars = name.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            return Key::from_char(c);
        }
        for &(key, fixed) in NAMED_KEYS {
            if fixed.eq_ignore_ascii_case(name) {
                return key;
            }
        }
        Key::None
    }
}

/// Modifier prefix for an accelerator label, in the platform's fixed order.
fn modifier_words(mask: Mask, platform: Platform) -> Vec<&'static str> {
    let n = mask.normalized();
    let mut words = Vec::new();
    if platform == Platform::MacOs {
        if n.contains(Mask::CONTROL) {
            words.push("Control");
        }
        if n.contains(Mask::ALT) {
            words.push("Option");
        }
        if n.contains(Mask::SHIFT) {
            words.push("Shift");
        }
    } else {
        if n.contains(Mask::CONTROL) {
            words.push("Ctrl");
        }
        if n.contains(Mask::ALT) {
            words.push("Alt");
        }
        if n.contains(Mask::SHIFT) {
            words.push("Shift");
        }
    }
    words
}

/// Builds a human-readable accelerator label, e.g. `"Ctrl+Shift+K"` or
/// `"Control-Option-W"` on macOS.
///
/// Returns the empty string for `Key::None` with no modifiers.
pub fn accelerator_label(key: Key, mask: Mask, platform: Platform) -> String {
    let sep = if platform == Platform::MacOs { "-" } else { "+" };
    let mut parts = modifier_words(mask, platform);
    let key_name = key.name();
    if !key_name.is_empty() {
        return parts
            .drain(..)
            .map(str::to_string)
            .chain(std::iter::once(key_name))
            .collect::<Vec<_>>()
            .join(sep);
    }
    parts.join(sep)
}

/// Builds the label for a full chord, including the mouse-button axis when
/// present, e.g. `"Ctrl+Double LMB"`.
pub fn chord_label(mouse: MouseButton, key: Key, mask: Mask, platform: Platform) -> String {
    match mouse.name() {
        Some(button) => {
            let prefix = accelerator_label(key, mask, platform);
            if prefix.is_empty() {
                button.to_string()
            } else {
                let sep = if platform == Platform::MacOs { "-" } else { "+" };
                format!("{prefix}{sep}{button}")
            }
        }
        None => accelerator_label(key, mask, platform),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_round_trips_every_named_key() {
        for &(key, _) in NAMED_KEYS {
            let name = key.name();
            assert_eq!(Key::from_name(&name), key, "round-trip of {name:?}");
        }
    }

    #[test]
    fn test_printable_keys_render_as_themselves() {
        assert_eq!(Key::KeyW.name(), "W");
        assert_eq!(Key::Digit3.name(), "3");
        assert_eq!(Key::Slash.name(), "/");
    }

    #[test]
    fn test_space_renders_as_fixed_name_not_blank() {
        assert_eq!(Key::Space.name(), "Space");
        assert_eq!(Key::from_name("Space"), Key::Space);
        // A literal single space still parses.
        assert_eq!(Key::from_name(" "), Key::Space);
    }

    #[test]
    fn test_from_name_is_case_insensitive_for_named_keys() {
        assert_eq!(Key::from_name("pgup"), Key::PageUp);
        assert_eq!(Key::from_name("ENTER"), Key::Return);
        assert_eq!(Key::from_name("numenter"), Key::NumpadEnter);
    }

    #[test]
    fn test_from_name_of_single_printable_char_recovers_key() {
        assert_eq!(Key::from_name("w"), Key::KeyW);
        assert_eq!(Key::from_name("W"), Key::KeyW);
        assert_eq!(Key::from_name(";"), Key::Semicolon);
    }

    #[test]
    fn test_unknown_name_degrades_to_none() {
        assert_eq!(Key::from_name("Hyper"), Key::None);
        assert_eq!(Key::from_name(""), Key::None);
    }

    #[test]
    fn test_none_renders_as_empty_string() {
        assert_eq!(Key::None.name(), "");
    }

    #[test]
    fn test_accelerator_label_default_flavour() {
        let label = accelerator_label(Key::KeyK, Mask::CONTROL | Mask::SHIFT, Platform::Windows);
        assert_eq!(label, "Ctrl+Shift+K");
    }

    #[test]
    fn test_accelerator_label_macos_flavour_uses_word_order_and_dashes() {
        let label = accelerator_label(
            Key::KeyW,
            Mask::SHIFT | Mask::ALT | Mask::CONTROL,
            Platform::MacOs,
        );
        assert_eq!(label, "Control-Option-Shift-W");
    }

    #[test]
    fn test_accelerator_label_mac_control_counts_as_control() {
        let label = accelerator_label(Key::KeyC, Mask::MAC_CONTROL, Platform::MacOs);
        assert_eq!(label, "Control-C");
    }

    #[test]
    fn test_chord_label_with_mouse_button() {
        let label = chord_label(
            MouseButton::DoubleLeft,
            Key::None,
            Mask::CONTROL,
            Platform::Linux,
        );
        assert_eq!(label, "Ctrl+Double LMB");
    }

    #[test]
    fn test_chord_label_mouse_only() {
        let label = chord_label(MouseButton::Right, Key::None, Mask::NONE, Platform::Windows);
        assert_eq!(label, "RMB");
    }
}
