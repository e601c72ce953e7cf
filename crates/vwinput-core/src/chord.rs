//! Chord value types: [`KeyChord`] and [`KeyBind`].
//!
//! A *chord* is one triggerable combination: an optional mouse button, an
//! optional key, and a modifier mask. A [`KeyBind`] holds up to two chords
//! (primary and secondary) for one logical command — either chord triggers
//! the command. Both are plain value types, copied freely; binding state
//! never aliases frame state.
//!
//! # Matching
//!
//! A chord matches an event when both axes are equal (the unused axis is
//! the `None` sentinel on both sides) and the masks agree. A chord with
//! `ignore_mask` set matches regardless of which extra modifiers are held;
//! it is used for low-priority commands that must not shadow more specific
//! chords.

use serde::{Deserialize, Serialize};

use crate::keys::key::Key;
use crate::keys::mask::Mask;
use crate::keys::mouse::MouseButton;

/// One mouse-button + key + modifier combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyChord {
    pub mouse: MouseButton,
    pub key: Key,
    pub mask: Mask,
    /// When set, the chord matches under any held modifiers.
    pub ignore_mask: bool,
}

impl KeyChord {
    /// Builds a chord with an exact modifier mask.
    pub fn new(mouse: MouseButton, key: Key, mask: Mask) -> Self {
        Self {
            mouse,
            key,
            mask: mask.normalized(),
            ignore_mask: false,
        }
    }

    /// Builds a chord that matches regardless of held modifiers.
    pub fn ignoring_mask(mouse: MouseButton, key: Key) -> Self {
        Self {
            mouse,
            key,
            mask: Mask::NONE,
            ignore_mask: true,
        }
    }

    /// The chord that never matches anything; both axes unused.
    pub fn empty() -> Self {
        Self::new(MouseButton::None, Key::None, Mask::NONE)
    }

    /// Returns `true` when both axes are unused.
    pub fn is_empty(&self) -> bool {
        self.mouse == MouseButton::None && self.key == Key::None
    }

    /// Returns `true` iff this chord is triggered by `(mouse, key, mask)`.
    ///
    /// An empty chord matches nothing.
    pub fn matches(&self, mouse: MouseButton, key: Key, mask: Mask) -> bool {
        if self.is_empty() {
            return false;
        }
        self.mouse == mouse
            && self.key == key
            && (self.ignore_mask || self.mask == mask.normalized())
    }
}

impl Default for KeyChord {
    fn default() -> Self {
        Self::empty()
    }
}

/// Serialized form of one chord, the unit record stored in binding files.
///
/// `mouse` and `key` are omitted when their axis is unused; `ignore`
/// defaults to false.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChordRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(default = "default_mask_name")]
    pub mask: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mouse: Option<String>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub ignore: bool,
}

fn default_mask_name() -> String {
    "NONE".to_string()
}

impl From<KeyChord> for ChordRecord {
    fn from(chord: KeyChord) -> Self {
        let key_name = chord.key.name();
        Self {
            key: if key_name.is_empty() { None } else { Some(key_name) },
            mask: chord.mask.combo_name().to_string(),
            mouse: chord.mouse.name().map(str::to_string),
            ignore: chord.ignore_mask,
        }
    }
}

impl From<&ChordRecord> for KeyChord {
    fn from(record: &ChordRecord) -> Self {
        Self {
            mouse: record
                .mouse
                .as_deref()
                .map(MouseButton::from_name)
                .unwrap_or(MouseButton::None),
            key: record
                .key
                .as_deref()
                .map(Key::from_name)
                .unwrap_or(Key::None),
            mask: Mask::from_combo_name(&record.mask),
            ignore_mask: record.ignore,
        }
    }
}

/// Up to two alternative chords for one logical command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct KeyBind {
    chords: [KeyChord; 2],
}

/// Number of chord slots per binding.
pub const BIND_SLOTS: usize = 2;

impl KeyBind {
    /// A binding with both slots empty.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds a binding with only the primary slot filled.
    pub fn from_chord(chord: KeyChord) -> Self {
        Self {
            chords: [chord, KeyChord::empty()],
        }
    }

    /// Returns `true` iff every slot is empty.
    pub fn is_empty(&self) -> bool {
        self.chords.iter().all(KeyChord::is_empty)
    }

    /// Returns the chord stored in `slot`, or `None` for out-of-range slots.
    pub fn chord(&self, slot: usize) -> Option<KeyChord> {
        self.chords.get(slot).copied()
    }

    /// Iterates the non-empty chords.
    pub fn chords(&self) -> impl Iterator<Item = KeyChord> + '_ {
        self.chords.iter().copied().filter(|c| !c.is_empty())
    }

    /// Returns `true` iff either slot matches `(mouse, key, mask)`.
    pub fn can_handle(&self, mouse: MouseButton, key: Key, mask: Mask) -> bool {
        self.chords.iter().any(|c| c.matches(mouse, key, mask))
    }

    /// Keyboard-only convenience filter: forces the mouse axis to `None`.
    pub fn can_handle_key(&self, key: Key, mask: Mask) -> bool {
        self.can_handle(MouseButton::None, key, mask)
    }

    /// Mouse-only convenience filter: forces the key axis to `None`.
    pub fn can_handle_mouse(&self, mouse: MouseButton, mask: Mask) -> bool {
        self.can_handle(mouse, Key::None, mask)
    }

    /// Overwrites `slot` with `chord`. Out-of-range slots are ignored.
    pub fn replace_chord(&mut self, slot: usize, chord: KeyChord) {
        if let Some(target) = self.chords.get_mut(slot) {
            *target = chord;
        }
    }

    /// Clears `slot` back to the empty chord.
    pub fn clear_chord(&mut self, slot: usize) {
        self.replace_chord(slot, KeyChord::empty());
    }

    /// Adds `chord` to the first empty slot.
    ///
    /// Idempotent: if an identical chord is already present, nothing
    /// changes. Returns `false` when both slots are occupied by other
    /// chords.
    pub fn add_chord(&mut self, chord: KeyChord) -> bool {
        if self.chords.contains(&chord) {
            return true;
        }
        for target in &mut self.chords {
            if target.is_empty() {
                *target = chord;
                return true;
            }
        }
        false
    }
}
