//! Per-frame keyboard state machine.
//!
//! [`Keyboard`] owns the canonical per-key state for the whole application:
//! one [`KeySlot`] per canonical key value, indexed by `key.as_u8()`. The
//! native boundary feeds it already-decoded native codes plus modifier
//! masks; it translates, updates edge/level state, and invokes the dispatch
//! boundary ([`InputSink`]).
//!
//! # State machine
//!
//! Per key: `IDLE → (native down) → HELD → (native up, only while HELD) →
//! IDLE`. The `went_down`/`went_up` edge flags are transient: they are
//! valid for exactly one [`Keyboard::scan_keyboard`] call after being set
//! and are cleared there unconditionally — the only clearing site. This
//! guarantees at most one dispatched edge per key per frame even when the
//! native layer delivers the same transition more than once before the next
//! scan, which real platforms are documented to do.
//!
//! A key-up for a key that is not currently held is ignored. That is the
//! expected aftermath of [`Keyboard::reset_keys`]: when a native dialog
//! steals focus mid-hold, the release arrives after the reset, and dropping
//! it is what prevents the stuck-movement-key class of bug.

use std::time::{Duration, Instant};

use vwinput_core::{Key, KeyTranslator, Mask, Platform};

use crate::sink::InputSink;

/// Number of canonical key values; the per-key arena is a flat array.
const KEY_COUNT: usize = 256;

/// Per-key frame state.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeySlot {
    /// Currently physically held.
    pub level: bool,
    /// Transitioned to held this frame (edge, cleared by scan).
    pub went_down: bool,
    /// Transitioned to released this frame (edge, cleared by scan).
    pub went_up: bool,
    /// Auto-repeat arrived while already held.
    pub repeated: bool,
    /// Whole frames elapsed since the press.
    pub frames_down: u32,
    /// Press timestamp; `None` while idle.
    pressed_at: Option<Instant>,
}

impl KeySlot {
    fn reset(&mut self) {
        *self = KeySlot::default();
    }

    /// Any state a scan pass must report.
    fn is_live(&self) -> bool {
        self.level || self.went_down || self.went_up
    }
}

/// The per-application keyboard state machine.
///
/// One instance per running application, owned by the top-level context and
/// driven from the single thread that pumps native input.
pub struct Keyboard {
    translator: KeyTranslator,
    slots: [KeySlot; KEY_COUNT],
    /// Most recently pressed key, for "what key triggered this" queries.
    current_key: Key,
    /// Polled Num Lock state, maintained by the platform adapter.
    numlock_on: bool,
}

impl Keyboard {
    pub fn new(translator: KeyTranslator) -> Self {
        Self {
            translator,
            slots: [KeySlot::default(); KEY_COUNT],
            current_key: Key::None,
            numlock_on: true,
        }
    }

    pub fn platform(&self) -> Platform {
        self.translator.platform()
    }

    pub fn translator(&self) -> &KeyTranslator {
        &self.translator
    }

    /// Updates the polled Num Lock state; selects which translation map
    /// native numpad codes resolve through.
    pub fn set_numlock(&mut self, on: bool) {
        self.numlock_on = on;
    }

    /// Most recently pressed canonical key.
    pub fn current_key(&self) -> Key {
        self.current_key
    }

    // ── Native boundary ──────────────────────────────────────────────────

    /// Handles a native key-down. Unknown codes are ignored (`false`).
    pub fn handle_native_key_down(
        &mut self,
        native: u16,
        mask: Mask,
        sink: &mut dyn InputSink,
    ) -> bool {
        match self.translate_native(native) {
            Some(key) => self.handle_key_down(key, mask, sink),
            None => false,
        }
    }

    /// Handles a native key-up. Unknown codes are ignored (`false`).
    pub fn handle_native_key_up(
        &mut self,
        native: u16,
        mask: Mask,
        sink: &mut dyn InputSink,
    ) -> bool {
        match self.translate_native(native) {
            Some(key) => self.handle_key_up(key, mask, sink),
            None => false,
        }
    }

    fn translate_native(&self, native: u16) -> Option<Key> {
        if self.numlock_on {
            self.translator.translate(native)
        } else {
            self.translator.translate_numlock_off(native)
        }
    }

    // ── Canonical transitions ────────────────────────────────────────────

    /// Handles a canonical key-down.
    ///
    /// First press arms the timers; a down for an already-held key marks
    /// the repeat flag and leaves the timers running. Either way the
    /// down-edge flag is raised and the dispatch boundary is invoked.
    pub fn handle_key_down(&mut self, key: Key, mask: Mask, sink: &mut dyn InputSink) -> bool {
        if key == Key::None {
            return false;
        }
        let slot = &mut self.slots[key.as_u8() as usize];
        if slot.level {
            slot.repeated = true;
        } else {
            slot.level = true;
            slot.repeated = false;
            slot.frames_down = 0;
            slot.pressed_at = Some(Instant::now());
        }
        slot.went_down = true;
        let repeated = slot.repeated;
        self.current_key = key;
        sink.on_translated_key_down(key, mask, repeated)
    }

    /// Handles a canonical key-up.
    ///
    /// Processed only while the key is held; a stray up for an idle key is
    /// silently dropped (see module docs).
    pub fn handle_key_up(&mut self, key: Key, mask: Mask, sink: &mut dyn InputSink) -> bool {
        if key == Key::None {
            return false;
        }
        let slot = &mut self.slots[key.as_u8() as usize];
        if !slot.level {
            return false;
        }
        slot.level = false;
        slot.went_up = true;
        sink.on_translated_key_up(key, mask)
    }

    /// Forwards printable-character input to the dispatch boundary.
    pub fn handle_unicode_char(&mut self, ch: char, mask: Mask, sink: &mut dyn InputSink) -> bool {
        sink.on_unicode_char(ch, mask)
    }

    /// Forces every key to IDLE.
    ///
    /// Must be called whenever the application loses exclusive input focus
    /// (native dialog, alt-tab) so keys released elsewhere do not stay
    /// stuck held.
    pub fn reset_keys(&mut self) {
        for slot in &mut self.slots {
            slot.reset();
        }
        self.current_key = Key::None;
    }

    /// Once-per-frame scan pass.
    ///
    /// Invokes [`InputSink::on_scan_key`] for every key with live state,
    /// then clears the two edge flags and advances the frame counter for
    /// keys still held. Call exactly once per rendered frame, after the
    /// platform adapter has drained pending native messages.
    pub fn scan_keyboard(&mut self, sink: &mut dyn InputSink) {
        for raw in 0..KEY_COUNT {
            if !self.slots[raw].is_live() {
                continue;
            }
            let key = Key::from_u8(raw as u8);
            let (went_down, went_up, level) = {
                let slot = &self.slots[raw];
                (slot.went_down, slot.went_up, slot.level)
            };
            sink.on_scan_key(key, went_down, went_up, level);
            let slot = &mut self.slots[raw];
            slot.went_down = false;
            slot.went_up = false;
            if slot.level {
                slot.frames_down += 1;
            } else {
                slot.pressed_at = None;
            }
        }
    }

    // ── Observers ────────────────────────────────────────────────────────

    /// Current modifier mask, computed from held modifier keys.
    ///
    /// On platforms where Command doubles as Control, a held Meta key
    /// contributes CONTROL for keyboard accelerators but MAC_CONTROL for
    /// mouse events, so click handlers can tell the two apart.
    pub fn current_mask(&self, for_mouse_event: bool) -> Mask {
        let mut mask = Mask::NONE;
        if self.is_down(Key::Shift) {
            mask |= Mask::SHIFT;
        }
        if self.is_down(Key::Control) {
            mask |= Mask::CONTROL;
        }
        if self.is_down(Key::Alt) {
            mask |= Mask::ALT;
        }
        if self.is_down(Key::Meta) && self.platform().command_is_control() {
            mask |= if for_mouse_event {
                Mask::MAC_CONTROL
            } else {
                Mask::CONTROL
            };
        }
        mask
    }

    /// Whether `key` is currently held.
    pub fn is_down(&self, key: Key) -> bool {
        self.slots[key.as_u8() as usize].level
    }

    /// Advisory hold duration; `None` while the key is idle. Never gates
    /// dispatch — used by press-and-hold UI behaviors only.
    pub fn key_down_duration(&self, key: Key) -> Option<Duration> {
        self.slots[key.as_u8() as usize]
            .pressed_at
            .map(|t| t.elapsed())
    }

    /// Whole frames the key has been held across scan passes.
    pub fn frames_down(&self, key: Key) -> u32 {
        self.slots[key.as_u8() as usize].frames_down
    }

    /// Read-only view of one key's slot, for diagnostics.
    pub fn slot(&self, key: Key) -> &KeySlot {
        &self.slots[key.as_u8() as usize]
    }
}
