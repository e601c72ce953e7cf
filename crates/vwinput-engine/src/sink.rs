//! The dispatch boundary.
//!
//! [`InputSink`] is the one interface through which the input engine hands
//! canonical events to the rest of the application. The keyboard state
//! machine calls it synchronously from the same thread that pumps native
//! messages; implementations must not block.
//!
//! The raw key path (`on_translated_key_down`/`up`) and the text path
//! (`on_unicode_char`) are deliberately separate so that typing into a chat
//! field and holding a movement key can coexist without double-triggering:
//! a consumer interested in text ignores the raw path and vice versa.
//!
//! # Testability
//!
//! [`RecordingSink`] is a real module (not `cfg(test)`) so that integration
//! tests and the headless harness can observe the event stream without a
//! live application behind the boundary.

use vwinput_core::{Key, Mask, MouseButton};

/// Callback interface consumed by the application.
///
/// The boolean returns report whether the event was handled; the keyboard
/// state machine passes them through to its own callers unchanged. Mouse
/// methods have no-op defaults because keyboard-only consumers are common.
pub trait InputSink {
    /// A canonical key transitioned to held. `repeated` is set when the
    /// native layer delivered an auto-repeat down for an already-held key.
    fn on_translated_key_down(&mut self, key: Key, mask: Mask, repeated: bool) -> bool;

    /// A canonical key was released.
    fn on_translated_key_up(&mut self, key: Key, mask: Mask) -> bool;

    /// Once-per-frame scan notification for every key with live state.
    fn on_scan_key(&mut self, key: Key, went_down: bool, went_up: bool, level: bool);

    /// Printable-character input, distinct from the raw key path.
    fn on_unicode_char(&mut self, ch: char, mask: Mask) -> bool;

    /// A mouse button was pressed or released.
    fn on_mouse_button(&mut self, _button: MouseButton, _mask: Mask, _down: bool) -> bool {
        false
    }

    /// The cursor moved to window coordinates `(x, y)`.
    fn on_mouse_move(&mut self, _x: i32, _y: i32, _mask: Mask) {}

    /// The scroll wheel moved by `clicks` notches (positive = away).
    fn on_mouse_scroll(&mut self, _clicks: i32) {}
}

/// One recorded event, in arrival order.
#[derive(Debug, Clone, PartialEq)]
pub enum SinkEvent {
    KeyDown { key: Key, mask: Mask, repeated: bool },
    KeyUp { key: Key, mask: Mask },
    Scan { key: Key, went_down: bool, went_up: bool, level: bool },
    Char { ch: char, mask: Mask },
    MouseButton { button: MouseButton, mask: Mask, down: bool },
    MouseMove { x: i32, y: i32 },
    MouseScroll { clicks: i32 },
}

/// Sink that records every event and reports them all as handled.
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub events: Vec<SinkEvent>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded scan events only, preserving order.
    pub fn scans(&self) -> Vec<&SinkEvent> {
        self.events
            .iter()
            .filter(|e| matches!(e, SinkEvent::Scan { .. }))
            .collect()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl InputSink for RecordingSink {
    fn on_translated_key_down(&mut self, key: Key, mask: Mask, repeated: bool) -> bool {
        self.events.push(SinkEvent::KeyDown { key, mask, repeated });
        true
    }

    fn on_translated_key_up(&mut self, key: Key, mask: Mask) -> bool {
        self.events.push(SinkEvent::KeyUp { key, mask });
        true
    }

    fn on_scan_key(&mut self, key: Key, went_down: bool, went_up: bool, level: bool) {
        self.events.push(SinkEvent::Scan {
            key,
            went_down,
            went_up,
            level,
        });
    }

    fn on_unicode_char(&mut self, ch: char, mask: Mask) -> bool {
        self.events.push(SinkEvent::Char { ch, mask });
        true
    }

    fn on_mouse_button(&mut self, button: MouseButton, mask: Mask, down: bool) -> bool {
        self.events.push(SinkEvent::MouseButton { button, mask, down });
        true
    }

    fn on_mouse_move(&mut self, x: i32, y: i32, _mask: Mask) {
        self.events.push(SinkEvent::MouseMove { x, y });
    }

    fn on_mouse_scroll(&mut self, clicks: i32) {
        self.events.push(SinkEvent::MouseScroll { clicks });
    }
}
