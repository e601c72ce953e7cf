//! Native key code translation.
//!
//! Each platform delivers its own 16-bit key codes (Windows virtual keys,
//! macOS key codes, SDL keysyms). A [`KeyTranslator`] maps those codes to
//! canonical [`Key`] values and back. The translator is pure data plus two
//! lookups — one instance is built from a static table per target platform
//! and owned for the life of the process by the platform adapter.
//!
//! # Lossy inverse
//!
//! The reverse map is built by inverting the forward table in insertion
//! order. When several native codes map to the same canonical key (left and
//! right Shift, for example), only the **last-inserted** forward mapping is
//! recoverable through [`KeyTranslator::inverse_translate`]. This is an
//! accepted, documented property: the platform tables list the generic or
//! preferred code last so the inverse returns it.
//!
//! # Num Lock
//!
//! Physical numpad keys double as navigation keys when Num Lock is off.
//! Each platform table therefore carries a parallel *numpad overlay* map
//! holding the navigation meaning of the physical numpad codes. The
//! platform adapter polls Num Lock state and calls
//! [`KeyTranslator::translate_numlock_off`] for numpad events when the lock
//! is off; the main map always carries the numpad-digit meaning.

pub mod macos;
pub mod sdl;
pub mod windows;

use std::collections::HashMap;

use crate::keys::key::Key;
use crate::platform::Platform;

/// Bidirectional native-code ↔ canonical-key map for one platform.
pub struct KeyTranslator {
    platform: Platform,
    forward: HashMap<u16, Key>,
    reverse: HashMap<Key, u16>,
    numpad_overlay: HashMap<u16, Key>,
}

impl KeyTranslator {
    /// Builds a translator from static tables.
    ///
    /// `main` entries are inserted in order; later duplicates of a canonical
    /// key overwrite the reverse mapping (see module docs).
    pub fn from_tables(
        platform: Platform,
        main: &[(u16, Key)],
        numpad_overlay: &[(u16, Key)],
    ) -> Self {
        let mut forward = HashMap::with_capacity(main.len());
        let mut reverse = HashMap::with_capacity(main.len());
        for &(native, key) in main {
            forward.insert(native, key);
            reverse.insert(key, native);
        }
        Self {
            platform,
            forward,
            reverse,
            numpad_overlay: numpad_overlay.iter().copied().collect(),
        }
    }

    /// Translator for Windows virtual-key codes.
    pub fn windows() -> Self {
        Self::from_tables(Platform::Windows, windows::MAIN_TABLE, windows::NUMPAD_OVERLAY)
    }

    /// Translator for macOS key codes.
    pub fn macos() -> Self {
        Self::from_tables(Platform::MacOs, macos::MAIN_TABLE, macos::NUMPAD_OVERLAY)
    }

    /// Translator for SDL keysyms (Linux).
    pub fn sdl() -> Self {
        Self::from_tables(Platform::Linux, sdl::MAIN_TABLE, sdl::NUMPAD_OVERLAY)
    }

    /// Translator with an empty table, for headless harnesses that inject
    /// canonical keys directly.
    pub fn headless() -> Self {
        Self::from_tables(Platform::Headless, &[], &[])
    }

    /// The platform this translator's tables describe.
    pub fn platform(&self) -> Platform {
        self.platform
    }

    /// Looks up the canonical key for a native code.
    ///
    /// Returns `None` for unknown codes; callers ignore the event rather
    /// than fail.
    pub fn translate(&self, native: u16) -> Option<Key> {
        self.forward.get(&native).copied()
    }

    /// Looks up a native code with Num Lock off: the numpad overlay is
    /// consulted first, then the main map.
    pub fn translate_numlock_off(&self, native: u16) -> Option<Key> {
        self.numpad_overlay
            .get(&native)
            .copied()
            .or_else(|| self.translate(native))
    }

    /// Recovers the native code for a canonical key.
    ///
    /// Lossy: when several native codes share a canonical key, only the
    /// last-inserted forward mapping is returned.
    pub fn inverse_translate(&self, key: Key) -> Option<u16> {
        self.reverse.get(&key).copied()
    }
}
