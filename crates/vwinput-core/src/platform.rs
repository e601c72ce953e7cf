//! Target platform identifier.
//!
//! Selects which native translation table is used and which accelerator
//! label flavour is rendered. `Headless` is the no-native-protocol variant
//! used by automated test harnesses; its translation table is empty and all
//! input arrives pre-translated through the scripted-injection surface.

use serde::{Deserialize, Serialize};

/// Platform whose native input protocol feeds the subsystem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Platform {
    /// Windows virtual-key codes.
    Windows,
    /// macOS (Carbon/Cocoa) key codes.
    MacOs,
    /// SDL keysyms (Linux).
    Linux,
    /// No native protocol; input is injected pre-translated.
    Headless,
}

impl Platform {
    /// Returns `true` when the Command key doubles as Control for keyboard
    /// accelerators (but not for mouse-click semantics).
    pub fn command_is_control(self) -> bool {
        matches!(self, Platform::MacOs)
    }
}
