//! Mouse button identifier.
//!
//! A chord may use a mouse button instead of, or alongside, a key; the
//! button axis is orthogonal to the key axis. `None` marks an unused axis.
//! The double-click variant is a first-class button so "Double LMB" can be
//! bound separately from a single left click.

use serde::{Deserialize, Serialize};

/// Mouse button component of a chord.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum MouseButton {
    /// No button; the chord is keyboard-only on this axis.
    #[default]
    None,
    Left,
    Middle,
    Right,
    Button4,
    Button5,
    DoubleLeft,
}

impl MouseButton {
    /// Returns the fixed name used in persisted binding files, or `None`
    /// for the unused-axis sentinel (the field is omitted entirely).
    pub fn name(self) -> Option<&'static str> {
        match self {
            MouseButton::None => None,
            MouseButton::Left => Some("LMB"),
            MouseButton::Middle => Some("MMB"),
            MouseButton::Right => Some("RMB"),
            MouseButton::Button4 => Some("MB4"),
            MouseButton::Button5 => Some("MB5"),
            MouseButton::DoubleLeft => Some("Double LMB"),
        }
    }

    /// Parses a persisted button name. Unknown names degrade to
    /// [`MouseButton::None`].
    pub fn from_name(name: &str) -> MouseButton {
        match name {
            "LMB" => MouseButton::Left,
            "MMB" => MouseButton::Middle,
            "RMB" => MouseButton::Right,
            "MB4" => MouseButton::Button4,
            "MB5" => MouseButton::Button5,
            "Double LMB" => MouseButton::DoubleLeft,
            _ => MouseButton::None,
        }
    }
}
