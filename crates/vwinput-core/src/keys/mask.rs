//! Modifier mask bitset.
//!
//! A [`Mask`] is an OR-able set of modifier bits attached to every key and
//! mouse event. `MAC_CONTROL` is distinct from `CONTROL` because macOS
//! Command doubles as Control for keyboard accelerators but not for mouse
//! clicks; callers that do not care about the distinction use
//! [`Mask::normalized`].
//!
//! Two string codecs live here:
//!
//! - The *combo name* (`"CTL_SHIFT"`, `"ALT"`, …) is the fixed eight-value
//!   vocabulary used in persisted binding files.
//! - The *bit name* (`"SHIFT"`, `"CTL"`, `"ALT"`, `"MAC_CONTROL"`) is what
//!   the scripted-injection surface accepts, singly or as an array that is
//!   OR-ed together; the combo names are accepted there too. Unknown names
//!   contribute no bits and log a warning.

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Bitset of held modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Mask(pub u8);

impl Mask {
    pub const NONE: Mask = Mask(0);
    pub const SHIFT: Mask = Mask(1 << 0);
    pub const CONTROL: Mask = Mask(1 << 1);
    pub const ALT: Mask = Mask(1 << 2);
    /// macOS Command held; equivalent to CONTROL for keyboard accelerators only.
    pub const MAC_CONTROL: Mask = Mask(1 << 3);
    /// Extended-key flag some platforms attach to numpad/right-side keys.
    pub const EXTENDED: Mask = Mask(1 << 4);

    /// Returns `true` if every bit of `other` is set in `self`.
    pub fn contains(self, other: Mask) -> bool {
        self.0 & other.0 == other.0
    }

    /// Returns `true` if no bits are set.
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Folds `MAC_CONTROL` into `CONTROL` and drops the `EXTENDED` flag,
    /// yielding the three-bit form that chord matching and persistence use.
    pub fn normalized(self) -> Mask {
        let mut out = Mask(self.0 & (Self::SHIFT.0 | Self::CONTROL.0 | Self::ALT.0));
        if self.contains(Self::MAC_CONTROL) {
            out |= Self::CONTROL;
        }
        out
    }

    /// Parses a single modifier name used by the injection surface.
    ///
    /// Accepts both the bit vocabulary (`"SHIFT"`, `"CTL"`/`"CONTROL"`,
    /// `"ALT"`, `"MAC_CONTROL"`) and the persisted combo names
    /// (`"CTL_SHIFT"`, …), so scripts can paste a mask straight out of a
    /// binding file. Returns [`Mask::NONE`] and logs a warning for
    /// unknown names.
    pub fn from_bit_name(name: &str) -> Mask {
        match name {
            "SHIFT" => Self::SHIFT,
            "CTL" | "CONTROL" => Self::CONTROL,
            "ALT" => Self::ALT,
            "MAC_CONTROL" => Self::MAC_CONTROL,
            "NONE" => Self::NONE,
            "CTL_SHIFT" => Self::CONTROL | Self::SHIFT,
            "ALT_SHIFT" => Self::ALT | Self::SHIFT,
            "CTL_ALT" => Self::CONTROL | Self::ALT,
            "CTL_ALT_SHIFT" => Self::CONTROL | Self::ALT | Self::SHIFT,
            _ => {
                warn!("unknown modifier mask name {name:?}, treating as NONE");
                Self::NONE
            }
        }
    }

    /// Renders the normalized mask as its fixed combo name.
    pub fn combo_name(self) -> &'static str {
        let n = self.normalized();
        let shift = n.contains(Self::SHIFT);
        let ctl = n.contains(Self::CONTROL);
        let alt = n.contains(Self::ALT);
        match (ctl, alt, shift) {
            (false, false, false) => "NONE",
            (false, false, true) => "SHIFT",
            (true, false, false) => "CTL",
            (false, true, false) => "ALT",
            (true, false, true) => "CTL_SHIFT",
            (false, true, true) => "ALT_SHIFT",
            (true, true, false) => "CTL_ALT",
            (true, true, true) => "CTL_ALT_SHIFT",
        }
    }

    /// Parses a persisted combo name back into a mask.
    ///
    /// Unknown names degrade to [`Mask::NONE`] with a warning, matching the
    /// lookup-miss policy everywhere else in the subsystem.
    pub fn from_combo_name(name: &str) -> Mask {
        match name {
            "NONE" => Self::NONE,
            "SHIFT" => Self::SHIFT,
            "CTL" => Self::CONTROL,
            "ALT" => Self::ALT,
            "CTL_SHIFT" => Self::CONTROL | Self::SHIFT,
            "ALT_SHIFT" => Self::ALT | Self::SHIFT,
            "CTL_ALT" => Self::CONTROL | Self::ALT,
            "CTL_ALT_SHIFT" => Self::CONTROL | Self::ALT | Self::SHIFT,
            _ => {
                warn!("unknown modifier combo {name:?}, treating as NONE");
                Self::NONE
            }
        }
    }
}

impl std::ops::BitOr for Mask {
    type Output = Mask;

    fn bitor(self, rhs: Mask) -> Mask {
        Mask(self.0 | rhs.0)
    }
}

impl std::ops::BitOrAssign for Mask {
    fn bitor_assign(&mut self, rhs: Mask) {
        self.0 |= rhs.0;
    }
}
