//! Canonical key model: keys, modifier masks, mouse buttons, string codecs.
//!
//! The canonical representation is a fixed 256-value enumeration ([`key::Key`])
//! that is identical on every platform. Native key codes are translated to
//! canonical keys at the input boundary (see [`crate::translate`]); everything
//! above that boundary — per-frame state, bindings, persistence — speaks only
//! canonical keys.

pub mod key;
pub mod mask;
pub mod mouse;
pub mod names;

pub use key::Key;
pub use mask::Mask;
pub use mouse::MouseButton;
