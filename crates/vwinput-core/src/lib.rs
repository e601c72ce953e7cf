//! # vwinput-core
//!
//! Shared data layer for the vwinput subsystem: the canonical key model,
//! modifier masks, chord value types, string codecs, and the per-platform
//! native key translation tables.
//!
//! This crate is pure data plus lookups. It has zero dependencies on OS
//! APIs, window systems, or the frame loop; everything in it can be built
//! and tested on any platform.
//!
//! - **`keys`** – The canonical [`Key`] enumeration (one value per logical
//!   keyboard key, independent of OS key codes), the [`Mask`] modifier
//!   bitset, [`MouseButton`], and the locale-independent string codecs used
//!   for persistence and accelerator labels.
//!
//! - **`chord`** – [`KeyChord`] (one mouse button + key + modifier mask
//!   combination) and [`KeyBind`] (up to two alternative chords per logical
//!   command), with the matching logic the dispatch layer runs on every
//!   translated key event.
//!
//! - **`translate`** – [`KeyTranslator`]: bidirectional maps between a
//!   platform's native 16-bit key codes and canonical [`Key`] values, built
//!   from one static table per supported platform (Windows virtual keys,
//!   macOS key codes, SDL keysyms).

pub mod chord;
pub mod keys;
pub mod platform;
pub mod translate;

pub use chord::{ChordRecord, KeyBind, KeyChord};
pub use keys::key::Key;
pub use keys::mask::Mask;
pub use keys::mouse::MouseButton;
pub use platform::Platform;
pub use translate::KeyTranslator;
