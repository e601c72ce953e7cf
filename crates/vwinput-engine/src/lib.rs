//! vwinput-engine library entry point.
//!
//! Re-exports all public modules so that integration tests in `tests/`
//! and the binary entry point in `main.rs` share the same module tree.

pub mod bindings;
pub mod dispatch;
pub mod inject;
pub mod keyboard;
pub mod sink;

pub use bindings::{ConflictHandler, Control, Mode};
pub use dispatch::{BindingDispatcher, CommandSink};
pub use inject::{InjectCommand, InjectError};
pub use keyboard::Keyboard;
pub use sink::{InputSink, RecordingSink, SinkEvent};
