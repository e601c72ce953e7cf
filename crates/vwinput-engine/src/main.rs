//! Headless input-engine harness.
//!
//! Drives the normalization pipeline from scripted-injection commands read
//! from stdin, one JSON command per line (see [`vwinput_engine::inject`]).
//! A blank line ends the current frame and runs the per-frame scan, so a
//! script interleaves events and frames:
//!
//! ```text
//! {"op": "keyDown", "keysym": "W"}
//!
//! {"op": "keyUp", "keysym": "W"}
//!
//! ```
//!
//! Command activations and deactivations are reported through structured
//! logging. The mode whose bindings are loaded defaults to `third_person`
//! and can be given as the first argument.

use std::io::BufRead;

use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use vwinput_core::KeyTranslator;
use vwinput_engine::{
    BindingDispatcher, CommandSink, ConflictHandler, Control, InjectCommand, Keyboard, Mode,
};

/// Reports command activity through the log.
struct LoggingCommands;

impl CommandSink for LoggingCommands {
    fn on_control_activated(&mut self, control: Control, repeated: bool) {
        info!(control = control.name(), repeated, "activated");
    }

    fn on_control_deactivated(&mut self, control: Control) {
        info!(control = control.name(), "deactivated");
    }
}

fn main() -> anyhow::Result<()> {
    // Initialise structured logging.  Level is overridden by `RUST_LOG`.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mode = match std::env::args().nth(1) {
        Some(name) => Mode::from_name(&name)
            .ok_or_else(|| anyhow::anyhow!("unknown mode {name:?}"))?,
        None => Mode::ThirdPerson,
    };
    info!(mode = mode.name(), "input engine starting");

    let handler = ConflictHandler::load(mode);
    let mut keyboard = Keyboard::new(KeyTranslator::headless());
    let mut dispatcher = BindingDispatcher::new(handler, LoggingCommands);

    let stdin = std::io::stdin();
    for (lineno, line) in stdin.lock().lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            keyboard.scan_keyboard(&mut dispatcher);
            continue;
        }

        let command = match InjectCommand::decode(trimmed) {
            Ok(command) => command,
            Err(e) => {
                error!(line = lineno + 1, error = %e, "skipping undecodable command");
                continue;
            }
        };
        match command.apply(&mut keyboard, &mut dispatcher) {
            Ok(true) => {}
            Ok(false) => warn!(line = lineno + 1, "command was not handled"),
            Err(e) => error!(line = lineno + 1, error = %e, "command failed"),
        }
    }

    // End-of-script frame, so trailing edges are still scanned out.
    keyboard.scan_keyboard(&mut dispatcher);
    info!("input script finished");
    Ok(())
}
