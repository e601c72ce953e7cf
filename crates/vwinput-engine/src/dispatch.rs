//! Binding dispatch: turns translated input events into logical commands.
//!
//! [`BindingDispatcher`] sits on the dispatch boundary as an [`InputSink`].
//! For each key or mouse edge it asks the loaded mode's [`ConflictHandler`]
//! which controls the chord satisfies and forwards activations to a
//! [`CommandSink`]. It remembers which controls a press activated so the
//! matching release deactivates exactly those, even when the held modifiers
//! changed in between.

use std::collections::HashMap;

use vwinput_core::{Key, Mask, MouseButton};

use crate::bindings::{ConflictHandler, Control};
use crate::sink::InputSink;

/// Consumer of logical command activations.
pub trait CommandSink {
    /// A control's chord was satisfied. `repeated` is true for auto-repeat
    /// of a still-held chord.
    fn on_control_activated(&mut self, control: Control, repeated: bool);

    /// A previously activated control's chord was released.
    fn on_control_deactivated(&mut self, control: Control);
}

/// Routes translated input through one mode's bindings.
pub struct BindingDispatcher<S: CommandSink> {
    handler: ConflictHandler,
    commands: S,
    /// Controls activated by each currently held key.
    active_keys: HashMap<Key, Vec<Control>>,
    /// Controls activated by each currently held mouse button.
    active_buttons: HashMap<MouseButton, Vec<Control>>,
}

impl<S: CommandSink> BindingDispatcher<S> {
    pub fn new(handler: ConflictHandler, commands: S) -> Self {
        Self {
            handler,
            commands,
            active_keys: HashMap::new(),
            active_buttons: HashMap::new(),
        }
    }

    pub fn handler(&self) -> &ConflictHandler {
        &self.handler
    }

    pub fn handler_mut(&mut self) -> &mut ConflictHandler {
        &mut self.handler
    }

    pub fn commands(&self) -> &S {
        &self.commands
    }

    /// Drops any held-control tracking, pairing with
    /// `Keyboard::reset_keys` on focus loss. No deactivations are fired;
    /// the application-level reset supersedes them.
    pub fn reset(&mut self) {
        self.active_keys.clear();
        self.active_buttons.clear();
    }

    fn activate_key(&mut self, key: Key, mask: Mask, repeated: bool) -> bool {
        if repeated {
            if let Some(controls) = self.active_keys.get(&key).cloned() {
                for control in controls {
                    self.commands.on_control_activated(control, true);
                }
                return true;
            }
        }
        let matched = self.handler.conflicts_with(MouseButton::None, key, mask);
        if matched.is_empty() {
            return false;
        }
        for &control in &matched {
            self.commands.on_control_activated(control, false);
        }
        self.active_keys.insert(key, matched);
        true
    }

    fn activate_button(&mut self, button: MouseButton, mask: Mask) -> bool {
        let matched = self.handler.conflicts_with(button, Key::None, mask);
        if matched.is_empty() {
            return false;
        }
        for &control in &matched {
            self.commands.on_control_activated(control, false);
        }
        self.active_buttons.insert(button, matched);
        true
    }
}

impl<S: CommandSink> InputSink for BindingDispatcher<S> {
    fn on_translated_key_down(&mut self, key: Key, mask: Mask, repeated: bool) -> bool {
        self.activate_key(key, mask, repeated)
    }

    fn on_translated_key_up(&mut self, key: Key, _mask: Mask) -> bool {
        match self.active_keys.remove(&key) {
            Some(controls) => {
                for control in controls {
                    self.commands.on_control_deactivated(control);
                }
                true
            }
            None => false,
        }
    }

    // Edge deduplication already happened upstream; dispatch is driven by
    // the translated-event path, not the per-frame scan.
    fn on_scan_key(&mut self, _key: Key, _went_down: bool, _went_up: bool, _level: bool) {}

    /// Text input never triggers commands; keeping the two paths apart is
    /// what stops typing in chat from moving the avatar.
    fn on_unicode_char(&mut self, _ch: char, _mask: Mask) -> bool {
        false
    }

    fn on_mouse_button(&mut self, button: MouseButton, mask: Mask, down: bool) -> bool {
        if down {
            self.activate_button(button, mask)
        } else {
            match self.active_buttons.remove(&button) {
                Some(controls) => {
                    for control in controls {
                        self.commands.on_control_deactivated(control);
                    }
                    true
                }
                None => false,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bindings::Mode;

    /// Recorded command activity, in arrival order.
    #[derive(Debug, Clone, PartialEq)]
    enum CommandEvent {
        Activated(Control, bool),
        Deactivated(Control),
    }

    #[derive(Debug, Default)]
    struct RecordingCommands {
        events: Vec<CommandEvent>,
    }

    impl CommandSink for RecordingCommands {
        fn on_control_activated(&mut self, control: Control, repeated: bool) {
            self.events.push(CommandEvent::Activated(control, repeated));
        }

        fn on_control_deactivated(&mut self, control: Control) {
            self.events.push(CommandEvent::Deactivated(control));
        }
    }

    fn dispatcher(mode: Mode) -> BindingDispatcher<RecordingCommands> {
        BindingDispatcher::new(
            ConflictHandler::from_documents(mode, None),
            RecordingCommands::default(),
        )
    }

    #[test]
    fn test_bound_key_down_activates_the_control() {
        // Arrange
        let mut d = dispatcher(Mode::ThirdPerson);

        // Act
        let handled = d.on_translated_key_down(Key::KeyW, Mask::NONE, false);

        // Assert
        assert!(handled);
        assert_eq!(
            d.commands().events,
            vec![CommandEvent::Activated(Control::MoveForward, false)]
        );
    }

    #[test]
    fn test_unbound_key_is_not_handled() {
        let mut d = dispatcher(Mode::ThirdPerson);
        assert!(!d.on_translated_key_down(Key::KeyZ, Mask::NONE, false));
        assert!(d.commands().events.is_empty());
    }

    #[test]
    fn test_repeat_refires_active_controls_with_repeat_flag() {
        // Arrange
        let mut d = dispatcher(Mode::ThirdPerson);
        d.on_translated_key_down(Key::KeyW, Mask::NONE, false);

        // Act
        d.on_translated_key_down(Key::KeyW, Mask::NONE, true);

        // Assert
        assert_eq!(
            d.commands().events,
            vec![
                CommandEvent::Activated(Control::MoveForward, false),
                CommandEvent::Activated(Control::MoveForward, true),
            ]
        );
    }

    #[test]
    fn test_key_up_deactivates_what_the_down_activated() {
        // Arrange: run_forward is Ctrl+W; release arrives after Ctrl was
        // let go, so the release mask no longer matches the chord.
        let mut d = dispatcher(Mode::ThirdPerson);
        d.on_translated_key_down(Key::KeyW, Mask::CONTROL, false);

        // Act
        let handled = d.on_translated_key_up(Key::KeyW, Mask::NONE);

        // Assert
        assert!(handled);
        assert_eq!(
            d.commands().events,
            vec![
                CommandEvent::Activated(Control::RunForward, false),
                CommandEvent::Deactivated(Control::RunForward),
            ]
        );
    }

    #[test]
    fn test_key_up_without_active_control_is_not_handled() {
        let mut d = dispatcher(Mode::ThirdPerson);
        assert!(!d.on_translated_key_up(Key::KeyW, Mask::NONE));
    }

    #[test]
    fn test_ambiguous_chord_activates_every_matching_control() {
        // The handler does not enforce uniqueness; the dispatcher fires
        // all matches.
        let mut d = dispatcher(Mode::ThirdPerson);
        d.handler_mut().register_control(
            Control::ToggleRun,
            0,
            MouseButton::None,
            Key::KeyF,
            Mask::NONE,
            false,
        );
        d.handler_mut().register_control(
            Control::ToggleFly,
            0,
            MouseButton::None,
            Key::KeyF,
            Mask::NONE,
            false,
        );

        d.on_translated_key_down(Key::KeyF, Mask::NONE, false);

        assert_eq!(
            d.commands().events,
            vec![
                CommandEvent::Activated(Control::ToggleRun, false),
                CommandEvent::Activated(Control::ToggleFly, false),
            ]
        );
    }

    #[test]
    fn test_mouse_chord_activates_and_deactivates() {
        // toggle_sit is bound to Double LMB in the defaults.
        let mut d = dispatcher(Mode::ThirdPerson);

        assert!(d.on_mouse_button(MouseButton::DoubleLeft, Mask::NONE, true));
        assert!(d.on_mouse_button(MouseButton::DoubleLeft, Mask::NONE, false));
        assert_eq!(
            d.commands().events,
            vec![
                CommandEvent::Activated(Control::ToggleSit, false),
                CommandEvent::Deactivated(Control::ToggleSit),
            ]
        );
    }

    #[test]
    fn test_unicode_char_never_triggers_commands() {
        let mut d = dispatcher(Mode::ThirdPerson);
        assert!(!d.on_unicode_char('w', Mask::NONE));
        assert!(d.commands().events.is_empty());
    }

    #[test]
    fn test_reset_drops_tracking_without_firing_deactivations() {
        let mut d = dispatcher(Mode::ThirdPerson);
        d.on_translated_key_down(Key::KeyW, Mask::NONE, false);

        d.reset();

        assert!(!d.on_translated_key_up(Key::KeyW, Mask::NONE));
        assert_eq!(
            d.commands().events,
            vec![CommandEvent::Activated(Control::MoveForward, false)]
        );
    }
}
