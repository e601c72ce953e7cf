//! Binding registry and conflict resolution for one active mode.
//!
//! [`ConflictHandler`] owns two maps for the mode it was loaded for: the
//! *current* bindings (defaults overlaid with any user overrides) and the
//! pristine *defaults*, kept so individual controls can be reset without a
//! reload. It holds no reference to frame state.
//!
//! Conflict checking is intentionally not enforced inside
//! [`ConflictHandler::register_control`]. The rebinding UI is expected to
//! call [`ConflictHandler::conflicts_with`] first and warn the user when
//! the candidate chord already triggers another command; the handler itself
//! stays side-effect-free with respect to other controls' bindings.

use std::collections::HashMap;
use std::path::Path;

use tracing::warn;
use vwinput_core::{ChordRecord, Key, KeyBind, KeyChord, Mask, MouseButton};

use super::settings::{
    self, BindingRecord, BindingsDocument, SettingsError,
};
use super::{Control, Mode};

/// Factory bindings compiled into the binary.
const DEFAULT_BINDINGS: &str = include_str!("../../assets/default_bindings.toml");

/// The binding registry for one interaction mode.
pub struct ConflictHandler {
    mode: Mode,
    current: HashMap<Control, KeyBind>,
    defaults: HashMap<Control, KeyBind>,
    dirty: bool,
}

impl ConflictHandler {
    /// Loads the handler for `mode`: embedded defaults overlaid with the
    /// user binding file, when one exists.
    ///
    /// An absent, unreadable, or malformed user file is treated as "no
    /// overrides": logged, then the factory defaults load unchanged. The
    /// binding path must never take the application down with it.
    pub fn load(mode: Mode) -> Self {
        let user = settings::user_bindings_path()
            .and_then(|path| settings::load_document(&path))
            .unwrap_or_else(|e| {
                warn!(error = %e, "user binding overrides unusable, loading defaults");
                None
            });
        Self::from_documents(mode, user.as_ref())
    }

    /// Builds the handler from explicit documents; the loading seam used
    /// by tests and by [`ConflictHandler::load`].
    pub fn from_documents(mode: Mode, user: Option<&BindingsDocument>) -> Self {
        let defaults_doc = BindingsDocument::parse(DEFAULT_BINDINGS)
            .unwrap_or_else(|e| {
                warn!(error = %e, "embedded default bindings are malformed");
                BindingsDocument::default()
            });
        let defaults = bind_map(&defaults_doc, mode);

        // Controls the user section mentions replace their default bind
        // wholesale; everything else keeps the factory chords.
        let mut current = defaults.clone();
        if let Some(user_doc) = user {
            for (control, bind) in bind_map(user_doc, mode) {
                current.insert(control, bind);
            }
        }

        Self {
            mode,
            current,
            defaults,
            dirty: false,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Current binding for `control`; the empty bind when nothing is
    /// assigned.
    pub fn bind(&self, control: Control) -> KeyBind {
        self.current.get(&control).copied().unwrap_or_default()
    }

    // ── Queries ──────────────────────────────────────────────────────────

    /// Whether `control` would respond to `(mouse, key, mask)` under its
    /// current binding.
    pub fn can_handle_control(
        &self,
        control: Control,
        mouse: MouseButton,
        key: Key,
        mask: Mask,
    ) -> bool {
        self.bind(control).can_handle(mouse, key, mask)
    }

    /// Whether the user may rebind `control`. Reserved controls exist only
    /// so their chords participate in conflict detection.
    pub fn can_assign_control(&self, control: Control) -> bool {
        !control.is_reserved()
    }

    /// Every control in this mode whose current binding would respond to
    /// the candidate chord, in declaration order. More than one entry means
    /// committing the chord would create an ambiguity the user should be
    /// warned about.
    pub fn conflicts_with(&self, mouse: MouseButton, key: Key, mask: Mask) -> Vec<Control> {
        self.mode
            .controls()
            .filter(|&c| self.can_handle_control(c, mouse, key, mask))
            .collect()
    }

    /// Whether the current bindings differ from the last loaded/saved
    /// state.
    pub fn has_unsaved_changes(&self) -> bool {
        self.dirty
    }

    // ── Mutation ─────────────────────────────────────────────────────────

    /// Writes one chord slot of `control`.
    ///
    /// Refused (logged, no state change, `false`) for reserved controls,
    /// controls outside this handler's mode, and out-of-range slots.
    /// Registering the empty chord clears the slot.
    pub fn register_control(
        &mut self,
        control: Control,
        slot: usize,
        mouse: MouseButton,
        key: Key,
        mask: Mask,
        ignore_mask: bool,
    ) -> bool {
        if !self.can_assign_control(control) {
            warn!(control = control.name(), "refusing to rebind reserved control");
            return false;
        }
        if control.mode() != self.mode {
            warn!(
                control = control.name(),
                mode = self.mode.name(),
                "control does not belong to the loaded mode"
            );
            return false;
        }
        if slot >= vwinput_core::chord::BIND_SLOTS {
            warn!(control = control.name(), slot, "chord slot out of range");
            return false;
        }
        let chord = if ignore_mask {
            KeyChord::ignoring_mask(mouse, key)
        } else {
            KeyChord::new(mouse, key, mask)
        };
        let bind = self.current.entry(control).or_default();
        if bind.chord(slot) == Some(chord) {
            return true;
        }
        bind.replace_chord(slot, chord);
        self.dirty = true;
        true
    }

    /// Restores `control` to its factory binding, leaving every other
    /// control untouched.
    pub fn reset_to_default(&mut self, control: Control) {
        let default = self.defaults.get(&control).copied().unwrap_or_default();
        let previous = self.current.insert(control, default);
        if previous != Some(default) {
            self.dirty = true;
        }
    }

    /// Restores a single chord slot of `control` from the factory binding,
    /// leaving the other slot as the user set it.
    pub fn reset_slot_to_default(&mut self, control: Control, slot: usize) {
        if slot >= vwinput_core::chord::BIND_SLOTS {
            warn!(control = control.name(), slot, "chord slot out of range");
            return;
        }
        let default_chord = self
            .defaults
            .get(&control)
            .and_then(|bind| bind.chord(slot))
            .unwrap_or_else(KeyChord::empty);
        let bind = self.current.entry(control).or_default();
        if bind.chord(slot) != Some(default_chord) {
            bind.replace_chord(slot, default_chord);
            self.dirty = true;
        }
    }

    /// Restores every control in the mode to its factory binding.
    pub fn reset_to_defaults(&mut self) {
        if self.current != self.defaults {
            self.dirty = true;
        }
        self.current = self.defaults.clone();
    }

    // ── Persistence ──────────────────────────────────────────────────────

    /// Persists the current bindings to the user file in the platform
    /// config directory.
    pub fn save(&mut self) -> Result<(), SettingsError> {
        let path = settings::user_bindings_path()?;
        self.save_to_path(&path)
    }

    /// Read-modify-write: replaces this mode's section of the document at
    /// `path` and leaves every other mode's section as found on disk.
    pub fn save_to_path(&mut self, path: &Path) -> Result<(), SettingsError> {
        let mut doc = settings::load_document(path)?.unwrap_or_default();
        self.write_into(&mut doc);
        settings::save_document(path, &doc)?;
        self.dirty = false;
        Ok(())
    }

    /// Replaces this mode's section of `doc` with the current bindings.
    pub fn write_into(&self, doc: &mut BindingsDocument) {
        match self.mode {
            Mode::General => {
                doc.general.clear();
                for control in self.mode.controls() {
                    let bind = self.bind(control);
                    let mut chords = bind.chords();
                    // General commands are single-chord by construction;
                    // extra slots would be silently dropped on reload.
                    let chord = chords.next().unwrap_or_else(KeyChord::empty);
                    doc.general
                        .insert(control.name().to_string(), ChordRecord::from(chord));
                }
            }
            mode => {
                let records = doc
                    .records_mut(mode)
                    .unwrap_or_else(|| unreachable!("list-shaped mode"));
                records.clear();
                for control in mode.controls() {
                    let bind = self.bind(control);
                    if bind.is_empty() {
                        // One empty record pins the unbind; absence would
                        // fall back to the default at next load.
                        records.push(BindingRecord {
                            command: control.name().to_string(),
                            chord: ChordRecord::from(KeyChord::empty()),
                        });
                        continue;
                    }
                    for chord in bind.chords() {
                        records.push(BindingRecord {
                            command: control.name().to_string(),
                            chord: ChordRecord::from(chord),
                        });
                    }
                }
            }
        }
    }
}

/// Collects the bindings a document assigns to `mode`'s controls.
///
/// Unknown command names and controls belonging to another mode are logged
/// and skipped; a record with an empty chord yields (or keeps) an empty
/// bind, which is how a deliberate unbind is persisted.
fn bind_map(doc: &BindingsDocument, mode: Mode) -> HashMap<Control, KeyBind> {
    let mut map: HashMap<Control, KeyBind> = HashMap::new();
    let mut insert = |name: &str, record: &ChordRecord| {
        let Some(control) = Control::from_name(name) else {
            warn!(command = name, "unknown command in binding document");
            return;
        };
        if control.mode() != mode {
            warn!(
                command = name,
                section = mode.name(),
                "command listed in the wrong mode section"
            );
            return;
        }
        let chord = KeyChord::from(record);
        let bind = map.entry(control).or_default();
        if !chord.is_empty() && !bind.add_chord(chord) {
            warn!(command = name, "more chords than binding slots; extra chord dropped");
        }
    };

    match mode {
        Mode::General => {
            for (name, record) in &doc.general {
                insert(name, record);
            }
        }
        mode => {
            if let Some(records) = doc.records(mode) {
                for record in records {
                    insert(&record.command, &record.chord);
                }
            }
        }
    }
    map
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn handler(mode: Mode) -> ConflictHandler {
        ConflictHandler::from_documents(mode, None)
    }

    #[test]
    fn test_defaults_load_gives_factory_chord_for_move_forward() {
        // Arrange / Act
        let handler = handler(Mode::ThirdPerson);

        // Assert – W and ArrowUp, per the embedded defaults
        assert!(handler.can_handle_control(
            Control::MoveForward,
            MouseButton::None,
            Key::KeyW,
            Mask::NONE
        ));
        assert!(handler.can_handle_control(
            Control::MoveForward,
            MouseButton::None,
            Key::ArrowUp,
            Mask::NONE
        ));
        assert!(!handler.has_unsaved_changes());
    }

    #[test]
    fn test_user_document_overrides_only_the_controls_it_mentions() {
        // Arrange: user rebinds toggle_fly to F, says nothing about move_forward
        let user = BindingsDocument::parse(
            r#"
[[third_person]]
command = "toggle_fly"
key = "F"
"#,
        )
        .unwrap();

        // Act
        let handler = ConflictHandler::from_documents(Mode::ThirdPerson, Some(&user));

        // Assert
        assert!(handler.can_handle_control(
            Control::ToggleFly,
            MouseButton::None,
            Key::KeyF,
            Mask::NONE
        ));
        assert!(!handler.can_handle_control(
            Control::ToggleFly,
            MouseButton::None,
            Key::Home,
            Mask::NONE
        ));
        // Unmentioned control keeps its default.
        assert!(handler.can_handle_control(
            Control::MoveForward,
            MouseButton::None,
            Key::KeyW,
            Mask::NONE
        ));
    }

    #[test]
    fn test_register_then_can_handle_respects_exact_mask() {
        // Arrange
        let mut handler = handler(Mode::ThirdPerson);

        // Act
        let ok = handler.register_control(
            Control::MoveForward,
            0,
            MouseButton::None,
            Key::KeyW,
            Mask::NONE,
            false,
        );

        // Assert
        assert!(ok);
        assert!(handler.can_handle_control(
            Control::MoveForward,
            MouseButton::None,
            Key::KeyW,
            Mask::NONE
        ));
        assert!(!handler.can_handle_control(
            Control::MoveForward,
            MouseButton::None,
            Key::KeyW,
            Mask::SHIFT
        ));
    }

    #[test]
    fn test_register_with_ignore_mask_matches_any_modifiers() {
        let mut handler = handler(Mode::ThirdPerson);

        handler.register_control(
            Control::Jump,
            0,
            MouseButton::None,
            Key::Space,
            Mask::NONE,
            true,
        );

        assert!(handler.can_handle_control(
            Control::Jump,
            MouseButton::None,
            Key::Space,
            Mask::SHIFT | Mask::CONTROL
        ));
    }

    #[test]
    fn test_register_reserved_control_is_refused() {
        // Arrange
        let mut handler = handler(Mode::General);
        assert!(!handler.can_assign_control(Control::ContextMenuClick));

        // Act
        let ok = handler.register_control(
            Control::ContextMenuClick,
            0,
            MouseButton::Middle,
            Key::None,
            Mask::NONE,
            false,
        );

        // Assert – refused, and the reserved chord still matches
        assert!(!ok);
        assert!(!handler.has_unsaved_changes());
        assert!(handler.can_handle_control(
            Control::ContextMenuClick,
            MouseButton::Right,
            Key::None,
            Mask::NONE
        ));
    }

    #[test]
    fn test_register_control_from_another_mode_is_refused() {
        let mut handler = handler(Mode::Sitting);

        let ok = handler.register_control(
            Control::MoveForward,
            0,
            MouseButton::None,
            Key::KeyW,
            Mask::NONE,
            false,
        );

        assert!(!ok);
        assert!(!handler.has_unsaved_changes());
    }

    #[test]
    fn test_reserved_chord_shows_up_as_a_conflict() {
        // A user trying to bind plain RMB to anything must see the
        // reserved context-menu placeholder in the conflict list.
        let handler = handler(Mode::General);

        let conflicts = handler.conflicts_with(MouseButton::Right, Key::None, Mask::NONE);

        assert_eq!(conflicts, vec![Control::ContextMenuClick]);
    }

    #[test]
    fn test_conflicts_with_lists_every_matching_control() {
        // Arrange: bind two commands to the same chord; the handler does
        // not enforce uniqueness, the query reports the ambiguity.
        let mut handler = handler(Mode::ThirdPerson);
        handler.register_control(
            Control::ToggleFly,
            0,
            MouseButton::None,
            Key::KeyF,
            Mask::NONE,
            false,
        );
        handler.register_control(
            Control::ToggleRun,
            0,
            MouseButton::None,
            Key::KeyF,
            Mask::NONE,
            false,
        );

        // Act
        let conflicts = handler.conflicts_with(MouseButton::None, Key::KeyF, Mask::NONE);

        // Assert
        assert_eq!(conflicts, vec![Control::ToggleRun, Control::ToggleFly]);
    }

    #[test]
    #[cfg(target_os = "linux")]
    fn test_malformed_user_file_falls_back_to_defaults() {
        // Arrange: a config dir whose binding file is not valid TOML
        let dir = std::env::temp_dir().join(format!(
            "vwinput_badfile_{}_{:?}",
            std::process::id(),
            std::thread::current().id()
        ));
        std::fs::create_dir_all(dir.join("vwinput")).unwrap();
        std::fs::write(dir.join("vwinput/key_bindings.toml"), "[[[ not valid toml").unwrap();
        let previous = std::env::var_os("XDG_CONFIG_HOME");
        std::env::set_var("XDG_CONFIG_HOME", &dir);

        // Act
        let handler = ConflictHandler::load(Mode::ThirdPerson);

        // Restore the environment before asserting.
        match previous {
            Some(value) => std::env::set_var("XDG_CONFIG_HOME", value),
            None => std::env::remove_var("XDG_CONFIG_HOME"),
        }
        std::fs::remove_dir_all(&dir).ok();

        // Assert – factory defaults, clean state, no error
        assert!(handler.can_handle_control(
            Control::MoveForward,
            MouseButton::None,
            Key::KeyW,
            Mask::NONE
        ));
        assert!(!handler.has_unsaved_changes());
    }

    #[test]
    fn test_reset_slot_restores_one_chord_and_keeps_the_other() {
        // Arrange: rebind both of move_forward's slots
        let mut handler = handler(Mode::ThirdPerson);
        let default_primary = handler.bind(Control::MoveForward).chord(0).unwrap();
        handler.register_control(
            Control::MoveForward,
            0,
            MouseButton::None,
            Key::KeyI,
            Mask::NONE,
            false,
        );
        handler.register_control(
            Control::MoveForward,
            1,
            MouseButton::None,
            Key::KeyK,
            Mask::NONE,
            false,
        );

        // Act
        handler.reset_slot_to_default(Control::MoveForward, 0);

        // Assert
        let bind = handler.bind(Control::MoveForward);
        assert_eq!(bind.chord(0), Some(default_primary));
        assert!(bind.can_handle_key(Key::KeyK, Mask::NONE), "slot 1 must keep the rebind");
        assert!(handler.has_unsaved_changes());
    }

    #[test]
    fn test_reset_slot_out_of_range_is_refused() {
        let mut handler = handler(Mode::ThirdPerson);
        let before = handler.bind(Control::MoveForward);

        handler.reset_slot_to_default(Control::MoveForward, 2);

        assert_eq!(handler.bind(Control::MoveForward), before);
        assert!(!handler.has_unsaved_changes());
    }

    #[test]
    fn test_reset_to_default_restores_one_control_only() {
        // Arrange
        let mut handler = handler(Mode::ThirdPerson);
        let default_fly = handler.bind(Control::ToggleFly);
        handler.register_control(
            Control::ToggleFly,
            0,
            MouseButton::None,
            Key::KeyF,
            Mask::NONE,
            false,
        );
        handler.register_control(
            Control::Jump,
            0,
            MouseButton::None,
            Key::KeyJ,
            Mask::NONE,
            false,
        );
        let rebound_jump = handler.bind(Control::Jump);

        // Act
        handler.reset_to_default(Control::ToggleFly);

        // Assert
        assert_eq!(handler.bind(Control::ToggleFly), default_fly);
        assert_eq!(handler.bind(Control::Jump), rebound_jump);
    }

    #[test]
    fn test_reset_to_defaults_clears_unsaved_changes_marker_semantics() {
        let mut handler = handler(Mode::Edit);
        assert!(!handler.has_unsaved_changes());

        handler.register_control(
            Control::EditCameraZoomIn,
            0,
            MouseButton::None,
            Key::KeyZ,
            Mask::NONE,
            false,
        );
        assert!(handler.has_unsaved_changes());

        // Resetting is itself a change relative to the last save.
        handler.reset_to_defaults();
        assert!(handler.has_unsaved_changes());
        assert_eq!(
            handler.bind(Control::EditCameraZoomIn),
            ConflictHandler::from_documents(Mode::Edit, None).bind(Control::EditCameraZoomIn)
        );
    }

    #[test]
    fn test_registering_the_already_present_chord_stays_clean() {
        let mut handler = handler(Mode::ThirdPerson);
        let existing = handler.bind(Control::MoveForward).chord(0).unwrap();

        let ok = handler.register_control(
            Control::MoveForward,
            0,
            existing.mouse,
            existing.key,
            existing.mask,
            existing.ignore_mask,
        );

        assert!(ok);
        assert!(!handler.has_unsaved_changes());
    }

    #[test]
    fn test_save_preserves_other_mode_sections() {
        // Arrange: a user file with a sitting override on disk
        let dir = std::env::temp_dir().join(format!(
            "vwinput_conflict_{}_{:?}",
            std::process::id(),
            std::thread::current().id()
        ));
        let path = dir.join("key_bindings.toml");
        let mut on_disk = BindingsDocument::default();
        on_disk.sitting.push(BindingRecord {
            command: "stand_up".to_string(),
            chord: ChordRecord {
                key: Some("Q".to_string()),
                mask: "NONE".to_string(),
                mouse: None,
                ignore: false,
            },
        });
        settings::save_document(&path, &on_disk).unwrap();

        let mut handler = handler(Mode::ThirdPerson);
        handler.register_control(
            Control::ToggleFly,
            0,
            MouseButton::None,
            Key::KeyF,
            Mask::NONE,
            false,
        );

        // Act
        handler.save_to_path(&path).unwrap();

        // Assert
        assert!(!handler.has_unsaved_changes());
        let saved = settings::load_document(&path).unwrap().unwrap();
        assert_eq!(saved.sitting, on_disk.sitting);
        assert!(saved
            .third_person
            .iter()
            .any(|r| r.command == "toggle_fly" && r.chord.key.as_deref() == Some("F")));

        // Round trip: reloading from the saved file restores the rebind.
        let reloaded = ConflictHandler::from_documents(Mode::ThirdPerson, Some(&saved));
        assert!(reloaded.can_handle_control(
            Control::ToggleFly,
            MouseButton::None,
            Key::KeyF,
            Mask::NONE
        ));

        // Cleanup
        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_saved_unbind_survives_reload() {
        // Arrange: clear both of toggle_fly's slots
        let mut handler = handler(Mode::ThirdPerson);
        handler.register_control(
            Control::ToggleFly,
            0,
            MouseButton::None,
            Key::None,
            Mask::NONE,
            false,
        );
        handler.register_control(
            Control::ToggleFly,
            1,
            MouseButton::None,
            Key::None,
            Mask::NONE,
            false,
        );
        assert!(handler.bind(Control::ToggleFly).is_empty());

        // Act
        let mut doc = BindingsDocument::default();
        handler.write_into(&mut doc);
        let reloaded = ConflictHandler::from_documents(Mode::ThirdPerson, Some(&doc));

        // Assert – the unbind is pinned, not silently restored to Home
        assert!(reloaded.bind(Control::ToggleFly).is_empty());
    }

    #[test]
    fn test_default_document_commands_all_resolve() {
        // Every command named in the embedded defaults must be a known
        // control listed in its own mode's section.
        let doc = BindingsDocument::parse(DEFAULT_BINDINGS).unwrap();
        for &mode in Mode::ALL {
            if let Some(records) = doc.records(mode) {
                for record in records {
                    let control = Control::from_name(&record.command)
                        .unwrap_or_else(|| panic!("unknown command {}", record.command));
                    assert_eq!(control.mode(), mode, "{} misfiled", record.command);
                }
            }
        }
        for name in doc.general.keys() {
            let control = Control::from_name(name)
                .unwrap_or_else(|| panic!("unknown command {name}"));
            assert_eq!(control.mode(), Mode::General, "{name} misfiled");
        }
    }

    #[test]
    fn test_every_mode_control_has_a_default_binding() {
        for &mode in Mode::ALL {
            let handler = ConflictHandler::from_documents(mode, None);
            for control in mode.controls() {
                assert!(
                    !handler.bind(control).is_empty(),
                    "{} has no factory binding",
                    control.name()
                );
            }
        }
    }
}
