//! TOML persistence for per-mode key bindings.
//!
//! The binding document has one array-of-tables section per interaction
//! mode plus a `[general]` table for mode-independent commands:
//!
//! ```toml
//! version = 1
//!
//! [[third_person]]
//! command = "move_forward"
//! key = "W"
//! mask = "NONE"
//!
//! [[third_person]]
//! command = "toggle_fly"
//! key = "Home"
//! mask = "NONE"
//!
//! [general.toggle_voice]
//! key = "V"
//! mask = "CTL"
//! ```
//!
//! Two documents exist: the defaults shipped inside the binary
//! (`assets/default_bindings.toml`) and an optional user override file in
//! the platform config directory. Loading a mode takes the defaults and
//! overlays any user records on top; saving rewrites only the saved mode's
//! section and leaves the other sections of the user file untouched.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use vwinput_core::ChordRecord;

use super::Mode;

/// Error type for binding file operations.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// The platform config directory could not be determined.
    #[error("could not determine platform config directory")]
    NoPlatformConfigDir,

    /// A file system I/O error occurred.
    #[error("I/O error accessing bindings at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The TOML content could not be parsed.
    #[error("failed to parse bindings TOML: {0}")]
    Parse(#[from] toml::de::Error),

    /// The document could not be serialized to TOML.
    #[error("failed to serialize bindings: {0}")]
    Serialize(#[from] toml::ser::Error),
}

// ── Document schema ───────────────────────────────────────────────────────────

/// One persisted binding: a command name plus the chord assigned to it.
///
/// A command may appear more than once in a section, one record per bound
/// slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BindingRecord {
    pub command: String,
    #[serde(flatten)]
    pub chord: ChordRecord,
}

/// The whole on-disk binding document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BindingsDocument {
    /// Schema version, bumped on breaking changes.
    #[serde(default = "default_version")]
    pub version: u32,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub first_person: Vec<BindingRecord>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub third_person: Vec<BindingRecord>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub edit: Vec<BindingRecord>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub edit_avatar: Vec<BindingRecord>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sitting: Vec<BindingRecord>,
    /// Mode-independent commands, keyed directly by command name.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub general: BTreeMap<String, ChordRecord>,
}

fn default_version() -> u32 {
    1
}

impl Default for BindingsDocument {
    fn default() -> Self {
        Self {
            version: default_version(),
            first_person: Vec::new(),
            third_person: Vec::new(),
            edit: Vec::new(),
            edit_avatar: Vec::new(),
            sitting: Vec::new(),
            general: BTreeMap::new(),
        }
    }
}

impl BindingsDocument {
    /// Record list for one of the list-shaped mode sections.
    ///
    /// `Mode::General` has no record list; its bindings live in
    /// [`BindingsDocument::general`].
    pub fn records(&self, mode: Mode) -> Option<&[BindingRecord]> {
        match mode {
            Mode::FirstPerson => Some(&self.first_person),
            Mode::ThirdPerson => Some(&self.third_person),
            Mode::Edit => Some(&self.edit),
            Mode::EditAvatar => Some(&self.edit_avatar),
            Mode::Sitting => Some(&self.sitting),
            Mode::General => None,
        }
    }

    pub fn records_mut(&mut self, mode: Mode) -> Option<&mut Vec<BindingRecord>> {
        match mode {
            Mode::FirstPerson => Some(&mut self.first_person),
            Mode::ThirdPerson => Some(&mut self.third_person),
            Mode::Edit => Some(&mut self.edit),
            Mode::EditAvatar => Some(&mut self.edit_avatar),
            Mode::Sitting => Some(&mut self.sitting),
            Mode::General => None,
        }
    }

    pub fn parse(content: &str) -> Result<Self, SettingsError> {
        Ok(toml::from_str(content)?)
    }

    pub fn to_toml(&self) -> Result<String, SettingsError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

// ── File access ───────────────────────────────────────────────────────────────

/// Determines the platform-appropriate directory for the user binding file.
///
/// # Errors
///
/// Returns [`SettingsError::NoPlatformConfigDir`] when the platform config
/// base directory cannot be determined from the environment.
pub fn bindings_dir() -> Result<PathBuf, SettingsError> {
    platform_config_dir().ok_or(SettingsError::NoPlatformConfigDir)
}

/// Resolves the full path to the user binding file.
pub fn user_bindings_path() -> Result<PathBuf, SettingsError> {
    Ok(bindings_dir()?.join("key_bindings.toml"))
}

/// Loads a binding document from `path`, returning `None` if the file does
/// not exist.
///
/// # Errors
///
/// Returns [`SettingsError::Io`] for file-system errors other than "not
/// found", and [`SettingsError::Parse`] if the TOML is malformed.
pub fn load_document(path: &Path) -> Result<Option<BindingsDocument>, SettingsError> {
    match std::fs::read_to_string(path) {
        Ok(content) => Ok(Some(BindingsDocument::parse(&content)?)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(SettingsError::Io {
            path: path.to_path_buf(),
            source: e,
        }),
    }
}

/// Persists a binding document to `path`, creating parent directories as
/// needed.
pub fn save_document(path: &Path, doc: &BindingsDocument) -> Result<(), SettingsError> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir).map_err(|source| SettingsError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
    }
    let content = doc.to_toml()?;
    std::fs::write(path, content).map_err(|source| SettingsError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(())
}

fn platform_config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        std::env::var_os("APPDATA").map(|p| PathBuf::from(p).join("vwinput"))
    }

    #[cfg(target_os = "linux")]
    {
        let base = std::env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| std::env::var_os("HOME").map(|h| PathBuf::from(h).join(".config")))?;
        Some(base.join("vwinput"))
    }

    #[cfg(target_os = "macos")]
    {
        std::env::var_os("HOME").map(|h| {
            PathBuf::from(h)
                .join("Library")
                .join("Application Support")
                .join("vwinput")
        })
    }

    #[cfg(not(any(target_os = "windows", target_os = "linux", target_os = "macos")))]
    {
        None
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
