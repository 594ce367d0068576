//! Dark mode and its persisted preference.
//!
//! The preference is the only state folio persists: a single `dark_mode`
//! flag stored as JSON in the XDG config directory, falling back to the
//! working directory.

use std::path::{Path, PathBuf};

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use crate::error::FolioError;

const PREFERENCES_FILENAME: &str = "preferences.json";
const CONFIG_DIR_NAME: &str = "folio";

/// Page color scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    #[must_use]
    pub fn from_dark(dark: bool) -> Self {
        if dark {
            Self::Dark
        } else {
            Self::Light
        }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    /// The other mode.
    #[must_use]
    pub fn toggled(self) -> Self {
        Self::from_dark(!self.is_dark())
    }

    /// Icon shown on the toggle button: the mode a click switches to.
    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            Self::Dark => "sun",
            Self::Light => "moon",
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct Preferences {
    dark_mode: bool,
}

/// Storage for the dark mode flag.
pub trait PreferenceStore: Send {
    /// Saved flag, `None` when nothing usable is stored.
    fn load(&self) -> Result<Option<bool>, FolioError>;

    /// Persist the flag.
    fn save(&self, dark_mode: bool) -> Result<(), FolioError>;
}

/// JSON file store.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Store at an explicit path.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store in the XDG config directory, or the working directory when no
    /// config directory can be determined.
    #[must_use]
    pub fn default_location() -> Self {
        Self::new(xdg_preferences_path().unwrap_or_else(cwd_preferences_path))
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Remove the stored preference. Returns whether a file was deleted.
    pub fn delete(&self) -> Result<bool, FolioError> {
        if self.path.exists() {
            std::fs::remove_file(&self.path)?;
            return Ok(true);
        }
        Ok(false)
    }
}

impl PreferenceStore for FileStore {
    fn load(&self) -> Result<Option<bool>, FolioError> {
        if !self.path.exists() {
            return Ok(None);
        }
        let content = std::fs::read_to_string(&self.path)?;
        match serde_json::from_str::<Preferences>(&content) {
            Ok(prefs) => Ok(Some(prefs.dark_mode)),
            Err(err) => {
                tracing::warn!(path = %self.path.display(), %err, "ignoring unreadable preferences");
                Ok(None)
            }
        }
    }

    fn save(&self, dark_mode: bool) -> Result<(), FolioError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let content = serde_json::to_string_pretty(&Preferences { dark_mode })
            .map_err(|e| FolioError::Preference(e.to_string()))?;
        std::fs::write(&self.path, content)?;
        Ok(())
    }
}

/// In-memory store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    value: Mutex<Option<bool>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new(initial: Option<bool>) -> Self {
        Self {
            value: Mutex::new(initial),
        }
    }

    /// Currently stored flag.
    #[must_use]
    pub fn get(&self) -> Option<bool> {
        *self.value.lock()
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self) -> Result<Option<bool>, FolioError> {
        Ok(self.get())
    }

    fn save(&self, dark_mode: bool) -> Result<(), FolioError> {
        *self.value.lock() = Some(dark_mode);
        Ok(())
    }
}

impl<S: PreferenceStore + Sync + ?Sized> PreferenceStore for std::sync::Arc<S> {
    fn load(&self) -> Result<Option<bool>, FolioError> {
        (**self).load()
    }

    fn save(&self, dark_mode: bool) -> Result<(), FolioError> {
        (**self).save(dark_mode)
    }
}

/// Resolve the initial mode from a store; read failures fall back to light.
pub fn initial_mode(store: &dyn PreferenceStore) -> ThemeMode {
    match store.load() {
        Ok(saved) => ThemeMode::from_dark(saved.unwrap_or(false)),
        Err(err) => {
            tracing::warn!(%err, "could not read theme preference, using light mode");
            ThemeMode::Light
        }
    }
}

fn xdg_preferences_path() -> Option<PathBuf> {
    // Try XDG_CONFIG_HOME, fall back to ~/.config
    let config_dir = std::env::var_os("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|| std::env::var_os("HOME").map(|home| PathBuf::from(home).join(".config")))?;

    Some(config_dir.join(CONFIG_DIR_NAME).join(PREFERENCES_FILENAME))
}

fn cwd_preferences_path() -> PathBuf {
    std::env::current_dir()
        .unwrap_or_else(|_| PathBuf::from("."))
        .join(format!(".{CONFIG_DIR_NAME}_{PREFERENCES_FILENAME}"))
}
