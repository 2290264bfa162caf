//! Light/dark preference: persisted, restored, toggled.
//!
//! Persistence is best-effort. A store that cannot be read yields the OS
//! preference; a store that cannot be written leaves the new theme applied
//! for the session only. Neither failure reaches the page.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use vitrine_core::Theme;

/// Key of the persisted entry.
pub const THEME_KEY: &str = "theme";

#[derive(Debug, Error)]
pub enum ThemeStoreError {
    #[error("theme store I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("theme store at {path} is not valid JSON: {source}")]
    Format {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("stored theme {value:?} is neither light nor dark")]
    InvalidValue { value: String },
}

/// Durable key-value slot holding the theme preference.
pub trait ThemeStore: Send + Sync {
    /// Reads the persisted theme; `Ok(None)` when nothing was saved yet.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeStoreError`] when the backing storage cannot be read.
    fn load(&self) -> Result<Option<Theme>, ThemeStoreError>;

    /// Persists `theme`.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeStoreError`] when the backing storage cannot be written.
    fn save(&self, theme: Theme) -> Result<(), ThemeStoreError>;
}

/// JSON file store: `{"theme": "dark"}`.
#[derive(Debug, Clone)]
pub struct FileThemeStore {
    path: PathBuf,
}

#[derive(Debug, Serialize, Deserialize)]
struct ThemeFile {
    theme: Theme,
}

impl FileThemeStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_err(&self, source: std::io::Error) -> ThemeStoreError {
        ThemeStoreError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl ThemeStore for FileThemeStore {
    fn load(&self) -> Result<Option<Theme>, ThemeStoreError> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(self.io_err(e)),
        };
        let file: ThemeFile =
            serde_json::from_str(&raw).map_err(|source| ThemeStoreError::Format {
                path: self.path.clone(),
                source,
            })?;
        Ok(Some(file.theme))
    }

    fn save(&self, theme: Theme) -> Result<(), ThemeStoreError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| self.io_err(e))?;
        }
        let body = serde_json::to_string(&ThemeFile { theme }).map_err(|source| {
            ThemeStoreError::Format {
                path: self.path.clone(),
                source,
            }
        })?;
        std::fs::write(&self.path, body).map_err(|e| self.io_err(e))
    }
}

/// In-process store, used by hosts without durable storage and by tests.
#[derive(Debug, Default)]
pub struct MemoryThemeStore {
    value: Mutex<Option<Theme>>,
}

impl MemoryThemeStore {
    #[must_use]
    pub fn with(theme: Option<Theme>) -> Self {
        Self {
            value: Mutex::new(theme),
        }
    }

    /// The last saved value, ignoring lock poisoning.
    #[must_use]
    pub fn saved(&self) -> Option<Theme> {
        *self.value.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl ThemeStore for MemoryThemeStore {
    fn load(&self) -> Result<Option<Theme>, ThemeStoreError> {
        Ok(self.saved())
    }

    fn save(&self, theme: Theme) -> Result<(), ThemeStoreError> {
        *self.value.lock().unwrap_or_else(std::sync::PoisonError::into_inner) = Some(theme);
        Ok(())
    }
}

/// The applied theme plus the store it persists to.
pub struct ThemeState<S: ThemeStore> {
    current: Theme,
    store: S,
}

impl<S: ThemeStore> ThemeState<S> {
    /// Restores the persisted theme, else the OS preference, else light.
    pub fn initialize(store: S, prefers_dark: bool) -> Self {
        let persisted = store.load().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "could not read theme preference; using default");
            None
        });
        Self {
            current: Theme::resolve(persisted, prefers_dark),
            store,
        }
    }

    #[must_use]
    pub fn current(&self) -> Theme {
        self.current
    }

    /// Flips light/dark, applies it immediately, and persists it.
    pub fn toggle(&mut self) -> Theme {
        self.current = self.current.toggled();
        if let Err(e) = self.store.save(self.current) {
            tracing::warn!(error = %e, theme = %self.current, "could not persist theme preference");
        }
        self.current
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }
}

/// Reads the terminal's `COLORFGBG` hint (`"fg;bg"`); a background color
/// index of 0-6 or 8 means a dark terminal.
#[must_use]
pub fn terminal_prefers_dark(colorfgbg: Option<&str>) -> bool {
    colorfgbg
        .and_then(|v| v.rsplit(';').next())
        .and_then(|bg| bg.trim().parse::<u8>().ok())
        .is_some_and(|bg| bg <= 6 || bg == 8)
}
