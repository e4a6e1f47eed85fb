//! Local preference store: the favorites list and the theme mode.
//!
//! The original app kept both in one device key-value area. Here the
//! backend is injected, so tests run against memory and the app against a
//! small JSON file in the platform data directory. Reads are synchronous
//! and never touch the network; every favorites write replaces the whole
//! serialized list.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::config::{AppConfig, ThemeMode};
use crate::error::MoviemateError;
use crate::models::Movie;

/// Key holding the JSON-encoded favorites list.
pub const FAVORITES_KEY: &str = "favorites";

/// Key holding the theme mode string.
pub const THEME_MODE_KEY: &str = "theme_mode";

/// A flat string key-value area the store persists into.
pub trait PreferenceBackend {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), MoviemateError>;
}

/// In-memory backend for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    values: HashMap<String, String>,
}

impl PreferenceBackend for MemoryBackend {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), MoviemateError> {
        self.values.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// File-backed backend: one JSON object of string values, loaded once at
/// open and rewritten whole on every set.
#[derive(Debug)]
pub struct FileBackend {
    path: PathBuf,
    values: HashMap<String, String>,
}

impl FileBackend {
    /// Open the backend at `path`. A missing file means first launch; an
    /// unreadable one is discarded with a warning rather than an error.
    pub fn open(path: &Path) -> Self {
        let path = path.to_path_buf();
        let values = match std::fs::read_to_string(&path) {
            Ok(content) => match serde_json::from_str(&content) {
                Ok(map) => map,
                Err(e) => {
                    tracing::warn!("Discarding unreadable preferences at {}: {e}", path.display());
                    HashMap::new()
                }
            },
            Err(_) => HashMap::new(),
        };
        Self { path, values }
    }

    /// Open at the platform-default location (`.../moviemate/prefs.json`).
    pub fn open_default() -> Self {
        Self::open(&AppConfig::prefs_path())
    }
}

impl PreferenceBackend for FileBackend {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), MoviemateError> {
        self.values.insert(key.to_owned(), value.to_owned());
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(&self.values)
            .map_err(|e| MoviemateError::Store(e.to_string()))?;
        std::fs::write(&self.path, json)?;
        Ok(())
    }
}

/// The preference store proper.
///
/// The mutex keeps the favorites read-modify-write atomic when the store
/// is shared across threads; a single-threaded caller never contends.
pub struct PreferenceStore<B> {
    backend: Mutex<B>,
}

impl<B: PreferenceBackend> PreferenceStore<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend: Mutex::new(backend),
        }
    }

    /// Current favorites. Unset or unparseable state reads as empty.
    pub fn favorites(&self) -> Vec<Movie> {
        read_favorites(&*self.lock())
    }

    /// Add a movie to the favorites. Adding an id already present is a
    /// no-op, so the list keeps set semantics.
    ///
    /// The stored entry is a snapshot of the summary at favorite time and
    /// is never refreshed against the catalog.
    pub fn add_favorite(&self, movie: &Movie) -> Result<(), MoviemateError> {
        let mut backend = self.lock();
        let mut list = read_favorites(&*backend);
        if list.iter().any(|m| m.id == movie.id) {
            return Ok(());
        }
        list.push(movie.clone());
        write_favorites(&mut *backend, &list)
    }

    /// Remove a favorite by movie id. An absent id is a no-op.
    pub fn remove_favorite(&self, id: u64) -> Result<(), MoviemateError> {
        let mut backend = self.lock();
        let mut list = read_favorites(&*backend);
        let before = list.len();
        list.retain(|m| m.id != id);
        if list.len() == before {
            return Ok(());
        }
        write_favorites(&mut *backend, &list)
    }

    /// Membership test. Linear scan; the list holds tens of entries.
    pub fn is_favorite(&self, id: u64) -> bool {
        read_favorites(&*self.lock()).iter().any(|m| m.id == id)
    }

    /// The stored theme mode, defaulting to `System` when unset or
    /// unrecognized.
    pub fn theme_mode(&self) -> ThemeMode {
        self.lock()
            .get(THEME_MODE_KEY)
            .and_then(|s| ThemeMode::from_str(&s))
            .unwrap_or(ThemeMode::System)
    }

    /// Persist a theme mode selection immediately.
    pub fn set_theme_mode(&self, mode: ThemeMode) -> Result<(), MoviemateError> {
        self.lock().set(THEME_MODE_KEY, mode.as_str())
    }

    fn lock(&self) -> MutexGuard<'_, B> {
        self.backend.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn read_favorites<B: PreferenceBackend>(backend: &B) -> Vec<Movie> {
    let Some(raw) = backend.get(FAVORITES_KEY) else {
        return Vec::new();
    };
    match serde_json::from_str(&raw) {
        Ok(list) => list,
        Err(e) => {
            tracing::warn!("Stored favorites do not parse, treating as empty: {e}");
            Vec::new()
        }
    }
}

fn write_favorites<B: PreferenceBackend>(
    backend: &mut B,
    list: &[Movie],
) -> Result<(), MoviemateError> {
    let json = serde_json::to_string(list).map_err(|e| MoviemateError::Store(e.to_string()))?;
    backend.set(FAVORITES_KEY, &json)
}
