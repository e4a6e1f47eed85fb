use std::path::PathBuf;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::error::MoviemateError;

const DEFAULT_CONFIG: &str = include_str!("../../../config/default.toml");

/// Top-level application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub tmdb: TmdbConfig,
}

/// TMDB catalog endpoint settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TmdbConfig {
    pub api_token: String,
    pub base_url: String,
    pub image_base_url: String,
}

impl AppConfig {
    /// Load config: the user file if it exists, otherwise built-in defaults.
    ///
    /// The `TMDB_API_TOKEN` environment variable overrides the token from
    /// either source.
    pub fn load() -> Result<Self, MoviemateError> {
        let user_path = Self::config_path();
        let mut config: AppConfig = if user_path.exists() {
            let user_str = std::fs::read_to_string(&user_path)
                .map_err(|e| MoviemateError::Config(e.to_string()))?;
            toml::from_str(&user_str).map_err(|e| MoviemateError::Config(e.to_string()))?
        } else {
            toml::from_str(DEFAULT_CONFIG).map_err(|e| MoviemateError::Config(e.to_string()))?
        };

        if let Ok(token) = std::env::var("TMDB_API_TOKEN") {
            config.tmdb.api_token = token;
        }
        Ok(config)
    }

    /// Save current config to the user config file.
    pub fn save(&self) -> Result<(), MoviemateError> {
        let path = Self::config_path();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content =
            toml::to_string_pretty(self).map_err(|e| MoviemateError::Config(e.to_string()))?;
        std::fs::write(&path, content)?;
        Ok(())
    }

    /// Path to the user config file (XDG on Linux, AppData on Windows).
    pub fn config_path() -> PathBuf {
        Self::project_dirs()
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from("config.toml"))
    }

    /// Path to the preferences file (favorites and theme).
    pub fn prefs_path() -> PathBuf {
        Self::project_dirs()
            .map(|d| d.data_dir().join("prefs.json"))
            .unwrap_or_else(|| PathBuf::from("prefs.json"))
    }

    fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("", "", "moviemate")
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        toml::from_str(DEFAULT_CONFIG).expect("built-in default config is valid TOML")
    }
}

/// The user's display preference.
///
/// `System` follows the host appearance; the stored value never changes on
/// its own, only the resolved darkness does.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    pub const ALL: &[ThemeMode] = &[Self::Light, Self::Dark, Self::System];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::System => "system",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            "system" => Some(Self::System),
            _ => None,
        }
    }
}

impl std::fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolve a mode to its effective darkness.
///
/// `System` asks the host; if detection fails, dark is the fallback.
pub fn effective_dark(mode: ThemeMode) -> bool {
    match mode {
        ThemeMode::Light => false,
        ThemeMode::Dark => true,
        ThemeMode::System => !matches!(dark_light::detect(), Ok(dark_light::Mode::Light)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_parses() {
        let config = AppConfig::default();
        assert_eq!(config.tmdb.base_url, "https://api.themoviedb.org/3");
        assert_eq!(config.tmdb.image_base_url, "https://image.tmdb.org/t/p");
    }

    #[test]
    fn test_roundtrip() {
        let config = AppConfig::default();
        let serialized = toml::to_string_pretty(&config).unwrap();
        let deserialized: AppConfig = toml::from_str(&serialized).unwrap();
        assert_eq!(deserialized.tmdb.base_url, config.tmdb.base_url);
    }

    #[test]
    fn test_theme_mode_strings() {
        for mode in ThemeMode::ALL {
            assert_eq!(ThemeMode::from_str(mode.as_str()), Some(*mode));
        }
        assert_eq!(ThemeMode::from_str("sepia"), None);
    }

    #[test]
    fn test_effective_dark_explicit_modes() {
        assert!(!effective_dark(ThemeMode::Light));
        assert!(effective_dark(ThemeMode::Dark));
    }
}
