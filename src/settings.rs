//! Settings - Plugin Configuration Storage
//!
//! TOML-backed configuration for the locale registry. A missing settings
//! file is not an error; defaults are returned and the provider falls back
//! to system locale detection.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Settings file name inside the config directory
const SETTINGS_FILE: &str = "translatable.toml";

/// Plugin configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Settings {
    /// Configured locale codes, in display order
    #[serde(default)]
    pub locales: Vec<String>,
    /// Locale selected as current on startup (must be in `locales`)
    #[serde(default)]
    pub default_locale: Option<String>,
}

impl Settings {
    /// Load settings from the platform config directory
    ///
    /// Returns defaults when the settings file does not exist.
    pub fn load() -> Result<Self> {
        let path = get_or_create_config_dir()?.join(SETTINGS_FILE);
        Self::load_from(&path)
    }

    /// Load settings from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "settings file missing, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let settings: Settings = toml::from_str(&content)?;
        Ok(settings)
    }

    /// Save settings to the platform config directory
    pub fn save(&self) -> Result<()> {
        let path = get_or_create_config_dir()?.join(SETTINGS_FILE);
        self.save_to(&path)
    }

    /// Save settings to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}

/// Get or create the plugin's configuration directory
///
/// Platform-specific locations:
/// - **Linux**: `~/.config/translatable-forms/` or `$XDG_CONFIG_HOME/translatable-forms/`
/// - **macOS**: `~/Library/Application Support/com.translatable-forms/`
/// - **Windows**: `C:\Users\<User>\AppData\Roaming\translatable-forms\config\`
pub fn get_or_create_config_dir() -> Result<PathBuf> {
    let Some(project_dirs) = ProjectDirs::from("com", "", "translatable-forms") else {
        return Err(Error::Invalid {
            message: "Could not determine project directories".to_string(),
        });
    };

    let config_dir = project_dirs.config_dir();

    if !config_dir.exists() {
        fs::create_dir_all(config_dir)?;
    }

    Ok(config_dir.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_missing_file_returns_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let settings =
            Settings::load_from(&dir.path().join("absent.toml")).expect("load settings");
        assert!(settings.locales.is_empty());
        assert!(settings.default_locale.is_none());
    }

    #[test]
    fn test_settings_round_trip() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(SETTINGS_FILE);

        let settings = Settings {
            locales: vec!["en".to_string(), "de".to_string()],
            default_locale: Some("de".to_string()),
        };
        settings.save_to(&path).expect("save settings");

        let loaded = Settings::load_from(&path).expect("load settings");
        assert_eq!(loaded.locales, vec!["en", "de"]);
        assert_eq!(loaded.default_locale.as_deref(), Some("de"));
    }

    #[test]
    fn test_load_rejects_malformed_toml() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(SETTINGS_FILE);
        fs::write(&path, "locales = not-a-list").expect("write file");

        assert!(Settings::load_from(&path).is_err());
    }
}
