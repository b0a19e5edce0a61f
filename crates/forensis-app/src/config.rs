//! Configuration file parsing for Forensis
//!
//! Settings live at `<config_dir>/forensis/config.toml`. A missing file
//! means defaults; an unparsable file is logged and also means defaults --
//! configuration problems never stop the application.

use std::path::{Path, PathBuf};

use forensis_core::prelude::*;
use serde::{Deserialize, Serialize};

const CONFIG_FILENAME: &str = "config.toml";
const CONFIG_DIR: &str = "forensis";

/// Top-level settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub ui: UiSettings,
}

/// UI-related settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// Whether the decorative molecule background runs at all
    pub background: bool,

    /// Use plain ASCII glyphs instead of unicode icons
    pub ascii_icons: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            background: true,
            ascii_icons: false,
        }
    }
}

/// Path of the settings file under the platform config directory.
pub fn config_file_path() -> PathBuf {
    let base = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join(CONFIG_DIR).join(CONFIG_FILENAME)
}

/// Load settings from the default location.
pub fn load_settings() -> Settings {
    load_settings_from(&config_file_path())
}

/// Load settings from an explicit path.
pub fn load_settings_from(path: &Path) -> Settings {
    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(_) => {
            debug!(path = %path.display(), "no config file, using defaults");
            return Settings::default();
        }
    };

    match toml::from_str(&text) {
        Ok(settings) => settings,
        Err(err) => {
            warn!(path = %path.display(), %err, "invalid config file, using defaults");
            Settings::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert!(settings.ui.background);
        assert!(!settings.ui.ascii_icons);
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = load_settings_from(&dir.path().join("absent.toml"));
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_load_valid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "[ui]\nbackground = false\nascii_icons = true").unwrap();

        let settings = load_settings_from(&path);
        assert!(!settings.ui.background);
        assert!(settings.ui.ascii_icons);
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "[ui]\nbackground = false\n").unwrap();

        let settings = load_settings_from(&path);
        assert!(!settings.ui.background);
        assert!(!settings.ui.ascii_icons);
    }

    #[test]
    fn test_invalid_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "ui = {{{ not toml").unwrap();

        let settings = load_settings_from(&path);
        assert_eq!(settings, Settings::default());
    }
}
