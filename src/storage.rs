// Net Inspect - Local Storage
// Copyright (C) 2026 Christos A. Daggas
// SPDX-License-Identifier: MIT

//! Settings persistence.
//!
//! Reads and writes `settings.toml` under the XDG config directory.
//! Missing or unreadable settings fall back to defaults; the directory is
//! created with owner-only permissions on first write.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::models::{AppConfig, Error, Result, CONFIG_DIR_NAME};

/// Settings store bound to one configuration directory.
#[derive(Debug)]
pub struct SettingsStore {
    config_dir: PathBuf,
    settings_file: PathBuf,
}

impl SettingsStore {
    /// Store under the default XDG config directory.
    pub fn new() -> Self {
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(CONFIG_DIR_NAME);
        Self::with_config_dir(config_dir)
    }

    /// Store under a specific configuration directory.
    pub fn with_config_dir(config_dir: PathBuf) -> Self {
        Self {
            settings_file: config_dir.join("settings.toml"),
            config_dir,
        }
    }

    /// Path of the settings file.
    pub fn settings_path(&self) -> &Path {
        &self.settings_file
    }

    /// Load settings, falling back to defaults when absent or malformed.
    pub fn load(&self) -> AppConfig {
        match fs::read_to_string(&self.settings_file) {
            Ok(text) => match toml::from_str(&text) {
                Ok(config) => {
                    debug!("Loaded settings from {:?}", self.settings_file);
                    config
                }
                Err(e) => {
                    warn!("Failed to parse settings, using defaults: {}", e);
                    AppConfig::default()
                }
            },
            Err(_) => AppConfig::default(),
        }
    }

    /// Persist settings, creating the config directory if needed.
    pub fn save(&self, config: &AppConfig) -> Result<()> {
        fs::create_dir_all(&self.config_dir)
            .map_err(|e| Error::ConfigWriteFailed(e.to_string()))?;
        // Restrictive permissions on the config directory (0700)
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let _ = fs::set_permissions(&self.config_dir, fs::Permissions::from_mode(0o700));
        }

        let text = toml::to_string_pretty(config)?;
        fs::write(&self.settings_file, text)
            .map_err(|e| Error::ConfigWriteFailed(e.to_string()))?;
        debug!("Saved settings to {:?}", self.settings_file);
        Ok(())
    }
}

impl Default for SettingsStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store(tag: &str) -> SettingsStore {
        let dir = std::env::temp_dir().join(format!("netinspect-{}-{}", tag, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        SettingsStore::with_config_dir(dir)
    }

    #[test]
    fn test_settings_round_trip() {
        let store = temp_store("roundtrip");
        let config = AppConfig {
            show_command: "cat devices.json".to_string(),
            command_timeout_secs: 3,
        };
        store.save(&config).expect("save failed");
        assert_eq!(store.load(), config);
        let _ = fs::remove_dir_all(&store.config_dir);
    }

    #[test]
    fn test_missing_settings_fall_back_to_defaults() {
        let store = temp_store("missing");
        assert_eq!(store.load(), AppConfig::default());
    }

    #[test]
    fn test_malformed_settings_fall_back_to_defaults() {
        let store = temp_store("malformed");
        fs::create_dir_all(&store.config_dir).unwrap();
        fs::write(store.settings_path(), "not = [valid").unwrap();
        assert_eq!(store.load(), AppConfig::default());
        let _ = fs::remove_dir_all(&store.config_dir);
    }
}
