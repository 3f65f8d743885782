// Net Inspect - Application Configuration
// Copyright (C) 2026 Christos A. Daggas
// SPDX-License-Identifier: MIT

//! Application configuration model.

use serde::{Deserialize, Serialize};

use super::SHOW_COMMAND;

/// Application settings, persisted as `settings.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Command line that produces the JSON device listing.
    #[serde(default = "default_show_command")]
    pub show_command: String,

    /// Seconds to wait for the listing command before killing it.
    #[serde(default = "default_command_timeout")]
    pub command_timeout_secs: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            show_command: default_show_command(),
            command_timeout_secs: default_command_timeout(),
        }
    }
}

fn default_show_command() -> String {
    SHOW_COMMAND.to_string()
}

fn default_command_timeout() -> u64 {
    10
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.show_command, "nmcli device show | jc --nmcli");
        assert_eq!(config.command_timeout_secs, 10);
    }

    #[test]
    fn test_partial_settings_fill_in_defaults() {
        let config: AppConfig = toml::from_str("command_timeout_secs = 3\n").unwrap();
        assert_eq!(config.command_timeout_secs, 3);
        assert_eq!(config.show_command, SHOW_COMMAND);
    }
}
