use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::reference::DIGITS;

/// Settings for the interactive front end.
///
/// Every field has a default, so a missing or empty configuration file
/// behaves like a fresh installation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Versions", into = "Versions")]
pub struct Config {
    /// Whether a new session starts with the demonstration dataset loaded.
    pub sample_data: bool,

    /// Whether the menu waits for a keypress after each action.
    pub pause_after_action: bool,

    /// The width reference numbers are padded to when displayed.
    ///
    /// For example `STU0001` (4 digits) or `STU000001` (6 digits). Parsing
    /// accepts any width regardless of this setting.
    digits: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sample_data: true,
            pause_after_action: true,
            digits: DIGITS,
        }
    }
}

impl Config {
    /// Loads the configuration from a TOML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or if the TOML content is
    /// invalid.
    pub fn load(path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config file: {e}"))?;
        toml::from_str(&content).map_err(|e| format!("Failed to parse config file: {e}"))
    }

    /// Loads the configuration at `path`, or the defaults if there is no file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_or_default(path: &Path) -> Result<Self, String> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::debug!("No config file at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Saves the configuration to a TOML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be serialized to TOML or if
    /// the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), String> {
        let content =
            toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize config: {e}"))?;
        std::fs::write(path, content).map_err(|e| format!("Failed to write config file: {e}"))
    }

    /// Returns the number of digits reference numbers are padded to.
    #[must_use]
    pub const fn digits(&self) -> usize {
        self.digits
    }
}

const fn default_digits() -> usize {
    DIGITS
}

const fn enabled() -> bool {
    true
}

/// The serialized versions of the configuration.
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "_version")]
enum Versions {
    #[serde(rename = "1")]
    V1 {
        #[serde(default = "enabled")]
        sample_data: bool,

        #[serde(default = "enabled")]
        pause_after_action: bool,

        #[serde(default = "default_digits")]
        digits: usize,
    },
}

impl From<Versions> for Config {
    fn from(versions: Versions) -> Self {
        match versions {
            Versions::V1 {
                sample_data,
                pause_after_action,
                digits,
            } => Self {
                sample_data,
                pause_after_action,
                digits,
            },
        }
    }
}

impl From<Config> for Versions {
    fn from(config: Config) -> Self {
        Self::V1 {
            sample_data: config.sample_data,
            pause_after_action: config.pause_after_action,
            digits: config.digits,
        }
    }
}
