//! Machine configuration
//!
//! The machine has a single option, `arpeggiate`. It can be given as a host
//! option string or read from a TOML file in the platform config directory.
//!
//! ## Config File Locations
//!
//! | Platform | Path |
//! |----------|------|
//! | Linux | `~/.config/sidewinder-steno/config.toml` |
//! | macOS | `~/Library/Application Support/sidewinder-steno/config.toml` |
//! | Windows | `%APPDATA%\sidewinder-steno\config.toml` |
//!
//! ## Example
//!
//! ```no_run
//! use sidewinder_steno::MachineConfig;
//!
//! let config = MachineConfig::load().unwrap_or_default();
//! println!("arpeggiate: {}", config.arpeggiate);
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Name of the arpeggiate option
pub const ARPEGGIATE: &str = "arpeggiate";

/// Error type for configuration operations
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to determine config directory
    #[error("Could not determine config directory")]
    NoConfigDir,
    /// IO error reading config file
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    /// Failed to parse config file
    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Returns the path to the config file.
///
/// The file is only ever read; nothing is created.
pub fn config_path() -> Result<PathBuf, ConfigError> {
    let config_dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
    Ok(config_dir.join("sidewinder-steno").join("config.toml"))
}

/// Convert a host option value to a bool.
///
/// Only the exact literal `true` is true; anything else is false.
pub fn parse_bool_option(value: &str) -> bool {
    value == "true"
}

/// Machine configuration, fixed for the lifetime of a machine
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct MachineConfig {
    /// Strokes are finished by an extra keystroke instead of releasing all keys
    pub arpeggiate: bool,
}

impl MachineConfig {
    /// Recognised options and their defaults
    pub fn option_info() -> Vec<(&'static str, bool)> {
        vec![(ARPEGGIATE, false)]
    }

    /// Build a config from host option strings.
    ///
    /// Unknown options are ignored and bad values fall back to the default.
    pub fn from_options(options: &HashMap<String, String>) -> Self {
        let mut config = Self::default();
        for (name, value) in options {
            match name.as_str() {
                ARPEGGIATE => config.arpeggiate = parse_bool_option(value),
                other => log::debug!("ignoring unknown machine option {:?}", other),
            }
        }
        config
    }

    /// Parse a config from TOML text
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    /// Load configuration from the default config file.
    ///
    /// Returns the default configuration if the file doesn't exist.
    pub fn load() -> Result<Self, ConfigError> {
        let path = config_path()?;

        if !path.exists() {
            return Ok(Self::default());
        }

        Self::load_from(&path)
    }

    /// Load configuration from a specific path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        let config = Self::from_toml_str(&contents)?;
        log::debug!("loaded machine config from {}: {:?}", path.display(), config);
        Ok(config)
    }
}
