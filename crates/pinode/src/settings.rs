use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use pinode_backend::ToolId;
use pinode_platform::AppPaths;

use crate::cli::Cli;
use crate::pin_file::DEFAULT_PIN_FILE;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Could not read settings file {path}: {message}")]
    Read { path: PathBuf, message: String },

    #[error("Invalid settings file {path}: {message}")]
    Parse { path: PathBuf, message: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default = "default_pin_file")]
    pub pin_file: String,

    #[serde(default)]
    pub tool: ToolId,

    #[serde(default)]
    pub nvm_dir: Option<PathBuf>,

    #[serde(default)]
    pub debug_logging: bool,

    #[serde(default = "default_max_log_size_bytes")]
    pub max_log_size_bytes: u64,
}

fn default_pin_file() -> String {
    DEFAULT_PIN_FILE.to_string()
}

fn default_max_log_size_bytes() -> u64 {
    5 * 1024 * 1024
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            pin_file: default_pin_file(),
            tool: ToolId::DEFAULT,
            nvm_dir: None,
            debug_logging: false,
            max_log_size_bytes: default_max_log_size_bytes(),
        }
    }
}

impl Settings {
    /// Load the user's settings file. A missing file yields the defaults.
    ///
    /// # Errors
    /// Returns an error when the file exists but cannot be read or parsed.
    pub fn load() -> Result<Self, SettingsError> {
        let Ok(paths) = AppPaths::new() else {
            return Ok(Self::default());
        };
        Self::load_from(&paths.settings_file())
    }

    /// Load settings from `path`. A missing file yields the defaults.
    ///
    /// # Errors
    /// Returns an error when the file exists but cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self, SettingsError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| SettingsError::Read {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        serde_json::from_str(&content).map_err(|e| SettingsError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    pub fn apply_overrides(&mut self, cli: &Cli) {
        if let Some(pin_file) = &cli.pin_file {
            self.pin_file.clone_from(pin_file);
        }
        if cli.debug {
            self.debug_logging = true;
        }
    }
}
