//! Settings structures and loading logic.

use crate::charset::Charset;
use crate::error::{Error, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the settings file inside the per-user config directory.
pub const SETTINGS_FILE_NAME: &str = "filekit.toml";

/// Main settings structure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub resources: ResourceSettings,

    #[serde(default)]
    pub io: IoSettings,
}

/// Resource lookup settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceSettings {
    /// Directories searched for resources, in order.
    #[serde(default = "default_roots")]
    pub roots: Vec<PathBuf>,
}

impl Default for ResourceSettings {
    fn default() -> Self {
        Self {
            roots: default_roots(),
        }
    }
}

/// Text I/O settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IoSettings {
    /// Charset for text read, write and copy commands.
    #[serde(default)]
    pub charset: Charset,
}

fn default_roots() -> Vec<PathBuf> {
    vec![PathBuf::from("resources")]
}

impl Settings {
    /// Load settings from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::Config(format!("Settings file not found: {}", path.display()))
            } else {
                Error::Io(e)
            }
        })?;

        let settings: Settings = toml::from_str(&content)?;
        Ok(settings)
    }

    /// Load settings if the file exists, defaults otherwise.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::debug!("No settings at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Save settings to a TOML file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize settings: {}", e)))?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, content)?;
        Ok(())
    }

    /// Per-user settings location, e.g. `~/.config/filekit/filekit.toml`.
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "filekit").map(|dirs| dirs.config_dir().join(SETTINGS_FILE_NAME))
    }
}
