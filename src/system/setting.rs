//! Settings file for the dataset tools.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::logger::LogSetting;
use super::utility::get_file_path;
use crate::dataset::error::{DatasetError, Result};
use crate::dataset::setting::{LoaderSetting, WindowSetting};

/// Setting filename
pub const SETTING_FILENAME: &str = "dataset_setting.json";

/// All settings, as stored in the JSON settings file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatasetSettings {
    pub loader: LoaderSetting,
    pub window: WindowSetting,
    pub log: LogSetting,
}

impl DatasetSettings {
    /// Default settings file inside the data folder
    pub fn default_path() -> PathBuf {
        get_file_path(SETTING_FILENAME)
    }

    /// Load settings from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| DatasetError::io(path, e))?;
        let settings: Self = serde_json::from_str(&content)?;
        Ok(settings)
    }

    /// Load settings, using defaults only when the file does not exist.
    ///
    /// A file that exists but cannot be read or parsed is an error.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load(path)
    }

    /// Resolve settings for the command line.
    ///
    /// An explicit path must load. Otherwise `default_path` is used if it
    /// exists. Returns the file the settings came from, `None` for defaults.
    pub fn resolve(explicit: Option<&Path>, default_path: &Path) -> Result<(Self, Option<PathBuf>)> {
        match explicit {
            Some(path) => Ok((Self::load(path)?, Some(path.to_path_buf()))),
            None => {
                let settings = Self::load_or_default(default_path)?;
                let source = default_path.exists().then(|| default_path.to_path_buf());
                Ok((settings, source))
            }
        }
    }

    /// Save settings to a JSON file, creating parent folders as needed.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| DatasetError::io(parent, e))?;
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json).map_err(|e| DatasetError::io(path, e))?;
        Ok(())
    }

    /// Validate the loader and window sections.
    pub fn validate(&self) -> Result<()> {
        self.loader.validate()?;
        self.window.validate()
    }
}
