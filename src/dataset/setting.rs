//! Windowing and loader parameters.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::constant::{DEFAULT_SET_DIRECTORIES, DEFAULT_STRIDE, DEFAULT_WINDOW_SIZE};
use super::error::{DatasetError, Result};

/// Sliding-window parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowSetting {
    /// Points per window
    pub window_size: usize,
    /// Offset between consecutive window starts
    pub stride: usize,
    /// Log per-set progress
    pub verbose: bool,
}

impl Default for WindowSetting {
    fn default() -> Self {
        Self {
            window_size: DEFAULT_WINDOW_SIZE,
            stride: DEFAULT_STRIDE,
            verbose: false,
        }
    }
}

impl WindowSetting {
    pub fn new(window_size: usize, stride: usize) -> Self {
        Self {
            window_size,
            stride,
            verbose: false,
        }
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Check that both parameters are positive.
    pub fn validate(&self) -> Result<()> {
        if self.window_size == 0 {
            return Err(DatasetError::invalid_parameter("window_size must be greater than 0"));
        }
        if self.stride == 0 {
            return Err(DatasetError::invalid_parameter("stride must be greater than 0"));
        }
        Ok(())
    }
}

/// One labeled set and the directory holding its recordings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetMapping {
    pub label: String,
    pub directory: String,
}

impl SetMapping {
    pub fn new(label: impl Into<String>, directory: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            directory: directory.into(),
        }
    }
}

/// Where to find the raw recordings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoaderSetting {
    /// Directory containing one subdirectory per set
    pub root: PathBuf,
    /// Sets to load, in order
    pub sets: Vec<SetMapping>,
}

impl Default for LoaderSetting {
    fn default() -> Self {
        Self::new(".")
    }
}

impl LoaderSetting {
    /// Default A..E mapping under `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            sets: DEFAULT_SET_DIRECTORIES
                .iter()
                .map(|(label, dir)| SetMapping::new(*label, *dir))
                .collect(),
        }
    }

    /// Full path of a set's directory.
    pub fn set_path(&self, mapping: &SetMapping) -> PathBuf {
        self.root.join(&mapping.directory)
    }

    /// Reject empty or duplicated labels.
    pub fn validate(&self) -> Result<()> {
        for (idx, mapping) in self.sets.iter().enumerate() {
            if mapping.label.is_empty() {
                return Err(DatasetError::invalid_parameter(format!(
                    "set #{} has an empty label",
                    idx
                )));
            }
            if self.sets[..idx].iter().any(|m| m.label == mapping.label) {
                return Err(DatasetError::invalid_parameter(format!(
                    "set {} is configured more than once",
                    mapping.label
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_setting_defaults() {
        let setting = WindowSetting::default();
        assert_eq!(setting.window_size, 512);
        assert_eq!(setting.stride, 64);
        assert!(!setting.verbose);
        assert!(setting.validate().is_ok());
    }

    #[test]
    fn test_window_setting_invalid() {
        assert!(WindowSetting::new(0, 64).validate().is_err());
        assert!(WindowSetting::new(512, 0).validate().is_err());
    }

    #[test]
    fn test_window_setting_partial_json() {
        let setting: WindowSetting = serde_json::from_str(r#"{"stride": 32}"#).unwrap();
        assert_eq!(setting.window_size, 512);
        assert_eq!(setting.stride, 32);
    }

    #[test]
    fn test_loader_setting_default_mapping() {
        let setting = LoaderSetting::new("/data/bonn");
        let labels: Vec<&str> = setting.sets.iter().map(|m| m.label.as_str()).collect();
        assert_eq!(labels, vec!["A", "B", "C", "D", "E"]);
        assert_eq!(
            setting.set_path(&setting.sets[0]),
            PathBuf::from("/data/bonn").join("Z")
        );
    }

    #[test]
    fn test_loader_setting_duplicate_label() {
        let mut setting = LoaderSetting::new(".");
        setting.sets.push(SetMapping::new("A", "Z2"));
        assert!(setting.validate().is_err());

        setting.sets = vec![SetMapping::new("", "Z")];
        assert!(setting.validate().is_err());
    }
}
