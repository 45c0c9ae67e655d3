//! Error types for dataset loading and augmentation.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while reading recordings or building windowed datasets.
#[derive(Debug, Error)]
pub enum DatasetError {
    /// A windowing or loader parameter is out of range.
    #[error("Invalid parameter: {message}")]
    InvalidParameter {
        /// Description of what's wrong with the parameter
        message: String,
    },

    /// A row does not match the width of the rows before it.
    #[error("Ragged row in set {label}: row {row} ({source_name}) has {actual} points, expected {expected}")]
    RaggedRow {
        /// Set label the row belongs to
        label: String,
        /// Zero-based row index within the set
        row: usize,
        /// File or origin of the row
        source_name: String,
        /// Width established by the first row
        expected: usize,
        /// Width of the offending row
        actual: usize,
    },

    /// A configured set directory does not exist.
    #[error("Set {label}: directory {path:?} not found")]
    MissingDirectory {
        /// Set label
        label: String,
        /// Expected directory path
        path: PathBuf,
    },

    /// Underlying file system failure.
    #[error("I/O error on {path:?}: {source}")]
    Io {
        /// Path being accessed
        path: PathBuf,
        /// Original error
        #[source]
        source: std::io::Error,
    },

    /// A token in a recording could not be parsed as a number.
    #[error("Parse error at line {line}: {token:?} is not a number")]
    Parse {
        /// 1-based line number
        line: usize,
        /// Offending token
        token: String,
    },

    /// Parsed text contains no data points.
    #[error("Series contains no data points")]
    EmptySeries,

    /// A recording file contains no data points.
    #[error("Recording {path:?} contains no data points")]
    EmptyRecording {
        /// Recording file
        path: PathBuf,
    },

    /// Settings file could not be read or written.
    #[error("Config error: {0}")]
    Config(String),
}

impl DatasetError {
    /// Create an InvalidParameter error.
    pub fn invalid_parameter(message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            message: message.into(),
        }
    }

    /// Create an Io error for a path.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

impl From<serde_json::Error> for DatasetError {
    fn from(e: serde_json::Error) -> Self {
        Self::Config(e.to_string())
    }
}

/// Result alias for dataset operations.
pub type Result<T> = std::result::Result<T, DatasetError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DatasetError::invalid_parameter("stride must be positive");
        assert_eq!(err.to_string(), "Invalid parameter: stride must be positive");

        let err = DatasetError::Parse {
            line: 3,
            token: "abc".to_string(),
        };
        assert_eq!(err.to_string(), "Parse error at line 3: \"abc\" is not a number");
    }

    #[test]
    fn test_ragged_row_message() {
        let err = DatasetError::RaggedRow {
            label: "A".to_string(),
            row: 2,
            source_name: "Z003.txt".to_string(),
            expected: 4097,
            actual: 4096,
        };
        let msg = err.to_string();
        assert!(msg.contains("set A"));
        assert!(msg.contains("Z003.txt"));
        assert!(msg.contains("expected 4097"));
    }
}
