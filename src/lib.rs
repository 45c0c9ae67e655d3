//! EEG Dataset - raw recording loader and sliding-window augmentation
//!
//! This crate provides:
//!
//! - Loading of labeled recording sets (one directory per set, one text file
//!   per example) into dense tables
//! - Sliding-window augmentation of every example into fixed-length windows
//! - JSON settings and tracing-based logging
//! - DataFrame export (with `frame` feature)
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use eeg_dataset::{create_augmented_dataset, read_raw_dataset, LoaderSetting, WindowSetting};
//!
//! fn main() -> eeg_dataset::Result<()> {
//!     let raw = read_raw_dataset(&LoaderSetting::new("./bonn"))?;
//!     let augmented = create_augmented_dataset(&raw, &WindowSetting::default())?;
//!     for (label, rows, width) in augmented.summary() {
//!         println!("{}: {} x {}", label, rows, width);
//!     }
//!     Ok(())
//! }
//! ```

pub mod dataset;
pub mod system;

// Re-export commonly used types
pub use dataset::{
    augment_table, create_augmented_dataset, read_raw_dataset, window_count, Dataset,
    DatasetError, LoaderSetting, RawDatasetLoader, Result, SetMapping, Table, WindowSetting,
};
pub use system::{init_logger, DatasetSettings, LogSetting, Logger};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
