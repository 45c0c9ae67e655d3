//! EEG Dataset - command line entry point
//!
//! Usage: `eeg_dataset_app [settings.json] [root_dir]`
//!
//! Loads the raw recording sets, builds the windowed dataset and logs a
//! per-set summary.

use std::env;
use std::error::Error;
use std::path::PathBuf;

use tracing::{info, warn};

use eeg_dataset::system::DatasetSettings;
use eeg_dataset::{create_augmented_dataset, init_logger, RawDatasetLoader};

fn main() -> Result<(), Box<dyn Error>> {
    let mut args = env::args().skip(1);
    let explicit_path = args.next().map(PathBuf::from);

    // An explicit settings file must load; the default one is optional.
    let (mut settings, source) =
        DatasetSettings::resolve(explicit_path.as_deref(), &DatasetSettings::default_path())
            .map_err(|e| format!("Failed to load settings: {}", e))?;
    if let Some(root) = args.next() {
        settings.loader.root = PathBuf::from(root);
    }
    settings.validate()?;

    init_logger(&settings.log);

    println!("EEG Dataset {}", eeg_dataset::VERSION);
    info!("Version: {}", eeg_dataset::VERSION);
    info!("Rust version: {}", rustc_version_runtime::version());
    match source {
        Some(path) => info!("Loaded settings from {:?}", path),
        None => warn!(
            "No settings file at {:?}, using defaults",
            DatasetSettings::default_path()
        ),
    }

    let raw_dataset = RawDatasetLoader::new(settings.loader.clone()).load()?;
    for (label, rows, width) in raw_dataset.summary() {
        info!("Raw set {}: {} examples x {} points", label, rows, width);
    }

    let augmented = create_augmented_dataset(&raw_dataset, &settings.window)?;
    for (label, rows, width) in augmented.summary() {
        info!("Augmented set {}: {} windows x {} points", label, rows, width);
    }
    info!(
        "Total windows: {} (window_size={}, stride={})",
        augmented.total_rows(),
        settings.window.window_size,
        settings.window.stride
    );

    Ok(())
}
