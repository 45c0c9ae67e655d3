//! Sliding-window augmentation.
//!
//! Every example of every set is cut into overlapping windows of a fixed
//! length. Window `i` of a row covers `[i * stride, i * stride + window_size)`.

use crate::system::logger::Logger;

use super::error::Result;
use super::object::{Dataset, Table};
use super::setting::WindowSetting;

/// Number of windows that fit in a row of `total_points` points.
///
/// Rows shorter than one window produce no windows.
pub fn window_count(total_points: usize, window_size: usize, stride: usize) -> usize {
    if window_size == 0 || stride == 0 || total_points < window_size {
        return 0;
    }
    (total_points - window_size) / stride + 1
}

/// Expand each row of `table` into its windows.
///
/// Output rows are ordered by source row, then by window start.
pub fn augment_table(table: &Table, setting: &WindowSetting) -> Table {
    let WindowSetting { window_size, stride, .. } = *setting;
    let iterations = window_count(table.width(), window_size, stride);

    let mut augmented = Table::with_capacity(window_size, table.rows() * iterations);
    for row in table.iter_rows() {
        for i in 0..iterations {
            let start = i * stride;
            augmented.push_row(&row[start..start + window_size]);
        }
    }
    augmented
}

/// Build the windowed dataset for every set in `raw_dataset`.
///
/// Sets that yield no windows are kept as empty tables.
pub fn create_augmented_dataset(raw_dataset: &Dataset, setting: &WindowSetting) -> Result<Dataset> {
    setting.validate()?;

    let logger = Logger::new("Augment");
    let mut augmented = Dataset::new();

    for (label, table) in raw_dataset {
        if setting.verbose {
            logger.info(&format!("Processing set {}", label));
        }

        let windows = augment_table(table, setting);
        logger.debug(&format!(
            "Set {}: {} examples x {} points -> {} windows",
            label,
            table.rows(),
            table.width(),
            windows.rows()
        ));
        augmented.insert(label.clone(), windows);
    }

    if setting.verbose {
        logger.info("Done.");
    }
    Ok(augmented)
}
