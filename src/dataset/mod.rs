//! Raw recording loader and sliding-window augmentation.

pub mod augment;
pub mod constant;
pub mod error;
pub mod object;
pub mod reader;
pub mod setting;

pub use augment::{augment_table, create_augmented_dataset, window_count};
pub use constant::{DEFAULT_SET_DIRECTORIES, DEFAULT_STRIDE, DEFAULT_WINDOW_SIZE};
pub use error::{DatasetError, Result};
pub use object::{Dataset, Table};
pub use reader::{list_example_files, load_series, parse_series, read_raw_dataset, RawDatasetLoader};
pub use setting::{LoaderSetting, SetMapping, WindowSetting};
