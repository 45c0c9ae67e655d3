//! Runtime support shared by the dataset tools.
//!
//! - **logger**: tracing setup and a named logger helper
//! - **setting**: JSON settings file
//! - **utility**: data folder paths

pub mod logger;
pub mod setting;
pub mod utility;

pub use logger::{init_logger, LogSetting, Logger, DEBUG, INFO, WARNING};
pub use setting::{DatasetSettings, SETTING_FILENAME};
pub use utility::{get_file_path, get_folder_path, DATA_DIR};
