//! Path helpers for the working data folder.

use std::env;
use std::fs;
use std::path::PathBuf;
use std::sync::LazyLock;

/// Name of the working data folder
pub const DATA_FOLDER_NAME: &str = ".eegdataset";

/// Resolve the working data folder.
///
/// A `.eegdataset` folder in the current directory wins; otherwise the
/// folder is created under the home directory.
fn get_data_dir(folder_name: &str) -> (PathBuf, PathBuf) {
    let cwd = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let data_path = cwd.join(folder_name);

    if data_path.exists() {
        return (cwd, data_path);
    }

    let home_path = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
    let data_path = home_path.join(folder_name);

    if !data_path.exists() {
        let _ = fs::create_dir_all(&data_path);
    }

    (home_path, data_path)
}

/// Working data directory
pub static DATA_DIR: LazyLock<PathBuf> = LazyLock::new(|| {
    let (_, data_dir) = get_data_dir(DATA_FOLDER_NAME);
    data_dir
});

/// Get path for a file in the data folder
pub fn get_file_path(filename: &str) -> PathBuf {
    DATA_DIR.join(filename)
}

/// Get path for a subfolder of the data folder, creating it if needed
pub fn get_folder_path(folder_name: &str) -> PathBuf {
    let folder_path = DATA_DIR.join(folder_name);
    if !folder_path.exists() {
        let _ = fs::create_dir_all(&folder_path);
    }
    folder_path
}
