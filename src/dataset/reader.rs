//! Raw recording loader.
//!
//! Each set lives in its own directory under the configured root, one text
//! file per example. A file holds whitespace-delimited numbers, usually one
//! per line.

use std::fs;
use std::path::{Path, PathBuf};

use crate::system::logger::Logger;

use super::error::{DatasetError, Result};
use super::object::{Dataset, Table};
use super::setting::{LoaderSetting, SetMapping};

/// Parse a whitespace-delimited numeric series.
pub fn parse_series(text: &str) -> Result<Vec<f64>> {
    let mut values = Vec::new();
    for (line_idx, line) in text.lines().enumerate() {
        for token in line.split_whitespace() {
            let value = token.parse::<f64>().map_err(|_| DatasetError::Parse {
                line: line_idx + 1,
                token: token.to_string(),
            })?;
            values.push(value);
        }
    }

    if values.is_empty() {
        return Err(DatasetError::EmptySeries);
    }
    Ok(values)
}

/// Loader for a directory tree of labeled recordings
pub struct RawDatasetLoader {
    setting: LoaderSetting,
    logger: Logger,
}

impl RawDatasetLoader {
    pub fn new(setting: LoaderSetting) -> Self {
        Self {
            setting,
            logger: Logger::new("RawLoader"),
        }
    }

    /// Load every configured set.
    pub fn load(&self) -> Result<Dataset> {
        self.setting.validate()?;

        let mut dataset = Dataset::new();
        for mapping in &self.setting.sets {
            let table = self.load_set(mapping)?;
            self.logger.info(&format!(
                "Loaded set {} from {:?}: {} examples x {} points",
                mapping.label,
                self.setting.set_path(mapping),
                table.rows(),
                table.width()
            ));
            dataset.insert(mapping.label.clone(), table);
        }
        Ok(dataset)
    }

    /// Load a single set into a table, one row per file.
    pub fn load_set(&self, mapping: &SetMapping) -> Result<Table> {
        let dir = self.setting.set_path(mapping);
        if !dir.is_dir() {
            return Err(DatasetError::MissingDirectory {
                label: mapping.label.clone(),
                path: dir,
            });
        }

        let files = list_example_files(&dir)?;
        let mut table: Option<Table> = None;

        for (row, path) in files.iter().enumerate() {
            let series = load_series(path)?;
            let table = table.get_or_insert_with(|| Table::with_capacity(series.len(), files.len()));

            if series.len() != table.width() {
                return Err(DatasetError::RaggedRow {
                    label: mapping.label.clone(),
                    row,
                    source_name: file_name(path),
                    expected: table.width(),
                    actual: series.len(),
                });
            }
            table.push_row(&series);
        }

        if files.is_empty() {
            self.logger.warn(&format!("Set {}: no recordings in {:?}", mapping.label, dir));
        }
        Ok(table.unwrap_or_else(|| Table::empty(0)))
    }
}

/// Read the raw dataset described by `setting`.
pub fn read_raw_dataset(setting: &LoaderSetting) -> Result<Dataset> {
    RawDatasetLoader::new(setting.clone()).load()
}

/// Regular files in `dir`, sorted by file name.
pub fn list_example_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir).map_err(|e| DatasetError::io(dir, e))?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| DatasetError::io(dir, e))?;
        let path = entry.path();
        if path.is_file() {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Read and parse one recording file.
pub fn load_series(path: &Path) -> Result<Vec<f64>> {
    let text = fs::read_to_string(path).map_err(|e| DatasetError::io(path, e))?;
    parse_series(&text).map_err(|e| match e {
        DatasetError::EmptySeries => DatasetError::EmptyRecording {
            path: path.to_path_buf(),
        },
        other => other,
    })
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_set(root: &Path, dir: &str, files: &[(&str, &str)]) {
        let path = root.join(dir);
        fs::create_dir_all(&path).unwrap();
        for (name, content) in files {
            fs::write(path.join(name), content).unwrap();
        }
    }

    #[test]
    fn test_parse_series() {
        assert_eq!(parse_series("1\n-2\n3.5\n").unwrap(), vec![1.0, -2.0, 3.5]);
        assert_eq!(parse_series("  4 5\t6\r\n7 ").unwrap(), vec![4.0, 5.0, 6.0, 7.0]);
        assert_eq!(parse_series("1e3\n").unwrap(), vec![1000.0]);
    }

    #[test]
    fn test_parse_series_errors() {
        assert!(matches!(parse_series(""), Err(DatasetError::EmptySeries)));
        assert!(matches!(parse_series(" \n\n"), Err(DatasetError::EmptySeries)));

        match parse_series("1\n2\nx3\n") {
            Err(DatasetError::Parse { line, token }) => {
                assert_eq!(line, 3);
                assert_eq!(token, "x3");
            }
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_sorted_by_file_name() {
        let tmp = TempDir::new().unwrap();
        write_set(tmp.path(), "Z", &[("Z002.txt", "4\n5\n6\n"), ("Z001.txt", "1\n2\n3\n")]);

        let setting = LoaderSetting {
            root: tmp.path().to_path_buf(),
            sets: vec![SetMapping::new("A", "Z")],
        };
        let dataset = read_raw_dataset(&setting).unwrap();

        let table = dataset.get("A").unwrap();
        assert_eq!(table.to_rows(), vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]);
    }

    #[test]
    fn test_load_default_mapping() {
        let tmp = TempDir::new().unwrap();
        for (_, dir) in crate::dataset::constant::DEFAULT_SET_DIRECTORIES {
            write_set(tmp.path(), dir, &[("001.txt", "1\n2\n"), ("002.txt", "3\n4\n")]);
        }

        let dataset = RawDatasetLoader::new(LoaderSetting::new(tmp.path())).load().unwrap();
        assert_eq!(dataset.labels(), vec!["A", "B", "C", "D", "E"]);
        assert_eq!(dataset.total_rows(), 10);
    }

    #[test]
    fn test_load_keeps_configured_order() {
        let tmp = TempDir::new().unwrap();
        write_set(tmp.path(), "S", &[("S001.txt", "1\n2\n")]);
        write_set(tmp.path(), "Z", &[("Z001.txt", "3\n4\n5\n")]);

        let setting = LoaderSetting {
            root: tmp.path().to_path_buf(),
            sets: vec![SetMapping::new("E", "S"), SetMapping::new("A", "Z")],
        };
        let dataset = read_raw_dataset(&setting).unwrap();
        assert_eq!(dataset.labels(), vec!["E", "A"]);
        assert_eq!(
            dataset.summary(),
            vec![("E".to_string(), 1, 2), ("A".to_string(), 1, 3)]
        );
    }

    #[test]
    fn test_ragged_set_rejected() {
        let tmp = TempDir::new().unwrap();
        write_set(tmp.path(), "O", &[("O001.txt", "1\n2\n3\n"), ("O002.txt", "1\n2\n")]);

        let setting = LoaderSetting {
            root: tmp.path().to_path_buf(),
            sets: vec![SetMapping::new("B", "O")],
        };
        match read_raw_dataset(&setting) {
            Err(DatasetError::RaggedRow { label, row, source_name, expected, actual }) => {
                assert_eq!(label, "B");
                assert_eq!(row, 1);
                assert_eq!(source_name, "O002.txt");
                assert_eq!(expected, 3);
                assert_eq!(actual, 2);
            }
            other => panic!("expected ragged row error, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_directory() {
        let tmp = TempDir::new().unwrap();
        let setting = LoaderSetting {
            root: tmp.path().to_path_buf(),
            sets: vec![SetMapping::new("C", "N")],
        };
        assert!(matches!(
            read_raw_dataset(&setting),
            Err(DatasetError::MissingDirectory { .. })
        ));
    }

    #[test]
    fn test_empty_set_directory() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join("F")).unwrap();
        // subdirectories are not examples
        fs::create_dir_all(tmp.path().join("F").join("nested")).unwrap();

        let setting = LoaderSetting {
            root: tmp.path().to_path_buf(),
            sets: vec![SetMapping::new("D", "F")],
        };
        let dataset = read_raw_dataset(&setting).unwrap();
        assert!(dataset.get("D").unwrap().is_empty());
    }

    #[test]
    fn test_empty_file_rejected() {
        let tmp = TempDir::new().unwrap();
        write_set(tmp.path(), "S", &[("S001.txt", "")]);

        let setting = LoaderSetting {
            root: tmp.path().to_path_buf(),
            sets: vec![SetMapping::new("E", "S")],
        };
        let err = read_raw_dataset(&setting).unwrap_err();
        assert!(matches!(err, DatasetError::EmptyRecording { .. }));
        assert!(err.to_string().contains("S001.txt"));
    }
}
