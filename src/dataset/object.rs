//! Table and dataset containers.

use serde::{Deserialize, Serialize};

use super::error::{DatasetError, Result};

#[cfg(feature = "frame")]
use polars::prelude::*;

/// Dense row-major numeric table with a fixed row width.
///
/// Invariant: `data.len() == rows * width`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "TableData")]
pub struct Table {
    width: usize,
    rows: usize,
    data: Vec<f64>,
}

/// Unchecked wire form of a `Table`
#[derive(Deserialize)]
struct TableData {
    width: usize,
    rows: usize,
    data: Vec<f64>,
}

impl TryFrom<TableData> for Table {
    type Error = DatasetError;

    fn try_from(raw: TableData) -> Result<Self> {
        let expected = raw.width.checked_mul(raw.rows);
        if expected != Some(raw.data.len()) {
            return Err(DatasetError::invalid_parameter(format!(
                "table of {} rows x {} points cannot hold {} values",
                raw.rows,
                raw.width,
                raw.data.len()
            )));
        }
        Ok(Self {
            width: raw.width,
            rows: raw.rows,
            data: raw.data,
        })
    }
}

impl Table {
    /// Create an empty table with the given row width.
    pub fn empty(width: usize) -> Self {
        Self {
            width,
            rows: 0,
            data: Vec::new(),
        }
    }

    /// Create an empty table with room for `rows` rows.
    pub fn with_capacity(width: usize, rows: usize) -> Self {
        Self {
            width,
            rows: 0,
            data: Vec::with_capacity(width * rows),
        }
    }

    /// Build a table from rows, rejecting rows of differing length.
    ///
    /// `label` is only used for error reporting.
    pub fn from_rows<R: AsRef<[f64]>>(label: &str, rows: &[R]) -> Result<Self> {
        let width = rows.first().map(|r| r.as_ref().len()).unwrap_or(0);
        let mut table = Self::with_capacity(width, rows.len());

        for (idx, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != width {
                return Err(DatasetError::RaggedRow {
                    label: label.to_string(),
                    row: idx,
                    source_name: format!("row {}", idx),
                    expected: width,
                    actual: row.len(),
                });
            }
            table.push_row(row);
        }

        Ok(table)
    }

    /// Append a row. The caller guarantees `row.len() == self.width()`.
    pub(crate) fn push_row(&mut self, row: &[f64]) {
        debug_assert_eq!(row.len(), self.width);
        self.data.extend_from_slice(row);
        self.rows += 1;
    }

    /// Number of points per row
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows == 0
    }

    /// Get a row by index.
    pub fn row(&self, idx: usize) -> Option<&[f64]> {
        if idx >= self.rows {
            return None;
        }
        let start = idx * self.width;
        Some(&self.data[start..start + self.width])
    }

    /// Iterate rows in order.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[f64]> + '_ {
        (0..self.rows).map(move |idx| &self.data[idx * self.width..(idx + 1) * self.width])
    }

    /// Copy rows out into nested vectors.
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        self.iter_rows().map(|r| r.to_vec()).collect()
    }

    /// Convert to a polars DataFrame with one column per time point.
    #[cfg(feature = "frame")]
    pub fn to_dataframe(&self, prefix: &str) -> PolarsResult<DataFrame> {
        let columns: Vec<Column> = (0..self.width)
            .map(|c| {
                let values: Vec<f64> = self.iter_rows().map(|row| row[c]).collect();
                Column::new(format!("{}{}", prefix, c).into(), values)
            })
            .collect();
        DataFrame::new(columns)
    }
}

/// Mapping from set label to table, iterated in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "DatasetData")]
pub struct Dataset {
    sets: Vec<(String, Table)>,
}

/// Unchecked wire form of a `Dataset`
#[derive(Deserialize)]
struct DatasetData {
    sets: Vec<(String, Table)>,
}

impl TryFrom<DatasetData> for Dataset {
    type Error = DatasetError;

    fn try_from(raw: DatasetData) -> Result<Self> {
        let mut dataset = Dataset::new();
        for (label, table) in raw.sets {
            if dataset.get(&label).is_some() {
                return Err(DatasetError::invalid_parameter(format!(
                    "set {} appears more than once",
                    label
                )));
            }
            dataset.insert(label, table);
        }
        Ok(dataset)
    }
}

impl Dataset {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a table, replacing any existing table for the label in place.
    pub fn insert(&mut self, label: impl Into<String>, table: Table) -> Option<Table> {
        let label = label.into();
        match self.sets.iter_mut().find(|(l, _)| *l == label) {
            Some((_, existing)) => Some(std::mem::replace(existing, table)),
            None => {
                self.sets.push((label, table));
                None
            }
        }
    }

    pub fn get(&self, label: &str) -> Option<&Table> {
        self.sets.iter().find(|(l, _)| l == label).map(|(_, t)| t)
    }

    /// Number of sets
    pub fn len(&self) -> usize {
        self.sets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }

    pub fn labels(&self) -> Vec<String> {
        self.sets.iter().map(|(l, _)| l.clone()).collect()
    }

    /// Total number of rows across all sets
    pub fn total_rows(&self) -> usize {
        self.sets.iter().map(|(_, t)| t.rows()).sum()
    }

    /// (label, rows, width) for every set.
    pub fn summary(&self) -> Vec<(String, usize, usize)> {
        self.sets
            .iter()
            .map(|(label, table)| (label.clone(), table.rows(), table.width()))
            .collect()
    }

    /// Stack all sets into one DataFrame with a leading `label` column.
    ///
    /// Sets of differing width are aligned with nulls.
    #[cfg(feature = "frame")]
    pub fn to_dataframe(&self) -> PolarsResult<DataFrame> {
        let mut frames = Vec::with_capacity(self.sets.len());
        for (label, table) in &self.sets {
            let mut df = table.to_dataframe("t")?;
            let labels = Column::new("label".into(), vec![label.as_str(); table.rows()]);
            df.insert_column(0, labels)?;
            frames.push(df);
        }

        if frames.is_empty() {
            return Ok(DataFrame::empty());
        }
        polars::functions::concat_df_diagonal(&frames)
    }
}

/// Iterator over `(label, table)` pairs of a dataset
pub struct Iter<'a> {
    inner: std::slice::Iter<'a, (String, Table)>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a String, &'a Table);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(label, table)| (label, table))
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = (&'a String, &'a Table);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        Iter {
            inner: self.sets.iter(),
        }
    }
}
