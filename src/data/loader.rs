//! CSV Dataset Loader Module
//! Loads the source table once with Polars, cleans it into a `Dataset`, and
//! caches the result per source path.

use log::{debug, info};
use polars::prelude::*;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

use super::dataset::{Dataset, Record};

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Failed to load CSV: {0}")]
    Csv(#[from] PolarsError),
    #[error("Source has no parseable columns")]
    NoColumns,
    #[error("Missing required column: {0}")]
    MissingColumn(String),
}

/// Normalize a header cell into a stable column key: surrounding whitespace
/// trimmed, internal whitespace runs collapsed to a single underscore.
fn normalize_column(name: &str) -> String {
    name.split_whitespace().collect::<Vec<_>>().join("_")
}

/// Render a cell as plain text, `None` when the cell is null.
fn cell_text(series: &Series, idx: usize) -> Option<String> {
    let value = series.get(idx).ok()?;
    if value.is_null() {
        return None;
    }
    Some(value.to_string().trim_matches('"').trim().to_string())
}

/// Coerce a cell to an integer year. Accepts integers formatted as floats
/// ("1990.0"); non-numeric text yields `None` and the row is dropped.
fn coerce_year(series: &Series, idx: usize) -> Option<i32> {
    let text = cell_text(series, idx)?;
    let parsed: f64 = text.parse().ok()?;
    if !parsed.is_finite() {
        return None;
    }
    Some(parsed as i32)
}

fn coerce_value(series: &Series, idx: usize) -> Option<f64> {
    let text = cell_text(series, idx)?;
    text.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Loads and cleans CSV sources, keeping one `Dataset` per source path.
///
/// The cache is keyed by source identity and has no eviction: the loader is
/// the single source of truth, and callers re-invoke `load` on source change.
#[derive(Default)]
pub struct DatasetLoader {
    cache: HashMap<PathBuf, Dataset>,
}

impl DatasetLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a CSV source, returning the cached `Dataset` when this path has
    /// been loaded before.
    pub fn load(&mut self, path: &Path) -> Result<&Dataset, LoadError> {
        match self.cache.entry(path.to_path_buf()) {
            Entry::Occupied(entry) => Ok(entry.into_mut()),
            Entry::Vacant(entry) => {
                let dataset = read_dataset(path)?;
                Ok(entry.insert(dataset))
            }
        }
    }
}

/// One-shot read: parse the CSV, normalize headers, coerce years, drop
/// uncoercible rows.
fn read_dataset(path: &Path) -> Result<Dataset, LoadError> {
    let df = LazyCsvReader::new(path)
        .with_infer_schema_length(Some(10000))
        .with_ignore_errors(true)
        .finish()?
        .collect()?;

    if df.width() == 0 {
        return Err(LoadError::NoColumns);
    }

    let normalized: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|name| normalize_column(name))
        .collect();

    // The time column is the one literally named "Year"; when absent, fall
    // back to the first column. The fallback is a documented quirk of the
    // source application and is preserved as-is.
    let year_idx = normalized.iter().position(|c| c == "Year").unwrap_or(0);
    let name_idx = normalized
        .iter()
        .position(|c| c == "Indicator_Name")
        .ok_or_else(|| LoadError::MissingColumn("Indicator Name".to_string()))?;
    let value_idx = normalized
        .iter()
        .position(|c| c == "Value")
        .ok_or_else(|| LoadError::MissingColumn("Value".to_string()))?;
    let code_idx = normalized.iter().position(|c| c == "Indicator_Code");

    let columns = df.get_columns();
    let year_series = columns[year_idx].as_materialized_series();
    let name_series = columns[name_idx].as_materialized_series();
    let value_series = columns[value_idx].as_materialized_series();
    let code_series = code_idx.map(|i| columns[i].as_materialized_series());

    let mut records = Vec::with_capacity(df.height());
    let mut dropped = 0usize;

    for i in 0..df.height() {
        let Some(year) = coerce_year(year_series, i) else {
            debug!("dropping row {}: unparsable year", i);
            dropped += 1;
            continue;
        };

        records.push(Record {
            year,
            indicator_name: cell_text(name_series, i).unwrap_or_default(),
            indicator_code: code_series.and_then(|s| cell_text(s, i)),
            value: coerce_value(value_series, i),
        });
    }

    info!(
        "loaded {} ({} rows kept, {} dropped for unparsable year)",
        path.display(),
        records.len(),
        dropped
    );

    Ok(Dataset::new(records))
}
