//! Pivot/Reshape Builder
//! Aligns multiple indicator series into a year-indexed wide table for the
//! stacked area view.

use std::collections::{BTreeMap, HashMap};

use crate::data::Dataset;

/// One row of the pivot table. `values` is index-aligned with the table's
/// column list.
#[derive(Debug, Clone, PartialEq)]
pub struct PivotRow {
    pub year: i32,
    pub values: Vec<f64>,
}

/// Year-indexed wide table: one row per distinct year (ascending), one column
/// per requested indicator (caller order). Every cell exists; missing
/// (year, indicator) combinations hold 0.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PivotTable {
    pub columns: Vec<String>,
    pub rows: Vec<PivotRow>,
}

impl PivotTable {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Sum `value` per (year, indicator) pair over an inclusive year range and
/// reshape into a wide table. An empty indicator list or an empty filtered
/// set yields an empty table, never an error.
pub fn build_pivot(
    dataset: &Dataset,
    indicators: &[String],
    year_low: i32,
    year_high: i32,
) -> PivotTable {
    if indicators.is_empty() {
        return PivotTable::default();
    }

    // Column order follows the caller-supplied list, not discovery order.
    let column_index: HashMap<&str, usize> = indicators
        .iter()
        .enumerate()
        .map(|(i, name)| (name.as_str(), i))
        .collect();

    let mut by_year: BTreeMap<i32, Vec<f64>> = BTreeMap::new();
    for record in dataset.records() {
        if record.year < year_low || record.year > year_high {
            continue;
        }
        let Some(&col) = column_index.get(record.indicator_name.as_str()) else {
            continue;
        };
        let row = by_year
            .entry(record.year)
            .or_insert_with(|| vec![0.0; indicators.len()]);
        row[col] += record.value.unwrap_or(0.0);
    }

    PivotTable {
        columns: indicators.to_vec(),
        rows: by_year
            .into_iter()
            .map(|(year, values)| PivotRow { year, values })
            .collect(),
    }
}
