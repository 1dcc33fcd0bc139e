//! Dataset Module
//! Immutable in-memory representation of the cleaned indicator table.

/// One cleaned row of the source table.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub year: i32,
    pub indicator_name: String,
    pub indicator_code: Option<String>,
    pub value: Option<f64>,
}

/// The cleaned working set, built once by the loader and never mutated.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    records: Vec<Record>,
}

impl Dataset {
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Unique indicator names, sorted. Used by the control layer to populate
    /// its indicator selectors.
    pub fn indicator_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .records
            .iter()
            .map(|r| r.indicator_name.clone())
            .collect();
        names.sort();
        names.dedup();
        names
    }

    /// Inclusive (min, max) year range present in the dataset, or `None` when
    /// the dataset is empty. Used by the control layer for its year slider.
    pub fn year_span(&self) -> Option<(i32, i32)> {
        let mut years = self.records.iter().map(|r| r.year);
        let first = years.next()?;
        Some(years.fold((first, first), |(lo, hi), y| (lo.min(y), hi.max(y))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(year: i32, name: &str, value: f64) -> Record {
        Record {
            year,
            indicator_name: name.to_string(),
            indicator_code: None,
            value: Some(value),
        }
    }

    #[test]
    fn indicator_names_are_unique_and_sorted() {
        let ds = Dataset::new(vec![
            record(1990, "Net ODA", 1.0),
            record(1991, "Aid per capita", 2.0),
            record(1992, "Net ODA", 3.0),
        ]);
        assert_eq!(ds.indicator_names(), vec!["Aid per capita", "Net ODA"]);
    }

    #[test]
    fn year_span_handles_unordered_records() {
        let ds = Dataset::new(vec![
            record(1995, "A", 1.0),
            record(1990, "A", 1.0),
            record(1993, "A", 1.0),
        ]);
        assert_eq!(ds.year_span(), Some((1990, 1995)));
    }

    #[test]
    fn empty_dataset_has_no_span() {
        assert_eq!(Dataset::default().year_span(), None);
    }
}
