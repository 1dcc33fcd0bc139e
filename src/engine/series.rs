//! Single-Indicator Series Builder
//! Feeds the line and bar chart views.

use std::collections::BTreeMap;

use crate::data::Dataset;

/// Year -> summed value for one indicator, ordered by year ascending.
pub type AggregatedSeries = BTreeMap<i32, f64>;

/// Sum `value` per year for one indicator over an inclusive year range.
///
/// Null values count as 0; years with no contributing records are absent from
/// the result rather than present with zero. An empty filtered set yields an
/// empty series.
pub fn build_series(
    dataset: &Dataset,
    indicator: &str,
    year_low: i32,
    year_high: i32,
) -> AggregatedSeries {
    let mut series = AggregatedSeries::new();
    for record in dataset.records() {
        if record.indicator_name == indicator
            && record.year >= year_low
            && record.year <= year_high
        {
            *series.entry(record.year).or_insert(0.0) += record.value.unwrap_or(0.0);
        }
    }
    series
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Record;

    fn record(year: i32, name: &str, value: Option<f64>) -> Record {
        Record {
            year,
            indicator_name: name.to_string(),
            indicator_code: None,
            value,
        }
    }

    fn sample() -> Dataset {
        Dataset::new(vec![
            record(1990, "Aid", Some(100.0)),
            record(1990, "Aid", Some(50.0)),
            record(1991, "Aid", Some(200.0)),
            record(1992, "Aid", Some(10.0)),
            record(1991, "Debt", Some(999.0)),
        ])
    }

    #[test]
    fn sums_per_year_within_range() {
        let series = build_series(&sample(), "Aid", 1990, 1991);
        assert_eq!(
            series.into_iter().collect::<Vec<_>>(),
            vec![(1990, 150.0), (1991, 200.0)]
        );
    }

    #[test]
    fn range_is_inclusive_both_ends() {
        let series = build_series(&sample(), "Aid", 1991, 1992);
        assert_eq!(series.len(), 2);
        assert_eq!(series[&1992], 10.0);
    }

    #[test]
    fn years_are_ascending_without_duplicates() {
        let series = build_series(&sample(), "Aid", 1800, 2100);
        let years: Vec<i32> = series.keys().copied().collect();
        let mut sorted = years.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(years, sorted);
    }

    #[test]
    fn null_values_count_as_zero() {
        let ds = Dataset::new(vec![
            record(1990, "Aid", Some(7.0)),
            record(1990, "Aid", None),
        ]);
        assert_eq!(build_series(&ds, "Aid", 1990, 1990)[&1990], 7.0);
    }

    #[test]
    fn empty_filter_result_is_empty_series() {
        assert!(build_series(&sample(), "Aid", 2005, 2010).is_empty());
        assert!(build_series(&sample(), "Nope", 1990, 1992).is_empty());
    }

    #[test]
    fn repeated_calls_are_identical() {
        let ds = sample();
        assert_eq!(
            build_series(&ds, "Aid", 1990, 1992),
            build_series(&ds, "Aid", 1990, 1992)
        );
    }
}
