//! Query/Transform engine - derives the chart-ready tables from the dataset

mod donors;
mod pivot;
mod series;

pub use donors::{
    build_donor_shares, extract_donor_name, is_donor_flow_label, DonorShare, DonorShareRow,
    DONOR_FLOW_PHRASE, OTHERS_LABEL,
};
pub use pivot::{build_pivot, PivotRow, PivotTable};
pub use series::{build_series, AggregatedSeries};

use log::debug;
use std::collections::BTreeSet;

use crate::config::EngineConfig;
use crate::data::Dataset;

/// Filter parameters captured by the control layer for one query.
#[derive(Debug, Clone, Default)]
pub struct FilterSpec {
    /// Indicator for the line/bar series.
    pub indicator: String,
    /// Inclusive year range for the series and pivot views.
    pub year_range: (i32, i32),
    /// Year selected for the donor-share view; `None` skips that view.
    pub donor_year: Option<i32>,
    /// Optional override of the configured donor allow-list.
    pub donor_countries: Option<BTreeSet<String>>,
    /// Indicators for the stacked-area pivot, in display order.
    pub multi_indicators: Vec<String>,
}

/// The derived tables one filter change hands to the rendering layer.
#[derive(Debug, Clone)]
pub struct DashboardTables {
    /// Indicator label the renderer uses for chart titles.
    pub indicator: String,
    pub series: AggregatedSeries,
    pub donor_shares: Option<DonorShare>,
    pub pivot: PivotTable,
}

/// Evaluate a whole `FilterSpec` against the dataset in one pass per view.
pub fn run_query(dataset: &Dataset, filter: &FilterSpec, config: &EngineConfig) -> DashboardTables {
    let (year_low, year_high) = filter.year_range;
    debug!(
        "query: indicator={:?} years={}..={} donor_year={:?}",
        filter.indicator, year_low, year_high, filter.donor_year
    );

    let series = build_series(dataset, &filter.indicator, year_low, year_high);

    let donor_shares = filter.donor_year.map(|year| {
        let allow_list: BTreeSet<String> = match &filter.donor_countries {
            Some(selected) => selected.clone(),
            None => config.known_donors.iter().cloned().collect(),
        };
        build_donor_shares(dataset, year, &allow_list, config.long_tail_threshold)
    });

    let pivot = build_pivot(dataset, &filter.multi_indicators, year_low, year_high);

    DashboardTables {
        indicator: filter.indicator.clone(),
        series,
        donor_shares,
        pivot,
    }
}
