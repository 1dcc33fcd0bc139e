//! Aidboard - Foreign-Aid Indicator Dashboard Core
//!
//! Loads a delimited indicator table into an immutable in-memory dataset and
//! derives the summary tables consumed by the rendering layer: a
//! single-indicator time series, a donor-country share table with long-tail
//! bucketing, and a year-by-indicator pivot table.

pub mod config;
pub mod data;
pub mod engine;

pub use config::EngineConfig;
pub use data::{Dataset, DatasetLoader, LoadError, Record};
pub use engine::{
    build_donor_shares, build_pivot, build_series, extract_donor_name, run_query,
    AggregatedSeries, DashboardTables, DonorShare, DonorShareRow, FilterSpec, PivotRow,
    PivotTable,
};
