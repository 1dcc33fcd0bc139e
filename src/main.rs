//! Aidboard CLI - headless driver for the dashboard core.
//!
//! Loads an indicator CSV, builds a default filter (first indicator, full
//! year span, latest year for the donor view) and prints the derived tables.
//! Stands in for the rendering layer; chart drawing lives elsewhere.

use anyhow::{bail, Context, Result};
use log::info;
use std::env;
use std::path::Path;

use aidboard::{run_query, DashboardTables, DatasetLoader, EngineConfig, FilterSpec};

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let (csv_path, config_path) = match args.as_slice() {
        [_, csv] => (csv.as_str(), None),
        [_, csv, config] => (csv.as_str(), Some(config.as_str())),
        _ => bail!("usage: aidboard <data.csv> [config.json]"),
    };

    let config = match config_path {
        Some(path) => EngineConfig::from_file(Path::new(path))
            .with_context(|| format!("failed to load config {}", path))?,
        None => EngineConfig::default(),
    };

    let mut loader = DatasetLoader::new();
    let dataset = loader
        .load(Path::new(csv_path))
        .with_context(|| format!("failed to load {}", csv_path))?;

    let Some((min_year, max_year)) = dataset.year_span() else {
        bail!("{} contains no usable rows", csv_path);
    };
    let indicators = dataset.indicator_names();
    let Some(first_indicator) = indicators.first() else {
        bail!("{} contains no indicators", csv_path);
    };
    info!(
        "{} rows, {} indicators, years {}..={}",
        dataset.len(),
        indicators.len(),
        min_year,
        max_year
    );

    let filter = FilterSpec {
        indicator: first_indicator.clone(),
        year_range: (min_year, max_year),
        donor_year: Some(max_year),
        donor_countries: None,
        multi_indicators: indicators.iter().take(3).cloned().collect(),
    };

    let tables = run_query(dataset, &filter, &config);
    print_tables(&tables);
    Ok(())
}

fn print_tables(tables: &DashboardTables) {
    println!("== {} over time ==", tables.indicator);
    for (year, value) in &tables.series {
        println!("{:>6}  {:>18.2}", year, value);
    }

    if let Some(donors) = &tables.donor_shares {
        println!("\n== Donor shares (total {:.2}) ==", donors.total);
        for row in &donors.rows {
            println!("{:<32} {:>14.2}  {:>6.2}%", row.name, row.value, row.share);
        }
    }

    if !tables.pivot.columns.is_empty() {
        println!("\n== Pivot ==");
        println!("{:>6}  {}", "Year", tables.pivot.columns.join(" | "));
        for row in &tables.pivot.rows {
            let cells: Vec<String> = row.values.iter().map(|v| format!("{:.2}", v)).collect();
            println!("{:>6}  {}", row.year, cells.join(" | "));
        }
    }
}
