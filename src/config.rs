//! Engine Configuration Module
//! Externalized donor allow-list and long-tail threshold.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config file: {0}")]
    Json(#[from] serde_json::Error),
}

/// DAC donor countries/institutions recognized by the donor-share view.
///
/// This is data, not logic: the default mirrors the donor set present in the
/// World Bank aid-effectiveness table, and deployments can replace it through
/// a config file.
pub const DEFAULT_DAC_DONORS: &[&str] = &[
    "Australia",
    "Austria",
    "Belgium",
    "Canada",
    "Czech Republic",
    "Denmark",
    "European Union institutions",
    "Finland",
    "France",
    "Germany",
    "Greece",
    "Iceland",
    "Ireland",
    "Italy",
    "Japan",
    "Korea, Rep.",
    "Luxembourg",
    "Netherlands",
    "New Zealand",
    "Norway",
    "Poland",
    "Portugal",
    "Slovak Republic",
    "Slovenia",
    "Spain",
    "Sweden",
    "Switzerland",
    "United Kingdom",
    "United States",
];

/// Tunable settings for the query engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Share threshold (in percent) below which a donor is folded into the
    /// synthetic "Others" row of the donor-share table.
    pub long_tail_threshold: f64,
    /// Donor names accepted by the donor-share view.
    pub known_donors: Vec<String>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            long_tail_threshold: 1.0,
            known_donors: DEFAULT_DAC_DONORS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl EngineConfig {
    /// Load settings from a JSON file. Missing fields fall back to defaults.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }
}
