//! Donor Share Builder
//! Extracts donor countries from free-text indicator labels and aggregates
//! their shares for the pie chart view, bucketing the long tail into an
//! "Others" row.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::{BTreeMap, BTreeSet};

use crate::data::Dataset;

/// Phrase identifying bilateral-aid indicator labels, matched case-insensitively.
pub const DONOR_FLOW_PHRASE: &str = "Net bilateral aid flows from DAC donors";

/// Name of the synthetic long-tail bucket row.
pub const OTHERS_LABEL: &str = "Others (<1%)";

/// Donor name sits between "DAC donors," and the next "(", e.g.
/// "Net bilateral aid flows from DAC donors, France (current US$)".
static DONOR_NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)DAC donors,\s*([^(]*?)\s*\(").expect("donor pattern is valid"));

static DONOR_FLOW_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!("(?i){}", regex::escape(DONOR_FLOW_PHRASE)))
        .expect("phrase pattern is valid")
});

/// One row of the donor-share table.
#[derive(Debug, Clone, PartialEq)]
pub struct DonorShareRow {
    pub name: String,
    pub value: f64,
    /// Percentage of the table total, in [0, 100].
    pub share: f64,
}

/// Donor-share table for one year. Row order is deterministic but carries no
/// presentation contract.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DonorShare {
    pub rows: Vec<DonorShareRow>,
    pub total: f64,
}

/// True when the label is a bilateral-aid-flow indicator.
pub fn is_donor_flow_label(label: &str) -> bool {
    DONOR_FLOW_RE.is_match(label)
}

/// Pull the donor-country name out of an indicator label: the text after
/// "DAC donors," up to the next "(", trimmed. `None` when the label does not
/// follow that shape.
pub fn extract_donor_name(label: &str) -> Option<String> {
    DONOR_NAME_RE
        .captures(label)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .filter(|name| !name.is_empty())
}

/// Aggregate bilateral-aid values per donor for one exact year and compute
/// percentage shares, folding donors below `threshold` percent into a single
/// "Others (<1%)" row.
///
/// Labels where name extraction fails are tagged "Unknown" and fall out via
/// the allow-list; a zero total defines every share as 0 rather than failing.
pub fn build_donor_shares(
    dataset: &Dataset,
    year: i32,
    known_donors: &BTreeSet<String>,
    threshold: f64,
) -> DonorShare {
    let mut sums: BTreeMap<String, f64> = BTreeMap::new();
    for record in dataset.records() {
        if record.year != year || !is_donor_flow_label(&record.indicator_name) {
            continue;
        }
        let donor =
            extract_donor_name(&record.indicator_name).unwrap_or_else(|| "Unknown".to_string());
        if !known_donors.contains(&donor) {
            continue;
        }
        *sums.entry(donor).or_insert(0.0) += record.value.unwrap_or(0.0);
    }

    let total: f64 = sums.values().sum();
    let share_of = |value: f64| if total == 0.0 { 0.0 } else { value / total * 100.0 };

    let mut rows = Vec::with_capacity(sums.len());
    let mut others_value = 0.0;
    let mut folded_any = false;
    for (name, value) in sums {
        let share = share_of(value);
        if share < threshold {
            others_value += value;
            folded_any = true;
        } else {
            rows.push(DonorShareRow { name, value, share });
        }
    }
    if folded_any {
        rows.push(DonorShareRow {
            name: OTHERS_LABEL.to_string(),
            value: others_value,
            share: share_of(others_value),
        });
    }

    DonorShare { rows, total }
}
