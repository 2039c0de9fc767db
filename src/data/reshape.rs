use std::collections::BTreeMap;

use super::filter::quantile_sorted;
use super::model::{AnnotatedRecord, FilteredDataset, Month};

// ---------------------------------------------------------------------------
// Per-record annotation for the box plots
// ---------------------------------------------------------------------------

/// Tag every record with its year and three-letter month. One output row per
/// input row.
pub fn annotate(dataset: &FilteredDataset) -> Vec<AnnotatedRecord> {
    dataset
        .records()
        .iter()
        .map(|r| AnnotatedRecord {
            date: r.date,
            value: r.value,
            year: r.year(),
            month: r.month().abbrev(),
        })
        .collect()
}

/// Values grouped by year, ascending.
pub fn by_year(rows: &[AnnotatedRecord]) -> Vec<(i32, Vec<u32>)> {
    let mut groups: BTreeMap<i32, Vec<u32>> = BTreeMap::new();
    for row in rows {
        groups.entry(row.year).or_default().push(row.value);
    }
    groups.into_iter().collect()
}

/// Values grouped into twelve January→December slots. Months without data
/// keep an empty slot so the axis always shows the whole year.
pub fn by_month(rows: &[AnnotatedRecord]) -> Vec<(Month, Vec<u32>)> {
    let mut slots: Vec<(Month, Vec<u32>)> =
        Month::ALL.iter().map(|&m| (m, Vec::new())).collect();
    for row in rows {
        if let Some(slot) = slots.iter_mut().find(|(m, _)| m.abbrev() == row.month) {
            slot.1.push(row.value);
        }
    }
    slots
}

// ---------------------------------------------------------------------------
// Box statistics
// ---------------------------------------------------------------------------

/// Whisker reach in multiples of the inter-quartile range.
pub const WHISKER_IQR: f64 = 1.5;

/// Five-number summary of one box plus the points beyond the whiskers.
#[derive(Debug, Clone, PartialEq)]
pub struct BoxStats {
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    /// Lowest value within `q1 - 1.5 * IQR`.
    pub whisker_low: f64,
    /// Highest value within `q3 + 1.5 * IQR`.
    pub whisker_high: f64,
    pub fliers: Vec<f64>,
}

impl BoxStats {
    /// Summarise a group. Returns `None` for an empty group.
    pub fn from_values(values: &[u32]) -> Option<Self> {
        let mut sorted: Vec<f64> = values.iter().map(|&v| f64::from(v)).collect();
        sorted.sort_by(f64::total_cmp);

        let q1 = quantile_sorted(&sorted, 0.25)?;
        let median = quantile_sorted(&sorted, 0.5)?;
        let q3 = quantile_sorted(&sorted, 0.75)?;
        let reach = WHISKER_IQR * (q3 - q1);
        let (fence_low, fence_high) = (q1 - reach, q3 + reach);

        let mut inside = sorted
            .iter()
            .copied()
            .filter(|v| (fence_low..=fence_high).contains(v));
        let whisker_low = inside.next().unwrap_or(q1);
        let whisker_high = inside.last().unwrap_or(whisker_low);
        let fliers = sorted
            .iter()
            .copied()
            .filter(|&v| v < fence_low || v > fence_high)
            .collect();

        Some(BoxStats {
            q1,
            median,
            q3,
            whisker_low,
            whisker_high,
            fliers,
        })
    }
}
