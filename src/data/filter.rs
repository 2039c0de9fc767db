use crate::error::{DataError, Result};

use super::model::{FilteredDataset, PageViews, TrimBounds};

// ---------------------------------------------------------------------------
// Quantile trimming
// ---------------------------------------------------------------------------

/// Lower quantile kept by [`trim_outliers`].
pub const LOW_QUANTILE: f64 = 0.025;
/// Upper quantile kept by [`trim_outliers`].
pub const HIGH_QUANTILE: f64 = 0.975;

/// Quantile `q` of already sorted values using linear interpolation between
/// the closest ranks (position `q * (n - 1)`).
///
/// Returns `None` for an empty slice or `q` outside `[0, 1]`.
pub fn quantile_sorted(sorted: &[f64], q: f64) -> Option<f64> {
    if sorted.is_empty() || !(0.0..=1.0).contains(&q) {
        return None;
    }
    let pos = q * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    let frac = pos - lo as f64;
    Some(sorted[lo] + (sorted[hi] - sorted[lo]) * frac)
}

/// Integer values widened to `f64` and sorted ascending.
pub fn sorted_values(values: &[u32]) -> Vec<f64> {
    let mut sorted: Vec<f64> = values.iter().map(|&v| f64::from(v)).collect();
    sorted.sort_by(f64::total_cmp);
    sorted
}

/// Compute the [`LOW_QUANTILE`, `HIGH_QUANTILE`] value range of the table.
pub fn trim_bounds(page_views: &PageViews) -> Option<TrimBounds> {
    let sorted = sorted_values(&page_views.values());
    Some(TrimBounds {
        low: quantile_sorted(&sorted, LOW_QUANTILE)?,
        high: quantile_sorted(&sorted, HIGH_QUANTILE)?,
    })
}

/// Drop records whose value lies outside the 2.5th–97.5th percentile range
/// (bounds inclusive). Record order is preserved.
///
/// An empty table is an error. When every value is identical both bounds
/// collapse to that value and every record is kept.
pub fn trim_outliers(page_views: &PageViews) -> Result<FilteredDataset> {
    let bounds = trim_bounds(page_views).ok_or(DataError::EmptyDataset)?;
    let kept: Vec<_> = page_views
        .records()
        .iter()
        .filter(|r| bounds.contains(r.value))
        .copied()
        .collect();
    Ok(FilteredDataset::new(kept, bounds, page_views.len()))
}
