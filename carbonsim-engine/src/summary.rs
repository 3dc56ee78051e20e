//! Grouped means and descriptive statistics over aggregated datasets.
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::activity::Activity;
use crate::dataset::{Dataset, DatasetError};
use crate::numbers::{quantile, round_to, usize_to_f64};

/// Descriptive statistics over an emission column, rounded to 3 places.
///
/// `std` is the sample standard deviation (n - 1 denominator); a single
/// observation reports 0.0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DescriptiveStats {
    pub count: usize,
    pub mean: f64,
    pub std: f64,
    pub min: f64,
    pub q25: f64,
    pub median: f64,
    pub q75: f64,
    pub max: f64,
}

/// Mean emission per activity across all runs. Runs are blended: the run
/// tag is not a grouping key.
///
/// # Errors
///
/// Returns `DatasetError::Empty` when no rows have been simulated.
pub fn group_means(dataset: &Dataset) -> Result<BTreeMap<Activity, f64>, DatasetError> {
    if dataset.is_empty() {
        return Err(DatasetError::Empty);
    }
    let mut sums: BTreeMap<Activity, (f64, usize)> = BTreeMap::new();
    for row in dataset.rows() {
        let entry = sums.entry(row.activity).or_insert((0.0, 0));
        entry.0 += row.emission_tco2eq;
        entry.1 += 1;
    }
    Ok(sums
        .into_iter()
        .map(|(activity, (sum, count))| (activity, round_to(sum / usize_to_f64(count), 3)))
        .collect())
}

/// Descriptive statistics over the emission column, optionally restricted
/// to one activity.
///
/// # Errors
///
/// Returns `DatasetError::Empty` when the dataset, or the filtered view of
/// it, holds no rows.
pub fn describe(
    dataset: &Dataset,
    activity: Option<Activity>,
) -> Result<DescriptiveStats, DatasetError> {
    let mut values = dataset.emissions(activity);
    if values.is_empty() {
        return Err(DatasetError::Empty);
    }
    values.sort_by(f64::total_cmp);

    let count = values.len();
    let mean = values.iter().sum::<f64>() / usize_to_f64(count);
    let std = if count < 2 {
        0.0
    } else {
        let var = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>()
            / usize_to_f64(count - 1);
        var.sqrt()
    };

    Ok(DescriptiveStats {
        count,
        mean: round_to(mean, 3),
        std: round_to(std, 3),
        min: round_to(values[0], 3),
        q25: round_to(quantile(&values, 0.25), 3),
        median: round_to(quantile(&values, 0.5), 3),
        q75: round_to(quantile(&values, 0.75), 3),
        max: round_to(values[count - 1], 3),
    })
}
