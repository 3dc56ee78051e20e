//! Simulated observations and the aggregated dataset they form.
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::Write as _;
use thiserror::Error;

use crate::activity::Activity;
use crate::impact::ImpactCategory;
use crate::numbers::round_to;

/// Column order for delimited export. Fixed by contract with the
/// presentation layer.
pub const CSV_HEADER: &str =
    "activity,emission_tco2eq,reduction_potential_pct,environmental_cost_usd,impact_category,run_index";

/// One simulated observation: a single activity on a single day of one run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationRow {
    pub activity: Activity,
    /// Stored rounded to 3 decimal places.
    pub emission_tco2eq: f64,
    /// Stored rounded to 2 decimal places.
    pub reduction_potential_pct: f64,
    /// Always recomputable as `emission_tco2eq * 15`, rounded to 2 places.
    pub environmental_cost_usd: f64,
    /// Band of the pre-policy emission; never recomputed after rescaling.
    pub impact_category: ImpactCategory,
    /// 1-based run tag assigned by the aggregator; 0 only before tagging.
    pub run_index: u32,
}

/// Errors raised when an operation needs rows that are not there.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DatasetError {
    #[error("no simulated rows available; run a simulation first")]
    Empty,
}

/// Ordered collection of simulation rows across one or more runs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dataset {
    rows: Vec<SimulationRow>,
}

impl Dataset {
    #[must_use]
    pub fn new(rows: Vec<SimulationRow>) -> Self {
        Self { rows }
    }

    #[must_use]
    pub fn rows(&self) -> &[SimulationRow] {
        &self.rows
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Leading sample of at most `n` rows, in dataset order.
    #[must_use]
    pub fn head(&self, n: usize) -> &[SimulationRow] {
        &self.rows[..self.rows.len().min(n)]
    }

    /// Emission column, optionally restricted to one activity.
    #[must_use]
    pub fn emissions(&self, activity: Option<Activity>) -> Vec<f64> {
        self.rows
            .iter()
            .filter(|row| activity.is_none_or(|a| row.activity == a))
            .map(|row| row.emission_tco2eq)
            .collect()
    }

    /// Sum of the emission column, rounded to 2 decimal places.
    #[must_use]
    pub fn total_emissions(&self) -> f64 {
        round_to(self.rows.iter().map(|r| r.emission_tco2eq).sum(), 2)
    }

    /// Sum of the cost column, rounded to 2 decimal places.
    #[must_use]
    pub fn total_cost(&self) -> f64 {
        round_to(self.rows.iter().map(|r| r.environmental_cost_usd).sum(), 2)
    }

    /// Row counts per (activity, impact band), for distribution views.
    #[must_use]
    pub fn category_counts(&self) -> BTreeMap<(Activity, ImpactCategory), usize> {
        let mut counts = BTreeMap::new();
        for row in &self.rows {
            *counts
                .entry((row.activity, row.impact_category))
                .or_insert(0) += 1;
        }
        counts
    }

    /// Serialize to comma-delimited text: header line plus one line per row
    /// in dataset order.
    ///
    /// # Errors
    ///
    /// Returns `DatasetError::Empty` when there are no rows to export.
    pub fn to_csv(&self) -> Result<String, DatasetError> {
        if self.rows.is_empty() {
            return Err(DatasetError::Empty);
        }
        let mut out = String::with_capacity(self.rows.len() * 48 + CSV_HEADER.len() + 1);
        out.push_str(CSV_HEADER);
        out.push('\n');
        for row in &self.rows {
            // writeln! on String is infallible
            let _ = writeln!(
                out,
                "{},{},{},{},{},{}",
                row.activity.as_str(),
                row.emission_tco2eq,
                row.reduction_potential_pct,
                row.environmental_cost_usd,
                row.impact_category.as_str(),
                row.run_index,
            );
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(activity: Activity, emission: f64, run_index: u32) -> SimulationRow {
        SimulationRow {
            activity,
            emission_tco2eq: emission,
            reduction_potential_pct: 10.0,
            environmental_cost_usd: round_to(emission * 15.0, 2),
            impact_category: ImpactCategory::classify(emission),
            run_index,
        }
    }

    #[test]
    fn empty_dataset_refuses_export() {
        let dataset = Dataset::default();
        assert_eq!(dataset.to_csv(), Err(DatasetError::Empty));
    }

    #[test]
    fn csv_has_header_and_one_line_per_row() {
        let dataset = Dataset::new(vec![
            row(Activity::Transport, 42.5, 1),
            row(Activity::Water, 12.125, 1),
        ]);
        let csv = dataset.to_csv().unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], CSV_HEADER);
        assert_eq!(lines[1], "Transport,42.5,10,637.5,Medium,1");
        assert_eq!(lines[2], "Water,12.125,10,181.88,Low,1");
    }

    #[test]
    fn emissions_filter_respects_activity() {
        let dataset = Dataset::new(vec![
            row(Activity::Transport, 50.0, 1),
            row(Activity::Energy, 100.0, 1),
            row(Activity::Transport, 60.0, 2),
        ]);
        assert_eq!(dataset.emissions(None).len(), 3);
        assert_eq!(dataset.emissions(Some(Activity::Transport)), vec![50.0, 60.0]);
        assert!(dataset.emissions(Some(Activity::Water)).is_empty());
    }

    #[test]
    fn totals_sum_both_money_and_mass() {
        let dataset = Dataset::new(vec![
            row(Activity::Waste, 10.0, 1),
            row(Activity::Waste, 20.0, 1),
        ]);
        assert!((dataset.total_emissions() - 30.0).abs() < 1e-9);
        assert!((dataset.total_cost() - 450.0).abs() < 1e-9);
    }

    #[test]
    fn category_counts_group_by_activity_and_band() {
        let dataset = Dataset::new(vec![
            row(Activity::Transport, 35.0, 1),
            row(Activity::Transport, 95.0, 1),
            row(Activity::Transport, 36.0, 1),
        ]);
        let counts = dataset.category_counts();
        assert_eq!(counts[&(Activity::Transport, ImpactCategory::Low)], 2);
        assert_eq!(counts[&(Activity::Transport, ImpactCategory::High)], 1);
    }

    #[test]
    fn head_clamps_to_len() {
        let dataset = Dataset::new(vec![row(Activity::Water, 6.0, 1)]);
        assert_eq!(dataset.head(200).len(), 1);
        assert_eq!(dataset.head(0).len(), 0);
    }

    #[test]
    fn dataset_serde_roundtrip() {
        let dataset = Dataset::new(vec![row(Activity::Energy, 120.5, 3)]);
        let json = serde_json::to_string(&dataset).unwrap();
        let back: Dataset = serde_json::from_str(&json).unwrap();
        assert_eq!(back, dataset);
    }
}
