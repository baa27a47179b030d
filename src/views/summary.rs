use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::dataset::TrialDataset;
use crate::error::{DashboardError, Result};
use crate::math::stats::{mean, median, round_to};
use crate::surface::{ControlId, ControlSpec, ControlValue, Publication};
use crate::views::{View, ViewKind};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryRow {
    pub phase: String,
    pub trials: usize,
    pub min: u64,
    pub mean: f64,
    pub median: f64,
    pub max: u64,
}

/// Enrollment statistics per phase, in ascending phase order.
pub fn build_summary(dataset: &TrialDataset) -> Vec<SummaryRow> {
    let mut groups: BTreeMap<&str, Vec<u64>> = BTreeMap::new();
    for r in dataset.records() {
        groups.entry(r.phase.as_str()).or_default().push(r.enrollment);
    }

    groups
        .into_iter()
        .filter_map(|(phase, counts)| {
            let min = *counts.iter().min()?;
            let max = *counts.iter().max()?;
            let mut values: Vec<f64> = counts.iter().map(|&c| c as f64).collect();
            Some(SummaryRow {
                phase: phase.to_string(),
                trials: counts.len(),
                min,
                mean: round_to(mean(&values), 2),
                median: median(&mut values),
                max,
            })
        })
        .collect()
}

/// Static view: no controls, built once.
pub struct SummaryView;

impl View for SummaryView {
    type Filter = ();
    type Row = SummaryRow;

    const KIND: ViewKind = ViewKind::Summary;

    fn controls(_dataset: &TrialDataset, _filter: &()) -> Vec<ControlSpec> {
        Vec::new()
    }

    fn apply(
        _dataset: &TrialDataset,
        _filter: &mut (),
        control: ControlId,
        _value: ControlValue,
    ) -> Result<()> {
        Err(DashboardError::UnsupportedControl {
            view: Self::KIND.to_string(),
            control: control.to_string(),
        })
    }

    fn build(dataset: &TrialDataset, _filter: &()) -> Result<Vec<SummaryRow>> {
        Ok(build_summary(dataset))
    }

    fn publication(rows: &[SummaryRow]) -> Publication {
        Publication::Summary(rows.to_vec())
    }
}
