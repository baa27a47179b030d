use serde::{Deserialize, Serialize};

use crate::dataset::TrialDataset;
use crate::derive::{bubble_size, extract_year};
use crate::error::{DashboardError, Result};
use crate::palette::{self, SCATTER_PALETTE};
use crate::surface::{ControlId, ControlKind, ControlSpec, ControlValue, Publication, resolve_active};
use crate::views::histogram::RANGE_LIMITS;
use crate::views::{EnrollmentRange, View, ViewKind};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterFilter {
    pub phases: Vec<String>,
    pub statuses: Vec<String>,
    pub range_start: f64,
    pub range_end: f64,
}

impl ScatterFilter {
    pub fn range(&self) -> Result<EnrollmentRange> {
        EnrollmentRange::new(self.range_start, self.range_end)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterRow {
    pub phase: String,
    pub status: String,
    pub title: String,
    pub enrollment: u64,
    pub start_year: i32,
    pub results_year: i32,
    pub start_date: String,
    pub results_date: String,
    pub enrollment_size: f64,
    pub color: String,
}

/// One row per trial matching a selected phase, a selected status and the
/// inclusive enrollment range.
///
/// Colour follows the phase's index in `phases`, so it depends on the current
/// selection. Rows are stably sorted by phase; inside a phase they keep
/// status-selection order, then dataset order.
pub fn build_scatter(
    dataset: &TrialDataset,
    phases: &[String],
    statuses: &[String],
    range: &EnrollmentRange,
) -> Vec<ScatterRow> {
    let mut rows: Vec<ScatterRow> = phases
        .iter()
        .enumerate()
        .flat_map(move |(i, phase)| {
            let color = palette::pick(&SCATTER_PALETTE, i);
            statuses.iter().flat_map(move |status| {
                dataset
                    .by_phase(phase)
                    .filter(move |r| r.status == *status && range.contains(r.enrollment as f64))
                    .map(move |r| ScatterRow {
                        phase: phase.clone(),
                        status: r.status.clone(),
                        title: r.title.clone(),
                        enrollment: r.enrollment,
                        start_year: extract_year(&r.start_date),
                        results_year: extract_year(&r.results_date),
                        start_date: r.start_date.clone(),
                        results_date: r.results_date.clone(),
                        enrollment_size: bubble_size(r.enrollment),
                        color: color.to_string(),
                    })
            })
        })
        .collect();

    rows.sort_by(|a, b| a.phase.cmp(&b.phase));
    rows
}

pub struct ScatterView;

impl View for ScatterView {
    type Filter = ScatterFilter;
    type Row = ScatterRow;

    const KIND: ViewKind = ViewKind::Scatter;

    fn controls(dataset: &TrialDataset, filter: &ScatterFilter) -> Vec<ControlSpec> {
        vec![
            ControlSpec::checkbox(ControlId::Phases, "Phases", dataset.phases(), &filter.phases),
            ControlSpec::checkbox(
                ControlId::Statuses,
                "Status",
                dataset.statuses(),
                &filter.statuses,
            ),
            ControlSpec {
                id: ControlId::EnrollmentRange,
                title: "Range of Enrollment".to_string(),
                kind: ControlKind::RangeSlider {
                    start: RANGE_LIMITS.0,
                    end: RANGE_LIMITS.1,
                    step: RANGE_LIMITS.2,
                    value: (filter.range_start, filter.range_end),
                },
            },
        ]
    }

    fn apply(
        dataset: &TrialDataset,
        filter: &mut ScatterFilter,
        control: ControlId,
        value: ControlValue,
    ) -> Result<()> {
        match (control, value) {
            (ControlId::Phases, ControlValue::Active(active)) => {
                filter.phases = resolve_active(control, &dataset.phases(), &active)?;
            }
            (ControlId::Statuses, ControlValue::Active(active)) => {
                filter.statuses = resolve_active(control, &dataset.statuses(), &active)?;
            }
            (ControlId::EnrollmentRange, ControlValue::Range(start, end)) => {
                filter.range_start = start;
                filter.range_end = end;
            }
            (control, _) => {
                return Err(DashboardError::UnsupportedControl {
                    view: Self::KIND.to_string(),
                    control: control.to_string(),
                });
            }
        }
        Ok(())
    }

    fn build(dataset: &TrialDataset, filter: &ScatterFilter) -> Result<Vec<ScatterRow>> {
        let range = filter.range()?;
        Ok(build_scatter(
            dataset,
            &filter.phases,
            &filter.statuses,
            &range,
        ))
    }

    fn publication(rows: &[ScatterRow]) -> Publication {
        Publication::Scatter(rows.to_vec())
    }
}
