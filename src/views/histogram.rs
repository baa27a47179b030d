use serde::{Deserialize, Serialize};

use crate::dataset::TrialDataset;
use crate::error::{DashboardError, Result};
use crate::math::histogram;
use crate::palette::{self, HISTOGRAM_PALETTE};
use crate::surface::{ControlId, ControlKind, ControlSpec, ControlValue, Publication, resolve_active};
use crate::views::{HistogramBins, View, ViewKind};

pub const BIN_WIDTH_LIMITS: (f64, f64, f64) = (0.0, 500.0, 1.0);
pub const RANGE_LIMITS: (f64, f64, f64) = (0.0, 10_000.0, 50.0);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistogramFilter {
    pub phases: Vec<String>,
    pub range_start: f64,
    pub range_end: f64,
    pub bin_width: f64,
}

impl HistogramFilter {
    pub fn bins(&self) -> Result<HistogramBins> {
        HistogramBins::new(self.range_start, self.range_end, self.bin_width)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistogramRow {
    pub proportion: f64,
    pub left: f64,
    pub right: f64,
    pub f_proportion: String,
    pub f_interval: String,
    pub name: String,
    pub color: String,
}

/// Per-phase enrollment proportions over fixed-width bins.
///
/// Phases are processed in the supplied order and the result is sorted by
/// `(name, left)`. A phase with no trial inside the range gets all-zero bins.
pub fn build_histogram(
    dataset: &TrialDataset,
    phases: &[String],
    bins: &HistogramBins,
) -> Vec<HistogramRow> {
    let all_phases = dataset.phases();
    let range = bins.range();
    let edges = histogram::edges(range.start(), range.end(), bins.bin_count());
    let (edges, all_phases) = (&edges, &all_phases);

    let mut rows: Vec<HistogramRow> = phases
        .iter()
        .flat_map(move |phase| {
            let counts = histogram::counts(
                dataset.by_phase(phase).map(|r| r.enrollment as f64),
                range.start(),
                range.end(),
                bins.bin_count(),
            );
            let color = palette::pick(&HISTOGRAM_PALETTE, palette::rank(all_phases, phase));
            histogram::proportions(&counts)
                .into_iter()
                .enumerate()
                .map(move |(i, proportion)| {
                    let (left, right) = (edges[i], edges[i + 1]);
                    HistogramRow {
                        proportion,
                        left,
                        right,
                        f_proportion: format!("{proportion:.5}"),
                        f_interval: format!(
                            "{} to {} enrollees",
                            left.trunc() as i64,
                            right.trunc() as i64
                        ),
                        name: phase.clone(),
                        color: color.to_string(),
                    }
                })
        })
        .collect();

    rows.sort_by(|a, b| a.name.cmp(&b.name).then(a.left.total_cmp(&b.left)));
    rows
}

pub struct HistogramView;

impl View for HistogramView {
    type Filter = HistogramFilter;
    type Row = HistogramRow;

    const KIND: ViewKind = ViewKind::Histogram;

    fn controls(dataset: &TrialDataset, filter: &HistogramFilter) -> Vec<ControlSpec> {
        vec![
            ControlSpec::checkbox(ControlId::Phases, "Phases", dataset.phases(), &filter.phases),
            ControlSpec {
                id: ControlId::BinWidth,
                title: "Bin Width".to_string(),
                kind: ControlKind::Slider {
                    start: BIN_WIDTH_LIMITS.0,
                    end: BIN_WIDTH_LIMITS.1,
                    step: BIN_WIDTH_LIMITS.2,
                    value: filter.bin_width,
                },
            },
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
        filter: &mut HistogramFilter,
        control: ControlId,
        value: ControlValue,
    ) -> Result<()> {
        match (control, value) {
            (ControlId::Phases, ControlValue::Active(active)) => {
                filter.phases = resolve_active(control, &dataset.phases(), &active)?;
            }
            (ControlId::BinWidth, ControlValue::Value(width)) => filter.bin_width = width,
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

    fn build(dataset: &TrialDataset, filter: &HistogramFilter) -> Result<Vec<HistogramRow>> {
        let bins = filter.bins()?;
        Ok(build_histogram(dataset, &filter.phases, &bins))
    }

    fn publication(rows: &[HistogramRow]) -> Publication {
        Publication::Histogram(rows.to_vec())
    }
}
