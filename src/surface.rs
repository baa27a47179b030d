//! Boundary to whatever draws the dashboard.
//!
//! Controllers push finished row sets through [`RenderSurface::publish`] and
//! describe their widgets with [`ControlSpec`]. Widget changes come back as
//! raw [`ControlValue`]s routed by [`crate::dashboard::Dashboard::dispatch`].

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{DashboardError, Result};
use crate::views::{HistogramRow, ScatterRow, SummaryRow, ViewKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ControlId {
    Phases,
    Statuses,
    BinWidth,
    EnrollmentRange,
}

impl fmt::Display for ControlId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ControlId::Phases => "phases",
            ControlId::Statuses => "statuses",
            ControlId::BinWidth => "bin_width",
            ControlId::EnrollmentRange => "enrollment_range",
        };
        f.write_str(name)
    }
}

/// Raw value reported by a widget on change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ControlValue {
    /// Checkbox group: indices into the control's label list.
    Active(Vec<usize>),
    /// Slider position.
    Value(f64),
    /// Range slider `(low, high)`.
    Range(f64, f64),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ControlKind {
    CheckboxGroup {
        labels: Vec<String>,
        active: Vec<usize>,
    },
    Slider {
        start: f64,
        end: f64,
        step: f64,
        value: f64,
    },
    RangeSlider {
        start: f64,
        end: f64,
        step: f64,
        value: (f64, f64),
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ControlSpec {
    pub id: ControlId,
    pub title: String,
    pub kind: ControlKind,
}

impl ControlSpec {
    /// Checkbox group over `labels` with every label in `selected` ticked.
    pub fn checkbox(id: ControlId, title: &str, labels: Vec<String>, selected: &[String]) -> Self {
        let active = selected
            .iter()
            .filter_map(|s| labels.iter().position(|l| l == s))
            .collect();
        Self {
            id,
            title: title.to_string(),
            kind: ControlKind::CheckboxGroup { labels, active },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ControlHandle {
    pub view: ViewKind,
    pub control: ControlId,
}

/// A complete row set for one view.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Publication {
    Histogram(Vec<HistogramRow>),
    Scatter(Vec<ScatterRow>),
    Summary(Vec<SummaryRow>),
}

impl Publication {
    pub fn len(&self) -> usize {
        match self {
            Publication::Histogram(rows) => rows.len(),
            Publication::Scatter(rows) => rows.len(),
            Publication::Summary(rows) => rows.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

pub trait RenderSurface {
    /// Replace everything displayed for `view` with `rows`.
    fn publish(&mut self, view: ViewKind, rows: Publication);

    fn render_controls(&mut self, view: ViewKind, controls: &[ControlSpec]) -> Vec<ControlHandle>;
}

/// Headless surface that keeps the latest publication of each view.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    published: BTreeMap<ViewKind, Publication>,
    publish_counts: BTreeMap<ViewKind, usize>,
    controls: BTreeMap<ViewKind, Vec<ControlSpec>>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn latest(&self, view: ViewKind) -> Option<&Publication> {
        self.published.get(&view)
    }

    pub fn publish_count(&self, view: ViewKind) -> usize {
        self.publish_counts.get(&view).copied().unwrap_or(0)
    }

    pub fn controls(&self, view: ViewKind) -> &[ControlSpec] {
        self.controls.get(&view).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn histogram(&self) -> &[HistogramRow] {
        match self.latest(ViewKind::Histogram) {
            Some(Publication::Histogram(rows)) => rows,
            _ => &[],
        }
    }

    pub fn scatter(&self) -> &[ScatterRow] {
        match self.latest(ViewKind::Scatter) {
            Some(Publication::Scatter(rows)) => rows,
            _ => &[],
        }
    }

    pub fn summary(&self) -> &[SummaryRow] {
        match self.latest(ViewKind::Summary) {
            Some(Publication::Summary(rows)) => rows,
            _ => &[],
        }
    }
}

impl RenderSurface for RecordingSurface {
    fn publish(&mut self, view: ViewKind, rows: Publication) {
        self.published.insert(view, rows);
        *self.publish_counts.entry(view).or_insert(0) += 1;
    }

    fn render_controls(&mut self, view: ViewKind, controls: &[ControlSpec]) -> Vec<ControlHandle> {
        self.controls.insert(view, controls.to_vec());
        controls
            .iter()
            .map(|c| ControlHandle {
                view,
                control: c.id,
            })
            .collect()
    }
}

/// Map checkbox indices to labels, keeping the order of `active`.
pub fn resolve_active(control: ControlId, labels: &[String], active: &[usize]) -> Result<Vec<String>> {
    active
        .iter()
        .map(|&i| {
            labels
                .get(i)
                .cloned()
                .ok_or_else(|| DashboardError::InvalidSelection {
                    control: control.to_string(),
                    index: i,
                    len: labels.len(),
                })
        })
        .collect()
}
