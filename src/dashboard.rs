use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::dataset::TrialDataset;
use crate::error::Result;
use crate::events::ControlEvent;
use crate::surface::{ControlHandle, RenderSurface};
use crate::views::{
    HistogramFilter, HistogramView, ScatterFilter, ScatterView, SummaryView, UpdateOutcome,
    ViewController, ViewKind,
};

/// Startup filter values. Every phase and status present in the dataset is
/// selected; ranges and bin width come from here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewDefaults {
    pub histogram_range: (f64, f64),
    pub bin_width: f64,
    pub scatter_range: (f64, f64),
}

impl Default for ViewDefaults {
    fn default() -> Self {
        Self {
            histogram_range: (100.0, 500.0),
            bin_width: 50.0,
            scatter_range: (100.0, 500.0),
        }
    }
}

impl ViewDefaults {
    pub fn histogram_filter(&self, dataset: &TrialDataset) -> HistogramFilter {
        HistogramFilter {
            phases: dataset.phases(),
            range_start: self.histogram_range.0,
            range_end: self.histogram_range.1,
            bin_width: self.bin_width,
        }
    }

    pub fn scatter_filter(&self, dataset: &TrialDataset) -> ScatterFilter {
        ScatterFilter {
            phases: dataset.phases(),
            statuses: dataset.statuses(),
            range_start: self.scatter_range.0,
            range_end: self.scatter_range.1,
        }
    }
}

/// The three views over one shared dataset, wired to a rendering surface.
///
/// Events are handled one at a time through `&mut self`.
pub struct Dashboard<S: RenderSurface> {
    dataset: Arc<TrialDataset>,
    histogram: ViewController<HistogramView>,
    scatter: ViewController<ScatterView>,
    summary: ViewController<SummaryView>,
    handles: Vec<ControlHandle>,
    surface: S,
}

impl<S: RenderSurface> Dashboard<S> {
    pub fn new(
        dataset: Arc<TrialDataset>,
        defaults: &ViewDefaults,
        mut surface: S,
    ) -> Result<Self> {
        let (histogram, scatter, summary) = build_controllers(&dataset, defaults)?;

        let mut handles = Vec::new();
        handles.extend(histogram.render_controls(&mut surface));
        handles.extend(summary.render_controls(&mut surface));
        handles.extend(scatter.render_controls(&mut surface));
        histogram.publish(&mut surface);
        summary.publish(&mut surface);
        scatter.publish(&mut surface);

        info!(
            trials = dataset.len(),
            controls = handles.len(),
            "dashboard ready"
        );

        Ok(Self {
            dataset,
            histogram,
            scatter,
            summary,
            handles,
            surface,
        })
    }

    /// Routes a control change to the controller owning that view.
    pub fn dispatch(&mut self, event: ControlEvent) -> UpdateOutcome {
        let ControlEvent {
            view,
            control,
            value,
        } = event;
        match view {
            ViewKind::Histogram => self.histogram.handle(control, value, &mut self.surface),
            ViewKind::Scatter => self.scatter.handle(control, value, &mut self.surface),
            ViewKind::Summary => self.summary.handle(control, value, &mut self.surface),
        }
    }

    pub fn dataset(&self) -> &TrialDataset {
        &self.dataset
    }

    pub fn histogram(&self) -> &ViewController<HistogramView> {
        &self.histogram
    }

    pub fn scatter(&self) -> &ViewController<ScatterView> {
        &self.scatter
    }

    pub fn summary(&self) -> &ViewController<SummaryView> {
        &self.summary
    }

    pub fn handles(&self) -> &[ControlHandle] {
        &self.handles
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }
}

type Controllers = (
    ViewController<HistogramView>,
    ViewController<ScatterView>,
    ViewController<SummaryView>,
);

#[cfg(not(feature = "mt"))]
fn build_controllers(dataset: &Arc<TrialDataset>, defaults: &ViewDefaults) -> Result<Controllers> {
    let histogram =
        ViewController::<HistogramView>::new(dataset.clone(), defaults.histogram_filter(dataset))?;
    let scatter =
        ViewController::<ScatterView>::new(dataset.clone(), defaults.scatter_filter(dataset))?;
    let summary = ViewController::<SummaryView>::new(dataset.clone(), ())?;
    Ok((histogram, scatter, summary))
}

// Builders only read the shared dataset; each controller owns its filter.
#[cfg(feature = "mt")]
fn build_controllers(dataset: &Arc<TrialDataset>, defaults: &ViewDefaults) -> Result<Controllers> {
    let (histogram, (scatter, summary)) = rayon::join(
        || {
            ViewController::<HistogramView>::new(
                dataset.clone(),
                defaults.histogram_filter(dataset),
            )
        },
        || {
            rayon::join(
                || {
                    ViewController::<ScatterView>::new(
                        dataset.clone(),
                        defaults.scatter_filter(dataset),
                    )
                },
                || ViewController::<SummaryView>::new(dataset.clone(), ()),
            )
        },
    );
    Ok((histogram?, scatter?, summary?))
}
