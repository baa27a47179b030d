use std::fmt::Debug;
use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, info, warn};

use crate::dataset::TrialDataset;
use crate::error::Result;
use crate::surface::{ControlHandle, ControlId, ControlSpec, ControlValue, Publication, RenderSurface};
use crate::views::ViewKind;

/// One dashboard view: its filter state, how raw control values update that
/// state, and the pure builder that turns `(dataset, filter)` into rows.
pub trait View {
    type Filter: Clone + Debug + Send;
    type Row: Clone + Send;

    const KIND: ViewKind;

    fn controls(dataset: &TrialDataset, filter: &Self::Filter) -> Vec<ControlSpec>;

    fn apply(
        dataset: &TrialDataset,
        filter: &mut Self::Filter,
        control: ControlId,
        value: ControlValue,
    ) -> Result<()>;

    fn build(dataset: &TrialDataset, filter: &Self::Filter) -> Result<Vec<Self::Row>>;

    fn publication(rows: &[Self::Row]) -> Publication;
}

/// `Recomputing` only holds inside [`ViewController::handle`]. Callers go
/// through `&mut self`, so from outside a controller is always `Idle`; the
/// transition shows up in the `debug` log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerState {
    Idle,
    Recomputing,
}

#[derive(Debug, Clone, PartialEq)]
pub enum UpdateOutcome {
    Published { rows: usize },
    /// Change refused; the previous filter and rows are still current.
    Rejected { reason: String },
}

pub struct ViewController<V: View> {
    dataset: Arc<TrialDataset>,
    filter: V::Filter,
    rows: Vec<V::Row>,
    state: ControllerState,
    revision: u64,
}

impl<V: View> ViewController<V> {
    /// Builds the initial rows from `filter`. An invalid default is a startup
    /// error, unlike invalid control changes which are only rejected.
    pub fn new(dataset: Arc<TrialDataset>, filter: V::Filter) -> Result<Self> {
        let start = Instant::now();
        let rows = V::build(&dataset, &filter)?;
        info!(
            view = %V::KIND,
            rows = rows.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "view initialized"
        );
        Ok(Self {
            dataset,
            filter,
            rows,
            state: ControllerState::Idle,
            revision: 0,
        })
    }

    pub fn kind(&self) -> ViewKind {
        V::KIND
    }

    pub fn filter(&self) -> &V::Filter {
        &self.filter
    }

    pub fn rows(&self) -> &[V::Row] {
        &self.rows
    }

    pub fn state(&self) -> ControllerState {
        self.state
    }

    /// Number of committed recomputes since construction.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn controls(&self) -> Vec<ControlSpec> {
        V::controls(&self.dataset, &self.filter)
    }

    pub fn render_controls(&self, surface: &mut dyn RenderSurface) -> Vec<ControlHandle> {
        surface.render_controls(V::KIND, &self.controls())
    }

    pub fn publish(&self, surface: &mut dyn RenderSurface) {
        surface.publish(V::KIND, V::publication(&self.rows));
    }

    /// Handles one control change: recompute everything from a copy of the
    /// filter, then either commit and publish or keep the prior state.
    pub fn handle(
        &mut self,
        control: ControlId,
        value: ControlValue,
        surface: &mut dyn RenderSurface,
    ) -> UpdateOutcome {
        self.state = ControllerState::Recomputing;
        let start = Instant::now();
        debug!(
            view = %V::KIND,
            control = %control,
            ?value,
            state = ?self.state,
            "control changed"
        );

        let outcome = match self.recompute(control, value) {
            Ok((filter, rows)) => {
                self.filter = filter;
                self.rows = rows;
                self.revision += 1;
                self.publish(surface);
                info!(
                    view = %V::KIND,
                    rows = self.rows.len(),
                    revision = self.revision,
                    elapsed_ms = start.elapsed().as_millis() as u64,
                    "view published"
                );
                UpdateOutcome::Published {
                    rows: self.rows.len(),
                }
            }
            Err(err) => {
                warn!(view = %V::KIND, control = %control, error = %err, "control change ignored");
                UpdateOutcome::Rejected {
                    reason: err.to_string(),
                }
            }
        };

        self.state = ControllerState::Idle;
        outcome
    }

    fn recompute(
        &self,
        control: ControlId,
        value: ControlValue,
    ) -> Result<(V::Filter, Vec<V::Row>)> {
        let mut filter = self.filter.clone();
        V::apply(&self.dataset, &mut filter, control, value)?;
        let rows = V::build(&self.dataset, &filter)?;
        Ok((filter, rows))
    }
}
