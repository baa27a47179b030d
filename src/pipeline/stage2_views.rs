use anyhow::{Context, Result};
use tracing::info;

use crate::ctx::Ctx;
use crate::dashboard::Dashboard;
use crate::pipeline::Stage;
use crate::surface::RecordingSurface;

pub struct Stage2Views;

impl Stage2Views {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage2Views {
    fn name(&self) -> &'static str {
        "stage2_views"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let dataset = ctx.dataset()?.clone();
        let dashboard = Dashboard::new(dataset, &ctx.defaults, RecordingSurface::new())
            .context("default view settings are invalid")?;
        info!(controls = dashboard.handles().len(), "views_ready");
        ctx.dashboard = Some(dashboard);
        Ok(())
    }
}
