use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;

use crate::ctx::Ctx;
use crate::input;
use crate::pipeline::Stage;

pub struct Stage1Input;

impl Stage1Input {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage1Input {
    fn name(&self) -> &'static str {
        "stage1_input"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let dataset = input::load_trials(&ctx.input)
            .with_context(|| format!("failed to load trials from {}", ctx.input.display()))?;

        if dataset.dropped() > 0 {
            ctx.warnings.push(format!(
                "{} rows without phase or enrollment were dropped",
                dataset.dropped()
            ));
        }
        if dataset.is_empty() {
            ctx.warnings
                .push("no usable trials in input; all views are empty".to_string());
        }

        info!(
            trials = dataset.len(),
            phases = dataset.phases().len(),
            statuses = dataset.statuses().len(),
            "dataset_ready"
        );
        ctx.dataset = Some(Arc::new(dataset));
        Ok(())
    }
}
