use std::path::Path;

use anyhow::{Context, Result};

use crate::ctx::Ctx;
use crate::schema::v1::{DashboardV1, HistogramSection, InputMeta, ScatterSection, Views};

/// Report of what the surface currently shows for each view.
pub fn build_report(ctx: &Ctx) -> Result<DashboardV1> {
    let dashboard = ctx.dashboard()?;
    let dataset = dashboard.dataset();
    let surface = dashboard.surface();

    let histogram = dashboard.histogram();
    let bin_count = histogram
        .filter()
        .bins()
        .map(|b| b.bin_count() as u64)
        .context("published histogram filter is invalid")?;
    let scatter = dashboard.scatter();

    Ok(DashboardV1 {
        tool: "kira-trialsdash".to_string(),
        version: ctx.tool_version.clone(),
        schema_version: "v1".to_string(),
        input_meta: InputMeta {
            path: ctx.input.display().to_string(),
            trials: dataset.len() as u64,
            dropped: dataset.dropped() as u64,
            phases: dataset.phases(),
            statuses: dataset.statuses(),
        },
        views: Views {
            histogram: HistogramSection {
                filter: histogram.filter().clone(),
                bin_count,
                revision: histogram.revision(),
                rows: surface.histogram().to_vec(),
            },
            summary: surface.summary().to_vec(),
            scatter: ScatterSection {
                filter: scatter.filter().clone(),
                revision: scatter.revision(),
                rows: surface.scatter().to_vec(),
            },
        },
        events: ctx.event_stats.clone(),
        warnings: ctx.warnings.clone(),
    })
}

pub fn write_json(path: &Path, ctx: &Ctx) -> Result<()> {
    let report = build_report(ctx)?;
    let file = std::fs::File::create(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    let writer = std::io::BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &report)?;
    Ok(())
}
