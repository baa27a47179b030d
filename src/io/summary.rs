use anyhow::Result;

use crate::ctx::Ctx;

pub fn format_summary(ctx: &Ctx) -> Result<String> {
    let version = &ctx.tool_version;
    let dashboard = ctx.dashboard()?;
    let dataset = dashboard.dataset();
    let surface = dashboard.surface();

    let mut out = String::new();
    out.push_str(&format!("kira-trialsdash v{}\n", version));
    out.push_str(&format!(
        "Input: {} trials ({} dropped), {} phases, {} statuses\n",
        dataset.len(),
        dataset.dropped(),
        dataset.phases().len(),
        dataset.statuses().len()
    ));

    let hist = dashboard.histogram().filter();
    out.push_str(&format!(
        "Histogram: {} rows, range {}..{}, bin width {}, phases={}\n",
        surface.histogram().len(),
        hist.range_start,
        hist.range_end,
        hist.bin_width,
        hist.phases.len()
    ));
    let scatter = dashboard.scatter().filter();
    out.push_str(&format!(
        "Scatter: {} trials, range {}..{}, phases={}, statuses={}\n",
        surface.scatter().len(),
        scatter.range_start,
        scatter.range_end,
        scatter.phases.len(),
        scatter.statuses.len()
    ));

    out.push_str("Summary:\n");
    for row in surface.summary() {
        out.push_str(&format!(
            "  {}: n={} min={} mean={:.2} median={} max={}\n",
            row.phase, row.trials, row.min, row.mean, row.median, row.max
        ));
    }

    let ev = &ctx.event_stats;
    if ev.applied > 0 {
        out.push_str(&format!(
            "Events: {} applied, {} published, {} rejected\n",
            ev.applied, ev.published, ev.rejected
        ));
    }

    Ok(out)
}
