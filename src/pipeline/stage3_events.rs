use anyhow::Result;
use tracing::info;

use crate::ctx::Ctx;
use crate::events::load_events;
use crate::pipeline::Stage;
use crate::schema::v1::EventStats;
use crate::views::UpdateOutcome;

/// Replays recorded control changes against the dashboard, in file order.
pub struct Stage3Events;

impl Stage3Events {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage3Events {
    fn name(&self) -> &'static str {
        "stage3_events"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let Some(path) = ctx.events_path.clone() else {
            return Ok(());
        };
        let events = load_events(&path)?;

        let dashboard = ctx.dashboard_mut()?;
        let mut stats = EventStats::default();
        let mut warnings = Vec::new();
        for (i, event) in events.into_iter().enumerate() {
            let label = format!("{}/{}", event.view, event.control);
            stats.applied += 1;
            match dashboard.dispatch(event) {
                UpdateOutcome::Published { .. } => stats.published += 1,
                UpdateOutcome::Rejected { reason } => {
                    stats.rejected += 1;
                    warnings.push(format!("event {} ({}) ignored: {}", i + 1, label, reason));
                }
            }
        }

        ctx.event_stats = stats;
        ctx.warnings.extend(warnings);
        info!(
            applied = ctx.event_stats.applied,
            rejected = ctx.event_stats.rejected,
            "events_replayed"
        );
        Ok(())
    }
}
