use anyhow::Result;
use tracing::info;

use crate::ctx::Ctx;
use crate::io::{json_writer, tsv_writer};
use crate::pipeline::Stage;

pub struct Stage4Output;

impl Stage4Output {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage4Output {
    fn name(&self) -> &'static str {
        "stage4_output"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        if ctx.write_json {
            json_writer::write_json(&ctx.output.json_path, ctx)?;
        }
        if ctx.write_tsv {
            let surface = ctx.dashboard()?.surface();
            tsv_writer::write_histogram_tsv(&ctx.output.histogram_tsv, surface.histogram())?;
            tsv_writer::write_scatter_tsv(&ctx.output.scatter_tsv, surface.scatter())?;
            tsv_writer::write_summary_tsv(&ctx.output.summary_tsv, surface.summary())?;
        }

        info!(
            json = ctx.write_json,
            tsv = ctx.write_tsv,
            "stage4_output_ready"
        );
        Ok(())
    }
}
