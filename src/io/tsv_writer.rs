use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};

use crate::views::{HistogramRow, ScatterRow, SummaryRow};

fn create(path: &Path) -> Result<BufWriter<std::fs::File>> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    Ok(BufWriter::new(file))
}

/// Tabs and newlines inside free text would break the row layout.
fn clean(text: &str) -> String {
    text.replace(['\t', '\n', '\r'], " ")
}

pub fn write_histogram_tsv(path: &Path, rows: &[HistogramRow]) -> Result<()> {
    let mut w = create(path)?;
    writeln!(w, "name\tleft\tright\tproportion\tf_interval\tcolor")?;
    for r in rows {
        writeln!(
            w,
            "{}\t{:.6}\t{:.6}\t{}\t{}\t{}",
            clean(&r.name),
            r.left,
            r.right,
            r.f_proportion,
            r.f_interval,
            r.color
        )?;
    }
    w.flush()?;
    Ok(())
}

pub fn write_scatter_tsv(path: &Path, rows: &[ScatterRow]) -> Result<()> {
    let mut w = create(path)?;
    writeln!(
        w,
        "phase\tstatus\tenrollment\tstart_year\tresults_year\tenrollment_size\tcolor\ttitle"
    )?;
    for r in rows {
        writeln!(
            w,
            "{}\t{}\t{}\t{}\t{}\t{:.4}\t{}\t{}",
            clean(&r.phase),
            clean(&r.status),
            r.enrollment,
            r.start_year,
            r.results_year,
            r.enrollment_size,
            r.color,
            clean(&r.title)
        )?;
    }
    w.flush()?;
    Ok(())
}

pub fn write_summary_tsv(path: &Path, rows: &[SummaryRow]) -> Result<()> {
    let mut w = create(path)?;
    writeln!(w, "phase\ttrials\tmin\tmean\tmedian\tmax")?;
    for r in rows {
        writeln!(
            w,
            "{}\t{}\t{}\t{:.2}\t{}\t{}",
            clean(&r.phase),
            r.trials,
            r.min,
            r.mean,
            r.median,
            r.max
        )?;
    }
    w.flush()?;
    Ok(())
}
