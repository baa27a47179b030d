//! Trial table loader.

use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};
use tracing::{info, warn};

use crate::dataset::{TrialDataset, TrialRecord};
use crate::error::{DashboardError, Result};
use crate::io::open_maybe_gz;

pub const PHASE_COLUMNS: [&str; 2] = ["Phases", "Phase"];
pub const STATUS_COLUMN: &str = "Status";
pub const ENROLLMENT_COLUMN: &str = "Enrollment";
pub const TITLE_COLUMN: &str = "Title";
pub const START_DATE_COLUMN: &str = "Start Date";
pub const RESULTS_DATE_COLUMN: &str = "Results First Posted";

#[derive(Debug, Clone, Copy)]
struct Columns {
    phase: usize,
    status: usize,
    enrollment: usize,
    title: usize,
    start_date: usize,
    results_date: usize,
}

/// Loads a CSV export (plain or `.gz`). Rows without a phase or a usable
/// enrollment count are dropped.
pub fn load_trials(path: &Path) -> Result<TrialDataset> {
    let reader = open_maybe_gz(path)?;
    let dataset = read_trials(reader, &path.display().to_string())?;
    info!(
        input = %path.display(),
        trials = dataset.len(),
        dropped = dataset.dropped(),
        "trials_loaded"
    );
    Ok(dataset)
}

pub fn read_trials<R: Read>(reader: R, source_name: &str) -> Result<TrialDataset> {
    let mut csv = ReaderBuilder::new().flexible(true).from_reader(reader);
    let headers = csv.headers().map_err(|e| DashboardError::DataFormat {
        source_name: source_name.to_string(),
        message: format!("unreadable header: {e}"),
    })?;
    let columns = resolve_columns(headers, source_name)?;

    let mut records = Vec::new();
    let mut dropped = 0usize;
    for row in csv.records() {
        let row = row?;
        match parse_row(&row, &columns) {
            Some(record) => records.push(record),
            None => dropped += 1,
        }
    }

    if dropped > 0 {
        warn!(source = source_name, dropped, "rows without phase or enrollment dropped");
    }
    Ok(TrialDataset::with_dropped(records, dropped))
}

fn resolve_columns(headers: &StringRecord, source_name: &str) -> Result<Columns> {
    Ok(Columns {
        phase: require(headers, &PHASE_COLUMNS, source_name)?,
        status: require(headers, &[STATUS_COLUMN], source_name)?,
        enrollment: require(headers, &[ENROLLMENT_COLUMN], source_name)?,
        title: require(headers, &[TITLE_COLUMN], source_name)?,
        start_date: require(headers, &[START_DATE_COLUMN], source_name)?,
        results_date: require(headers, &[RESULTS_DATE_COLUMN], source_name)?,
    })
}

/// Index of the first header matching any of `names` (aliases of one column).
fn require(headers: &StringRecord, names: &[&str], source_name: &str) -> Result<usize> {
    names
        .iter()
        .find_map(|name| {
            headers
                .iter()
                .position(|h| h.trim_start_matches('\u{feff}').trim() == *name)
        })
        .ok_or_else(|| DashboardError::DataFormat {
            source_name: source_name.to_string(),
            message: format!("missing required column '{}'", names[0]),
        })
}

fn parse_row(row: &StringRecord, columns: &Columns) -> Option<TrialRecord> {
    let field = |i: usize| row.get(i).unwrap_or("").trim();

    let phase = field(columns.phase);
    if phase.is_empty() {
        return None;
    }
    let enrollment = parse_enrollment(field(columns.enrollment))?;

    Some(TrialRecord {
        phase: phase.to_string(),
        status: field(columns.status).to_string(),
        enrollment,
        title: field(columns.title).to_string(),
        start_date: field(columns.start_date).to_string(),
        results_date: field(columns.results_date).to_string(),
    })
}

/// Integer counts, also accepting integral floats such as `120.0`.
pub fn parse_enrollment(text: &str) -> Option<u64> {
    if text.is_empty() {
        return None;
    }
    if let Ok(n) = text.parse::<u64>() {
        return Some(n);
    }
    let f: f64 = text.parse().ok()?;
    if f.is_finite() && f >= 0.0 && f.fract() == 0.0 && f <= u64::MAX as f64 {
        Some(f as u64)
    } else {
        None
    }
}
