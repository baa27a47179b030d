use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;

use crate::dashboard::{Dashboard, ViewDefaults};
use crate::dataset::TrialDataset;
use crate::schema::v1::EventStats;
use crate::surface::RecordingSurface;

#[derive(Debug, Clone)]
pub struct OutputPaths {
    pub out_dir: PathBuf,
    pub json_path: PathBuf,
    pub histogram_tsv: PathBuf,
    pub scatter_tsv: PathBuf,
    pub summary_tsv: PathBuf,
}

pub struct Ctx {
    pub input: PathBuf,
    pub events_path: Option<PathBuf>,
    pub defaults: ViewDefaults,
    pub write_json: bool,
    pub write_tsv: bool,
    pub tool_version: String,
    pub dataset: Option<Arc<TrialDataset>>,
    pub dashboard: Option<Dashboard<RecordingSurface>>,
    pub event_stats: EventStats,
    pub warnings: Vec<String>,
    pub output: OutputPaths,
}

impl Ctx {
    pub fn new(
        input: PathBuf,
        out_dir: PathBuf,
        defaults: ViewDefaults,
        write_json: bool,
        write_tsv: bool,
        tool_version: &str,
    ) -> Self {
        let json_path = out_dir.join("dashboard.json");
        let histogram_tsv = out_dir.join("histogram.tsv");
        let scatter_tsv = out_dir.join("scatter.tsv");
        let summary_tsv = out_dir.join("summary.tsv");
        Self {
            input,
            events_path: None,
            defaults,
            write_json,
            write_tsv,
            tool_version: tool_version.to_string(),
            dataset: None,
            dashboard: None,
            event_stats: EventStats::default(),
            warnings: Vec::new(),
            output: OutputPaths {
                out_dir,
                json_path,
                histogram_tsv,
                scatter_tsv,
                summary_tsv,
            },
        }
    }

    pub fn dataset(&self) -> anyhow::Result<&Arc<TrialDataset>> {
        self.dataset.as_ref().context("dataset not loaded")
    }

    pub fn dashboard(&self) -> anyhow::Result<&Dashboard<RecordingSurface>> {
        self.dashboard.as_ref().context("dashboard not built")
    }

    pub fn dashboard_mut(&mut self) -> anyhow::Result<&mut Dashboard<RecordingSurface>> {
        self.dashboard.as_mut().context("dashboard not built")
    }
}
