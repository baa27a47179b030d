use serde::{Deserialize, Serialize};

use crate::views::{HistogramFilter, HistogramRow, ScatterFilter, ScatterRow, SummaryRow};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputMeta {
    pub path: String,
    pub trials: u64,
    pub dropped: u64,
    pub phases: Vec<String>,
    pub statuses: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistogramSection {
    pub filter: HistogramFilter,
    pub bin_count: u64,
    pub revision: u64,
    pub rows: Vec<HistogramRow>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScatterSection {
    pub filter: ScatterFilter,
    pub revision: u64,
    pub rows: Vec<ScatterRow>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Views {
    pub histogram: HistogramSection,
    pub summary: Vec<SummaryRow>,
    pub scatter: ScatterSection,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventStats {
    pub applied: u64,
    pub published: u64,
    pub rejected: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardV1 {
    pub tool: String,
    pub version: String,
    pub schema_version: String,
    pub input_meta: InputMeta,
    pub views: Views,
    pub events: EventStats,
    pub warnings: Vec<String>,
}
