use std::collections::BTreeSet;

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrialRecord {
    pub phase: String,
    pub status: String,
    pub enrollment: u64,
    pub title: String,
    pub start_date: String,
    pub results_date: String,
}

/// Loaded trials in input order. Never mutated after load; views share it
/// through an `Arc`.
#[derive(Debug, Clone, Default)]
pub struct TrialDataset {
    records: Vec<TrialRecord>,
    dropped: usize,
}

impl TrialDataset {
    pub fn new(records: Vec<TrialRecord>) -> Self {
        Self {
            records,
            dropped: 0,
        }
    }

    pub fn with_dropped(records: Vec<TrialRecord>, dropped: usize) -> Self {
        Self { records, dropped }
    }

    pub fn records(&self) -> &[TrialRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Rows discarded at load for lacking a phase or an enrollment count.
    pub fn dropped(&self) -> usize {
        self.dropped
    }

    /// Distinct phases, ascending. Label list of the phase checkboxes and the
    /// rank order used for histogram colours.
    pub fn phases(&self) -> Vec<String> {
        distinct(self.records.iter().map(|r| r.phase.as_str()))
    }

    pub fn statuses(&self) -> Vec<String> {
        distinct(self.records.iter().map(|r| r.status.as_str()))
    }

    pub fn by_phase<'a>(&'a self, phase: &'a str) -> impl Iterator<Item = &'a TrialRecord> + 'a {
        self.records.iter().filter(move |r| r.phase == phase)
    }
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    values
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(phase: &str, status: &str) -> TrialRecord {
        TrialRecord {
            phase: phase.to_string(),
            status: status.to_string(),
            enrollment: 1,
            title: String::new(),
            start_date: String::new(),
            results_date: String::new(),
        }
    }

    #[test]
    fn distinct_values_sorted() {
        let ds = TrialDataset::new(vec![
            rec("Phase 3", "Completed"),
            rec("Phase 1", "Recruiting"),
            rec("Phase 3", "Completed"),
        ]);
        assert_eq!(ds.phases(), vec!["Phase 1", "Phase 3"]);
        assert_eq!(ds.statuses(), vec!["Completed", "Recruiting"]);
        assert_eq!(ds.by_phase("Phase 3").count(), 2);
    }
}
