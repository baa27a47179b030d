use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::io::open_maybe_gz;
use crate::surface::{ControlId, ControlValue};
use crate::views::ViewKind;

/// A widget change as reported by the rendering surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ControlEvent {
    pub view: ViewKind,
    pub control: ControlId,
    pub value: ControlValue,
}

/// Reads a JSON Lines event log. Blank lines and `#` comments are skipped.
pub fn load_events(path: &Path) -> Result<Vec<ControlEvent>> {
    let reader = open_maybe_gz(path)
        .with_context(|| format!("failed to open events file {}", path.display()))?;
    let reader = BufReader::new(reader);

    let mut events = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let event: ControlEvent = serde_json::from_str(trimmed)
            .with_context(|| format!("{}:{} malformed control event", path.display(), idx + 1))?;
        events.push(event);
    }
    Ok(events)
}
