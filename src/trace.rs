//! Per-scenario action tracing.
//!
//! Every driver primitive appends a record here; the after-hook persists
//! the trace as a JSON archive next to the other scenario artifacts, so a
//! failed run can be replayed on a timeline without re-driving the site.

use crate::result::ComprarResult;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Instant;

/// Kind of primitive operation recorded in the trace
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    /// Navigation to a URL
    Navigate,
    /// Click on an element
    Click,
    /// Fill an input
    Fill,
    /// Select a dropdown option
    Select,
    /// Hover over an element
    Hover,
    /// Key press
    Press,
    /// Checkbox toggle
    Check,
    /// Text/attribute/count read
    Query,
    /// Visibility wait
    Wait,
    /// Screenshot capture
    Screenshot,
}

/// Outcome of a recorded action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionOutcome {
    /// The action completed
    Ok,
    /// The queried element was verified absent
    Absent,
    /// The action failed
    Error,
}

/// One traced action
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionRecord {
    /// Milliseconds since the trace started
    pub offset_ms: u64,
    /// What kind of action ran
    pub kind: ActionKind,
    /// Selector or URL the action targeted
    pub target: String,
    /// Extra detail (typed text, option code, read value)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    /// How the action ended
    pub outcome: ActionOutcome,
}

/// Recorded timeline of browser actions for one scenario
#[derive(Debug)]
pub struct ActionTrace {
    started: Instant,
    records: Vec<ActionRecord>,
}

impl Default for ActionTrace {
    fn default() -> Self {
        Self::new()
    }
}

impl ActionTrace {
    /// Start an empty trace
    #[must_use]
    pub fn new() -> Self {
        Self {
            started: Instant::now(),
            records: Vec::new(),
        }
    }

    /// Append a record, stamping the elapsed offset
    pub fn record(
        &mut self,
        kind: ActionKind,
        target: impl Into<String>,
        detail: Option<String>,
        outcome: ActionOutcome,
    ) {
        let offset_ms = u64::try_from(self.started.elapsed().as_millis()).unwrap_or(u64::MAX);
        self.records.push(ActionRecord {
            offset_ms,
            kind,
            target: target.into(),
            detail,
            outcome,
        });
    }

    /// Recorded actions, oldest first
    #[must_use]
    pub fn records(&self) -> &[ActionRecord] {
        &self.records
    }

    /// Number of recorded actions
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether nothing was recorded
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Persist the trace as a pretty-printed JSON archive
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save(&self, path: &Path) -> ComprarResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(&self.records)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}
