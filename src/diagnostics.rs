//! Consistency diagnostics for a single engine run.
//!
//! Structural mismatches never abort a computation under the default
//! policy. Each one is recorded here and surfaced in the results so the
//! caller can see which entries were dropped.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::dataset::ClientId;

/// Pipeline stage that detected a mismatch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    /// Per-client weight extraction.
    WeightExtraction,
    /// Trust scoring over the extracted weights.
    TrustScoring,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::WeightExtraction => write!(f, "weight extraction"),
            Stage::TrustScoring => write!(f, "trust scoring"),
        }
    }
}

/// A skipped entry whose id did not match its 1-based position.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Inconsistency {
    /// Stage that skipped the entry.
    pub stage: Stage,
    /// 0-based position of the entry in its sequence.
    pub index: usize,
    /// Id the position implies (`index + 1`).
    pub expected: ClientId,
    /// Id actually carried by the entry.
    pub actual: ClientId,
}

impl fmt::Display for Inconsistency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} mismatch at index {}: expected client {}, got {}",
            self.stage, self.index, self.expected, self.actual
        )
    }
}

/// Append-only log of inconsistencies found during one run.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Diagnostics {
    entries: Vec<Inconsistency>,
}

impl Diagnostics {
    /// Create a new, empty log.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Record a mismatch and emit it as a warning.
    pub fn record(&mut self, entry: Inconsistency) {
        tracing::warn!(
            stage = %entry.stage,
            index = entry.index,
            expected = entry.expected,
            actual = entry.actual,
            "skipping entry with mismatched client id"
        );
        self.entries.push(entry);
    }

    /// Get all entries.
    pub fn entries(&self) -> &[Inconsistency] {
        &self.entries
    }

    /// Number of recorded mismatches.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the log is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Consume the log, returning its entries.
    pub fn into_entries(self) -> Vec<Inconsistency> {
        self.entries
    }
}
