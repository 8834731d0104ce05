//! Per-event candidate collections, keyed by label.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::candidate::Candidate;
use crate::error::{Error, Result};

/// One recorded event: candidate collections addressed by a short label.
///
/// This mirrors how the hosting framework hands collections to an analysis
/// module: the module is configured with a label per species and asks the
/// event record for that label. A missing label is fatal for the job.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventRecord {
    collections: BTreeMap<String, Vec<Candidate>>,
}

impl EventRecord {
    /// Create an empty event record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a candidate collection under `label`, replacing any previous one.
    pub fn insert(&mut self, label: impl Into<String>, candidates: Vec<Candidate>) {
        self.collections.insert(label.into(), candidates);
    }

    /// Look up the collection registered under `label`.
    pub fn collection(&self, label: &str) -> Result<&[Candidate]> {
        self.collections
            .get(label)
            .map(Vec::as_slice)
            .ok_or_else(|| Error::Validation(format!("missing candidate collection '{label}'")))
    }

    /// Labels present in this event, in sorted order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.collections.keys().map(String::as_str)
    }
}
