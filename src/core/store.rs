//! Immutable entry collection
//!
//! Built once at startup (from the compiled-in data or a JSON file) and only
//! read afterwards. Construction is the single place the invariants are checked.

use std::collections::HashSet;

use crate::core::types::TimelineEntry;
use crate::error::AppError;
use crate::utils::date::{is_valid_end, parse_period};

#[derive(Debug, Clone)]
pub(crate) struct EntryStore {
    entries: Vec<TimelineEntry>,
}

impl EntryStore {
    /// Validate and wrap a collection.
    ///
    /// Rejects duplicate ids, unparseable start periods, and end periods that
    /// are neither dates nor the ongoing sentinel.
    pub(crate) fn new(entries: Vec<TimelineEntry>) -> Result<Self, AppError> {
        let mut seen = HashSet::with_capacity(entries.len());
        for entry in &entries {
            if !seen.insert(entry.id.as_str()) {
                return Err(AppError::DuplicateEntryId {
                    id: entry.id.clone(),
                });
            }
            if parse_period(&entry.start).is_none() {
                return Err(AppError::InvalidPeriod {
                    id: entry.id.clone(),
                    field: "start",
                    value: entry.start.clone(),
                });
            }
            if let Some(end) = entry.end.as_deref()
                && !is_valid_end(end)
            {
                return Err(AppError::InvalidPeriod {
                    id: entry.id.clone(),
                    field: "end",
                    value: end.to_string(),
                });
            }
        }
        log::debug!("entry store ready with {} entries", entries.len());
        Ok(Self { entries })
    }

    pub(crate) fn entries(&self) -> &[TimelineEntry] {
        &self.entries
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn get(&self, id: &str) -> Option<&TimelineEntry> {
        self.entries.iter().find(|e| e.id == id)
    }
}
