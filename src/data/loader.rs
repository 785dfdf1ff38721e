//! Entry store loading
//!
//! The built-in collection is the default; a JSON array with the same schema
//! can replace it.

use std::fs;
use std::path::Path;

use crate::core::{EntryStore, TimelineEntry};
use crate::data::builtin::builtin_entries;
use crate::error::AppError;

/// Parse a JSON array of entries. `origin` is only used for error messages.
pub(crate) fn parse_entries(content: &str, origin: &Path) -> Result<Vec<TimelineEntry>, AppError> {
    serde_json::from_str(content).map_err(|source| AppError::DataParse {
        path: origin.to_path_buf(),
        source,
    })
}

pub(crate) fn load_store(data: Option<&Path>) -> Result<EntryStore, AppError> {
    let Some(path) = data else {
        return EntryStore::new(builtin_entries());
    };

    let content = fs::read_to_string(path).map_err(|source| AppError::DataFile {
        path: path.to_path_buf(),
        source,
    })?;
    let entries = parse_entries(&content, path)?;
    log::info!("loaded {} entries from {}", entries.len(), path.display());
    EntryStore::new(entries)
}
