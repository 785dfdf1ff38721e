use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("Invalid category \"{input}\" (expected all, job, project, education, award, talk or oss)")]
    InvalidCategory { input: String },

    #[error("Invalid timezone: {input}")]
    InvalidTimezone { input: String },

    #[error("Unsupported locale: {input}")]
    UnsupportedLocale { input: String },

    #[error("No entry with id \"{id}\"")]
    EntryNotFound { id: String },

    #[error("Duplicate entry id \"{id}\"")]
    DuplicateEntryId { id: String },

    #[error("Entry \"{id}\" has invalid {field} period \"{value}\" (expected YYYY-MM)")]
    InvalidPeriod {
        id: String,
        field: &'static str,
        value: String,
    },

    #[error("Failed to read data file {}: {source}", path.display())]
    DataFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse data file {}: {source}", path.display())]
    DataParse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Failed to write {}: {source}", path.display())]
    WriteOutput {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("{0}")]
    Jq(#[from] JqError),
}

#[derive(Debug, Error)]
pub(crate) enum JqError {
    #[error("jq not found. Please install jq to use --jq option.")]
    NotFound,

    #[error("Failed to run jq: {0}")]
    Spawn(std::io::Error),

    #[error("Failed to write to jq stdin: {0}")]
    Stdin(std::io::Error),

    #[error("Failed to wait for jq: {0}")]
    Wait(std::io::Error),

    #[error("Invalid UTF-8 from jq: {0}")]
    Utf8(std::string::FromUtf8Error),

    #[error("jq error: {0}")]
    Filter(String),
}
