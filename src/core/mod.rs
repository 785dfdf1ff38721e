//! Core module - timeline data model, entry store and the derivation pipeline

mod pipeline;
mod store;
mod types;

pub(crate) use pipeline::{GroupKey, Query, Timeline, count_by_category, derive, matches_query};
pub(crate) use store::EntryStore;
pub(crate) use types::{Category, CategoryFilter, TimelineEntry, TimelineLink};

#[cfg(test)]
pub(crate) use types::entry;
