//! Filter → sort → group pipeline
//!
//! Pure functions over a borrowed snapshot of the store. Callers recompute on
//! every input change; there is no cached state.

use std::cmp::Reverse;

use crate::core::types::{Category, CategoryFilter, TimelineEntry};
use crate::utils::date::period_year;

/// Inputs the derived timeline depends on
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct Query<'a> {
    pub(crate) category: CategoryFilter,
    pub(crate) search: &'a str,
}

/// Bucket identity for a display group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum GroupKey {
    /// Entries whose end is the ongoing sentinel
    Ongoing,
    Year(i32),
    /// No resolvable year
    Undated,
}

impl GroupKey {
    /// Ongoing first, then years newest first, undated last
    fn rank(self) -> (u8, Reverse<i32>) {
        match self {
            GroupKey::Ongoing => (0, Reverse(0)),
            GroupKey::Year(y) => (1, Reverse(y)),
            GroupKey::Undated => (2, Reverse(0)),
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) struct YearGroup<'a> {
    pub(crate) key: GroupKey,
    /// Numeric year of the bucket; the ongoing bucket carries the current year
    pub(crate) year: Option<i32>,
    pub(crate) entries: Vec<&'a TimelineEntry>,
}

/// Result of running the whole pipeline
#[derive(Debug, Clone)]
pub(crate) struct Timeline<'a> {
    pub(crate) items: Vec<&'a TimelineEntry>,
    pub(crate) groups: Vec<YearGroup<'a>>,
}

impl Timeline<'_> {
    pub(crate) fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

pub(crate) fn matches_query(entry: &TimelineEntry, query: &Query<'_>) -> bool {
    if !query.category.matches(entry.category) {
        return false;
    }
    let needle = query.search.to_lowercase();
    needle.is_empty() || entry.haystack().contains(&needle)
}

pub(crate) fn filter_entries<'a>(
    entries: &'a [TimelineEntry],
    query: &Query<'_>,
) -> Vec<&'a TimelineEntry> {
    entries.iter().filter(|e| matches_query(e, query)).collect()
}

/// Newest effective end first, ties by newest start
pub(crate) fn sort_entries(entries: &mut [&TimelineEntry]) {
    entries.sort_by(|a, b| {
        b.effective_end()
            .cmp(a.effective_end())
            .then_with(|| b.start.cmp(&a.start))
    });
}

pub(crate) fn group_key(entry: &TimelineEntry) -> GroupKey {
    if entry.is_ongoing() {
        return GroupKey::Ongoing;
    }
    period_year(entry.effective_end()).map_or(GroupKey::Undated, GroupKey::Year)
}

/// Bucket already-sorted entries, preserving their order inside each bucket
pub(crate) fn group_by_year<'a>(
    sorted: &[&'a TimelineEntry],
    current_year: i32,
) -> Vec<YearGroup<'a>> {
    let mut groups: Vec<YearGroup<'a>> = Vec::new();

    for &entry in sorted {
        let key = group_key(entry);
        match groups.iter_mut().find(|g| g.key == key) {
            Some(group) => group.entries.push(entry),
            None => groups.push(YearGroup {
                key,
                year: match key {
                    GroupKey::Ongoing => Some(current_year),
                    GroupKey::Year(y) => Some(y),
                    GroupKey::Undated => None,
                },
                entries: vec![entry],
            }),
        }
    }

    groups.sort_by_key(|g| g.key.rank());
    groups
}

/// Matches per category for a search, ignoring the category filter.
///
/// Every category is listed, including those with zero matches.
pub(crate) fn count_by_category(entries: &[TimelineEntry], search: &str) -> Vec<(Category, usize)> {
    let query = Query {
        category: CategoryFilter::All,
        search,
    };
    let matched = filter_entries(entries, &query);
    Category::ALL
        .iter()
        .map(|&c| (c, matched.iter().filter(|e| e.category == c).count()))
        .collect()
}

/// Run filter, sort and group in one pass
pub(crate) fn derive<'a>(
    entries: &'a [TimelineEntry],
    query: &Query<'_>,
    current_year: i32,
) -> Timeline<'a> {
    let mut items = filter_entries(entries, query);
    sort_entries(&mut items);
    let groups = group_by_year(&items, current_year);
    log::debug!(
        "pipeline: category={} search={:?} -> {} items in {} groups",
        query.category.label(),
        query.search,
        items.len(),
        groups.len()
    );
    Timeline { items, groups }
}
