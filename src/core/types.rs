//! Core timeline types
//!
//! Every renderer consumes these; the entry store and the pipeline produce them.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::consts::PRESENT;
use crate::error::AppError;

/// Closed set of entry classifications
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum Category {
    Job,
    Project,
    Education,
    Award,
    Talk,
    #[serde(alias = "open-source")]
    Oss,
}

impl Category {
    pub(crate) const ALL: [Category; 6] = [
        Category::Job,
        Category::Project,
        Category::Education,
        Category::Award,
        Category::Talk,
        Category::Oss,
    ];

    pub(crate) fn as_str(self) -> &'static str {
        match self {
            Category::Job => "job",
            Category::Project => "project",
            Category::Education => "education",
            Category::Award => "award",
            Category::Talk => "talk",
            Category::Oss => "oss",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "job" => Ok(Category::Job),
            "project" => Ok(Category::Project),
            "education" => Ok(Category::Education),
            "award" => Ok(Category::Award),
            "talk" => Ok(Category::Talk),
            "oss" | "open-source" | "opensource" => Ok(Category::Oss),
            _ => Err(AppError::InvalidCategory {
                input: s.to_string(),
            }),
        }
    }
}

/// Category selection for the pipeline: everything, or a single category
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub(crate) fn matches(self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(c) => c == category,
        }
    }

    pub(crate) fn label(self) -> &'static str {
        match self {
            CategoryFilter::All => "all",
            CategoryFilter::Only(c) => c.as_str(),
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(CategoryFilter::All);
        }
        s.parse().map(CategoryFilter::Only)
    }
}

/// A link attached to an entry (case study, repository, demo)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct TimelineLink {
    pub(crate) label: String,
    pub(crate) url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) rel: Option<String>,
}

/// One timeline record
///
/// Periods are kept as the original `YYYY-MM` strings: lexicographic order of
/// those strings is chronological order, and the pipeline relies on that.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct TimelineEntry {
    pub(crate) id: String,
    #[serde(alias = "kind")]
    pub(crate) category: Category,
    pub(crate) title: String,
    #[serde(default, alias = "org", skip_serializing_if = "Option::is_none")]
    pub(crate) organization: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub(crate) tech: Vec<String>,
    pub(crate) start: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) end: Option<String>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub(crate) highlight: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub(crate) links: Vec<TimelineLink>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) location: Option<String>,
}

impl TimelineEntry {
    /// End period when present, otherwise the start period
    pub(crate) fn effective_end(&self) -> &str {
        self.end.as_deref().unwrap_or(&self.start)
    }

    pub(crate) fn is_ongoing(&self) -> bool {
        self.end
            .as_deref()
            .is_some_and(|e| e.eq_ignore_ascii_case(PRESENT))
    }

    /// Lowercase text the free-text search runs against
    pub(crate) fn haystack(&self) -> String {
        format!(
            "{} {} {} {}",
            self.title,
            self.organization.as_deref().unwrap_or(""),
            self.description.as_deref().unwrap_or(""),
            self.tech.join(" ")
        )
        .to_lowercase()
    }

    /// Human-readable period span, e.g. "2021-11 – 2025-02"
    pub(crate) fn span(&self, now_label: &str) -> String {
        match self.end.as_deref() {
            Some(_) if self.is_ongoing() => format!("{} – {}", self.start, now_label),
            Some(end) if end != self.start => format!("{} – {}", self.start, end),
            _ => self.start.clone(),
        }
    }
}

#[cfg(test)]
pub(crate) fn entry(id: &str, category: Category, start: &str, end: Option<&str>) -> TimelineEntry {
    TimelineEntry {
        id: id.to_string(),
        category,
        title: id.to_string(),
        organization: None,
        description: None,
        tech: Vec::new(),
        start: start.to_string(),
        end: end.map(str::to_string),
        highlight: false,
        links: Vec::new(),
        location: None,
    }
}
