use std::fmt::Write;

use crate::core::{Category, Timeline};
use crate::output::format::Labels;

fn csv_escape(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') || s.contains('\r') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}

/// One row per entry, in display order, with the group label as first column
pub(crate) fn output_timeline_csv(timeline: &Timeline<'_>, labels: &Labels) -> String {
    let mut out = String::from("group,id,category,title,organization,start,end,highlight,tech\n");

    for group in &timeline.groups {
        let label = labels.group(group.key);
        for entry in &group.entries {
            let _ = writeln!(
                out,
                "{},{},{},{},{},{},{},{},{}",
                csv_escape(&label),
                csv_escape(&entry.id),
                entry.category,
                csv_escape(&entry.title),
                csv_escape(entry.organization.as_deref().unwrap_or("")),
                csv_escape(&entry.start),
                csv_escape(entry.end.as_deref().unwrap_or("")),
                entry.highlight,
                csv_escape(&entry.tech.join("; ")),
            );
        }
    }
    out
}

/// Per-category counts, every category listed
pub(crate) fn output_categories_csv(counts: &[(Category, usize)]) -> String {
    let mut out = String::from("category,count\n");
    for (category, count) in counts {
        let _ = writeln!(out, "{category},{count}");
    }
    out
}
