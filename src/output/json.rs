use serde_json::{Value, json};

use crate::core::{Category, CategoryFilter, Timeline, TimelineEntry};
use crate::geometry::LayoutPreview;
use crate::output::format::{Labels, to_json_string};

fn entry_value(entry: &TimelineEntry, labels: &Labels) -> Value {
    let mut value = serde_json::to_value(entry).unwrap_or(Value::Null);
    if let Value::Object(map) = &mut value {
        map.insert("ongoing".into(), json!(entry.is_ongoing()));
        map.insert("period".into(), json!(entry.span(labels.now)));
    }
    value
}

/// Grouped timeline as JSON: filters echoed back plus one object per group
pub(crate) fn output_timeline_json(
    timeline: &Timeline<'_>,
    category: CategoryFilter,
    search: &str,
    labels: &Labels,
) -> String {
    let groups: Vec<Value> = timeline
        .groups
        .iter()
        .map(|group| {
            json!({
                "label": labels.group(group.key),
                "year": group.year,
                "entries": group
                    .entries
                    .iter()
                    .map(|e| entry_value(e, labels))
                    .collect::<Vec<_>>(),
            })
        })
        .collect();

    let output = json!({
        "category": category.label(),
        "search": search,
        "total": timeline.items.len(),
        "groups": groups,
    });
    to_json_string(&output, true)
}

pub(crate) fn output_entry_json(entry: &TimelineEntry, labels: &Labels) -> String {
    to_json_string(&entry_value(entry, labels), true)
}

pub(crate) fn output_categories_json(counts: &[(Category, usize)]) -> String {
    let output: Vec<Value> = counts
        .iter()
        .map(|(category, count)| json!({ "category": category, "count": count }))
        .collect();
    to_json_string(&Value::Array(output), true)
}

pub(crate) fn output_layout_json(preview: &LayoutPreview) -> String {
    let mut value = serde_json::to_value(preview).unwrap_or(Value::Null);
    if let Value::Object(map) = &mut value {
        let color = preview.spotlight.color;
        map.insert(
            "active_id".into(),
            json!(preview.active_card().map(|c| c.id.as_str())),
        );
        map.insert("spot_color".into(), json!(color.spot()));
        map.insert("spot_strong".into(), json!(color.strong()));
    }
    to_json_string(&value, true)
}
