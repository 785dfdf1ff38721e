use crate::core::TimelineEntry;
use crate::output::format::{Labels, to_json_string};

/// Single line listing ongoing entries, suitable for a status bar or shell prompt.
/// Format: "Ahora: Workout App (Proyecto) | Consultant @ Acme (Trabajo)"
pub(crate) fn now_line(ongoing: &[&TimelineEntry], labels: &Labels) -> String {
    if ongoing.is_empty() {
        return format!("{}: -", labels.now);
    }
    let parts: Vec<String> = ongoing
        .iter()
        .map(|e| match &e.organization {
            Some(org) => format!("{} @ {} ({})", e.title, org, labels.category(e.category)),
            None => format!("{} ({})", e.title, labels.category(e.category)),
        })
        .collect();
    format!("{}: {}", labels.now, parts.join(" | "))
}

pub(crate) fn print_now(ongoing: &[&TimelineEntry], labels: &Labels) {
    println!("{}", now_line(ongoing, labels));
}

/// Ongoing entries as compact JSON for programmatic consumption
pub(crate) fn output_now_json(ongoing: &[&TimelineEntry], labels: &Labels) -> String {
    let output = serde_json::json!({
        "label": labels.now,
        "count": ongoing.len(),
        "entries": ongoing
            .iter()
            .map(|e| serde_json::json!({
                "id": e.id,
                "title": e.title,
                "category": e.category,
                "organization": e.organization,
                "start": e.start,
            }))
            .collect::<Vec<_>>(),
        "formatted": now_line(ongoing, labels),
    });
    to_json_string(&output, false)
}
