use comfy_table::Color;

use crate::core::TimelineEntry;
use crate::output::format::{Labels, category_color, create_styled_table, styled_cell};

pub(crate) fn build_entry_table(
    entry: &TimelineEntry,
    labels: &Labels,
    use_color: bool,
) -> comfy_table::Table {
    let key = |text: &str| styled_cell(text, use_color.then_some(Color::Cyan), true);
    let mut table = create_styled_table();

    table.add_row(vec![key("Id"), styled_cell(&entry.id, None, false)]);
    table.add_row(vec![key("Title"), styled_cell(&entry.title, None, entry.highlight)]);
    table.add_row(vec![
        key("Category"),
        styled_cell(
            labels.category(entry.category),
            use_color.then(|| category_color(entry.category)),
            false,
        ),
    ]);
    if let Some(org) = &entry.organization {
        table.add_row(vec![key("Organization"), styled_cell(org, None, false)]);
    }
    table.add_row(vec![
        key("Period"),
        styled_cell(&entry.span(labels.now), None, false),
    ]);
    if let Some(location) = &entry.location {
        table.add_row(vec![key("Location"), styled_cell(location, None, false)]);
    }
    if let Some(description) = &entry.description {
        table.add_row(vec![key("Description"), styled_cell(description, None, false)]);
    }
    if !entry.tech.is_empty() {
        table.add_row(vec![key("Tech"), styled_cell(&entry.tech.join(", "), None, false)]);
    }
    for (i, link) in entry.links.iter().enumerate() {
        let text = format!("{} <{}>", link.label, link.url);
        table.add_row(vec![
            key(if i == 0 { "Links" } else { "" }),
            styled_cell(&text, None, false),
        ]);
    }
    table
}

pub(crate) fn print_entry_detail(entry: &TimelineEntry, labels: &Labels, use_color: bool) {
    println!("{}", build_entry_table(entry, labels, use_color));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Category, TimelineLink, entry};

    #[test]
    fn detail_lists_links_and_optional_rows() {
        let mut e = entry("2024-jccm", Category::Job, "2021-11", Some("2025-02"));
        e.organization = Some("MINSAIT".into());
        e.links = vec![TimelineLink {
            label: "Sede".into(),
            url: "https://www.jccm.es/".into(),
            rel: None,
        }];
        let rendered = build_entry_table(&e, &Labels::default(), false).to_string();
        assert!(rendered.contains("MINSAIT"));
        assert!(rendered.contains("Sede <https://www.jccm.es/>"));
        assert!(!rendered.contains("Location"));
        assert!(!rendered.contains("Tech"));
    }
}
