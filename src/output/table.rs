use comfy_table::{Cell, Color, Table};

use crate::core::{Category, Timeline};
use crate::output::format::{
    Labels, category_color, create_styled_table, header_cell, right_cell, styled_cell, truncate,
};

const TECH_WIDTH: usize = 40;

#[derive(Debug, Clone, Copy)]
pub(crate) struct TimelineTableOptions {
    pub(crate) use_color: bool,
    pub(crate) compact: bool,
    pub(crate) labels: Labels,
}

pub(crate) fn build_timeline_table(timeline: &Timeline<'_>, opts: TimelineTableOptions) -> Table {
    let c = opts.use_color;
    let labels = opts.labels;
    let mut table = create_styled_table();

    let mut header = vec![
        header_cell("Year", c),
        header_cell("Period", c),
        header_cell("Category", c),
        header_cell("Title", c),
    ];
    if !opts.compact {
        header.extend([header_cell("Organization", c), header_cell("Tech", c)]);
    }
    table.set_header(header);

    for group in &timeline.groups {
        let year = labels.group(group.key);
        for (i, entry) in group.entries.iter().enumerate() {
            let year_cell = if i == 0 {
                styled_cell(&year, c.then_some(Color::Cyan), true)
            } else {
                Cell::new("")
            };
            let title = if entry.highlight {
                format!("★ {}", entry.title)
            } else {
                entry.title.clone()
            };
            let mut row = vec![
                year_cell,
                Cell::new(entry.span(labels.now)),
                styled_cell(
                    labels.category(entry.category),
                    c.then(|| category_color(entry.category)),
                    false,
                ),
                styled_cell(&title, None, entry.highlight),
            ];
            if !opts.compact {
                row.extend([
                    Cell::new(entry.organization.as_deref().unwrap_or("")),
                    Cell::new(truncate(&entry.tech.join(", "), TECH_WIDTH)),
                ]);
            }
            table.add_row(row);
        }
    }
    table
}

pub(crate) fn print_timeline_table(timeline: &Timeline<'_>, opts: TimelineTableOptions) {
    let table = build_timeline_table(timeline, opts);
    println!("\n  Timeline\n");
    println!("{table}");
    println!(
        "\n  {} entries in {} groups\n",
        timeline.items.len(),
        timeline.groups.len()
    );
}

pub(crate) fn print_categories_table(counts: &[(Category, usize)], opts: TimelineTableOptions) {
    let c = opts.use_color;
    let mut table = create_styled_table();
    table.set_header(vec![header_cell("Category", c), header_cell("Entries", c)]);

    let mut total = 0;
    for &(category, count) in counts {
        total += count;
        table.add_row(vec![
            styled_cell(
                opts.labels.category(category),
                c.then(|| category_color(category)),
                false,
            ),
            right_cell(&count.to_string(), None, false),
        ]);
    }
    table.add_row(vec![
        styled_cell("TOTAL", c.then_some(Color::Cyan), true),
        right_cell(&total.to_string(), c.then_some(Color::Cyan), true),
    ]);

    println!("{table}");
}
