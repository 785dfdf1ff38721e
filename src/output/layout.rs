use comfy_table::Color;

use crate::geometry::LayoutPreview;
use crate::output::format::{
    Labels, category_color, create_styled_table, header_cell, right_cell, styled_cell,
};

pub(crate) fn print_layout_table(preview: &LayoutPreview, labels: &Labels, use_color: bool) {
    let mut table = create_styled_table();
    table.set_header(vec![
        header_cell("", use_color),
        header_cell("Entry", use_color),
        header_cell("Category", use_color),
        header_cell("Top", use_color),
        header_cell("Height", use_color),
    ]);

    let active = preview.spotlight.active;
    for (i, card) in preview.cards.iter().enumerate() {
        let is_active = active == Some(i);
        let marker = if is_active { "●" } else { "" };
        table.add_row(vec![
            styled_cell(marker, use_color.then_some(Color::Yellow), true),
            styled_cell(&card.id, None, is_active),
            styled_cell(
                labels.category(card.category),
                use_color.then(|| category_color(card.category)),
                false,
            ),
            right_cell(&format!("{:.0}", card.top), None, false),
            right_cell(&format!("{:.0}", card.height), None, false),
        ]);
    }

    println!(
        "\n  Layout at scroll {:.0}px, viewport {:.0}px (document {:.0}px)\n",
        preview.scroll, preview.viewport_height, preview.document_height
    );
    println!("{table}");
    match preview.rail {
        Some(rail) => println!(
            "\n  Rail: {:.1}px → {:.1}px at x={:.1}px",
            rail.start, rail.end, rail.left
        ),
        None => println!("\n  Rail: hidden"),
    }
    let color = preview.spotlight.color;
    println!(
        "  Spotlight: y={:.1}px, {} {}\n",
        preview.spotlight.spot_y,
        preview.active_card().map_or("-", |c| c.id.as_str()),
        color.spot()
    );
}
