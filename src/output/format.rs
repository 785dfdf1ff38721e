use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ContentArrangement, Table, TableComponent,
    modifiers::UTF8_SOLID_INNER_BORDERS, presets::UTF8_FULL,
};

use crate::core::{Category, GroupKey};
use crate::error::AppError;

/// Display strings that depend on the page language
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Labels {
    pub(crate) lang: &'static str,
    pub(crate) now: &'static str,
    pub(crate) undated: &'static str,
    pub(crate) all: &'static str,
    pub(crate) search_placeholder: &'static str,
    pub(crate) empty: &'static str,
}

const SPANISH: Labels = Labels {
    lang: "es",
    now: "Ahora",
    undated: "Sin fecha",
    all: "Todo",
    search_placeholder: "Buscar por título, empresa o tecnología…",
    empty: "No hay resultados para los filtros actuales.",
};

const ENGLISH: Labels = Labels {
    lang: "en",
    now: "Now",
    undated: "Undated",
    all: "All",
    search_placeholder: "Search by title, company or technology…",
    empty: "No entries match the current filters.",
};

impl Default for Labels {
    fn default() -> Self {
        SPANISH
    }
}

impl Labels {
    pub(crate) fn from_locale(locale: Option<&str>) -> Result<Self, AppError> {
        let Some(raw) = locale else {
            return Ok(Labels::default());
        };
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Ok(Labels::default());
        }
        let base = trimmed
            .split(['-', '_'])
            .next()
            .unwrap_or(trimmed)
            .to_ascii_lowercase();

        match base.as_str() {
            "es" => Ok(SPANISH),
            "en" => Ok(ENGLISH),
            _ => Err(AppError::UnsupportedLocale {
                input: trimmed.to_string(),
            }),
        }
    }

    pub(crate) fn group(&self, key: GroupKey) -> String {
        match key {
            GroupKey::Ongoing => self.now.to_string(),
            GroupKey::Year(y) => y.to_string(),
            GroupKey::Undated => self.undated.to_string(),
        }
    }

    pub(crate) fn category(&self, category: Category) -> &'static str {
        match (self.lang, category) {
            ("es", Category::Job) => "Trabajo",
            ("es", Category::Project) => "Proyecto",
            ("es", Category::Education) => "Formación",
            ("es", Category::Award) => "Premio",
            ("es", Category::Talk) => "Charla",
            (_, Category::Job) => "Job",
            (_, Category::Project) => "Project",
            (_, Category::Education) => "Education",
            (_, Category::Award) => "Award",
            (_, Category::Talk) => "Talk",
            (_, Category::Oss) => "Open source",
        }
    }
}

/// Terminal colour per category, close to the page's spotlight palette
pub(crate) fn category_color(category: Category) -> Color {
    match category {
        Category::Job => Color::Blue,
        Category::Project => Color::Green,
        Category::Education => Color::Yellow,
        Category::Award => Color::Red,
        Category::Talk => Color::Magenta,
        Category::Oss => Color::Cyan,
    }
}

pub(crate) fn styled_cell(text: &str, color: Option<Color>, bold: bool) -> Cell {
    let mut cell = Cell::new(text);
    if let Some(c) = color {
        cell = cell.fg(c);
    }
    if bold {
        cell = cell.add_attribute(Attribute::Bold);
    }
    cell
}

pub(crate) fn header_cell(text: &str, use_color: bool) -> Cell {
    let mut cell = Cell::new(text).add_attribute(Attribute::Bold);
    if use_color {
        cell = cell.fg(Color::Cyan);
    }
    cell
}

pub(crate) fn right_cell(text: &str, color: Option<Color>, bold: bool) -> Cell {
    styled_cell(text, color, bold).set_alignment(CellAlignment::Right)
}

/// Replace the double-line header separator (╞═╪═╡) with single-line (├─┼─┤)
fn normalize_header_separator(table: &mut Table) {
    table.set_style(TableComponent::HeaderLines, '─');
    table.set_style(TableComponent::LeftHeaderIntersection, '├');
    table.set_style(TableComponent::MiddleHeaderIntersections, '┼');
    table.set_style(TableComponent::RightHeaderIntersection, '┤');
}

/// Create a table with the standard preset, inner borders, and normalized header separator.
pub(crate) fn create_styled_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    normalize_header_separator(&mut table);
    table
}

/// Shorten to `max` characters, marking the cut with an ellipsis
pub(crate) fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let kept: String = text.chars().take(max.saturating_sub(1)).collect();
    format!("{}…", kept.trim_end())
}

pub(crate) fn to_json_string(value: &serde_json::Value, pretty: bool) -> String {
    let result = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    result.unwrap_or_else(|e| {
        log::error!("Failed to serialize JSON output: {e}");
        "null".to_string()
    })
}
