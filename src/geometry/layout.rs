//! Deterministic stand-in for the browser layout
//!
//! Stacks group headers and entry cards vertically with fixed metrics and a
//! description height estimated from word wrapping, then measures the rail and
//! spotlight for a scroll offset exactly as the page script would.

use serde::Serialize;

use super::rail::{Rail, RailBounds, compute_rail};
use super::spotlight::{Spotlight, compute_spotlight};
use super::Rect;
use crate::core::{Category, Timeline, TimelineEntry};

const PAGE_HEADER: f64 = 160.0;
const GROUP_HEADER: f64 = 48.0;
const CARD_BASE: f64 = 72.0;
const CARD_GAP: f64 = 16.0;
const LINE_HEIGHT: f64 = 20.0;
const TECH_ROW: f64 = 28.0;
const WRAP_COLUMNS: usize = 72;
const CARD_LEFT: f64 = 48.0;
const CARD_WIDTH: f64 = 640.0;
const DOT_SIZE: f64 = 12.0;
const DOT_TOP: f64 = 22.0;
const DOT_LEFT: f64 = 18.0;

#[derive(Debug, Clone, Copy)]
pub(crate) struct LayoutOptions {
    pub(crate) scroll: f64,
    pub(crate) viewport_height: f64,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            scroll: 0.0,
            viewport_height: 900.0,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct CardBox {
    pub(crate) id: String,
    pub(crate) category: Category,
    /// Document-relative top, independent of scroll
    pub(crate) top: f64,
    pub(crate) height: f64,
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct LayoutPreview {
    pub(crate) scroll: f64,
    pub(crate) viewport_height: f64,
    pub(crate) document_height: f64,
    pub(crate) cards: Vec<CardBox>,
    pub(crate) rail: Option<RailBounds>,
    pub(crate) spotlight: Spotlight,
}

impl LayoutPreview {
    pub(crate) fn active_card(&self) -> Option<&CardBox> {
        self.spotlight.active.and_then(|i| self.cards.get(i))
    }
}

/// Number of wrapped lines a text needs at `columns` characters per line
fn wrapped_lines(text: &str, columns: usize) -> usize {
    let mut lines = 0;
    let mut current = 0;
    for word in text.split_whitespace() {
        let len = word.chars().count();
        if current == 0 {
            current = len;
            lines += 1;
        } else if current + 1 + len > columns {
            current = len;
            lines += 1;
        } else {
            current += 1 + len;
        }
    }
    lines
}

fn card_height(entry: &TimelineEntry) -> f64 {
    let desc_lines = entry
        .description
        .as_deref()
        .map_or(0, |d| wrapped_lines(d, WRAP_COLUMNS));
    let tech = if entry.tech.is_empty() { 0.0 } else { TECH_ROW };
    CARD_BASE + desc_lines as f64 * LINE_HEIGHT + tech
}

fn stack_cards(timeline: &Timeline<'_>) -> (Vec<CardBox>, f64) {
    let mut cards = Vec::with_capacity(timeline.items.len());
    let mut y = 0.0;
    for group in &timeline.groups {
        y += GROUP_HEADER;
        for entry in &group.entries {
            let height = card_height(entry);
            cards.push(CardBox {
                id: entry.id.clone(),
                category: entry.category,
                top: y,
                height,
            });
            y += height + CARD_GAP;
        }
    }
    (cards, y)
}

pub(crate) fn preview_layout(timeline: &Timeline<'_>, opts: LayoutOptions) -> LayoutPreview {
    let (cards, list_height) = stack_cards(timeline);

    // Viewport-relative, as getBoundingClientRect reports them
    let container = Rect::new(PAGE_HEADER - opts.scroll, 0.0, CARD_LEFT + CARD_WIDTH, list_height);
    let card_rects: Vec<(Rect, Category)> = cards
        .iter()
        .map(|c| {
            (
                Rect::new(container.top + c.top, CARD_LEFT, CARD_WIDTH, c.height),
                c.category,
            )
        })
        .collect();
    let markers: Vec<Rect> = card_rects
        .iter()
        .map(|(r, _)| Rect::new(r.top + DOT_TOP, DOT_LEFT, DOT_SIZE, DOT_SIZE))
        .collect();

    let rail = match compute_rail(timeline.items.len(), container, &markers) {
        Rail::Drawn(bounds) => Some(bounds),
        Rail::Hidden | Rail::Unmeasured => None,
    };
    let spotlight = compute_spotlight(opts.viewport_height, container, &card_rects);
    log::debug!(
        "layout: scroll={} viewport={} cards={} active={:?}",
        opts.scroll,
        opts.viewport_height,
        cards.len(),
        spotlight.active
    );

    LayoutPreview {
        scroll: opts.scroll,
        viewport_height: opts.viewport_height,
        document_height: PAGE_HEADER + list_height,
        cards,
        rail,
        spotlight,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Query, derive, entry};

    #[test]
    fn wraps_words_at_column_limit() {
        assert_eq!(wrapped_lines("", 10), 0);
        assert_eq!(wrapped_lines("one two", 10), 1);
        assert_eq!(wrapped_lines("one two three", 10), 2);
        assert_eq!(wrapped_lines("abcdefghijklmno", 10), 1);
    }

    #[test]
    fn cards_stack_under_group_headers() {
        let entries = vec![
            entry("b", Category::Project, "2025-03", Some("present")),
            entry("a", Category::Job, "2021-11", Some("2025-02")),
        ];
        let timeline = derive(&entries, &Query::default(), 2026);
        let preview = preview_layout(&timeline, LayoutOptions::default());

        assert_eq!(preview.cards.len(), 2);
        assert_eq!(preview.cards[0].top, GROUP_HEADER);
        assert_eq!(
            preview.cards[1].top,
            GROUP_HEADER + CARD_BASE + CARD_GAP + GROUP_HEADER
        );
        let rail = preview.rail.expect("rail drawn");
        assert_eq!(rail.start, GROUP_HEADER + DOT_TOP + DOT_SIZE / 2.0);
        assert_eq!(rail.end, preview.cards[1].top + DOT_TOP + DOT_SIZE / 2.0);
        assert_eq!(rail.left, DOT_LEFT + DOT_SIZE / 2.0);
    }

    #[test]
    fn scrolling_moves_spotlight_down_the_list() {
        let entries: Vec<_> = (0..10)
            .map(|i| entry(&format!("e{i}"), Category::Job, &format!("20{:02}-01", 10 + i), None))
            .collect();
        let timeline = derive(&entries, &Query::default(), 2026);

        let top = preview_layout(&timeline, LayoutOptions::default());
        let scrolled = preview_layout(
            &timeline,
            LayoutOptions {
                scroll: 1200.0,
                viewport_height: 900.0,
            },
        );
        let first = top.spotlight.active.unwrap();
        let later = scrolled.spotlight.active.unwrap();
        assert!(later > first);
        assert_eq!(scrolled.spotlight.spot_y, 450.0 - (PAGE_HEADER - 1200.0));
    }

    #[test]
    fn empty_timeline_has_no_rail_or_active_card() {
        let entries: Vec<TimelineEntry> = Vec::new();
        let timeline = derive(&entries, &Query::default(), 2026);
        let preview = preview_layout(&timeline, LayoutOptions::default());
        assert!(preview.rail.is_none());
        assert!(preview.active_card().is_none());
        assert_eq!(preview.document_height, PAGE_HEADER);
    }
}
