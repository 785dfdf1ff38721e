use serde::Serialize;

use super::Rect;
use crate::core::Category;

/// Accent used when no entry is active
pub(crate) const DEFAULT_ACCENT: &str = "#7aa2f7";

const SPOT_ALPHA: f64 = 0.18;
const STRONG_ALPHA: f64 = 0.35;

pub(crate) fn category_hex(category: Category) -> &'static str {
    match category {
        Category::Project => "#a7f3d0",
        Category::Job => "#93c5fd",
        Category::Education => "#fde68a",
        Category::Award => "#fca5a5",
        Category::Talk => "#c7d2fe",
        Category::Oss => "#ddd6fe",
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub(crate) struct Rgb(pub(crate) u8, pub(crate) u8, pub(crate) u8);

impl Rgb {
    fn rgba(self, alpha: f64) -> String {
        format!("rgba({}, {}, {}, {alpha})", self.0, self.1, self.2)
    }

    /// Soft fill behind the active card
    pub(crate) fn spot(self) -> String {
        self.rgba(SPOT_ALPHA)
    }

    /// Stronger tone for the active marker
    pub(crate) fn strong(self) -> String {
        self.rgba(STRONG_ALPHA)
    }
}

/// `#rgb` or `#rrggbb`; anything unparseable maps to black
pub(crate) fn hex_to_rgb(hex: &str) -> Rgb {
    let cleaned = hex.trim_start_matches('#');
    let expanded: String = if cleaned.len() == 3 {
        cleaned.chars().flat_map(|c| [c, c]).collect()
    } else {
        cleaned.to_string()
    };
    let value = u32::from_str_radix(&expanded, 16).unwrap_or(0);
    Rgb(
        ((value >> 16) & 0xff) as u8,
        ((value >> 8) & 0xff) as u8,
        (value & 0xff) as u8,
    )
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct Spotlight {
    /// Viewport centre relative to the container top
    pub(crate) spot_y: f64,
    /// Index of the card closest to the viewport centre
    pub(crate) active: Option<usize>,
    pub(crate) color: Rgb,
}

/// Pick the card whose vertical centre is nearest the viewport centre.
///
/// Earlier cards win ties. With no cards the spotlight still tracks the
/// viewport but keeps the default accent.
pub(crate) fn compute_spotlight(
    viewport_height: f64,
    container: Rect,
    cards: &[(Rect, Category)],
) -> Spotlight {
    let viewport_center = viewport_height / 2.0;
    let spot_y = viewport_center - container.top;

    let mut best: Option<(usize, f64)> = None;
    for (i, (rect, _)) in cards.iter().enumerate() {
        let dist = (rect.center_y() - viewport_center).abs();
        if best.is_none_or(|(_, d)| dist < d) {
            best = Some((i, dist));
        }
    }

    let active = best.map(|(i, _)| i);
    let hex = active.map_or(DEFAULT_ACCENT, |i| category_hex(cards[i].1));
    Spotlight {
        spot_y,
        active,
        color: hex_to_rgb(hex),
    }
}
