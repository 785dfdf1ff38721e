//! Decorative geometry: progress rail, viewport spotlight and their
//! recalculation schedule.
//!
//! Everything here is pure arithmetic on rectangles so it can run against real
//! browser measurements (the page script mirrors it) or against the synthetic
//! layout used by the `layout` command.

mod layout;
mod rail;
mod schedule;
mod spotlight;

pub(crate) use layout::{LayoutOptions, LayoutPreview, preview_layout};
pub(crate) use rail::MIN_RAIL_HEIGHT;
pub(crate) use schedule::{RECALC_PLAN, recalc_script};
pub(crate) use spotlight::{DEFAULT_ACCENT, category_hex};

/// Axis-aligned box in CSS pixels, viewport-relative like `getBoundingClientRect`
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub(crate) struct Rect {
    pub(crate) top: f64,
    pub(crate) left: f64,
    pub(crate) width: f64,
    pub(crate) height: f64,
}

impl Rect {
    pub(crate) fn new(top: f64, left: f64, width: f64, height: f64) -> Self {
        Self {
            top,
            left,
            width,
            height,
        }
    }

    pub(crate) fn bottom(&self) -> f64 {
        self.top + self.height
    }

    pub(crate) fn center_y(&self) -> f64 {
        (self.top + self.bottom()) / 2.0
    }
}
