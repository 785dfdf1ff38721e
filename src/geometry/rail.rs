use serde::Serialize;

use super::Rect;

/// Shortest rail drawn, so a single marker still shows a visible segment
pub(crate) const MIN_RAIL_HEIGHT: f64 = 2.0;

/// Rail span in container-relative pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub(crate) struct RailBounds {
    pub(crate) start: f64,
    pub(crate) end: f64,
    pub(crate) left: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Rail {
    /// Nothing passed the filters: no base rail either
    Hidden,
    /// Items exist but none can be measured yet; keep the base rail, drop progress
    Unmeasured,
    Drawn(RailBounds),
}

/// Span between the first and last visible markers.
///
/// `markers` are the dot rectangles of the entries currently laid out, in
/// display order. `item_count` is the number of logical items after filtering,
/// which may be non-zero while nothing is measurable yet.
pub(crate) fn compute_rail(item_count: usize, container: Rect, markers: &[Rect]) -> Rail {
    if item_count == 0 {
        return Rail::Hidden;
    }
    let (Some(first), Some(last)) = (markers.first(), markers.last()) else {
        return Rail::Unmeasured;
    };

    let start = (first.top - container.top) + first.height / 2.0;
    let end = (last.top - container.top) + last.height / 2.0;
    let left = (first.left - container.left) + first.width / 2.0;

    let s = start.min(end).max(0.0);
    let mut e = start.max(end);
    if e - s < MIN_RAIL_HEIGHT {
        e = s + MIN_RAIL_HEIGHT;
    }

    if !(s.is_finite() && e.is_finite() && left.is_finite()) {
        return Rail::Unmeasured;
    }
    Rail::Drawn(RailBounds { start: s, end: e, left })
}
