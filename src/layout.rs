//! End-of-line label layout: fan labels out vertically without overlap,
//! preserve top-to-bottom correspondence with where each line terminates,
//! and keep every label pill inside the plot's right edge.
//!
//! `layout` is a pure function of its inputs. It keeps no memory of
//! previous layouts, so labels reposition instantly between renders
//! instead of animating.

use crate::domain::Viewport;
use crate::models::{Series, SeriesId};
use crate::render::text::estimate_text_width_px;
use crate::state::ChartState;
use log::trace;

/// Vertical center-to-center spacing floor between adjacent labels, px.
pub const MIN_LABEL_GAP: f64 = 30.0;
/// Kept clear between the last pill and the plot's right boundary, px.
pub const RIGHT_PAD: f64 = 18.0;
/// Horizontal offset from an anchor to its pill's preferred left edge, px.
pub const LABEL_X_OFFSET: f64 = 10.0;
/// Gap between the leader line's end and the pill's left edge, px.
pub const LEADER_GAP: f64 = 6.0;
/// Pill height, px.
pub const LABEL_HEIGHT: f64 = 20.0;
/// Pills never shrink below this width, px.
pub const MIN_LABEL_WIDTH: f64 = 96.0;
/// Font size used for pill text and its width heuristic.
pub const LABEL_FONT_PX: u32 = 12;

/// Endpoint of a series line: where its label wants to sit.
#[derive(Debug, Clone, PartialEq)]
pub struct Anchor {
    pub id: SeriesId,
    /// Pixel position of the series' last visible sample.
    pub x: f64,
    pub y: f64,
    pub text: String,
}

/// Vertical extent labels may occupy and the hard right boundary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutBounds {
    pub top: f64,
    pub bottom: f64,
    pub right_edge: f64,
}

/// A label with its final placement.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedLabel {
    pub id: SeriesId,
    /// Left edge of the pill.
    pub x: f64,
    /// Vertical center of the pill; the leader line is drawn at this y.
    pub y: f64,
    pub width: f64,
    /// X of the anchored line endpoint, where the leader starts.
    pub anchor_x: f64,
    pub text: String,
}

/// Pill width for a label text: monospace-width heuristic with a floor.
pub fn label_width(text: &str) -> f64 {
    let text_px = estimate_text_width_px(text, LABEL_FONT_PX) as f64;
    (text_px + 14.0).max(MIN_LABEL_WIDTH)
}

/// Compute non-overlapping placements for end-of-line labels.
///
/// Anchors are stacked top to bottom in order of their natural y (stable:
/// equal y keeps input order). A forward sweep pushes lower labels down to
/// honor `min_gap`; if that overflows the bottom bound, a backward sweep
/// redistributes the stack upward. Any remaining overflow moves the whole
/// stack rigidly, preserving uniform spacing, before a final per-label
/// clamp. When the bounds cannot hold `len * min_gap` of labels, the clamp
/// may reintroduce minor overlap; that degraded rendering is deliberate.
pub fn layout(anchors: &[Anchor], bounds: LayoutBounds, min_gap: f64) -> Vec<PlacedLabel> {
    if anchors.is_empty() {
        return Vec::new();
    }

    let mut ordered: Vec<&Anchor> = anchors.iter().collect();
    ordered.sort_by(|a, b| a.y.partial_cmp(&b.y).unwrap_or(std::cmp::Ordering::Equal));

    let mut ys: Vec<f64> = ordered.iter().map(|a| a.y).collect();
    let n = ys.len();

    // Forward sweep: push lower labels down to open the gap.
    for i in 1..n {
        if ys[i] < ys[i - 1] + min_gap {
            ys[i] = ys[i - 1] + min_gap;
        }
    }

    // Backward sweep: when the stack ran past the bottom, pull labels back
    // up without closing any gap below min_gap.
    if ys[n - 1] > bounds.bottom {
        ys[n - 1] = ys[n - 1].min(bounds.bottom);
        for i in (0..n - 1).rev() {
            if ys[i] > ys[i + 1] - min_gap {
                ys[i] = ys[i + 1] - min_gap;
            }
        }
    }

    // Rigid shift: move the whole stack by the overflow amount so spacing
    // stays uniform, then clamp as a final safety net.
    let overflow_down = ys[n - 1] - bounds.bottom;
    let overflow_up = bounds.top - ys[0];
    let shift = if overflow_down > 0.0 {
        -overflow_down
    } else if overflow_up > 0.0 {
        overflow_up
    } else {
        0.0
    };
    if shift != 0.0 {
        trace!("label stack shifted by {shift:.1}px to stay inside bounds");
        for y in ys.iter_mut() {
            *y += shift;
        }
    }
    for y in ys.iter_mut() {
        *y = y.clamp(bounds.top, bounds.bottom);
    }

    ordered
        .into_iter()
        .zip(ys)
        .map(|(anchor, y)| {
            let width = label_width(&anchor.text);
            let x = (bounds.right_edge - RIGHT_PAD - width).min(anchor.x + LABEL_X_OFFSET);
            PlacedLabel {
                id: anchor.id,
                x,
                y,
                width,
                anchor_x: anchor.x,
                text: anchor.text.clone(),
            }
        })
        .collect()
}

/// Derive label anchors from the current series geometry and interaction
/// state.
///
/// The natural anchor is the last sample inside the visible hour range;
/// when a zoom leaves a series with no visible sample, its absolute last
/// sample anchors instead. Series hidden by the selection, or too short to
/// draw, produce no anchor. `project` maps (hour, value) to pixels.
pub fn anchors_from_series(
    series: &[Series],
    state: &ChartState,
    viewport: &Viewport,
    project: impl Fn(f64, f64) -> (f64, f64),
) -> Vec<Anchor> {
    let mut anchors = Vec::new();
    for (id, s) in series.iter().enumerate() {
        if !state.is_active(id) || !s.is_drawable() {
            continue;
        }
        let endpoint = s
            .samples
            .iter()
            .rev()
            .find(|p| viewport.x.contains(p.hour))
            .or_else(|| s.samples.last());
        let Some(p) = endpoint else { continue };
        let (x, y) = project(p.hour, p.value);
        anchors.push(Anchor {
            id,
            x,
            y,
            text: s.name.clone(),
        });
    }
    anchors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn anchor(id: SeriesId, y: f64) -> Anchor {
        Anchor {
            id,
            x: 500.0,
            y,
            text: format!("monitor {id}"),
        }
    }

    fn bounds() -> LayoutBounds {
        LayoutBounds {
            top: 12.0,
            bottom: 400.0,
            right_edge: 760.0,
        }
    }

    #[test]
    fn close_pair_pushes_second_down() {
        let placed = layout(&[anchor(0, 100.0), anchor(1, 110.0)], bounds(), 40.0);
        assert_eq!(placed[0].y, 100.0);
        assert_eq!(placed[1].y, 140.0);
    }

    #[test]
    fn equal_y_keeps_input_order() {
        let placed = layout(&[anchor(7, 200.0), anchor(3, 200.0)], bounds(), 30.0);
        assert_eq!(placed[0].id, 7);
        assert_eq!(placed[1].id, 3);
    }
}
