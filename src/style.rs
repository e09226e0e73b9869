//! Per-series style resolution.
//!
//! The original dashboards computed styling through callbacks evaluated at
//! draw time. Here every visual attribute is resolved once per render into
//! a plain record from (series, interaction state), and the drawing layer
//! consumes the records without consulting state again.

use crate::models::{MarkerShape, Rgb8, Series, SeriesId};
use crate::state::ChartState;

/// Default stroke width when nothing is focused.
const LINE_WIDTH_RESTING: f64 = 2.2;
/// Emphasized stroke width for selected series.
const LINE_WIDTH_FOCUSED: f64 = 3.2;
/// Marker radius when points are shown.
const POINT_RADIUS: f64 = 4.0;

/// Resolved visual attributes for one series in one render pass.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesStyleRecord {
    pub color: Rgb8,
    /// 0.0 hides the line entirely (non-selected series under focus).
    pub line_alpha: f64,
    pub line_width: f64,
    /// 0.0 suppresses markers.
    pub point_radius: f64,
    pub marker: MarkerShape,
    pub dash: Vec<u32>,
    /// Whether this series gets an end-of-line label.
    pub labeled: bool,
}

impl SeriesStyleRecord {
    pub fn line_visible(&self) -> bool {
        self.line_alpha > 0.0 && self.line_width > 0.0
    }
}

/// Resolve the style for one series under the current interaction state.
///
/// A non-empty selection hides non-selected series (alpha and width zero)
/// and emphasizes selected ones; with no selection all series render
/// uniformly. Point visibility follows `ChartState::points_visible`.
pub fn style_for(id: SeriesId, series: &Series, state: &ChartState) -> SeriesStyleRecord {
    let (line_alpha, line_width) = if state.selection.is_empty() {
        (1.0, LINE_WIDTH_RESTING)
    } else if state.selection.contains(&id) {
        (1.0, LINE_WIDTH_FOCUSED)
    } else {
        (0.0, 0.0)
    };

    SeriesStyleRecord {
        color: series.color,
        line_alpha,
        line_width,
        point_radius: if state.points_visible(id) {
            POINT_RADIUS
        } else {
            0.0
        },
        marker: series.marker,
        dash: series.effective_dash().to_vec(),
        labeled: state.is_active(id),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Sample;

    fn series() -> Series {
        Series::new(
            "m",
            Rgb8::new(0x60, 0xa5, 0xfa),
            vec![Sample::new(0.0, 10.0), Sample::new(1.0, 20.0)],
        )
    }

    #[test]
    fn resting_state_is_uniform_without_points() {
        let st = ChartState::new();
        let rec = style_for(0, &series(), &st);
        assert_eq!(rec.line_width, LINE_WIDTH_RESTING);
        assert_eq!(rec.point_radius, 0.0);
        assert!(rec.labeled);
    }

    #[test]
    fn selection_hides_and_emphasizes() {
        let mut st = ChartState::new();
        st.on_select_series(1);
        let muted = style_for(0, &series(), &st);
        assert!(!muted.line_visible());
        assert!(!muted.labeled);
        assert_eq!(muted.point_radius, 0.0);

        let focused = style_for(1, &series(), &st);
        assert_eq!(focused.line_width, LINE_WIDTH_FOCUSED);
        assert_eq!(focused.point_radius, POINT_RADIUS);
        assert!(focused.labeled);
    }

    #[test]
    fn hover_shows_points_on_everything() {
        let mut st = ChartState::new();
        st.on_pointer_enter();
        assert_eq!(style_for(0, &series(), &st).point_radius, POINT_RADIUS);
        assert_eq!(style_for(5, &series(), &st).point_radius, POINT_RADIUS);
    }

    #[test]
    fn degenerate_dash_resolves_solid() {
        let st = ChartState::new();
        let s = series().with_dash(vec![0, 4]);
        assert!(style_for(0, &s, &st).dash.is_empty());
    }
}
