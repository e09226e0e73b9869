//! Legend strip for the comparison chart: one pill per series showing its
//! dash pattern and marker, plus a reset entry. The same geometry backs
//! both drawing and hit testing so a host can route clicks to
//! legend-activate events.

use super::scene::{DrawCmd, HAlign, Scene, Stroke, VAlign};
use super::text::{estimate_text_width_px, truncate_to_width};
use super::{Rect, dash_segments};
use crate::models::{Rgb8, Series, SeriesId};
use crate::state::ChartState;

const PILL_H: f64 = 22.0;
const PILL_GAP: f64 = 8.0;
const PILL_PAD: f64 = 8.0;
const SWATCH_W: f64 = 44.0;
const FONT_PX: u32 = 12;
/// Longest a series name may render inside a pill before truncation.
const MAX_NAME_PX: u32 = 160;

const PILL_BORDER: Rgb8 = Rgb8::new(0x94, 0xa3, 0xb8);
const PILL_TEXT: Rgb8 = Rgb8::new(0x33, 0x41, 0x55);
const RESET_TEXT: Rgb8 = Rgb8::new(0x7f, 0x1d, 0x1d);

/// What a point in the legend strip refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegendHit {
    Series(SeriesId),
    Reset,
}

#[derive(Debug, Clone)]
pub(crate) struct LegendEntry {
    pub hit: LegendHit,
    pub rect: Rect,
    pub name: String,
}

/// Lay the pills out left to right inside `strip`.
pub(crate) fn entries(series: &[Series], strip: Rect) -> Vec<LegendEntry> {
    let mut out = Vec::new();
    let y = strip.y + (strip.height - PILL_H) / 2.0;
    let mut x = strip.x;
    for (id, s) in series.iter().enumerate() {
        let name = truncate_to_width(&s.name, FONT_PX, MAX_NAME_PX);
        let w = SWATCH_W + estimate_text_width_px(&name, FONT_PX) as f64 + PILL_PAD * 3.0;
        out.push(LegendEntry {
            hit: LegendHit::Series(id),
            rect: Rect {
                x,
                y,
                width: w,
                height: PILL_H,
            },
            name,
        });
        x += w + PILL_GAP;
    }
    let reset = "Reset graph".to_string();
    let w = estimate_text_width_px(&reset, FONT_PX) as f64 + PILL_PAD * 2.0;
    out.push(LegendEntry {
        hit: LegendHit::Reset,
        rect: Rect {
            x,
            y,
            width: w,
            height: PILL_H,
        },
        name: reset,
    });
    out
}

/// Resolve a pointer position inside the strip to a legend action.
pub fn hit(series: &[Series], strip: Rect, px: f64, py: f64) -> Option<LegendHit> {
    entries(series, strip)
        .into_iter()
        .find(|e| e.rect.contains(px, py))
        .map(|e| e.hit)
}

/// Emit the legend pills into the scene.
pub(crate) fn draw_legend(sc: &mut Scene, series: &[Series], state: &ChartState, strip: Rect) {
    for entry in entries(series, strip) {
        let r = entry.rect;
        match entry.hit {
            LegendHit::Series(id) => {
                let s = &series[id];
                let active = state.selection.contains(&id);
                let muted = !state.selection.is_empty() && !active;
                let alpha = if muted { 0.35 } else { 1.0 };

                sc.push(DrawCmd::StrokeRect {
                    x: r.x,
                    y: r.y,
                    width: r.width,
                    height: r.height,
                    stroke: Stroke::new(if active { s.color } else { PILL_BORDER }, 1.0)
                        .with_alpha(alpha),
                });

                // Swatch: a short line in the series' dash pattern with its
                // marker at the center.
                let sy = r.y + r.height / 2.0;
                let sx0 = r.x + PILL_PAD;
                let sx1 = sx0 + SWATCH_W - PILL_PAD;
                let stroke = Stroke::new(s.color, 2.0).with_alpha(alpha);
                let dash = s.effective_dash();
                if dash.is_empty() {
                    sc.push(DrawCmd::Line {
                        x0: sx0,
                        y0: sy,
                        x1: sx1,
                        y1: sy,
                        stroke,
                    });
                } else {
                    let sample = [(sx0, sy), (sx1, sy)];
                    for ((x0, y0), (x1, y1)) in dash_segments(&sample, dash) {
                        sc.push(DrawCmd::Line {
                            x0,
                            y0,
                            x1,
                            y1,
                            stroke,
                        });
                    }
                }
                sc.push(DrawCmd::Marker {
                    x: (sx0 + sx1) / 2.0,
                    y: sy,
                    radius: 3.5,
                    shape: s.marker,
                    color: s.color,
                });

                sc.push(DrawCmd::Text {
                    text: entry.name,
                    x: sx1 + PILL_PAD,
                    y: sy,
                    size_px: FONT_PX,
                    color: PILL_TEXT,
                    alpha,
                    h_align: HAlign::Left,
                    v_align: VAlign::Middle,
                });
            }
            LegendHit::Reset => {
                sc.push(DrawCmd::StrokeRect {
                    x: r.x,
                    y: r.y,
                    width: r.width,
                    height: r.height,
                    stroke: Stroke::new(RESET_TEXT, 1.0).with_alpha(0.8),
                });
                sc.push(DrawCmd::Text {
                    text: entry.name,
                    x: r.x + r.width / 2.0,
                    y: r.y + r.height / 2.0,
                    size_px: FONT_PX,
                    color: RESET_TEXT,
                    alpha: 1.0,
                    h_align: HAlign::Center,
                    v_align: VAlign::Middle,
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Sample;

    fn strip() -> Rect {
        Rect {
            x: 0.0,
            y: 0.0,
            width: 800.0,
            height: 30.0,
        }
    }

    fn two_series() -> Vec<Series> {
        vec![
            Series::new(
                "A",
                Rgb8::new(1, 2, 3),
                vec![Sample::new(0.0, 1.0), Sample::new(1.0, 2.0)],
            ),
            Series::new(
                "B",
                Rgb8::new(4, 5, 6),
                vec![Sample::new(0.0, 1.0), Sample::new(1.0, 2.0)],
            ),
        ]
    }

    #[test]
    fn pills_do_not_overlap_and_end_with_reset() {
        let es = entries(&two_series(), strip());
        assert_eq!(es.len(), 3);
        assert!(es[0].rect.right() < es[1].rect.x);
        assert_eq!(es.last().unwrap().hit, LegendHit::Reset);
    }

    #[test]
    fn hit_resolves_pill_centers() {
        let series = two_series();
        let es = entries(&series, strip());
        for e in &es {
            let cx = e.rect.x + e.rect.width / 2.0;
            let cy = e.rect.y + e.rect.height / 2.0;
            assert_eq!(hit(&series, strip(), cx, cy), Some(e.hit));
        }
        assert_eq!(hit(&series, strip(), 799.0, 15.0), None);
    }
}
